// main.rs
//
// Command line front end: build a tonewheel profile (or a single tooth) and
// write it as a DXF drawing.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tonewheel::float_types::Real;
use tonewheel::io::{DEFAULT_CENTER_BORE_RADIUS, ExportOptions};
use tonewheel::profile::DEFAULT_OUTPUT_DIR;
use tonewheel::{ProfileConfig, WaveShape, build_profile, build_tooth};

#[derive(Parser)]
#[command(name = "tonewheel", version)]
#[command(about = "Generate rippled tonewheel outlines as DXF drawings", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the full, closed wheel outline (default)
    Profile(ProfileArgs),
    /// Export the coarser, open tooth outline
    Tooth(ProfileArgs),
    /// List the supported wave shapes and their value ranges
    Waves,
}

#[derive(Args, Default)]
struct ProfileArgs {
    /// TOML file with profile parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Samples per surface cycle
    #[arg(long)]
    resolution: Option<usize>,

    /// Surface cycles per revolution
    #[arg(long)]
    cycles: Option<usize>,

    /// Nominal radius in mm
    #[arg(long)]
    radius: Option<Real>,

    /// Amplitude as a fraction of the radius
    #[arg(long)]
    amplitude: Option<Real>,

    /// Wave shape (see `tonewheel waves`)
    #[arg(short, long)]
    wave: Option<String>,

    /// Output file [default: DXFS/tonewheel_{wave}_r{radius}_{cycles}T.dxf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Radius of the center bore circle in mm
    #[arg(long, default_value_t = DEFAULT_CENTER_BORE_RADIUS)]
    bore_radius: Real,

    /// Leave out the point entity at the origin
    #[arg(long)]
    no_origin_marker: bool,

    /// Request a waveform preview (not available in this tool)
    #[arg(long)]
    preview: bool,
}

#[derive(Clone, Copy)]
enum Outline {
    Wheel,
    Tooth,
}

impl ProfileArgs {
    /// The flag defaults, as if `profile` had been given with no arguments.
    fn default_cli() -> Self {
        ProfileArgs {
            bore_radius: DEFAULT_CENTER_BORE_RADIUS,
            ..Default::default()
        }
    }

    /// Defaults, then the config file, then individual flags.
    fn resolve(&self) -> Result<ProfileConfig> {
        let mut config = match &self.config {
            Some(path) => ProfileConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ProfileConfig::default(),
        };

        if let Some(resolution) = self.resolution {
            config.resolution_per_cycle = resolution;
        }
        if let Some(cycles) = self.cycles {
            config.cycles_per_revolution = cycles;
        }
        if let Some(radius) = self.radius {
            config.nominal_radius = radius;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude_fraction = amplitude;
        }
        if let Some(tag) = &self.wave {
            config.wave_shape = tag.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    fn export_options(&self, outline: Outline) -> Result<ExportOptions> {
        if !self.bore_radius.is_finite() || self.bore_radius <= 0.0 {
            bail!("bore radius must be positive, got {}", self.bore_radius);
        }
        let base = match outline {
            Outline::Wheel => ExportOptions::default(),
            Outline::Tooth => ExportOptions::tooth(),
        };
        Ok(ExportOptions {
            center_bore_radius: self.bore_radius,
            include_origin_marker: !self.no_origin_marker,
            ..base
        })
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(format!("tonewheel={level}")),
        )
        .init();
    } else {
        env_logger::init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Profile(args)) => generate(&args, Outline::Wheel)?,
        Some(Commands::Tooth(args)) => generate(&args, Outline::Tooth)?,
        Some(Commands::Waves) => list_waves(),
        None => generate(&ProfileArgs::default_cli(), Outline::Wheel)?,
    }

    Ok(())
}

fn generate(args: &ProfileArgs, outline: Outline) -> Result<()> {
    let config = args.resolve()?;
    let options = args.export_options(outline)?;

    if args.preview {
        log::warn!("--preview was given but waveform previews are not rendered by this tool");
    }

    let (contour, default_path) = match outline {
        Outline::Wheel => (build_profile(&config)?, config.default_output_path()),
        Outline::Tooth => (build_tooth(&config)?, config.default_tooth_output_path()),
    };

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            // Only the default location is created on demand
            fs::create_dir_all(DEFAULT_OUTPUT_DIR)
                .with_context(|| format!("creating {DEFAULT_OUTPUT_DIR}/"))?;
            default_path
        },
    };

    tonewheel::io::dxf::export(contour, &options, &output)
        .with_context(|| format!("exporting {}", output.display()))?;

    println!("Produced tonewheel file: {}", output.display());
    Ok(())
}

fn list_waves() {
    for shape in WaveShape::ALL {
        let (lo, hi) = shape.bounds();
        println!("{:<14} [{lo:.4}, {hi:.4}]", shape.tag());
    }
}
