//! Generate **tonewheel** outlines: circles whose radius ripples with a periodic
//! wave, exported as DXF drawings for laser cutting or machining.
//!
//! The pipeline is
//! [sampling](domain) → [wave evaluation](waveform) → [polar projection](profile) → [export](io).
//!
//! ```no_run
//! use tonewheel::{ProfileConfig, WaveShape, build_profile, io::ExportOptions};
//!
//! # fn main() -> Result<(), tonewheel::errors::TonewheelError> {
//! let config = ProfileConfig::new(100, 50, 20.0, 0.05, WaveShape::Square)?;
//! let contour = build_profile(&config)?;
//! tonewheel::io::dxf::export(contour, &ExportOptions::default(), config.default_output_path())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export and read-back
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod domain;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod profile;
pub mod waveform;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use domain::{AngularDomain, SamplingPolicy, sample_domain};
pub use profile::{Contour, ProfileConfig, build_profile, build_tooth};
pub use waveform::WaveShape;
