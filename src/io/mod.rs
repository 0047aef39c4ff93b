//! Writing contours to disk.
//!
//! Format writers are behind cargo feature-flags. Every writer renders the
//! whole document in memory first and hands it to [`write_atomically`], so an
//! export either replaces the destination completely or leaves it untouched.

#[cfg(feature = "dxf-io")]
pub mod dxf;

use crate::errors::TonewheelError;
use crate::float_types::Real;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Radius of the center bore drawn around the origin (5.75 mm diameter).
pub const DEFAULT_CENTER_BORE_RADIUS: Real = 5.75 / 2.0;

/// What goes into an exported drawing besides the outline itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Radius of the circle drawn at the origin.
    pub center_bore_radius: Real,
    /// Emit a point entity at the origin.
    pub include_origin_marker: bool,
    /// Connect the last outline point back to the first.
    pub closed: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            center_bore_radius: DEFAULT_CENTER_BORE_RADIUS,
            include_origin_marker: true,
            closed: true,
        }
    }
}

impl ExportOptions {
    /// Options for a single tooth: identical to the wheel but left open.
    pub fn tooth() -> Self {
        ExportOptions {
            closed: false,
            ..Default::default()
        }
    }
}

/// Replace `path` with `bytes`, or fail without touching it.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`. On any failure the temporary file is removed
/// when it is dropped, and a missing parent directory is an error rather than
/// something created on the caller's behalf.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), TonewheelError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged =
        NamedTempFile::new_in(parent).map_err(|e| TonewheelError::export_write(path, e))?;
    staged
        .write_all(bytes)
        .map_err(|e| TonewheelError::export_write(path, e))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| TonewheelError::export_write(path, e))?;
    staged
        .persist(path)
        .map_err(|e| TonewheelError::export_write(path, e.error))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
