//! Generation and export errors

use std::path::PathBuf;

/// All the ways a tonewheel run can fail.
///
/// Every variant is terminal for the run that produced it: generation is
/// deterministic, so retrying with the same inputs fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum TonewheelError {
    /// (InvalidWaveformKind) The wave tag does not name a known wave shape
    #[error("(InvalidWaveformKind) Unknown wave shape '{0}', expected one of: {valid}", valid = crate::waveform::WaveShape::tags())]
    InvalidWaveformKind(String),

    /// (InvalidConfiguration) A profile or sampling parameter is out of range
    #[error("(InvalidConfiguration) {0}")]
    InvalidConfiguration(String),

    /// (ExportWriteError) The destination could not be written
    #[error("(ExportWriteError) Could not write {path:?}: {source}")]
    ExportWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing could not be serialized or parsed
    #[cfg(feature = "dxf-io")]
    #[error("(DxfEncoding) {0}")]
    DxfEncoding(#[from] dxf::DxfError),
}

impl TonewheelError {
    pub(crate) fn export_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TonewheelError::ExportWriteError {
            path: path.into(),
            source,
        }
    }
}
