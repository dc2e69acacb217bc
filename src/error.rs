//! Error types for the gmdls library

/// Library error type for gmdls operations
#[derive(Debug, thiserror::Error)]
pub enum GmDlsError {
    /// Program number outside the General MIDI range
    #[error("program number {0} out of range (valid programs are 0-127)")]
    ProgramOutOfRange(u8),

    /// No General MIDI program carries the requested name
    #[error("unknown program name: {0:?}")]
    UnknownProgramName(String),
}
