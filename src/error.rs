use thiserror::Error;

/// Errors produced while talking to the power supply.
///
/// The variants separate the four failure domains: client-side argument
/// validation (nothing hits the wire), faults reported by the instrument
/// itself, transport failures, and malformed responses.
#[derive(Error, Debug)]
pub enum SpdError {
    #[error("IO error: {context}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("timed out waiting for instrument response")]
    Timeout,
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// Argument rejected before any I/O. `code` is the stable error code
    /// the SPD3303X assigns to the parameter class.
    #[error("invalid parameter (code {code}): {message}")]
    Validation { code: &'static str, message: String },
    /// Fault reported by the instrument after a verified command.
    #[error("instrument error {code}: {message}")]
    Device { code: String, message: String },
    #[error("protocol error: {0}")]
    Protocol(String),
}
