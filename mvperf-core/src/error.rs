//! Error types for report and chart generation

use thiserror::Error;

/// Errors raised while rendering charts or writing output
#[derive(Error, Debug)]
pub enum Error {
    /// Drawing backend failure (font lookup, encoding, ...)
    #[error("render error: {0}")]
    Render(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected chart setting
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}

/// Result type for mvperf operations
pub type Result<T> = std::result::Result<T, Error>;
