//! Library error types

use thiserror::Error;

/// Contract violations raised by chrome components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    #[error("visibility transition expects exactly one child element, got {0}")]
    ChildCount(usize),

    #[error("unknown theme mode: {0} (expected \"light\" or \"dark\")")]
    InvalidThemeMode(String),
}

pub type Result<T> = std::result::Result<T, ChromeError>;
