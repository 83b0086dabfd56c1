use thiserror::Error;

pub type Result<T> = std::result::Result<T, HalError>;

#[derive(Debug, Error)]
pub enum HalError {
    #[error("seed store format error: {0}")]
    SeedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] wick_core::error::WickError),
}
