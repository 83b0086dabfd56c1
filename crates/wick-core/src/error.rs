use thiserror::Error;

pub type Result<T> = std::result::Result<T, WickError>;

#[derive(Debug, Error)]
pub enum WickError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),
}
