use folio_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid engine tuning: {0}")]
    Tuning(#[from] ConfigError),

    #[error("index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no images to show")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, CoreError>;
