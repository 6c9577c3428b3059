use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiskError>;

#[derive(Error, Debug)]
pub enum DiskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data format error: {0}")]
    DataFormat(String),
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl DiskError {
    /// The filesystem could not be touched
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// The bytes were read fine but are not a valid compressed stream
    pub fn is_data_format(&self) -> bool {
        matches!(self, Self::DataFormat(_))
    }
}

impl From<flate2::DecompressError> for DiskError {
    fn from(e: flate2::DecompressError) -> Self {
        Self::DataFormat(e.to_string())
    }
}
