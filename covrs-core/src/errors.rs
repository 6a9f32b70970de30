use thiserror::Error;

/// Errors produced while parsing a range from its `start:end` text form.
#[derive(Error, Debug)]
pub enum RangeParseError {
    #[error("Missing ':' separator in range: {0}")]
    MissingSeparator(String),

    #[error("Invalid bound '{1}' in range: {0}")]
    InvalidBound(String, String),
}

/// Errors produced while reading a camera table from disk.
#[derive(Error, Debug)]
pub enum CameraArrayError {
    #[error("Can't read file: {0}")]
    FileRead(String),

    #[error("Error parsing camera: {0}")]
    CameraParse(String),

    #[error("Corrupted file. 0 cameras found in the file: {0}")]
    EmptyArray(String),

    #[error(transparent)]
    Range(#[from] RangeParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
