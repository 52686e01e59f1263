use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrectionError {
    #[error("Matrix title is empty or already present: {0:?}")]
    DuplicateTitle(String),

    #[error("Matrix {0:?} has non-finite coefficients")]
    InvalidMatrix(String),

    #[error("Matrix {0:?} is protected and cannot be removed")]
    ProtectedEntry(String),

    #[error("Malformed persisted entry {key}: {reason}")]
    MalformedPersistedEntry { key: String, reason: String },

    #[error("Settings store unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Invalid region geometry: x={x}, y={y}, width={width}, height={height}")]
    InvalidGeometry { x: i32, y: i32, width: i32, height: i32 },

    #[error("Mosaic buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("Unknown CFA pattern: {0:?}")]
    UnknownPattern(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode TIFF image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CorrectionError>;
