use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode PNG image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid value for `{key}`: \"{value}\"")]
    ParseError { key: String, value: String },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Failed to serialize sky descriptor: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub(crate) fn parse(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ParseError {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
