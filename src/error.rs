use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Text generation error: {0}")]
    Llm(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Online comparison error: {0}")]
    Online(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error conversions
impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn text<S: Into<String>>(msg: S) -> Self {
        Error::TextProcessing(msg.into())
    }

    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Error::Llm(msg.into())
    }

    pub fn online<S: Into<String>>(msg: S) -> Self {
        Error::Online(msg.into())
    }
}

impl From<crate::parser::ParserError> for Error {
    fn from(err: crate::parser::ParserError) -> Self {
        match err {
            crate::parser::ParserError::IoError(e) => Error::Io(e),
            crate::parser::ParserError::InvalidText(e) => Error::TextProcessing(e),
            crate::parser::ParserError::Unsupported(e) => Error::Extraction(e),
        }
    }
}
