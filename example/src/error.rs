use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    InvalidForbiddenPair(String),
    BatchError(batchgen::Error),
    JsonError(serde_json::Error),
    IoError(io::Error),
}

impl std::error::Error for Error {}

impl From<batchgen::Error> for Error {
    fn from(e: batchgen::Error) -> Self {
        Error::BatchError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonError(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidForbiddenPair(value) => write!(
                f,
                "Forbidden pair \"{}\" is not in the ORIGINAL=REPLACEMENT[=STATUS] form",
                value
            ),
            Error::BatchError(e) => write!(f, "{}", e),
            Error::JsonError(e) => write!(f, "{}", e),
            Error::IoError(e) => write!(f, "{}", e),
        }
    }
}
