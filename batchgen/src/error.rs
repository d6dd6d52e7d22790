use hyper::http;
use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnsupportedMethod(String),
    ConflictingBodies,
    InvalidUrl(url::ParseError),
    Json(serde_json::Error),
    InvalidPattern(regex::Error),
    InvalidHeaderName,
    InvalidHeaderValue,
    HttpError(http::Error),
    Executor(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedMethod(method) => {
                write!(f, "The method \"{}\" has no known good status code", method)
            }
            Error::ConflictingBodies => write!(
                f,
                "A request template can have either a json or a data body, not both"
            ),
            Error::InvalidUrl(e) => write!(f, "Invalid url: {}", e),
            Error::Json(e) => write!(f, "Json error: {}", e),
            Error::InvalidPattern(e) => write!(f, "Invalid substitution pattern: {}", e),
            Error::InvalidHeaderName => write!(f, "Invalid header name"),
            Error::InvalidHeaderValue => write!(f, "Invalid header value"),
            Error::HttpError(e) => write!(f, "Http Error: {}", e),
            Error::Executor(message) => write!(f, "Executor error: {}", message),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::InvalidPattern(e)
    }
}

impl From<hyper::header::InvalidHeaderName> for Error {
    fn from(_: hyper::header::InvalidHeaderName) -> Self {
        Error::InvalidHeaderName
    }
}

impl From<hyper::header::InvalidHeaderValue> for Error {
    fn from(_: hyper::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::HttpError(e)
    }
}
