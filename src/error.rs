//! Error types for SeoScribe
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.
//!
//! The analysis core (extraction, density, scoring) is total over any string
//! input and therefore defines no error variants; only input validation and
//! the external collaborators (link scraper, article generator) can fail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// The main error type for SeoScribe operations
#[derive(Error, Debug)]
pub enum Error {
    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Link scraping errors
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Article generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Request validation errors
///
/// These reject a request before any scraping or generation work begins.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// No usable keyword was supplied
    #[error("at least one non-empty keyword is required")]
    NoKeywords,
}

/// Link scraping errors
///
/// These never cross the pipeline boundary: the scraper recovers locally and
/// degrades to a placeholder string. The variants exist so the recovery site
/// can log what actually went wrong.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP transport or status failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The page URL could not be parsed as a base for link resolution
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Article generation errors
#[derive(Error, Debug)]
pub enum GenerationError {
    /// HTTP transport failure reaching the generator
    #[error("generator request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The generator API answered with a non-success status
    #[error("generator API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        message: String,
    },

    /// The completion contained no message content
    #[error("generator response contained no content")]
    MissingContent,

    /// The message content was not the expected article JSON
    #[error("generator payload is not valid article JSON: {0}")]
    MalformedPayload(String),

    /// Missing or invalid generator configuration
    #[error("generator configuration error: {0}")]
    Config(String),
}

/// Result type alias for SeoScribe operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// HTTP status this error maps to at the API boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Generation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for failed requests
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation(ValidationError::NoKeywords);
        assert!(err.to_string().contains("at least one non-empty keyword"));
    }

    #[test]
    fn test_generation_api_error() {
        let err = GenerationError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::from(ValidationError::NoKeywords).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::from(GenerationError::MissingContent).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            Error::generic("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_into_response() {
        let response = Error::from(ValidationError::NoKeywords).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
