//! Error types for the Tavola client
//!
//! - `ApiError`: transport and server-side failures from the REST API
//! - `InvalidRangeError`: rejected rating-filter ranges
//! - `ValidationError`: client-side form-model validation failures

use thiserror::Error;

/// Errors from talking to the Tavola REST API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("unauthorized - session missing or expired")]
    Unauthorized,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// A rating filter range that does not satisfy `0 <= min <= max <= 5`
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid rating range: {min}..{max} (must satisfy 0 <= min <= max <= 5)")]
pub struct InvalidRangeError {
    pub min: f32,
    pub max: f32,
}

/// Client-side validation failures for form models
///
/// Mirrors the constraints the server enforces so a bad request can be
/// rejected before it goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("img must be an http(s) URL")]
    InvalidUrl,

    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error(
        "password must contain a lowercase letter, an uppercase letter, a digit, and a special character"
    )]
    PasswordTooWeak,
}
