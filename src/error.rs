//! Error Types - one variant per rejectable condition
//!
//! Every request error maps 1:1 to an HTTP status and a fixed one-line
//! message; nothing here is retryable.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced while rendering or encoding a bitmap.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("size must be a multiple of 8")]
    InvalidSize,

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Gif(#[from] gif::EncodingError),
}

/// Errors produced while turning a request into a response.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unsupported file format")]
    UnsupportedFormat,

    #[error("invalid size")]
    InvalidSizeFormat,

    #[error("unsupported mirror axis: {0}")]
    UnsupportedMirrorAxis(char),

    #[error("duplicate mirror axis: {0}")]
    DuplicateMirrorAxis(char),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl RequestError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedFormat => StatusCode::NOT_FOUND,
            Self::InvalidSizeFormat
            | Self::UnsupportedMirrorAxis(_)
            | Self::DuplicateMirrorAxis(_)
            | Self::Render(RenderError::InvalidSize) => StatusCode::BAD_REQUEST,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
