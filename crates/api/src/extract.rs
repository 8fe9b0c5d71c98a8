//! Extractors whose rejections render as JSON `AppError` responses.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies and a mix of
//! 400/415/422 statuses. These wrappers funnel every rejection through
//! [`AppError::BadRequest`] so clients always receive `{"error": ...}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
