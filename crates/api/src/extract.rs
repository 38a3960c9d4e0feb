//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer malformed input with a
//! plain-text body. These wrappers route the same rejections into the JSON
//! error envelope every other failure uses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body; a malformed or mistyped body becomes a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters; an unparsable segment becomes a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
