//! Request extractors whose rejections render as [`AppError`] JSON.
//!
//! They wrap axum's `Json`, `Query` and `Path`; a body, query string or path
//! segment that fails to parse becomes a 400 `INVALID_ARGUMENT` instead of
//! axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts, Path, Query};
use axum::Json;

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
