//! Request body extractors.
//!
//! Axum's stock `Json` extractor rejects malformed bodies with its own status
//! codes (422 for type errors). The resource contract treats every malformed
//! payload as a validation failure, so handlers use `AppJson` instead, which
//! routes rejections through the application error mapping.

use axum::extract::FromRequest;

use crate::middleware::error_handling::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
