//! HTTP response integration.
//!
//! The output boundary of the translator: a 422 response whose body is the
//! JSON array of localized messages, nothing more. Handlers can return a
//! `TranslatedErrors` directly.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::translator::translate::TranslatedErrors;

impl IntoResponse for TranslatedErrors {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.messages)).into_response()
    }
}
