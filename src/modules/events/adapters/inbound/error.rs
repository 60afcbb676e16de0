//! HTTP error mapping for the events routes.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::application::errors::ApplicationError;

pub const NOT_FOUND_DETAIL: &str = "Evento não encontrado";
pub const MIRROR_FAILURE_DETAIL: &str = "Falha ao gravar eventos";
pub const RENDER_FAILURE_DETAIL: &str = "Falha ao renderizar página";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl HttpError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_DETAIL)
    }

    /// Malformed or incomplete input rejected before reaching the handler.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(reason) => {
                tracing::warn!(%reason, "Event lookup missed");
                HttpError::not_found()
            }
            ApplicationError::Mirror(_) => {
                HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, MIRROR_FAILURE_DETAIL)
            }
        }
    }
}

impl From<minijinja::Error> for HttpError {
    fn from(err: minijinja::Error) -> Self {
        tracing::error!(error = %err, "Page rendering failed");
        HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_DETAIL)
    }
}

macro_rules! validation_from_rejection {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for HttpError {
                fn from(rejection: $rejection) -> Self {
                    HttpError::validation(rejection.body_text())
                }
            }
        )+
    };
}

validation_from_rejection!(JsonRejection, QueryRejection, PathRejection, FormRejection);
