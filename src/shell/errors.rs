use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::modules::activities::adapters::outbound::activity_store::ActivityStoreError;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::ParticipantEmailError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// An error on its way out to the client as `{"detail": ...}`.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub detail: String,
}

impl HttpError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ActivityNotFound
            | ApplicationError::Store(ActivityStoreError::UnknownActivity(_)) => {
                Self::new(StatusCode::NOT_FOUND, "Activity not found")
            }
            ApplicationError::Domain(reason) => Self::new(StatusCode::BAD_REQUEST, reason),
            ApplicationError::Store(ActivityStoreError::VersionMismatch { expected, actual }) => {
                warn!(expected, actual, "roster changed between load and append");
                Self::new(
                    StatusCode::CONFLICT,
                    "Activity roster changed concurrently, please retry",
                )
            }
            ApplicationError::Store(err @ ActivityStoreError::Backend(_)) => {
                error!(error = %err, "activity store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<ParticipantEmailError> for HttpError {
    fn from(err: ParticipantEmailError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid email: {err}"))
    }
}
