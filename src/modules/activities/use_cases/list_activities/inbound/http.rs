use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use crate::modules::activities::core::activity::ActivityCatalog;
use crate::shell::errors::HttpError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<ActivityCatalog>, HttpError> {
    match state.queries.list_all().await {
        Ok(activities) => Ok(Json(activities)),
        Err(err) => {
            error!(error = %err, "failed to list activities");
            Err(HttpError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ))
        }
    }
}
