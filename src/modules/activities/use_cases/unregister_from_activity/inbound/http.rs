use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::ParticipantEmail;
use crate::shell::errors::{HttpError, MessageResponse};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Path(activity_name) = path?;
    let Query(params) = params?;
    let email = ParticipantEmail::parse(&params.email)?;

    let command = UnregisterFromActivity {
        activity_name: activity_name.clone(),
        email: email.clone(),
        requested_at: Utc::now().timestamp_millis(),
    };

    state.unregister_handler.handle(command).await?;
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
