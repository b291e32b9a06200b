use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::core::primitives::ParticipantEmail;
use crate::shell::errors::{HttpError, MessageResponse};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Query<SignUpParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Path(activity_name) = path?;
    let Query(params) = params?;
    let email = ParticipantEmail::parse(&params.email)?;

    let command = SignUpForActivity {
        activity_name: activity_name.clone(),
        email: email.clone(),
        requested_at: Utc::now().timestamp_millis(),
    };

    state.sign_up_handler.handle(command).await?;
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}
