use crate::shared::core::primitives::ParticipantEmail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: ParticipantEmail,
    pub requested_at: i64,
}
