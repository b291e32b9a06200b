pub mod v1 {
    pub mod participant_signed_up;
    pub mod participant_unregistered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RosterEvent {
    ParticipantSignedUpV1(v1::participant_signed_up::ParticipantSignedUpV1),
    ParticipantUnregisteredV1(v1::participant_unregistered::ParticipantUnregisteredV1),
}
