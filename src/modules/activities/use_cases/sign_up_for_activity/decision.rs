use crate::modules::activities::core::events::RosterEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

pub enum Decision {
    Accepted { events: Vec<RosterEvent> },
    Rejected { reason: DecideError },
}
