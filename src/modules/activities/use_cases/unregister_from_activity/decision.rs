use crate::modules::activities::core::events::RosterEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub enum Decision {
    Accepted { events: Vec<RosterEvent> },
    Rejected { reason: DecideError },
}
