use crate::shared::core::primitives::ParticipantEmail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activities keyed by their exact, case-sensitive name.
pub type ActivityCatalog = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<ParticipantEmail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Signups past `max_participants` are accepted.
    #[default]
    Unenforced,
    Enforced,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, participants: Vec<ParticipantEmail>) -> Self {
        self.participants = participants;
        self
    }

    pub fn is_registered(&self, email: &ParticipantEmail) -> bool {
        self.participants.contains(email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}
