use crate::modules::activities::core::{
    activity::Activity,
    events::{RosterEvent, v1::participant_unregistered::ParticipantUnregisteredV1},
};
use crate::modules::activities::use_cases::unregister_from_activity::{
    command::UnregisterFromActivity,
    decision::{DecideError, Decision},
};

pub fn decide_unregister(activity: &Activity, command: UnregisterFromActivity) -> Decision {
    if !activity.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantUnregisteredV1(
            ParticipantUnregisteredV1 {
                activity_name: command.activity_name,
                email: command.email,
                occurred_at: command.requested_at,
            },
        )],
    }
}
