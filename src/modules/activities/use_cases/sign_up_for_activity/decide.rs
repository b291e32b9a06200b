use crate::modules::activities::core::{
    activity::{Activity, CapacityPolicy},
    events::{RosterEvent, v1::participant_signed_up::ParticipantSignedUpV1},
};
use crate::modules::activities::use_cases::sign_up_for_activity::{
    command::SignUpForActivity,
    decision::{DecideError, Decision},
};

pub fn decide_sign_up(
    activity: &Activity,
    command: SignUpForActivity,
    capacity: CapacityPolicy,
) -> Decision {
    if activity.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    if capacity == CapacityPolicy::Enforced && activity.is_full() {
        return Decision::Rejected {
            reason: DecideError::ActivityFull,
        };
    }
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantSignedUpV1(ParticipantSignedUpV1 {
            activity_name: command.activity_name,
            email: command.email,
            occurred_at: command.requested_at,
        })],
    }
}
