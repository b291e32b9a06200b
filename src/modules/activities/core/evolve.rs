use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(mut activity: Activity, event: RosterEvent) -> Activity {
    match event {
        RosterEvent::ParticipantSignedUpV1(e) => {
            if !activity.is_registered(&e.email) {
                activity.participants.push(e.email);
            }
        }
        RosterEvent::ParticipantUnregisteredV1(e) => {
            activity.participants.retain(|p| p != &e.email);
        }
    }
    activity
}
