use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::shared::core::primitives::ParticipantEmail;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// The catalog every process starts from.
pub fn seed_activities() -> ActivityCatalog {
    SEED.iter()
        .map(|seed| {
            let participants = seed
                .participants
                .iter()
                .filter_map(|raw| ParticipantEmail::parse(raw).ok())
                .collect();
            let activity = Activity::new(seed.description, seed.schedule, seed.max_participants)
                .with_participants(participants);
            (seed.name.to_string(), activity)
        })
        .collect()
}
