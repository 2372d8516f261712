//! Hand-curated entries that are always available, document or not.

use super::entry::WikiQuestInfo;

pub fn seed_entries() -> Vec<(&'static str, WikiQuestInfo)> {
    vec![(
        "Underloft Compass",
        WikiQuestInfo {
            giver_npc: "Asaga Underloft".to_string(),
            giver_location: "Newhaven City".to_string(),
            objectives: vec![
                "Retrieve the Underloft Compass".to_string(),
                "Return to Asaga Underloft".to_string(),
            ],
            instructions: "Find the compass and return it to Asaga in Newhaven City.".to_string(),
            reward_info: String::new(),
            notes: "Quest starter NPC".to_string(),
        },
    )]
}
