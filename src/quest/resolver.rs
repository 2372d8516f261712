//! Objective Resolution
//!
//! Turns a quest's current objective into what the overlay shows: where to
//! go, what to do, which zone. Joined with the knowledge store this also
//! yields the giver details and the marker to place.

use glam::Vec3;

use super::definition::{ObjectiveType, Quest};
use crate::knowledge::{KnowledgeStore, WikiQuestInfo};
use crate::marker::{MarkerKind, MarkerSpawnRequest};

/// Player-facing facts for the current step of a quest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedObjective<'a> {
    /// `Vec3::ZERO` when unknown or when the quest has no current objective
    pub position: Vec3,
    pub description: &'a str,
    pub zone: &'a str,
}

/// Resolve the current step. Never fails.
pub fn resolve(quest: &Quest) -> ResolvedObjective<'_> {
    ResolvedObjective {
        position: quest.current_objective_position(),
        description: quest.current_step_description(),
        zone: quest.current_zone(),
    }
}

/// A quest's current step together with its curated knowledge, if any
#[derive(Debug, Clone, Copy)]
pub struct Guidance<'a> {
    pub quest: &'a Quest,
    pub objective: ResolvedObjective<'a>,
    /// `None` when the store has nothing for this quest; show in-game text only
    pub knowledge: Option<&'a WikiQuestInfo>,
}

impl<'a> Guidance<'a> {
    pub fn for_quest(quest: &'a Quest, store: &'a KnowledgeStore) -> Self {
        Self {
            quest,
            objective: resolve(quest),
            knowledge: store.lookup(&quest.name),
        }
    }

    /// Quest giver from the knowledge entry, if recorded
    pub fn giver_npc(&self) -> Option<&'a str> {
        self.knowledge
            .map(|k| k.giver_npc.as_str())
            .filter(|npc| !npc.is_empty())
    }

    /// Giver location from the knowledge entry, if recorded
    pub fn giver_location(&self) -> Option<&'a str> {
        self.knowledge
            .map(|k| k.giver_location.as_str())
            .filter(|location| !location.is_empty())
    }

    /// Curated instructions, falling back to the in-game step text
    pub fn instructions(&self) -> &'a str {
        self.knowledge
            .map(|k| k.instructions.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(self.objective.description)
    }

    /// Progress text of the current objective
    pub fn progress_text(&self) -> Option<String> {
        self.quest.current_objective().map(|o| o.progress_text())
    }

    /// Marker for the current target, if it has a known position
    pub fn marker_request(&self) -> Option<MarkerSpawnRequest> {
        let objective = self.quest.current_objective()?;
        if !objective.has_target_position() {
            return None;
        }

        let kind = if objective.objective_type == ObjectiveType::TurnIn {
            MarkerKind::TurnIn
        } else {
            MarkerKind::Available
        };
        let key = objective
            .target_npc_name
            .clone()
            .unwrap_or_else(|| self.quest.name.clone());

        Some(MarkerSpawnRequest::new(key, objective.target_position, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use crate::quest::definition::{Objective, COMPLETED_STEP_TEXT, UNKNOWN_ZONE};

    fn store() -> KnowledgeStore {
        let mut store = KnowledgeStore::new(MatchMode::TrimCaseFold);
        store.add_quest(
            "Underloft Compass",
            WikiQuestInfo {
                giver_npc: "Asaga Underloft".to_string(),
                giver_location: "Newhaven City".to_string(),
                instructions: "Find the compass and return it to Asaga in Newhaven City.".to_string(),
                ..Default::default()
            },
        );
        store
    }

    fn compass_quest() -> Quest {
        Quest::new(
            7,
            "Underloft Compass",
            vec![
                Objective::new(ObjectiveType::Collect, "Retrieve the Underloft Compass")
                    .requiring(Some("Underloft Compass"), 1),
                Objective::new(ObjectiveType::TurnIn, "Return to Asaga Underloft")
                    .with_npc("Asaga Underloft")
                    .at(Vec3::new(-3.0, 0.0, 8.0))
                    .in_zone("Newhaven City"),
            ],
        )
    }

    #[test]
    fn test_resolve_current_step() {
        let mut quest = compass_quest();
        quest.set_current_objective(1).unwrap();

        let resolved = resolve(&quest);
        assert_eq!(resolved.position, Vec3::new(-3.0, 0.0, 8.0));
        assert_eq!(resolved.description, "Return to Asaga Underloft");
        assert_eq!(resolved.zone, "Newhaven City");
    }

    #[test]
    fn test_resolve_finished_quest() {
        let mut quest = compass_quest();
        quest.complete_current_objective();
        quest.complete_current_objective();

        let resolved = resolve(&quest);
        assert_eq!(resolved.position, Vec3::ZERO);
        assert_eq!(resolved.description, COMPLETED_STEP_TEXT);
        assert_eq!(resolved.zone, UNKNOWN_ZONE);
    }

    #[test]
    fn test_guidance_with_knowledge() {
        let store = store();
        let quest = compass_quest();
        let guidance = Guidance::for_quest(&quest, &store);

        assert_eq!(guidance.giver_npc(), Some("Asaga Underloft"));
        assert_eq!(guidance.giver_location(), Some("Newhaven City"));
        assert_eq!(
            guidance.instructions(),
            "Find the compass and return it to Asaga in Newhaven City."
        );
        assert_eq!(guidance.progress_text().as_deref(), Some("0/1"));
    }

    #[test]
    fn test_guidance_without_knowledge() {
        let store = store();
        let quest = Quest::new(
            9,
            "Rat Problem",
            vec![Objective::new(ObjectiveType::Kill, "Slay sewer rats").requiring(None, 10)],
        );
        let guidance = Guidance::for_quest(&quest, &store);

        assert!(guidance.knowledge.is_none());
        assert_eq!(guidance.giver_npc(), None);
        assert_eq!(guidance.instructions(), "Slay sewer rats");
    }

    #[test]
    fn test_marker_request() {
        let store = store();
        let mut quest = compass_quest();

        // First objective has no known position
        assert!(Guidance::for_quest(&quest, &store).marker_request().is_none());

        quest.record_progress(1);
        let request = Guidance::for_quest(&quest, &store).marker_request().unwrap();
        assert_eq!(request.key, "Asaga Underloft");
        assert_eq!(request.kind, MarkerKind::TurnIn);
        assert_eq!(request.position, Vec3::new(-3.0, 0.0, 8.0));

        quest.complete_current_objective();
        assert!(Guidance::for_quest(&quest, &store).marker_request().is_none());
    }

    #[test]
    fn test_marker_request_keyed_by_quest_without_npc() {
        let store = store();
        let quest = Quest::new(
            3,
            "Lost Shrine",
            vec![Objective::new(ObjectiveType::Explore, "Find the shrine").at(Vec3::new(5.0, 1.0, 5.0))],
        );

        let request = Guidance::for_quest(&quest, &store).marker_request().unwrap();
        assert_eq!(request.key, "Lost Shrine");
        assert_eq!(request.kind, MarkerKind::Available);
    }
}
