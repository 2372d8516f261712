//! Quest Definition Structures
//!
//! Live quest state as supplied by the host game's quest tracker.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// Step shown when a quest has no current objective
pub const COMPLETED_STEP_TEXT: &str = "Quest completed";
/// Zone shown when the current zone is not known
pub const UNKNOWN_ZONE: &str = "Unknown";

/// Objective types supported by the quest guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveType {
    /// Talk to an NPC
    TalkTo,
    /// Kill X enemies
    Kill,
    /// Collect X items
    Collect,
    /// Go to a location
    GoTo,
    /// Turn the quest in
    TurnIn,
    /// Interact with an object
    Interact,
    /// Discover a location
    Explore,
}

impl ObjectiveType {
    /// Whether progress is tracked with a counter
    pub fn is_counted(&self) -> bool {
        matches!(self, ObjectiveType::Kill | ObjectiveType::Collect)
    }
}

/// Status of a quest. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestStatus {
    /// Quest is active
    Active,
    /// Quest is done but not turned in
    Completed,
    /// Quest fully finished
    TurnedIn,
}

/// A single quest objective/step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub description: String,
    pub objective_type: ObjectiveType,
    /// World position of the target, `Vec3::ZERO` when unknown
    pub target_position: Vec3,
    pub target_npc_name: Option<String>,
    pub zone_name: Option<String>,
    pub required_item: Option<String>,
    pub required_amount: u32,
    pub current_amount: u32,
    pub is_completed: bool,
}

impl Objective {
    pub fn new(objective_type: ObjectiveType, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            objective_type,
            target_position: Vec3::ZERO,
            target_npc_name: None,
            zone_name: None,
            required_item: None,
            required_amount: 0,
            current_amount: 0,
            is_completed: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.target_position = position;
        self
    }

    pub fn with_npc(mut self, npc: impl Into<String>) -> Self {
        self.target_npc_name = Some(npc.into());
        self
    }

    pub fn in_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone_name = Some(zone.into());
        self
    }

    pub fn requiring(mut self, item: Option<&str>, amount: u32) -> Self {
        self.required_item = item.map(str::to_string);
        self.required_amount = amount;
        self
    }

    /// Progress text for the tracker: "3/10" for counted objectives
    pub fn progress_text(&self) -> String {
        if self.objective_type.is_counted() {
            return format!("{}/{}", self.current_amount, self.required_amount);
        }

        if self.is_completed {
            "Complete".to_string()
        } else {
            "In Progress".to_string()
        }
    }

    /// Whether the target position is known
    pub fn has_target_position(&self) -> bool {
        self.target_position != Vec3::ZERO
    }

    /// Add to the counter, clamped to the required amount. Returns true if newly completed.
    pub fn add_progress(&mut self, amount: u32) -> bool {
        if self.is_completed || !self.objective_type.is_counted() {
            return false;
        }
        self.current_amount = self
            .current_amount
            .saturating_add(amount)
            .min(self.required_amount);
        if self.current_amount >= self.required_amount {
            self.is_completed = true;
            true
        } else {
            false
        }
    }
}

/// A quest and its ordered objectives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quest {
    pub quest_id: i32,
    /// Also the key into the knowledge store
    pub name: String,
    pub description: String,
    pub level: i32,
    objectives: Vec<Objective>,
    /// Index into `objectives`
    current_objective: Option<usize>,
    status: QuestStatus,
}

impl Quest {
    /// Create an active quest. The first incomplete objective becomes current.
    pub fn new(quest_id: i32, name: impl Into<String>, objectives: Vec<Objective>) -> Self {
        let mut quest = Self {
            quest_id,
            name: name.into(),
            description: String::new(),
            level: 0,
            objectives,
            current_objective: None,
            status: QuestStatus::Active,
        };
        quest.current_objective = quest.next_incomplete();
        if quest.current_objective.is_none() {
            quest.status = QuestStatus::Completed;
        }
        quest
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    pub fn current_objective(&self) -> Option<&Objective> {
        self.current_objective.map(|i| &self.objectives[i])
    }

    pub fn current_objective_index(&self) -> Option<usize> {
        self.current_objective
    }

    /// Position the player should go to for the current objective
    pub fn current_objective_position(&self) -> Vec3 {
        self.current_objective()
            .map(|o| o.target_position)
            .unwrap_or(Vec3::ZERO)
    }

    /// Readable description of the current step
    pub fn current_step_description(&self) -> &str {
        self.current_objective()
            .map(|o| o.description.as_str())
            .unwrap_or(COMPLETED_STEP_TEXT)
    }

    /// Map/zone name for the current objective
    pub fn current_zone(&self) -> &str {
        self.current_objective()
            .and_then(|o| o.zone_name.as_deref())
            .unwrap_or(UNKNOWN_ZONE)
    }

    /// Point the quest at a specific objective, as reported by the host
    pub fn set_current_objective(&mut self, index: usize) -> Result<(), GuideError> {
        if index >= self.objectives.len() {
            return Err(GuideError::ObjectiveOutOfRange {
                quest: self.name.clone(),
                index,
                len: self.objectives.len(),
            });
        }
        self.current_objective = Some(index);
        Ok(())
    }

    /// Move the status forward. Regressions are rejected, same-status is a no-op.
    pub fn set_status(&mut self, status: QuestStatus) -> Result<(), GuideError> {
        if status < self.status {
            return Err(GuideError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        if status == QuestStatus::TurnedIn {
            self.current_objective = None;
        }
        self.status = status;
        Ok(())
    }

    /// Mark the quest turned in
    pub fn turn_in(&mut self) -> Result<(), GuideError> {
        if self.status != QuestStatus::Completed {
            return Err(GuideError::InvalidTransition {
                from: self.status,
                to: QuestStatus::TurnedIn,
            });
        }
        self.current_objective = None;
        self.status = QuestStatus::TurnedIn;
        Ok(())
    }

    /// Complete the current objective and advance to the next incomplete one.
    /// Returns false if there was no current objective.
    pub fn complete_current_objective(&mut self) -> bool {
        let Some(index) = self.current_objective else {
            return false;
        };
        self.objectives[index].is_completed = true;
        self.advance();
        true
    }

    /// Add counter progress to the current objective. Returns true if it completed.
    pub fn record_progress(&mut self, amount: u32) -> bool {
        let Some(index) = self.current_objective else {
            return false;
        };
        if self.objectives[index].add_progress(amount) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) {
        self.current_objective = self.next_incomplete();
        if self.current_objective.is_none() && self.status == QuestStatus::Active {
            self.status = QuestStatus::Completed;
        }
    }

    fn next_incomplete(&self) -> Option<usize> {
        self.objectives.iter().position(|o| !o.is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compass_quest() -> Quest {
        Quest::new(
            7,
            "Underloft Compass",
            vec![
                Objective::new(ObjectiveType::Collect, "Retrieve the Underloft Compass")
                    .requiring(Some("Underloft Compass"), 1)
                    .at(Vec3::new(12.0, 0.0, 40.0))
                    .in_zone("Stowaway's Step"),
                Objective::new(ObjectiveType::TurnIn, "Return to Asaga Underloft")
                    .with_npc("Asaga Underloft")
                    .at(Vec3::new(-3.0, 0.0, 8.0))
                    .in_zone("Newhaven City"),
            ],
        )
    }

    #[test]
    fn test_progress_text() {
        let mut kill = Objective::new(ObjectiveType::Kill, "Slay rats").requiring(None, 10);
        kill.current_amount = 3;
        assert_eq!(kill.progress_text(), "3/10");

        let mut collect = Objective::new(ObjectiveType::Collect, "Gather herbs").requiring(None, 0);
        // Counted objectives render the counter even when flagged complete
        collect.is_completed = true;
        assert_eq!(collect.progress_text(), "0/0");

        let mut talk = Objective::new(ObjectiveType::TalkTo, "Speak with the guard");
        assert_eq!(talk.progress_text(), "In Progress");
        talk.is_completed = true;
        assert_eq!(talk.progress_text(), "Complete");
    }

    #[test]
    fn test_add_progress_clamps() {
        let mut obj = Objective::new(ObjectiveType::Kill, "Slay rats").requiring(None, 5);
        assert!(!obj.add_progress(3));
        assert_eq!(obj.current_amount, 3);

        assert!(obj.add_progress(10));
        assert_eq!(obj.current_amount, 5);
        assert!(obj.is_completed);

        // Can't add more after complete
        assert!(!obj.add_progress(1));
        assert_eq!(obj.current_amount, 5);
    }

    #[test]
    fn test_uncounted_objective_ignores_progress() {
        let mut obj = Objective::new(ObjectiveType::GoTo, "Reach the docks");
        assert!(!obj.add_progress(1));
        assert!(!obj.is_completed);
    }

    #[test]
    fn test_current_accessors() {
        let quest = compass_quest();
        assert_eq!(quest.current_objective_index(), Some(0));
        assert_eq!(quest.current_step_description(), "Retrieve the Underloft Compass");
        assert_eq!(quest.current_zone(), "Stowaway's Step");
        assert_eq!(quest.current_objective_position(), Vec3::new(12.0, 0.0, 40.0));
    }

    #[test]
    fn test_fallbacks_without_current_objective() {
        let quest = Quest::new(1, "Empty", Vec::new());
        assert!(quest.current_objective().is_none());
        assert_eq!(quest.current_step_description(), COMPLETED_STEP_TEXT);
        assert_eq!(quest.current_zone(), UNKNOWN_ZONE);
        assert_eq!(quest.current_objective_position(), Vec3::ZERO);
        assert_eq!(quest.status(), QuestStatus::Completed);
    }

    #[test]
    fn test_missing_zone_reads_unknown() {
        let quest = Quest::new(2, "Rats", vec![Objective::new(ObjectiveType::Kill, "Slay rats")]);
        assert_eq!(quest.current_zone(), UNKNOWN_ZONE);
    }

    #[test]
    fn test_progression_completes_quest() {
        let mut quest = compass_quest();

        assert!(quest.record_progress(1));
        assert_eq!(quest.current_objective_index(), Some(1));
        assert_eq!(quest.status(), QuestStatus::Active);

        assert!(quest.complete_current_objective());
        assert!(quest.current_objective().is_none());
        assert_eq!(quest.status(), QuestStatus::Completed);
        assert!(!quest.complete_current_objective());

        quest.turn_in().unwrap();
        assert_eq!(quest.status(), QuestStatus::TurnedIn);
    }

    #[test]
    fn test_status_never_regresses() {
        let mut quest = compass_quest();
        quest.set_status(QuestStatus::Completed).unwrap();
        quest.set_status(QuestStatus::Completed).unwrap();

        assert!(matches!(
            quest.set_status(QuestStatus::Active),
            Err(GuideError::InvalidTransition { .. })
        ));
        assert_eq!(quest.status(), QuestStatus::Completed);
    }

    #[test]
    fn test_turned_in_status_clears_current_objective() {
        let mut quest = compass_quest();
        quest.set_status(QuestStatus::TurnedIn).unwrap();

        assert_eq!(quest.status(), QuestStatus::TurnedIn);
        assert!(quest.current_objective().is_none());
        assert_eq!(quest.current_step_description(), COMPLETED_STEP_TEXT);
    }

    #[test]
    fn test_turn_in_requires_completed() {
        let mut quest = compass_quest();
        assert!(quest.turn_in().is_err());
        assert_eq!(quest.status(), QuestStatus::Active);
    }

    #[test]
    fn test_set_current_objective_bounds() {
        let mut quest = compass_quest();
        quest.set_current_objective(1).unwrap();
        assert_eq!(quest.current_step_description(), "Return to Asaga Underloft");

        assert!(matches!(
            quest.set_current_objective(2),
            Err(GuideError::ObjectiveOutOfRange { index: 2, len: 2, .. })
        ));
        assert_eq!(quest.current_objective_index(), Some(1));
    }
}
