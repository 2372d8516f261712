//! Knowledge Entry Structures
//!
//! The knowledge document is JSON produced by the offline curation tooling.
//! Any field of an entry may be null or missing.

use serde::{Deserialize, Serialize};

/// Knowledge document as it appears on disk
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKnowledgeDocument {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// `None` when the list is null or missing
    #[serde(default)]
    pub quests: Option<Vec<RawKnowledgeEntry>>,
}

/// Raw quest entry as it appears in the document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKnowledgeEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub npc: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub objectives: Option<Vec<String>>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub rewards: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Curated walkthrough data for one quest. Never mutated once stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WikiQuestInfo {
    pub giver_npc: String,
    pub giver_location: String,
    /// Human-authored steps, not aligned with the live quest objectives
    pub objectives: Vec<String>,
    pub instructions: String,
    pub reward_info: String,
    pub notes: String,
}

impl WikiQuestInfo {
    pub fn from_raw(raw: &RawKnowledgeEntry) -> Self {
        Self {
            giver_npc: raw.npc.clone().unwrap_or_default(),
            giver_location: raw.location.clone().unwrap_or_default(),
            objectives: raw.objectives.clone().unwrap_or_default(),
            instructions: raw.instructions.clone().unwrap_or_default(),
            reward_info: raw.rewards.clone().unwrap_or_default(),
            notes: raw.notes.clone().unwrap_or_default(),
        }
    }
}
