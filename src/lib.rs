//! Quest Guide
//!
//! Quest knowledge, objective resolution and world marker lifecycle for an
//! in-game quest guidance overlay. The host game supplies live quest state,
//! camera and player positions; this crate decides what the player should do
//! next and which markers should exist.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod marker;
pub mod quest;

pub use config::{GuideConfig, MarkerConfig, MatchMode, MergePolicy, TrackerConfig};
pub use error::GuideError;
pub use knowledge::{KnowledgeStore, WikiQuestInfo};
pub use marker::{MarkerController, MarkerKind, MarkerSet, MarkerSpawnRequest, ReferenceProvider};
pub use quest::{Guidance, Objective, ObjectiveType, Quest, QuestLog, QuestSource, QuestStatus};
