//! Quest Module
//!
//! Live quest model, current-step resolution, and the cached quest log with
//! tracking.

pub mod definition;
pub mod log;
pub mod resolver;

pub use definition::{Objective, ObjectiveType, Quest, QuestStatus, COMPLETED_STEP_TEXT, UNKNOWN_ZONE};
pub use log::{QuestLog, QuestSource};
pub use resolver::{resolve, Guidance, ResolvedObjective};
