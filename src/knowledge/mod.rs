//! Quest Knowledge Module
//!
//! Curated walkthrough data (giver, location, steps) keyed by quest name,
//! seeded in code and supplemented from an external JSON document.

pub mod entry;
pub mod seed;
pub mod store;

pub use entry::{RawKnowledgeDocument, RawKnowledgeEntry, WikiQuestInfo};
pub use store::KnowledgeStore;
