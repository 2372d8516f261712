use std::path::PathBuf;

use thiserror::Error;

use crate::quest::QuestStatus;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse knowledge document {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("knowledge document {0:?} has no quest list")]
    MissingQuestList(PathBuf),
    #[error("quest status cannot go from {from:?} to {to:?}")]
    InvalidTransition { from: QuestStatus, to: QuestStatus },
    #[error("objective index {index} out of range for quest '{quest}' ({len} objectives)")]
    ObjectiveOutOfRange {
        quest: String,
        index: usize,
        len: usize,
    },
}
