//! Knowledge Store
//!
//! Maps a quest name to curated walkthrough data. Built once during host
//! startup from the seed entries plus an optional knowledge document, then
//! shared read-only (wrap it in an `Arc` to hand it to several systems).

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use super::entry::{RawKnowledgeDocument, WikiQuestInfo};
use super::seed::seed_entries;
use crate::config::{GuideConfig, MatchMode, MergePolicy};
use crate::error::GuideError;

/// Number of stored names echoed to the log after a document load
const LOGGED_NAME_SAMPLE: usize = 5;

/// Append-only store of knowledge entries keyed by quest name
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    /// Entries in insertion order
    entries: IndexMap<String, WikiQuestInfo>,
    match_mode: MatchMode,
    initialized: bool,
}

impl KnowledgeStore {
    /// Create an empty store. Call `initialize` before exposing it to callers.
    pub fn new(match_mode: MatchMode) -> Self {
        Self {
            entries: IndexMap::new(),
            match_mode,
            initialized: false,
        }
    }

    /// Create and initialize a store from the guide configuration
    pub fn from_config(config: &GuideConfig, plugin_dir: &Path) -> Self {
        let mut store = Self::new(config.match_mode);
        store.initialize(config.merge_policy, &config.knowledge_path_in(plugin_dir));
        store
    }

    /// Load seed entries and the knowledge document in the order the merge
    /// policy dictates. Document failures are logged and never returned.
    pub fn initialize(&mut self, policy: MergePolicy, document_path: &Path) {
        if self.initialized {
            warn!("Knowledge store already initialized, ignoring repeated initialize");
            return;
        }

        match policy {
            MergePolicy::SeedFirst => {
                self.load_seed();
                self.load_document_or_warn(document_path);
            }
            MergePolicy::DocumentFirst => {
                self.load_document_or_warn(document_path);
                self.load_seed();
            }
        }

        self.initialized = true;
        info!("Knowledge store ready with {} quests", self.entries.len());
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn load_seed(&mut self) {
        let mut count = 0;
        for (name, info) in seed_entries() {
            if self.add_quest(name, info) {
                count += 1;
            }
        }
        debug!("Inserted {} seed quests", count);
    }

    fn load_document_or_warn(&mut self, path: &Path) {
        if let Err(e) = self.load_document(path) {
            warn!("Could not load quest knowledge: {}", e);
        }
    }

    /// Load entries from a knowledge document. A missing file is not an
    /// error and inserts nothing. Returns the number of entries inserted.
    pub fn load_document(&mut self, path: &Path) -> Result<usize, GuideError> {
        if !path.exists() {
            debug!("Knowledge document {:?} not found, using seed data only", path);
            return Ok(0);
        }

        info!("Loading quest knowledge from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document: RawKnowledgeDocument =
            serde_json::from_str(&content).map_err(|source| GuideError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let quests = document
            .quests
            .ok_or_else(|| GuideError::MissingQuestList(path.to_path_buf()))?;

        info!(
            "Loading {} quests from knowledge document (version {}, source {})",
            quests.len(),
            document.version.as_deref().unwrap_or("?"),
            document.source.as_deref().unwrap_or("?"),
        );

        let mut inserted = 0;
        for raw in &quests {
            let Some(name) = raw.name.as_deref() else {
                warn!("Skipping knowledge entry without a name");
                continue;
            };
            if self.add_quest(name, WikiQuestInfo::from_raw(raw)) {
                inserted += 1;
            }
        }

        info!(
            "Loaded {} of {} quests from knowledge document",
            inserted,
            quests.len()
        );
        self.log_name_sample();

        Ok(inserted)
    }

    fn log_name_sample(&self) {
        for name in self.entries.keys().take(LOGGED_NAME_SAMPLE) {
            info!("  - '{}'", name);
        }
        if self.entries.len() > LOGGED_NAME_SAMPLE {
            info!("  ... and {} more", self.entries.len() - LOGGED_NAME_SAMPLE);
        }
    }

    /// Insert an entry unless the name is already present (first write wins).
    /// Returns true if the entry was inserted.
    pub fn add_quest(&mut self, name: impl Into<String>, info: WikiQuestInfo) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            debug!("Quest '{}' already known, keeping existing entry", name);
            return false;
        }
        self.entries.insert(name, info);
        true
    }

    /// Find the entry for a quest name: exact key first, then the fuzzy
    /// match of the configured mode. Absence is an expected outcome.
    pub fn lookup(&self, quest_name: &str) -> Option<&WikiQuestInfo> {
        if let Some(info) = self.entries.get(quest_name) {
            return Some(info);
        }

        warn!(
            "No wiki data found for quest: '{}'. Available quests: {}",
            quest_name,
            self.entries.len()
        );

        let wanted = self.match_mode.normalize(quest_name);
        let (key, info) = self
            .entries
            .iter()
            .find(|(key, _)| self.match_mode.normalize(key) == wanted)?;

        info!("Found quest with fuzzy match: '{}' for '{}'", key, quest_name);
        Some(info)
    }

    /// Whether an entry exists under exactly this name
    pub fn has_entry(&self, quest_name: &str) -> bool {
        self.entries.contains_key(quest_name)
    }

    /// Stored names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MatchMode {
    /// Comparison key used by the fuzzy lookup
    fn normalize(&self, name: &str) -> String {
        match self {
            MatchMode::TrimCaseFold => name.trim().to_lowercase(),
            MatchMode::CollapseWhitespace => name
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase(),
        }
    }
}
