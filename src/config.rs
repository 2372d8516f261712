//! Guide Configuration
//!
//! Deserialized from an optional TOML file. Every field has a default so an
//! empty or partial file is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::GuideError;
use crate::marker::DEFAULT_RELEVANCE_DISTANCE;

/// Default file name of the curated knowledge document
pub const DEFAULT_KNOWLEDGE_FILE: &str = "ErenshorQuestData.json";

/// How seed entries and knowledge document entries are merged.
///
/// Insertion is always first-write-wins; the policy picks which source is
/// inserted first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Seed entries load first and win on name collisions
    #[default]
    SeedFirst,
    /// Document entries load first and win on name collisions
    DocumentFirst,
}

/// Key comparison used by the fuzzy fallback of a lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Outer whitespace trimmed, case folded
    #[default]
    TrimCaseFold,
    /// Like `TrimCaseFold`, and runs of inner whitespace count as one space
    CollapseWhitespace,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub enabled: bool,
    /// Markers farther than this from the player are destroyed
    pub relevance_distance: f32,
    /// Minimum time between marker syncs with the host, in seconds
    pub update_interval_secs: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            relevance_distance: DEFAULT_RELEVANCE_DISTANCE,
            update_interval_secs: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Time between quest list refreshes, in seconds
    pub refresh_interval_secs: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Knowledge document path, relative paths resolve against the plugin directory
    pub knowledge_path: PathBuf,
    pub merge_policy: MergePolicy,
    pub match_mode: MatchMode,
    pub markers: MarkerConfig,
    pub tracker: TrackerConfig,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_FILE),
            merge_policy: MergePolicy::default(),
            match_mode: MatchMode::default(),
            markers: MarkerConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from a TOML file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, GuideError> {
        if !path.exists() {
            debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| GuideError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GuideConfig = toml::from_str(&content).map_err(|source| GuideError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded guide config from {:?} (merge policy {:?}, match mode {:?})",
            path, config.merge_policy, config.match_mode
        );
        Ok(config)
    }

    /// Resolve the knowledge document path against the plugin directory
    pub fn knowledge_path_in(&self, plugin_dir: &Path) -> PathBuf {
        if self.knowledge_path.is_absolute() {
            self.knowledge_path.clone()
        } else {
            plugin_dir.join(&self.knowledge_path)
        }
    }
}
