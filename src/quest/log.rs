//! Quest Log
//!
//! Cached copy of the player's quests as reported by the host, refreshed on
//! an interval. The tracked quest is remembered by id so it survives a
//! refresh replacing every cached quest.

use tracing::{debug, info};

use super::definition::Quest;
use crate::config::TrackerConfig;

/// Host capability supplying the player's current quests
pub trait QuestSource {
    fn current_quests(&self) -> Vec<Quest>;
}

#[derive(Debug)]
pub struct QuestLog {
    quests: Vec<Quest>,
    tracked_quest_id: Option<i32>,
    refresh_interval_secs: f64,
    /// Host time of the last refresh, in seconds
    last_refresh: Option<f64>,
}

impl QuestLog {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            quests: Vec::new(),
            tracked_quest_id: None,
            refresh_interval_secs: config.refresh_interval_secs,
            last_refresh: None,
        }
    }

    /// Refresh if the interval has elapsed, or if the log was never filled.
    /// Returns true if a refresh ran.
    pub fn update(&mut self, now: f64, source: &impl QuestSource) -> bool {
        if let Some(last) = self.last_refresh {
            if now - last <= self.refresh_interval_secs {
                return false;
            }
        }
        self.refresh(now, source);
        true
    }

    /// Replace the cached quests immediately
    pub fn refresh(&mut self, now: f64, source: &impl QuestSource) {
        self.quests = source.current_quests();
        self.last_refresh = Some(now);
        debug!("Quest log refreshed: {} quests", self.quests.len());
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get_by_id(&self, quest_id: i32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.quest_id == quest_id)
    }

    /// Track a quest from the log. Returns false if it is not in the log.
    pub fn track(&mut self, quest_id: i32) -> bool {
        let Some(quest) = self.get_by_id(quest_id) else {
            return false;
        };
        info!("Now tracking quest: {} (ID: {})", quest.name, quest_id);
        self.tracked_quest_id = Some(quest_id);
        true
    }

    pub fn untrack(&mut self) {
        if let Some(id) = self.tracked_quest_id.take() {
            info!("Stopped tracking quest {}", id);
        }
    }

    pub fn tracked_quest_id(&self) -> Option<i32> {
        self.tracked_quest_id
    }

    /// The tracked quest as currently cached. `None` while it is missing
    /// from the log; tracking resumes if it comes back.
    pub fn tracked(&self) -> Option<&Quest> {
        self.get_by_id(self.tracked_quest_id?)
    }
}
