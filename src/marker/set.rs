//! Live marker bookkeeping.
//!
//! Markers are keyed by their target (usually the NPC name). The host asks
//! for markers through spawn requests; syncing those requests is throttled,
//! ticking runs every frame.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::billboard::{
    Marker, MarkerController, MarkerKind, ReferenceProvider, TickOutcome, WorldAnchor,
};
use crate::config::MarkerConfig;

/// Request to place a marker, produced for the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpawnRequest {
    /// Target the marker belongs to
    pub key: String,
    pub position: Vec3,
    pub kind: MarkerKind,
}

impl MarkerSpawnRequest {
    pub fn new(key: impl Into<String>, position: Vec3, kind: MarkerKind) -> Self {
        Self {
            key: key.into(),
            position,
            kind,
        }
    }
}

struct LiveMarker<P: ReferenceProvider> {
    marker: Marker,
    controller: MarkerController<P>,
}

pub struct MarkerSet<P: ReferenceProvider> {
    markers: HashMap<String, LiveMarker<P>>,
    config: MarkerConfig,
    /// Host time of the last sync, in seconds
    last_sync: Option<f64>,
}

impl<P: ReferenceProvider> MarkerSet<P> {
    pub fn new(config: MarkerConfig) -> Self {
        Self {
            markers: HashMap::new(),
            config,
            last_sync: None,
        }
    }

    /// Place a marker, replacing an existing one for the same key if its
    /// kind or position changed. Returns true if a marker was created.
    pub fn spawn(&mut self, request: &MarkerSpawnRequest, provider: &P) -> bool {
        if let Some(live) = self.markers.get(&request.key) {
            if live.marker.kind == request.kind && live.marker.position == request.position {
                return false;
            }
        }

        let mut controller = MarkerController::new(self.config.relevance_distance);
        controller.bind(provider);
        let replaced = self
            .markers
            .insert(
                request.key.clone(),
                LiveMarker {
                    marker: Marker::new(request.position, request.kind),
                    controller,
                },
            )
            .is_some();

        debug!(
            "{} {:?} marker for '{}' at {}",
            if replaced { "Replaced" } else { "Spawned" },
            request.kind,
            request.key,
            request.position
        );
        true
    }

    /// Remove a marker on behalf of the owning system
    pub fn remove(&mut self, key: &str) -> bool {
        self.markers.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Bring the live markers in line with the host's current requests.
    /// Throttled to the configured interval; skipped while markers are
    /// disabled or the host is busy (loading, zoning, character select).
    /// Requests already beyond the relevance distance of the player are not
    /// placed, since the next tick would destroy them. Returns true if a sync ran.
    pub fn sync(
        &mut self,
        now: f64,
        requests: &[MarkerSpawnRequest],
        host_busy: bool,
        provider: &P,
    ) -> bool {
        if !self.config.enabled || host_busy {
            return false;
        }
        if let Some(last) = self.last_sync {
            if now - last <= self.config.update_interval_secs {
                return false;
            }
        }
        self.last_sync = Some(now);

        self.markers
            .retain(|key, _| requests.iter().any(|r| &r.key == key));

        let player_pos = provider.try_player().and_then(|p| p.position());
        let mut spawned = 0;
        for request in requests {
            if player_pos.is_some_and(|p| self.out_of_range(request, p)) {
                if self.markers.remove(&request.key).is_some() {
                    debug!("Removed marker for '{}', target out of range", request.key);
                }
                continue;
            }
            if self.spawn(request, provider) {
                spawned += 1;
            }
        }
        if spawned > 0 {
            debug!("Marker sync placed {} markers, {} live", spawned, self.markers.len());
        }
        true
    }

    fn out_of_range(&self, request: &MarkerSpawnRequest, player_pos: Vec3) -> bool {
        request.position.distance(player_pos) > self.config.relevance_distance
    }

    /// Tick every live marker and drop the destroyed ones. Returns their keys.
    pub fn tick(&mut self, provider: &P) -> Vec<String> {
        let mut destroyed = Vec::new();
        for (key, live) in self.markers.iter_mut() {
            if live.controller.tick(&mut live.marker, provider) == TickOutcome::Destroyed {
                destroyed.push(key.clone());
            }
        }
        for key in &destroyed {
            self.markers.remove(key);
        }
        if !destroyed.is_empty() {
            info!("Destroyed {} out-of-range markers", destroyed.len());
        }
        destroyed
    }

    pub fn get(&self, key: &str) -> Option<&Marker> {
        self.markers.get(key).map(|live| &live.marker)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Marker)> {
        self.markers
            .iter()
            .map(|(key, live)| (key.as_str(), &live.marker))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
