//! Marker Lifecycle
//!
//! Per-frame behavior of a world marker: face the camera, and destroy the
//! marker once the player is out of range. Camera and player are late-bound
//! references that may be unavailable for any number of frames.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default distance past which a marker is destroyed
pub const DEFAULT_RELEVANCE_DISTANCE: f32 = 80.0;

/// Kind of quest marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Quest available
    Available,
    /// Quest ready to turn in
    TurnIn,
}

impl MarkerKind {
    /// Glyph drawn above the NPC
    pub fn symbol(&self) -> &'static str {
        match self {
            MarkerKind::Available => "!",
            MarkerKind::TurnIn => "?",
        }
    }
}

/// Something in the scene with a world position. `None` once it no longer exists.
pub trait WorldAnchor {
    fn position(&self) -> Option<Vec3>;
}

/// Resolves the viewer references. Either may be unavailable, e.g. during
/// startup or after a scene or character change.
pub trait ReferenceProvider {
    type Camera: WorldAnchor;
    type Player: WorldAnchor;

    fn try_camera(&self) -> Option<Self::Camera>;
    fn try_player(&self) -> Option<Self::Player>;
}

/// A world-space marker over a quest giver or turn-in target
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Vec3,
    pub kind: MarkerKind,
    pub rotation: Quat,
    destroyed: bool,
}

impl Marker {
    pub fn new(position: Vec3, kind: MarkerKind) -> Self {
        Self {
            position,
            kind,
            rotation: Quat::IDENTITY,
            destroyed: false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Unit vector the marker faces
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Camera or player unavailable, marker left untouched
    Skipped,
    /// Marker reoriented and still in range
    Updated,
    /// Player out of range, marker destroyed
    Destroyed,
}

/// Drives one marker. Holds the cached camera and player references.
pub struct MarkerController<P: ReferenceProvider> {
    camera: Option<P::Camera>,
    player: Option<P::Player>,
    relevance_distance: f32,
}

impl<P: ReferenceProvider> MarkerController<P> {
    pub fn new(relevance_distance: f32) -> Self {
        Self {
            camera: None,
            player: None,
            relevance_distance,
        }
    }

    /// Bind references up front, as done when the marker is spawned
    pub fn bind(&mut self, provider: &P) {
        self.camera = provider.try_camera();
        self.player = provider.try_player();
    }

    pub fn is_bound(&self) -> bool {
        self.camera.is_some() && self.player.is_some()
    }

    /// Run once per rendered frame
    pub fn tick(&mut self, marker: &mut Marker, provider: &P) -> TickOutcome {
        if marker.destroyed {
            return TickOutcome::Destroyed;
        }

        self.drop_stale();
        if self.camera.is_none() {
            self.camera = provider.try_camera();
        }
        if self.player.is_none() {
            self.player = provider.try_player();
        }

        let camera_pos = self.camera.as_ref().and_then(WorldAnchor::position);
        let player_pos = self.player.as_ref().and_then(WorldAnchor::position);
        let (Some(camera_pos), Some(player_pos)) = (camera_pos, player_pos) else {
            return TickOutcome::Skipped;
        };

        match look_rotation(marker.position - camera_pos, Vec3::Y) {
            Some(rotation) => marker.rotation = rotation,
            None => debug!("Camera at marker position, keeping previous rotation"),
        }

        if marker.position.distance(player_pos) > self.relevance_distance {
            marker.destroyed = true;
            return TickOutcome::Destroyed;
        }

        TickOutcome::Updated
    }

    /// Forget references whose target no longer exists
    fn drop_stale(&mut self) {
        if self.camera.as_ref().is_some_and(|c| c.position().is_none()) {
            self.camera = None;
        }
        if self.player.as_ref().is_some_and(|p| p.position().is_none()) {
            self.player = None;
        }
    }
}

/// Rotation whose +Z axis points along `forward`, keeping `up` as close to
/// the rotated +Y as possible. `None` for a zero-length `forward`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let Some(right) = up.cross(forward).try_normalize() else {
        // forward is parallel to up
        return Some(Quat::from_rotation_arc(Vec3::Z, forward));
    };
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}
