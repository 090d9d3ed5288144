//! All game entity types. Pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Full-height obstacle; must be jumped or shot.
    Normal,
    /// Half-height stone; jumpable with room to spare, still shootable.
    Stone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Fire-and-forget audio trigger requests produced by a simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Shoot,
    Collision,
}

/// Boolean key states sampled once per step, before any simulation logic runs.
/// Quit and restart are one-shot keypresses handled by the driver loop, not
/// part of the per-step snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub jump: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub duck: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub velocity_y: i32,
    /// True from jump impulse until the next ground contact.
    pub jumping: bool,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    /// Cleared on bullet impact; inactive obstacles are pruned and replaced
    /// within the same step.
    pub active: bool,
    pub kind: ObstacleKind,
}

/// The single airborne hazard. One instance per run, activated in place once
/// the score threshold is crossed, never destroyed until a full reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet. Liveness is membership in `GameState::bullets`; spent or
/// off-screen bullets are removed, never flagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub bullets: Vec<Bullet>,
    pub bird: Bird,
    /// Non-negative; +1 per obstacle recycle, −1 per shot (floored at zero).
    pub score: u32,
    /// Recomputed at the end of every step as `5 + score / 10`.
    pub obstacle_speed: i32,
    pub status: GameStatus,
    pub frame: u64,
    /// Clock reading (ms) of the last successful shot.
    pub last_fire_ms: u64,
    /// Latch for edge-triggered fire: set while the fire key is observed
    /// released, consumed by the next shot.
    pub fire_released: bool,
    /// Audio triggers emitted by the most recent step.
    pub cues: Vec<SoundCue>,
}
