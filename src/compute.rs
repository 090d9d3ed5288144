//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle, input snapshot, and clock
//! reading) and returns a brand-new `GameState`.  Side effects are limited to
//! the injected RNG, so a seeded RNG plus scripted snapshots replay a run
//! exactly.

use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Bird, Bullet, GameStatus, GameState, InputSnapshot, Obstacle, ObstacleKind, Player, SoundCue,
};

// ── Kind tables ──────────────────────────────────────────────────────────────

/// Collision height of an obstacle.  Stones are half-height, which is what
/// makes them jumpable with room to spare.  The same height is used for
/// player, bird and bullet overlap tests.
pub fn obstacle_height(kind: ObstacleKind) -> i32 {
    match kind {
        ObstacleKind::Normal => OBSTACLE_HEIGHT,
        ObstacleKind::Stone => STONE_HEIGHT,
    }
}

/// Spawn row for an obstacle: its collision box sits on the ground line.
pub fn obstacle_spawn_y(kind: ObstacleKind) -> i32 {
    GROUND_Y - obstacle_height(kind)
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding-box overlap, strict on all four edges: boxes that
/// merely touch do not overlap.
#[allow(clippy::too_many_arguments)]
pub fn overlaps(ax: i32, ay: i32, aw: i32, ah: i32, bx: i32, by: i32, bw: i32, bh: i32) -> bool {
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

fn player_hits_obstacle(player: &Player, obs: &Obstacle) -> bool {
    overlaps(
        player.x,
        player.y,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        obs.x,
        obs.y,
        OBSTACLE_WIDTH,
        obstacle_height(obs.kind),
    )
}

// ── Constructors ─────────────────────────────────────────────────────────────

fn initial_player() -> Player {
    Player {
        x: PLAYER_START_X,
        y: GROUND_Y - PLAYER_HEIGHT,
        velocity_y: 0,
        jumping: false,
    }
}

fn initial_bird() -> Bird {
    Bird {
        x: BIRD_START_X,
        y: GROUND_Y - BIRD_ALTITUDE,
        active: false,
    }
}

/// Build the opening game state: one Normal obstacle entering at the right
/// edge and a Stone further out.
pub fn init_state() -> GameState {
    GameState {
        player: initial_player(),
        obstacles: vec![
            Obstacle {
                x: SCREEN_WIDTH,
                y: obstacle_spawn_y(ObstacleKind::Normal),
                active: true,
                kind: ObstacleKind::Normal,
            },
            Obstacle {
                x: SCREEN_WIDTH + 400,
                y: obstacle_spawn_y(ObstacleKind::Stone),
                active: true,
                kind: ObstacleKind::Stone,
            },
        ],
        bullets: Vec::new(),
        bird: initial_bird(),
        score: 0,
        obstacle_speed: BASE_OBSTACLE_SPEED,
        status: GameStatus::Playing,
        frame: 0,
        last_fire_ms: 0,
        fire_released: true,
        cues: Vec::new(),
    }
}

/// The restart transition: always yields the same single-obstacle
/// configuration regardless of the state the previous run ended in.
pub fn reset_run() -> GameState {
    GameState {
        obstacles: vec![Obstacle {
            x: SCREEN_WIDTH,
            y: obstacle_spawn_y(ObstacleKind::Normal),
            active: true,
            kind: ObstacleKind::Normal,
        }],
        ..init_state()
    }
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// `input` is the per-frame key snapshot, `now_ms` a monotonic millisecond
/// clock (only the fire-rate limiter reads it), and all randomness comes
/// through `rng` so callers control determinism.
///
/// While game-over the step is inert: the returned state is identical except
/// that stale sound cues are dropped.  Restart is a separate transition
/// (`reset_run`) driven by the caller.
pub fn tick(
    state: &GameState,
    input: &InputSnapshot,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    let mut s = state.clone();
    s.cues.clear();

    if s.status == GameStatus::GameOver {
        return s;
    }

    s.frame += 1;

    // ── 1. Input: jump, horizontal movement, fire ───────────────────────────
    if input.jump && !s.player.jumping {
        s.player.velocity_y = -JUMP_STRENGTH;
        s.player.jumping = true;
        s.cues.push(SoundCue::Jump);
    }

    // Both directions may apply in the same frame; opposite holds cancel out.
    if input.left && s.player.x > 0 {
        s.player.x -= MOVE_SPEED;
    }
    if input.right && s.player.x < SCREEN_WIDTH - PLAYER_WIDTH {
        s.player.x += MOVE_SPEED;
    }

    // Edge-triggered and rate-limited: the key must have been seen released
    // since the last shot, and the cooldown must have elapsed.
    if input.fire {
        if s.fire_released && now_ms.saturating_sub(s.last_fire_ms) >= FIRE_COOLDOWN_MS {
            s.bullets.push(Bullet {
                x: s.player.x + PLAYER_WIDTH,
                y: s.player.y + PLAYER_HEIGHT / 2,
            });
            s.last_fire_ms = now_ms;
            s.score = s.score.saturating_sub(1);
            s.cues.push(SoundCue::Shoot);
        }
        s.fire_released = false;
    } else {
        s.fire_released = true;
    }

    // ── 2. Player physics: symplectic Euler, then ground clamp ──────────────
    s.player.y += s.player.velocity_y;
    s.player.velocity_y += GRAVITY;
    if s.player.y >= GROUND_Y - PLAYER_HEIGHT {
        s.player.y = GROUND_Y - PLAYER_HEIGHT;
        s.player.jumping = false;
    }

    // ── 3. Obstacles: advance and recycle past the left edge ────────────────
    let mut extra_obstacles: Vec<Obstacle> = Vec::new();
    for obs in &mut s.obstacles {
        obs.x -= s.obstacle_speed;

        if obs.x + OBSTACLE_WIDTH < 0 {
            obs.x = SCREEN_WIDTH + rng.gen_range(0..RESPAWN_RANGE);
            obs.y = obstacle_spawn_y(obs.kind);
            obs.active = true;
            s.score += 1;

            // Every second point the field gains one extra obstacle (and the
            // speed nudges, see the note on step 8).
            if s.score % 2 == 0 {
                s.obstacle_speed -= 1;
                extra_obstacles.push(Obstacle {
                    x: SCREEN_WIDTH + EXTRA_SPAWN_OFFSET,
                    y: obstacle_spawn_y(ObstacleKind::Normal),
                    active: true,
                    kind: ObstacleKind::Normal,
                });
            }
            if s.score % 5 == 0 {
                s.obstacle_speed += 1;
            }
        }
    }
    s.obstacles.extend(extra_obstacles);

    // ── 4. Collision: player ↔ obstacles (including freshly recycled ones) ──
    for obs in &s.obstacles {
        if player_hits_obstacle(&s.player, obs) {
            s.status = GameStatus::GameOver;
            s.cues.push(SoundCue::Collision);
        }
    }

    // ── 5. Bullets: advance, resolve first obstacle hit ──────────────────────
    // A bullet stops at its first match in collection order and destroys at
    // most one obstacle; misses survive into the off-screen prune below.
    let mut bullets: Vec<Bullet> = Vec::with_capacity(s.bullets.len());
    for bullet in &s.bullets {
        let bullet = Bullet {
            x: bullet.x + BULLET_SPEED,
            y: bullet.y,
        };
        let mut spent = false;
        for obs in &mut s.obstacles {
            if obs.active
                && overlaps(
                    bullet.x,
                    bullet.y,
                    BULLET_WIDTH,
                    BULLET_HEIGHT,
                    obs.x,
                    obs.y,
                    OBSTACLE_WIDTH,
                    obstacle_height(obs.kind),
                )
            {
                obs.active = false;
                spent = true;
                break;
            }
        }
        if !spent {
            bullets.push(bullet);
        }
    }
    s.bullets = bullets;

    // ── 6. Bird: activation gate, motion, wrap, duck-aware collision ────────
    if s.score >= BIRD_SCORE_THRESHOLD {
        s.bird.active = true;
        s.bird.x -= s.obstacle_speed - BIRD_SPEED_OFFSET;

        if s.bird.x + BIRD_WIDTH < 0 {
            s.bird.x = SCREEN_WIDTH;
        }

        // Ducking is a full evasion: while held, the bird cannot hit at all.
        if !input.duck
            && overlaps(
                s.player.x,
                s.player.y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
                s.bird.x,
                s.bird.y,
                BIRD_WIDTH,
                BIRD_HEIGHT,
            )
        {
            s.status = GameStatus::GameOver;
            s.cues.push(SoundCue::Collision);
        }
    }

    // ── 7. Prune shot obstacles and replenish to the pre-prune count ────────
    let population = s.obstacles.len();
    s.obstacles.retain(|obs| obs.active);
    while s.obstacles.len() < population {
        let kind = if rng.gen_bool(0.5) {
            ObstacleKind::Stone
        } else {
            ObstacleKind::Normal
        };
        s.obstacles.push(Obstacle {
            x: SCREEN_WIDTH + rng.gen_range(0..RESPAWN_RANGE),
            y: obstacle_spawn_y(kind),
            active: true,
            kind,
        });
    }

    // Bullets that sailed past the right edge are gone.
    s.bullets.retain(|b| b.x <= SCREEN_WIDTH);

    // ── 8. Speed scaling ────────────────────────────────────────────────────
    // Recomputed from score every frame, overwriting the incremental ±1
    // adjustments made on recycle events above.  Those adjustments still
    // matter within this step (the bird moves with the nudged value), so
    // both paths stay.  See DESIGN.md.
    s.obstacle_speed = BASE_OBSTACLE_SPEED + (s.score / 10) as i32;

    s
}
