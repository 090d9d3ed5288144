// --- Game constants ---
//
// The simulation runs in a fixed 800×600 pixel play field; the renderer
// scales it to whatever terminal it finds.

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const GROUND_HEIGHT: i32 = 100;
/// Top of the ground band, the line the player runs on.
pub const GROUND_Y: i32 = SCREEN_HEIGHT - GROUND_HEIGHT;

pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 40;
pub const PLAYER_START_X: i32 = 50;

pub const OBSTACLE_WIDTH: i32 = 30;
/// Collision height of a Normal obstacle.
pub const OBSTACLE_HEIGHT: i32 = 60;
/// Collision height of a Stone obstacle (short enough to shoot over).
pub const STONE_HEIGHT: i32 = 30;

pub const BIRD_WIDTH: i32 = 20;
pub const BIRD_HEIGHT: i32 = 20;
/// Bird flight altitude above the ground line.
pub const BIRD_ALTITUDE: i32 = 120;
pub const BIRD_START_X: i32 = SCREEN_WIDTH + 400;

pub const GRAVITY: i32 = 1;
pub const JUMP_STRENGTH: i32 = 18;
pub const MOVE_SPEED: i32 = 5;

pub const BULLET_WIDTH: i32 = 10;
pub const BULLET_HEIGHT: i32 = 5;
pub const BULLET_SPEED: i32 = 8;
/// Min milliseconds between shots.
pub const FIRE_COOLDOWN_MS: u64 = 1000;

pub const BASE_OBSTACLE_SPEED: i32 = 5;
/// The bird flies at `obstacle_speed - BIRD_SPEED_OFFSET`.
pub const BIRD_SPEED_OFFSET: i32 = 4;
/// Score at which the bird becomes active.
pub const BIRD_SCORE_THRESHOLD: u32 = 10;

/// Recycled/replenished obstacles respawn at SCREEN_WIDTH + uniform(0..RESPAWN_RANGE).
pub const RESPAWN_RANGE: i32 = 300;
/// The bonus obstacle added on even-score recycles spawns at this fixed offset.
pub const EXTRA_SPAWN_OFFSET: i32 = 300;

/// Frame budget ≈ 60 steps per second.
pub const FRAME_MS: u64 = 16;
