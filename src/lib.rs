//! Flappy Funster - A single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, pipes, scoring, collisions)
//! - `game`: Owned game session (state container, subscribers, persistence hooks)
//! - `highscores`: Best-score store
//! - `platform`: Browser/native platform abstraction (key/value storage)
//! - `renderer`: Read-only scene building and canvas painting
//! - `settings`: Player preferences

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, SubscriptionId};
pub use highscores::{HighScoreStore, ScoreStore};
pub use settings::Settings;

/// Game configuration constants
///
/// All dimensions are in pixels, all motion is per tick.
pub mod consts {
    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 500.0;
    pub const GAME_HEIGHT: f32 = 800.0;

    /// Bird is a square of this side, centered on its position
    pub const BIRD_SIZE: f32 = 30.0;
    pub const BIRD_START_X: f32 = GAME_WIDTH / 4.0;
    pub const BIRD_START_Y: f32 = GAME_HEIGHT / 2.0;

    /// Downward acceleration added to the bird's velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity the bird is set to on flap (negative = up)
    pub const JUMP_STRENGTH: f32 = -8.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Horizontal pipe motion per tick (negative = toward the bird)
    pub const PIPE_SPEED: f32 = -3.0;
    /// A pipe spawns every this many ticks
    pub const PIPE_SPAWN_FRAME_COUNT: u64 = 100;
    /// Minimum distance from the gap to the top/bottom of the playfield
    pub const PIPE_MARGIN_TOP: f32 = 100.0;
    pub const PIPE_MARGIN_BOTTOM: f32 = 100.0;

    /// Bird tilt: degrees per unit of vertical velocity, clamped to a range
    pub const TILT_PER_VELOCITY: f32 = 5.0;
    pub const TILT_MIN_DEG: f32 = -25.0;
    pub const TILT_MAX_DEG: f32 = 90.0;
}
