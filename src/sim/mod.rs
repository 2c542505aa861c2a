//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Motion is expressed per tick, never per second
//! - Randomness only through an injected RNG
//! - Stable pipe order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, bird_bounds, detect_crash, out_of_bounds, pipe_blocks};
pub use state::{Bird, CrashCause, GameEvent, GameState, GameStatus, Pipe};
pub use tick::{flap, reset, spawn_pipe, tick};
