//! Demo controller
//!
//! Plays the game through the same `flap` input a player has. It aims for
//! the center of the next gap and flaps whenever the bird has sunk below it.

use super::state::GameState;
use crate::consts::*;

/// How far below the target the bird may sink before flapping
pub const FLAP_MARGIN: f32 = 20.0;

/// Height the bird should hold: the center of the first pipe it has not yet
/// cleared, or the middle of the playfield when no pipe is ahead.
pub fn target_y(state: &GameState) -> f32 {
    let bird_left = state.bird.left();
    state
        .pipes
        .iter()
        .find(|pipe| pipe.right() >= bird_left)
        .map(|pipe| pipe.gap_center())
        .unwrap_or(GAME_HEIGHT / 2.0)
}

/// Whether to flap before the next tick
pub fn should_flap(state: &GameState) -> bool {
    state.is_playing() && state.bird.pos.y > target_y(state) + FLAP_MARGIN
}
