//! Per-frame simulation step and run control
//!
//! `tick` is called once per display refresh by an external driver. It is a
//! no-op outside `Playing`, as is `flap`. `reset` starts (or restarts) a run.

use glam::Vec2;
use rand::Rng;

use super::collision::detect_crash;
use super::state::{Bird, CrashCause, GameEvent, GameState, GameStatus, Pipe};
use crate::consts::*;

/// Start a fresh run, keeping only the best score.
///
/// Valid from every status; a run in progress is discarded.
pub fn reset(state: &mut GameState) -> GameEvent {
    let mut fresh = GameState::new(state.high_score);
    fresh.status = GameStatus::Playing;
    *state = fresh;

    log::info!("Run started (best {})", state.high_score);
    GameEvent::Started
}

/// Give the bird an upward impulse.
///
/// Replaces the current vertical velocity rather than adding to it, so
/// repeated flaps within one frame do not stack. Returns false (and changes
/// nothing) unless a run is in progress.
pub fn flap(state: &mut GameState) -> bool {
    if !state.is_playing() {
        return false;
    }
    state.bird.velocity_y = JUMP_STRENGTH;
    true
}

/// Create a pipe at the right edge of the playfield with a random gap.
///
/// The gap top is drawn from `[PIPE_MARGIN_TOP, GAME_HEIGHT - PIPE_GAP - PIPE_MARGIN_BOTTOM)`
/// so the whole gap stays inside the playfield.
pub fn spawn_pipe<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Pipe {
    let gap_top = rng.random_range(PIPE_MARGIN_TOP..GAME_HEIGHT - PIPE_GAP - PIPE_MARGIN_BOTTOM);
    Pipe::new(id, GAME_WIDTH, gap_top)
}

/// Advance the run by one frame
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    if !state.is_playing() {
        return Vec::new();
    }

    let mut events = Vec::new();

    // Semi-implicit Euler: new velocity moves the bird
    let velocity_y = state.bird.velocity_y + GRAVITY;
    let y = state.bird.pos.y + velocity_y;

    // Scroll pipes, drop the ones fully past the left edge
    let mut pipes: Vec<Pipe> = state
        .pipes
        .iter()
        .map(|pipe| Pipe {
            x: pipe.x + PIPE_SPEED,
            ..*pipe
        })
        .filter(|pipe| pipe.x > -PIPE_WIDTH)
        .collect();

    let frame_count = state.frame_count + 1;
    let mut next_id = state.next_pipe_id();
    if frame_count % PIPE_SPAWN_FRAME_COUNT == 0 {
        let pipe = spawn_pipe(next_id, rng);
        log::trace!("Spawned pipe {} (gap top {:.1})", pipe.id, pipe.gap_top);
        events.push(GameEvent::PipeSpawned { id: pipe.id });
        pipes.push(pipe);
        next_id = next_id.wrapping_add(1);
    }

    // Score against the bird's x before this frame is committed
    let bird_x = state.bird.pos.x;
    let mut score = state.score;
    for pipe in pipes.iter_mut() {
        if !pipe.scored && pipe.right() < bird_x {
            pipe.scored = true;
            score += 1;
            events.push(GameEvent::Scored { score });
        }
    }

    if let Some(cause) = detect_crash(bird_x, y, &pipes) {
        // Nothing from this frame is committed except the best score
        return game_over(state, score, cause);
    }

    state.bird = Bird {
        pos: Vec2::new(bird_x, y),
        velocity_y,
    };
    state.pipes = pipes;
    state.score = score;
    state.frame_count = frame_count;
    state.set_next_pipe_id(next_id);

    events
}

/// End the run. `final_score` includes pipes scored during the fatal frame.
fn game_over(state: &mut GameState, final_score: u32, cause: CrashCause) -> Vec<GameEvent> {
    let mut events = vec![GameEvent::Crashed { cause }];

    if final_score > state.high_score {
        state.high_score = final_score;
        events.push(GameEvent::NewHighScore { score: final_score });
    }
    state.status = GameStatus::GameOver;

    log::info!(
        "Game over ({:?}) at frame {} with score {}",
        cause,
        state.frame_count + 1,
        final_score
    );

    events
}
