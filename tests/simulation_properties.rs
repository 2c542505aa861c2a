//! Property tests for the frame-driven simulation

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use flappy_funster::consts::*;
use flappy_funster::sim::{GameState, GameStatus, autopilot, flap, reset, spawn_pipe, tick};

/// Play `extra_flaps.len()` frames under the autopilot, flapping on top of
/// it where the input is true, and hand every (before, after) pair of a
/// surviving frame to `check`.
fn play(
    seed: u64,
    extra_flaps: &[bool],
    mut check: impl FnMut(&GameState, &GameState),
) -> GameState {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(0);
    reset(&mut state);

    for &extra in extra_flaps {
        if extra || autopilot::should_flap(&state) {
            flap(&mut state);
        }
        let before = state.clone();
        tick(&mut state, &mut rng);
        if state.status != GameStatus::Playing {
            break;
        }
        check(&before, &state);
    }
    state
}

/// Score the run would end with if the next tick were fatal
fn score_if_crashing_next(state: &GameState) -> u32 {
    let passing = state
        .pipes
        .iter()
        .filter(|p| !p.scored && p.x + PIPE_SPEED + PIPE_WIDTH < BIRD_START_X)
        .count() as u32;
    state.score + passing
}

#[test]
fn autopilot_runs_reach_scored_frames() {
    let mut scored_frames = 0;
    play(7, &[false; 1_500], |before, after| {
        if after.score > before.score {
            scored_frames += 1;
        }
    });
    assert!(scored_frames > 0);
}

proptest! {
    #[test]
    fn surviving_frames_advance_consistently(
        seed in any::<u64>(),
        extra_flaps in proptest::collection::vec(proptest::bool::weighted(0.02), 300..1500),
    ) {
        play(seed, &extra_flaps, |before, after| {
            assert!(after.score >= before.score);
            assert_eq!(after.frame_count, before.frame_count + 1);
            assert_eq!(after.bird.pos.x, before.bird.pos.x);
            assert_eq!(after.high_score, before.high_score);

            // Every pipe that survived moved by exactly the pipe speed
            for pipe in &after.pipes {
                if let Some(old) = before.pipes.iter().find(|p| p.id == pipe.id) {
                    assert_eq!(pipe.x, old.x + PIPE_SPEED);
                    assert_eq!(pipe.gap_top, old.gap_top);
                    assert!(pipe.scored || !old.scored);
                }
            }

            // Removal iff the trailing edge reached the left edge
            for old in &before.pipes {
                let moved = old.x + PIPE_SPEED;
                let kept = after.pipes.iter().any(|p| p.id == old.id);
                assert_eq!(kept, moved > -PIPE_WIDTH);
            }

            let removed = before
                .pipes
                .iter()
                .filter(|p| p.x + PIPE_SPEED <= -PIPE_WIDTH)
                .count();
            let spawned = after.pipes.len() + removed - before.pipes.len();
            let expect_spawn = after.frame_count % PIPE_SPAWN_FRAME_COUNT == 0;
            assert_eq!(spawned, usize::from(expect_spawn));

            let scored = after.pipes.iter().filter(|p| p.scored).count() as u32;
            assert!(after.score >= scored);
        });
    }

    #[test]
    fn spawned_gap_stays_in_playfield(seed in any::<u64>(), id in 1u32..10_000) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pipe = spawn_pipe(id, &mut rng);
        prop_assert_eq!(pipe.x, GAME_WIDTH);
        prop_assert!(pipe.gap_top >= PIPE_MARGIN_TOP);
        prop_assert!(pipe.gap_bottom() <= GAME_HEIGHT - PIPE_MARGIN_BOTTOM);
        prop_assert!(pipe.gap_top > 0.0 && pipe.gap_bottom() < GAME_HEIGHT);
    }

    #[test]
    fn repeated_flaps_never_stack(count in 1usize..10, velocity in -20.0f32..20.0) {
        let mut state = GameState::new(0);
        reset(&mut state);
        state.bird.velocity_y = velocity;
        for _ in 0..count {
            flap(&mut state);
        }
        prop_assert_eq!(state.bird.velocity_y, JUMP_STRENGTH);
    }

    #[test]
    fn high_score_is_best_final_score(
        runs in proptest::collection::vec((any::<u64>(), 400u64..2500), 1..6),
    ) {
        let mut state = GameState::new(0);
        let mut best = 0;
        for (seed, cutoff) in runs {
            let mut rng = Pcg32::seed_from_u64(seed);
            reset(&mut state);
            let mut final_score = 0;

            // Autopilot until the cutoff, then let the bird fall
            while state.status == GameStatus::Playing && state.frame_count < cutoff + 200 {
                if state.frame_count < cutoff && autopilot::should_flap(&state) {
                    flap(&mut state);
                }
                // Pipes scored in a fatal frame still count toward the best
                final_score = score_if_crashing_next(&state);
                tick(&mut state, &mut rng);
            }

            prop_assert_eq!(state.status, GameStatus::GameOver);
            // The first pipe is passed around frame 250
            prop_assert!(final_score > 0);
            best = best.max(final_score);
            prop_assert_eq!(state.high_score, best);
        }
    }
}
