//! Game state and core simulation types
//!
//! Everything a renderer or a snapshot needs about one session lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center of the bird. `pos.x` is fixed for the whole run.
    pub pos: Vec2,
    /// Vertical speed in pixels per tick (positive = down)
    pub velocity_y: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            velocity_y: 0.0,
        }
    }
}

impl Bird {
    pub const HALF_SIZE: f32 = BIRD_SIZE / 2.0;

    pub fn left(&self) -> f32 {
        self.pos.x - Self::HALF_SIZE
    }

    pub fn right(&self) -> f32 {
        self.pos.x + Self::HALF_SIZE
    }
}

/// A pipe pair with a vertical gap between the upper and lower segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Height of the upper segment; the gap spans `[gap_top, gap_top + PIPE_GAP)`
    pub gap_top: f32,
    /// Already credited to the score
    pub scored: bool,
}

impl Pipe {
    pub fn new(id: u32, x: f32, gap_top: f32) -> Self {
        Self {
            id,
            x,
            gap_top,
            scored: false,
        }
    }

    /// Trailing (right) edge
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Top of the lower segment
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + PIPE_GAP
    }

    pub fn gap_center(&self) -> f32 {
        self.gap_top + PIPE_GAP / 2.0
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Ceiling,
    Ground,
    Pipe { id: u32 },
}

/// Things that happened during a control call, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began
    Started,
    Flapped,
    PipeSpawned { id: u32 },
    /// A pipe was passed; carries the new score
    Scored { score: u32 },
    Crashed { cause: CrashCause },
    /// The run beat the stored best; the value must be persisted
    NewHighScore { score: u32 },
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub bird: Bird,
    /// Active pipes in spawn order
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Best final score seen, survives restarts
    pub high_score: u32,
    /// Ticks since the run started
    pub frame_count: u64,
    /// Next pipe ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameState {
    /// Create an idle session seeded with a previously stored best score
    pub fn new(high_score: u32) -> Self {
        Self {
            status: GameStatus::Idle,
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            frame_count: 0,
            next_id: 1,
        }
    }

    /// ID the next spawned pipe will get
    pub fn next_pipe_id(&self) -> u32 {
        self.next_id
    }

    pub(crate) fn set_next_pipe_id(&mut self, id: u32) {
        self.next_id = id;
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_at_start_position() {
        let state = GameState::new(7);
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.high_score, 7);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame_count, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.bird.pos, Vec2::new(125.0, 400.0));
        assert_eq!(state.bird.velocity_y, 0.0);
        assert_eq!(state.next_pipe_id(), 1);
    }

    #[test]
    fn test_pipe_edges() {
        let pipe = Pipe::new(3, 40.0, 150.0);
        assert_eq!(pipe.right(), 120.0);
        assert_eq!(pipe.gap_bottom(), 350.0);
        assert_eq!(pipe.gap_center(), 250.0);
        assert!(!pipe.scored);
    }

    #[test]
    fn test_bird_edges() {
        let bird = Bird::default();
        assert_eq!(bird.left(), 110.0);
        assert_eq!(bird.right(), 140.0);
    }
}
