//! Scene building
//!
//! Turns a `GameState` into plain drawable shapes. Read-only: nothing here
//! touches the simulation.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Bird, GameState, GameStatus, Pipe};

/// Colors for game elements
pub mod colors {
    pub type Color = [f32; 4];

    pub const SKY: Color = [0.45, 0.78, 0.95, 1.0];
    pub const BIRD: Color = [1.0, 0.82, 0.2, 1.0];
    pub const BIRD_EYE: Color = [0.07, 0.09, 0.15, 1.0];
    pub const PIPE: Color = [0.35, 0.75, 0.25, 1.0];
    pub const PIPE_BORDER: Color = [0.12, 0.14, 0.18, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT_SHADOW: Color = [0.0, 0.0, 0.0, 0.5];

    pub const HC_SKY: Color = [0.0, 0.0, 0.0, 1.0];
    pub const HC_BIRD: Color = [1.0, 1.0, 0.0, 1.0];
    pub const HC_PIPE: Color = [1.0, 1.0, 1.0, 1.0];

    /// CSS `rgba(...)` string for canvas fill styles
    pub fn css(c: Color) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (c[0] * 255.0).round() as u8,
            (c[1] * 255.0).round() as u8,
            (c[2] * 255.0).round() as u8,
            c[3]
        )
    }
}

use colors::Color;

/// Palette chosen from settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub sky: Color,
    pub bird: Color,
    pub pipe: Color,
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.high_contrast {
            Self {
                sky: colors::HC_SKY,
                bird: colors::HC_BIRD,
                pipe: colors::HC_PIPE,
            }
        } else {
            Self {
                sky: colors::SKY,
                bird: colors::BIRD,
                pipe: colors::PIPE,
            }
        }
    }
}

/// Axis-aligned rectangle, `origin` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// The bird as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSprite {
    pub center: Vec2,
    pub size: f32,
    /// Clockwise tilt in degrees
    pub rotation_deg: f32,
}

/// Both halves of one pipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSprite {
    /// Stable across frames, for keyed redraws
    pub id: u32,
    pub upper: Rect,
    pub lower: Rect,
}

impl PipeSprite {
    pub fn from_pipe(pipe: &Pipe) -> Self {
        let lower_top = pipe.gap_bottom();
        Self {
            id: pipe.id,
            upper: Rect::new(pipe.x, 0.0, PIPE_WIDTH, pipe.gap_top),
            lower: Rect::new(pipe.x, lower_top, PIPE_WIDTH, GAME_HEIGHT - lower_top),
        }
    }
}

/// Text overlay per status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Title screen
    Title { high_score: u32 },
    /// Live score while playing
    Score { score: u32 },
    GameOver { score: u32, high_score: u32 },
}

impl Overlay {
    /// Lines of text, top to bottom
    pub fn lines(&self) -> Vec<String> {
        match self {
            Overlay::Title { high_score } => {
                let mut lines = vec![
                    "Flappy Funster".to_string(),
                    "Tap or press Space to play".to_string(),
                ];
                if *high_score > 0 {
                    lines.push(format!("Best: {}", high_score));
                }
                lines
            }
            Overlay::Score { score } => vec![score.to_string()],
            Overlay::GameOver { score, high_score } => vec![
                "Game Over".to_string(),
                format!("Score: {}", score),
                format!("High Score: {}", high_score),
                "Tap or press Space to play again".to_string(),
            ],
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub palette: Palette,
    pub bird: BirdSprite,
    pub pipes: Vec<PipeSprite>,
    pub overlay: Overlay,
}

/// Bird tilt for a vertical velocity: nose up when rising, diving when falling
pub fn bird_rotation(velocity_y: f32) -> f32 {
    (velocity_y * TILT_PER_VELOCITY).clamp(TILT_MIN_DEG, TILT_MAX_DEG)
}

pub fn bird_sprite(bird: &Bird, settings: &Settings) -> BirdSprite {
    BirdSprite {
        center: bird.pos,
        size: BIRD_SIZE,
        rotation_deg: if settings.tilt_enabled() {
            bird_rotation(bird.velocity_y)
        } else {
            0.0
        },
    }
}

/// Build the drawable scene for the current state
pub fn build_scene(state: &GameState, settings: &Settings) -> Scene {
    let overlay = match state.status {
        GameStatus::Idle => Overlay::Title {
            high_score: state.high_score,
        },
        GameStatus::Playing => Overlay::Score { score: state.score },
        GameStatus::GameOver => Overlay::GameOver {
            score: state.score,
            high_score: state.high_score,
        },
    };

    Scene {
        palette: Palette::from_settings(settings),
        bird: bird_sprite(&state.bird, settings),
        pipes: state.pipes.iter().map(PipeSprite::from_pipe).collect(),
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_clamped() {
        assert_eq!(bird_rotation(0.0), 0.0);
        assert_eq!(bird_rotation(2.0), 10.0);
        assert_eq!(bird_rotation(-8.0), -25.0);
        assert_eq!(bird_rotation(30.0), 90.0);
    }

    #[test]
    fn test_reduced_motion_disables_tilt() {
        let bird = Bird {
            velocity_y: 4.0,
            ..Bird::default()
        };
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert_eq!(bird_sprite(&bird, &settings).rotation_deg, 0.0);
        assert_eq!(bird_sprite(&bird, &Settings::default()).rotation_deg, 20.0);
    }

    #[test]
    fn test_pipe_rectangles_cover_all_but_gap() {
        let sprite = PipeSprite::from_pipe(&Pipe::new(9, 200.0, 150.0));
        assert_eq!(sprite.id, 9);
        assert_eq!(sprite.upper, Rect::new(200.0, 0.0, 80.0, 150.0));
        assert_eq!(sprite.lower, Rect::new(200.0, 350.0, 80.0, 450.0));
        assert_eq!(
            sprite.upper.size.y + PIPE_GAP + sprite.lower.size.y,
            GAME_HEIGHT
        );
    }

    #[test]
    fn test_overlay_follows_status() {
        let mut state = GameState::new(4);
        let settings = Settings::default();
        assert_eq!(
            build_scene(&state, &settings).overlay,
            Overlay::Title { high_score: 4 }
        );

        state.status = GameStatus::Playing;
        state.score = 2;
        assert_eq!(
            build_scene(&state, &settings).overlay.lines(),
            vec!["2".to_string()]
        );

        state.status = GameStatus::GameOver;
        let lines = build_scene(&state, &settings).overlay.lines();
        assert_eq!(lines[0], "Game Over");
        assert_eq!(lines[2], "High Score: 4");
    }

    #[test]
    fn test_high_contrast_palette() {
        let settings = Settings {
            high_contrast: true,
            ..Settings::default()
        };
        let scene = build_scene(&GameState::default(), &settings);
        assert_eq!(scene.palette.sky, colors::HC_SKY);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(colors::css([1.0, 0.0, 0.5, 1.0]), "rgba(255, 0, 128, 1)");
    }
}
