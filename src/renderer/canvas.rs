//! 2D canvas painter for the browser build

use web_sys::CanvasRenderingContext2d;

use super::scene::{Overlay, Rect, Scene, colors};
use crate::consts::*;

/// Paints scenes onto a canvas sized `GAME_WIDTH` x `GAME_HEIGHT`
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn paint(&self, scene: &Scene, fps: Option<u32>) {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(&colors::css(scene.palette.sky));
        ctx.fill_rect(0.0, 0.0, GAME_WIDTH as f64, GAME_HEIGHT as f64);

        let pipe_fill = colors::css(scene.palette.pipe);
        let pipe_border = colors::css(colors::PIPE_BORDER);
        for pipe in &scene.pipes {
            self.rect(&pipe.upper, &pipe_fill, &pipe_border);
            self.rect(&pipe.lower, &pipe_fill, &pipe_border);
        }

        self.bird(scene);
        self.overlay(&scene.overlay);

        if let Some(fps) = fps {
            ctx.set_font("14px sans-serif");
            ctx.set_text_align("right");
            ctx.set_fill_style_str(&colors::css(colors::TEXT));
            let _ = ctx.fill_text(&format!("{} fps", fps), GAME_WIDTH as f64 - 8.0, 20.0);
        }
    }

    fn rect(&self, rect: &Rect, fill: &str, border: &str) {
        if rect.size.y <= 0.0 {
            return;
        }
        let (x, y) = (rect.origin.x as f64, rect.origin.y as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill_rect(x, y, w, h);
        self.ctx.set_stroke_style_str(border);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn bird(&self, scene: &Scene) {
        let ctx = &self.ctx;
        let bird = &scene.bird;
        let radius = bird.size as f64 / 2.0;

        ctx.save();
        let _ = ctx.translate(bird.center.x as f64, bird.center.y as f64);
        let _ = ctx.rotate((bird.rotation_deg as f64).to_radians());

        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, radius, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(&colors::css(scene.palette.bird));
        ctx.fill();

        // Eye, toward the beak
        ctx.begin_path();
        let _ = ctx.arc(radius * 0.35, -radius * 0.25, 4.0, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(&colors::css(colors::BIRD_EYE));
        ctx.fill();

        ctx.restore();
    }

    fn overlay(&self, overlay: &Overlay) {
        let ctx = &self.ctx;
        let lines = overlay.lines();
        let (font, start_y, spacing) = match overlay {
            Overlay::Score { .. } => ("bold 64px sans-serif", 110.0, 0.0),
            Overlay::Title { .. } => ("bold 48px sans-serif", GAME_HEIGHT as f64 * 0.4, 56.0),
            Overlay::GameOver { .. } => ("bold 36px sans-serif", GAME_HEIGHT as f64 * 0.35, 48.0),
        };

        ctx.set_font(font);
        ctx.set_text_align("center");
        let x = GAME_WIDTH as f64 / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let y = start_y + spacing * i as f64;
            ctx.set_fill_style_str(&colors::css(colors::TEXT_SHADOW));
            let _ = ctx.fill_text(line, x + 2.0, y + 2.0);
            ctx.set_fill_style_str(&colors::css(colors::TEXT));
            let _ = ctx.fill_text(line, x, y);
        }
    }
}
