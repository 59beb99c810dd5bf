//! Immediate-mode renderer: clears and redraws a 2D canvas every frame

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use super::scene::{self, BLADE, WOOD, WOOD_EDGE};
use crate::error::GameError;
use crate::sim::{GameSession, Viewport};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, viewport: Viewport) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::MissingElement("2d canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Dom("2d context has the wrong type".to_string()))?;
        log::info!(
            "Canvas renderer ready ({}x{})",
            viewport.width,
            viewport.height
        );
        Ok(Self { ctx, viewport })
    }

    fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn draw_platform(&self, session: &GameSession) {
        let p = session.platform.bounds();
        let (x, y, w, h) = (p.left() as f64, p.top() as f64, p.size.x as f64, p.size.y as f64);
        self.ctx.set_fill_style_str(WOOD);
        self.ctx.fill_rect(x, y, w, h);
        self.ctx.set_stroke_style_str(WOOD_EDGE);
        self.ctx.set_line_width(scene::WOOD_EDGE_WIDTH);
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn draw_blades(&self, session: &GameSession) -> Result<(), GameError> {
        self.ctx.set_fill_style_str(BLADE);
        for blade in &session.blades {
            self.ctx.save();
            self.ctx.translate(blade.pos.x as f64, blade.pos.y as f64)?;
            self.ctx.rotate(blade.angle as f64)?;
            self.ctx.begin_path();
            for [hub, tip, back] in scene::blade_arms(blade.size) {
                self.ctx.move_to(hub.x as f64, hub.y as f64);
                self.ctx.line_to(tip.x as f64, tip.y as f64);
                self.ctx.line_to(back.x as f64, back.y as f64);
                self.ctx.close_path();
            }
            self.ctx.fill();
            self.ctx.restore();
        }
        Ok(())
    }

    fn draw_fruit(&self, session: &GameSession) -> Result<(), GameError> {
        let (center, radius) = scene::apple_circle(&session.fruit);
        self.ctx.set_fill_style_str(scene::APPLE);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.fill();

        let stem = scene::apple_stem(&session.fruit);
        self.ctx.set_fill_style_str(scene::STEM);
        self.ctx.fill_rect(
            stem.left() as f64,
            stem.top() as f64,
            stem.size.x as f64,
            stem.size.y as f64,
        );
        Ok(())
    }

    fn draw_fragments(&self, session: &GameSession) -> Result<(), GameError> {
        self.ctx.set_fill_style_str(scene::FRAGMENT);
        for fragment in &session.fragments {
            self.ctx.begin_path();
            self.ctx.arc(
                fragment.pos.x as f64,
                fragment.pos.y as f64,
                scene::FRAGMENT_RADIUS as f64,
                0.0,
                TAU,
            )?;
            self.ctx.fill();
        }

        self.ctx.set_stroke_style_str(scene::FRAGMENT);
        self.ctx.set_line_width(1.0);
        for streak in &session.streaks {
            self.ctx.begin_path();
            self.ctx.move_to(streak.from.x as f64, streak.from.y as f64);
            self.ctx.line_to(streak.to.x as f64, streak.to.y as f64);
            self.ctx.stroke();
        }
        Ok(())
    }

    fn draw_centered_text(
        &self,
        text: &str,
        font: &str,
        color: &str,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, x as f64, y as f64)?;
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw_frame(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.clear();
        self.draw_platform(session);
        self.draw_blades(session)?;

        if session.fruit_visible() {
            self.draw_fruit(session)?;
        } else if session.is_squished() {
            self.draw_fragments(session)?;
        }

        self.ctx.set_font(scene::FONT_HUD);
        self.ctx.set_fill_style_str(scene::TEXT);
        self.ctx.set_text_align("start");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.fill_text(
            &scene::score_text(session.score),
            scene::SCORE_POS.x as f64,
            scene::SCORE_POS.y as f64,
        )?;
        Ok(())
    }

    fn draw_game_over(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.clear();
        self.draw_platform(session);
        self.draw_blades(session)?;

        let title = scene::title_center(self.viewport);
        self.draw_centered_text("Game Over", scene::FONT_TITLE, scene::TEXT, title.x, title.y)?;
        let line = scene::final_score_center(self.viewport);
        self.draw_centered_text(
            &scene::final_score_text(session.score),
            scene::FONT_HUD,
            scene::TEXT,
            line.x,
            line.y,
        )?;

        let button = scene::restart_button(self.viewport);
        self.ctx.set_fill_style_str(scene::BUTTON);
        self.ctx.fill_rect(
            button.left() as f64,
            button.top() as f64,
            button.size.x as f64,
            button.size.y as f64,
        );
        let label = button.center();
        self.draw_centered_text("Restart", scene::FONT_HUD, scene::BUTTON_TEXT, label.x, label.y)?;
        Ok(())
    }
}
