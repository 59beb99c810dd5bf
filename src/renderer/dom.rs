//! Retained-mode renderer: persistent absolutely-positioned elements
//!
//! Elements are created once (fragments on the first squished frame, the
//! game-over panel on the terminal frame); every frame only moves, rotates,
//! shows or hides them.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::Renderer;
use super::scene::{self, FRAGMENT_RADIUS};
use crate::error::GameError;
use crate::sim::{GameSession, Viewport};

pub struct DomRenderer {
    document: Document,
    root: HtmlElement,
    viewport: Viewport,
    platform: HtmlElement,
    fruit: HtmlElement,
    blades: Vec<HtmlElement>,
    fragments: Vec<HtmlElement>,
    /// Reused between frames, extra ones hidden
    streaks: Vec<HtmlElement>,
    score: HtmlElement,
    last_score: Option<u64>,
}

fn create_div(
    document: &Document,
    parent: &HtmlElement,
    css: &str,
) -> Result<HtmlElement, GameError> {
    let el = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GameError::Dom("created element is not an HtmlElement".to_string()))?;
    el.set_attribute("style", &format!("position:absolute;left:0;top:0;{css}"))?;
    parent.append_child(&el)?;
    Ok(el)
}

fn translate(el: &HtmlElement, pos: Vec2) -> Result<(), GameError> {
    el.style()
        .set_property("transform", &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y))?;
    Ok(())
}

fn set_visible(el: &HtmlElement, visible: bool) -> Result<(), GameError> {
    el.style()
        .set_property("display", if visible { "block" } else { "none" })?;
    Ok(())
}

impl DomRenderer {
    /// Build the element tree inside `root` for this session's layout
    pub fn new(
        document: &Document,
        root: HtmlElement,
        session: &GameSession,
    ) -> Result<Self, GameError> {
        let viewport = session.viewport;
        root.set_attribute(
            "style",
            &format!(
                "position:relative;overflow:hidden;width:{}px;height:{}px;background:{}",
                viewport.width,
                viewport.height,
                scene::BACKGROUND
            ),
        )?;

        let p = &session.platform;
        let platform = create_div(
            document,
            &root,
            &format!(
                "width:{}px;height:{}px;box-sizing:border-box;background:{};border:{}px solid {}",
                p.width,
                p.height,
                scene::WOOD,
                scene::WOOD_EDGE_WIDTH,
                scene::WOOD_EDGE
            ),
        )?;

        let f = &session.fruit;
        let fruit = create_div(
            document,
            &root,
            &format!(
                "width:{0}px;height:{0}px;border-radius:50%;background:{1}",
                f.size,
                scene::APPLE
            ),
        )?;
        let stem = scene::apple_stem(f);
        create_div(
            document,
            &fruit,
            &format!(
                "left:{}px;width:{}px;height:{}px;background:{}",
                stem.left() - f.pos.x,
                stem.size.x,
                stem.size.y,
                scene::STEM
            ),
        )?;

        let blades = session
            .blades
            .iter()
            .map(|blade| {
                create_div(
                    document,
                    &root,
                    &format!(
                        "left:{}px;top:{}px;width:{2}px;height:{2}px;background:{3};clip-path:{4}",
                        blade.pos.x - blade.size,
                        blade.pos.y - blade.size,
                        blade.size * 2.0,
                        scene::BLADE,
                        scene::blade_clip_path(blade)
                    ),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let score = create_div(
            document,
            &root,
            &format!(
                "left:{}px;top:{}px;font:{};color:{}",
                scene::SCORE_POS.x,
                scene::SCORE_POS.y - 24.0,
                scene::FONT_HUD,
                scene::TEXT
            ),
        )?;

        log::info!(
            "DOM renderer ready ({}x{}, {} blades)",
            viewport.width,
            viewport.height,
            blades.len()
        );

        Ok(Self {
            document: document.clone(),
            root,
            viewport,
            platform,
            fruit,
            blades,
            fragments: Vec::new(),
            streaks: Vec::new(),
            score,
            last_score: None,
        })
    }

    fn update_platform_and_blades(&self, session: &GameSession) -> Result<(), GameError> {
        translate(&self.platform, Vec2::new(session.platform.x, session.platform.y))?;
        for (el, blade) in self.blades.iter().zip(&session.blades) {
            el.style()
                .set_property("transform", &format!("rotate({:.4}rad)", blade.angle))?;
        }
        Ok(())
    }

    fn update_fragments(&mut self, session: &GameSession) -> Result<(), GameError> {
        while self.fragments.len() < session.fragments.len() {
            let el = create_div(
                &self.document,
                &self.root,
                &format!(
                    "width:{0}px;height:{0}px;border-radius:50%;background:{1}",
                    FRAGMENT_RADIUS * 2.0,
                    scene::FRAGMENT
                ),
            )?;
            self.fragments.push(el);
        }
        for (el, fragment) in self.fragments.iter().zip(&session.fragments) {
            translate(el, fragment.pos - Vec2::splat(FRAGMENT_RADIUS))?;
        }

        while self.streaks.len() < session.streaks.len() {
            let el = create_div(
                &self.document,
                &self.root,
                &format!("height:1px;transform-origin:0 50%;background:{}", scene::FRAGMENT),
            )?;
            self.streaks.push(el);
        }
        for (i, el) in self.streaks.iter().enumerate() {
            match session.streaks.get(i) {
                Some(streak) => {
                    let d = streak.to - streak.from;
                    let style = el.style();
                    style.set_property("width", &format!("{:.2}px", d.length()))?;
                    style.set_property(
                        "transform",
                        &format!(
                            "translate({:.2}px, {:.2}px) rotate({:.4}rad)",
                            streak.from.x,
                            streak.from.y,
                            d.to_angle()
                        ),
                    )?;
                    set_visible(el, true)?;
                }
                None => set_visible(el, false)?,
            }
        }
        Ok(())
    }

    fn update_score(&mut self, score: u64) {
        if self.last_score != Some(score) {
            self.score.set_text_content(Some(&scene::score_text(score)));
            self.last_score = Some(score);
        }
    }

    fn centered_text(
        &self,
        text: &str,
        font: &str,
        color: &str,
        center: Vec2,
    ) -> Result<HtmlElement, GameError> {
        let el = create_div(
            &self.document,
            &self.root,
            &format!(
                concat!(
                    "left:{}px;top:{}px;transform:translate(-50%, -50%);",
                    "white-space:nowrap;font:{};color:{}"
                ),
                center.x, center.y, font, color
            ),
        )?;
        el.set_text_content(Some(text));
        Ok(el)
    }
}

impl Renderer for DomRenderer {
    fn draw_frame(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.update_platform_and_blades(session)?;

        let fruit_visible = session.fruit_visible();
        set_visible(&self.fruit, fruit_visible)?;
        if fruit_visible {
            translate(&self.fruit, session.fruit.pos)?;
        } else if session.is_squished() {
            self.update_fragments(session)?;
        }

        self.update_score(session.score);
        Ok(())
    }

    fn draw_game_over(&mut self, session: &GameSession) -> Result<(), GameError> {
        self.update_platform_and_blades(session)?;
        set_visible(&self.fruit, false)?;
        set_visible(&self.score, false)?;
        for el in self.fragments.iter().chain(&self.streaks) {
            set_visible(el, false)?;
        }

        self.centered_text(
            "Game Over",
            scene::FONT_TITLE,
            scene::TEXT,
            scene::title_center(self.viewport),
        )?;
        self.centered_text(
            &scene::final_score_text(session.score),
            scene::FONT_HUD,
            scene::TEXT,
            scene::final_score_center(self.viewport),
        )?;

        let rect = scene::restart_button(self.viewport);
        let button = self
            .document
            .create_element("button")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GameError::Dom("created button is not an HtmlElement".to_string()))?;
        button.set_id("restart-btn");
        button.set_attribute(
            "style",
            &format!(
                concat!(
                    "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
                    "border:none;background:{};color:{};font:{}"
                ),
                rect.left(),
                rect.top(),
                rect.size.x,
                rect.size.y,
                scene::BUTTON,
                scene::BUTTON_TEXT,
                scene::FONT_HUD
            ),
        )?;
        button.set_text_content(Some("Restart"));
        self.root.append_child(&button)?;
        Ok(())
    }
}
