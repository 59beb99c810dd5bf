//! Renderer-independent layout
//!
//! Colours, text placement and blade geometry shared by the canvas and DOM
//! renderers so both draw the same picture.

use std::f32::consts::{FRAC_PI_6, TAU};

use glam::Vec2;

use crate::sim::{Blade, Fruit, Rect, Viewport};

pub const BACKGROUND: &str = "white";
pub const WOOD: &str = "#964B00";
pub const WOOD_EDGE: &str = "#5C4033";
pub const WOOD_EDGE_WIDTH: f64 = 2.0;
pub const APPLE: &str = "red";
pub const STEM: &str = "green";
pub const BLADE: &str = "gray";
pub const FRAGMENT: &str = "red";
pub const TEXT: &str = "black";
pub const BUTTON: &str = "green";
pub const BUTTON_TEXT: &str = "white";

pub const FONT_HUD: &str = "24px Arial";
pub const FONT_TITLE: &str = "48px Arial";

/// Top-left of the running score text baseline
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 30.0);

pub const FRAGMENT_RADIUS: f32 = 2.0;
pub const STEM_SIZE: Vec2 = Vec2::new(4.0, 8.0);

pub const RESTART_BUTTON_SIZE: Vec2 = Vec2::new(100.0, 50.0);
/// Vertical offset of the button top from the viewport centre
const RESTART_BUTTON_OFFSET: f32 = 100.0;
/// Vertical offset of the "Game Over" title from the viewport centre
const TITLE_OFFSET: f32 = -50.0;

const BLADE_ARMS: usize = 3;
/// Back corner of each arm sits this much closer to the hub than the tip
const BLADE_BACK_RATIO: f32 = 1.5;

pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

pub fn final_score_text(score: u64) -> String {
    format!("Final Score: {score}")
}

/// Centre of the "Game Over" title
pub fn title_center(viewport: Viewport) -> Vec2 {
    Vec2::new(viewport.width / 2.0, viewport.height / 2.0 + TITLE_OFFSET)
}

/// Centre of the final score line
pub fn final_score_center(viewport: Viewport) -> Vec2 {
    Vec2::new(viewport.width / 2.0, viewport.height / 2.0)
}

/// Clickable restart button, centred below the game-over text
pub fn restart_button(viewport: Viewport) -> Rect {
    Rect::new(
        viewport.width / 2.0 - RESTART_BUTTON_SIZE.x / 2.0,
        viewport.height / 2.0 + RESTART_BUTTON_OFFSET,
        RESTART_BUTTON_SIZE.x,
        RESTART_BUTTON_SIZE.y,
    )
}

/// Apple circle (centre, radius) inscribed in the fruit box
pub fn apple_circle(fruit: &Fruit) -> (Vec2, f32) {
    (fruit.bounds().center(), fruit.size / 2.0)
}

/// Stem rectangle on top of the apple
pub fn apple_stem(fruit: &Fruit) -> Rect {
    Rect::new(
        fruit.pos.x + fruit.size / 2.0 - STEM_SIZE.x / 2.0,
        fruit.pos.y,
        STEM_SIZE.x,
        STEM_SIZE.y,
    )
}

/// Triangular arms relative to the hub, before rotation: `[hub, tip, back]`
pub fn blade_arms(size: f32) -> [[Vec2; 3]; BLADE_ARMS] {
    std::array::from_fn(|i| {
        let offset = TAU / BLADE_ARMS as f32 * i as f32;
        let tip = Vec2::from_angle(offset) * size;
        let back = Vec2::from_angle(offset + FRAC_PI_6) * (size / BLADE_BACK_RATIO);
        [Vec2::ZERO, tip, back]
    })
}

/// CSS `clip-path` drawing the blade inside a `2*size` square centred on the hub
pub fn blade_clip_path(blade: &Blade) -> String {
    let center = Vec2::splat(blade.size);
    let points: Vec<String> = blade_arms(blade.size)
        .iter()
        .flat_map(|arm| arm.iter())
        .map(|p| {
            let p = *p + center;
            format!("{:.2}px {:.2}px", p.x, p.y)
        })
        .collect();
    format!("polygon({})", points.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_button_centred_below_text() {
        let button = restart_button(Viewport::new(800.0, 600.0));
        assert_eq!(button, Rect::new(350.0, 400.0, 100.0, 50.0));
        assert!(button.top() > final_score_center(Viewport::new(800.0, 600.0)).y);
        assert_eq!(title_center(Viewport::new(800.0, 600.0)), Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_blade_arms_geometry() {
        let arms = blade_arms(20.0);
        assert!((arms[0][1] - Vec2::new(20.0, 0.0)).length() < 1e-4);
        for arm in &arms {
            assert_eq!(arm[0], Vec2::ZERO);
            assert!((arm[1].length() - 20.0).abs() < 1e-4);
            assert!((arm[2].length() - 20.0 / 1.5).abs() < 1e-4);
        }
        // Arms are a third of a turn apart
        let angle = arms[1][1].to_angle() - arms[0][1].to_angle();
        assert!((angle - TAU / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_apple_shape() {
        let fruit = Fruit {
            pos: Vec2::new(100.0, 50.0),
            vel: Vec2::ZERO,
            size: 40.0,
        };
        assert_eq!(apple_circle(&fruit), (Vec2::new(120.0, 70.0), 20.0));
        assert_eq!(apple_stem(&fruit), Rect::new(118.0, 50.0, 4.0, 8.0));
    }

    #[test]
    fn test_blade_clip_path() {
        let blade = Blade {
            pos: Vec2::new(20.0, 595.0),
            size: 20.0,
            angle: 1.0,
            speed: 0.05,
        };
        let path = blade_clip_path(&blade);
        assert!(path.starts_with("polygon(20.00px 20.00px, 40.00px 20.00px"));
        assert_eq!(path.matches("px ").count(), 9);
    }

    #[test]
    fn test_texts() {
        assert_eq!(score_text(3), "Score: 3");
        assert_eq!(final_score_text(12), "Final Score: 12");
    }
}
