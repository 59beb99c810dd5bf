//! Overlap tests between the fruit box and the other play-field objects
//!
//! The tests are deliberately one-sided: the platform and blades only check the
//! edges the fruit can reach them from, so a fruit sunk deep below the platform
//! top still counts as "on" it.

use glam::Vec2;

use super::state::{Blade, Fruit, Platform};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict containment; points on the border are outside
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }
}

/// Fruit has sunk past the platform top while horizontally over it
pub fn fruit_on_platform(fruit: &Fruit, platform: &Platform) -> bool {
    let f = fruit.bounds();
    f.bottom() > platform.y && f.right() > platform.x && f.left() < platform.x + platform.width
}

/// Fruit box reaches into the blade's square hitbox
pub fn fruit_hits_blade(fruit: &Fruit, blade: &Blade) -> bool {
    let f = fruit.bounds();
    f.bottom() > blade.pos.y - blade.size
        && f.right() > blade.pos.x - blade.size
        && f.left() < blade.pos.x + blade.size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_at(x: f32, y: f32) -> Fruit {
        Fruit {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: 40.0,
        }
    }

    fn platform_at(x: f32, y: f32) -> Platform {
        Platform {
            x,
            y,
            width: 150.0,
            height: 20.0,
        }
    }

    #[test]
    fn test_platform_overlap_edges() {
        let platform = platform_at(100.0, 530.0);

        // Bottom edge exactly on the platform top is not a catch
        assert!(!fruit_on_platform(&fruit_at(120.0, 490.0), &platform));
        assert!(fruit_on_platform(&fruit_at(120.0, 491.0), &platform));

        // Touching either side is not enough
        assert!(!fruit_on_platform(&fruit_at(60.0, 500.0), &platform));
        assert!(fruit_on_platform(&fruit_at(61.0, 500.0), &platform));
        assert!(!fruit_on_platform(&fruit_at(250.0, 500.0), &platform));
        assert!(fruit_on_platform(&fruit_at(249.0, 500.0), &platform));
    }

    #[test]
    fn test_platform_overlap_has_no_lower_bound() {
        let platform = platform_at(100.0, 530.0);
        assert!(fruit_on_platform(&fruit_at(120.0, 900.0), &platform));
    }

    #[test]
    fn test_blade_hitbox() {
        let blade = Blade {
            pos: Vec2::new(20.0, 595.0),
            size: 20.0,
            angle: 0.0,
            speed: 0.05,
        };
        // Box bottom must pass blade.y - size = 575
        assert!(!fruit_hits_blade(&fruit_at(0.0, 535.0), &blade));
        assert!(fruit_hits_blade(&fruit_at(0.0, 536.0), &blade));
        // Horizontal window is (blade.x - size - 40, blade.x + size)
        assert!(!fruit_hits_blade(&fruit_at(-40.0, 560.0), &blade));
        assert!(fruit_hits_blade(&fruit_at(-39.0, 560.0), &blade));
        assert!(!fruit_hits_blade(&fruit_at(40.0, 560.0), &blade));
        assert!(fruit_hits_blade(&fruit_at(39.0, 560.0), &blade));
    }

    #[test]
    fn test_rect_contains_is_strict() {
        let r = Rect::new(350.0, 400.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(400.0, 425.0)));
        assert!(!r.contains(Vec2::new(350.0, 425.0)));
        assert!(!r.contains(Vec2::new(450.0, 425.0)));
        assert!(!r.contains(Vec2::new(400.0, 400.0)));
        assert!(!r.contains(Vec2::new(400.0, 450.0)));
        assert_eq!(r.center(), Vec2::new(400.0, 425.0));
    }
}
