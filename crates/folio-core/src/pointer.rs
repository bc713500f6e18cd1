//! Pointer-follow effects: the eased custom cursor and magnetic buttons.

use std::ops::{Add, Mul, Sub};

/// A position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

// ============================================================================
// Custom Cursor
// ============================================================================

/// First-order follow of the raw pointer.
///
/// `target` tracks the latest pointer position. Each animation frame moves
/// `rendered` toward it by `ease` of the remaining distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollow {
    target: Point,
    rendered: Point,
    ease: f64,
}

impl CursorFollow {
    /// Start at rest on `start` (the viewport centre on page load).
    pub fn new(start: Point, ease: f64) -> Self {
        Self {
            target: start,
            rendered: start,
            ease: ease.clamp(0.0, 1.0),
        }
    }

    /// Record a new raw pointer position.
    pub fn aim(&mut self, target: Point) {
        self.target = target;
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn rendered(&self) -> Point {
        self.rendered
    }

    /// Advance one frame and return the new rendered position.
    pub fn tick(&mut self) -> Point {
        self.rendered = self.rendered + (self.target - self.rendered) * self.ease;
        self.rendered
    }
}

// ============================================================================
// Magnetic Buttons
// ============================================================================

/// Geometry of the magnetic pull around a button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetField {
    /// Pointer distance from the button centre below which the pull applies.
    pub radius: f64,
    /// Largest offset the button moves toward the pointer.
    pub max_offset: f64,
}

impl MagnetField {
    /// Offset of the button for a pointer at `delta` from its centre.
    ///
    /// Scales linearly with distance, reaching `max_offset` at the radius.
    fn offset(&self, delta: Point) -> Point {
        let distance = delta.length();
        if distance == 0.0 || self.radius <= 0.0 {
            return Point::ORIGIN;
        }
        let magnitude = (distance / self.radius).min(1.0);
        delta * (self.max_offset * magnitude / distance)
    }
}

impl Default for MagnetField {
    fn default() -> Self {
        Self {
            radius: 50.0,
            max_offset: 15.0,
        }
    }
}

/// Spring-back transition applied when a button is released.
pub const MAGNET_RELEASE_TRANSITION: &str =
    "transform 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55)";

/// Per-button magnetic state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Magnet {
    /// At rest (or springing back to rest).
    #[default]
    Idle,
    /// Pulled toward the pointer by `offset`.
    Attracted { offset: Point },
}

impl Magnet {
    /// Update for a pointer move.
    ///
    /// Returns `true` when the rendered style changes.
    pub fn track(&mut self, field: &MagnetField, center: Point, pointer: Point) -> bool {
        let delta = pointer - center;
        if delta.length() < field.radius {
            let next = Magnet::Attracted {
                offset: field.offset(delta),
            };
            let changed = *self != next;
            *self = next;
            changed
        } else {
            self.release()
        }
    }

    /// Return to rest. Returns `true` if the button was attracted.
    pub fn release(&mut self) -> bool {
        let was_attracted = self.is_attracted();
        *self = Magnet::Idle;
        was_attracted
    }

    pub fn is_attracted(&self) -> bool {
        matches!(self, Magnet::Attracted { .. })
    }

    /// CSS `transform` for the button.
    pub fn transform(&self) -> String {
        match self {
            Magnet::Idle => "translate(0, 0)".to_string(),
            Magnet::Attracted { offset } => format!("translate({}px, {}px)", offset.x, offset.y),
        }
    }

    /// CSS `transition` for the button. Attraction follows the pointer immediately.
    pub fn transition(&self) -> &'static str {
        match self {
            Magnet::Idle => MAGNET_RELEASE_TRANSITION,
            Magnet::Attracted { .. } => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cursor_starts_at_rest() {
        let mut cursor = CursorFollow::new(Point::new(400.0, 300.0), 0.15);
        assert_eq!(cursor.tick(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_cursor_moves_fraction_of_remaining_distance() {
        let mut cursor = CursorFollow::new(Point::ORIGIN, 0.15);
        cursor.aim(Point::new(100.0, -200.0));
        let p = cursor.tick();
        assert!(approx(p.x, 15.0));
        assert!(approx(p.y, -30.0));
        let p = cursor.tick();
        assert!(approx(p.x, 15.0 + 85.0 * 0.15));
    }

    #[test]
    fn test_cursor_converges_to_target() {
        let mut cursor = CursorFollow::new(Point::ORIGIN, 0.15);
        let target = Point::new(640.0, 360.0);
        cursor.aim(target);
        for _ in 0..200 {
            cursor.tick();
        }
        assert!(cursor.rendered().distance(target) < 1e-6);
        assert_eq!(cursor.target(), target);
    }

    #[test]
    fn test_magnet_attracts_inside_radius() {
        let field = MagnetField::default();
        let mut magnet = Magnet::Idle;
        let center = Point::new(100.0, 100.0);

        // Exactly on the radius does not attract
        assert!(!magnet.track(&field, center, Point::new(130.0, 140.0)));
        assert!(magnet.track(&field, center, Point::new(120.0, 130.0)));
        let Magnet::Attracted { offset } = magnet else {
            panic!("expected attraction");
        };
        assert!(offset.length() <= field.max_offset);
        assert_eq!(magnet.transition(), "none");
    }

    #[test]
    fn test_magnet_offset_scales_with_distance() {
        let field = MagnetField::default();
        let mut magnet = Magnet::Idle;
        let center = Point::ORIGIN;

        magnet.track(&field, center, Point::new(25.0, 0.0));
        let Magnet::Attracted { offset } = magnet else {
            panic!("expected attraction");
        };
        assert!(approx(offset.x, 7.5));
        assert!(approx(offset.y, 0.0));

        magnet.track(&field, center, Point::new(0.0, -40.0));
        let Magnet::Attracted { offset } = magnet else {
            panic!("expected attraction");
        };
        assert!(approx(offset.y, -12.0));
        assert!(offset.length() < field.max_offset);
    }

    #[test]
    fn test_magnet_transform_string() {
        let field = MagnetField {
            radius: 50.0,
            max_offset: 25.0,
        };
        let mut magnet = Magnet::Idle;
        magnet.track(&field, Point::ORIGIN, Point::new(25.0, 0.0));
        assert_eq!(magnet.transform(), "translate(12.5px, 0px)");
    }

    #[test]
    fn test_magnet_zero_distance_has_no_offset() {
        let field = MagnetField::default();
        let mut magnet = Magnet::Idle;
        magnet.track(&field, Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(
            magnet,
            Magnet::Attracted {
                offset: Point::ORIGIN
            }
        );
    }

    #[test]
    fn test_magnet_releases_outside_radius() {
        let field = MagnetField::default();
        let mut magnet = Magnet::Idle;
        let center = Point::ORIGIN;

        // Outside while idle: nothing to change
        assert!(!magnet.track(&field, center, Point::new(80.0, 0.0)));

        magnet.track(&field, center, Point::new(10.0, 10.0));
        assert!(magnet.is_attracted());
        assert!(magnet.track(&field, center, Point::new(60.0, 0.0)));
        assert_eq!(magnet, Magnet::Idle);
        assert_eq!(magnet.transform(), "translate(0, 0)");
        assert_eq!(magnet.transition(), MAGNET_RELEASE_TRANSITION);
    }

    #[test]
    fn test_release_reports_only_real_transitions() {
        let mut magnet = Magnet::Idle;
        assert!(!magnet.release());
        magnet = Magnet::Attracted {
            offset: Point::new(1.0, 1.0),
        };
        assert!(magnet.release());
        assert!(!magnet.release());
    }
}
