//! Geometry primitives and anchor resolution for the fly animation.
//!
//! Anchors are looked up lazily: every call to [`resolve`] measures the
//! current layout, so values follow layout shifts between frames.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Symbolic targets the fly can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKey {
    /// The pill heading at the top of the hero
    Pill,
    /// The "Start Audit" call-to-action button
    Cta,
    /// Top-center of the iPad mockup bezel
    Ipad,
}

impl AnchorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorKey::Pill => "pill",
            AnchorKey::Cta => "cta",
            AnchorKey::Ipad => "ipad",
        }
    }
}

impl fmt::Display for AnchorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2D point, relative to the container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts a sprite center into the sprite's top-left corner
    pub fn to_top_left(self, sprite: Size) -> Point {
        Point::new(self.x - sprite.width / 2.0, self.y - sprite.height / 2.0)
    }

    /// Converts a sprite top-left corner back into its center
    pub fn to_center(self, sprite: Size) -> Point {
        Point::new(self.x + sprite.width / 2.0, self.y + sprite.height / 2.0)
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

/// Sprite dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measured bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pixel adjustment applied after resolving an anchor's center.
/// Missing components count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: Option<f64>,
    pub dy: Option<f64>,
}

impl Offset {
    pub const fn y(dy: f64) -> Self {
        Self {
            dx: None,
            dy: Some(dy),
        }
    }

    pub const fn xy(dx: f64, dy: f64) -> Self {
        Self {
            dx: Some(dx),
            dy: Some(dy),
        }
    }

    fn as_point(&self) -> Point {
        Point::new(self.dx.unwrap_or(0.0), self.dy.unwrap_or(0.0))
    }
}

/// Something whose current layout box can be measured.
///
/// Returns `None` while the underlying element is not mounted.
pub trait Measure {
    fn measure(&self) -> Option<Rect>;
}

impl Measure for Rect {
    fn measure(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Measure for Option<Rect> {
    fn measure(&self) -> Option<Rect> {
        *self
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self) -> Option<Rect> {
        (**self).measure()
    }
}

/// Non-owning lookup from anchor key to element handle
pub type AnchorMap<M> = HashMap<AnchorKey, M>;

/// Per-anchor pixel offsets
pub type OffsetMap = HashMap<AnchorKey, Offset>;

/// Resolves the container-relative center of `key`'s element, shifted by
/// its offset. Logs and returns `None` when the container or the target is
/// not measurable.
pub fn resolve<M: Measure, C: Measure + ?Sized>(
    key: AnchorKey,
    anchors: &AnchorMap<M>,
    offsets: &OffsetMap,
    container: &C,
) -> Option<Point> {
    let Some(container_rect) = container.measure() else {
        leptos::logging::warn!("FlyAnimation: container not mounted, cannot resolve '{}'", key);
        return None;
    };

    let Some(target_rect) = anchors.get(&key).and_then(|handle| handle.measure()) else {
        leptos::logging::warn!("FlyAnimation: target element not found for key: {}", key);
        return None;
    };

    let offset = offsets.get(&key).copied().unwrap_or_default();
    let origin = Point::new(container_rect.left, container_rect.top);

    Some(target_rect.center() - origin + offset.as_point())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(100.0, 50.0, 1200.0, 800.0)
    }

    #[test]
    fn test_resolve_returns_center_relative_to_container() {
        let mut anchors = AnchorMap::new();
        anchors.insert(AnchorKey::Cta, Rect::new(300.0, 250.0, 120.0, 40.0));

        let point = resolve(AnchorKey::Cta, &anchors, &OffsetMap::new(), &container());

        assert_eq!(point, Some(Point::new(260.0, 220.0)));
    }

    #[test]
    fn test_resolve_applies_offset() {
        let mut anchors = AnchorMap::new();
        anchors.insert(AnchorKey::Pill, Rect::new(100.0, 50.0, 20.0, 20.0));
        let mut offsets = OffsetMap::new();
        offsets.insert(AnchorKey::Pill, Offset::y(-690.0));

        let point = resolve(AnchorKey::Pill, &anchors, &offsets, &container()).unwrap();

        assert_eq!(point, Point::new(10.0, -680.0));
    }

    #[test]
    fn test_resolve_partial_offset_defaults_to_zero() {
        let mut anchors = AnchorMap::new();
        anchors.insert(AnchorKey::Ipad, Rect::new(100.0, 50.0, 10.0, 10.0));
        let mut offsets = OffsetMap::new();
        offsets.insert(
            AnchorKey::Ipad,
            Offset {
                dx: Some(3.0),
                dy: None,
            },
        );

        let point = resolve(AnchorKey::Ipad, &anchors, &offsets, &container()).unwrap();

        assert_eq!(point, Point::new(8.0, 5.0));
    }

    #[test]
    fn test_resolve_missing_key_is_none() {
        let anchors: AnchorMap<Rect> = AnchorMap::new();

        assert!(resolve(AnchorKey::Ipad, &anchors, &OffsetMap::new(), &container()).is_none());
    }

    #[test]
    fn test_resolve_unmounted_target_is_none() {
        let mut anchors: AnchorMap<Option<Rect>> = AnchorMap::new();
        anchors.insert(AnchorKey::Ipad, None);

        assert!(resolve(AnchorKey::Ipad, &anchors, &OffsetMap::new(), &container()).is_none());
    }

    #[test]
    fn test_resolve_missing_container_is_none() {
        let mut anchors = AnchorMap::new();
        anchors.insert(AnchorKey::Cta, Rect::new(0.0, 0.0, 10.0, 10.0));
        let container: Option<Rect> = None;

        assert!(resolve(AnchorKey::Cta, &anchors, &OffsetMap::new(), &container).is_none());
    }

    #[test]
    fn test_resolved_point_is_finite() {
        let mut anchors = AnchorMap::new();
        for (i, key) in [AnchorKey::Pill, AnchorKey::Cta, AnchorKey::Ipad]
            .into_iter()
            .enumerate()
        {
            anchors.insert(key, Rect::new(i as f64 * 200.0, 400.0, 64.0, 32.0));
        }

        for key in [AnchorKey::Pill, AnchorKey::Cta, AnchorKey::Ipad] {
            let point = resolve(key, &anchors, &OffsetMap::new(), &container()).unwrap();
            assert!(point.is_finite());
        }
    }

    #[test]
    fn test_top_left_center_conversion() {
        let sprite = Size::new(40.0, 30.0);
        let center = Point::new(100.0, 100.0);

        assert_eq!(center.to_top_left(sprite), Point::new(80.0, 85.0));
        assert_eq!(center.to_top_left(sprite).to_center(sprite), center);
    }

    #[test]
    fn test_anchor_key_display() {
        assert_eq!(AnchorKey::Pill.to_string(), "pill");
        assert_eq!(AnchorKey::Cta.to_string(), "cta");
        assert_eq!(AnchorKey::Ipad.to_string(), "ipad");
    }
}
