// SPDX-License-Identifier: MIT

//! Feet-space geometry primitives.
//!
//! All property math happens in a top-origin feet coordinate frame: x grows
//! from the left boundary toward the right, y grows from the back (far) edge
//! toward the front. Objects store their y as a distance from the *front*
//! boundary, so every consumer goes through [`flip_front`] exactly once to
//! enter or leave this frame.

pub mod distance;
pub mod label;

/// A point in top-origin feet space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FtPoint {
    pub x: f64,
    pub y: f64,
}

impl FtPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: FtPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle in top-origin feet space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FtRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl FtRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build the top-origin rect for an object stored with front-relative y.
    ///
    /// `top = property_height − (y + height)`, `bottom = property_height − y`.
    pub fn from_front_relative(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        property_height: f64,
    ) -> Self {
        Self {
            left: x,
            top: flip_front(property_height, y, height),
            right: x + width,
            bottom: property_height - y,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> FtPoint {
        FtPoint::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    pub fn contains(&self, p: FtPoint) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// A straight segment between two feet-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FtSegment {
    pub a: FtPoint,
    pub b: FtPoint,
}

impl FtSegment {
    pub fn new(a: FtPoint, b: FtPoint) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(self.b)
    }

    pub fn midpoint(&self) -> FtPoint {
        FtPoint::new((self.a.x + self.b.x) * 0.5, (self.a.y + self.b.y) * 0.5)
    }
}

/// Convert between front-relative and top-origin y for an extent of the given
/// size. The transform is its own inverse, so it serves both directions.
pub fn flip_front(property_height: f64, y: f64, extent: f64) -> f64 {
    property_height - (y + extent)
}

/// Nearest point on (or in) `rect` to `p`, paired with `p` itself so a
/// distance line can be drawn between them. Endpoint `a` lies on the
/// rectangle.
pub fn nearest_point_on_rect(rect: &FtRect, p: FtPoint) -> FtSegment {
    let clamped = FtPoint::new(
        p.x.clamp(rect.left, rect.right),
        p.y.clamp(rect.top, rect.bottom),
    );
    FtSegment::new(clamped, p)
}

/// Nearest segment between two axis-aligned rectangles, one endpoint on each.
///
/// Each axis is resolved independently: a gap contributes the facing edge
/// coordinates, an overlap contributes the midpoint of the shared interval.
/// When the rectangles overlap on both axes there is no meaningful nearest
/// pair, so a representative vertical segment joining the two centers at the
/// shared x-overlap midpoint is returned instead.
pub fn nearest_segment_between_rects(a: &FtRect, b: &FtRect) -> FtSegment {
    let x_gap = a.right < b.left || b.right < a.left;
    let y_gap = a.bottom < b.top || b.bottom < a.top;

    if !x_gap && !y_gap {
        let shared_x = (a.left.max(b.left) + a.right.min(b.right)) * 0.5;
        return FtSegment::new(
            FtPoint::new(shared_x, a.center().y),
            FtPoint::new(shared_x, b.center().y),
        );
    }

    let (ax, bx) = if a.right < b.left {
        (a.right, b.left)
    } else if b.right < a.left {
        (a.left, b.right)
    } else {
        let mid = (a.left.max(b.left) + a.right.min(b.right)) * 0.5;
        (mid, mid)
    };

    let (ay, by) = if a.bottom < b.top {
        (a.bottom, b.top)
    } else if b.bottom < a.top {
        (a.top, b.bottom)
    } else {
        let mid = (a.top.max(b.top) + a.bottom.min(b.bottom)) * 0.5;
        (mid, mid)
    };

    FtSegment::new(FtPoint::new(ax, ay), FtPoint::new(bx, by))
}

/// A point in device space (canvas pixels or page points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevPoint {
    pub x: f32,
    pub y: f32,
}

impl DevPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned device-space rectangle, stored normalized (min ≤ max on
/// both axes) so it behaves the same on top-origin and bottom-origin
/// surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl DevRect {
    pub fn from_points(a: DevPoint, b: DevPoint) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn from_center_size(center: DevPoint, width: f32, height: f32) -> Self {
        Self {
            min_x: center.x - width * 0.5,
            min_y: center.y - height * 0.5,
            max_x: center.x + width * 0.5,
            max_y: center.y + height * 0.5,
        }
    }

    pub fn center(&self) -> DevPoint {
        DevPoint::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn inflate(&self, by: f32) -> Self {
        Self {
            min_x: self.min_x - by,
            min_y: self.min_y - by,
            max_x: self.max_x + by,
            max_y: self.max_y + by,
        }
    }

    pub fn intersects(&self, other: &DevRect) -> bool {
        !(self.max_x <= other.min_x
            || other.max_x <= self.min_x
            || self.max_y <= other.min_y
            || other.max_y <= self.min_y)
    }

    pub fn contains_rect(&self, other: &DevRect) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn contains_point(&self, p: DevPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
