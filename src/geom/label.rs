// SPDX-License-Identifier: MIT

//! Label placement with collision avoidance.
//!
//! Works entirely in device units so the same engine serves the interactive
//! canvas and the export page. A placer is built fresh for every full redraw:
//! it accumulates the boxes of labels already committed during the pass, and
//! each new label prefers its segment midpoint, then searches outward in
//! discrete rings of eight directions until it finds a clear spot. A
//! displaced label gets a leader line back to its anchor; if the bounded
//! search exhausts, the label falls back to the midpoint and is marked
//! crowded. Placement never fails — worst case is visual overlap.
//!
//! Processing order is part of observable behavior: the first segment placed
//! wins contested positions.

use crate::geom::{DevPoint, DevRect};

/// Padding added around the measured text box, device units.
pub const LABEL_PADDING: f32 = 3.0;
/// Outward search ring increment, device units.
pub const RADIUS_STEP: f32 = 8.0;
/// Bounded search maximum, device units.
pub const MAX_RADIUS: f32 = 64.0;
/// Average glyph advance as a fraction of font size. A constant metric keeps
/// the engine device-agnostic; both surfaces draw small sans-serif text that
/// this tracks closely enough for collision boxes.
const CHAR_ADVANCE: f32 = 0.55;

/// Approximate device-space extent of a rendered label.
pub fn text_extent(text: &str, font_size: f32) -> (f32, f32) {
    let width = text.chars().count() as f32 * font_size * CHAR_ADVANCE;
    (width, font_size)
}

/// Where one label ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    /// Committed label box, device space.
    pub rect: DevRect,
    /// The original segment midpoint the label belongs to.
    pub anchor: DevPoint,
    /// Leader line from the anchor to the displaced label, if displaced.
    pub leader: Option<(DevPoint, DevPoint)>,
    /// Search exhausted; the label overlaps something at the midpoint.
    pub crowded: bool,
}

/// Per-redraw placement state. Build one per full redraw, feed it the fixed
/// obstacles, then place labels in segment order.
#[derive(Debug)]
pub struct LabelPlacer {
    /// Drawable area; candidates must stay inside (already inset by the edge
    /// margin the caller wants to keep clear).
    bounds: DevRect,
    font_size: f32,
    avoid: Vec<DevRect>,
    placed: Vec<DevRect>,
}

impl LabelPlacer {
    pub fn new(bounds: DevRect, font_size: f32) -> Self {
        Self {
            bounds,
            font_size,
            avoid: Vec::new(),
            placed: Vec::new(),
        }
    }

    /// Register a fixed obstacle (an object's device box, usually inflated).
    pub fn avoid(&mut self, rect: DevRect) {
        self.avoid.push(rect);
    }

    pub fn placed_boxes(&self) -> &[DevRect] {
        &self.placed
    }

    /// Place a label for the segment `a`..`b`.
    pub fn place(&mut self, a: DevPoint, b: DevPoint, text: &str) -> LabelPlacement {
        let mid = DevPoint::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
        let (tw, th) = text_extent(text, self.font_size);
        let w = tw + 2.0 * LABEL_PADDING;
        let h = th + 2.0 * LABEL_PADDING;

        let midpoint_box = DevRect::from_center_size(mid, w, h);
        if self.is_free(&midpoint_box) {
            self.placed.push(midpoint_box);
            return LabelPlacement {
                text: text.to_string(),
                rect: midpoint_box,
                anchor: mid,
                leader: None,
                crowded: false,
            };
        }

        // The segment's own bbox only constrains displaced candidates: a
        // displaced label must not land back on its own line elsewhere.
        let seg_box = DevRect::from_points(a, b).inflate(2.0);

        let dirs = search_directions(a, b);
        let mut radius = RADIUS_STEP;
        while radius <= MAX_RADIUS {
            for (dx, dy) in dirs {
                let center = DevPoint::new(mid.x + dx * radius, mid.y + dy * radius);
                let cand = DevRect::from_center_size(center, w, h);
                if self.is_free(&cand) && !cand.intersects(&seg_box) {
                    self.placed.push(cand);
                    return LabelPlacement {
                        text: text.to_string(),
                        rect: cand,
                        anchor: mid,
                        leader: Some((mid, center)),
                        crowded: false,
                    };
                }
            }
            radius += RADIUS_STEP;
        }

        // Exhausted: accept the overlap at the midpoint, flagged.
        self.placed.push(midpoint_box);
        LabelPlacement {
            text: text.to_string(),
            rect: midpoint_box,
            anchor: mid,
            leader: None,
            crowded: true,
        }
    }

    fn is_free(&self, cand: &DevRect) -> bool {
        if !self.bounds.contains_rect(cand) {
            return false;
        }
        if self.avoid.iter().any(|o| o.intersects(cand)) {
            return false;
        }
        if self.placed.iter().any(|o| o.intersects(cand)) {
            return false;
        }
        true
    }
}

/// The eight ring directions for one segment: perpendicular first, then
/// parallel, then the diagonals, in a fixed order so the search is
/// deterministic.
fn search_directions(a: DevPoint, b: DevPoint) -> [(f32, f32); 8] {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = if len > f32::EPSILON {
        (dx / len, dy / len)
    } else {
        (1.0, 0.0)
    };
    let (vx, vy) = (-uy, ux);

    let norm = |x: f32, y: f32| {
        let l = (x * x + y * y).sqrt();
        (x / l, y / l)
    };

    [
        (vx, vy),
        (-vx, -vy),
        (ux, uy),
        (-ux, -uy),
        norm(ux + vx, uy + vy),
        norm(ux - vx, uy - vy),
        norm(-ux + vx, -uy + vy),
        norm(-ux - vx, -uy - vy),
    ]
}
