// SPDX-License-Identifier: MIT

//! Distance engine: boundary clearances for the reference object (the shed)
//! and nearest-distance segments from it to every other placed object.
//!
//! Distances are Euclidean feet, never rounded in stored values; the label
//! text is the only place display rounding happens. Boundary clearances are
//! clamped to zero, but an exceeded edge is reported as a
//! [`BoundaryViolation`] instead of being silently hidden.

use crate::geom::{
    nearest_point_on_rect, nearest_segment_between_rects, FtPoint, FtRect, FtSegment,
};
use crate::layout::{LayoutData, ObjectKind};

/// One side of the property boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Front,
    Back,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Front, Edge::Back];

    /// Lowercase name used in messages and guide labels.
    pub fn label(&self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Front => "front",
            Edge::Back => "back",
        }
    }
}

/// A measured distance plus the feet-space segment it was measured along.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSegment {
    pub segment: FtSegment,
    pub feet: f64,
    pub label: String,
}

impl DistanceSegment {
    fn new(segment: FtSegment, feet: f64, prefix: Option<&str>) -> Self {
        let label = match prefix {
            Some(p) => format!("{p} {feet:.1} ft"),
            None => format!("{feet:.1} ft"),
        };
        Self {
            segment,
            feet,
            label,
        }
    }
}

/// Clearance from the reference object to one property edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeClearance {
    pub edge: Edge,
    pub measure: DistanceSegment,
}

/// A placed object extends past the property boundary on the given edge.
/// Non-fatal; the clearance is clamped to zero but the condition is surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryViolation {
    pub kind: ObjectKind,
    pub edge: Edge,
    pub overshoot_ft: f64,
}

/// Everything the renderer needs to draw distance guides for one layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClearanceReport {
    pub edges: Vec<EdgeClearance>,
    pub objects: Vec<DistanceSegment>,
    pub violations: Vec<BoundaryViolation>,
}

/// Measure boundary clearances and object distances with the shed as the
/// reference object. Returns `None` when the shed is absent or unplaced.
/// Segment and edge order is fixed, so downstream label placement is
/// deterministic.
pub fn measure(layout: &LayoutData) -> Option<ClearanceReport> {
    let prop = &layout.boundary;
    let width = prop.width();
    let height = prop.height();

    let shed = layout.shed.as_ref()?;
    let shed_rect = shed.rect(height)?;
    let (shed_x, shed_y) = (shed.x?, shed.y?);

    let mut report = ClearanceReport::default();
    let center = shed_rect.center();

    // Raw (unclamped) distances; the sign carries the overshoot.
    let raw = [
        (Edge::Left, shed_x),
        (Edge::Right, width - (shed_x + shed.width)),
        (Edge::Front, shed_y),
        (Edge::Back, height - (shed_y + shed.height)),
    ];

    for (edge, raw_ft) in raw {
        let feet = raw_ft.max(0.0);
        if raw_ft < 0.0 {
            report.violations.push(BoundaryViolation {
                kind: ObjectKind::Shed,
                edge,
                overshoot_ft: -raw_ft,
            });
        }
        // Guides run from the shed edge to the property edge, through the
        // shed center line. Front is the bottom of the top-origin frame.
        let segment = match edge {
            Edge::Left => FtSegment::new(
                FtPoint::new(0.0, center.y),
                FtPoint::new(shed_rect.left, center.y),
            ),
            Edge::Right => FtSegment::new(
                FtPoint::new(shed_rect.right, center.y),
                FtPoint::new(width, center.y),
            ),
            Edge::Front => FtSegment::new(
                FtPoint::new(center.x, shed_rect.bottom),
                FtPoint::new(center.x, height),
            ),
            Edge::Back => FtSegment::new(
                FtPoint::new(center.x, 0.0),
                FtPoint::new(center.x, shed_rect.top),
            ),
        };
        report.edges.push(EdgeClearance {
            edge,
            measure: DistanceSegment::new(segment, feet, None),
        });
    }

    // Nearest segments to each other placed object, fixed order.
    if let Some(house_rect) = layout.house.as_ref().and_then(|h| h.rect(height)) {
        let seg = nearest_segment_between_rects(&shed_rect, &house_rect);
        report
            .objects
            .push(DistanceSegment::new(seg, seg.length(), Some("House")));
        check_rect_bounds(&mut report, ObjectKind::House, &house_rect, width, height);
    }
    if let Some(p) = layout.well.as_ref().and_then(|w| w.point(height)) {
        let seg = nearest_point_on_rect(&shed_rect, p);
        report
            .objects
            .push(DistanceSegment::new(seg, seg.length(), Some("Well")));
        check_point_bounds(&mut report, ObjectKind::Well, p, width, height);
    }
    if let Some(p) = layout.septic.as_ref().and_then(|s| s.point(height)) {
        let seg = nearest_point_on_rect(&shed_rect, p);
        report
            .objects
            .push(DistanceSegment::new(seg, seg.length(), Some("Septic")));
        check_point_bounds(&mut report, ObjectKind::Septic, p, width, height);
    }

    Some(report)
}

fn check_rect_bounds(
    report: &mut ClearanceReport,
    kind: ObjectKind,
    rect: &FtRect,
    width: f64,
    height: f64,
) {
    let overshoots = [
        (Edge::Left, -rect.left),
        (Edge::Right, rect.right - width),
        (Edge::Back, -rect.top),
        (Edge::Front, rect.bottom - height),
    ];
    for (edge, overshoot_ft) in overshoots {
        if overshoot_ft > 0.0 {
            report.violations.push(BoundaryViolation {
                kind,
                edge,
                overshoot_ft,
            });
        }
    }
}

fn check_point_bounds(
    report: &mut ClearanceReport,
    kind: ObjectKind,
    p: FtPoint,
    width: f64,
    height: f64,
) {
    let rect = FtRect::new(p.x, p.y, p.x, p.y);
    check_rect_bounds(report, kind, &rect, width, height);
}
