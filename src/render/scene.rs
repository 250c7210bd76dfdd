// SPDX-License-Identifier: MIT

//! Shared scene builder.
//!
//! Turns a layout into device-space draw commands for whichever surface owns
//! the [`DeviceMap`]. The interactive canvas and the PDF export both come
//! through here, so grid, boundary, objects, guides and labels can never
//! drift apart between the live view and the printout.

use crate::geom::distance::{self, BoundaryViolation, ClearanceReport};
use crate::geom::label::LabelPlacer;
use crate::geom::{DevPoint, DevRect, FtPoint};
use crate::layout::{LayoutData, ObjectKind};
use crate::render::{palette, DeviceMap, DrawCmd, Rgba, TextAlign, GRID_SPACING_FT};

/// Device radius for well/septic markers.
pub const POINT_RADIUS: f32 = 6.0;
/// Slack outside the property area that labels may use.
const LABEL_BOUNDS_SLACK: f32 = 12.0;
/// Inflation applied to object boxes before label avoidance.
const AVOID_INFLATE: f32 = 4.0;
/// Length of the stub drawn on crowded labels.
const CROWDED_STUB: f32 = 6.0;

const LABEL_FONT: f32 = 9.0;
const TICK_FONT: f32 = 7.0;
const NAME_FONT: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct SceneOptions {
    pub show_grid: bool,
    pub show_guides: bool,
    pub grid_spacing_ft: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_guides: true,
            grid_spacing_ft: GRID_SPACING_FT,
        }
    }
}

/// The draw list for one full redraw, plus the measurements it was built
/// from. Violations are surfaced so the caller can warn without re-measuring.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub cmds: Vec<DrawCmd>,
    pub report: Option<ClearanceReport>,
    pub violations: Vec<BoundaryViolation>,
}

/// Build the full scene for one redraw. Draw order is grid, guides, objects,
/// labels, so guides sit behind objects and labels stay on top.
pub fn build(layout: &LayoutData, map: &dyn DeviceMap, opts: &SceneOptions) -> Scene {
    let mut scene = Scene::default();
    let prop = &layout.boundary;
    let height_ft = prop.height();

    if opts.show_grid {
        push_grid(&mut scene, layout, map, opts.grid_spacing_ft);
    }

    // Property boundary behind everything but the grid.
    scene.cmds.push(DrawCmd::Rect {
        rect: map.drawable(),
        fill: None,
        stroke: Some((2.0, palette::BOUNDARY)),
    });

    let report = distance::measure(layout);

    if opts.show_guides {
        if let Some(report) = &report {
            push_guides(&mut scene, layout, map, report);
        }
    }

    // Objects over the guides.
    for kind in ObjectKind::ALL {
        push_object(&mut scene, layout, map, kind, height_ft);
    }

    if let Some(report) = &report {
        scene.violations = report.violations.clone();
    }
    scene.report = report;
    scene
}

/// Grid tick text. Whole feet print bare; fractional spacings get one
/// decimal so accumulated floating error never leaks into the label.
fn tick_label(ft: f64) -> String {
    if (ft - ft.round()).abs() < 1e-9 {
        format!("{}", ft.round())
    } else {
        format!("{:.1}", ft)
    }
}

fn push_grid(scene: &mut Scene, layout: &LayoutData, map: &dyn DeviceMap, spacing_ft: f64) {
    let prop = &layout.boundary;
    let (width_ft, height_ft) = (prop.width(), prop.height());
    let up = map.up();

    let mut ft = 0.0;
    while ft <= width_ft + 1e-9 {
        let top = map.to_device(FtPoint::new(ft, 0.0));
        let bottom = map.to_device(FtPoint::new(ft, height_ft));
        scene.cmds.push(DrawCmd::Line {
            a: top,
            b: bottom,
            width: 1.0,
            color: palette::GRID,
            dashed: false,
        });
        scene.cmds.push(DrawCmd::Text {
            pos: DevPoint::new(top.x, top.y + up * 8.0),
            text: tick_label(ft),
            size: TICK_FONT,
            color: palette::AXIS_TEXT,
            align: TextAlign::Center,
        });
        ft += spacing_ft;
    }

    let mut ft = 0.0;
    while ft <= height_ft + 1e-9 {
        let left = map.to_device(FtPoint::new(0.0, ft));
        let right = map.to_device(FtPoint::new(width_ft, ft));
        scene.cmds.push(DrawCmd::Line {
            a: left,
            b: right,
            width: 1.0,
            color: palette::GRID,
            dashed: false,
        });
        scene.cmds.push(DrawCmd::Text {
            pos: DevPoint::new(left.x - 10.0, left.y),
            text: tick_label(ft),
            size: TICK_FONT,
            color: palette::AXIS_TEXT,
            align: TextAlign::Center,
        });
        ft += spacing_ft;
    }
}

fn push_guides(
    scene: &mut Scene,
    layout: &LayoutData,
    map: &dyn DeviceMap,
    report: &ClearanceReport,
) {
    let height_ft = layout.boundary.height();
    let mut placer = LabelPlacer::new(map.drawable().inflate(LABEL_BOUNDS_SLACK), LABEL_FONT);

    // Fixed obstacles: every placed object's device box, inflated.
    for kind in ObjectKind::ALL {
        if let Some(rect) = object_device_rect(layout, map, kind, height_ft) {
            placer.avoid(rect.inflate(AVOID_INFLATE));
        }
    }

    // Edge guides first, then object segments: input order decides who gets
    // uncontested label spots.
    for clearance in &report.edges {
        let a = map.to_device(clearance.measure.segment.a);
        let b = map.to_device(clearance.measure.segment.b);
        scene.cmds.push(DrawCmd::Line {
            a,
            b,
            width: 1.0,
            color: palette::GUIDE,
            dashed: true,
        });
        if clearance.measure.feet > 0.0 {
            push_label(scene, &mut placer, a, b, &clearance.measure.label);
        }
    }

    for seg in &report.objects {
        let a = map.to_device(seg.segment.a);
        let b = map.to_device(seg.segment.b);
        scene.cmds.push(DrawCmd::Line {
            a,
            b,
            width: 1.0,
            color: palette::GUIDE,
            dashed: true,
        });
        push_label(scene, &mut placer, a, b, &seg.label);
    }
}

fn push_label(scene: &mut Scene, placer: &mut LabelPlacer, a: DevPoint, b: DevPoint, text: &str) {
    let placement = placer.place(a, b, text);
    if let Some((from, to)) = placement.leader {
        scene.cmds.push(DrawCmd::Line {
            a: from,
            b: to,
            width: 0.5,
            color: palette::GUIDE_TEXT,
            dashed: false,
        });
    }
    if placement.crowded {
        // Leader stub marking an accepted overlap.
        let corner = DevPoint::new(placement.rect.max_x, placement.rect.min_y);
        scene.cmds.push(DrawCmd::Line {
            a: corner,
            b: DevPoint::new(corner.x + CROWDED_STUB, corner.y - CROWDED_STUB),
            width: 0.5,
            color: palette::GUIDE_TEXT,
            dashed: false,
        });
    }
    scene.cmds.push(DrawCmd::Text {
        pos: placement.rect.center(),
        text: placement.text,
        size: LABEL_FONT,
        color: palette::GUIDE_TEXT,
        align: TextAlign::Center,
    });
}

fn object_color(kind: ObjectKind) -> Rgba {
    match kind {
        ObjectKind::House => palette::HOUSE,
        ObjectKind::Shed => palette::SHED,
        ObjectKind::Well => palette::WELL,
        ObjectKind::Septic => palette::SEPTIC,
    }
}

/// Device bounding box of a placed object, or `None` when absent/unplaced.
pub fn object_device_rect(
    layout: &LayoutData,
    map: &dyn DeviceMap,
    kind: ObjectKind,
    height_ft: f64,
) -> Option<DevRect> {
    match kind {
        ObjectKind::House | ObjectKind::Shed => {
            let obj = match kind {
                ObjectKind::House => layout.house.as_ref(),
                _ => layout.shed.as_ref(),
            }?;
            let rect = obj.rect(height_ft)?;
            Some(DevRect::from_points(
                map.to_device(FtPoint::new(rect.left, rect.top)),
                map.to_device(FtPoint::new(rect.right, rect.bottom)),
            ))
        }
        ObjectKind::Well | ObjectKind::Septic => {
            let obj = match kind {
                ObjectKind::Well => layout.well.as_ref(),
                _ => layout.septic.as_ref(),
            }?;
            let p = map.to_device(obj.point(height_ft)?);
            Some(DevRect::from_center_size(
                p,
                POINT_RADIUS * 2.0,
                POINT_RADIUS * 2.0,
            ))
        }
    }
}

fn push_object(
    scene: &mut Scene,
    layout: &LayoutData,
    map: &dyn DeviceMap,
    kind: ObjectKind,
    height_ft: f64,
) {
    let color = object_color(kind);
    match kind {
        ObjectKind::House | ObjectKind::Shed => {
            let Some(rect) = object_device_rect(layout, map, kind, height_ft) else {
                return;
            };
            scene.cmds.push(DrawCmd::Rect {
                rect,
                fill: Some(color),
                stroke: None,
            });
            scene.cmds.push(DrawCmd::Text {
                pos: rect.center(),
                text: kind.display_name().to_string(),
                size: NAME_FONT,
                color: palette::OBJECT_TEXT,
                align: TextAlign::Center,
            });
        }
        ObjectKind::Well | ObjectKind::Septic => {
            let obj = match kind {
                ObjectKind::Well => layout.well.as_ref(),
                _ => layout.septic.as_ref(),
            };
            let Some(p) = obj.and_then(|o| o.point(height_ft)) else {
                return;
            };
            let center = map.to_device(p);
            scene.cmds.push(DrawCmd::Circle {
                center,
                radius: POINT_RADIUS,
                fill: color,
            });
            scene.cmds.push(DrawCmd::Text {
                pos: DevPoint::new(center.x, center.y + map.up() * 10.0),
                text: kind.display_name().to_string(),
                size: LABEL_FONT,
                color: palette::BOUNDARY,
                align: TextAlign::Center,
            });
        }
    }
}
