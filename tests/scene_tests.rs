// SPDX-License-Identifier: MIT

use yardplan::render::scene::{build, SceneOptions};
use yardplan::render::{palette, DrawCmd, PageMap};
use yardplan::{CanvasMap, DeviceMap, LayoutData, ObjectKind, PointObject, Property, RectangleObject};

fn sample_layout() -> LayoutData {
    let mut layout = LayoutData::new(Property {
        front: 100.0,
        back: 100.0,
        left: 80.0,
        right: 80.0,
    });
    layout.house = Some(RectangleObject::new(ObjectKind::House, 40.0, 30.0, 30.0, 40.0));
    layout.shed = Some(RectangleObject::new(ObjectKind::Shed, 20.0, 10.0, 10.0, 5.0));
    layout.well = Some(PointObject::new(ObjectKind::Well, 80.0, 20.0));
    layout.septic = Some(PointObject::new(ObjectKind::Septic, 90.0, 60.0));
    layout
}

fn count_texts(scene: &yardplan::render::scene::Scene, needle: &str) -> usize {
    scene
        .cmds
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text.contains(needle)))
        .count()
}

#[test]
fn test_scene_contains_every_placed_object() {
    let layout = sample_layout();
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let scene = build(&layout, &map, &SceneOptions::default());

    assert_eq!(count_texts(&scene, "House"), 2); // name + distance label
    assert_eq!(count_texts(&scene, "Shed"), 1);
    assert_eq!(count_texts(&scene, "Well"), 2);
    assert_eq!(count_texts(&scene, "Septic"), 2);

    let circles = scene
        .cmds
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Circle { .. }))
        .count();
    assert_eq!(circles, 2);
}

#[test]
fn test_unplaced_objects_are_skipped() {
    let mut layout = sample_layout();
    layout.house = None;
    layout.well.as_mut().unwrap().x = None;
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let scene = build(&layout, &map, &SceneOptions::default());

    assert_eq!(count_texts(&scene, "House"), 0);
    assert_eq!(count_texts(&scene, "Well"), 0);
    assert_eq!(count_texts(&scene, "Shed"), 1);
}

#[test]
fn test_guides_can_be_disabled() {
    let layout = sample_layout();
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let opts = SceneOptions {
        show_guides: false,
        ..Default::default()
    };
    let scene = build(&layout, &map, &opts);
    assert_eq!(count_texts(&scene, "ft"), 0);
    // Measurements still run so violation warnings stay accurate.
    assert!(scene.report.is_some());
}

#[test]
fn test_zero_clearance_edge_gets_no_label() {
    let mut layout = sample_layout();
    layout.shed.as_mut().unwrap().y = Some(0.0);
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let scene = build(&layout, &map, &SceneOptions::default());
    let zero_labels = scene
        .cmds
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == "0.0 ft"))
        .count();
    assert_eq!(zero_labels, 0);
}

#[test]
fn test_canvas_and_page_measure_identically() {
    // Both surfaces consume one scene builder over one distance engine; the
    // feet-space reports must agree exactly whatever the device mapping.
    let layout = sample_layout();
    let canvas = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.2);
    let page = PageMap::letter_landscape(&layout.boundary);

    let a = build(&layout, &canvas, &SceneOptions::default());
    let b = build(&layout, &page, &SceneOptions::default());

    let ra = a.report.unwrap();
    let rb = b.report.unwrap();
    assert_eq!(ra.edges.len(), rb.edges.len());
    for (ea, eb) in ra.edges.iter().zip(rb.edges.iter()) {
        assert_eq!(ea.edge, eb.edge);
        assert_eq!(ea.measure.feet, eb.measure.feet);
        assert_eq!(ea.measure.label, eb.measure.label);
    }
    let labels_a: Vec<&String> = ra.objects.iter().map(|s| &s.label).collect();
    let labels_b: Vec<&String> = rb.objects.iter().map(|s| &s.label).collect();
    assert_eq!(labels_a, labels_b);
}

#[test]
fn test_scene_is_deterministic() {
    let layout = sample_layout();
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let a = build(&layout, &map, &SceneOptions::default());
    let b = build(&layout, &map, &SceneOptions::default());
    assert_eq!(a.cmds, b.cmds);
}

#[test]
fn test_grid_lines_span_property() {
    let layout = sample_layout();
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let scene = build(&layout, &map, &SceneOptions::default());
    let grid_lines = scene
        .cmds
        .iter()
        .filter(|cmd| matches!(cmd, DrawCmd::Line { color, .. } if *color == palette::GRID))
        .count();
    // 100 ft across and 80 ft deep at 10 ft spacing, fence-post counting.
    assert_eq!(grid_lines, 11 + 9);
}

#[test]
fn test_fractional_grid_spacing_keeps_tick_precision() {
    let layout = LayoutData::new(Property {
        front: 30.0,
        back: 30.0,
        left: 30.0,
        right: 30.0,
    });
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let opts = SceneOptions {
        grid_spacing_ft: 7.5,
        ..Default::default()
    };
    let scene = build(&layout, &map, &opts);

    let tick = |needle: &str| {
        scene
            .cmds
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Text { text, .. } if text == needle))
            .count()
    };
    // One tick per axis at each fractional step, and never a truncated "7".
    assert_eq!(tick("7.5"), 2);
    assert_eq!(tick("22.5"), 2);
    assert_eq!(tick("15"), 2);
    assert_eq!(tick("7"), 0);
    assert_eq!(tick("22"), 0);
}

#[test]
fn test_violations_surface_through_scene() {
    let mut layout = sample_layout();
    layout.shed.as_mut().unwrap().x = Some(-2.0);
    let map = CanvasMap::fit(&layout.boundary, 850.0, 650.0, 1.0);
    let scene = build(&layout, &map, &SceneOptions::default());
    assert_eq!(scene.violations.len(), 1);
    assert_eq!(scene.violations[0].kind, ObjectKind::Shed);
}
