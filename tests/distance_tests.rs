// SPDX-License-Identifier: MIT

use yardplan::geom::distance::{measure, Edge};
use yardplan::{LayoutData, ObjectKind, PointObject, Property, RectangleObject};

fn base_layout() -> LayoutData {
    let mut layout = LayoutData::new(Property {
        front: 100.0,
        back: 100.0,
        left: 80.0,
        right: 80.0,
    });
    layout.shed = Some(RectangleObject::new(ObjectKind::Shed, 20.0, 10.0, 10.0, 5.0));
    layout
}

fn edge_feet(layout: &LayoutData, edge: Edge) -> f64 {
    let report = measure(layout).unwrap();
    report
        .edges
        .iter()
        .find(|c| c.edge == edge)
        .unwrap()
        .measure
        .feet
}

#[test]
fn test_boundary_clearances() {
    // 20x10 shed at x=10, 5 ft off the front line of a 100x80 lot.
    let layout = base_layout();
    assert_eq!(edge_feet(&layout, Edge::Left), 10.0);
    assert_eq!(edge_feet(&layout, Edge::Right), 70.0);
    assert_eq!(edge_feet(&layout, Edge::Front), 5.0);
    assert_eq!(edge_feet(&layout, Edge::Back), 65.0);
    assert!(measure(&layout).unwrap().violations.is_empty());
}

#[test]
fn test_no_shed_means_no_report() {
    let mut layout = base_layout();
    layout.shed = None;
    assert!(measure(&layout).is_none());
    let mut layout = base_layout();
    layout.shed.as_mut().unwrap().x = None;
    assert!(measure(&layout).is_none());
}

#[test]
fn test_overshoot_is_clamped_and_reported() {
    let mut layout = base_layout();
    layout.shed.as_mut().unwrap().x = Some(-4.0);
    let report = measure(&layout).unwrap();
    let left = report.edges.iter().find(|c| c.edge == Edge::Left).unwrap();
    assert_eq!(left.measure.feet, 0.0);
    let v = &report.violations[0];
    assert_eq!(v.kind, ObjectKind::Shed);
    assert_eq!(v.edge, Edge::Left);
    assert!((v.overshoot_ft - 4.0).abs() < 1e-9);
}

#[test]
fn test_other_object_violations_are_reported() {
    let mut layout = base_layout();
    layout.well = Some(PointObject::new(ObjectKind::Well, 105.0, 20.0));
    let report = measure(&layout).unwrap();
    assert!(report
        .violations
        .iter()
        .any(|v| v.kind == ObjectKind::Well && v.edge == Edge::Right));
}

#[test]
fn test_object_segments_in_fixed_order() {
    let mut layout = base_layout();
    layout.house = Some(RectangleObject::new(ObjectKind::House, 40.0, 30.0, 40.0, 5.0));
    layout.well = Some(PointObject::new(ObjectKind::Well, 80.0, 60.0));
    layout.septic = Some(PointObject::new(ObjectKind::Septic, 5.0, 70.0));
    let report = measure(&layout).unwrap();
    let labels: Vec<&str> = report.objects.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels.len(), 3);
    assert!(labels[0].starts_with("House"));
    assert!(labels[1].starts_with("Well"));
    assert!(labels[2].starts_with("Septic"));
}

#[test]
fn test_missing_objects_are_skipped() {
    let mut layout = base_layout();
    layout.well = Some(PointObject::new(ObjectKind::Well, 80.0, 60.0));
    let report = measure(&layout).unwrap();
    assert_eq!(report.objects.len(), 1);
    assert!(report.objects[0].label.starts_with("Well"));
}

#[test]
fn test_shed_to_house_gap_distance() {
    // House left edge 10 ft to the right of the shed, same y band.
    let mut layout = base_layout();
    layout.house = Some(RectangleObject::new(ObjectKind::House, 40.0, 30.0, 40.0, 5.0));
    let report = measure(&layout).unwrap();
    let house = &report.objects[0];
    assert!((house.feet - 10.0).abs() < 1e-9);
    assert_eq!(house.label, "House 10.0 ft");
}

#[test]
fn test_point_distance_is_euclidean_to_nearest_corner() {
    // Well 3 right of and 4 above the shed's top-right corner region.
    let mut layout = base_layout();
    layout.well = Some(PointObject::new(ObjectKind::Well, 33.0, 19.0));
    let report = measure(&layout).unwrap();
    let well = &report.objects[0];
    assert!((well.feet - 5.0).abs() < 1e-9);
    assert_eq!(well.label, "Well 5.0 ft");
}

#[test]
fn test_label_rounds_display_only() {
    let mut layout = base_layout();
    layout.well = Some(PointObject::new(ObjectKind::Well, 31.0, 16.0));
    let report = measure(&layout).unwrap();
    let well = &report.objects[0];
    // sqrt(2) stays exact in `feet`; only the label is rounded.
    assert!((well.feet - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert_eq!(well.label, "Well 1.4 ft");
}
