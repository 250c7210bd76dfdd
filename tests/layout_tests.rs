// SPDX-License-Identifier: MIT

use yardplan::layout::reader;
use yardplan::{LayoutData, ObjectKind, PointObject, Property, RectangleObject};

fn sample_property() -> Property {
    Property {
        front: 100.0,
        back: 100.0,
        left: 80.0,
        right: 80.0,
    }
}

fn sample_layout() -> LayoutData {
    let mut layout = LayoutData::new(sample_property());
    layout.house = Some(RectangleObject::new(ObjectKind::House, 40.0, 30.0, 30.0, 40.0));
    layout.shed = Some(RectangleObject::new(ObjectKind::Shed, 20.0, 10.0, 10.0, 5.0));
    layout.well = Some(PointObject::new(ObjectKind::Well, 80.0, 20.0));
    layout
}

#[test]
fn test_json_round_trip_is_byte_stable() {
    let layout = sample_layout();
    let first = reader::to_json(&layout).unwrap();
    let reparsed = reader::from_json(&first).unwrap();
    let second = reader::to_json(&reparsed).unwrap();
    assert_eq!(first, second);
    assert_eq!(layout, reparsed);
}

#[test]
fn test_json_uses_four_space_indent() {
    let text = reader::to_json(&sample_layout()).unwrap();
    assert!(text.contains("\n    \"boundary\""));
    assert!(text.contains("\n        \"front\""));
}

#[test]
fn test_unplaced_objects_are_omitted_on_save() {
    let mut layout = sample_layout();
    layout.shed.as_mut().unwrap().x = None;
    layout.septic = Some(PointObject {
        name: ObjectKind::Septic.display_name().to_string(),
        x: None,
        y: None,
    });
    let text = reader::to_json(&layout).unwrap();
    assert!(!text.contains("\"shed\""));
    assert!(!text.contains("\"septic\""));
    assert!(text.contains("\"house\""));
    assert!(text.contains("\"well\""));
}

#[test]
fn test_missing_objects_load_as_none() {
    let text = r#"{
    "boundary": {
        "front": 100,
        "back": 100,
        "left": 80,
        "right": 80
    },
    "objects": {}
}"#;
    let layout = reader::from_json(text).unwrap();
    assert!(layout.house.is_none());
    assert!(layout.shed.is_none());
    assert!(layout.well.is_none());
    assert!(layout.septic.is_none());
}

#[test]
fn test_load_rejects_invalid_boundary() {
    let path = "/tmp/test_invalid_boundary.json";
    std::fs::write(
        path,
        r#"{"boundary": {"front": 0, "back": 100, "left": 80, "right": 80}, "objects": {}}"#,
    )
    .unwrap();
    assert!(reader::load(path).is_err());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_save_and_load_file() {
    let path = "/tmp/test_layout_save.json";
    let layout = sample_layout();
    reader::save(&layout, path).unwrap();
    let loaded = reader::load(path).unwrap();
    assert_eq!(layout, loaded);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_rotation_swaps_extents_and_keeps_center() {
    let mut layout = sample_layout();
    let before = layout.shed.clone().unwrap();
    let height = layout.boundary.height();
    let center_before = before.rect(height).unwrap().center();

    assert!(layout.rotate_shed());

    let after = layout.shed.clone().unwrap();
    assert_eq!(after.width, before.height);
    assert_eq!(after.height, before.width);
    let center_after = after.rect(height).unwrap().center();
    assert!((center_after.x - center_before.x).abs() < 1e-9);
    assert!((center_after.y - center_before.y).abs() < 1e-9);
}

#[test]
fn test_four_rotations_restore_placement() {
    let mut layout = sample_layout();
    let before = layout.shed.clone().unwrap();
    for _ in 0..4 {
        assert!(layout.rotate_shed());
    }
    let after = layout.shed.clone().unwrap();
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
    assert!((after.x.unwrap() - before.x.unwrap()).abs() < 1e-9);
    assert!((after.y.unwrap() - before.y.unwrap()).abs() < 1e-9);
}

#[test]
fn test_rotate_unplaced_shed_is_a_no_op() {
    let mut layout = sample_layout();
    layout.shed.as_mut().unwrap().y = None;
    assert!(!layout.rotate_shed());
    layout.shed = None;
    assert!(!layout.rotate_shed());
}

#[test]
fn test_update_position_by_alias() {
    let mut layout = sample_layout();
    layout.update_position("Septic Tank", 1.0, 2.0).unwrap_err();
    layout.update_position("well", 55.0, 12.5).unwrap();
    assert_eq!(layout.well.as_ref().unwrap().x, Some(55.0));
    assert_eq!(layout.well.as_ref().unwrap().y, Some(12.5));
}

#[test]
fn test_edit_dimensions_only_for_rectangles() {
    let mut layout = sample_layout();
    layout.edit_dimensions("house", 45.0, 25.0).unwrap();
    let house = layout.house.as_ref().unwrap();
    assert_eq!(house.width, 45.0);
    assert_eq!(house.height, 25.0);
    assert!(layout.edit_dimensions("well", 5.0, 5.0).is_err());
}
