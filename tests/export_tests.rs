// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use yardplan::export::export_to_pdf;
use yardplan::{LayoutData, ObjectKind, PointObject, Property, RectangleObject};

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

#[test]
fn test_pdf_export_writes_valid_file() {
    let path = Path::new("/tmp/test_layout_export.pdf");
    export_to_pdf(&sample_layout(), path).unwrap();

    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > 1000);
    assert!(bytes.starts_with(b"%PDF"));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_pdf_export_without_shed_still_succeeds() {
    // No shed means no distance report; the page still renders.
    let mut layout = sample_layout();
    layout.shed = None;
    let path = Path::new("/tmp/test_layout_export_no_shed.pdf");
    export_to_pdf(&layout, path).unwrap();
    assert!(fs::read(path).unwrap().starts_with(b"%PDF"));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_pdf_export_rejects_invalid_boundary() {
    let mut layout = sample_layout();
    layout.boundary.front = 0.0;
    let path = Path::new("/tmp/test_layout_export_invalid.pdf");
    assert!(export_to_pdf(&layout, path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_pdf_export_with_violations_succeeds() {
    // Out-of-bounds placement warns but never blocks the printout.
    let mut layout = sample_layout();
    layout.shed.as_mut().unwrap().x = Some(-5.0);
    let path = Path::new("/tmp/test_layout_export_violation.pdf");
    export_to_pdf(&layout, path).unwrap();
    assert!(fs::read(path).unwrap().starts_with(b"%PDF"));
    fs::remove_file(path).unwrap();
}
