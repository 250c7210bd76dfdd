// SPDX-License-Identifier: MIT

//! JSON persistence for layouts.
//!
//! On-disk shape:
//! `{"boundary": {front, back, left, right}, "objects": {house?, shed?, well?, septic?}}`.
//! Objects that are absent or not fully placed are omitted on save and come
//! back as `None` on load, so the format round-trips stably.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LayoutData, PointObject, Property, RectangleObject};

#[derive(Debug, Serialize, Deserialize)]
struct LayoutFile {
    boundary: Property,
    #[serde(default)]
    objects: ObjectSet,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ObjectSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    house: Option<RectangleObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shed: Option<RectangleObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    well: Option<PointObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    septic: Option<PointObject>,
}

fn to_file(layout: &LayoutData) -> LayoutFile {
    let keep_rect = |o: &Option<RectangleObject>| o.as_ref().filter(|r| r.is_placed()).cloned();
    let keep_point = |o: &Option<PointObject>| o.as_ref().filter(|p| p.is_placed()).cloned();
    LayoutFile {
        boundary: layout.boundary.clone(),
        objects: ObjectSet {
            house: keep_rect(&layout.house),
            shed: keep_rect(&layout.shed),
            well: keep_point(&layout.well),
            septic: keep_point(&layout.septic),
        },
    }
}

fn from_file(file: LayoutFile) -> LayoutData {
    LayoutData {
        boundary: file.boundary,
        house: file.objects.house,
        shed: file.objects.shed,
        well: file.objects.well,
        septic: file.objects.septic,
    }
}

/// Serialize a layout to the persisted JSON text, 4-space indented.
pub fn to_json(layout: &LayoutData) -> Result<String, Box<dyn std::error::Error>> {
    let file = to_file(layout);
    let mut out = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, fmt);
    file.serialize(&mut ser)?;
    Ok(String::from_utf8(out)?)
}

/// Parse a layout from persisted JSON text.
pub fn from_json(text: &str) -> Result<LayoutData, Box<dyn std::error::Error>> {
    let file: LayoutFile = serde_json::from_str(text)?;
    Ok(from_file(file))
}

/// Load a layout from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LayoutData, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    log::info!("loading layout from {}", path.display());
    let text = fs::read_to_string(path)?;
    let layout = from_json(&text)?;
    layout.validate()?;
    Ok(layout)
}

/// Save a layout to a JSON file. Blocks until the write completes.
pub fn save<P: AsRef<Path>>(layout: &LayoutData, path: P) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let text = to_json(layout)?;
    fs::write(path, text)?;
    log::info!("saved layout to {}", path.display());
    Ok(())
}
