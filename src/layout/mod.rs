// SPDX-License-Identifier: MIT

//! Layout data model: the property boundary and the objects placed on it.
//!
//! All coordinates are feet. An object's `x` is the distance from the left
//! property line to its left edge; `y` is the distance from the front
//! property line. Unplaced objects carry `None` coordinates and are skipped
//! by every downstream component.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::{flip_front, FtPoint, FtRect};

pub mod reader;

/// Canonical roles for the objects a layout can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    House,
    Shed,
    Well,
    Septic,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::House,
        ObjectKind::Shed,
        ObjectKind::Well,
        ObjectKind::Septic,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectKind::House => "House",
            ObjectKind::Shed => "Shed",
            ObjectKind::Well => "Well",
            ObjectKind::Septic => "Septic Tank",
        }
    }

    /// Normalize a display name or role alias to a kind. Matching is by
    /// substring, so "Septic Tank", "septic" and "SEPTIC" all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        let s = name.trim().to_lowercase();
        if s.is_empty() {
            return None;
        }
        if s.contains("house") {
            Some(ObjectKind::House)
        } else if s.contains("shed") {
            Some(ObjectKind::Shed)
        } else if s.contains("well") {
            Some(ObjectKind::Well)
        } else if s.contains("septic") {
            Some(ObjectKind::Septic)
        } else {
            None
        }
    }
}

/// Errors raised by layout validation and object lookups. All are local and
/// recoverable; nothing here should abort the application.
#[derive(Debug)]
pub enum LayoutError {
    InvalidBoundary(String),
    UnknownObject(String),
    NotARectangle(ObjectKind),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidBoundary(msg) => write!(f, "invalid boundary: {msg}"),
            LayoutError::UnknownObject(name) => write!(f, "unknown object name: {name}"),
            LayoutError::NotARectangle(kind) => {
                write!(f, "{} has no width/height to edit", kind.display_name())
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A rectangular object such as the house or shed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleObject {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl RectangleObject {
    pub fn new(kind: ObjectKind, width: f64, height: f64, x: f64, y: f64) -> Self {
        Self {
            name: kind.display_name().to_string(),
            width,
            height,
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some() && self.width > 0.0 && self.height > 0.0
    }

    /// Top-origin feet rect, or `None` when not placed.
    pub fn rect(&self, property_height: f64) -> Option<FtRect> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if self.width > 0.0 && self.height > 0.0 => Some(
                FtRect::from_front_relative(x, y, self.width, self.height, property_height),
            ),
            _ => None,
        }
    }
}

/// A point object such as the well or septic tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointObject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl PointObject {
    pub fn new(kind: ObjectKind, x: f64, y: f64) -> Self {
        Self {
            name: kind.display_name().to_string(),
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    /// Top-origin feet point, or `None` when not placed.
    pub fn point(&self, property_height: f64) -> Option<FtPoint> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(FtPoint::new(x, flip_front(property_height, y, 0.0))),
            _ => None,
        }
    }
}

/// The four property line distances, in feet.
///
/// Note: only `front` and `left` drive the geometry — `front` is the
/// effective width and `left` the effective depth of the drawn property.
/// `back` and `right` are collected and persisted but unused in core math;
/// existing layout files depend on that asymmetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub front: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

impl Property {
    /// Effective width of the property in feet.
    pub fn width(&self) -> f64 {
        self.front
    }

    /// Effective depth of the property in feet.
    pub fn height(&self) -> f64 {
        self.left
    }

    /// The whole property as a top-origin feet rect.
    pub fn rect(&self) -> FtRect {
        FtRect::new(0.0, 0.0, self.width(), self.height())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        for (label, v) in [
            ("front", self.front),
            ("back", self.back),
            ("left", self.left),
            ("right", self.right),
        ] {
            if v < 0.0 {
                return Err(LayoutError::InvalidBoundary(format!(
                    "{label} must be >= 0, got {v}"
                )));
            }
        }
        // Zero effective extents would divide by zero in the unit converter.
        if self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(LayoutError::InvalidBoundary(format!(
                "effective extents must be positive (front={}, left={})",
                self.front, self.left
            )));
        }
        Ok(())
    }
}

/// The whole layout: boundary plus optional objects. One instance lives in
/// memory at a time and is mutated in place by drag and edit operations.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutData {
    pub boundary: Property,
    pub house: Option<RectangleObject>,
    pub shed: Option<RectangleObject>,
    pub well: Option<PointObject>,
    pub septic: Option<PointObject>,
}

impl LayoutData {
    pub fn new(boundary: Property) -> Self {
        Self {
            boundary,
            house: None,
            shed: None,
            well: None,
            septic: None,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.boundary.validate()
    }

    /// Update an object's position by display name or role alias.
    pub fn update_position(&mut self, name: &str, x: f64, y: f64) -> Result<(), LayoutError> {
        let kind =
            ObjectKind::from_name(name).ok_or_else(|| LayoutError::UnknownObject(name.into()))?;
        match kind {
            ObjectKind::House | ObjectKind::Shed => {
                let obj = self
                    .rect_object_mut(kind)
                    .ok_or_else(|| LayoutError::UnknownObject(name.into()))?;
                obj.x = Some(x);
                obj.y = Some(y);
            }
            ObjectKind::Well | ObjectKind::Septic => {
                let obj = self
                    .point_object_mut(kind)
                    .ok_or_else(|| LayoutError::UnknownObject(name.into()))?;
                obj.x = Some(x);
                obj.y = Some(y);
            }
        }
        Ok(())
    }

    /// Edit the dimensions of a rectangular object by display name or role.
    pub fn edit_dimensions(&mut self, name: &str, width: f64, height: f64) -> Result<(), LayoutError> {
        let kind =
            ObjectKind::from_name(name).ok_or_else(|| LayoutError::UnknownObject(name.into()))?;
        match kind {
            ObjectKind::House | ObjectKind::Shed => {
                let obj = self
                    .rect_object_mut(kind)
                    .ok_or_else(|| LayoutError::UnknownObject(name.into()))?;
                obj.width = width;
                obj.height = height;
                Ok(())
            }
            ObjectKind::Well | ObjectKind::Septic => Err(LayoutError::NotARectangle(kind)),
        }
    }

    /// The rectangle slot for `kind`, or `None` for point kinds.
    pub fn rect_object(&self, kind: ObjectKind) -> Option<&RectangleObject> {
        match kind {
            ObjectKind::House => self.house.as_ref(),
            ObjectKind::Shed => self.shed.as_ref(),
            _ => None,
        }
    }

    pub fn rect_object_mut(&mut self, kind: ObjectKind) -> Option<&mut RectangleObject> {
        match kind {
            ObjectKind::House => self.house.as_mut(),
            ObjectKind::Shed => self.shed.as_mut(),
            _ => None,
        }
    }

    /// The point slot for `kind`, or `None` for rectangle kinds.
    pub fn point_object(&self, kind: ObjectKind) -> Option<&PointObject> {
        match kind {
            ObjectKind::Well => self.well.as_ref(),
            ObjectKind::Septic => self.septic.as_ref(),
            _ => None,
        }
    }

    pub fn point_object_mut(&mut self, kind: ObjectKind) -> Option<&mut PointObject> {
        match kind {
            ObjectKind::Well => self.well.as_mut(),
            ObjectKind::Septic => self.septic.as_mut(),
            _ => None,
        }
    }

    pub fn set_rect_object(&mut self, kind: ObjectKind, obj: Option<RectangleObject>) {
        match kind {
            ObjectKind::House => self.house = obj,
            ObjectKind::Shed => self.shed = obj,
            _ => {}
        }
    }

    pub fn set_point_object(&mut self, kind: ObjectKind, obj: Option<PointObject>) {
        match kind {
            ObjectKind::Well => self.well = obj,
            ObjectKind::Septic => self.septic = obj,
            _ => {}
        }
    }

    /// Rotate the shed 90° around its own center by swapping width/height.
    ///
    /// The stored y is front-relative, so the coordinate is flipped into the
    /// top-origin frame before the center is computed and flipped back after,
    /// with the *new* height. Skipping that round-trip makes the shed creep
    /// on every rotation. Four rotations restore the original placement.
    ///
    /// Returns `true` when a placed shed was rotated.
    pub fn rotate_shed(&mut self) -> bool {
        let property_height = self.boundary.height();
        let shed = match &mut self.shed {
            Some(s) => s,
            None => return false,
        };
        let (x, y) = match (shed.x, shed.y) {
            (Some(x), Some(y)) => (x, y),
            _ => return false,
        };

        let top = flip_front(property_height, y, shed.height);
        let center_x = x + shed.width / 2.0;
        let center_top = top + shed.height / 2.0;

        std::mem::swap(&mut shed.width, &mut shed.height);

        shed.x = Some(center_x - shed.width / 2.0);
        let new_top = center_top - shed.height / 2.0;
        shed.y = Some(flip_front(property_height, new_top, shed.height));
        true
    }
}
