// SPDX-License-Identifier: MIT

//! Device mapping and draw primitives.
//!
//! Feet-space geometry is device-agnostic; everything surface-specific is
//! captured by a [`DeviceMap`]: a uniform feet→device scale plus origin
//! handling. The interactive canvas and the export page each provide one map
//! and consume one shared scene — there is deliberately no second copy of the
//! geometry for the export path.

use serde::{Deserialize, Serialize};

use crate::geom::{DevPoint, DevRect, FtPoint};
use crate::layout::Property;

pub mod scene;

/// Grid line spacing on both surfaces, feet.
pub const GRID_SPACING_FT: f64 = 10.0;
/// Canvas padding reserved for axis labels, pixels.
pub const CANVAS_MARGIN_PX: f32 = 20.0;
/// Default fit zoom applied to the interactive canvas.
pub const DEFAULT_ZOOM: f32 = 1.2;
/// Zoom step for `+`/`-`.
pub const ZOOM_STEP: f32 = 1.1;

/// US letter landscape, points.
pub const PAGE_WIDTH_PT: f32 = 792.0;
pub const PAGE_HEIGHT_PT: f32 = 612.0;
/// Half-inch page margin, points.
pub const PAGE_MARGIN_PT: f32 = 36.0;
/// Band reserved at the bottom of the page for the legend, points.
pub const LEGEND_HEIGHT_PT: f32 = 60.0;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// One palette for both surfaces. The canvas and the PDF export must never
/// carry separate color tables.
pub mod palette {
    use super::Rgba;

    pub const HOUSE: Rgba = Rgba::rgb(51, 102, 230);
    pub const SHED: Rgba = Rgba::rgb(139, 69, 19);
    pub const WELL: Rgba = Rgba::rgb(0, 100, 0);
    pub const SEPTIC: Rgba = Rgba::rgb(128, 128, 128);
    pub const BOUNDARY: Rgba = Rgba::rgb(0, 0, 0);
    pub const GRID: Rgba = Rgba::rgb(238, 238, 238);
    pub const AXIS_TEXT: Rgba = Rgba::rgb(68, 68, 68);
    pub const GUIDE: Rgba = Rgba::rgb(191, 191, 191);
    pub const GUIDE_TEXT: Rgba = Rgba::rgb(102, 102, 102);
    pub const OBJECT_TEXT: Rgba = Rgba::rgb(255, 255, 255);
    pub const WARNING: Rgba = Rgba::rgb(200, 40, 40);
}

/// Horizontal anchoring for text draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Left,
}

/// A surface-independent draw instruction in device coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        a: DevPoint,
        b: DevPoint,
        width: f32,
        color: Rgba,
        dashed: bool,
    },
    Rect {
        rect: DevRect,
        fill: Option<Rgba>,
        stroke: Option<(f32, Rgba)>,
    },
    Circle {
        center: DevPoint,
        radius: f32,
        fill: Rgba,
    },
    Text {
        pos: DevPoint,
        text: String,
        size: f32,
        color: Rgba,
        align: TextAlign,
    },
}

/// Uniform mapping from top-origin feet space into one device space.
///
/// Callers must validate the property (positive effective extents) before
/// constructing a map; a zero extent is a fatal input error upstream, not
/// something the converter guards against.
pub trait DeviceMap {
    /// Device units per foot.
    fn scale(&self) -> f32;

    /// Map a top-origin feet point into device coordinates.
    fn to_device(&self, p: FtPoint) -> DevPoint;

    /// The property drawing area in device coordinates, normalized.
    fn drawable(&self) -> DevRect;

    /// Device-Y delta per unit of "away from the property, toward the top of
    /// the surface". Canvas pixels grow downward (−1); page points grow
    /// upward (+1).
    fn up(&self) -> f32;
}

/// Interactive canvas mapping: top-origin pixels with a fixed axis margin.
#[derive(Debug, Clone, Copy)]
pub struct CanvasMap {
    scale: f32,
    margin: f32,
    width_ft: f64,
    height_ft: f64,
}

impl CanvasMap {
    /// Fit the property into the available drawing area, keeping aspect
    /// ratio, then apply the zoom factor. Zoom changes only re-derive device
    /// coordinates; feet-space data is untouched.
    pub fn fit(property: &Property, avail_w: f32, avail_h: f32, zoom: f32) -> Self {
        let width_ft = property.width();
        let height_ft = property.height();
        let scale_x = (avail_w - CANVAS_MARGIN_PX) / width_ft as f32;
        let scale_y = (avail_h - CANVAS_MARGIN_PX) / height_ft as f32;
        Self {
            scale: scale_x.min(scale_y) * zoom,
            margin: CANVAS_MARGIN_PX,
            width_ft,
            height_ft,
        }
    }

    /// Total canvas extent needed for the mapped property plus margin.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.margin + self.width_ft as f32 * self.scale,
            self.margin + self.height_ft as f32 * self.scale,
        )
    }

    /// Inverse mapping, for hit-testing and drag handling.
    pub fn to_feet(&self, p: DevPoint) -> FtPoint {
        FtPoint::new(
            ((p.x - self.margin) / self.scale) as f64,
            ((p.y - self.margin) / self.scale) as f64,
        )
    }
}

impl DeviceMap for CanvasMap {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn to_device(&self, p: FtPoint) -> DevPoint {
        DevPoint::new(
            self.margin + p.x as f32 * self.scale,
            self.margin + p.y as f32 * self.scale,
        )
    }

    fn drawable(&self) -> DevRect {
        DevRect::from_points(
            self.to_device(FtPoint::new(0.0, 0.0)),
            self.to_device(FtPoint::new(self.width_ft, self.height_ft)),
        )
    }

    fn up(&self) -> f32 {
        -1.0
    }
}

/// Export page mapping: landscape letter points, bottom-origin at the
/// graphics-library level, so the top-origin feet frame takes the extra
/// `page_height − margin − y·scale` flip here and nowhere else.
#[derive(Debug, Clone, Copy)]
pub struct PageMap {
    scale: f32,
    margin: f32,
    page_height: f32,
    width_ft: f64,
    height_ft: f64,
}

impl PageMap {
    pub fn letter_landscape(property: &Property) -> Self {
        let width_ft = property.width();
        let height_ft = property.height();
        let scale_x = (PAGE_WIDTH_PT - 2.0 * PAGE_MARGIN_PT) / width_ft as f32;
        let scale_y =
            (PAGE_HEIGHT_PT - 2.0 * PAGE_MARGIN_PT - LEGEND_HEIGHT_PT) / height_ft as f32;
        Self {
            scale: scale_x.min(scale_y),
            margin: PAGE_MARGIN_PT,
            page_height: PAGE_HEIGHT_PT,
            width_ft,
            height_ft,
        }
    }
}

impl DeviceMap for PageMap {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn to_device(&self, p: FtPoint) -> DevPoint {
        DevPoint::new(
            self.margin + p.x as f32 * self.scale,
            self.page_height - self.margin - p.y as f32 * self.scale,
        )
    }

    fn drawable(&self) -> DevRect {
        DevRect::from_points(
            self.to_device(FtPoint::new(0.0, 0.0)),
            self.to_device(FtPoint::new(self.width_ft, self.height_ft)),
        )
    }

    fn up(&self) -> f32 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> Property {
        Property {
            front: 100.0,
            back: 100.0,
            left: 80.0,
            right: 80.0,
        }
    }

    #[test]
    fn canvas_fit_keeps_property_inside_target() {
        let p = property();
        let map = CanvasMap::fit(&p, 850.0, 650.0, 1.0);
        let (w, h) = map.canvas_size();
        assert!(w <= 850.0 + 0.5);
        assert!(h <= 650.0 + 0.5);
        // Uniform scale: both axes share one factor.
        let far = map.to_device(FtPoint::new(p.width(), p.height()));
        assert!(((far.x - CANVAS_MARGIN_PX) / p.width() as f32 - map.scale()).abs() < 1e-4);
        assert!(far.y <= 650.0);
    }

    #[test]
    fn canvas_round_trips_feet() {
        let map = CanvasMap::fit(&property(), 850.0, 650.0, DEFAULT_ZOOM);
        let p = FtPoint::new(33.25, 41.5);
        let back = map.to_feet(map.to_device(p));
        assert!((back.x - p.x).abs() < 1e-3);
        assert!((back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn page_map_flips_vertically() {
        let map = PageMap::letter_landscape(&property());
        let back_edge = map.to_device(FtPoint::new(0.0, 0.0));
        let front_edge = map.to_device(FtPoint::new(0.0, 80.0));
        // Back edge sits near the top of the page (larger page-Y).
        assert!(back_edge.y > front_edge.y);
        assert!((back_edge.y - (PAGE_HEIGHT_PT - PAGE_MARGIN_PT)).abs() < 1e-4);
    }
}
