//! Property Layout Planner Library
//!
//! This library provides the data model, distance geometry, shared renderer
//! and PDF export behind the scale-drawing property layout application.

pub mod export;
pub mod geom;
pub mod gui;
pub mod layout;
pub mod render;

// Re-export commonly used types
pub use geom::distance::{ClearanceReport, DistanceSegment, Edge};
pub use layout::{LayoutData, ObjectKind, PointObject, Property, RectangleObject};
pub use render::{CanvasMap, DeviceMap, PageMap};
