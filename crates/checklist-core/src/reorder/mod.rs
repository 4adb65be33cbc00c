//! Drag Reordering
//!
//! Explicit drag state machine for lists and items, plus the geometry used
//! to pick the nearest drop target. Nothing here touches a rendering surface:
//! callers pass in pointer coordinates and candidate bounding boxes.

mod geometry;
mod engine;

pub use geometry::{nearest, Point, Rect};
pub use engine::{DragState, ReorderEngine};
