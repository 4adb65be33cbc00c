//! Drop Target Lookup
//!
//! Reads drop zone and item row geometry from the DOM for the reorder engine.

use checklist_core::{ItemRef, Point, Rect};
use leptos_dragdrop::{element_at, measure_all, Measured, Pointer};

const ZONE_SELECTOR: &str = ".list-drop-zone";
const ITEM_SELECTOR: &str = ".item";

pub fn point(pointer: Pointer) -> Point {
    Point::new(pointer.x, pointer.y)
}

fn rect(m: &Measured) -> Rect {
    Rect::new(m.left, m.top, m.width, m.height)
}

fn zone_index(el: &web_sys::Element) -> Option<usize> {
    el.get_attribute("data-drop-index")?.parse().ok()
}

fn item_ref(el: &web_sys::Element) -> Option<ItemRef> {
    let list_id = el.get_attribute("data-list-id")?.parse().ok()?;
    let item_id = el.get_attribute("data-item-id")?.parse().ok()?;
    Some(ItemRef::new(list_id, item_id))
}

/// Rendered list drop zones in document order
pub fn zones() -> Vec<(usize, Rect)> {
    measure_all(ZONE_SELECTOR)
        .iter()
        .map(|m| (m, rect(m)))
        .filter(|(_, r)| r.is_rendered())
        .filter_map(|(m, r)| zone_index(&m.element).map(|i| (i, r)))
        .collect()
}

/// Rendered item rows in document order. Rows of a collapsed list are
/// `display: none` and left out.
pub fn item_rows() -> Vec<(ItemRef, Rect)> {
    measure_all(ITEM_SELECTOR)
        .iter()
        .map(|m| (m, rect(m)))
        .filter(|(_, r)| r.is_rendered())
        .filter_map(|(m, r)| item_ref(&m.element).map(|item| (item, r)))
        .collect()
}

/// Drop zone directly under the pointer
pub fn zone_under(pointer: Pointer) -> Option<usize> {
    element_at(pointer, ZONE_SELECTOR).as_ref().and_then(zone_index)
}

/// Item row directly under the pointer
pub fn item_under(pointer: Pointer) -> Option<ItemRef> {
    element_at(pointer, ITEM_SELECTOR).as_ref().and_then(item_ref)
}
