//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The crate tracks *what* is being dragged (any `Copy` payload) and reports
//! pointer positions; picking a drop target is left to the caller, helped by
//! [`measure_all`] and [`element_at`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are ignored after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

type MouseHandler = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        }
    }
}

/// DnD state signals for one kind of draggable payload
#[derive(Clone, Copy)]
pub struct DndSignals<P: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<P>>,
    pub dragging_write: WriteSignal<Option<P>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending payload (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<P>>,
    pub pending_write: WriteSignal<Option<P>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals<P>() -> DndSignals<P>
where
    P: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<P>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<P>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<P> DndSignals<P>
where
    P: Copy + Send + Sync + 'static,
{
    /// True while a click should be ignored because a drag just finished
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// End drag operation
pub fn end_drag<P>(dnd: &DndSignals<P>)
where
    P: Copy + Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable elements.
/// Records pending drag with start position.
///
/// Stops propagation so a draggable nested inside another one (an item row
/// inside a list card) only arms the innermost.
pub fn make_on_mousedown<P>(
    dnd: DndSignals<P>,
    payload: P,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                if matches!(el.closest("button, input, a"), Ok(Some(_))) { return; }
            }
        }
        ev.stop_propagation();
        dnd.pending_write.set(Some(payload));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document-level mousemove/mouseup handlers.
///
/// - `on_start` runs once when a pending press moves past the threshold
/// - `on_move` runs on every move while dragging
/// - `on_release` runs on mouseup after a real drag (not a click)
pub fn bind_global_handlers<P, S, M, R>(dnd: DndSignals<P>, on_start: S, on_move: M, on_release: R)
where
    P: Copy + Send + Sync + 'static,
    S: Fn(P, Pointer) + 'static,
    M: Fn(P, Pointer) + 'static,
    R: Fn(P, Pointer) + 'static,
{
    let on_mousemove = MouseHandler::new(move |ev: web_sys::MouseEvent| {
        let pointer = Pointer::from_event(&ev);

        if let Some(dragged) = dnd.dragging_read.get_untracked() {
            on_move(dragged, pointer);
            return;
        }

        // Pending press: start dragging once moved beyond threshold
        if let Some(pending) = dnd.pending_read.get_untracked() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(Some(pending));
                on_start(pending, pointer);
                on_move(pending, pointer);
            }
        }
    });

    let on_mouseup = MouseHandler::new(move |ev: web_sys::MouseEvent| {
        match dnd.dragging_read.get_untracked() {
            Some(dragged) => {
                end_drag(&dnd);
                on_release(dragged, Pointer::from_event(&ev));
            }
            // Not dragging - the click event will fire naturally on the element
            None => dnd.pending_write.set(None),
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc
            .add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc
            .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// An element with its bounding box in client coordinates
pub struct Measured {
    pub element: web_sys::Element,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Measure every element matching `selector`, in document order
pub fn measure_all(selector: &str) -> Vec<Measured> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            Measured {
                left: rect.x(),
                top: rect.y(),
                width: rect.width(),
                height: rect.height(),
                element,
            }
        })
        .collect()
}

/// The element matching `selector` under the pointer (or an ancestor of the hit)
pub fn element_at(pointer: Pointer, selector: &str) -> Option<web_sys::Element> {
    let doc = web_sys::window()?.document()?;
    let hit = doc.element_from_point(pointer.x as f32, pointer.y as f32)?;
    hit.closest(selector).ok().flatten()
}
