use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

pub(crate) fn mouse_point(event: &MouseEvent) -> (f64, f64) {
    (event.client_x() as f64, event.client_y() as f64)
}

pub(crate) fn touch_point(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

fn capture_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    }
}

/// Window-level move/release listeners for one drag. Created when a gesture
/// starts and dropped when it ends, so nothing stays registered between
/// drags. Mouse and touch streams funnel into the same two callbacks;
/// touchcancel is routed to the end callback, which is the single exit
/// point for every gesture.
pub(crate) struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragListeners {
    pub(crate) fn attach(on_move: Rc<dyn Fn(f64, f64)>, on_end: Rc<dyn Fn()>) -> Self {
        let Some(window) = web_sys::window() else {
            return Self { _listeners: Vec::new() };
        };
        let mut listeners = Vec::with_capacity(5);

        {
            let on_move = on_move.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                "mousemove",
                capture_options(),
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        event.prevent_default();
                        let (x, y) = mouse_point(event);
                        on_move(x, y);
                    }
                },
            ));
        }
        {
            let on_move = on_move.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                "touchmove",
                capture_options(),
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>() {
                        event.prevent_default();
                        if let Some((x, y)) = touch_point(event) {
                            on_move(x, y);
                        }
                    }
                },
            ));
        }
        for kind in ["mouseup", "touchend", "touchcancel"] {
            let on_end = on_end.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                kind,
                capture_options(),
                move |_event: &Event| {
                    on_end();
                },
            ));
        }

        Self {
            _listeners: listeners,
        }
    }
}
