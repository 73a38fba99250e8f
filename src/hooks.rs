//! Browser bindings for the viewport engine.
//!
//! Everything here is glue: decisions are made by the pure types in
//! `viewport` and `motion`, these hooks only feed them measurements and
//! tear down listeners, observers, frames and timers on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ResizeObserver, Window,
};
use yew::prelude::*;

use crate::motion::looping::{LoopPhase, SETTLE_AFTER_MS};
use crate::viewport::geometry::{parallax_offset, scroll_progress, Rect};
use crate::viewport::{BrowserFrames, EntryDetector, FrameSlot, IntersectionSample, Transition};

/// A window event after which layout-dependent effects must be recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEvent {
    pub name: &'static str,
    /// Passive listeners promise never to call `preventDefault`, so the
    /// browser can keep scrolling on the compositor.
    pub passive: bool,
}

pub const LAYOUT_EVENTS: &[LayoutEvent] = &[
    LayoutEvent { name: "scroll", passive: true },
    LayoutEvent { name: "resize", passive: true },
];

pub fn viewport_height(window: &Window) -> Option<f64> {
    window.inner_height().ok()?.as_f64()
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.height())
}

struct EntryObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for EntryObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_entry(element: &Element, threshold: f64, on_enter: impl Fn() + 'static) -> Result<EntryObserver, JsValue> {
    let mut detector = EntryDetector::new(threshold);
    let threshold = detector.threshold();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                };
                if detector.observe(sample) == Transition::Entered {
                    on_enter();
                    // Seen for good; nothing left to watch.
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(EntryObserver { observer, _callback: callback })
}

/// One-way "has this element been on screen" flag.
///
/// Stays false if the returned ref is never attached. If the browser cannot
/// observe intersections the flag flips immediately so content is never
/// stranded in its hidden style.
#[hook]
pub fn use_in_view(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let set_visible = visible.setter();
        use_effect_with_deps(
            move |threshold| {
                let guard = node.cast::<Element>().and_then(|element| {
                    let on_enter = {
                        let set_visible = set_visible.clone();
                        move || set_visible.set(true)
                    };
                    match observe_entry(&element, *threshold, on_enter) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            log::warn!("IntersectionObserver unavailable, revealing content: {:?}", err);
                            set_visible.set(true);
                            None
                        }
                    }
                });
                move || drop(guard)
            },
            threshold,
        );
    }

    (node, *visible)
}

/// Runs a measurement job at most once per animation frame after any
/// [`LAYOUT_EVENTS`] event or a size change of one of the watched elements.
/// Dropping it removes the listeners, disconnects the resize observer and
/// cancels a pending frame.
pub struct FrameDriven {
    window: Window,
    listener: Closure<dyn FnMut()>,
    resize: Option<ResizeObserver>,
    slot: Rc<RefCell<FrameSlot<BrowserFrames>>>,
}

impl FrameDriven {
    pub fn attach<F>(job: F, watch: &[Element]) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let slot = Rc::new(RefCell::new(FrameSlot::new(BrowserFrames::new(window.clone()))));
        let job = Rc::new(RefCell::new(job));

        let listener = {
            let slot = slot.clone();
            let job = job.clone();
            Closure::<dyn FnMut()>::new(move || {
                let job = job.clone();
                slot.borrow_mut().schedule(Box::new(move |_timestamp| {
                    let mut run = job.borrow_mut();
                    (*run)();
                }));
            })
        };

        for event in LAYOUT_EVENTS {
            let options = AddEventListenerOptions::new();
            options.set_passive(event.passive);
            let added = window.add_event_listener_with_callback_and_add_event_listener_options(
                event.name,
                listener.as_ref().unchecked_ref(),
                &options,
            );
            if let Err(err) = added {
                log::warn!("Could not listen for {}: {:?}", event.name, err);
            }
        }

        // Content reflows (fonts, images, copy) change layout without any
        // window event. The observer shares the listener, so it lands in the
        // same frame slot.
        let resize = if watch.is_empty() {
            None
        } else {
            match ResizeObserver::new(listener.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    for element in watch {
                        observer.observe(element);
                    }
                    Some(observer)
                }
                Err(err) => {
                    log::warn!("ResizeObserver unavailable, remeasuring on window events only: {:?}", err);
                    None
                }
            }
        };

        // Initial measurement, same as a first scroll.
        slot.borrow_mut().schedule(Box::new(move |_timestamp| {
            let mut run = job.borrow_mut();
            (*run)();
        }));

        Some(FrameDriven { window, listener, resize, slot })
    }
}

impl Drop for FrameDriven {
    fn drop(&mut self) {
        for event in LAYOUT_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event.name, self.listener.as_ref().unchecked_ref());
        }
        if let Some(observer) = &self.resize {
            observer.disconnect();
        }
        self.slot.borrow_mut().cancel();
    }
}

/// Mount-lifetime [`FrameDriven`] job that also reruns whenever one of the
/// `watch` elements changes size.
#[hook]
pub fn use_frame_layout(watch: Vec<NodeRef>, job: Box<dyn FnMut()>) {
    use_effect_with_deps(
        move |_| {
            let elements: Vec<Element> = watch.iter().filter_map(|node| node.cast::<Element>()).collect();
            let driver = FrameDriven::attach(job, &elements);
            if driver.is_none() {
                log::debug!("No window; scroll-driven effect disabled");
            }
            move || drop(driver)
        },
        (),
    );
}

/// Mount-lifetime [`FrameDriven`] job driven by window events only.
#[hook]
pub fn use_frame_scroll(job: Box<dyn FnMut()>) {
    use_frame_layout(Vec::new(), job);
}

/// 0 while the element's bottom is entering the viewport, 1 once its top left.
#[hook]
pub fn use_scroll_progress() -> (NodeRef, f64) {
    let node = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);

    {
        let node = node.clone();
        let set_progress = progress.setter();
        use_frame_scroll(Box::new(move || {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let Some(vh) = web_sys::window().as_ref().and_then(viewport_height) else {
                return;
            };
            set_progress.set(scroll_progress(client_rect(&element), vh));
        }));
    }

    (node, *progress)
}

/// Ref plus an inline `transform` that drifts the element at `speed`.
#[hook]
pub fn use_parallax(speed: f64) -> (NodeRef, String) {
    let (node, progress) = use_scroll_progress();
    let offset = parallax_offset(progress, speed);
    (node, format!("transform: translateY({:.2}px);", offset))
}

/// Entrance-then-loop phase for a section whose cards settle into keyframe
/// loops once their entrances have played.
#[hook]
pub fn use_loop_phase(visible: bool) -> LoopPhase {
    let phase = use_state_eq(LoopPhase::default);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |visible| {
                let timer = if *visible {
                    let entering = (*phase).entered();
                    phase.set(entering);
                    let settle = phase.setter();
                    Some(Timeout::new(SETTLE_AFTER_MS, move || settle.set(entering.settled())))
                } else {
                    None
                };
                move || drop(timer)
            },
            visible,
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_listeners_never_block_scrolling() {
        let names: Vec<&str> = LAYOUT_EVENTS.iter().map(|event| event.name).collect();
        assert_eq!(names, vec!["scroll", "resize"]);
        assert!(LAYOUT_EVENTS.iter().all(|event| event.passive));
    }
}
