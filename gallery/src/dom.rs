//! Browser bridge for [`GalleryCore`].
//!
//! ARCHITECTURE
//! ============
//! [`Gallery`] owns the core plus the scroller element. [`Gallery::start`]
//! wires it to `requestAnimationFrame` and a `ResizeObserver` and returns a
//! [`GalleryHandle`]; the host keeps the handle for as long as the strip is
//! mounted and drops it on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, ResizeObserver, Window};

use crate::clock::{FrameCallback, FrameScheduler, FrameSubscription, subscribe};
use crate::driver::TickOutcome;
use crate::engine::{GalleryCore, LayoutChange, translate_x};
use crate::layout::{ItemBox, ObservedItems};

// =============================================================================
// FRAME SCHEDULER
// =============================================================================

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Scheduler for the current window, or `None` outside a browser.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn request(&self, callback: FrameCallback) -> Option<i32> {
        // The JS function frees itself after its single invocation.
        let function = Closure::once_into_js(move |timestamp_ms: f64| callback(timestamp_ms));
        match self.window.request_animation_frame(function.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, token: i32) {
        if let Err(err) = self.window.cancel_animation_frame(token) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}

// =============================================================================
// RESIZE WATCH
// =============================================================================

/// Owned `ResizeObserver` registration; disconnects on drop.
pub struct ResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, ResizeObserver)>,
}

impl ResizeWatch {
    /// Call `on_resize` whenever any of `targets` changes size, and once right
    /// after observation starts.
    ///
    /// Returns `None` when the browser has no `ResizeObserver`.
    pub fn observe(targets: &[Element], mut on_resize: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: ResizeObserver| on_resize(),
        );
        let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("ResizeObserver unavailable: {err:?}");
                return None;
            }
        };
        let watch = Self { observer, _callback: callback };
        watch.retarget(targets);
        Some(watch)
    }

    /// Replace the observed elements with `targets`.
    ///
    /// Each newly observed element reports its size once, so the callback
    /// runs again shortly after a retarget.
    pub fn retarget(&self, targets: &[Element]) {
        self.observer.disconnect();
        for target in targets {
            self.observer.observe(target);
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// =============================================================================
// GALLERY
// =============================================================================

/// [`GalleryCore`] bound to a rendered scroller element.
///
/// The scroller's element children are the displayed items, in display order.
pub struct Gallery {
    core: GalleryCore,
    scroller: Option<HtmlElement>,
    observed: ObservedItems,
}

impl Gallery {
    #[must_use]
    pub fn new(core: GalleryCore) -> Self {
        Self { core, scroller: None, observed: ObservedItems::default() }
    }

    #[must_use]
    pub fn core(&self) -> &GalleryCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut GalleryCore {
        &mut self.core
    }

    pub fn attach(&mut self, scroller: HtmlElement) {
        self.scroller = Some(scroller);
    }

    pub fn detach(&mut self) {
        self.scroller = None;
        self.observed.forget();
    }

    fn surface(&self) -> Option<&HtmlElement> {
        self.scroller.as_ref().filter(|el| el.is_connected())
    }

    /// Measure the rendered items and update the segment width.
    pub fn measure(&mut self) -> LayoutChange {
        let Some(scroller) = self.surface() else {
            return LayoutChange::Unchanged;
        };
        let boxes = item_boxes(scroller);
        let viewport_width = scroller
            .parent_element()
            .map_or_else(|| scroller.client_width(), |parent| parent.client_width());
        let change = self.core.apply_layout(&boxes, f64::from(viewport_width));
        if change != LayoutChange::Unchanged {
            log::debug!("gallery layout: {change:?} ({} boxes)", boxes.len());
        }
        change
    }

    /// Run one animation frame and write the resulting transform.
    pub fn frame(&mut self, timestamp_ms: f64) -> TickOutcome {
        let ready = self.surface().is_some();
        let outcome = self.core.tick(timestamp_ms, ready);
        if let TickOutcome::Applied { offset, .. } = outcome {
            self.apply_transform(offset);
        }
        outcome
    }

    fn apply_transform(&self, offset: f64) {
        let Some(scroller) = self.surface() else {
            return;
        };
        if let Err(err) = scroller.style().set_property("transform", &translate_x(offset)) {
            log::warn!("gallery transform write failed: {err:?}");
        }
    }

    /// Start animating `gallery`.
    ///
    /// `on_layout` receives every non-trivial [`LayoutChange`]; hosts use it
    /// to re-render when the display sequence grows. An empty gallery starts
    /// nothing.
    pub fn start(gallery: &Rc<RefCell<Self>>, mut on_layout: impl FnMut(LayoutChange) + 'static) -> GalleryHandle {
        if gallery.borrow().core.is_empty() {
            return GalleryHandle::idle();
        }

        let resize = {
            let gallery = Rc::clone(gallery);
            ResizeWatch::observe(&[], move || {
                let change = gallery.borrow_mut().measure();
                if change != LayoutChange::Unchanged {
                    on_layout(change);
                }
            })
            .map(Rc::new)
        };
        if let Some(watch) = resize.as_deref() {
            gallery.borrow_mut().sync_observed(watch);
        }

        let frames = RafScheduler::from_window().map(|scheduler| {
            let gallery = Rc::clone(gallery);
            let resize = resize.clone();
            subscribe(scheduler, move |timestamp_ms| {
                let mut gallery = gallery.borrow_mut();
                if let Some(watch) = resize.as_deref() {
                    gallery.sync_observed(watch);
                }
                gallery.frame(timestamp_ms);
            })
        });
        if frames.is_none() {
            log::warn!("no window; gallery animation disabled");
        }

        GalleryHandle { frames, resize }
    }

    /// Point `watch` at the current cards when the rendered card count has
    /// changed since the last sync (first start, or a resequence re-render).
    fn sync_observed(&mut self, watch: &ResizeWatch) {
        let Some(scroller) = self.surface() else {
            return;
        };
        let rendered = scroller.child_element_count() as usize;
        if !self.observed.needs_retarget(rendered) {
            return;
        }
        watch.retarget(&observed_elements(scroller));
        self.observed.mark(rendered);
    }
}

/// The scroller and every rendered card. A size change in any card of the
/// first copy moves the loop point.
fn observed_elements(scroller: &HtmlElement) -> Vec<Element> {
    let children = scroller.children();
    std::iter::once(scroller.clone().into())
        .chain((0..children.length()).filter_map(|i| children.item(i)))
        .collect()
}

/// Sub-pixel card boxes. Every card shares the scroller's transform, so only
/// differences between boxes are meaningful.
fn item_boxes(scroller: &HtmlElement) -> Vec<ItemBox> {
    let children = scroller.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|child| {
            let rect = child.get_bounding_client_rect();
            ItemBox::new(rect.left(), rect.width())
        })
        .collect()
}

// =============================================================================
// HANDLE
// =============================================================================

/// Keeps a started gallery running. Dropping it cancels the pending frame and
/// disconnects the resize observer.
pub struct GalleryHandle {
    frames: Option<FrameSubscription<RafScheduler>>,
    resize: Option<Rc<ResizeWatch>>,
}

impl GalleryHandle {
    fn idle() -> Self {
        Self { frames: None, resize: None }
    }

    /// Whether animation frames are still being requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frames.as_ref().is_some_and(FrameSubscription::is_active)
    }

    /// Tear down now instead of waiting for drop.
    pub fn stop(&mut self) {
        self.frames = None;
        self.resize = None;
    }
}
