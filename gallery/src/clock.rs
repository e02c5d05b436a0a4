//! Frame clock subscriptions.
//!
//! A [`FrameScheduler`] runs a one-shot callback on the next display refresh.
//! [`subscribe`] turns that into a recurring tick by re-requesting after each
//! frame, and hands back a [`FrameSubscription`] that owns the chain. Dropping
//! the subscription cancels the pending request, so no tick ever reaches a
//! torn-down surface.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// One-shot frame callback; receives the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host primitive that runs a callback on the next frame.
pub trait FrameScheduler {
    /// Identifies a pending request so it can be cancelled.
    type Token: Copy;

    /// Queue `callback` for the next frame. Returns `None` if the host refused.
    fn request(&self, callback: FrameCallback) -> Option<Self::Token>;

    /// Drop a pending request. Cancelling an already-fired token is harmless.
    fn cancel(&self, token: Self::Token);
}

struct Chain<S: FrameScheduler> {
    scheduler: S,
    pending: Cell<Option<S::Token>>,
    active: Cell<bool>,
    handler: RefCell<Box<dyn FnMut(f64)>>,
}

/// Owned registration of a recurring frame handler.
///
/// The chain holds only a weak reference back to itself, so dropping this
/// handle frees the handler even if a frame is still queued.
pub struct FrameSubscription<S: FrameScheduler + 'static> {
    chain: Rc<Chain<S>>,
}

/// Run `handler` on every frame until the returned subscription is dropped.
pub fn subscribe<S>(scheduler: S, handler: impl FnMut(f64) + 'static) -> FrameSubscription<S>
where
    S: FrameScheduler + 'static,
{
    let chain = Rc::new(Chain {
        scheduler,
        pending: Cell::new(None),
        active: Cell::new(true),
        handler: RefCell::new(Box::new(handler)),
    });
    schedule_next(&chain);
    FrameSubscription { chain }
}

fn schedule_next<S: FrameScheduler + 'static>(chain: &Rc<Chain<S>>) {
    if !chain.active.get() {
        return;
    }
    let weak: Weak<Chain<S>> = Rc::downgrade(chain);
    let token = chain.scheduler.request(Box::new(move |timestamp_ms| {
        if let Some(chain) = weak.upgrade() {
            fire(&chain, timestamp_ms);
        }
    }));
    if token.is_none() {
        log::warn!("frame request refused; gallery animation stopped");
        chain.active.set(false);
    }
    chain.pending.set(token);
}

fn fire<S: FrameScheduler + 'static>(chain: &Rc<Chain<S>>, timestamp_ms: f64) {
    chain.pending.set(None);
    if !chain.active.get() {
        return;
    }
    {
        let mut handler = chain.handler.borrow_mut();
        (*handler)(timestamp_ms);
    }
    schedule_next(chain);
}

impl<S: FrameScheduler + 'static> FrameSubscription<S> {
    /// Whether frames are still being delivered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.chain.active.get()
    }

    /// Stop the chain. Idempotent; also runs on drop.
    pub fn cancel(&self) {
        self.chain.active.set(false);
        if let Some(token) = self.chain.pending.take() {
            self.chain.scheduler.cancel(token);
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameSubscription<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
