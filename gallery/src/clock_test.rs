#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Scheduler whose frames fire only when the test says so.
#[derive(Clone, Default)]
struct ManualScheduler {
    queue: Rc<RefCell<Vec<(u32, FrameCallback)>>>,
    next_token: Rc<Cell<u32>>,
    cancelled: Rc<Cell<usize>>,
    refuse: Rc<Cell<bool>>,
}

impl ManualScheduler {
    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Fire every queued callback with `timestamp_ms`.
    fn frame(&self, timestamp_ms: f64) {
        let due: Vec<(u32, FrameCallback)> = self.queue.borrow_mut().drain(..).collect();
        for (_, callback) in due {
            callback(timestamp_ms);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Token = u32;

    fn request(&self, callback: FrameCallback) -> Option<u32> {
        if self.refuse.get() {
            return None;
        }
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.queue.borrow_mut().push((token, callback));
        Some(token)
    }

    fn cancel(&self, token: u32) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(t, _)| *t != token);
        if queue.len() < before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}

fn counting_handler() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |ts| sink.borrow_mut().push(ts))
}

// =============================================================
// Recurring ticks
// =============================================================

#[test]
fn subscribe_requests_first_frame() {
    let scheduler = ManualScheduler::default();
    let (_seen, handler) = counting_handler();
    let sub = subscribe(scheduler.clone(), handler);
    assert!(sub.is_active());
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn each_frame_reschedules() {
    let scheduler = ManualScheduler::default();
    let (seen, handler) = counting_handler();
    let _sub = subscribe(scheduler.clone(), handler);
    for i in 0..5 {
        scheduler.frame(f64::from(i) * 16.0);
        assert_eq!(scheduler.pending(), 1);
    }
    assert_eq!(*seen.borrow(), vec![0.0, 16.0, 32.0, 48.0, 64.0]);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn drop_cancels_pending_frame() {
    let scheduler = ManualScheduler::default();
    let (seen, handler) = counting_handler();
    let sub = subscribe(scheduler.clone(), handler);
    scheduler.frame(0.0);
    drop(sub);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.cancelled.get(), 1);

    scheduler.frame(16.0);
    scheduler.frame(32.0);
    assert_eq!(*seen.borrow(), vec![0.0]);
}

#[test]
fn cancel_is_idempotent() {
    let scheduler = ManualScheduler::default();
    let (_seen, handler) = counting_handler();
    let sub = subscribe(scheduler.clone(), handler);
    sub.cancel();
    sub.cancel();
    assert!(!sub.is_active());
    assert_eq!(scheduler.cancelled.get(), 1);
}

#[test]
fn stale_callback_after_drop_is_a_no_op() {
    // A host that fires a frame it was asked to cancel must not reach the handler.
    let scheduler = ManualScheduler::default();
    let (seen, handler) = counting_handler();
    let sub = subscribe(scheduler.clone(), handler);
    let stale: Vec<(u32, FrameCallback)> = scheduler.queue.borrow_mut().drain(..).collect();
    drop(sub);
    for (_, callback) in stale {
        callback(99.0);
    }
    assert!(seen.borrow().is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn handler_is_freed_on_drop() {
    let scheduler = ManualScheduler::default();
    let marker = Rc::new(());
    let held = Rc::clone(&marker);
    let sub = subscribe(scheduler.clone(), move |_| {
        let _keep = &held;
    });
    assert_eq!(Rc::strong_count(&marker), 2);
    drop(sub);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn refused_request_stops_chain() {
    let scheduler = ManualScheduler::default();
    scheduler.refuse.set(true);
    let (_seen, handler) = counting_handler();
    let sub = subscribe(scheduler.clone(), handler);
    assert!(!sub.is_active());
    assert_eq!(scheduler.pending(), 0);
}
