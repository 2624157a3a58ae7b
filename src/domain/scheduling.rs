//! Frame scheduling seam.
//!
//! Animation loops never call `requestAnimationFrame` directly; they ask a
//! [`FrameScheduler`] for the next frame. The browser implementation lives in
//! `infrastructure::browser`, while [`ManualScheduler`] drives virtual time so
//! loops can be stepped deterministically.

use std::cell::RefCell;
use std::rc::Rc;

/// Callback for one display refresh. Receives the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64) + 'static>;

/// Identifier of a pending frame request, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

pub trait FrameScheduler {
    /// Queue `callback` for the next frame.
    fn request_frame(&self, callback: FrameCallback) -> FrameId;

    /// Drop a pending request. Unknown or already-fired ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, id: FrameId) {
        (**self).cancel_frame(id)
    }
}

#[derive(Default)]
struct ManualState {
    now_ms: f64,
    next_id: u64,
    pending: Vec<(FrameId, FrameCallback)>,
    frames_run: u64,
}

/// Virtual-time scheduler. Frames only fire when the owner advances time.
///
/// Cloning shares the same queue and clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Number of callbacks executed so far.
    pub fn frames_run(&self) -> u64 {
        self.state.borrow().frames_run
    }

    /// Advance the clock by `delta_ms` and fire every callback that was
    /// pending before the advance. Callbacks requested while firing wait for
    /// the next advance, like a real refresh cycle.
    pub fn advance(&self, delta_ms: f64) -> usize {
        let (now, due) = {
            let mut state = self.state.borrow_mut();
            state.now_ms += delta_ms.max(0.0);
            (state.now_ms, std::mem::take(&mut state.pending))
        };

        let fired = due.len();
        for (_, callback) in due {
            self.state.borrow_mut().frames_run += 1;
            callback(now);
        }
        fired
    }

    /// Run `frames` refresh cycles of `frame_ms` each.
    pub fn run_frames(&self, frames: usize, frame_ms: f64) -> usize {
        (0..frames).map(|_| self.advance(frame_ms)).sum()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = FrameId(state.next_id);
        state.pending.push((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameId) {
        self.state.borrow_mut().pending.retain(|(pending, _)| *pending != id);
    }
}
