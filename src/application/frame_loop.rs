//! Self-rescheduling per-frame loop over a [`FrameScheduler`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::domain::scheduling::{FrameId, FrameScheduler};

/// Returned by a loop step to keep going or finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

type StepFn = Box<dyn FnMut(f64) -> LoopControl>;

#[derive(Default)]
struct LoopState {
    active: bool,
    pending: Option<FrameId>,
    step: Option<StepFn>,
}

/// Runs `step` once per frame until it returns [`LoopControl::Stop`] or the
/// loop is stopped. Stopping cancels the pending frame synchronously, so no
/// step runs afterwards. Dropping the loop stops it.
pub struct FrameLoop<S: FrameScheduler + Clone + 'static> {
    scheduler: S,
    state: Rc<RefCell<LoopState>>,
}

impl<S: FrameScheduler + Clone + 'static> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, state: Rc::new(RefCell::new(LoopState::default())) }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    /// Begin running `step`. Ignored while already active.
    pub fn start(&self, step: impl FnMut(f64) -> LoopControl + 'static) {
        {
            let mut state = self.state.borrow_mut();
            if state.active {
                return;
            }
            state.active = true;
            state.step = Some(Box::new(step));
        }
        schedule(&self.scheduler, &self.state);
    }

    pub fn stop(&self) {
        let (pending, step) = {
            let mut state = self.state.borrow_mut();
            state.active = false;
            (state.pending.take(), state.step.take())
        };
        if let Some(id) = pending {
            self.scheduler.cancel_frame(id);
        }
        drop(step);
    }
}

impl<S: FrameScheduler + Clone + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler + Clone + 'static>(scheduler: &S, state: &Rc<RefCell<LoopState>>) {
    let weak = Rc::downgrade(state);
    let next = scheduler.clone();
    let id = scheduler.request_frame(Box::new(move |now| on_frame(next, weak, now)));
    state.borrow_mut().pending = Some(id);
}

fn on_frame<S: FrameScheduler + Clone + 'static>(scheduler: S, state: Weak<RefCell<LoopState>>, now: f64) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let mut step = {
        let mut guard = state.borrow_mut();
        guard.pending = None;
        if !guard.active {
            return;
        }
        match guard.step.take() {
            Some(step) => step,
            None => return,
        }
    };

    let control = step(now);

    let mut guard = state.borrow_mut();
    // stopped from inside the step
    if !guard.active {
        return;
    }
    match control {
        LoopControl::Continue => {
            guard.step = Some(step);
            drop(guard);
            schedule(&scheduler, &state);
        }
        LoopControl::Stop => {
            guard.active = false;
        }
    }
}
