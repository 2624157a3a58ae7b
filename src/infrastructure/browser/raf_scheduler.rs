use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::render::{AnimationFrame, request_animation_frame};

use crate::domain::scheduling::{FrameCallback, FrameId, FrameScheduler};

#[derive(Default)]
struct RafState {
    next_id: u64,
    pending: HashMap<FrameId, AnimationFrame>,
}

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// Clones share one table of pending frames.
#[derive(Clone, Default)]
pub struct RafScheduler {
    state: Rc<RefCell<RafState>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }
}

/// Forget a frame whose callback is running.
fn retire(state: &Weak<RefCell<RafState>>, id: FrameId) {
    if let Some(state) = state.upgrade() {
        let handle = state.borrow_mut().pending.remove(&id);
        drop(handle);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> FrameId {
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            FrameId(state.next_id)
        };

        let weak = Rc::downgrade(&self.state);
        let handle = request_animation_frame(move |timestamp| {
            retire(&weak, id);
            callback(timestamp);
        });
        self.state.borrow_mut().pending.insert(id, handle);
        id
    }

    fn cancel_frame(&self, id: FrameId) {
        // Dropping the handle cancels the browser request.
        let handle = self.state.borrow_mut().pending.remove(&id);
        drop(handle);
    }
}
