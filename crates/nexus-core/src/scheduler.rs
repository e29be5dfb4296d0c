//! Frame scheduling seam.
//!
//! The browser backs [`FrameScheduler`] with `requestAnimationFrame`; host
//! tests use [`ManualScheduler`] and advance frames one at a time.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Opaque id of a scheduled frame, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i64);

pub type FrameCallback = Box<dyn FnOnce()>;

pub trait FrameScheduler {
    /// Run `callback` once on the next frame.
    fn schedule(&self, callback: FrameCallback) -> FrameToken;
    /// Drop a scheduled callback without running it. Unknown or already
    /// fired tokens are ignored.
    fn cancel(&self, token: FrameToken);
}

/// Queue-backed scheduler that only runs frames when told to.
///
/// Cloning shares the queue, so a test can keep one clone and hand the
/// other to the environment.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<(FrameToken, FrameCallback)>>>,
    next_id: Rc<Cell<i64>>,
    scheduled_total: Rc<Cell<usize>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames scheduled and neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Frames ever requested, including cancelled ones.
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total.get()
    }

    /// Run the oldest pending frame. Returns false when nothing was queued.
    pub fn run_next(&self) -> bool {
        // Release the borrow before running: the callback usually schedules.
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run up to `frames` frames, stopping early if the queue drains.
    pub fn run_frames(&self, frames: usize) -> usize {
        let mut ran = 0;
        while ran < frames && self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameToken {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.scheduled_total.set(self.scheduled_total.get() + 1);
        let token = FrameToken(id);
        self.queue.borrow_mut().push_back((token, callback));
        token
    }

    fn cancel(&self, token: FrameToken) {
        self.queue.borrow_mut().retain(|(t, _)| *t != token);
    }
}
