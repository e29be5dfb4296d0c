use nexus_core::{FrameCallback, FrameScheduler, FrameToken};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Queue = Rc<RefCell<VecDeque<(i32, FrameCallback)>>>;

/// `requestAnimationFrame` behind the core scheduler seam.
///
/// One long-lived trampoline closure is registered for every request and
/// runs the oldest queued callback, so nothing is leaked per frame. The
/// browser fires frame callbacks in request order, which keeps the queue
/// and the requests aligned.
pub struct RafScheduler {
    window: web::Window,
    queue: Queue,
    trampoline: Closure<dyn FnMut()>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        let queue: Queue = Rc::new(RefCell::new(VecDeque::new()));
        let queue_tick = queue.clone();
        let trampoline = Closure::wrap(Box::new(move || {
            // Pop first: the callback schedules the next frame.
            let next = queue_tick.borrow_mut().pop_front();
            if let Some((_, callback)) = next {
                callback();
            }
        }) as Box<dyn FnMut()>);
        Self {
            window,
            queue,
            trampoline,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameToken {
        match self
            .window
            .request_animation_frame(self.trampoline.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.queue.borrow_mut().push_back((id, callback));
                FrameToken(id as i64)
            }
            Err(e) => {
                log::error!("[raf] requestAnimationFrame failed: {:?}", e);
                FrameToken(-1)
            }
        }
    }

    fn cancel(&self, token: FrameToken) {
        let id = token.0 as i32;
        self.queue.borrow_mut().retain(|(queued, _)| *queued != id);
        _ = self.window.cancel_animation_frame(id);
    }
}
