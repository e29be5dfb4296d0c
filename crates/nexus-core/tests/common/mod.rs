// Host-side doubles for the page environment: a painter that records calls
// and an environment whose container, visibility and frames are driven by
// the test.

#![allow(dead_code)]

use nexus_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Resize(SurfaceSize),
    Fade(Rgba),
    Glyph { symbol: char, x: f32, y: f32, alpha: f32 },
    Dot { x: f32, y: f32, radius: f32, alpha: f32 },
}

#[derive(Clone, Default)]
pub struct RecordingPainter {
    pub ops: Rc<RefCell<Vec<PaintOp>>>,
}

impl Painter for RecordingPainter {
    fn resize(&mut self, size: SurfaceSize) {
        self.ops.borrow_mut().push(PaintOp::Resize(size));
    }

    fn fade(&mut self, color: Rgba) {
        self.ops.borrow_mut().push(PaintOp::Fade(color));
    }

    fn glyph(&mut self, symbol: char, x: f32, y: f32, _font_px: f32, _color: Hsl, alpha: f32) {
        self.ops
            .borrow_mut()
            .push(PaintOp::Glyph { symbol, x, y, alpha });
    }

    fn dot(&mut self, x: f32, y: f32, radius: f32, _color: Hsl, alpha: f32) {
        self.ops
            .borrow_mut()
            .push(PaintOp::Dot { x, y, radius, alpha });
    }
}

pub struct FakeState {
    pub reduced_motion: Cell<bool>,
    pub visible: Cell<bool>,
    pub viewport_width: Cell<f64>,
    pub bounds: Cell<Option<Bounds>>,
    pub surface_available: Cell<bool>,
    pub observer_available: Cell<bool>,
    pub acquire_calls: Cell<usize>,
    pub ops: Rc<RefCell<Vec<PaintOp>>>,
    pub scheduler: ManualScheduler,
    observers: RefCell<Vec<(u64, ResizeCallback)>>,
    window_listeners: RefCell<Vec<(u64, ResizeCallback)>>,
    visibility_listeners: RefCell<Vec<(u64, VisibilityCallback)>>,
    next_id: Cell<u64>,
}

/// Cloning shares state: one clone goes to `activate`, the test keeps one.
#[derive(Clone)]
pub struct FakeEnv {
    pub state: Rc<FakeState>,
}

impl FakeEnv {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            state: Rc::new(FakeState {
                reduced_motion: Cell::new(false),
                visible: Cell::new(true),
                viewport_width: Cell::new(width),
                bounds: Cell::new(Some(Bounds::new(width, height))),
                surface_available: Cell::new(true),
                observer_available: Cell::new(true),
                acquire_calls: Cell::new(0),
                ops: Rc::new(RefCell::new(Vec::new())),
                scheduler: ManualScheduler::new(),
                observers: RefCell::new(Vec::new()),
                window_listeners: RefCell::new(Vec::new()),
                visibility_listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn with_reduced_motion(self) -> Self {
        self.state.reduced_motion.set(true);
        self
    }

    pub fn without_surface(self) -> Self {
        self.state.surface_available.set(false);
        self
    }

    pub fn without_observer(self) -> Self {
        self.state.observer_available.set(false);
        self
    }

    pub fn hidden(self) -> Self {
        self.state.visible.set(false);
        self
    }

    pub fn frames(&self) -> &ManualScheduler {
        &self.state.scheduler
    }

    pub fn ops(&self) -> Vec<PaintOp> {
        self.state.ops.borrow().clone()
    }

    pub fn clear_ops(&self) {
        self.state.ops.borrow_mut().clear();
    }

    pub fn observer_count(&self) -> usize {
        self.state.observers.borrow().len()
    }

    pub fn window_listener_count(&self) -> usize {
        self.state.window_listeners.borrow().len()
    }

    pub fn visibility_listener_count(&self) -> usize {
        self.state.visibility_listeners.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.observer_count() + self.window_listener_count() + self.visibility_listener_count()
    }

    /// Change the container box and notify observers, as a ResizeObserver would.
    pub fn resize_container(&self, width: f64, height: f64) {
        self.state.bounds.set(Some(Bounds::new(width, height)));
        let callbacks: Vec<ResizeCallback> =
            self.state.observers.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for cb in callbacks {
            cb();
        }
    }

    /// Change the container box and fire the window-level resize event.
    pub fn resize_window(&self, width: f64, height: f64) {
        self.state.bounds.set(Some(Bounds::new(width, height)));
        self.state.viewport_width.set(width);
        let callbacks: Vec<ResizeCallback> = self
            .state
            .window_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            cb();
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.state.visible.set(visible);
        let callbacks: Vec<VisibilityCallback> = self
            .state
            .visibility_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in callbacks {
            cb(visible);
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.state.next_id.get() + 1;
        self.state.next_id.set(id);
        id
    }
}

impl Environment for FakeEnv {
    type Painter = RecordingPainter;

    fn prefers_reduced_motion(&self) -> bool {
        self.state.reduced_motion.get()
    }

    fn is_page_visible(&self) -> bool {
        self.state.visible.get()
    }

    fn viewport_width(&self) -> f64 {
        self.state.viewport_width.get()
    }

    fn container_bounds(&self) -> Option<Bounds> {
        self.state.bounds.get()
    }

    fn acquire_painter(&self) -> Result<RecordingPainter, RendererError> {
        self.state.acquire_calls.set(self.state.acquire_calls.get() + 1);
        if !self.state.surface_available.get() {
            return Err(RendererError::SurfaceUnavailable("no 2d context".into()));
        }
        Ok(RecordingPainter {
            ops: self.state.ops.clone(),
        })
    }

    fn observe_container(&self, on_resize: ResizeCallback) -> Result<Subscription, RendererError> {
        if !self.state.observer_available.get() {
            return Err(RendererError::ObserverUnavailable("not supported".into()));
        }
        let id = self.next_id();
        self.state.observers.borrow_mut().push((id, on_resize));
        let state = self.state.clone();
        Ok(Subscription::new(move || {
            state.observers.borrow_mut().retain(|(i, _)| *i != id);
        }))
    }

    fn listen_window_resize(&self, on_resize: ResizeCallback) -> Subscription {
        let id = self.next_id();
        self.state.window_listeners.borrow_mut().push((id, on_resize));
        let state = self.state.clone();
        Subscription::new(move || {
            state.window_listeners.borrow_mut().retain(|(i, _)| *i != id);
        })
    }

    fn listen_visibility(&self, on_change: VisibilityCallback) -> Subscription {
        let id = self.next_id();
        self.state
            .visibility_listeners
            .borrow_mut()
            .push((id, on_change));
        let state = self.state.clone();
        Subscription::new(move || {
            state.visibility_listeners.borrow_mut().retain(|(i, _)| *i != id);
        })
    }

    fn scheduler(&self) -> Rc<dyn FrameScheduler> {
        Rc::new(self.state.scheduler.clone())
    }
}
