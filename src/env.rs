use crate::canvas::CanvasPainter;
use crate::constants::{RESIZE_OBSERVER_GLOBAL, VISIBILITY_CHANGE_EVENT, WINDOW_RESIZE_EVENT};
use crate::dom;
use crate::scheduler::RafScheduler;
use nexus_core::{
    Bounds, Environment, FrameScheduler, RendererError, ResizeCallback, Subscription,
    VisibilityCallback,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The live page: canvas, its host container, window and document.
pub struct BrowserEnv {
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    selector: String,
    /// Resolved lazily: a canvas mounted before it is attached gets its
    /// container on the first resize after insertion.
    container: RefCell<Option<web::Element>>,
    scheduler: Rc<RafScheduler>,
}

impl BrowserEnv {
    pub fn new(canvas: web::HtmlCanvasElement, container_selector: &str) -> anyhow::Result<Self> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let container = dom::host_container(&canvas, container_selector);
        if container.is_none() {
            log::warn!("[nexus] canvas is detached; sizing waits for window resize");
        }
        let scheduler = Rc::new(RafScheduler::new(window.clone()));
        Ok(Self {
            window,
            document,
            canvas,
            selector: container_selector.to_owned(),
            container: RefCell::new(container),
            scheduler,
        })
    }

    fn container(&self) -> Option<web::Element> {
        let mut cached = self.container.borrow_mut();
        if cached.is_none() {
            *cached = dom::host_container(&self.canvas, &self.selector);
        }
        cached.clone()
    }
}

impl Environment for BrowserEnv {
    type Painter = CanvasPainter;

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn is_page_visible(&self) -> bool {
        !self.document.hidden()
    }

    fn viewport_width(&self) -> f64 {
        dom::viewport_width(&self.window)
    }

    fn container_bounds(&self) -> Option<Bounds> {
        self.container().map(|el| {
            let rect = el.get_bounding_client_rect();
            Bounds::new(rect.width(), rect.height())
        })
    }

    fn acquire_painter(&self) -> Result<CanvasPainter, RendererError> {
        CanvasPainter::new(self.canvas.clone())
    }

    fn observe_container(&self, on_resize: ResizeCallback) -> Result<Subscription, RendererError> {
        let container = self
            .container()
            .ok_or_else(|| RendererError::ObserverUnavailable("no host container".into()))?;
        if !dom::has_global(&self.window, RESIZE_OBSERVER_GLOBAL) {
            return Err(RendererError::ObserverUnavailable(
                "ResizeObserver not supported".into(),
            ));
        }
        let closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| RendererError::ObserverUnavailable(format!("{:?}", e)))?;
        observer.observe(&container);
        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(closure);
        }))
    }

    fn listen_window_resize(&self, on_resize: ResizeCallback) -> Subscription {
        dom::listen(&self.window, WINDOW_RESIZE_EVENT, true, move || on_resize())
    }

    fn listen_visibility(&self, on_change: VisibilityCallback) -> Subscription {
        let document = self.document.clone();
        dom::listen(&self.document, VISIBILITY_CHANGE_EVENT, false, move || {
            on_change(!document.hidden())
        })
    }

    fn scheduler(&self) -> Rc<dyn FrameScheduler> {
        self.scheduler.clone()
    }
}
