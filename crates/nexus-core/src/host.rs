//! Everything the renderer needs from the page, behind one trait.

use crate::error::RendererError;
use crate::paint::Painter;
use crate::scheduler::FrameScheduler;
use crate::sizing::Bounds;
use std::rc::Rc;

pub type ResizeCallback = Rc<dyn Fn()>;
pub type VisibilityCallback = Rc<dyn Fn(bool)>;

/// Detaches a listener or observer when released.
///
/// Releasing twice is a no-op, and dropping an unreleased subscription
/// releases it.
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// The page-side collaborator: container geometry, user preferences,
/// drawing surface and event sources.
pub trait Environment {
    type Painter: Painter + 'static;

    /// Read once at activation.
    fn prefers_reduced_motion(&self) -> bool;
    fn is_page_visible(&self) -> bool;
    /// CSS width of the whole viewport, for the desktop spawn bias.
    fn viewport_width(&self) -> f64;
    /// Current box of the host container, or `None` if it is gone.
    fn container_bounds(&self) -> Option<Bounds>;

    fn acquire_painter(&self) -> Result<Self::Painter, RendererError>;

    /// Observe the container box. `ObserverUnavailable` makes the caller
    /// fall back to [`Environment::listen_window_resize`].
    fn observe_container(&self, on_resize: ResizeCallback) -> Result<Subscription, RendererError>;
    fn listen_window_resize(&self, on_resize: ResizeCallback) -> Subscription;
    fn listen_visibility(&self, on_change: VisibilityCallback) -> Subscription;

    fn scheduler(&self) -> Rc<dyn FrameScheduler>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn release_runs_once() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut sub = Subscription::new(move || h.set(h.get() + 1));
        assert!(sub.is_attached());
        sub.release();
        sub.release();
        drop(sub);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn drop_releases() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        drop(Subscription::new(move || h.set(h.get() + 1)));
        assert_eq!(hits.get(), 1);
        assert!(!Subscription::detached().is_attached());
    }
}
