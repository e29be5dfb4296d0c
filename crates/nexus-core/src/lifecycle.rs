//! Activation and teardown of the background.
//!
//! `activate` moves an environment from uninitialized to either a live
//! runtime (`Running`/`Paused`, toggled by page visibility) or a terminal
//! `Disabled` state. `Handle::dispose` moves a live runtime to the terminal
//! `TornDown` state.

use crate::animation::Animator;
use crate::config::NexusConfig;
use crate::error::DisableReason;
use crate::field::Field;
use crate::gate::VisibilityGate;
use crate::host::{Environment, ResizeCallback, Subscription, VisibilityCallback};
use crate::scheduler::{FrameScheduler, FrameToken};
use crate::sizing::SurfaceSize;
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Page hidden; frames keep ticking but do nothing.
    Paused,
    Disabled(DisableReason),
    TornDown,
}

struct Runtime<E: Environment, R: Rng> {
    env: E,
    animator: RefCell<Animator<E::Painter, R>>,
    gate: VisibilityGate,
    scheduler: Rc<dyn FrameScheduler>,
    pending: Cell<Option<FrameToken>>,
    subscriptions: RefCell<Vec<Subscription>>,
    torn_down: Cell<bool>,
}

impl<E, R> Runtime<E, R>
where
    E: Environment + 'static,
    R: Rng + 'static,
{
    /// Read the container box and swap in a field built for it.
    fn resize_surface(&self) {
        if self.torn_down.get() {
            return;
        }
        let Some(bounds) = self.env.container_bounds() else {
            log::debug!("[sizer] container missing; keeping current field");
            return;
        };
        let size = SurfaceSize::from_bounds(bounds);
        let viewport_width = self.env.viewport_width();
        let mut animator = self.animator.borrow_mut();
        if animator.field().size == size && !animator.field().is_empty() {
            log::debug!("[sizer] {}x{} unchanged", size.width, size.height);
            return;
        }
        animator.rebuild(size, viewport_width);
        let field = animator.field();
        log::debug!(
            "[sizer] {}x{} -> particles={} lanes={} glyphs={}",
            size.width,
            size.height,
            field.particles.len(),
            field.lanes.len(),
            field.glyph_count()
        );
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.torn_down.get() {
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let token = self.scheduler.schedule(Box::new(move || {
            if let Some(rt) = weak.upgrade() {
                rt.on_frame();
            }
        }));
        self.pending.set(Some(token));
    }

    fn on_frame(self: Rc<Self>) {
        self.pending.set(None);
        if self.torn_down.get() {
            return;
        }
        self.animator.borrow_mut().step(self.gate.is_open());
        self.schedule_frame();
    }
}

/// Object-safe view of a runtime so `Handle` needs no type parameters.
trait Control {
    fn dispose(&self);
    fn phase(&self) -> Phase;
    fn field(&self) -> Field;
    fn frames_painted(&self) -> u64;
    fn has_pending_frame(&self) -> bool;
}

impl<E, R> Control for Runtime<E, R>
where
    E: Environment + 'static,
    R: Rng + 'static,
{
    fn dispose(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
        }
        let mut subscriptions = std::mem::take(&mut *self.subscriptions.borrow_mut());
        for sub in subscriptions.iter_mut() {
            sub.release();
        }
        log::info!(
            "[nexus] torn down after {} painted frames",
            self.frames_painted()
        );
    }

    fn phase(&self) -> Phase {
        if self.torn_down.get() {
            Phase::TornDown
        } else if self.gate.is_open() {
            Phase::Running
        } else {
            Phase::Paused
        }
    }

    fn field(&self) -> Field {
        self.animator.borrow().field().clone()
    }

    fn frames_painted(&self) -> u64 {
        self.animator.borrow().frames_painted()
    }

    fn has_pending_frame(&self) -> bool {
        self.pending.get().is_some()
    }
}

enum HandleState {
    Disabled(DisableReason),
    Live(Rc<dyn Control>),
}

/// Owner of an activated background. Dropping it tears the runtime down.
pub struct Handle {
    state: HandleState,
}

impl Handle {
    /// A handle that never started, for hosts that fail before `activate`.
    pub fn disabled(reason: DisableReason) -> Self {
        Self {
            state: HandleState::Disabled(reason),
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            HandleState::Disabled(reason) => Phase::Disabled(*reason),
            HandleState::Live(rt) => rt.phase(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn disable_reason(&self) -> Option<DisableReason> {
        match &self.state {
            HandleState::Disabled(reason) => Some(*reason),
            HandleState::Live(_) => None,
        }
    }

    /// Snapshot of the live field; `None` when disabled.
    pub fn field(&self) -> Option<Field> {
        match &self.state {
            HandleState::Disabled(_) => None,
            HandleState::Live(rt) => Some(rt.field()),
        }
    }

    pub fn frames_painted(&self) -> u64 {
        match &self.state {
            HandleState::Disabled(_) => 0,
            HandleState::Live(rt) => rt.frames_painted(),
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        match &self.state {
            HandleState::Disabled(_) => false,
            HandleState::Live(rt) => rt.has_pending_frame(),
        }
    }

    /// Cancel the pending frame and detach every observer and listener.
    /// Safe to call repeatedly and on disabled handles.
    pub fn dispose(&self) {
        if let HandleState::Live(rt) = &self.state {
            rt.dispose();
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle").field("phase", &self.phase()).finish()
    }
}

/// Start the background in `env`.
///
/// Never fails: reduced motion or a missing drawing surface yield a
/// disabled handle that did no work at all.
pub fn activate<E, R>(env: E, config: NexusConfig, rng: R) -> Handle
where
    E: Environment + 'static,
    R: Rng + 'static,
{
    if env.prefers_reduced_motion() {
        log::info!("[nexus] reduced motion requested; background disabled");
        return Handle::disabled(DisableReason::ReducedMotion);
    }

    let painter = match env.acquire_painter() {
        Ok(painter) => painter,
        Err(err) => {
            log::warn!("[nexus] {err}; background disabled");
            return Handle::disabled(DisableReason::SurfaceUnavailable);
        }
    };

    let gate = VisibilityGate::new(env.is_page_visible());
    let scheduler = env.scheduler();
    let animator = Animator::new(Field::empty(SurfaceSize::new(1, 1)), painter, rng, config);
    let rt = Rc::new(Runtime {
        env,
        animator: RefCell::new(animator),
        gate: gate.clone(),
        scheduler,
        pending: Cell::new(None),
        subscriptions: RefCell::new(Vec::new()),
        torn_down: Cell::new(false),
    });

    rt.resize_surface();

    let on_resize: ResizeCallback = {
        let weak = Rc::downgrade(&rt);
        Rc::new(move || {
            if let Some(rt) = weak.upgrade() {
                rt.resize_surface();
            }
        })
    };
    let resize_sub = match rt.env.observe_container(on_resize.clone()) {
        Ok(sub) => sub,
        Err(err) => {
            log::warn!("[sizer] {err}; falling back to window resize events");
            rt.env.listen_window_resize(on_resize)
        }
    };

    let on_visibility: VisibilityCallback = Rc::new(move |visible| {
        gate.set_visible(visible);
    });
    let visibility_sub = rt.env.listen_visibility(on_visibility);

    rt.subscriptions
        .borrow_mut()
        .extend([resize_sub, visibility_sub]);

    rt.schedule_frame();

    {
        let animator = rt.animator.borrow();
        let field = animator.field();
        log::info!(
            "[nexus] active {}x{} particles={} lanes={} visible={}",
            field.size.width,
            field.size.height,
            field.particles.len(),
            field.lanes.len(),
            rt.gate.is_open()
        );
    }

    Handle {
        state: HandleState::Live(rt),
    }
}
