#![cfg(target_arch = "wasm32")]
use nexus_core::{activate, DisableReason, Handle, NexusConfig, Phase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod env;
mod scheduler;
mod style;

use crate::constants::HERO_SELECTOR;
use crate::env::BrowserEnv;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nexus-web loaded");
    Ok(())
}

/// JS-facing owner of one mounted background.
#[wasm_bindgen]
pub struct NexusHandle {
    inner: Handle,
}

#[wasm_bindgen]
impl NexusHandle {
    /// Stop animating and detach every listener. Safe to call more than once.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    pub fn phase(&self) -> String {
        phase_label(self.inner.phase()).to_string()
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running => "running",
        Phase::Paused => "paused",
        Phase::Disabled(DisableReason::ReducedMotion) => "disabled:reduced-motion",
        Phase::Disabled(DisableReason::SurfaceUnavailable) => "disabled:no-surface",
        Phase::TornDown => "torn-down",
    }
}

/// Mount the background on `canvas`, sized to its closest `.hero` ancestor.
#[wasm_bindgen]
pub fn mount(canvas: web::HtmlCanvasElement) -> NexusHandle {
    mount_in(canvas, HERO_SELECTOR)
}

/// Mount the background on `canvas`, sized to its closest `selector` ancestor.
///
/// Never throws: a page without a window, a reduced-motion preference or a
/// missing 2D context all yield a disabled handle.
#[wasm_bindgen(js_name = mountIn)]
pub fn mount_in(canvas: web::HtmlCanvasElement, selector: &str) -> NexusHandle {
    let env = match BrowserEnv::new(canvas, selector) {
        Ok(env) => env,
        Err(e) => {
            log::error!("[nexus] mount failed: {:#}", e);
            return NexusHandle {
                inner: Handle::disabled(DisableReason::SurfaceUnavailable),
            };
        }
    };
    NexusHandle {
        inner: activate(env, NexusConfig::default(), StdRng::from_entropy()),
    }
}
