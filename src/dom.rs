use crate::constants::REDUCED_MOTION_QUERY;
use nexus_core::Subscription;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// True when `name` is defined on the global object, e.g. a constructor the
/// browser may not ship.
pub fn has_global(window: &web::Window, name: &str) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// The element whose box the canvas follows: the closest `selector`
/// ancestor, or the canvas's parent when there is none.
pub fn host_container(canvas: &web::HtmlCanvasElement, selector: &str) -> Option<web::Element> {
    match canvas.closest(selector) {
        Ok(Some(el)) => Some(el),
        _ => {
            log::debug!("[nexus] no `{selector}` ancestor; following the canvas parent");
            canvas.parent_element()
        }
    }
}

/// Attach `handler` to `event` on `target`. Releasing the subscription
/// removes the listener and frees the closure.
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut() + 'static,
) -> Subscription {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let added = if passive {
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
    } else {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    };
    if let Err(e) = added {
        log::warn!("[dom] addEventListener({event}) failed: {:?}", e);
        return Subscription::detached();
    }
    let target = target.clone();
    Subscription::new(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    })
}
