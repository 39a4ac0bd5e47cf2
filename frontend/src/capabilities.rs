use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Host features sampled once when the app starts and handed to every
/// component that needs them, instead of each one querying `window` itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    pub intersection_observer: bool,
    pub reduced_motion: bool,
}

impl HostCapabilities {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            warn!("No window available, running without observers or motion preference");
            return Self::default();
        };

        let intersection_observer =
            Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);

        let reduced_motion = match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                warn!("matchMedia failed, assuming motion is allowed: {:?}", err);
                false
            }
        };

        let caps = Self {
            intersection_observer,
            reduced_motion,
        };
        info!("Host capabilities: {:?}", caps);
        caps
    }
}

/// Capabilities provided by the app root; defaults when rendered outside it.
#[hook]
pub fn use_host_capabilities() -> HostCapabilities {
    use_context::<HostCapabilities>().unwrap_or_default()
}
