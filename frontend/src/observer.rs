use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A live `IntersectionObserver` together with the JS callback it calls.
/// The callback must outlive the observer, so both are owned here and
/// released together in `disconnect`.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Watches `targets` and calls `on_entries` with each batch, in the order the
/// browser delivers it. The observer is passed along so a one-shot watcher
/// can disconnect itself.
pub fn observe<F>(
    targets: &[Element],
    root_margin: Option<&str>,
    thresholds: &[f64],
    mut on_entries: F,
) -> Result<ObserverHandle, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries: Vec<IntersectionObserverEntry> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        on_entries(entries, &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let threshold: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    init.set_threshold(&threshold);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}
