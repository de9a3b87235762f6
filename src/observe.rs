use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct ObserverOptions<'a> {
    pub root_margin: Option<&'a str>,
    pub threshold: f64,
}

/// Build an IntersectionObserver that hands each reported entry to
/// `on_entry` together with the observer, so callers can unobserve.
pub fn observer(
    opts: ObserverOptions<'_>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    if let Some(margin) = opts.root_margin {
        init.set_root_margin(margin);
    }
    init.set_threshold(&JsValue::from_f64(opts.threshold));

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(observer)
}
