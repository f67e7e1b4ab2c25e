use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Build an `IntersectionObserver` that hands each entry to `on_entry`.
pub fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(web::IntersectionObserverEntry) + 'static,
) -> Result<web::IntersectionObserver, JsValue> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(entry);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    Ok(observer)
}
