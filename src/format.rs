use site_core::group_thousands;
use wasm_bindgen::JsValue;

thread_local! {
    // default locale, default options
    static NUMBER_FORMAT: js_sys::Intl::NumberFormat =
        js_sys::Intl::NumberFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
}

/// Integer formatted for the user's locale (`Intl.NumberFormat`), or
/// comma-grouped when the host refuses.
pub fn locale_integer(value: i64) -> String {
    NUMBER_FORMAT
        .with(|nf| nf.format().call1(&JsValue::NULL, &JsValue::from_f64(value as f64)).ok())
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| group_thousands(value))
}
