use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn new_obj() -> Object {
    Object::new()
}

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn bad_params(message: impl Into<String>) -> JsValue {
    err("bad_params", message, None)
}

pub fn from_convert(e: &reticle::ConvertError) -> JsValue {
    match e {
        reticle::ConvertError::MalformedInput(_) => err("malformed_input", e.to_string(), None),
        reticle::ConvertError::DegenerateGeometry { width, height } => {
            let d = new_obj();
            set_kv(&d, "width", &JsValue::from_f64(*width));
            set_kv(&d, "height", &JsValue::from_f64(*height));
            err("degenerate_geometry", e.to_string(), Some(d.into()))
        }
        _ => err("convert_failed", e.to_string(), None),
    }
}
