#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use reticle_wasm::{convert_svg, preview_lines, preview_svg};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok"))
        .ok()
        .and_then(|x| x.as_bool())
        .unwrap_or(false)
}

const TRACE: &str =
    r#"<svg><path d="M 10 10 L 30 10 C 30 10 40 30 20 30 C 10 30 10 20 10 10"/></svg>"#;

#[wasm_bindgen_test]
fn conversion_returns_sight_text() {
    let r = convert_svg(TRACE, JsValue::NULL);
    assert!(is_ok(&r));
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let sight = Reflect::get(&value, &JsValue::from_str("sight")).unwrap();
    assert!(sight.as_string().unwrap().contains("drawLines{"));
}

#[wasm_bindgen_test]
fn malformed_input_is_a_typed_error() {
    let r = convert_svg("<svg></svg>", JsValue::NULL);
    assert!(is_err(&r, "malformed_input"));
}

#[wasm_bindgen_test]
fn degenerate_geometry_is_a_typed_error() {
    let r = convert_svg(r#"<svg><path d="M 0 0 L 1 0"/></svg>"#, JsValue::NULL);
    assert!(is_err(&r, "degenerate_geometry"));
}

#[wasm_bindgen_test]
fn non_finite_params_are_rejected() {
    let params = js_sys::Object::new();
    let t = js_sys::Object::new();
    let _ = Reflect::set(
        &t,
        &JsValue::from_str("x_offset"),
        &JsValue::from_f64(f64::NAN),
    );
    let _ = Reflect::set(&params, &JsValue::from_str("transform"), &t);
    let r = convert_svg(TRACE, params.into());
    assert!(is_err(&r, "non_finite"));
}

#[wasm_bindgen_test]
fn preview_outputs_svg_and_coords() {
    let r = preview_svg(TRACE, JsValue::NULL);
    assert!(is_ok(&r));
    let r = preview_lines(TRACE, JsValue::NULL);
    assert!(is_ok(&r));
}
