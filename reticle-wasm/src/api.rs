use crate::{error, interop};
use reticle::ConvertParams;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Deserialize caller params; null/undefined means defaults.
fn params_from(v: JsValue) -> Result<ConvertParams, JsValue> {
    if v.is_null() || v.is_undefined() {
        return Ok(ConvertParams::default());
    }
    let params: ConvertParams =
        serde_wasm_bindgen::from_value(v).map_err(|e| error::bad_params(e.to_string()))?;
    for (name, value) in [
        ("x_offset", params.transform.x_offset),
        ("y_offset", params.transform.y_offset),
        ("x_scale", params.transform.x_scale),
        ("y_scale", params.transform.y_scale),
        ("rotation_degrees", params.transform.rotation_degrees),
        ("trim_threshold", params.trim_threshold),
    ] {
        if !value.is_finite() {
            return Err(error::non_finite(name));
        }
    }
    Ok(params)
}

/// Convert a traced SVG document into sight-file text. Returns the
/// `{ok, value}` envelope; `value` holds `{sight, summary}`.
#[wasm_bindgen]
pub fn convert_svg(svg: &str, params: JsValue) -> JsValue {
    let params = match params_from(params) {
        Ok(p) => p,
        Err(v) => return v,
    };
    match reticle::convert(svg, &params) {
        Ok(conversion) => {
            if conversion.summary.budget_exhausted {
                web_sys::console::warn_1(&JsValue::from_str(
                    "line budget exhausted by explicit segments; curves were dropped",
                ));
            }
            error::ok(serde_wasm_bindgen::to_value(&conversion).unwrap())
        }
        Err(e) => error::from_convert(&e),
    }
}

/// Render the placed geometry back to a small SVG document for previewing.
#[wasm_bindgen]
pub fn preview_svg(svg: &str, params: JsValue) -> JsValue {
    let params = match params_from(params) {
        Ok(p) => p,
        Err(v) => return v,
    };
    match reticle::layout(svg, &params) {
        Ok(out) => error::ok(JsValue::from_str(&reticle::svg::to_svg_frame(&out.lines))),
        Err(e) => error::from_convert(&e),
    }
}

/// The placed segments as a flat Float64Array [x0, y0, x1, y1, ...] for
/// direct canvas drawing.
#[wasm_bindgen]
pub fn preview_lines(svg: &str, params: JsValue) -> JsValue {
    let params = match params_from(params) {
        Ok(p) => p,
        Err(v) => return v,
    };
    match reticle::layout(svg, &params) {
        Ok(out) => error::ok(interop::arr_f64(&interop::flat_coords(&out.lines)).into()),
        Err(e) => error::from_convert(&e),
    }
}

/// The placed segments as a JSON string `[[x0, y0, x1, y1], ...]`.
#[wasm_bindgen]
pub fn export_lines_json(svg: &str, params: JsValue) -> JsValue {
    let params = match params_from(params) {
        Ok(p) => p,
        Err(v) => return v,
    };
    match reticle::layout(svg, &params) {
        Ok(out) => {
            let json = serde_json::to_string(&reticle::json::lines_to_json(&out.lines)).unwrap();
            error::ok(JsValue::from_str(&json))
        }
        Err(e) => error::from_convert(&e),
    }
}
