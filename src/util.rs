// Small helpers shared across views.

use serde_json::Value;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

/// Three-decimal display used by the favors tables.
pub fn fmt3(v: f64) -> String {
    format!("{v:.3}")
}

/// Render one heterogeneous table cell; JS-falsy values (null, 0, empty
/// string, false) show as blank, everything else as its text form.
pub fn cell(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_cells_render_blank() {
        assert_eq!(cell(&json!(null)), "");
        assert_eq!(cell(&json!(0)), "");
        assert_eq!(cell(&json!("")), "");
        assert_eq!(cell(&json!(false)), "");
    }

    #[test]
    fn truthy_cells_render_as_text() {
        assert_eq!(cell(&json!(12)), "12");
        assert_eq!(cell(&json!("SWE")), "SWE");
        assert_eq!(cell(&json!(2.5)), "2.5");
        assert_eq!(cell(&json!(true)), "true");
    }

    #[test]
    fn fmt3_pads_decimals() {
        assert_eq!(fmt3(1.0), "1.000");
        assert_eq!(fmt3(0.12345), "0.123");
    }
}
