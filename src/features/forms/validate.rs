use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Required form controls the validator inspects.
const REQUIRED_FIELDS_SELECTOR: &str = "input[required], select[required], textarea[required]";

/// Bootstrap class marking a field as invalid.
const INVALID_CLASS: &str = "is-invalid";

/// Mark required, empty fields in `form` as invalid and report overall
/// validity.
///
/// Fields with a non-empty trimmed value get any prior invalid marker
/// cleared. Submission is not blocked here; the caller decides.
pub fn validate_form(form: &Element) -> bool {
    let Ok(fields) = form.query_selector_all(REQUIRED_FIELDS_SELECTOR) else {
        return true;
    };

    let mut valid = true;
    for index in 0..fields.length() {
        let Some(field) = fields
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        if field_value(&field).trim().is_empty() {
            let _ = field.class_list().add_1(INVALID_CLASS);
            valid = false;
        } else {
            let _ = field.class_list().remove_1(INVALID_CLASS);
        }
    }
    valid
}

/// Current value of a form control, regardless of its concrete element type.
fn field_value(field: &Element) -> String {
    js_sys::Reflect::get(field.as_ref(), &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}
