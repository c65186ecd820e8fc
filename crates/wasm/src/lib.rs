//! WASM bindings for the dental offer template engine
//!
//! This crate provides a JavaScript-friendly API for:
//! - Resolving templates against offer data
//! - Validating templates and computing stats
//! - Creating, cloning, exporting and importing templates
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { createDefaultTemplate, processTemplate, validateTemplate } from 'dental-template-wasm';
//!
//! await init();
//!
//! const template = createDefaultTemplate('Standart Teklif', 'offer');
//! const { isValid, errors } = validateTemplate(template);
//!
//! // Resolve with runtime data; the config argument is optional
//! const resolved = processTemplate(template, {
//!   clinic: { name: 'Gülüş Diş Kliniği' },
//!   patient: { name: 'Ali' },
//!   treatments: [{ name: 'Dolgu', price: 100, quantity: 2 }],
//!   offer: { currency: 'TRY', vatRate: 20 },
//! });
//! ```

use dental_template::{DynamicDataFields, EngineConfig, Template, TemplateEngine, TemplateError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn template_error(error: impl Into<TemplateError>) -> JsValue {
    js_error(&error.into().to_string())
}

/// Serialize to plain JS objects (maps become objects, not `Map`)
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(&format!("Invalid {what}: {e}")))
}

fn config_from_js(value: JsValue) -> Result<EngineConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EngineConfig::default());
    }
    let config: EngineConfig = from_js(value, "config")?;
    config.validate().map_err(template_error)?;
    Ok(config)
}

/// Resolve a template against data
///
/// @param template - Template object
/// @param data - Data object (patient, treatments, offer, clinic)
/// @param config - Optional engine config
/// @returns Resolved template object
#[wasm_bindgen(js_name = processTemplate)]
pub fn process_template(
    template: JsValue,
    data: JsValue,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let template: Template = from_js(template, "template")?;
    let data: DynamicDataFields = from_js(data, "data")?;
    let config = config_from_js(config)?;

    let resolved = TemplateEngine::new(&template)
        .with_config(config)
        .process(&data);
    to_js(&resolved)
}

/// Substitute `{{path}}` tokens in a single string
///
/// @param content - Text with placeholders
/// @param data - Data object
/// @returns Text with resolvable tokens replaced
#[wasm_bindgen(js_name = resolvePlaceholders)]
pub fn resolve_placeholders(content: &str, data: JsValue) -> Result<String, JsValue> {
    let data: serde_json::Value = from_js(data, "data")?;
    Ok(dental_template::resolve(content, &data))
}

/// Check a template's structure
///
/// @param template - Template object
/// @returns `{ isValid, errors }` with one message per defect
#[wasm_bindgen(js_name = validateTemplate)]
pub fn validate_template(template: JsValue) -> Result<JsValue, JsValue> {
    let template: Template = from_js(template, "template")?;
    to_js(&dental_template::validate_template(&template))
}

/// Count elements and pages
///
/// @param template - Template object
/// @returns `{ totalElements, elementTypes, totalPages, estimatedSize }`
#[wasm_bindgen(js_name = getTemplateStats)]
pub fn get_template_stats(template: JsValue) -> Result<JsValue, JsValue> {
    let template: Template = from_js(template, "template")?;
    to_js(&dental_template::template_stats(&template))
}

/// Build the standard one-page offer template
#[wasm_bindgen(js_name = createDefaultTemplate)]
pub fn create_default_template(name: &str, category: &str) -> Result<JsValue, JsValue> {
    to_js(&dental_template::create_default_template(name, category))
}

/// Copy a template under a new name and id
#[wasm_bindgen(js_name = cloneTemplate)]
pub fn clone_template(template: JsValue, new_name: &str) -> Result<JsValue, JsValue> {
    let template: Template = from_js(template, "template")?;
    to_js(&dental_template::clone_template(&template, new_name))
}

/// Serialize a template to JSON text
#[wasm_bindgen(js_name = exportTemplate)]
pub fn export_template(template: JsValue) -> Result<String, JsValue> {
    let template: Template = from_js(template, "template")?;
    dental_template::export_template(&template).map_err(template_error)
}

/// Read a template from exported JSON text
///
/// Throws when the text is not a JSON object with `name` and `pages`.
#[wasm_bindgen(js_name = importTemplate)]
pub fn import_template(text: &str) -> Result<JsValue, JsValue> {
    let template = dental_template::import_template(text).map_err(template_error)?;
    to_js(&template)
}
