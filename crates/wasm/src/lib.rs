//! WASM bindings for tax-forms
//!
//! This crate provides JavaScript-friendly API for:
//! - Live totals while the user fills the form
//! - Currency formatting matching the generated report
//! - Rendering PDFs in the browser from template bytes
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { computeTotals, formatCurrency, TaxFormRenderer } from 'tax-forms-wasm';
//!
//! await init();
//!
//! const totals = computeTotals('schedule-c', formData);
//! label.textContent = formatCurrency(totals.net_profit);
//!
//! const renderer = new TaxFormRenderer();
//! renderer.loadTemplate('schedule-c', templateBytes);
//! const pdf = renderer.render('schedule-c', formData);
//! ```

use serde::Serialize;
use tax_forms::{
    Capabilities, FormRecord, FormRenderer, FormType, MemoryTemplates, RenderPath,
    TemplateStore,
};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_form_type(form_type: &str) -> Result<FormType, tax_forms::FormError> {
    form_type.parse()
}

/// Decode a form object posted from JavaScript
fn record_from_js(form_type: &str, data: JsValue) -> Result<FormRecord, JsValue> {
    let form_type = parse_form_type(form_type).map_err(to_js_error)?;
    let value: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    FormRecord::from_json(form_type, value).map_err(to_js_error)
}

/// Compute the totals of a form
///
/// @param formType - "schedule-c" or "schedule-e"
/// @param data - Flat form object, as posted to the API
/// @returns Totals object, e.g. { gross_income, total_expenses, net_profit }
#[wasm_bindgen(js_name = computeTotals)]
pub fn compute_totals(form_type: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let record = record_from_js(form_type, data)?;
    let totals = tax_forms::compute(&record);
    Ok(totals.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Format an amount the way the report prints it
///
/// @param amount - Amount in dollars
/// @returns Formatted string (e.g., "$1,234.50")
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    tax_forms::format_currency(amount)
}

/// Form types accepted by the other functions
///
/// @returns Array of form type identifiers
#[wasm_bindgen(js_name = supportedForms)]
pub fn supported_forms() -> js_sys::Array {
    FormType::ALL
        .iter()
        .map(|form_type| JsValue::from_str(form_type.as_str()))
        .collect()
}

/// PDF renderer holding templates in memory
#[wasm_bindgen]
pub struct TaxFormRenderer {
    templates: MemoryTemplates,
    capabilities: Capabilities,
}

#[wasm_bindgen]
impl TaxFormRenderer {
    /// Create a renderer with no templates loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> TaxFormRenderer {
        TaxFormRenderer {
            templates: MemoryTemplates::new(),
            capabilities: Capabilities::probe(),
        }
    }

    /// Load the fillable template of a form
    ///
    /// @param formType - "schedule-c" or "schedule-e"
    /// @param data - PDF file bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadTemplate)]
    pub fn load_template(&mut self, form_type: &str, data: &[u8]) -> Result<(), JsValue> {
        let form_type = parse_form_type(form_type).map_err(to_js_error)?;
        self.templates.insert(form_type, data.to_vec());
        Ok(())
    }

    /// Whether a template is loaded for the form
    #[wasm_bindgen(js_name = hasTemplate)]
    pub fn has_template(&self, form_type: &str) -> bool {
        parse_form_type(form_type)
            .map(|form_type| self.templates.contains(form_type))
            .unwrap_or(false)
    }

    /// Always draw the plain text report instead of filling the template
    #[wasm_bindgen(js_name = setTemplateFilling)]
    pub fn set_template_filling(&mut self, enabled: bool) {
        self.capabilities = Capabilities::probe().restrict(enabled, self.capabilities.drawing);
    }

    /// Render a form to PDF
    ///
    /// @param formType - "schedule-c" or "schedule-e"
    /// @param data - Flat form object
    /// @returns PDF bytes (Uint8Array)
    pub fn render(&self, form_type: &str, data: JsValue) -> Result<Vec<u8>, JsValue> {
        let record = record_from_js(form_type, data)?;
        let document = FormRenderer::new(&self.templates, self.capabilities)
            .render_record(&record)
            .map_err(to_js_error)?;

        if document.path == RenderPath::Fallback {
            web_sys::console::warn_1(&JsValue::from_str(
                "Template could not be filled; rendered plain text report",
            ));
        }

        Ok(document.bytes)
    }
}

impl Default for TaxFormRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-850.0), "$-850.00");
    }

    #[wasm_bindgen_test]
    fn test_parse_form_type() {
        assert_eq!(parse_form_type("schedule-e").unwrap(), FormType::ScheduleE);
        assert!(parse_form_type("1040").is_err());
    }

    #[wasm_bindgen_test]
    fn test_renderer_templates() {
        let mut renderer = TaxFormRenderer::new();
        assert!(!renderer.has_template("schedule-c"));
        renderer.load_template("schedule-c", b"%PDF-1.5").unwrap();
        assert!(renderer.has_template("schedule-c"));
        assert!(!renderer.has_template("schedule-e"));
        assert!(!renderer.has_template("unknown"));
    }

    #[wasm_bindgen_test]
    fn test_set_template_filling() {
        let mut renderer = TaxFormRenderer::new();
        renderer.set_template_filling(false);
        assert!(!renderer.capabilities.template_filling);
        assert!(renderer.capabilities.drawing);
    }
}
