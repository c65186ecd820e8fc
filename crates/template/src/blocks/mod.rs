//! Element processing
//!
//! Every element goes through the same three steps:
//! 1. placeholder substitution over `content`
//! 2. `dataField` override
//! 3. type-specific processing, which wins whenever it produces output
//!
//! Each step is a pure function of the element and the data.

mod patient;
mod pricing;
mod treatment;

use serde_json::Value;

use crate::config::EngineConfig;
use crate::parser::{resolve_binding, value_to_string};
use crate::resolver::PlaceholderResolver;
use crate::schema::{
    DynamicDataFields, Element, ElementKind, PatientInfoElement, PriceTableElement,
    TreatmentInfoElement,
};

pub use patient::patient_lines;
pub use pricing::{
    build_price_rows, round_money, tooth_pricing, vat_amount, PriceSummary, PricingContext,
    ToothPricing,
};
pub use treatment::treatment_list;

/// Everything an element processor may read
#[derive(Debug, Clone, Copy)]
pub struct ProcessContext<'a> {
    /// Typed business data
    pub data: &'a DynamicDataFields,
    /// The same data as JSON, for path lookups
    pub value: &'a Value,
    pub config: &'a EngineConfig,
}

/// Trait for blocks whose content is generated from the data
pub trait TextContent {
    /// Get the generated text, or `None` to keep the existing content
    fn get_text(&self, data: &DynamicDataFields) -> Option<String>;
}

impl TextContent for PatientInfoElement {
    fn get_text(&self, data: &DynamicDataFields) -> Option<String> {
        Some(patient_lines(&self.visibility, &data.patient))
    }
}

impl TextContent for TreatmentInfoElement {
    fn get_text(&self, data: &DynamicDataFields) -> Option<String> {
        if self.visibility.treatments && !data.treatments.is_empty() {
            Some(treatment_list(&data.treatments))
        } else {
            None
        }
    }
}

/// An element after processing, with the placeholder paths left unresolved
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedElement {
    pub element: Element,
    pub unresolved: Vec<String>,
}

/// Run the full pipeline on one element
pub fn process_element(mut element: Element, ctx: &ProcessContext<'_>) -> ProcessedElement {
    let unresolved = apply_placeholders(&mut element, ctx);
    apply_data_field(&mut element, ctx.value);
    apply_kind(&mut element, ctx);

    ProcessedElement {
        element,
        unresolved,
    }
}

/// Step 1: substitute placeholders in `content`
fn apply_placeholders(element: &mut Element, ctx: &ProcessContext<'_>) -> Vec<String> {
    let Some(content) = element.content.as_deref() else {
        return Vec::new();
    };

    let resolution = PlaceholderResolver::new(ctx.config).resolve_with_report(content, ctx.value);
    element.content = Some(resolution.text);
    resolution.unresolved
}

/// Step 2: a defined, non-null value at `dataField` replaces the content
fn apply_data_field(element: &mut Element, data: &Value) {
    let Some(path) = element.data_field.as_deref() else {
        return;
    };

    match resolve_binding(path, data) {
        Some(Value::Null) | None => {
            log::trace!("dataField '{}' has no value, keeping content", path);
        }
        Some(value) => element.content = Some(value_to_string(value)),
    }
}

/// Step 3: type-specific processing
fn apply_kind(element: &mut Element, ctx: &ProcessContext<'_>) {
    match &mut element.kind {
        ElementKind::PatientInfo(info) => {
            if let Some(text) = info.get_text(ctx.data) {
                element.content = Some(text);
            }
        }
        ElementKind::TreatmentInfo(info) => {
            if let Some(text) = info.get_text(ctx.data) {
                element.content = Some(text);
            }
        }
        ElementKind::PriceTable(table) => fill_price_table(table, ctx),
        ElementKind::Text
        | ElementKind::Image(_)
        | ElementKind::Logo(_)
        | ElementKind::Signature(_)
        | ElementKind::Custom(_) => {}
    }
}

fn fill_price_table(table: &mut PriceTableElement, ctx: &ProcessContext<'_>) {
    let (rows, pricing) = build_price_rows(ctx.data, ctx.config);
    table.price_table_data = rows;
    table.currency = Some(pricing.currency);
    table.vat_rate = Some(pricing.vat_rate);
}
