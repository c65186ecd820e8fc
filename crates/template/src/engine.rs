//! Template processing

use serde::Serialize;
use serde_json::Value;

use crate::blocks::{process_element, ProcessContext};
use crate::config::EngineConfig;
use crate::schema::{DynamicDataFields, Page, Template};

/// A placeholder that could not be resolved during processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedPlaceholder {
    /// Page index (0-based)
    pub page: usize,
    pub element_id: Option<String>,
    /// Path inside the token
    pub path: String,
}

/// Diagnostics collected while processing a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    pub elements_processed: usize,
    pub unresolved: Vec<UnresolvedPlaceholder>,
}

/// Template engine
///
/// Binds a template to business data. The template and data are only read;
/// every call returns a new, independent [`Template`].
pub struct TemplateEngine<'a> {
    /// The template to process
    template: &'a Template,
    config: EngineConfig,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new engine for a template with the default config
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            config: EngineConfig::default(),
        }
    }

    /// Use a specific engine config
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve the template against data
    pub fn process(&self, data: &DynamicDataFields) -> Template {
        self.process_with_report(data).0
    }

    /// Resolve the template and report unresolved placeholders
    pub fn process_with_report(&self, data: &DynamicDataFields) -> (Template, ProcessReport) {
        let value = serde_json::to_value(data).unwrap_or_else(|e| {
            log::warn!("Could not convert data for path lookups: {}", e);
            Value::Null
        });
        let ctx = ProcessContext {
            data,
            value: &value,
            config: &self.config,
        };

        let mut report = ProcessReport::default();
        let mut resolved = self.template.clone();
        resolved.pages = std::mem::take(&mut resolved.pages)
            .into_iter()
            .enumerate()
            .map(|(index, page)| process_page(index, page, &ctx, &mut report))
            .collect();

        log::debug!(
            "Processed template '{}': {} elements, {} unresolved placeholders",
            resolved.name,
            report.elements_processed,
            report.unresolved.len()
        );

        (resolved, report)
    }
}

/// Process every element of one page
fn process_page(
    index: usize,
    mut page: Page,
    ctx: &ProcessContext<'_>,
    report: &mut ProcessReport,
) -> Page {
    page.elements = std::mem::take(&mut page.elements)
        .into_iter()
        .map(|element| {
            log::trace!(
                "Processing {} element {:?} on page {}",
                element.type_name(),
                element.id,
                index
            );
            let processed = process_element(element, ctx);
            report.elements_processed += 1;
            report
                .unresolved
                .extend(processed.unresolved.into_iter().map(|path| UnresolvedPlaceholder {
                    page: index,
                    element_id: processed.element.id.clone(),
                    path,
                }));
            processed.element
        })
        .collect();
    page
}

/// Resolve a template against data with the default config
pub fn process_template(template: &Template, data: &DynamicDataFields) -> Template {
    TemplateEngine::new(template).process(data)
}
