//! Template statistics

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::schema::Template;

/// Aggregate counts over a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStats {
    pub total_elements: usize,
    /// Element count per `type` tag
    pub element_types: BTreeMap<String, usize>,
    pub total_pages: usize,
    /// Rough size in bytes; an estimate, not a serialized length
    pub estimated_size: usize,
}

/// Count elements and pages using the default per-element estimate
pub fn template_stats(template: &Template) -> TemplateStats {
    template_stats_with(template, &EngineConfig::default())
}

/// Count elements and pages using the config's per-element estimate
pub fn template_stats_with(template: &Template, config: &EngineConfig) -> TemplateStats {
    let mut element_types: BTreeMap<String, usize> = BTreeMap::new();
    for element in template.elements() {
        *element_types
            .entry(element.type_name().to_string())
            .or_insert(0) += 1;
    }

    let total_elements: usize = element_types.values().sum();

    TemplateStats {
        total_elements,
        element_types,
        total_pages: template.pages.len(),
        estimated_size: total_elements.saturating_mul(config.bytes_per_element),
    }
}
