//! Dental Template - offer document template engine
//!
//! This crate provides:
//! - Template JSON schema types (pages, positioned elements, business data)
//! - Placeholder resolution via dotted paths (`{{patient.name}}`)
//! - Element processing (patient block, treatment list, price table with VAT)
//! - Structural validation and template statistics
//! - Template lifecycle: default template, clone, export, import
//!
//! # Example
//!
//! ```ignore
//! use dental_template::{create_default_template, DynamicDataFields, TemplateEngine};
//!
//! let template = create_default_template("Standart Teklif", "offer");
//! let data: DynamicDataFields = serde_json::from_str(data_json)?;
//! let resolved = TemplateEngine::new(&template).process(&data);
//! ```

pub mod blocks;
pub mod config;
mod engine;
mod lifecycle;
pub mod parser;
pub mod resolver;
mod schema;
mod stats;
mod validate;

pub use blocks::{PriceSummary, ToothPricing};
pub use config::EngineConfig;
pub use engine::{process_template, ProcessReport, TemplateEngine, UnresolvedPlaceholder};
pub use lifecycle::{
    clone_template, create_default_template, export_template, import_template, new_id,
};
pub use parser::parse_template;
pub use resolver::{resolve, PlaceholderResolver, Resolution};
pub use schema::*;
pub use stats::{template_stats, template_stats_with, TemplateStats};
pub use validate::{validate_template, ValidationError, ValidationResult};

use thiserror::Error;

/// Errors that can occur during template processing
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to parse template: {0}")]
    ParseError(String),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Invalid engine config: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Reasons a template import is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    InvalidJson(String),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("malformed template: {0}")]
    Malformed(String),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
