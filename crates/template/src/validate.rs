//! Structural template validation

use std::collections::HashSet;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::schema::Template;

/// A structural defect in a template
///
/// Page and element numbers in messages are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Template name is required")]
    MissingName,

    #[error("Template must have at least one page")]
    NoPages,

    #[error("Page {page}, element {element}: id is required")]
    MissingElementId { page: usize, element: usize },

    #[error("Page {page}, element {element}: duplicate element id '{id}'")]
    DuplicateElementId {
        page: usize,
        element: usize,
        id: String,
    },

    #[error("Page {page}, element {element}: position must not be negative (x={x}, y={y})")]
    NegativePosition {
        page: usize,
        element: usize,
        x: f64,
        y: f64,
    },

    #[error("Page {page}, element {element}: size must be positive (width={width}, height={height})")]
    NonPositiveSize {
        page: usize,
        element: usize,
        width: f64,
        height: f64,
    },
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating a template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Error messages, in the order the defects were found
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check a template's structure, collecting every defect
pub fn validate_template(template: &Template) -> ValidationResult {
    let mut errors = Vec::new();

    if template.name.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }

    if template.pages.is_empty() {
        errors.push(ValidationError::NoPages);
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for (page_index, page) in template.pages.iter().enumerate() {
        for (element_index, element) in page.elements.iter().enumerate() {
            let page = page_index + 1;
            let position = element_index + 1;

            match element.id.as_deref().map(str::trim) {
                None | Some("") => errors.push(ValidationError::MissingElementId {
                    page,
                    element: position,
                }),
                Some(id) => {
                    if !seen.insert(id) {
                        errors.push(ValidationError::DuplicateElementId {
                            page,
                            element: position,
                            id: id.to_string(),
                        });
                    }
                }
            }

            // Written so NaN fails the check
            if !(element.x >= 0.0 && element.y >= 0.0) {
                errors.push(ValidationError::NegativePosition {
                    page,
                    element: position,
                    x: element.x,
                    y: element.y,
                });
            }

            if !(element.width > 0.0 && element.height > 0.0) {
                errors.push(ValidationError::NonPositiveSize {
                    page,
                    element: position,
                    width: element.width,
                    height: element.height,
                });
            }
        }
    }

    if !errors.is_empty() {
        log::debug!(
            "Template '{}' has {} validation errors",
            template.name,
            errors.len()
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
