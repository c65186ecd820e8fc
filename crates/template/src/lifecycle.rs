//! Template creation, cloning, export and import

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::schema::*;
use crate::{ImportError, Result};

/// Generate a fresh identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build the standard one-page offer template
///
/// The page holds a centered clinic-name header, a patient block showing
/// name, phone and email, and a price table with VAT enabled.
pub fn create_default_template(name: &str, category: &str) -> Template {
    let now = Utc::now();
    let size = PageSize::A4;

    let header = Element::new(new_id(), ElementKind::Text, 40.0, 40.0, 714.0, 60.0)
        .with_content("{{clinic.name}}")
        .with_style(ElementStyle {
            font_size: Some(24.0),
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Center,
            ..Default::default()
        });

    let patient = Element::new(
        new_id(),
        ElementKind::PatientInfo(PatientInfoElement {
            visibility: PatientVisibility {
                name: true,
                phone: true,
                email: true,
                address: false,
                notes: false,
            },
        }),
        40.0,
        120.0,
        340.0,
        120.0,
    );

    let prices = Element::new(
        new_id(),
        ElementKind::PriceTable(PriceTableElement {
            show_vat: true,
            ..Default::default()
        }),
        40.0,
        280.0,
        714.0,
        300.0,
    );

    let mut page = Page::new(new_id(), size);
    page.elements = vec![header, patient, prices];

    Template {
        id: new_id(),
        name: name.to_string(),
        description: None,
        category: category.to_string(),
        version: "1.0".to_string(),
        pages: vec![page],
        default_page_size: size,
        is_default: false,
        is_fixed: false,
        is_public: false,
        tags: Vec::new(),
        metadata: TemplateMetadata {
            created_at: now,
            updated_at: now,
            usage_count: 0,
            compatibility: Vec::new(),
        },
        settings: TemplateSettings::default(),
    }
}

/// Copy a template under a new name and id
///
/// The copy shares nothing with the source.
pub fn clone_template(template: &Template, new_name: &str) -> Template {
    let mut copy = template.clone();
    copy.name = new_name.to_string();
    restamp(&mut copy, Utc::now());
    copy
}

/// Serialize a template to pretty-printed JSON
pub fn export_template(template: &Template) -> Result<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// Read a template exported by [`export_template`]
///
/// The text must be a JSON object with `name` and `pages`. The imported
/// template always gets a new id and fresh metadata.
pub fn import_template(text: &str) -> std::result::Result<Template, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        log::warn!("Template import rejected: {}", e);
        ImportError::InvalidJson(e.to_string())
    })?;

    let object = value.as_object().ok_or(ImportError::NotAnObject)?;
    for field in ["name", "pages"] {
        if let None | Some(Value::Null) = object.get(field) {
            log::warn!("Template import rejected: missing '{}'", field);
            return Err(ImportError::MissingField(field));
        }
    }

    let mut template: Template = serde_json::from_value(value).map_err(|e| {
        log::warn!("Template import rejected: {}", e);
        ImportError::Malformed(e.to_string())
    })?;

    restamp(&mut template, Utc::now());
    log::debug!("Imported template '{}' as {}", template.name, template.id);

    Ok(template)
}

/// Give a template a new identity: fresh id, not default, new timestamps
fn restamp(template: &mut Template, now: DateTime<Utc>) {
    template.id = new_id();
    template.is_default = false;
    template.metadata = template.metadata.refreshed(now);
}
