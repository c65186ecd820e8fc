//! Template JSON schema types

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Root template structure
///
/// Only `name` and `pages` are required when reading a template; every other
/// field falls back to its default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template identifier, assigned by creation, clone and import
    #[serde(default)]
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form category (e.g. "offer", "treatment-plan")
    #[serde(default)]
    pub category: String,

    /// Schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Pages, in document order
    pub pages: Vec<Page>,

    #[serde(default)]
    pub default_page_size: PageSize,

    #[serde(default)]
    pub is_default: bool,

    /// Fixed templates are shipped with the application and not editable
    #[serde(default)]
    pub is_fixed: bool,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub metadata: TemplateMetadata,

    #[serde(default)]
    pub settings: TemplateSettings,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Template {
    /// Iterate over every element of every page, in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.pages.iter().flat_map(|page| page.elements.iter())
    }

    /// Find an element by id anywhere in the template
    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements().find(|e| e.id.as_deref() == Some(id))
    }

    /// Find an element by id for in-place editing
    pub fn find_element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.pages
            .iter_mut()
            .flat_map(|page| page.elements.iter_mut())
            .find(|e| e.id.as_deref() == Some(id))
    }
}

/// Bookkeeping fields refreshed on creation, clone and import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,

    /// Number of documents generated from this template
    #[serde(default)]
    pub usage_count: u64,

    /// Document kinds this template can be used for
    #[serde(default)]
    pub compatibility: Vec<String>,
}

impl TemplateMetadata {
    /// Fresh metadata stamped with `now`, keeping the compatibility list
    pub fn refreshed(&self, now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            usage_count: 0,
            compatibility: self.compatibility.clone(),
        }
    }
}

/// Document-wide presentation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSettings {
    pub margins: Margins,
    pub font_family: String,
    pub font_size: f64,
    pub primary_color: String,
    pub show_page_numbers: bool,
    pub show_header: bool,
    pub show_footer: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            font_family: "Inter".to_string(),
            font_size: 12.0,
            primary_color: "#1e40af".to_string(),
            show_page_numbers: true,
            show_header: true,
            show_footer: true,
        }
    }
}

/// Page margins in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// Standard page sizes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
}

impl PageSize {
    /// Page dimensions in CSS pixels at 96 dpi, as `(width, height)`
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (794.0, 1123.0),
            PageSize::A5 => (559.0, 794.0),
            PageSize::Letter => (816.0, 1056.0),
        }
    }
}

/// A single page of positioned elements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default = "default_page_width")]
    pub width: f64,

    #[serde(default = "default_page_height")]
    pub height: f64,

    #[serde(default = "default_background")]
    pub background_color: String,
}

fn default_page_width() -> f64 {
    PageSize::A4.dimensions().0
}

fn default_page_height() -> f64 {
    PageSize::A4.dimensions().1
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Page {
    /// Create an empty page with the given id and size
    pub fn new(id: impl Into<String>, size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        Self {
            id: id.into(),
            elements: Vec::new(),
            width,
            height,
            background_color: default_background(),
        }
    }
}

/// Positioned element on a page
///
/// The common geometry, content and style fields live here; type-specific
/// fields are carried by [`ElementKind`], which is tagged by `type` in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Element identifier (unique within a template)
    #[serde(default)]
    pub id: Option<String>,

    #[serde(flatten)]
    pub kind: ElementKind,

    /// X coordinate in pixels from the left page edge
    #[serde(default)]
    pub x: f64,

    /// Y coordinate in pixels from the top page edge
    #[serde(default)]
    pub y: f64,

    #[serde(default)]
    pub width: f64,

    #[serde(default)]
    pub height: f64,

    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,

    #[serde(default)]
    pub z_index: i32,

    /// Literal content, may contain placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Direct data binding path (e.g. "patient.name"), overrides content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,

    /// Locked elements cannot be moved in the editor
    #[serde(default)]
    pub locked: bool,
}

impl Element {
    /// Create an element of the given kind with geometry and no content
    pub fn new(
        id: impl Into<String>,
        kind: ElementKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: Some(id.into()),
            kind,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            z_index: 0,
            content: None,
            data_field: None,
            style: None,
            locked: false,
        }
    }

    /// Set literal content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set a direct data binding path
    pub fn with_data_field(mut self, path: impl Into<String>) -> Self {
        self.data_field = Some(path.into());
        self
    }

    /// Set the element style
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// The `type` tag of this element
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }
}

/// Type-specific element data (tagged union)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    /// Free text
    Text,

    /// Image
    Image(ImageElement),

    /// Clinic logo
    Logo(LogoElement),

    /// Signature line
    Signature(SignatureElement),

    /// Patient details block
    PatientInfo(PatientInfoElement),

    /// Treatment list block
    TreatmentInfo(TreatmentInfoElement),

    /// Pricing table
    PriceTable(PriceTableElement),

    /// Any other element type, kept as written and passed through
    #[serde(untagged)]
    Custom(CustomElement),
}

/// `type` tags with a dedicated variant in [`ElementKind`]
pub const ELEMENT_TYPES: [&str; 7] = [
    "text",
    "image",
    "logo",
    "signature",
    "patient-info",
    "treatment-info",
    "price-table",
];

impl ElementKind {
    /// The `type` tag as written in JSON
    pub fn type_name(&self) -> &str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Logo(_) => "logo",
            ElementKind::Signature(_) => "signature",
            ElementKind::PatientInfo(_) => "patient-info",
            ElementKind::TreatmentInfo(_) => "treatment-info",
            ElementKind::PriceTable(_) => "price-table",
            ElementKind::Custom(custom) => &custom.type_name,
        }
    }
}

/// Element of a type the engine has no processor for
///
/// Fields outside the common element fields are kept verbatim in `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomElement {
    #[serde(rename = "type", deserialize_with = "custom_type_name")]
    pub type_name: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A known tag only lands here when its fields failed to parse
fn custom_type_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    if ELEMENT_TYPES.contains(&name.as_str()) {
        return Err(D::Error::custom(format!("malformed '{name}' element")));
    }
    Ok(name)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageElement {
    /// Image URL or data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogoElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SignatureElement {
    /// Caption printed under the signature line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Patient details block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInfoElement {
    #[serde(default)]
    pub visibility: PatientVisibility,
}

/// Which patient fields a patient-info block shows
///
/// A field is shown only when its flag is set; absent flags are off.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatientVisibility {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
    pub address: bool,
    pub notes: bool,
}

/// Treatment list block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TreatmentInfoElement {
    #[serde(default)]
    pub visibility: TreatmentVisibility,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreatmentVisibility {
    pub treatments: bool,
}

/// Pricing table block
///
/// `price_table_data`, `currency` and `vat_rate` are populated by the engine;
/// values stored in a template are replaced on every resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTableElement {
    /// Whether the consumer should print the VAT line
    #[serde(default)]
    pub show_vat: bool,

    #[serde(default)]
    pub price_table_data: Vec<PriceRow>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
}

/// One computed row of a price table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<String>,

    /// Treatment name
    pub treatment: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Selected teeth (FDI numbering)
    #[serde(default)]
    pub teeth: Vec<u16>,

    pub quantity: f64,

    /// Unit price, VAT exclusive
    pub unit_price: f64,

    /// `unit_price × quantity`, VAT exclusive
    pub total: f64,

    pub currency: String,

    /// VAT percentage
    pub vat_rate: f64,

    pub vat_amount: f64,

    /// `total + vat_amount`
    pub total_price: f64,
}

/// Text alignment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font weight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Visual style of an element
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(default)]
    pub font_weight: FontWeight,

    /// Text color as a CSS color string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default)]
    pub text_align: TextAlign,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Runtime business data bound into a template
///
/// Keys without a typed field, at the top level or inside `patient`,
/// `treatments`, `offer` and `clinic`, are kept in the `extra` maps and
/// remain reachable from placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DynamicDataFields {
    #[serde(default)]
    pub patient: PatientData,

    #[serde(default)]
    pub treatments: Vec<TreatmentData>,

    #[serde(default)]
    pub offer: OfferData,

    #[serde(default)]
    pub clinic: ClinicData,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A treatment line of an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price, VAT exclusive
    #[serde(default)]
    pub price: f64,

    /// May be fractional
    #[serde(default = "default_quantity")]
    pub quantity: f64,

    /// Teeth the treatment applies to (FDI numbering)
    #[serde(default)]
    pub selected_teeth: Vec<u16>,

    /// Overrides the offer currency for this line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_quantity() -> f64 {
    1.0
}

impl TreatmentData {
    /// Create a treatment line with quantity 1
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            quantity: 1.0,
            selected_teeth: Vec::new(),
            currency: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// VAT percentage applied to every price-table row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClinicData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_element() {
        let json = r#"{
            "id": "title",
            "type": "text",
            "x": 40, "y": 20, "width": 300, "height": 40,
            "content": "Teklif: {{offer.number}}",
            "style": { "fontSize": 18, "fontWeight": "bold", "textAlign": "center" }
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();

        assert_eq!(element.kind, ElementKind::Text);
        assert_eq!(element.x, 40.0);
        assert_eq!(element.content.as_deref(), Some("Teklif: {{offer.number}}"));
        let style = element.style.unwrap();
        assert_eq!(style.font_weight, FontWeight::Bold);
        assert_eq!(style.text_align, TextAlign::Center);
    }

    #[test]
    fn test_parse_patient_info_element() {
        let json = r#"{
            "id": "patient",
            "type": "patient-info",
            "x": 40, "y": 80, "width": 300, "height": 120,
            "visibility": { "name": true, "phone": true }
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();

        match element.kind {
            ElementKind::PatientInfo(info) => {
                assert!(info.visibility.name);
                assert!(info.visibility.phone);
                assert!(!info.visibility.email);
                assert!(!info.visibility.notes);
            }
            other => panic!("Expected patient-info, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_price_table_element() {
        let json = r#"{
            "id": "prices",
            "type": "price-table",
            "x": 40, "y": 300, "width": 700, "height": 200,
            "showVat": true
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();

        assert_eq!(element.type_name(), "price-table");
        match element.kind {
            ElementKind::PriceTable(table) => {
                assert!(table.show_vat);
                assert!(table.price_table_data.is_empty());
                assert_eq!(table.vat_rate, None);
            }
            other => panic!("Expected price-table, got {other:?}"),
        }
    }

    #[test]
    fn test_element_serializes_type_tag() {
        let element = Element::new(
            "logo",
            ElementKind::Logo(LogoElement::default()),
            0.0,
            0.0,
            80.0,
            80.0,
        );
        let value = serde_json::to_value(&element).unwrap();

        assert_eq!(value["type"], json!("logo"));
        assert_eq!(value["zIndex"], json!(0));
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_minimal_template_defaults() {
        let json = r#"{ "name": "Minimal", "pages": [ { "elements": [] } ] }"#;

        let template: Template = serde_json::from_str(json).unwrap();

        assert_eq!(template.version, "1.0");
        assert_eq!(template.default_page_size, PageSize::A4);
        assert_eq!(template.pages[0].width, 794.0);
        assert_eq!(template.pages[0].background_color, "#ffffff");
        assert_eq!(template.settings.font_size, 12.0);
        assert_eq!(template.metadata.usage_count, 0);
    }

    #[test]
    fn test_data_fields_keep_extra_keys() {
        let data: DynamicDataFields = serde_json::from_value(json!({
            "patient": { "name": "Ali" },
            "treatments": [ { "name": "Dolgu", "price": 100 } ],
            "doctor": { "name": "Dr. Yılmaz" }
        }))
        .unwrap();

        assert_eq!(data.patient.name.as_deref(), Some("Ali"));
        assert_eq!(data.treatments[0].quantity, 1.0);
        assert_eq!(data.extra["doctor"]["name"], json!("Dr. Yılmaz"));
    }

    #[test]
    fn test_data_fields_keep_nested_extra_keys() {
        let data: DynamicDataFields = serde_json::from_value(json!({
            "patient": { "name": "Ali", "birthDate": "1990-04-12" },
            "treatments": [ { "name": "Dolgu", "price": 100, "unit": "adet" } ],
            "offer": { "note": "30 gün geçerli" },
            "clinic": { "name": "Gülüş", "taxNumber": "1234567890" }
        }))
        .unwrap();

        assert_eq!(data.patient.extra["birthDate"], json!("1990-04-12"));
        assert_eq!(data.treatments[0].extra["unit"], json!("adet"));
        assert_eq!(data.offer.extra["note"], json!("30 gün geçerli"));
        assert_eq!(data.clinic.extra["taxNumber"], json!("1234567890"));

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["patient"]["birthDate"], json!("1990-04-12"));
        assert_eq!(value["treatments"][0]["unit"], json!("adet"));
    }

    #[test]
    fn test_lenient_treatment_rows() {
        let data: DynamicDataFields = serde_json::from_value(json!({
            "treatments": [
                { "name": "Kompozit Dolgu", "price": 800, "quantity": 1.5 },
                { "price": 250, "quantity": -1 }
            ]
        }))
        .unwrap();

        assert_eq!(data.treatments[0].quantity, 1.5);
        assert_eq!(data.treatments[1].name, "");
        assert_eq!(data.treatments[1].quantity, -1.0);
    }

    #[test]
    fn test_unknown_element_type_kept() {
        let json = r#"{
            "id": "line",
            "type": "divider",
            "x": 40, "y": 260, "width": 714, "height": 2,
            "thickness": 2,
            "dashed": true
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();

        assert_eq!(element.type_name(), "divider");
        assert_eq!(element.width, 714.0);
        match &element.kind {
            ElementKind::Custom(custom) => {
                assert_eq!(custom.fields["thickness"], json!(2));
                assert_eq!(custom.fields["dashed"], json!(true));
                assert!(!custom.fields.contains_key("width"));
            }
            other => panic!("Expected custom element, got {other:?}"),
        }

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], json!("divider"));
        assert_eq!(value["thickness"], json!(2));
        assert_eq!(value["x"], json!(40.0));
    }

    #[test]
    fn test_malformed_known_type_rejected() {
        let json = r#"{
            "id": "prices",
            "type": "price-table",
            "width": 10, "height": 10,
            "showVat": "yes"
        }"#;

        assert!(serde_json::from_str::<Element>(json).is_err());
    }

    #[test]
    fn test_find_element_mut() {
        let mut template: Template = serde_json::from_value(json!({
            "name": "T",
            "pages": [ { "elements": [ { "id": "a", "type": "text", "width": 1, "height": 1 } ] } ]
        }))
        .unwrap();

        template.find_element_mut("a").unwrap().x = 12.0;

        assert_eq!(template.find_element("a").unwrap().x, 12.0);
        assert!(template.find_element("missing").is_none());
    }
}
