//! Integration tests for template processing

use dental_template::{
    clone_template, create_default_template, export_template, import_template, parse_template,
    process_template, template_stats, validate_template, DynamicDataFields, ElementKind,
    EngineConfig, PriceSummary, TemplateEngine,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn offer_data() -> DynamicDataFields {
    serde_json::from_value(json!({
        "clinic": { "name": "Gülüş Diş Kliniği", "phone": "0212 555 00 00" },
        "patient": {
            "name": "Ali Yılmaz",
            "phone": "0532 111 22 33",
            "email": "ali@example.com",
            "address": "Kadıköy, İstanbul"
        },
        "treatments": [
            { "id": "t1", "name": "Implant", "description": "Titanyum", "price": 12000,
              "quantity": 2, "selectedTeeth": [36, 46], "currency": "TRY" },
            { "id": "t2", "name": "Diş Taşı Temizliği", "price": 1500 }
        ],
        "offer": { "number": "TKF-2026-0042", "currency": "TRY", "vatRate": 10 }
    }))
    .unwrap()
}

#[test]
fn test_price_table_end_to_end() {
    let template = parse_template(
        r#"{
            "name": "Fiyat",
            "pages": [
                { "elements": [
                    { "id": "prices", "type": "price-table", "x": 0, "y": 0, "width": 500, "height": 300 }
                ] }
            ]
        }"#,
    )
    .unwrap();
    let data: DynamicDataFields = serde_json::from_value(json!({
        "treatments": [ { "name": "Filling", "price": 100, "quantity": 2 } ],
        "offer": { "vatRate": 20 }
    }))
    .unwrap();

    let resolved = process_template(&template, &data);

    let element = serde_json::to_value(resolved.find_element("prices").unwrap()).unwrap();
    let row = &element["priceTableData"][0];
    assert_eq!(row["treatment"], json!("Filling"));
    assert_eq!(row["total"], json!(200.0));
    assert_eq!(row["vatAmount"], json!(40.0));
    assert_eq!(element["vatRate"], json!(20.0));
}

#[test]
fn test_default_template_with_offer_data() {
    let template = create_default_template("Standart Teklif", "offer");
    let (resolved, report) = TemplateEngine::new(&template).process_with_report(&offer_data());

    assert!(report.unresolved.is_empty());

    let elements: Vec<_> = resolved.elements().collect();
    assert_eq!(elements[0].content.as_deref(), Some("Gülüş Diş Kliniği"));
    assert_eq!(
        elements[1].content.as_deref(),
        Some("Ad Soyad: Ali Yılmaz\nTelefon: 0532 111 22 33\nE-posta: ali@example.com")
    );

    match &elements[2].kind {
        ElementKind::PriceTable(table) => {
            let rows = &table.price_table_data;
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].total, 24000.0);
            assert_eq!(rows[0].vat_amount, 2400.0);
            assert_eq!(rows[0].teeth, vec![36, 46]);
            assert_eq!(rows[1].quantity, 1.0);

            let summary = PriceSummary::from_rows(rows, "TRY");
            assert_eq!(summary.subtotal, 25500.0);
            assert_eq!(summary.vat_amount, 2550.0);
            assert_eq!(summary.grand_total, 28050.0);
        }
        other => panic!("Expected price-table, got {other:?}"),
    }

    // The stored template still carries its placeholders
    let original: Vec<_> = template.elements().collect();
    assert_eq!(original[0].content.as_deref(), Some("{{clinic.name}}"));
}

#[test]
fn test_treatment_list_and_data_field() {
    let template = parse_template(
        r#"{
            "name": "Tedavi Planı",
            "pages": [
                { "elements": [
                    { "id": "number", "type": "text", "x": 0, "y": 0, "width": 200, "height": 20,
                      "content": "Teklif No: {{offer.number}}" },
                    { "id": "phone", "type": "text", "x": 0, "y": 30, "width": 200, "height": 20,
                      "content": "{{patient.name}}", "dataField": "clinic.phone" },
                    { "id": "plan", "type": "treatment-info", "x": 0, "y": 60, "width": 400, "height": 200,
                      "visibility": { "treatments": true } }
                ] }
            ]
        }"#,
    )
    .unwrap();

    let resolved = process_template(&template, &offer_data());

    assert_eq!(
        resolved.find_element("number").unwrap().content.as_deref(),
        Some("Teklif No: TKF-2026-0042")
    );
    assert_eq!(
        resolved.find_element("phone").unwrap().content.as_deref(),
        Some("0212 555 00 00")
    );
    assert_eq!(
        resolved.find_element("plan").unwrap().content.as_deref(),
        Some("1. Implant - Titanyum (Diş: 36, 46)\n2. Diş Taşı Temizliği")
    );
}

#[test]
fn test_custom_delimiters_from_config() {
    let template = parse_template(
        r#"{
            "name": "T",
            "pages": [ { "elements": [
                { "id": "a", "type": "text", "x": 0, "y": 0, "width": 10, "height": 10,
                  "content": "<%patient.name%> {{patient.name}}" }
            ] } ]
        }"#,
    )
    .unwrap();
    let config =
        EngineConfig::from_json(r#"{ "placeholderOpen": "<%", "placeholderClose": "%>" }"#)
            .unwrap();

    let resolved = TemplateEngine::new(&template)
        .with_config(config)
        .process(&offer_data());

    assert_eq!(
        resolved.find_element("a").unwrap().content.as_deref(),
        Some("Ali Yılmaz {{patient.name}}")
    );
}

#[test]
fn test_lifecycle_round_trip_and_stats() {
    let template = create_default_template("Standart Teklif", "offer");
    let copy = clone_template(&template, "Kopya");

    let text = export_template(&copy).unwrap();
    let imported = import_template(&text).unwrap();

    assert_ne!(imported.id, copy.id);
    assert_ne!(imported.id, template.id);
    assert_eq!(imported.name, "Kopya");
    assert_eq!(imported.pages, copy.pages);
    assert!(validate_template(&imported).is_valid);

    let stats = template_stats(&imported);
    assert_eq!(stats.total_pages, 1);
    assert_eq!(stats.total_elements, 3);
    assert_eq!(stats.element_types.len(), 3);
}

#[test]
fn test_import_then_validate_reports_defects() {
    let imported = import_template(
        r#"{
            "name": "Bozuk",
            "pages": [ { "elements": [
                { "id": "a", "type": "image", "x": 10, "y": 10, "width": 0, "height": 50 }
            ] } ]
        }"#,
    )
    .unwrap();

    let result = validate_template(&imported);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.messages()[0].starts_with("Page 1, element 1:"));
}

#[test]
fn test_unknown_element_type_passes_through() {
    let imported = import_template(
        r#"{
            "name": "Ayraçlı",
            "pages": [ { "elements": [
                { "id": "title", "type": "text", "x": 0, "y": 0, "width": 200, "height": 20,
                  "content": "{{clinic.name}}" },
                { "id": "rule", "type": "divider", "x": 0, "y": 30, "width": 700, "height": 2,
                  "content": "{{offer.number}}", "thickness": 2 }
            ] } ]
        }"#,
    )
    .unwrap();

    assert!(validate_template(&imported).is_valid);

    let stats = template_stats(&imported);
    assert_eq!(stats.total_elements, 2);
    assert_eq!(stats.element_types.get("divider"), Some(&1));

    let resolved = process_template(&imported, &offer_data());
    let rule = resolved.find_element("rule").unwrap();
    assert_eq!(rule.type_name(), "divider");
    assert_eq!(rule.content.as_deref(), Some("TKF-2026-0042"));

    let reimported = import_template(&export_template(&resolved).unwrap()).unwrap();
    assert_eq!(reimported.pages, resolved.pages);
    let value = serde_json::to_value(reimported.find_element("rule").unwrap()).unwrap();
    assert_eq!(value["thickness"], json!(2));
}

#[test]
fn test_lenient_data_still_previews() {
    let template = parse_template(
        r#"{
            "name": "Fiyat",
            "pages": [ { "elements": [
                { "id": "prices", "type": "price-table", "x": 0, "y": 0, "width": 500, "height": 300 },
                { "id": "birth", "type": "text", "x": 0, "y": 310, "width": 200, "height": 20,
                  "content": "{{patient.birthDate}}" }
            ] } ]
        }"#,
    )
    .unwrap();
    let data: DynamicDataFields = serde_json::from_value(json!({
        "patient": { "name": "Ali", "birthDate": "1990-04-12" },
        "treatments": [
            { "name": "Kompozit Dolgu", "price": 800, "quantity": 1.5 },
            { "price": 250 }
        ],
        "offer": { "vatRate": 20 }
    }))
    .unwrap();

    let (resolved, report) = TemplateEngine::new(&template).process_with_report(&data);

    assert!(report.unresolved.is_empty());
    assert_eq!(
        resolved.find_element("birth").unwrap().content.as_deref(),
        Some("1990-04-12")
    );
    match &resolved.find_element("prices").unwrap().kind {
        ElementKind::PriceTable(table) => {
            let rows = &table.price_table_data;
            assert_eq!(rows[0].total, 1200.0);
            assert_eq!(rows[1].treatment, "");
            assert_eq!(rows[1].quantity, 1.0);
        }
        other => panic!("Expected price-table, got {other:?}"),
    }
}
