//! Resolve the default offer template against sample data
//! Run with: RUST_LOG=debug cargo run --example preview
//!
//! Prints the validation result, template stats, the resolved template and
//! the price summary a renderer would print under the table.

use dental_template::{
    create_default_template, template_stats, validate_template, DynamicDataFields, ElementKind,
    PriceSummary, TemplateEngine,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let template = create_default_template("Standart Teklif", "offer");

    let validation = validate_template(&template);
    println!("Valid: {}", validation.is_valid);
    for message in validation.messages() {
        println!("  - {message}");
    }

    let stats = template_stats(&template);
    println!("Stats: {}", serde_json::to_string(&stats)?);

    let data: DynamicDataFields = serde_json::from_str(
        r#"{
            "clinic": { "name": "Gülüş Diş Kliniği" },
            "patient": { "name": "Ayşe Demir", "phone": "0532 000 00 00" },
            "treatments": [
                { "name": "Zirkonyum Kron", "price": 4000, "quantity": 2, "selectedTeeth": [11, 21] },
                { "name": "Beyazlatma", "price": 2500 }
            ],
            "offer": { "currency": "TRY", "vatRate": 20 }
        }"#,
    )?;

    let (resolved, report) = TemplateEngine::new(&template).process_with_report(&data);
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    println!("Unresolved placeholders: {}", report.unresolved.len());

    for element in resolved.elements() {
        if let ElementKind::PriceTable(table) = &element.kind {
            let summary = PriceSummary::from_rows(&table.price_table_data, "TRY");
            println!(
                "Ara toplam: {:.2} {cur} | KDV: {:.2} {cur} | Genel toplam: {:.2} {cur}",
                summary.subtotal,
                summary.vat_amount,
                summary.grand_total,
                cur = summary.currency
            );
        }
    }

    Ok(())
}
