//! Price table rows and VAT arithmetic

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::schema::{DynamicDataFields, PriceRow, TreatmentData};

/// Round a monetary amount to 2 decimals
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// VAT on a VAT-exclusive amount, rounded to 2 decimals
pub fn vat_amount(price: f64, vat_rate: f64) -> f64 {
    round_money(price * vat_rate / 100.0)
}

/// VAT-inclusive pricing of one tooth (or one whole treatment)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToothPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooth_number: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<String>,

    /// VAT exclusive
    pub price: f64,

    pub currency: String,

    pub vat_rate: f64,

    pub vat_amount: f64,

    pub total_price: f64,
}

impl ToothPricing {
    /// Price `price` at `vat_rate` percent
    pub fn new(price: f64, currency: impl Into<String>, vat_rate: f64) -> Self {
        let price = round_money(price);
        let vat_amount = vat_amount(price, vat_rate);
        Self {
            tooth_number: None,
            treatment_id: None,
            price,
            currency: currency.into(),
            vat_rate,
            vat_amount,
            total_price: round_money(price + vat_amount),
        }
    }

    pub fn with_tooth(mut self, tooth: u16) -> Self {
        self.tooth_number = Some(tooth);
        self
    }

    pub fn with_treatment(mut self, treatment_id: impl Into<String>) -> Self {
        self.treatment_id = Some(treatment_id.into());
        self
    }
}

/// Offer-level pricing context shared by every row
#[derive(Debug, Clone, PartialEq)]
pub struct PricingContext {
    pub currency: String,
    pub vat_rate: f64,
}

impl PricingContext {
    /// Take currency and VAT rate from the offer, falling back to config
    pub fn from_offer(data: &DynamicDataFields, config: &EngineConfig) -> Self {
        Self {
            currency: data
                .offer
                .currency
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| config.default_currency.clone()),
            vat_rate: data.offer.vat_rate.unwrap_or(config.default_vat_rate),
        }
    }

    /// Currency for one treatment line
    fn currency_for(&self, treatment: &TreatmentData) -> String {
        treatment
            .currency
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| self.currency.clone())
    }

    /// Build the price-table row for one treatment
    pub fn row(&self, treatment: &TreatmentData) -> PriceRow {
        let total = round_money(treatment.price * treatment.quantity);
        let vat = vat_amount(total, self.vat_rate);

        PriceRow {
            treatment_id: treatment.id.clone(),
            treatment: treatment.name.clone(),
            description: treatment.description.clone(),
            teeth: treatment.selected_teeth.clone(),
            quantity: treatment.quantity,
            unit_price: treatment.price,
            total,
            currency: self.currency_for(treatment),
            vat_rate: self.vat_rate,
            vat_amount: vat,
            total_price: round_money(total + vat),
        }
    }
}

/// Compute price-table rows for every treatment in the data
pub fn build_price_rows(
    data: &DynamicDataFields,
    config: &EngineConfig,
) -> (Vec<PriceRow>, PricingContext) {
    let context = PricingContext::from_offer(data, config);
    let rows = data.treatments.iter().map(|t| context.row(t)).collect();
    (rows, context)
}

/// Per-tooth pricing for a dental chart
///
/// Each selected tooth is priced at the treatment's unit price. A treatment
/// without selected teeth yields one entry keyed by its id, or by its name
/// when it has no id.
pub fn tooth_pricing(data: &DynamicDataFields, config: &EngineConfig) -> Vec<ToothPricing> {
    let context = PricingContext::from_offer(data, config);
    let mut entries = Vec::new();

    for treatment in &data.treatments {
        let currency = context.currency_for(treatment);
        let base = ToothPricing::new(treatment.price, currency, context.vat_rate);
        let key = treatment.id.clone().unwrap_or_else(|| treatment.name.clone());

        if treatment.selected_teeth.is_empty() {
            entries.push(base.with_treatment(key));
        } else {
            entries.extend(
                treatment
                    .selected_teeth
                    .iter()
                    .map(|&tooth| base.clone().with_tooth(tooth).with_treatment(key.clone())),
            );
        }
    }

    entries
}

/// Totals over a list of price-table rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub currency: String,
    pub subtotal: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
}

impl PriceSummary {
    /// Sum rows; the currency is taken from the first row, else `fallback`
    pub fn from_rows(rows: &[PriceRow], fallback_currency: &str) -> Self {
        let subtotal = round_money(rows.iter().map(|r| r.total).sum());
        let vat_amount = round_money(rows.iter().map(|r| r.vat_amount).sum());

        Self {
            currency: rows
                .first()
                .map(|r| r.currency.clone())
                .unwrap_or_else(|| fallback_currency.to_string()),
            subtotal,
            vat_amount,
            grand_total: round_money(subtotal + vat_amount),
        }
    }
}
