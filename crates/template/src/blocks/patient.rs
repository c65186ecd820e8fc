//! Patient details block

use crate::schema::{PatientData, PatientVisibility};

/// Render visible, non-empty patient fields as `Label: value` lines
pub fn patient_lines(visibility: &PatientVisibility, patient: &PatientData) -> String {
    let fields = [
        (visibility.name, "Ad Soyad", &patient.name),
        (visibility.phone, "Telefon", &patient.phone),
        (visibility.email, "E-posta", &patient.email),
        (visibility.address, "Adres", &patient.address),
        (visibility.notes, "Notlar", &patient.notes),
    ];

    fields
        .iter()
        .filter(|(shown, _, _)| *shown)
        .filter_map(|(_, label, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| format!("{label}: {value}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
