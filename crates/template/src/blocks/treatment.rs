//! Treatment list block

use crate::schema::TreatmentData;

/// Render treatments as a numbered list
///
/// Each line reads `1. Name - Description (Diş: 11, 21)`, with the
/// description and teeth parts present only when the treatment has them.
pub fn treatment_list(treatments: &[TreatmentData]) -> String {
    treatments
        .iter()
        .enumerate()
        .map(|(i, treatment)| {
            let mut line = format!("{}. {}", i + 1, treatment.name);

            if let Some(description) = treatment
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
            {
                line.push_str(" - ");
                line.push_str(description);
            }

            if !treatment.selected_teeth.is_empty() {
                let teeth: Vec<String> = treatment
                    .selected_teeth
                    .iter()
                    .map(|tooth| tooth.to_string())
                    .collect();
                line.push_str(&format!(" (Diş: {})", teeth.join(", ")));
            }

            line
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
