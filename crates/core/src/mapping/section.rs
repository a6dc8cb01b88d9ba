//! Section mapping and classification.

use crate::classification::Classifier;
use crate::error::{MappingError, MappingResult};
use crate::mapping::substance_administration::map_substance_administration;
use crate::model::Section;
use crate::references::ReferenceTable;

/// Map a prescription section.
///
/// The narrative reference table is built first. Entries carrying a substance administration are
/// mapped in document order; entries carrying only an act are collected as administrative acts and
/// handed, together with the mapped lines, to `classifier`. Null entries are skipped.
///
/// # Errors
///
/// Returns [`MappingError::MalformedSection`] if the entry list is absent, and propagates any
/// failure of a line mapping or of the classifier.
pub fn map_section(
    section: &cda::Section,
    classifier: &dyn Classifier,
) -> MappingResult<Section> {
    let entries = section
        .entry
        .as_deref()
        .ok_or(MappingError::MalformedSection { field: "entry" })?;
    let references = ReferenceTable::from_text(section.text.as_ref());

    let mut administrative_acts = Vec::new();
    let mut substance_administrations = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let Some(entry) = entry else {
            tracing::debug!(index, "skipping null section entry");
            continue;
        };

        if let Some(substance_administration) = &entry.substance_administration {
            substance_administrations.push(map_substance_administration(
                substance_administration,
                &references,
            )?);
        } else if let Some(act) = &entry.act {
            administrative_acts.push(act);
        } else {
            tracing::debug!(index, "skipping empty section entry");
        }
    }

    let summary = classifier.classify(&administrative_acts, &substance_administrations)?;

    tracing::debug!(
        lines = substance_administrations.len(),
        acts = administrative_acts.len(),
        references = references.len(),
        "mapped section"
    );

    Ok(Section {
        barcode: None,
        text: None,
        summary,
        substance_administrations,
    })
}
