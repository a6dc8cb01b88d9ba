//! Document header mapping.

use crate::classification::Classifier;
use crate::constants::{AUTHOR_SPECIALTY_ID_ROOT, AUTHOR_SPECIALTY_NAME_ROOT, DOCUMENT_ID_ROOT};
use crate::error::{Entity, MappingError, MappingResult};
use crate::mapping::required_text;
use crate::mapping::section::map_section;
use crate::model::{Author, EffectiveTime, PrescriptionDocument};

/// Map a whole e-prescription.
///
/// Completeness is checked before any content is mapped: the document identifier must be present
/// with the prescription root and a non-blank extension, the section must be reachable through
/// `component.structuredBody.component.section`, and the validity window must carry both bounds.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredValue`] naming the first absent header field, and
/// propagates author and section mapping failures.
pub fn map_clinical_document(
    document: &cda::ClinicalDocument,
    classifier: &dyn Classifier,
) -> MappingResult<PrescriptionDocument> {
    let id = document
        .id
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::ClinicalDocument, "id"))?;
    if !id.has_root(DOCUMENT_ID_ROOT) {
        return Err(MappingError::missing(Entity::ClinicalDocument, "id.root"));
    }
    let barcode = required_text(
        id.extension.as_deref(),
        Entity::ClinicalDocument,
        "id.extension",
    )?;

    let section = document.section().ok_or_else(|| {
        MappingError::missing(
            Entity::ClinicalDocument,
            "component.structuredBody.component.section",
        )
    })?;

    let effective_time = document
        .effective_time
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::ClinicalDocument, "effectiveTime"))?;
    let since = effective_time
        .low
        .as_ref()
        .and_then(|low| low.value.clone())
        .ok_or_else(|| MappingError::missing(Entity::ClinicalDocument, "effectiveTime.low"))?;
    let until = effective_time
        .high
        .as_ref()
        .and_then(|high| high.value.clone())
        .ok_or_else(|| MappingError::missing(Entity::ClinicalDocument, "effectiveTime.high"))?;

    let author = document
        .author
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::ClinicalDocument, "author"))?;

    let mapped = PrescriptionDocument {
        author: map_author(author)?,
        effective_time: EffectiveTime { since, until },
        custodian: None,
        legal_authenticator: None,
        patient_role: None,
        doctor_visit: None,
        section: map_section(section, classifier)?,
        barcode,
    };

    tracing::debug!(
        barcode = %mapped.barcode,
        lines = mapped.section.substance_administrations.len(),
        "mapped clinical document"
    );

    Ok(mapped)
}

/// Map the prescribing doctor.
///
/// Specialty id and name are looked up by identifier root, so their order on the wire does not
/// matter.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredValue`] if the assigned author or either identifier is
/// absent.
pub fn map_author(author: &cda::Author) -> MappingResult<Author> {
    let assigned = author
        .assigned_author
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::Author, "assignedAuthor"))?;

    let extension_of = |root: &str| {
        assigned
            .id
            .iter()
            .find(|id| id.has_root(root))
            .and_then(|id| id.extension.clone())
    };

    let specialty_id = extension_of(AUTHOR_SPECIALTY_ID_ROOT).ok_or_else(|| {
        MappingError::missing(Entity::Author, "assignedAuthor.id[1.19.1].extension")
    })?;
    let specialty_name = extension_of(AUTHOR_SPECIALTY_NAME_ROOT).ok_or_else(|| {
        MappingError::missing(Entity::Author, "assignedAuthor.id[1.19.2].extension")
    })?;

    Ok(Author {
        specialty_id,
        specialty_name,
    })
}
