//! HL7 CDA e-prescription wire/boundary support.
//!
//! This crate defines the schema-bound object tree of an e-prescription clinical document as it
//! is issued by the national prescribing platform (HL7 CDA header with epSOS medication
//! extensions). The tree mirrors the wire schema element for element and almost every node is
//! optional: presence of a parent never implies presence of its children.
//!
//! Business meaning lives in `erx-core`. This crate handles the wire shape and JSON reading
//! only; it performs no business validation.

pub mod data_types;
pub mod document;
pub mod medication;
pub mod section;

pub use data_types::{Code, EffectiveTime, Id, IntervalQuantity, Quantity, Translation};
pub use document::{AssignedAuthor, Author, ClinicalDocument, Component, StructuredBody};
pub use medication::{
    AsContent, Consumable, ContainerPackagedMedicine, EntryRelationship, Ingredient,
    ManufacturedMaterial, ManufacturedProduct, SubstanceAdministration, Supply,
};
pub use section::{Act, Entry, Item, ListType, Section, Text};

/// Errors returned by the `cda` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum CdaError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`CdaError`].
pub type CdaResult<T> = Result<T, CdaError>;

/// Read a clinical document wire tree from JSON text.
///
/// Unknown elements are ignored: the upstream schema carries far more elements than the mapper
/// consumes. Type mismatches are reported with the path to the failing field.
///
/// # Errors
///
/// Returns [`CdaError::Translation`] if the JSON does not match the wire schema.
pub fn read_json(json: &str) -> CdaResult<ClinicalDocument> {
    parse_with_path(json, "ClinicalDocument")
}

/// Read a single section wire tree from JSON text.
///
/// # Errors
///
/// Returns [`CdaError::Translation`] if the JSON does not match the wire schema.
pub fn read_section_json(json: &str) -> CdaResult<Section> {
    parse_with_path(json, "section")
}

/// Parse JSON text with `serde_path_to_error` so schema mismatches name the failing path
/// (for example `component.structuredBody.component.section.entry[1]`).
fn parse_with_path<T>(json: &str, element: &str) -> CdaResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_str(json);

    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            Err(CdaError::Translation(format!(
                "{element} schema mismatch at {path}: {source}"
            )))
        }
    }
}
