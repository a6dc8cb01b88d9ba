//! Translation of the CDA wire tree into the prescription model.
//!
//! Mappers are plain functions over borrowed wire nodes. Control flows strictly top-down:
//! document → section → substance administration → consumable. The narrative reference table is
//! built once per section and passed down read-only.
//!
//! Failure policy has two tiers. Content fields the billing layer cannot do without (product
//! name, dose form, supply pairing, document identity) fail the whole document with
//! [`MappingError::MissingRequiredValue`]. Identity and reference fields that are often
//! incomplete in real traffic degrade to [`erx_types::Barcode::Missing`] or `None` instead.

pub mod consumable;
pub mod document;
pub mod section;
pub mod substance_administration;

pub use consumable::{map_consumable, terminal_ingredient};
pub use document::{map_author, map_clinical_document};
pub use section::map_section;
pub use substance_administration::{map_execution_details, map_substance_administration};

use crate::error::{Entity, MappingError, MappingResult};
use erx_types::NonEmptyText;

/// Require a non-blank text value.
///
/// Absent and blank values are both treated as missing. Present values are kept verbatim.
pub(crate) fn required_text(
    value: Option<&str>,
    entity: Entity,
    field: &'static str,
) -> MappingResult<NonEmptyText> {
    value
        .and_then(|v| NonEmptyText::new(v).ok())
        .ok_or_else(|| MappingError::missing(entity, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_absent_and_blank_values() {
        for value in [None, Some(""), Some("  ")] {
            let err = required_text(value, Entity::Consumable, "name").expect_err("missing");
            assert!(matches!(
                err,
                MappingError::MissingRequiredValue {
                    entity: Entity::Consumable,
                    field: "name"
                }
            ));
        }
        assert_eq!(
            required_text(Some("URPEM"), Entity::Consumable, "name").expect("present"),
            "URPEM"
        );
    }

    #[test]
    fn required_text_keeps_surrounding_whitespace() {
        let text = required_text(Some(" 1233243 "), Entity::ClinicalDocument, "id.extension")
            .expect("present");
        assert_eq!(text, " 1233243 ");
    }
}
