//! Prescribed line mapping.

use crate::constants::{
    AUTHENTICITY_TAPE_ROOT, EXECUTION_RELATIONSHIP_TYPE_CODE, SUBSTANCE_ADMINISTRATION_ID_ROOT,
};
use crate::error::{Entity, MappingError, MappingResult};
use crate::mapping::consumable::map_consumable;
use crate::model::{
    DoseQuantity, ExecutionDetails, Period, PrescribedDose, RateQuantity, SubstanceAdministration,
};
use crate::references::ReferenceTable;
use erx_types::Barcode;

/// Map one substance administration entry.
///
/// The line barcode is the identifier extension when the identifier root is the expected one;
/// otherwise it degrades to [`Barcode::Missing`]. The prescribed dose is taken from the first
/// relationship exposing a supply quantity. Dose and rate ranges are copied verbatim.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredValue`] if:
/// - the consumable, its manufactured product or manufactured material is absent,
/// - the relationship list is absent or empty, or none of its members carries a supply quantity,
/// - the consumable itself fails to map (see [`map_consumable`]),
/// - an execution relationship has no act (see [`map_execution_details`]).
pub fn map_substance_administration(
    substance_administration: &cda::SubstanceAdministration,
    references: &ReferenceTable,
) -> MappingResult<SubstanceAdministration> {
    let consumable = substance_administration.consumable.as_ref().ok_or_else(|| {
        MappingError::missing(Entity::SubstanceAdministration, "consumable")
    })?;
    let product = consumable.manufactured_product.as_ref().ok_or_else(|| {
        MappingError::missing(
            Entity::SubstanceAdministration,
            "consumable.manufacturedProduct",
        )
    })?;
    let material = product.manufactured_material.as_ref().ok_or_else(|| {
        MappingError::missing(
            Entity::SubstanceAdministration,
            "consumable.manufacturedProduct.manufacturedMaterial",
        )
    })?;

    let relationships = substance_administration
        .entry_relationship
        .as_deref()
        .filter(|r| !r.is_empty())
        .ok_or_else(|| MappingError::missing(Entity::SubstanceAdministration, "entryRelationship"))?;

    let supplied = relationships
        .iter()
        .find_map(|r| r.supply.as_ref()?.quantity.as_ref())
        .ok_or_else(|| {
            MappingError::missing(
                Entity::SubstanceAdministration,
                "entryRelationship.supply.quantity",
            )
        })?;

    Ok(SubstanceAdministration {
        barcode: line_barcode(substance_administration.id.as_ref()),
        status_code: substance_administration
            .status_code
            .as_ref()
            .and_then(|s| s.code.clone()),
        period: substance_administration
            .effective_time
            .get(1)
            .and_then(|t| t.period.as_ref())
            .map(|p| Period {
                value: p.value.clone(),
                unit: p.unit.clone(),
            }),
        dose_quantity: substance_administration
            .dose_quantity
            .as_ref()
            .map(|q| DoseQuantity {
                low_value: q.low.as_ref().and_then(|l| l.value.clone()),
                low_unit: q.low.as_ref().and_then(|l| l.unit.clone()),
                high_value: q.high.as_ref().and_then(|h| h.value.clone()),
                high_unit: q.high.as_ref().and_then(|h| h.unit.clone()),
            }),
        rate_quantity: substance_administration
            .rate_quantity
            .as_ref()
            .and_then(|q| q.low.as_ref())
            .map(|low| RateQuantity {
                value: low.value.clone(),
                unit: low.unit.clone(),
            }),
        consumable: map_consumable(material, references)?,
        prescribed_dose: PrescribedDose {
            value: supplied.value.clone(),
            unit: supplied.unit.clone(),
        },
        execution_details: map_execution_details(relationships)?,
    })
}

/// Collect authenticity tapes from the execution (`SPRT`) relationships of a line.
///
/// An execution act contributes a tape when its identifiers include the authenticity tape root
/// and it carries an execution timestamp. Relationships of other types are ignored.
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredValue`] if an execution relationship has no act.
pub fn map_execution_details(
    relationships: &[cda::EntryRelationship],
) -> MappingResult<ExecutionDetails> {
    let mut tapes = Vec::new();

    for relationship in relationships
        .iter()
        .filter(|r| r.type_code.as_deref() == Some(EXECUTION_RELATIONSHIP_TYPE_CODE))
    {
        let act = relationship
            .act
            .as_ref()
            .ok_or_else(|| MappingError::missing(Entity::ExecutionDetails, "entryRelationship.act"))?;

        let executed = act
            .effective_time
            .as_ref()
            .is_some_and(|t| t.value.is_some());
        let tape = act
            .id
            .iter()
            .find(|id| id.has_root(AUTHENTICITY_TAPE_ROOT))
            .and_then(|id| id.extension.clone());

        if let (true, Some(tape)) = (executed, tape) {
            tapes.push(tape);
        }
    }

    Ok(ExecutionDetails {
        authenticity_tapes: (!tapes.is_empty()).then_some(tapes),
    })
}

fn line_barcode(id: Option<&cda::Id>) -> Barcode {
    match id {
        Some(id) if id.has_root(SUBSTANCE_ADMINISTRATION_ID_ROOT) => {
            Barcode::from_option(id.extension.as_deref())
        }
        Some(id) => {
            tracing::warn!(
                root = id.root.as_deref().unwrap_or_default(),
                "substance administration id has unexpected root, using missing barcode"
            );
            Barcode::Missing
        }
        None => {
            tracing::warn!("substance administration id is absent, using missing barcode");
            Barcode::Missing
        }
    }
}
