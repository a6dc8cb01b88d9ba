mod common;

use cda::{EntryRelationship, Id, Quantity};
use erx_core::mapping::map_substance_administration;
use erx_core::{Entity, MappingError, ReferenceTable};

fn references() -> ReferenceTable {
    [("ref_id", "2802578001025")].into_iter().collect()
}

#[test]
fn maps_full_line() {
    let line = map_substance_administration(&common::substance_administration(), &references())
        .expect("map substance administration");

    assert_eq!(line.barcode, "barcode_value");
    assert_eq!(line.status_code.as_deref(), Some("status"));

    let period = line.period.expect("period present");
    assert_eq!(period.value.as_deref(), Some("1"));
    assert_eq!(period.unit.as_deref(), Some("d"));

    let dose = line.dose_quantity.expect("dose present");
    assert_eq!(dose.low_value.as_deref(), Some("1"));
    assert_eq!(dose.low_unit.as_deref(), Some("mg"));
    assert_eq!(dose.high_value.as_deref(), Some("1"));
    assert_eq!(dose.high_unit.as_deref(), Some("mg"));

    let rate = line.rate_quantity.expect("rate present");
    assert_eq!(rate.value.as_deref(), Some("1"));
    assert_eq!(rate.unit.as_deref(), Some("mg"));

    assert_eq!(line.prescribed_dose.value.as_deref(), Some("5"));
    assert_eq!(line.prescribed_dose.unit.as_deref(), Some("4"));

    assert_eq!(line.consumable.barcode, "2802578001025");
    assert!(line.execution_details.authenticity_tapes.is_none());
}

#[test]
fn foreign_id_root_yields_missing_barcode() {
    let mut wire = common::substance_administration();
    wire.id = Some(Id::new("123123", "barcode_value"));

    let line = map_substance_administration(&wire, &references()).expect("map line");
    assert_eq!(line.barcode, "missing");
}

#[test]
fn absent_id_yields_missing_barcode() {
    let mut wire = common::substance_administration();
    wire.id = None;

    let line = map_substance_administration(&wire, &references()).expect("map line");
    assert!(line.barcode.is_missing());
}

#[test]
fn single_effective_time_has_no_period() {
    let mut wire = common::substance_administration();
    wire.effective_time.truncate(1);

    let line = map_substance_administration(&wire, &references()).expect("map line");
    assert!(line.period.is_none());
}

#[test]
fn empty_relationship_list_is_rejected() {
    let mut wire = common::substance_administration();
    wire.entry_relationship = Some(Vec::new());

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::MissingRequiredValue {
            entity: Entity::SubstanceAdministration,
            field: "entryRelationship"
        }
    ));
}

#[test]
fn absent_relationship_list_is_rejected() {
    let mut wire = common::substance_administration();
    wire.entry_relationship = None;

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(err.is_missing_value_of(Entity::SubstanceAdministration));
}

#[test]
fn relationships_without_supply_are_rejected() {
    let mut wire = common::substance_administration();
    wire.entry_relationship = Some(vec![EntryRelationship {
        type_code: Some("COMP".into()),
        ..EntryRelationship::default()
    }]);

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::MissingRequiredValue {
            entity: Entity::SubstanceAdministration,
            field: "entryRelationship.supply.quantity"
        }
    ));
}

#[test]
fn prescribed_dose_comes_from_first_supply() {
    let mut wire = common::substance_administration();
    wire.entry_relationship = Some(vec![
        EntryRelationship::default(),
        EntryRelationship::with_supply(Quantity::new("7", "1")),
        EntryRelationship::with_supply(Quantity::new("9", "1")),
    ]);

    let line = map_substance_administration(&wire, &references()).expect("map line");
    assert_eq!(line.prescribed_dose.value.as_deref(), Some("7"));
}

#[test]
fn absent_consumable_is_rejected() {
    let mut wire = common::substance_administration();
    wire.consumable = None;

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::MissingRequiredValue {
            entity: Entity::SubstanceAdministration,
            field: "consumable"
        }
    ));
}

#[test]
fn consumable_failure_propagates() {
    let mut wire = common::substance_administration();
    if let Some(material) = wire
        .consumable
        .as_mut()
        .and_then(|c| c.manufactured_product.as_mut())
        .and_then(|p| p.manufactured_material.as_mut())
    {
        material.name = None;
    }

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(err.is_missing_value_of(Entity::Consumable));
}

#[test]
fn absent_manufactured_product_is_rejected() {
    let mut wire = common::substance_administration();
    if let Some(consumable) = wire.consumable.as_mut() {
        consumable.manufactured_product = None;
    }

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::MissingRequiredValue {
            entity: Entity::SubstanceAdministration,
            field: "consumable.manufacturedProduct"
        }
    ));
}

#[test]
fn absent_manufactured_material_is_rejected() {
    let mut wire = common::substance_administration();
    if let Some(product) = wire
        .consumable
        .as_mut()
        .and_then(|c| c.manufactured_product.as_mut())
    {
        product.manufactured_material = None;
    }

    let err = map_substance_administration(&wire, &references()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::MissingRequiredValue {
            entity: Entity::SubstanceAdministration,
            field: "consumable.manufacturedProduct.manufacturedMaterial"
        }
    ));
}
