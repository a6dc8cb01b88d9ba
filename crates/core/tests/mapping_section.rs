mod common;

use cda::{Entry, Id, Item};
use erx_core::mapping::map_section;
use erx_core::{ClassificationRules, Entity, MappingError, Summary};

#[test]
fn maps_lines_and_administrative_flags() {
    let section = map_section(&common::section(), &ClassificationRules::default())
        .expect("map section");

    assert_eq!(section.substance_administrations.len(), 1);
    assert_eq!(
        section.summary,
        Summary {
            contains_high_cost_drug: false,
            contains_desensitization_vaccine: true,
            medical_report_required: false,
        }
    );
    assert!(section.barcode.is_none());
    assert!(section.text.is_none());
}

#[test]
fn narrative_reference_resolves_consumable_barcode() {
    let mut wire = common::section();
    wire.text = Some(common::narrative(vec![
        Item::new("other", "0000000000000"),
        Item::new("ref_id", "2802578001025"),
    ]));

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    assert_eq!(
        section.substance_administrations[0].consumable.barcode,
        "2802578001025"
    );
}

#[test]
fn absent_narrative_yields_missing_consumable_barcode() {
    let mut wire = common::section();
    wire.text = None;

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    assert!(section.substance_administrations[0]
        .consumable
        .barcode
        .is_missing());
}

#[test]
fn section_without_flag_act_has_false_summary() {
    let mut wire = common::section();
    wire.entry = Some(vec![Some(Entry::with_substance_administration(
        common::substance_administration(),
    ))]);

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    assert_eq!(section.summary, Summary::default());
}

#[test]
fn lines_keep_document_order() {
    let mut second = common::substance_administration();
    second.id = Some(Id::new("1.21.1", "second"));

    let mut wire = common::section();
    if let Some(entries) = wire.entry.as_mut() {
        entries.push(None);
        entries.push(Some(Entry::with_substance_administration(second)));
    }

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    let barcodes: Vec<&str> = section
        .substance_administrations
        .iter()
        .map(|line| line.barcode.as_str())
        .collect();
    assert_eq!(barcodes, ["barcode_value", "second"]);
}

#[test]
fn ingredient_catalogue_raises_high_cost_flag() {
    let rules = ClassificationRules {
        high_cost_drug_codes: ["121".to_string()].into(),
        ..ClassificationRules::default()
    };

    let section = map_section(&common::section(), &rules).expect("map section");
    assert!(section.summary.contains_high_cost_drug);
    assert!(section.summary.contains_desensitization_vaccine);
}

#[test]
fn malformed_flag_extension_is_rejected() {
    let mut wire = common::section();
    wire.entry = Some(vec![Some(Entry::with_act(common::flag_act("0", "yes", "0")))]);

    let err = map_section(&wire, &ClassificationRules::default()).expect_err("should reject");
    assert!(matches!(
        err,
        MappingError::UnexpectedValue {
            entity: Entity::Summary,
            ..
        }
    ));
}

#[test]
fn failing_line_fails_section() {
    let mut wire = common::section();
    common::first_line_mut(&mut wire).entry_relationship = None;

    let err = map_section(&wire, &ClassificationRules::default()).expect_err("should reject");
    assert!(err.is_missing_value_of(Entity::SubstanceAdministration));
}

#[test]
fn nulled_line_leaves_summary_computed() {
    let mut wire = common::section();
    if let Some(entries) = wire.entry.as_mut() {
        entries[1] = None;
    }

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    assert!(section.substance_administrations.is_empty());
    assert!(section.summary.contains_desensitization_vaccine);
}

#[test]
fn removed_line_leaves_summary_computed() {
    let mut wire = common::section();
    if let Some(entries) = wire.entry.as_mut() {
        entries.truncate(1);
    }

    let section = map_section(&wire, &ClassificationRules::default()).expect("map section");
    assert!(section.substance_administrations.is_empty());
    assert!(section.summary.contains_desensitization_vaccine);
}
