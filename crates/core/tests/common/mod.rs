//! Wire-tree fixtures shared by the mapping integration tests.

#![allow(dead_code)]

use cda::data_types::{OriginalText, Reference, StatusCode};
use cda::{
    Act, AsContent, AssignedAuthor, Author, ClinicalDocument, Code, Component, Consumable,
    ContainerPackagedMedicine, EffectiveTime, Entry, EntryRelationship, Id, Ingredient,
    IntervalQuantity, Item, ListType, ManufacturedMaterial, ManufacturedProduct, Quantity,
    Section, SubstanceAdministration, Text, Translation,
};

pub fn manufactured_material() -> ManufacturedMaterial {
    ManufacturedMaterial {
        code: Some(Code {
            original_text: Some(OriginalText {
                reference: Some(Reference {
                    value: Some("#ref_id".into()),
                }),
            }),
            ..Code::default()
        }),
        name: Some("material_name".into()),
        form_code: Some(Code {
            code: Some("form_code".into()),
            code_system: Some("system".into()),
            code_system_name: Some("system_name".into()),
            display_name: Some("display".into()),
            original_text: None,
            translation: Some(Translation {
                display_name: Some("translation".into()),
                ..Translation::default()
            }),
        }),
        as_content: Some(AsContent {
            container_packaged_medicine: Some(ContainerPackagedMedicine {
                name: Some("test_name".into()),
                form_code: Some(Code {
                    code: Some("1234".into()),
                    display_name: Some("BTX200".into()),
                    ..Code::default()
                }),
                capacity_quantity: Some(Quantity::value("12")),
            }),
        }),
        ingredient: Some(Ingredient::wrapping(
            Some(Code::new("1111")),
            Ingredient {
                code: Some(Code {
                    code: Some("121".into()),
                    code_system_name: Some("system_name".into()),
                    display_name: Some("display_name".into()),
                    ..Code::default()
                }),
                name: Some("ingredient_name".into()),
                ..Ingredient::default()
            },
        )),
    }
}

pub fn substance_administration() -> SubstanceAdministration {
    SubstanceAdministration {
        id: Some(Id::new("1.21.1", "barcode_value")),
        status_code: Some(StatusCode {
            code: Some("status".into()),
        }),
        effective_time: vec![
            EffectiveTime::default(),
            EffectiveTime {
                period: Some(Quantity::new("1", "d")),
                ..EffectiveTime::default()
            },
        ],
        dose_quantity: Some(IntervalQuantity {
            low: Some(Quantity::new("1", "mg")),
            high: Some(Quantity::new("1", "mg")),
        }),
        rate_quantity: Some(IntervalQuantity {
            low: Some(Quantity::new("1", "mg")),
            high: Some(Quantity::new("1", "mg")),
        }),
        consumable: Some(Consumable {
            manufactured_product: Some(ManufacturedProduct {
                manufactured_material: Some(manufactured_material()),
            }),
        }),
        entry_relationship: Some(vec![EntryRelationship::with_supply(Quantity::new(
            "5", "4",
        ))]),
    }
}

/// Section-level act carrying the three administrative flags.
pub fn flag_act(high_cost: &str, vaccine: &str, report: &str) -> Act {
    Act::with_ids([
        Id::new("1.1.7", high_cost),
        Id::new("1.1.8", vaccine),
        Id::new("1.1.23", report),
    ])
}

pub fn narrative(items: Vec<Item>) -> Text {
    Text {
        list: Some(ListType { item: items }),
    }
}

pub fn section() -> Section {
    Section {
        entry: Some(vec![
            Some(Entry::with_act(flag_act("0", "1", "0"))),
            Some(Entry::with_substance_administration(
                substance_administration(),
            )),
        ]),
        text: Some(narrative(vec![Item::new("ref_id", "")])),
        ..Section::default()
    }
}

pub fn author() -> Author {
    Author {
        time: None,
        assigned_author: Some(AssignedAuthor {
            id: vec![
                Id::new("1.19.1", "specialty_id"),
                Id::new("1.19.2", "specialty_name"),
            ],
        }),
    }
}

pub fn clinical_document() -> ClinicalDocument {
    ClinicalDocument {
        id: Some(Id::new("1.21", "1233243")),
        effective_time: Some(EffectiveTime {
            low: Some(Quantity::value("10")),
            high: Some(Quantity::value("20")),
            ..EffectiveTime::default()
        }),
        author: Some(author()),
        component: Some(Component::wrapping_section(section())),
    }
}

/// Mutable access to the single section of a fixture document.
pub fn section_mut(document: &mut ClinicalDocument) -> &mut Section {
    document
        .component
        .as_mut()
        .and_then(|c| c.structured_body.as_mut())
        .and_then(|b| b.component.as_mut())
        .and_then(|c| c.section.as_mut())
        .expect("fixture document has a section")
}

/// Mutable access to the first substance administration of a fixture section.
pub fn first_line_mut(section: &mut Section) -> &mut SubstanceAdministration {
    section
        .entry
        .as_mut()
        .into_iter()
        .flatten()
        .flatten()
        .find_map(|e| e.substance_administration.as_mut())
        .expect("fixture section has a substance administration")
}
