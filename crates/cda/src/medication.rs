//! Substance administration entries and the epSOS medication subtree.

use crate::data_types::{
    null_as_empty, Code, EffectiveTime, Id, IntervalQuantity, Quantity, StatusCode,
};
use crate::section::Act;
use serde::{Deserialize, Serialize};

/// One prescribed line: dosage, consumable product and companion relationships.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SubstanceAdministration {
    pub id: Option<Id>,
    pub status_code: Option<StatusCode>,
    /// Usually two elements: the validity interval and the periodic repeat.
    #[serde(deserialize_with = "null_as_empty")]
    pub effective_time: Vec<EffectiveTime>,
    pub dose_quantity: Option<IntervalQuantity>,
    pub rate_quantity: Option<IntervalQuantity>,
    pub consumable: Option<Consumable>,
    pub entry_relationship: Option<Vec<EntryRelationship>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Consumable {
    pub manufactured_product: Option<ManufacturedProduct>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ManufacturedProduct {
    pub manufactured_material: Option<ManufacturedMaterial>,
}

/// The medicinal product itself.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ManufacturedMaterial {
    /// `code.originalText.reference` points at the narrative item holding the product barcode.
    pub code: Option<Code>,
    pub name: Option<String>,
    pub form_code: Option<Code>,
    pub as_content: Option<AsContent>,
    pub ingredient: Option<Ingredient>,
}

/// Active ingredient. Ingredients nest: a wrapper node may hold another ingredient to any depth.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub code: Option<Code>,
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
    pub ingredient: Option<Box<Ingredient>>,
}

impl Ingredient {
    /// Wrap `inner` in a new ingredient node.
    pub fn wrapping(code: Option<Code>, inner: Ingredient) -> Self {
        Self {
            code,
            ingredient: Some(Box::new(inner)),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AsContent {
    pub container_packaged_medicine: Option<ContainerPackagedMedicine>,
}

/// Package the product is dispensed in.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerPackagedMedicine {
    pub name: Option<String>,
    pub form_code: Option<Code>,
    pub capacity_quantity: Option<Quantity>,
}

/// Companion entry attached to a substance administration.
///
/// Depending on `typeCode` it carries the prescribed supply (`COMP`), execution details
/// (`SPRT`) or other acts and observations the mapper does not consume.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EntryRelationship {
    pub type_code: Option<String>,
    pub supply: Option<Supply>,
    pub act: Option<Act>,
}

impl EntryRelationship {
    pub fn with_supply(quantity: Quantity) -> Self {
        Self {
            type_code: None,
            supply: Some(Supply {
                quantity: Some(quantity),
            }),
            act: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Supply {
    pub quantity: Option<Quantity>,
}
