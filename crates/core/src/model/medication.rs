//! Prescribed line and medicinal product domain model.
//!
//! Quantities are opaque display strings: no unit conversion or numeric parsing happens at this
//! layer.

use erx_types::{Barcode, NonEmptyText};
use serde::Serialize;

/// One prescribed line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubstanceAdministration {
    /// Line barcode, or the sentinel when the identifier is absent or foreign.
    pub barcode: Barcode,
    pub status_code: Option<String>,
    /// Repeat period of the administration.
    pub period: Option<Period>,
    pub dose_quantity: Option<DoseQuantity>,
    pub rate_quantity: Option<RateQuantity>,
    pub consumable: Consumable,
    /// Quantity to dispense, from the paired supply relationship.
    pub prescribed_dose: PrescribedDose,
    pub execution_details: ExecutionDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Period {
    pub value: Option<String>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DoseQuantity {
    pub low_value: Option<String>,
    pub low_unit: Option<String>,
    pub high_value: Option<String>,
    pub high_unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RateQuantity {
    pub value: Option<String>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrescribedDose {
    pub value: Option<String>,
    pub unit: Option<String>,
}

/// Execution (dispensing) details recorded against a prescribed line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionDetails {
    /// Authenticity tape codes of executed packages; `None` when nothing was executed.
    pub authenticity_tapes: Option<Vec<String>>,
}

/// The prescribed medicinal product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Consumable {
    /// Product barcode resolved through the narrative list, or the sentinel.
    pub barcode: Barcode,
    pub name: NonEmptyText,
    pub form_code: FormCode,
    /// Terminal node of the ingredient chain.
    pub ingredient: Option<Ingredient>,
    pub container_packaged_medicine: Option<ContainerPackagedMedicine>,
}

/// Pharmaceutical dose form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormCode {
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub display_name: Option<String>,
    /// Display name of the national translation of the form code.
    pub translation: NonEmptyText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub code: Option<String>,
    pub code_system_name: Option<String>,
    pub display_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContainerPackagedMedicine {
    pub name: Option<String>,
    pub package_code: Option<String>,
    pub package_display_name: Option<String>,
    pub capacity: Option<String>,
}
