//! Medicinal product mapping.

use crate::error::{Entity, MappingError, MappingResult};
use crate::mapping::required_text;
use crate::model::{Consumable, ContainerPackagedMedicine, FormCode, Ingredient};
use crate::references::ReferenceTable;
use erx_types::Barcode;

/// Map a manufactured material to a [`Consumable`].
///
/// The product barcode is recovered through the narrative list: the material's
/// `code.originalText.reference` holds an anchor (`#med_barcode_1`) that `references` resolves.
/// An absent reference path and an unresolved anchor both yield [`Barcode::Missing`].
///
/// # Errors
///
/// Returns [`MappingError::MissingRequiredValue`] if the name, the form code, its translation or
/// the translation's display name is absent.
pub fn map_consumable(
    material: &cda::ManufacturedMaterial,
    references: &ReferenceTable,
) -> MappingResult<Consumable> {
    let name = required_text(material.name.as_deref(), Entity::Consumable, "name")?;
    let form_code = material
        .form_code
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::Consumable, "formCode"))?;
    let translation = form_code
        .translation
        .as_ref()
        .ok_or_else(|| MappingError::missing(Entity::Consumable, "formCode.translation"))?;
    let translation = required_text(
        translation.display_name.as_deref(),
        Entity::Consumable,
        "formCode.translation.displayName",
    )?;

    let barcode = match barcode_reference(material) {
        Some(reference) => references.resolve(reference),
        None => Barcode::Missing,
    };

    Ok(Consumable {
        barcode,
        name,
        form_code: FormCode {
            code: form_code.code.clone(),
            code_system: form_code.code_system.clone(),
            code_system_name: form_code.code_system_name.clone(),
            display_name: form_code.display_name.clone(),
            translation,
        },
        ingredient: material
            .ingredient
            .as_ref()
            .map(|i| map_ingredient(terminal_ingredient(i))),
        container_packaged_medicine: material
            .as_content
            .as_ref()
            .and_then(|c| c.container_packaged_medicine.as_ref())
            .map(map_container),
    })
}

/// Follow the nested-ingredient chain to its terminal node.
///
/// Wrapper nodes are discarded even when they carry a code; only the deepest node is clinically
/// significant.
pub fn terminal_ingredient(ingredient: &cda::Ingredient) -> &cda::Ingredient {
    let mut current = ingredient;
    while let Some(next) = current.ingredient.as_deref() {
        current = next;
    }
    current
}

fn barcode_reference(material: &cda::ManufacturedMaterial) -> Option<&str> {
    material
        .code
        .as_ref()?
        .original_text
        .as_ref()?
        .reference
        .as_ref()?
        .value
        .as_deref()
}

fn map_ingredient(ingredient: &cda::Ingredient) -> Ingredient {
    let code = ingredient.code.as_ref();
    Ingredient {
        code: code.and_then(|c| c.code.clone()),
        code_system_name: code.and_then(|c| c.code_system_name.clone()),
        display_name: code.and_then(|c| c.display_name.clone()),
        name: ingredient.name.clone(),
    }
}

fn map_container(container: &cda::ContainerPackagedMedicine) -> ContainerPackagedMedicine {
    let form_code = container.form_code.as_ref();
    ContainerPackagedMedicine {
        name: container.name.clone(),
        package_code: form_code.and_then(|f| f.code.clone()),
        package_display_name: form_code.and_then(|f| f.display_name.clone()),
        capacity: container
            .capacity_quantity
            .as_ref()
            .and_then(|q| q.value.clone()),
    }
}
