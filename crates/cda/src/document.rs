//! Clinical document header and body wrappers.

use crate::data_types::{null_as_empty, EffectiveTime, Id};
use crate::section::Section;
use serde::{Deserialize, Serialize};

/// Root `ClinicalDocument` element of an e-prescription.
///
/// Header elements the mapper does not consume (custodian, legal authenticator, record target,
/// encompassing encounter) are not modelled and are skipped during deserialisation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClinicalDocument {
    pub id: Option<Id>,
    pub effective_time: Option<EffectiveTime>,
    pub author: Option<Author>,
    pub component: Option<Component>,
}

impl ClinicalDocument {
    /// Walk `component.structuredBody.component.section`, returning the section if every hop is
    /// present.
    pub fn section(&self) -> Option<&Section> {
        self.component
            .as_ref()?
            .structured_body
            .as_ref()?
            .component
            .as_deref()?
            .section
            .as_ref()
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub time: Option<EffectiveTime>,
    pub assigned_author: Option<AssignedAuthor>,
}

/// Prescribing doctor. Identifiers are distinguished by root (specialty id, specialty name, ...).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignedAuthor {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: Vec<Id>,
}

/// CDA `component`: wraps either the structured body or, one level down, the section.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
    pub structured_body: Option<StructuredBody>,
    pub section: Option<Section>,
}

impl Component {
    /// `component.structuredBody.component.section` around a single section.
    pub fn wrapping_section(section: Section) -> Self {
        Self {
            structured_body: Some(StructuredBody {
                component: Some(Box::new(Component {
                    structured_body: None,
                    section: Some(section),
                })),
            }),
            section: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredBody {
    pub component: Option<Box<Component>>,
}
