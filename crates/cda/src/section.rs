//! Prescription section, its narrative block and its entries.

use crate::data_types::{
    null_as_empty, string_or_number, Code, EffectiveTime, Id, StatusCode,
};
use crate::medication::{EntryRelationship, SubstanceAdministration};
use serde::{Deserialize, Serialize};

/// The single prescription `section` of the structured body.
///
/// `entry` keeps three distinct states: absent (`None`), present but empty, and present with
/// `null` members. The mapper treats only the first as malformed.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    pub id: Option<Id>,
    pub code: Option<Code>,
    pub title: Option<String>,
    pub text: Option<Text>,
    pub entry: Option<Vec<Option<Entry>>>,
}

/// Narrative block of the section. Its list carries the anchors referenced by the entries.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Text {
    pub list: Option<ListType>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ListType {
    #[serde(deserialize_with = "null_as_empty")]
    pub item: Vec<Item>,
}

/// Narrative list item: an anchor `id` and the human-readable token it labels.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            value: Some(value.into()),
        }
    }
}

/// Section entry: either an administrative act or a substance administration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    pub act: Option<Act>,
    pub substance_administration: Option<SubstanceAdministration>,
}

impl Entry {
    pub fn with_act(act: Act) -> Self {
        Self {
            act: Some(act),
            substance_administration: None,
        }
    }

    pub fn with_substance_administration(substance_administration: SubstanceAdministration) -> Self {
        Self {
            act: None,
            substance_administration: Some(substance_administration),
        }
    }
}

/// HL7 `act`. At section level its identifiers encode prescription-wide administrative flags;
/// inside an entry relationship it carries execution details.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Act {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: Vec<Id>,
    pub code: Option<Code>,
    pub status_code: Option<StatusCode>,
    pub effective_time: Option<EffectiveTime>,
    #[serde(deserialize_with = "null_as_empty")]
    pub entry_relationship: Vec<EntryRelationship>,
}

impl Act {
    pub fn with_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            id: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}
