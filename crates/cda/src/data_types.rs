//! HL7 v3 data types used across the clinical document tree.
//!
//! Only the attributes the prescription mapper reads are modelled. Every attribute is optional
//! because the upstream schema marks almost nothing as required.

use serde::{Deserialize, Deserializer, Serialize};

/// HL7 `II` instance identifier: a namespace `root` plus an `extension` unique within it.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Id {
    pub root: Option<String>,
    pub extension: Option<String>,
}

impl Id {
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
            extension: Some(extension.into()),
        }
    }

    /// True when the identifier's namespace root equals `root`.
    pub fn has_root(&self, root: &str) -> bool {
        self.root.as_deref() == Some(root)
    }
}

/// HL7 `CD`/`CE` coded value, including the epSOS `formCode` shape.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Code {
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub display_name: Option<String>,
    pub original_text: Option<OriginalText>,
    pub translation: Option<Translation>,
}

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

/// Translation of a coded value into another code system (for example the national form list).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Translation {
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct OriginalText {
    pub reference: Option<Reference>,
}

/// Narrative anchor reference, e.g. `#med_barcode_1`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub value: Option<String>,
}

/// HL7 `CS` status code.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusCode {
    pub code: Option<String>,
}

/// HL7 `PQ` physical quantity. Values are kept as text; the schema allows numeric literals too.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Quantity {
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: Some(unit.into()),
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            unit: None,
        }
    }
}

/// HL7 `IVL_PQ` interval (used by `doseQuantity` and `rateQuantity`).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct IntervalQuantity {
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
}

/// HL7 `IVL_TS` / `PIVL_TS` time expression.
///
/// Timestamps are opaque strings on the wire; `period` is only populated on the periodic form.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectiveTime {
    pub value: Option<String>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    pub period: Option<Quantity>,
}

/// Accept either a JSON string or a JSON number for a textual wire value.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

/// Read a repeated wire element, treating an explicit `null` like an absent key.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
