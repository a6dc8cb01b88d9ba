//! Validated primitive types shared by the `cda` wire crate and the `erx-core` domain model.

use std::fmt;

/// Placeholder written in place of an identifier that could not be resolved.
pub const MISSING_BARCODE: &str = "missing";

#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Text cannot be empty")]
    Empty,
}

/// Mandatory wire text: a product name, a dose-form translation, a prescription barcode.
///
/// Blank input is rejected. Accepted input is stored exactly as received, surrounding whitespace
/// included, so mapped values match the document byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// # Errors
    ///
    /// `TextError::Empty` when `input` has no non-whitespace character.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let value = input.into();
        if value.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NonEmptyText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NonEmptyText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(s).map_err(serde::de::Error::custom)
    }
}

/// Barcode of a prescription, a prescribed line or a medicinal product.
///
/// Identifiers in e-prescription documents are frequently incomplete, so a barcode is either the
/// resolved value or [`Barcode::Missing`]. The missing variant renders as [`MISSING_BARCODE`] and
/// is serialised as that plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Barcode {
    /// Value copied from the document.
    Known(String),
    /// The identifier was absent, carried an unexpected namespace, or did not resolve.
    #[default]
    Missing,
}

impl Barcode {
    /// Wrap a resolved barcode value.
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// Build a barcode from an optional value, falling back to [`Barcode::Missing`].
    pub fn from_option(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::known)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value,
            Self::Missing => MISSING_BARCODE,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Barcode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Barcode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl serde::Serialize for Barcode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Barcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == MISSING_BARCODE {
            Ok(Self::Missing)
        } else {
            Ok(Self::Known(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_keeps_input_verbatim() {
        let text = NonEmptyText::new("  KETOTIFEN FUMARATE ").expect("valid text");
        assert_eq!(text.as_str(), "  KETOTIFEN FUMARATE ");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn non_empty_text_deserialise_rejects_empty_string() {
        let err = serde_json::from_str::<NonEmptyText>("\"\"").expect_err("should reject");
        assert!(err.to_string().contains("Text cannot be empty"));
    }

    #[test]
    fn missing_barcode_renders_sentinel() {
        let barcode = Barcode::from_option(None);
        assert!(barcode.is_missing());
        assert_eq!(barcode, "missing");
        assert_eq!(barcode.to_string(), MISSING_BARCODE);
    }

    #[test]
    fn known_barcode_keeps_value_verbatim() {
        let barcode = Barcode::from_option(Some("2802578001025"));
        assert_eq!(barcode, Barcode::known("2802578001025"));
        assert_eq!(barcode.as_str(), "2802578001025");
    }

    #[test]
    fn barcode_serialises_as_plain_string() {
        let json = serde_json::to_string(&vec![Barcode::known("21899392"), Barcode::Missing])
            .expect("serialise");
        assert_eq!(json, r#"["21899392","missing"]"#);

        let parsed: Vec<Barcode> = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, vec![Barcode::known("21899392"), Barcode::Missing]);
    }
}
