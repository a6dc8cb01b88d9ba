//! Narrative reference resolution.
//!
//! Structured entries point at the section's narrative list with anchor references
//! (`#med_barcode_1`); the list item carrying that anchor id holds the display token, typically a
//! product barcode. The table is built once per section and threaded read-only through the
//! mappers.

use crate::constants::ANCHOR_MARKER;
use erx_types::Barcode;
use std::collections::HashMap;

/// Immutable anchor id → display token table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: HashMap<String, String>,
}

impl ReferenceTable {
    /// Build the table from a section's narrative block.
    ///
    /// An absent block or list yields an empty table. Items without an id or value are skipped;
    /// for a duplicated id the last item wins.
    pub fn from_text(text: Option<&cda::Text>) -> Self {
        let items = text
            .and_then(|t| t.list.as_ref())
            .map(|list| list.item.as_slice())
            .unwrap_or_default();

        let mut entries = HashMap::with_capacity(items.len());
        for item in items {
            let (Some(id), Some(value)) = (item.id.as_deref(), item.value.as_deref()) else {
                tracing::debug!(?item.id, "skipping narrative item without id or value");
                continue;
            };
            if entries.insert(id.to_owned(), value.to_owned()).is_some() {
                tracing::debug!(id, "duplicate narrative anchor, keeping last value");
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a bare anchor id.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve an anchor reference such as `#med_barcode_1`.
    ///
    /// The leading anchor marker is optional. A miss yields [`Barcode::Missing`].
    pub fn resolve(&self, reference: &str) -> Barcode {
        let key = reference
            .strip_prefix(ANCHOR_MARKER)
            .unwrap_or(reference);

        match self.get(key) {
            Some(value) => Barcode::known(value),
            None => {
                tracing::debug!(reference, "narrative reference did not resolve");
                Barcode::Missing
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ReferenceTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
