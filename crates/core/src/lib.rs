//! # eRx Core
//!
//! Mapping and classification of national e-prescription documents.
//!
//! This crate turns the HL7 CDA wire tree (see the `cda` crate) into the compact prescription
//! model billing and reporting reason about:
//! - Structural validation of the fields the business layer cannot do without
//! - Barcode recovery through the section's narrative reference list
//! - Reimbursement classification (high-cost drug, desensitization vaccine, medical report)
//!
//! **No I/O during mapping**: configuration is resolved once by the caller (see [`config`]) and
//! every mapper is a pure function of its input, safe to run on many threads at once.

pub mod classification;
pub mod config;
pub mod constants;
pub mod error;
pub mod mapping;
pub mod model;
pub mod references;
pub mod validation;

pub use classification::{ClassificationRules, Classifier, FlagRoots};
pub use config::MappingConfig;
pub use error::{Entity, MappingError, MappingResult};
pub use model::{PrescriptionDocument, Section, SubstanceAdministration, Summary};
pub use references::ReferenceTable;

/// Entry point for mapping prescriptions.
///
/// Holds the resolved configuration and is cheap to share between threads.
#[derive(Clone, Debug, Default)]
pub struct PrescriptionMapper {
    config: MappingConfig,
}

impl PrescriptionMapper {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Map a whole clinical document using the configured classification rules.
    ///
    /// # Errors
    ///
    /// See [`mapping::map_clinical_document`].
    pub fn map_clinical_document(
        &self,
        document: &cda::ClinicalDocument,
    ) -> MappingResult<PrescriptionDocument> {
        mapping::map_clinical_document(document, self.config.rules())
    }

    /// Map a standalone section using the configured classification rules.
    ///
    /// # Errors
    ///
    /// See [`mapping::map_section`].
    pub fn map_section(&self, section: &cda::Section) -> MappingResult<Section> {
        mapping::map_section(section, self.config.rules())
    }

    /// Read a clinical document from JSON text and map it.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Cda`] if the JSON does not match the wire schema, otherwise see
    /// [`mapping::map_clinical_document`].
    pub fn map_json(&self, json: &str) -> MappingResult<PrescriptionDocument> {
        let document = cda::read_json(json)?;
        self.map_clinical_document(&document)
    }
}
