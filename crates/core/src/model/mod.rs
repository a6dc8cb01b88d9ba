//! Internal prescription model.
//!
//! These are the compact, explicit structs downstream billing and reporting reason about. They
//! are independent of the HL7 CDA wire tree in the `cda` crate: wire wrappers, code-system
//! metadata the business layer never reads, and the narrative block do not appear here.
//!
//! Every value is built fresh by the mappers in [`crate::mapping`] and never mutated afterwards.

pub mod document;
pub mod medication;
pub mod section;

pub use document::{
    Author, Custodian, DoctorVisit, EffectiveTime, LegalAuthenticator, PatientRole,
    PrescriptionDocument,
};
pub use medication::{
    Consumable, ContainerPackagedMedicine, DoseQuantity, ExecutionDetails, FormCode, Ingredient,
    Period, PrescribedDose, RateQuantity, SubstanceAdministration,
};
pub use section::{Section, Summary};
