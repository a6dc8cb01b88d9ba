//! Prescription document domain model.

use crate::model::section::Section;
use erx_types::NonEmptyText;
use serde::Serialize;

/// A mapped e-prescription.
///
/// Custodian, legal authenticator, patient role and doctor visit are reserved for wire content
/// the platform does not populate yet; the mapper always leaves them `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrescriptionDocument {
    /// Prescription barcode (extension of the document identifier).
    pub barcode: NonEmptyText,

    /// Validity window of the prescription.
    pub effective_time: EffectiveTime,

    /// Prescribing doctor.
    pub author: Author,

    pub custodian: Option<Custodian>,
    pub legal_authenticator: Option<LegalAuthenticator>,
    pub patient_role: Option<PatientRole>,
    pub doctor_visit: Option<DoctorVisit>,

    /// Clinical content.
    pub section: Section,
}

/// Validity window, copied verbatim from the wire timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EffectiveTime {
    pub since: String,
    pub until: String,
}

/// Prescribing doctor, as far as reimbursement needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Author {
    pub specialty_id: String,
    pub specialty_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Custodian {
    pub type_code: Option<String>,
    pub organization_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegalAuthenticator {
    pub time: Option<String>,
    pub signature_code: Option<String>,
    pub doctor_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientRole {
    /// National social security number of the patient.
    pub patient_amka: String,
    pub insurer_id: Option<String>,
    pub insurer_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DoctorVisit {
    pub visit_id: String,
    pub reason: Option<String>,
    pub comments: Option<String>,
}
