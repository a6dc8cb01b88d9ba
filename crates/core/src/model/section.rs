use crate::model::medication::SubstanceAdministration;
use erx_types::Barcode;
use serde::Serialize;

/// Prescription section: the prescribed lines plus the classification summary derived from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub barcode: Option<Barcode>,
    pub text: Option<String>,
    pub summary: Summary,
    /// Mapped lines, in document order.
    pub substance_administrations: Vec<SubstanceAdministration>,
}

/// Reimbursement classification of a prescription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub contains_high_cost_drug: bool,
    pub contains_desensitization_vaccine: bool,
    pub medical_report_required: bool,
}

impl Summary {
    /// Combine two summaries flag by flag: a flag raised by either side stays raised.
    pub fn union(self, other: Summary) -> Summary {
        Summary {
            contains_high_cost_drug: self.contains_high_cost_drug || other.contains_high_cost_drug,
            contains_desensitization_vaccine: self.contains_desensitization_vaccine
                || other.contains_desensitization_vaccine,
            medical_report_required: self.medical_report_required || other.medical_report_required,
        }
    }
}
