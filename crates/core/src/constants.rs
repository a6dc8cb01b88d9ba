//! Wire constants of the national e-prescription document.
//!
//! Identifier roots are fixed by the prescribing platform and must be matched exactly.

/// Namespace root of the clinical document identifier (the prescription barcode).
pub const DOCUMENT_ID_ROOT: &str = "1.21";

/// Namespace root of a substance administration identifier (the prescribed line barcode).
pub const SUBSTANCE_ADMINISTRATION_ID_ROOT: &str = "1.21.1";

/// Author identifier root carrying the doctor's specialty id.
pub const AUTHOR_SPECIALTY_ID_ROOT: &str = "1.19.1";

/// Author identifier root carrying the doctor's specialty name.
pub const AUTHOR_SPECIALTY_NAME_ROOT: &str = "1.19.2";

/// Execution act identifier root carrying an authenticity tape code.
pub const AUTHENTICITY_TAPE_ROOT: &str = "2.10.12";

/// Administrative act identifier root flagging a high-cost drug.
pub const HIGH_COST_DRUG_FLAG_ROOT: &str = "1.1.7";

/// Administrative act identifier root flagging a desensitization vaccine.
pub const DESENSITIZATION_VACCINE_FLAG_ROOT: &str = "1.1.8";

/// Administrative act identifier root flagging a mandatory medical report.
pub const MEDICAL_REPORT_REQUIRED_FLAG_ROOT: &str = "1.1.23";

/// Entry relationship type code of execution (support) acts.
pub const EXECUTION_RELATIONSHIP_TYPE_CODE: &str = "SPRT";

/// Marker prefixed to narrative anchor references (`#med_barcode_1`).
pub const ANCHOR_MARKER: char = '#';

/// Environment variable naming a YAML classification rules file.
pub const RULES_FILE_ENV: &str = "ERX_RULES_FILE";
