//! Reimbursement classification of a prescription section.
//!
//! The summary flags are not a single wire field: they are derived from structural signals spread
//! over the section. Two kinds of signal are recognised by the default rule table:
//!
//! - **Administrative flags**: section-level acts carry identifiers whose root names a flag and
//!   whose extension is `"0"` or `"1"`.
//! - **Code catalogues**: a prescribed line whose ingredient code or product barcode appears in a
//!   flag's catalogue raises that flag.
//!
//! Each flag is the logical OR of every signal found. Roots and catalogues are configuration
//! (see [`crate::config`]); callers with other needs may inject their own [`Classifier`].

use crate::constants::{
    DESENSITIZATION_VACCINE_FLAG_ROOT, HIGH_COST_DRUG_FLAG_ROOT, MEDICAL_REPORT_REQUIRED_FLAG_ROOT,
};
use crate::error::{Entity, MappingError, MappingResult};
use crate::model::{Summary, SubstanceAdministration};
use crate::validation::validate_oid_root;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Derives a section [`Summary`] from its administrative acts and mapped lines.
pub trait Classifier: Send + Sync {
    /// # Errors
    ///
    /// Implementations return a [`MappingError`] when a signal is present but malformed.
    fn classify(
        &self,
        administrative_acts: &[&cda::Act],
        substance_administrations: &[SubstanceAdministration],
    ) -> MappingResult<Summary>;
}

/// Identifier roots of the administrative flag acts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagRoots {
    pub high_cost_drug: String,
    pub desensitization_vaccine: String,
    pub medical_report_required: String,
}

impl Default for FlagRoots {
    fn default() -> Self {
        Self {
            high_cost_drug: HIGH_COST_DRUG_FLAG_ROOT.to_string(),
            desensitization_vaccine: DESENSITIZATION_VACCINE_FLAG_ROOT.to_string(),
            medical_report_required: MEDICAL_REPORT_REQUIRED_FLAG_ROOT.to_string(),
        }
    }
}

impl FlagRoots {
    fn iter(&self) -> [(Flag, &str); 3] {
        [
            (Flag::HighCostDrug, self.high_cost_drug.as_str()),
            (Flag::DesensitizationVaccine, self.desensitization_vaccine.as_str()),
            (Flag::MedicalReportRequired, self.medical_report_required.as_str()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    HighCostDrug,
    DesensitizationVaccine,
    MedicalReportRequired,
}

impl Flag {
    fn raise(self, summary: &mut Summary) {
        match self {
            Flag::HighCostDrug => summary.contains_high_cost_drug = true,
            Flag::DesensitizationVaccine => summary.contains_desensitization_vaccine = true,
            Flag::MedicalReportRequired => summary.medical_report_required = true,
        }
    }
}

/// Configurable rule table driving the default classification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassificationRules {
    pub flag_roots: FlagRoots,
    pub high_cost_drug_codes: BTreeSet<String>,
    pub desensitization_vaccine_codes: BTreeSet<String>,
    pub medical_report_codes: BTreeSet<String>,
}

impl ClassificationRules {
    /// Check that every flag root is a well-formed OID and that no two flags share a root.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Rules`] describing the first problem found.
    pub fn validate(&self) -> MappingResult<()> {
        let roots = self.flag_roots.iter();
        for (_, root) in &roots {
            validate_oid_root(root)?;
        }

        let distinct: BTreeSet<&str> = roots.iter().map(|(_, root)| *root).collect();
        if distinct.len() != roots.len() {
            return Err(MappingError::Rules(
                "flag roots must be pairwise distinct".into(),
            ));
        }

        Ok(())
    }

    fn catalogue_hits(&self, line: &SubstanceAdministration) -> Summary {
        let ingredient_code = line
            .consumable
            .ingredient
            .as_ref()
            .and_then(|i| i.code.as_deref());
        let barcode = (!line.consumable.barcode.is_missing()).then(|| line.consumable.barcode.as_str());

        let listed = |catalogue: &BTreeSet<String>| {
            [ingredient_code, barcode]
                .into_iter()
                .flatten()
                .any(|code| catalogue.contains(code))
        };

        Summary {
            contains_high_cost_drug: listed(&self.high_cost_drug_codes),
            contains_desensitization_vaccine: listed(&self.desensitization_vaccine_codes),
            medical_report_required: listed(&self.medical_report_codes),
        }
    }
}

impl Classifier for ClassificationRules {
    fn classify(
        &self,
        administrative_acts: &[&cda::Act],
        substance_administrations: &[SubstanceAdministration],
    ) -> MappingResult<Summary> {
        let mut summary = Summary::default();

        for act in administrative_acts {
            for id in &act.id {
                for (flag, root) in self.flag_roots.iter() {
                    if !id.has_root(root) {
                        continue;
                    }
                    if flag_value(root, id.extension.as_deref())? {
                        flag.raise(&mut summary);
                    }
                }
            }
        }

        for line in substance_administrations {
            summary = summary.union(self.catalogue_hits(line));
        }

        Ok(summary)
    }
}

/// Decode an administrative flag extension: `"0"` is false, `"1"` is true.
fn flag_value(root: &str, extension: Option<&str>) -> MappingResult<bool> {
    match extension {
        Some("0") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(MappingError::UnexpectedValue {
            entity: Entity::Summary,
            field: format!("act.id[{root}].extension"),
            value: other.to_string(),
        }),
        None => Err(MappingError::missing(Entity::Summary, "act.id.extension")),
    }
}
