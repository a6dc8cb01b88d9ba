use std::fmt;

/// Kind of domain entity a mapping failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    ClinicalDocument,
    Author,
    Summary,
    SubstanceAdministration,
    Consumable,
    ExecutionDetails,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::ClinicalDocument => "clinical document",
            Entity::Author => "author",
            Entity::Summary => "summary",
            Entity::SubstanceAdministration => "substance administration",
            Entity::Consumable => "consumable",
            Entity::ExecutionDetails => "execution details",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// A field the business layer treats as mandatory is absent, empty or structurally
    /// malformed. The whole document is rejected.
    #[error("{entity} is missing required value `{field}`")]
    MissingRequiredValue { entity: Entity, field: &'static str },

    #[error("section `{field}` is absent")]
    MalformedSection { field: &'static str },

    #[error("{entity} has unexpected value {value:?} for `{field}`")]
    UnexpectedValue {
        entity: Entity,
        field: String,
        value: String,
    },

    #[error("invalid classification rules: {0}")]
    Rules(String),

    #[error("failed to read classification rules: {0}")]
    RulesRead(std::io::Error),

    #[error("wire error: {0}")]
    Cda(#[from] cda::CdaError),
}

impl MappingError {
    pub(crate) fn missing(entity: Entity, field: &'static str) -> Self {
        MappingError::MissingRequiredValue { entity, field }
    }

    /// True when this is a [`MappingError::MissingRequiredValue`] for `entity`.
    pub fn is_missing_value_of(&self, entity: Entity) -> bool {
        matches!(self, MappingError::MissingRequiredValue { entity: e, .. } if *e == entity)
    }
}

pub type MappingResult<T> = std::result::Result<T, MappingError>;
