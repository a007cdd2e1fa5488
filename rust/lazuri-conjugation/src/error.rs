//! Error types for the conjugation engine.

use serde::Serialize;
use thiserror::Error;

use crate::person::Slot;
use crate::tables::Paradigm;

/// Result type defaulting to [`ConjugationError`].
pub type Result<T, E = ConjugationError> = std::result::Result<T, E>;

/// Everything a conjugation request can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("verb '{infinitive}' was not found")]
    NotFound { infinitive: String },

    #[error("verb '{infinitive}' has no forms in this grammatical context")]
    NotFoundInContext { infinitive: String },
}

/// Malformed, missing or illegal request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("invalid value '{value}' for parameter '{parameter}'")]
    InvalidValue {
        parameter: &'static str,
        value: String,
    },

    #[error("verb '{infinitive}' cannot have an object")]
    ObjectNotAllowed { infinitive: String },

    #[error("verb '{infinitive}' only conjugates in dative paradigms and cannot have an object")]
    DativeObject { infinitive: String },

    #[error("imperatives only take a 2nd-person subject (S2_Singular, S2_Plural or all)")]
    ImperativeSubject,

    #[error("unknown aspect '{0}'")]
    UnknownAspect(String),

    #[error("unknown tense '{0}'")]
    UnknownTense(String),
}

/// A linguistically invalid feature combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error(
        "N/A - invalid combination: {} and {} are coreferential",
        .subject.subject_code(),
        .object.object_code()
    )]
    Coreferential { subject: Slot, object: Slot },

    #[error("{paradigm} does not form an applicative")]
    ApplicativeUnsupported { paradigm: Paradigm },

    #[error("{paradigm} does not form a causative")]
    CausativeUnsupported { paradigm: Paradigm },

    #[error("the causative requires an object")]
    CausativeWithoutObject,

    #[error("{paradigm} does not form an optative")]
    OptativeUnsupported { paradigm: Paradigm },
}

/// Failures while loading a lexicon or configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate lexicon entry '{0}'")]
    DuplicateVerb(String),
}

/// The response categories an outer layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    MissingParameter,
    InvalidParameter,
    InvalidCombination,
    VerbNotFound,
    VerbNotFoundInContext,
    InvalidTenseOrAspect,
}

impl ConjugationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConjugationError::Validation(error) => match error {
                ValidationError::MissingParameter(_) => ErrorKind::MissingParameter,
                ValidationError::InvalidValue { .. } => ErrorKind::InvalidParameter,
                ValidationError::ObjectNotAllowed { .. }
                | ValidationError::DativeObject { .. }
                | ValidationError::ImperativeSubject => ErrorKind::InvalidCombination,
                ValidationError::UnknownAspect(_) | ValidationError::UnknownTense(_) => {
                    ErrorKind::InvalidTenseOrAspect
                }
            },
            ConjugationError::Constraint(_) => ErrorKind::InvalidCombination,
            ConjugationError::NotFound { .. } => ErrorKind::VerbNotFound,
            ConjugationError::NotFoundInContext { .. } => ErrorKind::VerbNotFoundInContext,
        }
    }

    /// HTTP-equivalent status code.
    pub fn status(&self) -> u16 {
        match self {
            ConjugationError::Validation(_) | ConjugationError::Constraint(_) => 400,
            ConjugationError::NotFound { .. } | ConjugationError::NotFoundInContext { .. } => 404,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable error payload handed to the outer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}
