//! Request boundary.
//!
//! [`RawRequest`] is what the outer layer hands over: every parameter as
//! an optional string, exactly as it arrived. [`Request`] is the validated,
//! normalized bundle the dispatcher works from; it is also the memoization
//! key, so it carries every parameter that can change a response.

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::person::Selection;
use crate::region::Region;

/// Unvalidated request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRequest {
    pub infinitive: Option<String>,
    pub subject: Option<String>,
    pub obj: Option<String>,
    pub tense: Option<String>,
    pub aspect: Option<String>,
    pub applicative: Option<String>,
    pub causative: Option<String>,
    pub optative: Option<String>,
    pub imperative: Option<String>,
    pub neg_imperative: Option<String>,
    pub region: Option<String>,
}

impl RawRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infinitive(mut self, value: impl Into<String>) -> Self {
        self.infinitive = Some(value.into());
        self
    }

    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.subject = Some(value.into());
        self
    }

    pub fn obj(mut self, value: impl Into<String>) -> Self {
        self.obj = Some(value.into());
        self
    }

    pub fn tense(mut self, value: impl Into<String>) -> Self {
        self.tense = Some(value.into());
        self
    }

    pub fn aspect(mut self, value: impl Into<String>) -> Self {
        self.aspect = Some(value.into());
        self
    }

    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    // Flags take anything printable so both `true` and `"TRUE"` work.

    pub fn applicative(mut self, value: impl ToString) -> Self {
        self.applicative = Some(value.to_string());
        self
    }

    pub fn causative(mut self, value: impl ToString) -> Self {
        self.causative = Some(value.to_string());
        self
    }

    pub fn optative(mut self, value: impl ToString) -> Self {
        self.optative = Some(value.to_string());
        self
    }

    pub fn imperative(mut self, value: impl ToString) -> Self {
        self.imperative = Some(value.to_string());
        self
    }

    pub fn neg_imperative(mut self, value: impl ToString) -> Self {
        self.neg_imperative = Some(value.to_string());
        self
    }
}

/// Which branch of the dispatcher a request takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    NegativeImperative,
    Imperative,
    Aspect(String),
    Tense(String),
}

impl Mode {
    pub fn is_imperative(&self) -> bool {
        matches!(self, Mode::Imperative | Mode::NegativeImperative)
    }
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub infinitive: String,
    pub subject: Selection,
    pub object: Option<Selection>,
    pub mode: Mode,
    pub applicative: bool,
    pub causative: bool,
    pub optative: bool,
    /// `None` means every region.
    pub regions: Option<BTreeSet<Region>>,
}

impl Request {
    pub fn includes(&self, region: Region) -> bool {
        self.regions
            .as_ref()
            .is_none_or(|regions| regions.contains(&region))
    }
}
