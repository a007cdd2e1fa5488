//! Engine configuration: the mapping from request-level tense and aspect
//! names to concrete paradigms, and the lexical exception sets.
//!
//! Both halves deserialize from JSON; any section left out of a document
//! keeps its standard value.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::LoadError;
use crate::lexicon::VerbClass;
use crate::tables::{Paradigm, SubTense, Tense};

/// One concrete pipeline: a paradigm and the form embedded in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Route {
    pub class: VerbClass,
    pub tense: Tense,
    #[serde(default)]
    pub sub_tense: SubTense,
}

impl Route {
    pub const fn new(class: VerbClass, tense: Tense, sub_tense: SubTense) -> Self {
        Route {
            class,
            tense,
            sub_tense,
        }
    }

    pub fn paradigm(&self) -> Paradigm {
        Paradigm::new(self.class, self.tense)
    }
}

fn every_class(tense: Tense, sub_tense: SubTense) -> Vec<Route> {
    [VerbClass::Nominative, VerbClass::Ergative, VerbClass::Dative]
        .into_iter()
        .map(|class| Route::new(class, tense, sub_tense))
        .collect()
}

/// Simplified names to ordered route lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub tenses: BTreeMap<String, Vec<Route>>,
    pub aspects: BTreeMap<String, Vec<Route>>,
    pub imperative: Vec<Route>,
    pub negative_imperative: Vec<Route>,
}

impl DispatchConfig {
    pub fn standard() -> Self {
        use VerbClass::*;

        let tenses = BTreeMap::from([
            ("present".to_string(), every_class(Tense::Present, SubTense::Plain)),
            ("past".to_string(), every_class(Tense::Past, SubTense::Plain)),
            ("future".to_string(), every_class(Tense::Present, SubTense::Future)),
            (
                "pastpro".to_string(),
                every_class(Tense::Present, SubTense::PastProgressive),
            ),
            (
                "presentperf".to_string(),
                vec![
                    Route::new(Nominative, Tense::PresentPerfect, SubTense::Plain),
                    Route::new(Ergative, Tense::PresentPerfect, SubTense::Plain),
                ],
            ),
        ]);
        let aspects = BTreeMap::from([
            (
                "potential".to_string(),
                vec![
                    Route::new(Nominative, Tense::Potential, SubTense::Plain),
                    Route::new(Ergative, Tense::Potential, SubTense::Plain),
                ],
            ),
            (
                "passive".to_string(),
                vec![Route::new(Ergative, Tense::Passive, SubTense::Plain)],
            ),
        ]);
        DispatchConfig {
            tenses,
            aspects,
            imperative: every_class(Tense::Past, SubTense::Plain),
            negative_imperative: every_class(Tense::Present, SubTense::Plain),
        }
    }

    pub fn tense(&self, name: &str) -> Option<&[Route]> {
        self.tenses.get(name).map(Vec::as_slice)
    }

    pub fn aspect(&self, name: &str) -> Option<&[Route]> {
        self.aspects.get(name).map(Vec::as_slice)
    }

    /// Every configured route, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.tenses
            .values()
            .chain(self.aspects.values())
            .flatten()
            .chain(&self.imperative)
            .chain(&self.negative_imperative)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IrregularStem {
    pub infinitive: String,
    pub tense: Tense,
    pub stem: String,
}

/// Lexical exceptions keyed by infinitive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Exceptions {
    /// Verbs that never take an object.
    pub no_object: BTreeSet<String>,
    /// Verbs whose root must not have a preverb extracted.
    pub keep_preverb: BTreeSet<String>,
    /// Verbs whose vowel-final preverb glides to `y` before a vowel.
    pub glide_preverb: BTreeSet<String>,
    pub irregular_stems: Vec<IrregularStem>,
}

impl Exceptions {
    pub fn standard() -> Self {
        let irregular = |tense, stem: &str| IrregularStem {
            infinitive: "ulva".to_string(),
            tense,
            stem: stem.to_string(),
        };
        Exceptions {
            no_object: BTreeSet::from(["coxons".to_string()]),
            keep_preverb: BTreeSet::from(["okosu".to_string()]),
            glide_preverb: BTreeSet::from(["geçamu".to_string()]),
            irregular_stems: vec![
                irregular(Tense::Past, "id"),
                irregular(Tense::PresentPerfect, "ul"),
                irregular(Tense::Potential, "ul"),
            ],
        }
    }

    pub fn irregular_stem(&self, infinitive: &str, tense: Tense) -> Option<&str> {
        self.irregular_stems
            .iter()
            .find(|entry| entry.infinitive == infinitive && entry.tense == tense)
            .map(|entry| entry.stem.as_str())
    }
}

impl Default for Exceptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything configurable about an engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub routes: DispatchConfig,
    pub exceptions: Exceptions,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}
