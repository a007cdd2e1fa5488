//! # Lazuri Conjugation — a rule engine for Laz verbs
//!
//! Given an infinitive and a bundle of grammatical features, the engine
//! computes the conjugated surface forms of a Laz verb in each of the four
//! dialect regions (FA, AŞ, PZ, HO).
//!
//! ## Architecture
//!
//! ```text
//! RawRequest → Validator → Request
//!   → Dispatcher (routes from DispatchConfig)
//!     → TableConjugator per route × region × subject × object
//!       (stems, phonology, morpheme tables, lexicon)
//!   → Formatter → Response
//! ```
//!
//! The morpheme tables, dispatch routes and exception sets are data; the
//! conjugator is a single routine that every paradigm runs through. The
//! lexicon is read-only input behind the [`Lexicon`] trait.
//!
//! ```rust
//! use lazuri_conjugation::{Engine, RawRequest, Region, sample};
//!
//! let engine = Engine::new(sample::lexicon());
//! let response = engine
//!     .conjugate(&RawRequest::new().infinitive("ot̆axu").subject("S1_Singular").tense("past"))
//!     .unwrap();
//! assert_eq!(response.get(Region::Pz).unwrap(), &["ma: p̌t̆axi".to_string()]);
//! ```

pub mod cache;
pub mod config;
pub mod conjugator;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod lexicon;
pub mod person;
pub mod phonology;
pub mod region;
pub mod request;
pub mod sample;
pub mod stem;
pub mod tables;
pub mod validate;

pub use cache::ResponseCache;
pub use config::{DispatchConfig, EngineConfig, Exceptions, Route};
pub use error::{ConjugationError, ConstraintError, ErrorBody, ErrorKind, LoadError, Result, ValidationError};
pub use format::Response;
pub use lexicon::{Lexicon, MemoryLexicon, Verb, VerbClass};
pub use person::{Selection, Slot};
pub use region::Region;
pub use request::{RawRequest, Request};
pub use tables::{Grammar, Paradigm, SubTense, Tense};

use tracing::debug;

use dispatch::Dispatcher;
use validate::Validator;

/// The conjugation pipeline over a lexicon.
#[derive(Debug)]
pub struct Engine<L> {
    lexicon: L,
    grammar: Grammar,
    config: EngineConfig,
    cache: Option<ResponseCache>,
}

impl<L: Lexicon> Engine<L> {
    /// An engine with the standard grammar and configuration.
    pub fn new(lexicon: L) -> Self {
        Engine {
            lexicon,
            grammar: Grammar::standard(),
            config: EngineConfig::default(),
            cache: None,
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Memoize up to `capacity` successful responses. Zero disables the
    /// cache.
    pub fn with_cache(mut self, capacity: usize) -> Self {
        self.cache = ResponseCache::new(capacity);
        self
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate(&self, raw: &RawRequest) -> Result<Request> {
        let validator = Validator::new(&self.lexicon, &self.config.routes, &self.config.exceptions);
        Ok(validator.validate(raw)?)
    }

    /// Validate, dispatch and format.
    pub fn conjugate(&self, raw: &RawRequest) -> Result<Response> {
        let request = self.validate(raw)?;
        self.conjugate_request(&request)
    }

    /// Dispatch and format an already validated request.
    pub fn conjugate_request(&self, request: &Request) -> Result<Response> {
        if let Some(response) = self.cache.as_ref().and_then(|cache| cache.get(request)) {
            debug!(infinitive = %request.infinitive, "response served from cache");
            return Ok(response);
        }

        let verb = self
            .lexicon
            .lookup(&request.infinitive)
            .ok_or_else(|| ConjugationError::NotFound {
                infinitive: request.infinitive.clone(),
            })?;
        let dispatcher = Dispatcher::new(&self.grammar, &self.config.routes, &self.config.exceptions);
        let conjugations = dispatcher.dispatch(verb, request)?;
        let response = format::format(&conjugations);

        if let Some(cache) = &self.cache {
            cache.insert(request.clone(), response.clone());
        }
        Ok(response)
    }
}
