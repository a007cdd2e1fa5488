//! Conjugation dispatch.
//!
//! A request names a tense, an aspect or an imperative polarity; the
//! [`DispatchConfig`] turns that into an ordered list of routes. The
//! dispatcher runs every route that recognizes the verb over each
//! requested (region, subject, object) cell and unions the results per
//! region. A failing cell never stops its siblings; when nothing at all
//! was produced, the first constraint a cell hit becomes the error.
//! Coreferential cells inside an `all` grid are left out rather than
//! tried.

use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

use crate::config::{DispatchConfig, Exceptions, Route};
use crate::conjugator::{Conjugator, Features, Polarity, TableConjugator};
use crate::error::{ConjugationError, ConstraintError, ValidationError};
use crate::lexicon::{Verb, VerbClass};
use crate::person::{Selection, Slot};
use crate::region::Region;
use crate::request::{Mode, Request};
use crate::tables::{Case, Grammar, Paradigm};

/// Where a form came from; the formatter needs its pronoun case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub paradigm: Paradigm,
    pub pronouns: Case,
}

/// A (subject, object, form) triple. Ordering is the output ordering.
pub type Cell = (Slot, Option<Slot>, String);

/// Per-region, deduplicated conjugation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjugations {
    regions: BTreeMap<Region, BTreeMap<Cell, Origin>>,
}

impl Conjugations {
    /// Record a form. An identical triple already derived by another route
    /// keeps its first origin.
    pub fn insert(&mut self, region: Region, cell: Cell, origin: Origin) {
        self.regions
            .entry(region)
            .or_default()
            .entry(cell)
            .or_insert(origin);
    }

    pub fn is_empty(&self) -> bool {
        self.regions.values().all(BTreeMap::is_empty)
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &BTreeMap<Cell, Origin>)> {
        self.regions.iter().map(|(region, cells)| (*region, cells))
    }
}

pub struct Dispatcher<'a> {
    grammar: &'a Grammar,
    routes: &'a DispatchConfig,
    exceptions: &'a Exceptions,
}

impl<'a> Dispatcher<'a> {
    pub fn new(grammar: &'a Grammar, routes: &'a DispatchConfig, exceptions: &'a Exceptions) -> Self {
        Dispatcher {
            grammar,
            routes,
            exceptions,
        }
    }

    fn routes_for(&self, mode: &Mode) -> Result<(&'a [Route], Polarity), ValidationError> {
        let routes = self.routes;
        match mode {
            Mode::NegativeImperative => {
                Ok((routes.negative_imperative.as_slice(), Polarity::Prohibitive))
            }
            Mode::Imperative => Ok((routes.imperative.as_slice(), Polarity::Imperative)),
            Mode::Aspect(name) => routes
                .aspect(name)
                .map(|routes| (routes, Polarity::Indicative))
                .ok_or_else(|| ValidationError::UnknownAspect(name.clone())),
            Mode::Tense(name) => routes
                .tense(name)
                .map(|routes| (routes, Polarity::Indicative))
                .ok_or_else(|| ValidationError::UnknownTense(name.clone())),
        }
    }

    pub fn dispatch(&self, verb: &Verb, request: &Request) -> Result<Conjugations, ConjugationError> {
        let (routes, polarity) = self.routes_for(&request.mode)?;

        let subjects: Vec<Slot> = request
            .subject
            .slots()
            .into_iter()
            .filter(|slot| !request.mode.is_imperative() || slot.person() == 2)
            .collect();
        let objects: Vec<Option<Slot>> = match request.object {
            Some(selection) => selection.slots().into_iter().map(Some).collect(),
            None => vec![None],
        };
        let regions: Vec<Region> = verb
            .regions()
            .filter(|region| request.includes(*region))
            .collect();

        let grid = request.subject == Selection::All || request.object == Some(Selection::All);

        let mut conjugations = Conjugations::default();
        let mut recognized = false;
        let mut first_error: Option<ConstraintError> = None;
        let mut inapplicable = false;

        for route in routes {
            let paradigm = route.paradigm();
            let Some(table) = self.grammar.table(paradigm) else {
                warn!(%paradigm, "configured route has no morpheme table");
                continue;
            };
            if route.class != verb.class() {
                continue;
            }
            recognized = true;
            if route.class == VerbClass::Dative && request.object.is_some() {
                debug!(%paradigm, "dative route skipped for a request with an object");
                continue;
            }
            debug!(%paradigm, sub_tense = ?route.sub_tense, "running route");

            let conjugator = TableConjugator::new(table, self.exceptions);
            let origin = Origin {
                paradigm: conjugator.paradigm(),
                pronouns: table.pronouns,
            };
            for &region in &regions {
                for &subject in &subjects {
                    for &object in &objects {
                        if grid
                            && object.is_some_and(|object| Slot::is_coreferential(subject, object))
                        {
                            continue;
                        }
                        let features = Features {
                            subject,
                            object,
                            sub_tense: route.sub_tense,
                            applicative: request.applicative,
                            causative: request.causative,
                            optative: request.optative,
                            polarity,
                            region,
                        };
                        match conjugator.conjugate(verb, &features) {
                            Ok(Some(form)) => {
                                conjugations.insert(region, (subject, object, form), origin)
                            }
                            Ok(None) => inapplicable = true,
                            Err(error) => {
                                trace!(%paradigm, %region, ?subject, ?object, %error, "cell rejected");
                                first_error.get_or_insert(error);
                            }
                        }
                    }
                }
            }
        }

        if !conjugations.is_empty() {
            return Ok(conjugations);
        }
        if !recognized {
            debug!(infinitive = verb.infinitive(), "no route recognizes the verb");
        }
        // A constraint is only the answer when no cell was simply outside
        // the paradigm.
        Err(match first_error {
            Some(error) if !inapplicable => error.into(),
            _ => ConjugationError::NotFoundInContext {
                infinitive: verb.infinitive().to_string(),
            },
        })
    }
}
