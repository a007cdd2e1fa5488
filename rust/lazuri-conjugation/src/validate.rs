//! Request validation and normalization.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. infinitive and subject are present;
//! 2. verbs that never take an object are not given one;
//! 3. verbs only the dative routes recognize are not given an object;
//! 4. imperatives have a 2nd-person (or `all`) subject;
//! 5. a supplied aspect name is known;
//! 6. otherwise the tense name is known.

use crate::config::{DispatchConfig, Exceptions};
use crate::error::ValidationError;
use crate::lexicon::{Lexicon, Verb, VerbClass};
use crate::person::{Selection, Slot};
use crate::region::Region;
use crate::request::{Mode, RawRequest, Request};

pub struct Validator<'a, L> {
    lexicon: &'a L,
    routes: &'a DispatchConfig,
    exceptions: &'a Exceptions,
}

/// A flag is set only by a case-insensitive `true`. Absent, empty and
/// any other value mean `false`.
fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

impl<'a, L: Lexicon> Validator<'a, L> {
    pub fn new(lexicon: &'a L, routes: &'a DispatchConfig, exceptions: &'a Exceptions) -> Self {
        Validator {
            lexicon,
            routes,
            exceptions,
        }
    }

    /// Every configured route that recognizes the verb is a dative route.
    fn dative_only(&self, verb: &Verb) -> bool {
        let mut recognizing = self
            .routes
            .routes()
            .filter(|route| route.class == verb.class())
            .peekable();
        recognizing.peek().is_some()
            && recognizing.all(|route| route.class == VerbClass::Dative)
    }

    pub fn validate(&self, raw: &RawRequest) -> Result<Request, ValidationError> {
        let infinitive = present(&raw.infinitive)
            .ok_or(ValidationError::MissingParameter("infinitive"))?
            .trim_end()
            .to_lowercase();
        let subject = present(&raw.subject).ok_or(ValidationError::MissingParameter("subject"))?;
        let subject = Selection::parse_subject(subject)?;
        let object = match raw.obj.as_deref() {
            Some(obj) => Selection::parse_object(obj)?,
            None => None,
        };

        let applicative = parse_flag(raw.applicative.as_deref());
        let causative = parse_flag(raw.causative.as_deref());
        let optative = parse_flag(raw.optative.as_deref());
        let imperative = parse_flag(raw.imperative.as_deref());
        let neg_imperative = parse_flag(raw.neg_imperative.as_deref());
        let regions = present(&raw.region).map(Region::parse_filter).transpose()?;

        if object.is_some() && self.exceptions.no_object.contains(&infinitive) {
            return Err(ValidationError::ObjectNotAllowed { infinitive });
        }

        if object.is_some() {
            if let Some(verb) = self.lexicon.lookup(&infinitive) {
                if self.dative_only(verb) {
                    return Err(ValidationError::DativeObject { infinitive });
                }
            }
        }

        if imperative || neg_imperative {
            let second_person = match subject {
                Selection::All => true,
                Selection::One(slot) => matches!(slot, Slot::SecondSingular | Slot::SecondPlural),
            };
            if !second_person {
                return Err(ValidationError::ImperativeSubject);
            }
        }

        let aspect = present(&raw.aspect).map(|aspect| aspect.trim().to_lowercase());
        if let Some(aspect) = &aspect {
            if self.routes.aspect(aspect).is_none() {
                return Err(ValidationError::UnknownAspect(aspect.clone()));
            }
        }

        let mode = if neg_imperative {
            Mode::NegativeImperative
        } else if imperative {
            Mode::Imperative
        } else if let Some(aspect) = aspect {
            Mode::Aspect(aspect)
        } else {
            let tense = present(&raw.tense)
                .ok_or(ValidationError::MissingParameter("tense"))?
                .trim()
                .to_lowercase();
            if self.routes.tense(&tense).is_none() {
                return Err(ValidationError::UnknownTense(tense));
            }
            Mode::Tense(tense)
        };

        Ok(Request {
            infinitive,
            subject,
            object,
            mode,
            applicative,
            causative,
            optative,
            regions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;
    use crate::sample;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    struct Fixture {
        lexicon: MemoryLexicon,
        routes: DispatchConfig,
        exceptions: Exceptions,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture {
                lexicon: sample::lexicon(),
                routes: DispatchConfig::standard(),
                exceptions: Exceptions::standard(),
            }
        }

        fn validate(&self, raw: RawRequest) -> Result<Request, ValidationError> {
            Validator::new(&self.lexicon, &self.routes, &self.exceptions).validate(&raw)
        }
    }

    fn base() -> RawRequest {
        RawRequest::new().infinitive("ot̆axu").subject("all").tense("present")
    }

    #[test]
    fn normalizes() {
        let request = Fixture::new()
            .validate(
                RawRequest::new()
                    .infinitive("OT̆AXU  ")
                    .subject("S1_Singular")
                    .obj("")
                    .tense("Present")
                    .applicative("TRUE")
                    .region("ho,fa"),
            )
            .unwrap();
        assert_eq!(request.infinitive, "ot̆axu");
        assert_eq!(request.subject, Selection::One(Slot::FirstSingular));
        assert_eq!(request.object, None);
        assert_eq!(request.mode, Mode::Tense("present".into()));
        assert!(request.applicative);
        assert!(!request.causative);
        assert_eq!(request.regions, Some(BTreeSet::from([Region::Fa, Region::Ho])));
    }

    #[test]
    fn missing_parameters() {
        let fixture = Fixture::new();
        let mut raw = base();
        raw.infinitive = None;
        assert_eq!(
            fixture.validate(raw),
            Err(ValidationError::MissingParameter("infinitive"))
        );
        let mut raw = base();
        raw.subject = Some(" ".into());
        assert_eq!(fixture.validate(raw), Err(ValidationError::MissingParameter("subject")));
        let mut raw = base();
        raw.tense = None;
        assert_eq!(fixture.validate(raw), Err(ValidationError::MissingParameter("tense")));
    }

    #[test]
    fn no_object_verbs() {
        let error = Fixture::new()
            .validate(base().infinitive("coxons").obj("O2_Singular"))
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::ObjectNotAllowed {
                infinitive: "coxons".into()
            }
        );
    }

    #[test]
    fn dative_verbs_take_no_object() {
        let error = Fixture::new()
            .validate(base().infinitive("oyoropu").obj("O3_Singular"))
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::DativeObject {
                infinitive: "oyoropu".into()
            }
        );
    }

    #[test]
    fn imperative_subjects() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.validate(base().subject("S1_Singular").imperative(true)),
            Err(ValidationError::ImperativeSubject)
        );
        assert_eq!(
            fixture.validate(base().subject("S3_Plural").neg_imperative("True")),
            Err(ValidationError::ImperativeSubject)
        );
        let request = fixture
            .validate(base().subject("S2_Plural").imperative(true).neg_imperative(true))
            .unwrap();
        assert_eq!(request.mode, Mode::NegativeImperative);
    }

    #[test]
    fn imperatives_do_not_need_a_tense() {
        let mut raw = base().subject("S2_Singular").imperative(true);
        raw.tense = None;
        assert_eq!(Fixture::new().validate(raw).unwrap().mode, Mode::Imperative);
    }

    #[test]
    fn aspect_wins_over_tense() {
        let fixture = Fixture::new();
        let request = fixture.validate(base().aspect("Potential")).unwrap();
        assert_eq!(request.mode, Mode::Aspect("potential".into()));
        assert_eq!(
            fixture.validate(base().aspect("habitual")),
            Err(ValidationError::UnknownAspect("habitual".into()))
        );
    }

    #[test]
    fn unknown_tense() {
        assert_eq!(
            Fixture::new().validate(base().tense("later")),
            Err(ValidationError::UnknownTense("later".into()))
        );
    }

    #[test]
    fn flags_other_than_true_are_unset() {
        let fixture = Fixture::new();
        let request = fixture
            .validate(base().optative("yes").causative(" TRUE ").applicative(""))
            .unwrap();
        assert!(!request.optative);
        assert!(request.causative);
        assert!(!request.applicative);
        assert_eq!(
            fixture.validate(base().imperative("False")).unwrap().mode,
            Mode::Tense("present".into())
        );
    }

    #[test]
    fn malformed_values() {
        let fixture = Fixture::new();
        assert!(matches!(
            fixture.validate(base().subject("S4_Singular")),
            Err(ValidationError::InvalidValue { parameter: "subject", .. })
        ));
        assert!(matches!(
            fixture.validate(base().region("XX")),
            Err(ValidationError::InvalidValue { parameter: "region", .. })
        ));
    }

    #[test]
    fn unknown_verbs_pass_validation() {
        let request = Fixture::new()
            .validate(base().infinitive("nonexistent").obj("O1_Singular"))
            .unwrap();
        assert_eq!(request.infinitive, "nonexistent");
    }
}
