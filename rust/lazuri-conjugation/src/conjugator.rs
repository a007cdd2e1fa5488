//! Tense conjugators.
//!
//! Every paradigm is conjugated through the same [`Conjugator`] interface
//! with the same feature bundle, whether or not it uses every field. The
//! standard implementation, [`TableConjugator`], is one routine driven by
//! a [`MorphemeTable`]: derive the stems, choose the person prefix and
//! version vowel, fuse them with the preverb, then append the suffix.

use crate::config::Exceptions;
use crate::error::ConstraintError;
use crate::lexicon::Verb;
use crate::person::Slot;
use crate::phonology::{self, PrefixContext, Series};
use crate::region::Region;
use crate::stem::{Ending, Stems};
use crate::tables::{self, Agreement, MorphemeTable, Paradigm, SubTense, Version};

/// Whether a form is a statement, a command or a prohibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    #[default]
    Indicative,
    Imperative,
    Prohibitive,
}

/// The grammatical features of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub subject: Slot,
    pub object: Option<Slot>,
    pub sub_tense: SubTense,
    pub applicative: bool,
    pub causative: bool,
    pub optative: bool,
    pub polarity: Polarity,
    pub region: Region,
}

impl Features {
    pub fn new(subject: Slot, region: Region) -> Self {
        Features {
            subject,
            object: None,
            sub_tense: SubTense::Plain,
            applicative: false,
            causative: false,
            optative: false,
            polarity: Polarity::Indicative,
            region,
        }
    }

    pub fn object(mut self, object: Slot) -> Self {
        self.object = Some(object);
        self
    }

    pub fn sub_tense(mut self, sub_tense: SubTense) -> Self {
        self.sub_tense = sub_tense;
        self
    }

    pub fn applicative(mut self) -> Self {
        self.applicative = true;
        self
    }

    pub fn causative(mut self) -> Self {
        self.causative = true;
        self
    }

    pub fn optative(mut self) -> Self {
        self.optative = true;
        self
    }

    pub fn polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

pub trait Conjugator {
    fn paradigm(&self) -> Paradigm;

    /// Conjugate one cell. `Ok(None)` means this pipeline does not cover
    /// the cell: another class, a region without a root, or an object the
    /// paradigm has no slot for.
    fn conjugate(&self, verb: &Verb, features: &Features)
    -> Result<Option<String>, ConstraintError>;
}

/// Person prefix before allomorphy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PersonPrefix {
    /// 1st-person object or experiencer.
    M,
    Series(Series),
}

pub struct TableConjugator<'a> {
    table: &'a MorphemeTable,
    exceptions: &'a Exceptions,
}

impl<'a> TableConjugator<'a> {
    pub fn new(table: &'a MorphemeTable, exceptions: &'a Exceptions) -> Self {
        TableConjugator { table, exceptions }
    }

    fn check_features(&self, features: &Features) -> Result<(), ConstraintError> {
        let paradigm = self.table.paradigm;
        if features.applicative && !self.table.applicative {
            return Err(ConstraintError::ApplicativeUnsupported { paradigm });
        }
        if features.causative {
            if !self.table.causative {
                return Err(ConstraintError::CausativeUnsupported { paradigm });
            }
            if features.object.is_none() {
                return Err(ConstraintError::CausativeWithoutObject);
            }
        }
        if features.optative && !self.table.supports_optative() {
            return Err(ConstraintError::OptativeUnsupported { paradigm });
        }
        Ok(())
    }

    fn person_prefix(&self, features: &Features) -> Option<PersonPrefix> {
        let object = features.object.map(Slot::person);
        let subject = features.subject.person();
        match self.table.agreement {
            Agreement::Active => match (object, subject) {
                (Some(1), _) => Some(PersonPrefix::M),
                (Some(2), _) => Some(PersonPrefix::Series(Series::G)),
                (_, 1) => Some(PersonPrefix::Series(Series::V)),
                _ => None,
            },
            Agreement::Experiencer => match subject {
                1 => Some(PersonPrefix::M),
                2 => Some(PersonPrefix::Series(Series::G)),
                _ => None,
            },
        }
    }

    fn version_vowel(&self, stems: &Stems, features: &Features) -> &'static str {
        if features.causative {
            return "o";
        }
        if features.applicative {
            let third = features.object.is_some_and(|object| object.person() == 3);
            return if third { "u" } else { "i" };
        }
        match &self.table.version {
            Version::Lexical => stems.lexical_vowel.unwrap_or_default(),
            Version::Fixed(vowels) => vowels.get(features.subject),
        }
    }

    /// A 3rd-singular subject acting on a plural speech-act object agrees
    /// in number with the object.
    fn suffix_slot(&self, features: &Features) -> Slot {
        let plural_object = matches!(
            features.object,
            Some(Slot::FirstPlural | Slot::SecondPlural)
        );
        if self.table.agreement == Agreement::Active
            && features.subject == Slot::ThirdSingular
            && plural_object
        {
            Slot::SecondPlural
        } else {
            features.subject
        }
    }

    fn stems(&self, verb: &Verb, root: &str) -> Stems {
        let paradigm = self.table.paradigm;
        let extract = !self.exceptions.keep_preverb.contains(verb.infinitive());
        let stems = Stems::derive(root, paradigm.class, extract);
        if let Some(stem) = self.exceptions.irregular_stem(verb.infinitive(), paradigm.tense) {
            return stems.irregular(stem);
        }
        match stems.preverb.and_then(phonology::forced_root) {
            Some(forced) => stems.with_root(forced),
            None => stems,
        }
    }
}

impl Conjugator for TableConjugator<'_> {
    fn paradigm(&self) -> Paradigm {
        self.table.paradigm
    }

    fn conjugate(
        &self,
        verb: &Verb,
        features: &Features,
    ) -> Result<Option<String>, ConstraintError> {
        if let Some(object) = features.object {
            if Slot::is_coreferential(features.subject, object) {
                return Err(ConstraintError::Coreferential {
                    subject: features.subject,
                    object,
                });
            }
        }
        self.check_features(features)?;
        if verb.class() != self.table.paradigm.class {
            return Ok(None);
        }
        let Some(root) = verb.root(features.region) else {
            return Ok(None);
        };
        if features.object.is_some_and(|object| !self.table.objects.allows(object)) {
            return Ok(None);
        }

        let sub_tense = if features.optative {
            SubTense::Optative
        } else {
            features.sub_tense
        };
        let Some(form) = self.table.form(sub_tense) else {
            return Ok(None);
        };

        let stems = self.stems(verb, root);
        let stem = if features.causative {
            stems.causative(form.stem)
        } else {
            stems.stem(form.stem)
        };

        let version = self.version_vowel(&stems, features);
        let following = if version.is_empty() {
            phonology::first_phoneme(&stem)
        } else {
            phonology::first_phoneme(version)
        };
        let agreement = match self.person_prefix(features) {
            Some(PersonPrefix::M) => "m",
            Some(PersonPrefix::Series(series)) => series.allomorph(following, features.region),
            None => "",
        };
        let marker = format!("{agreement}{version}");

        let prefix = phonology::resolve_prefix(&PrefixContext {
            preverb: stems.preverb,
            region: features.region,
            subject: features.subject,
            object: features.object,
            marker: &marker,
            glide_preverb: self.exceptions.glide_preverb.contains(verb.infinitive()),
        });

        let suffixes = match stems.ending {
            Ending::N if !features.causative => &form.suffixes.n_series,
            _ => &form.suffixes.s_series,
        };
        let suffix = suffixes
            .get(features.region)
            .get(self.suffix_slot(features));

        let mut surface = format!("{}{stem}{suffix}", prefix.text);
        if features.polarity == Polarity::Prohibitive {
            surface = format!("{} {surface}", tables::prohibitive(features.region));
        }
        if let Some(head) = verb.compound_head() {
            surface = format!("{head} {surface}");
        }
        Ok(Some(surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, VerbClass};
    use crate::sample;
    use crate::tables::{Grammar, Tense};
    use pretty_assertions::assert_eq;

    struct Fixture {
        grammar: Grammar,
        exceptions: Exceptions,
        lexicon: crate::lexicon::MemoryLexicon,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture {
                grammar: Grammar::standard(),
                exceptions: Exceptions::standard(),
                lexicon: sample::lexicon(),
            }
        }

        fn conjugate(
            &self,
            infinitive: &str,
            tense: Tense,
            features: Features,
        ) -> Result<Option<String>, ConstraintError> {
            let verb = self.lexicon.lookup(infinitive).unwrap();
            let table = self
                .grammar
                .table(Paradigm::new(verb.class(), tense))
                .unwrap();
            TableConjugator::new(table, &self.exceptions).conjugate(verb, &features)
        }

        fn form(&self, infinitive: &str, tense: Tense, features: Features) -> String {
            self.conjugate(infinitive, tense, features).unwrap().unwrap()
        }
    }

    fn cell(subject: Slot) -> Features {
        Features::new(subject, Region::As)
    }

    #[test]
    fn ergative_present() {
        let fixture = Fixture::new();
        let forms: Vec<String> = Slot::ALL
            .into_iter()
            .map(|slot| fixture.form("ot̆axu", Tense::Present, cell(slot)))
            .collect();
        assert_eq!(
            forms,
            vec!["p̌t̆axum", "t̆axum", "t̆axums", "p̌t̆axumt", "t̆axumt", "t̆axuman"]
        );
    }

    #[test]
    fn ergative_past_and_future() {
        let fixture = Fixture::new();
        assert_eq!(fixture.form("ot̆axu", Tense::Past, cell(Slot::FirstSingular)), "p̌t̆axi");
        assert_eq!(fixture.form("ot̆axu", Tense::Past, cell(Slot::ThirdPlural)), "t̆axes");
        assert_eq!(
            fixture.form(
                "ot̆axu",
                Tense::Present,
                cell(Slot::FirstSingular).sub_tense(SubTense::Future)
            ),
            "p̌t̆axare"
        );
    }

    #[test]
    fn past_progressive_in_hopa() {
        let fixture = Fixture::new();
        let features = Features::new(Slot::FirstSingular, Region::Ho)
            .sub_tense(SubTense::PastProgressive);
        assert_eq!(fixture.form("oç̌aru", Tense::Present, features), "p̌ç̌arumti");
        let features = cell(Slot::FirstSingular).sub_tense(SubTense::PastProgressive);
        assert_eq!(fixture.form("oç̌aru", Tense::Present, features), "p̌ç̌arumt̆i");
    }

    #[test]
    fn object_agreement() {
        let fixture = Fixture::new();
        let him_me = cell(Slot::ThirdSingular).object(Slot::FirstSingular);
        assert_eq!(fixture.form("ot̆axu", Tense::Present, him_me), "mt̆axums");
        let me_you = cell(Slot::FirstSingular).object(Slot::SecondSingular);
        assert_eq!(fixture.form("ot̆axu", Tense::Present, me_you), "k̆t̆axum");
        let him_us = cell(Slot::ThirdSingular).object(Slot::FirstPlural);
        assert_eq!(fixture.form("ot̆axu", Tense::Present, him_us), "mt̆axumt");
    }

    #[test]
    fn coreferential_cells_are_rejected() {
        let fixture = Fixture::new();
        let features = cell(Slot::FirstSingular).object(Slot::FirstPlural);
        assert_eq!(
            fixture.conjugate("ot̆axu", Tense::Present, features),
            Err(ConstraintError::Coreferential {
                subject: Slot::FirstSingular,
                object: Slot::FirstPlural,
            })
        );
    }

    #[test]
    fn preverbs() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.form("dok̆vatu", Tense::Present, cell(Slot::FirstSingular)),
            "dop̌k̆vatum"
        );
        assert_eq!(fixture.form("meçamu", Tense::Present, cell(Slot::FirstSingular)), "mepçam");
        let applied = cell(Slot::ThirdSingular).object(Slot::ThirdSingular).applicative();
        assert_eq!(fixture.form("meçamu", Tense::Present, applied), "nuçams");
        let glide = cell(Slot::ThirdSingular).object(Slot::ThirdSingular).applicative();
        assert_eq!(fixture.form("geçamu", Tense::Present, glide), "gyuçams");
    }

    #[test]
    fn gama_forces_its_root() {
        let fixture = Fixture::new();
        let fa = Features::new(Slot::FirstSingular, Region::Fa);
        assert_eq!(fixture.form("gamaçamu", Tense::Present, fa), "gamopçam");
        assert_eq!(fixture.form("gamaçamu", Tense::Present, cell(Slot::ThirdSingular)), "gamçams");
    }

    #[test]
    fn e_preverb_glides_by_region() {
        let fixture = Fixture::new();
        let pz = Features::new(Slot::ThirdSingular, Region::Pz);
        assert_eq!(fixture.form("egzalu", Tense::Present, pz), "eyigzals");
        assert_eq!(fixture.form("egzalu", Tense::Present, cell(Slot::ThirdSingular)), "yigzals");
        assert_eq!(fixture.form("egzalu", Tense::Present, cell(Slot::FirstSingular)), "ebigzal");
    }

    #[test]
    fn keep_preverb_exception() {
        let fixture = Fixture::new();
        assert_eq!(fixture.form("okosu", Tense::Present, cell(Slot::FirstSingular)), "pkosum");
    }

    #[test]
    fn nominative_and_irregular_stems() {
        let fixture = Fixture::new();
        assert_eq!(fixture.form("obgaru", Tense::Present, cell(Slot::FirstSingular)), "bibgar");
        assert_eq!(fixture.form("ulva", Tense::Present, cell(Slot::FirstSingular)), "bulur");
        assert_eq!(fixture.form("ulva", Tense::Present, cell(Slot::ThirdSingular)), "ulun");
        assert_eq!(fixture.form("ulva", Tense::Past, cell(Slot::FirstSingular)), "bidi");
        assert_eq!(fixture.form("ulva", Tense::Past, cell(Slot::ThirdSingular)), "idu");
    }

    #[test]
    fn dative_present() {
        let fixture = Fixture::new();
        let forms: Vec<String> = Slot::ALL
            .into_iter()
            .map(|slot| fixture.form("oyoropu", Tense::Present, cell(slot)))
            .collect();
        assert_eq!(
            forms,
            vec!["miyors", "giyors", "uyors", "miyort", "giyort", "uyoran"]
        );
    }

    #[test]
    fn experiencer_tables() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.form("ot̆axu", Tense::PresentPerfect, cell(Slot::FirstSingular)),
            "mit̆axun"
        );
        assert_eq!(
            fixture.form("ot̆axu", Tense::PresentPerfect, cell(Slot::ThirdSingular)),
            "ut̆axun"
        );
        assert_eq!(
            fixture.form("ot̆axu", Tense::Potential, cell(Slot::FirstSingular)),
            "mat̆axen"
        );
        let with_you = cell(Slot::ThirdSingular).object(Slot::SecondSingular);
        assert_eq!(fixture.conjugate("ot̆axu", Tense::PresentPerfect, with_you), Ok(None));
        let with_it = cell(Slot::FirstSingular).object(Slot::ThirdSingular);
        assert_eq!(
            fixture.form("ot̆axu", Tense::PresentPerfect, with_it),
            "mit̆axun"
        );
    }

    #[test]
    fn passive() {
        let fixture = Fixture::new();
        assert_eq!(fixture.form("ot̆axu", Tense::Passive, cell(Slot::FirstSingular)), "bit̆axer");
        assert_eq!(fixture.form("ot̆axu", Tense::Passive, cell(Slot::ThirdSingular)), "it̆axen");
    }

    #[test]
    fn causative() {
        let fixture = Fixture::new();
        let features = cell(Slot::ThirdSingular).object(Slot::ThirdSingular).causative();
        assert_eq!(fixture.form("ot̆axu", Tense::Present, features), "ot̆axapams");
        assert_eq!(fixture.form("ot̆axu", Tense::Past, features), "ot̆axapu");
        assert_eq!(
            fixture.conjugate("ot̆axu", Tense::Present, cell(Slot::ThirdSingular).causative()),
            Err(ConstraintError::CausativeWithoutObject)
        );
    }

    #[test]
    fn unsupported_voice_and_mood() {
        let fixture = Fixture::new();
        let paradigm = Paradigm::new(VerbClass::Ergative, Tense::PresentPerfect);
        assert_eq!(
            fixture.conjugate("ot̆axu", Tense::PresentPerfect, cell(Slot::FirstSingular).applicative()),
            Err(ConstraintError::ApplicativeUnsupported { paradigm })
        );
        let with_you = cell(Slot::ThirdSingular).object(Slot::SecondSingular).applicative();
        assert_eq!(
            fixture.conjugate("ot̆axu", Tense::PresentPerfect, with_you),
            Err(ConstraintError::ApplicativeUnsupported { paradigm })
        );
        let present = Paradigm::new(VerbClass::Ergative, Tense::Present);
        assert_eq!(
            fixture.conjugate("ot̆axu", Tense::Present, cell(Slot::FirstSingular).optative()),
            Err(ConstraintError::OptativeUnsupported { paradigm: present })
        );
        assert_eq!(
            fixture.form("ot̆axu", Tense::Past, cell(Slot::ThirdSingular).optative()),
            "t̆axas"
        );
    }

    #[test]
    fn negative_imperative_and_compounds() {
        let fixture = Fixture::new();
        let ho = Features::new(Slot::SecondSingular, Region::Ho).polarity(Polarity::Prohibitive);
        assert_eq!(fixture.form("ot̆axu", Tense::Present, ho), "mot t̆axum");
        let compound = cell(Slot::SecondSingular).polarity(Polarity::Prohibitive);
        assert_eq!(fixture.form("nena oç̌aru", Tense::Present, compound), "nena mo ç̌arum");
        assert_eq!(
            fixture.form("nena oç̌aru", Tense::Past, cell(Slot::FirstSingular)),
            "nena p̌ç̌ari"
        );
    }

    #[test]
    fn other_classes_and_missing_regions_do_not_contribute() {
        let fixture = Fixture::new();
        let verb = fixture.lexicon.lookup("ogzalu").unwrap();
        let table = fixture
            .grammar
            .table(Paradigm::new(VerbClass::Nominative, Tense::Present))
            .unwrap();
        let conjugator = TableConjugator::new(table, &fixture.exceptions);
        let ho = Features::new(Slot::ThirdSingular, Region::Ho);
        assert_eq!(conjugator.conjugate(verb, &ho), Ok(None));

        let ergative = fixture
            .grammar
            .table(Paradigm::new(VerbClass::Ergative, Tense::Present))
            .unwrap();
        let conjugator = TableConjugator::new(ergative, &fixture.exceptions);
        assert_eq!(conjugator.conjugate(verb, &cell(Slot::ThirdSingular)), Ok(None));
    }
}
