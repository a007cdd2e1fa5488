//! Morpheme tables.
//!
//! Every paradigm the engine can produce is a [`MorphemeTable`] keyed by
//! `(VerbClass, Tense)`. A table carries the pronoun case its subjects are
//! rendered in, the agreement strategy, the version vowel, which objects
//! and voice flags it accepts, and one [`Form`] per sub-tense (stem kind
//! plus a region-conditioned suffix set). The conjugator is a single
//! routine driven entirely by this data.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::lexicon::VerbClass;
use crate::person::{PersonTable, Slot};
use crate::region::{Region, Regional};

/// Concrete tense or aspect paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Past,
    PresentPerfect,
    Potential,
    Passive,
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Past => write!(f, "past"),
            Self::PresentPerfect => write!(f, "present perfect"),
            Self::Potential => write!(f, "potential"),
            Self::Passive => write!(f, "passive"),
        }
    }
}

/// A form embedded in a paradigm: the future and past progressive live in
/// the present tables, the optative in the past tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTense {
    #[default]
    Plain,
    Future,
    PastProgressive,
    Optative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Paradigm {
    pub class: VerbClass,
    pub tense: Tense,
}

impl Paradigm {
    pub const fn new(class: VerbClass, tense: Tense) -> Self {
        Paradigm { class, tense }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the {} {}", self.class, self.tense)
    }
}

/// Case of the pronouns a paradigm's subjects are rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Ergative,
    Dative,
}

/// Which argument the person prefix agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    /// Object prefixes (`m`, `g`) outrank the 1st-person subject `v`.
    Active,
    /// The subject is an experiencer and takes the `m`/`g` prefixes.
    Experiencer,
}

/// Vowel placed between the person prefix and the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
    /// Whatever vowel the citation root carried.
    Lexical,
    /// A fixed vowel per subject slot.
    Fixed(PersonTable<&'static str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectPolicy {
    Any,
    ThirdPersonOnly,
    None,
}

impl ObjectPolicy {
    pub fn allows(self, object: Slot) -> bool {
        match self {
            ObjectPolicy::Any => true,
            ObjectPolicy::ThirdPersonOnly => !object.is_speech_act(),
            ObjectPolicy::None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemKind {
    /// Root with its thematic suffix.
    Present,
    /// Bare root.
    Aorist,
}

/// Suffixes per region and slot.
pub type Suffixes = Regional<PersonTable<&'static str>>;

/// Suffix sets for the two present endings: roots citing in `-s` and roots
/// citing in `-n` (the `-r/-n` intransitives).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSet {
    pub s_series: Suffixes,
    pub n_series: Suffixes,
}

impl SuffixSet {
    /// Same suffixes for both series.
    pub fn uniform(suffixes: Suffixes) -> Self {
        SuffixSet {
            s_series: suffixes.clone(),
            n_series: suffixes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub stem: StemKind,
    pub suffixes: SuffixSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeTable {
    pub paradigm: Paradigm,
    pub pronouns: Case,
    pub agreement: Agreement,
    pub version: Version,
    pub objects: ObjectPolicy,
    pub applicative: bool,
    pub causative: bool,
    pub forms: Vec<(SubTense, Form)>,
}

impl MorphemeTable {
    pub fn form(&self, sub_tense: SubTense) -> Option<&Form> {
        self.forms
            .iter()
            .find(|(candidate, _)| *candidate == sub_tense)
            .map(|(_, form)| form)
    }

    pub fn supports_optative(&self) -> bool {
        self.form(SubTense::Optative).is_some()
    }

    pub fn subject_pronoun(&self, slot: Slot, region: Region) -> &'static str {
        pronoun(self.pronouns, slot, region)
    }
}

/// The full set of morpheme tables, keyed by paradigm.
#[derive(Debug, Clone)]
pub struct Grammar {
    tables: HashMap<Paradigm, MorphemeTable>,
}

impl Grammar {
    pub fn new(tables: impl IntoIterator<Item = MorphemeTable>) -> Self {
        Grammar {
            tables: tables
                .into_iter()
                .map(|table| (table.paradigm, table))
                .collect(),
        }
    }

    pub fn table(&self, paradigm: Paradigm) -> Option<&MorphemeTable> {
        self.tables.get(&paradigm)
    }

    pub fn paradigms(&self) -> impl Iterator<Item = Paradigm> + '_ {
        self.tables.keys().copied()
    }

    /// The eleven paradigms of the standard grammar.
    pub fn standard() -> Self {
        use VerbClass::*;

        let mut tables = Vec::new();
        for class in [Nominative, Ergative] {
            tables.push(active_present(class));
            tables.push(active_past(class));
            tables.push(experiencer(class, Tense::PresentPerfect));
            tables.push(experiencer(class, Tense::Potential));
        }
        tables.push(passive());
        tables.push(dative_present());
        tables.push(dative_past());
        Grammar::new(tables)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::standard()
    }
}

fn same(values: [&'static str; 6]) -> Suffixes {
    Regional::uniform(PersonTable::new(values))
}

fn form(stem: StemKind, suffixes: Suffixes) -> Form {
    Form {
        stem,
        suffixes: SuffixSet::uniform(suffixes),
    }
}

/// Past progressive endings. Hopa uses a plain `t`; `-n` roots insert `r`.
fn past_progressive(n_series: bool) -> Suffixes {
    let (ejective, plain) = if n_series {
        (
            ["rt̆i", "rt̆i", "rt̆u", "rt̆it", "rt̆it", "rt̆es"],
            ["rti", "rti", "rtu", "rtit", "rtit", "rtes"],
        )
    } else {
        (
            ["t̆i", "t̆i", "t̆u", "t̆it", "t̆it", "t̆es"],
            ["ti", "ti", "tu", "tit", "tit", "tes"],
        )
    };
    same(ejective).with(Region::Ho, PersonTable::new(plain))
}

fn active_present(class: VerbClass) -> MorphemeTable {
    MorphemeTable {
        paradigm: Paradigm::new(class, Tense::Present),
        pronouns: if class == VerbClass::Ergative {
            Case::Ergative
        } else {
            Case::Nominative
        },
        agreement: Agreement::Active,
        version: Version::Lexical,
        objects: ObjectPolicy::Any,
        applicative: true,
        causative: true,
        forms: vec![
            (
                SubTense::Plain,
                Form {
                    stem: StemKind::Present,
                    suffixes: SuffixSet {
                        s_series: same(["", "", "s", "t", "t", "an"]),
                        n_series: same(["r", "r", "n", "rt", "rt", "nan"]),
                    },
                },
            ),
            (
                SubTense::Future,
                form(
                    StemKind::Aorist,
                    same(["are", "are", "asere", "atere", "atere", "anere"]),
                ),
            ),
            (
                SubTense::PastProgressive,
                Form {
                    stem: StemKind::Present,
                    suffixes: SuffixSet {
                        s_series: past_progressive(false),
                        n_series: past_progressive(true),
                    },
                },
            ),
        ],
    }
}

fn active_past(class: VerbClass) -> MorphemeTable {
    MorphemeTable {
        paradigm: Paradigm::new(class, Tense::Past),
        forms: vec![
            (
                SubTense::Plain,
                form(StemKind::Aorist, same(["i", "i", "u", "it", "it", "es"])),
            ),
            (
                SubTense::Optative,
                form(StemKind::Aorist, same(["a", "a", "as", "at", "at", "an"])),
            ),
        ],
        ..active_present(class)
    }
}

/// Present perfect and potential share the experiencer shape.
fn experiencer(class: VerbClass, tense: Tense) -> MorphemeTable {
    let (version, suffixes) = match tense {
        Tense::Potential => (
            Version::Fixed(PersonTable::uniform("a")),
            same(["en", "en", "en", "ent", "ent", "enan"]),
        ),
        _ => (
            Version::Fixed(PersonTable::new(["i", "i", "u", "i", "i", "u"])),
            same(["un", "un", "un", "unan", "unan", "unan"]),
        ),
    };
    let pronouns = match (class, tense) {
        (VerbClass::Ergative, Tense::PresentPerfect) => Case::Ergative,
        _ => Case::Dative,
    };
    MorphemeTable {
        paradigm: Paradigm::new(class, tense),
        pronouns,
        agreement: Agreement::Experiencer,
        version,
        objects: ObjectPolicy::ThirdPersonOnly,
        applicative: false,
        causative: false,
        forms: vec![(SubTense::Plain, form(StemKind::Aorist, suffixes))],
    }
}

fn passive() -> MorphemeTable {
    MorphemeTable {
        paradigm: Paradigm::new(VerbClass::Ergative, Tense::Passive),
        pronouns: Case::Nominative,
        agreement: Agreement::Active,
        version: Version::Fixed(PersonTable::uniform("i")),
        objects: ObjectPolicy::None,
        applicative: false,
        causative: false,
        forms: vec![(
            SubTense::Plain,
            form(StemKind::Aorist, same(["er", "er", "en", "ert", "ert", "enan"])),
        )],
    }
}

fn dative_present() -> MorphemeTable {
    MorphemeTable {
        paradigm: Paradigm::new(VerbClass::Dative, Tense::Present),
        pronouns: Case::Dative,
        agreement: Agreement::Experiencer,
        version: Version::Fixed(PersonTable::new(["i", "i", "u", "i", "i", "u"])),
        objects: ObjectPolicy::None,
        applicative: false,
        causative: false,
        forms: vec![
            (
                SubTense::Plain,
                form(StemKind::Present, same(["s", "s", "s", "t", "t", "an"])),
            ),
            (
                SubTense::Future,
                form(
                    StemKind::Aorist,
                    same(["asere", "asere", "asere", "atere", "atere", "anere"]),
                ),
            ),
            (
                SubTense::PastProgressive,
                form(
                    StemKind::Present,
                    same(["t̆u", "t̆u", "t̆u", "t̆it", "t̆it", "t̆es"])
                        .with(Region::Ho, PersonTable::new(["tu", "tu", "tu", "tit", "tit", "tes"])),
                ),
            ),
        ],
    }
}

fn dative_past() -> MorphemeTable {
    MorphemeTable {
        paradigm: Paradigm::new(VerbClass::Dative, Tense::Past),
        forms: vec![
            (
                SubTense::Plain,
                form(StemKind::Aorist, same(["u", "u", "u", "it", "it", "es"])),
            ),
            (
                SubTense::Optative,
                form(StemKind::Aorist, same(["as", "as", "as", "at", "at", "an"])),
            ),
        ],
        ..dative_present()
    }
}

/// A group of surface spellings that all extract to one preverb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreverbGroup {
    pub canonical: &'static str,
    pub surfaces: &'static [&'static str],
}

/// Preverbs in match order. Within a group the surfaces are tried in the
/// listed order.
pub const PREVERB_GROUPS: &[PreverbGroup] = &[
    PreverbGroup { canonical: "gama", surfaces: &["gama", "gam"] },
    PreverbGroup { canonical: "gela", surfaces: &["gela", "gel"] },
    PreverbGroup { canonical: "mola", surfaces: &["mola"] },
    PreverbGroup { canonical: "ela", surfaces: &["ela"] },
    PreverbGroup { canonical: "ok̆o", surfaces: &["ok̆o"] },
    PreverbGroup { canonical: "eşk̆a", surfaces: &["eşk̆a"] },
    PreverbGroup { canonical: "do", surfaces: &["do"] },
    PreverbGroup { canonical: "ce", surfaces: &["ce"] },
    PreverbGroup { canonical: "go", surfaces: &["go"] },
    PreverbGroup { canonical: "ge", surfaces: &["ge"] },
    PreverbGroup { canonical: "me", surfaces: &["me"] },
    PreverbGroup { canonical: "mo", surfaces: &["mo"] },
    PreverbGroup { canonical: "ko", surfaces: &["ko"] },
    PreverbGroup { canonical: "e", surfaces: &["ey", "e", "y"] },
];

type PronounTable = PersonTable<Regional<&'static str>>;

const fn everywhere(pronoun: &'static str) -> Regional<&'static str> {
    Regional::new(pronoun, pronoun, pronoun, pronoun)
}

const FIRST_PLURAL: Regional<&str> = Regional::new("çki", "şk̆u", "şk̆u", "şkun");
const SECOND_PLURAL: Regional<&str> = Regional::new("tkva", "tkva", "tkva", "tkvan");

const NOMINATIVE: PronounTable = PersonTable::new([
    everywhere("ma"),
    everywhere("si"),
    Regional::new("haya", "himu", "heya", "ham"),
    FIRST_PLURAL,
    SECOND_PLURAL,
    Regional::new("hentepe", "hini", "hinti", "hamtepe"),
]);

const ERGATIVE: PronounTable = PersonTable::new([
    everywhere("ma"),
    everywhere("si"),
    Regional::new("hayak", "himuk", "heyak", "hamk"),
    FIRST_PLURAL,
    SECOND_PLURAL,
    Regional::new("hentepek", "hinik", "hintik", "hamtepek"),
]);

const DATIVE: PronounTable = PersonTable::new([
    everywhere("ma"),
    everywhere("si"),
    Regional::new("hayas", "himus", "heyas", "hams"),
    FIRST_PLURAL,
    SECOND_PLURAL,
    Regional::new("hentepes", "hinis", "hintis", "hamtepes"),
]);

pub fn pronoun(case: Case, slot: Slot, region: Region) -> &'static str {
    let table = match case {
        Case::Nominative => &NOMINATIVE,
        Case::Ergative => &ERGATIVE,
        Case::Dative => &DATIVE,
    };
    table.get(slot).get(region)
}

/// Objects are rendered with nominative pronouns in every paradigm.
pub fn object_pronoun(slot: Slot, region: Region) -> &'static str {
    pronoun(Case::Nominative, slot, region)
}

/// Particle of the negative imperative.
pub fn prohibitive(region: Region) -> &'static str {
    match region {
        Region::Ho => "mot",
        _ => "mo",
    }
}
