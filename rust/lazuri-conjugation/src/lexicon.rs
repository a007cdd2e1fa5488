//! Read-only view of the verb lexicon.
//!
//! The lexicon itself is curated upstream; the engine only needs to look a
//! verb up by infinitive and read its class and regional roots. A regional
//! root is the verb's 3rd-person singular present form in that region.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::LoadError;
use crate::region::Region;

/// Argument-alignment class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    Nominative,
    Ergative,
    Dative,
}

impl VerbClass {
    /// The version vowel a root of this class carries in its citation form.
    pub fn lexical_vowel(self) -> Option<&'static str> {
        match self {
            VerbClass::Nominative => Some("i"),
            VerbClass::Ergative => None,
            VerbClass::Dative => Some("u"),
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominative => write!(f, "nominative"),
            Self::Ergative => write!(f, "ergative"),
            Self::Dative => write!(f, "dative"),
        }
    }
}

/// A lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verb {
    infinitive: String,
    class: VerbClass,
    roots: BTreeMap<Region, String>,
    #[serde(default)]
    translations: BTreeMap<String, String>,
}

impl Verb {
    pub fn builder(infinitive: impl Into<String>, class: VerbClass) -> VerbBuilder {
        VerbBuilder::new(infinitive, class)
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    pub fn class(&self) -> VerbClass {
        self.class
    }

    pub fn root(&self, region: Region) -> Option<&str> {
        self.roots.get(&region).map(String::as_str)
    }

    /// Regions this verb is attested in, in response order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.roots.keys().copied()
    }

    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }

    /// The leading word of a multi-word infinitive (`nena` in
    /// `nena oç̌aru`). Conjugated forms repeat it before the verb.
    pub fn compound_head(&self) -> Option<&str> {
        self.infinitive
            .split_once(' ')
            .map(|(head, _)| head)
            .filter(|head| !head.is_empty())
    }
}

/// Builder for lexicon entries.
pub struct VerbBuilder {
    infinitive: String,
    class: VerbClass,
    roots: BTreeMap<Region, String>,
    translations: BTreeMap<String, String>,
}

impl VerbBuilder {
    pub fn new(infinitive: impl Into<String>, class: VerbClass) -> Self {
        VerbBuilder {
            infinitive: infinitive.into(),
            class,
            roots: BTreeMap::new(),
            translations: BTreeMap::new(),
        }
    }

    pub fn root(mut self, region: Region, root: impl Into<String>) -> Self {
        self.roots.insert(region, root.into());
        self
    }

    /// Shorthand: the same root in every region.
    pub fn everywhere(mut self, root: &str) -> Self {
        for region in Region::ALL {
            self.roots.insert(region, root.to_string());
        }
        self
    }

    pub fn translation(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(language.into(), text.into());
        self
    }

    pub fn build(self) -> Verb {
        Verb {
            infinitive: self.infinitive,
            class: self.class,
            roots: self.roots,
            translations: self.translations,
        }
    }
}

/// Lookup capability the engine needs from a lexicon.
pub trait Lexicon {
    fn lookup(&self, infinitive: &str) -> Option<&Verb>;

    /// Every entry, for listing. Lexicons that cannot enumerate yield
    /// nothing.
    fn verbs(&self) -> Box<dyn Iterator<Item = &Verb> + '_> {
        Box::new(std::iter::empty())
    }
}

/// A lexicon held in memory, keyed by infinitive.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    entries: BTreeMap<String, Verb>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any entry with the same infinitive.
    pub fn insert(&mut self, verb: Verb) {
        self.entries.insert(verb.infinitive.clone(), verb);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a JSON array of entries. Infinitives are normalized the way
    /// requests are, and must be unique after normalization.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let verbs: Vec<Verb> = serde_json::from_str(json)?;
        let mut lexicon = MemoryLexicon::new();
        for mut verb in verbs {
            verb.infinitive = verb.infinitive.trim().to_lowercase();
            if lexicon.entries.contains_key(&verb.infinitive) {
                return Err(LoadError::DuplicateVerb(verb.infinitive));
            }
            lexicon.insert(verb);
        }
        Ok(lexicon)
    }
}

impl FromIterator<Verb> for MemoryLexicon {
    fn from_iter<I: IntoIterator<Item = Verb>>(iter: I) -> Self {
        let mut lexicon = MemoryLexicon::new();
        for verb in iter {
            lexicon.insert(verb);
        }
        lexicon
    }
}

impl Lexicon for MemoryLexicon {
    fn lookup(&self, infinitive: &str) -> Option<&Verb> {
        self.entries.get(infinitive)
    }

    fn verbs(&self) -> Box<dyn Iterator<Item = &Verb> + '_> {
        Box::new(self.entries.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_json_with_region_aliases() {
        let lexicon = MemoryLexicon::from_json(
            r#"[
                {
                    "infinitive": "Ot̆axu ",
                    "class": "ergative",
                    "roots": { "FA": "t̆axums", "AS": "t̆axums" },
                    "translations": { "en": "to break" }
                }
            ]"#,
        )
        .unwrap();
        let verb = lexicon.lookup("ot̆axu").unwrap();
        assert_eq!(verb.class(), VerbClass::Ergative);
        assert_eq!(verb.root(Region::As), Some("t̆axums"));
        assert_eq!(verb.root(Region::Ho), None);
        assert_eq!(verb.regions().collect::<Vec<_>>(), vec![Region::Fa, Region::As]);
        assert_eq!(verb.translation("en"), Some("to break"));
    }

    #[test]
    fn rejects_duplicates() {
        let error = MemoryLexicon::from_json(
            r#"[
                { "infinitive": "ulva", "class": "nominative", "roots": {} },
                { "infinitive": "ULVA", "class": "nominative", "roots": {} }
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(error, LoadError::DuplicateVerb(name) if name == "ulva"));
    }

    #[test]
    fn rejects_malformed_documents() {
        let error = MemoryLexicon::from_json(r#"{ "infinitive": "ulva" }"#).unwrap_err();
        assert!(matches!(error, LoadError::Json(_)));
    }

    #[test]
    fn compound_head_is_the_first_word() {
        let compound = Verb::builder("nena oç̌aru", VerbClass::Ergative).build();
        assert_eq!(compound.compound_head(), Some("nena"));
        let simple = Verb::builder("oç̌aru", VerbClass::Ergative).build();
        assert_eq!(simple.compound_head(), None);
    }

    #[test]
    fn builder_fills_every_region() {
        let verb = Verb::builder("oç̌aru", VerbClass::Ergative)
            .everywhere("ç̌arums")
            .build();
        assert_eq!(verb.regions().count(), 4);
    }
}
