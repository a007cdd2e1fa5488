//! Stem derivation from a regional root.
//!
//! A root such as `dok̆vatums` decomposes into a preverb (`do`), the
//! class's lexical vowel if present, the bare root (`k̆vat`), a thematic
//! suffix (`um`) and the 3rd-singular ending (`s`). The present stem is
//! root + theme; the aorist stem is the bare root.

use crate::lexicon::VerbClass;
use crate::tables::{PREVERB_GROUPS, StemKind};

/// Thematic suffixes, tried in order.
const THEMES: [&str; 7] = ["am", "um", "ap", "up", "op", "ep", "em"];

/// How the citation root ends, which picks the present suffix series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    S,
    N,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stems {
    pub preverb: Option<&'static str>,
    pub lexical_vowel: Option<&'static str>,
    pub root: String,
    pub theme: &'static str,
    pub ending: Ending,
}

/// Split a leading preverb off `root`. Returns the canonical preverb and
/// the remainder; nothing is split off if it would consume the whole root.
pub fn extract_preverb(root: &str) -> (Option<&'static str>, &str) {
    for group in PREVERB_GROUPS {
        for surface in group.surfaces {
            if let Some(rest) = root.strip_prefix(surface) {
                if !rest.is_empty() {
                    return (Some(group.canonical), rest);
                }
            }
        }
    }
    (None, root)
}

impl Stems {
    /// Decompose a regional root. With `extract` unset the preverb is left
    /// in place.
    pub fn derive(root: &str, class: VerbClass, extract: bool) -> Stems {
        let (preverb, rest) = if extract {
            extract_preverb(root)
        } else {
            (None, root)
        };

        let (lexical_vowel, rest) = match class.lexical_vowel() {
            Some(vowel) => match rest.strip_prefix(vowel) {
                Some(stripped) if !stripped.is_empty() => (Some(vowel), stripped),
                _ => (None, rest),
            },
            None => (None, rest),
        };

        let (ending, rest) = if let Some(stem) = rest.strip_suffix('s') {
            (Ending::S, stem)
        } else if let Some(stem) = rest.strip_suffix('n') {
            (Ending::N, stem)
        } else {
            (Ending::S, rest)
        };

        let (root, theme) = THEMES
            .iter()
            .find_map(|theme| {
                rest.strip_suffix(theme)
                    .filter(|bare| !bare.is_empty())
                    .map(|bare| (bare, *theme))
            })
            .unwrap_or((rest, ""));

        Stems {
            preverb,
            lexical_vowel,
            root: root.to_string(),
            theme,
            ending,
        }
    }

    /// Replace the bare root, keeping the theme.
    pub fn with_root(mut self, root: &str) -> Stems {
        self.root = root.to_string();
        self
    }

    /// Replace the whole stem with an irregular one.
    pub fn irregular(mut self, stem: &str) -> Stems {
        self.root = stem.to_string();
        self.theme = "";
        self
    }

    pub fn present(&self) -> String {
        format!("{}{}", self.root, self.theme)
    }

    pub fn aorist(&self) -> &str {
        &self.root
    }

    pub fn stem(&self, kind: StemKind) -> String {
        match kind {
            StemKind::Present => self.present(),
            StemKind::Aorist => self.root.clone(),
        }
    }

    /// The causative stem: the theme is replaced by `apam`, or by `ap` on
    /// aorist forms.
    pub fn causative(&self, kind: StemKind) -> String {
        match kind {
            StemKind::Present => format!("{}apam", self.root),
            StemKind::Aorist => format!("{}ap", self.root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ergative_root_with_preverb() {
        let stems = Stems::derive("dok̆vatums", VerbClass::Ergative, true);
        assert_eq!(stems.preverb, Some("do"));
        assert_eq!(stems.present(), "k̆vatum");
        assert_eq!(stems.aorist(), "k̆vat");
        assert_eq!(stems.ending, Ending::S);
    }

    #[test]
    fn preverb_surface_variants_map_to_canonical() {
        assert_eq!(extract_preverb("gamçams"), (Some("gama"), "çams"));
        assert_eq!(extract_preverb("gamaçams"), (Some("gama"), "çams"));
        assert_eq!(extract_preverb("eyigzals"), (Some("e"), "igzals"));
        assert_eq!(extract_preverb("yigzals"), (Some("e"), "igzals"));
    }

    #[test]
    fn preverb_is_not_extracted_from_the_whole_root() {
        assert_eq!(extract_preverb("do"), (None, "do"));
        assert_eq!(extract_preverb("t̆axums"), (None, "t̆axums"));
    }

    #[test]
    fn extraction_can_be_suppressed() {
        let kept = Stems::derive("kosums", VerbClass::Ergative, false);
        assert_eq!(kept.preverb, None);
        assert_eq!(kept.aorist(), "kos");
        let split = Stems::derive("kosums", VerbClass::Ergative, true);
        assert_eq!(split.preverb, Some("ko"));
    }

    #[test]
    fn lexical_vowels() {
        let nominative = Stems::derive("ibgars", VerbClass::Nominative, true);
        assert_eq!(nominative.lexical_vowel, Some("i"));
        assert_eq!(nominative.present(), "bgar");

        let dative = Stems::derive("uyors", VerbClass::Dative, true);
        assert_eq!(dative.lexical_vowel, Some("u"));
        assert_eq!(dative.present(), "yor");
    }

    #[test]
    fn n_series_roots() {
        let stems = Stems::derive("ulun", VerbClass::Nominative, true);
        assert_eq!(stems.ending, Ending::N);
        assert_eq!(stems.lexical_vowel, None);
        assert_eq!(stems.present(), "ulu");
        assert_eq!(stems.irregular("id").present(), "id");
    }

    #[test]
    fn causative_replaces_the_theme() {
        let stems = Stems::derive("t̆axums", VerbClass::Ergative, true);
        assert_eq!(stems.causative(StemKind::Present), "t̆axapam");
        assert_eq!(stems.causative(StemKind::Aorist), "t̆axap");
    }

    #[test]
    fn forced_root_keeps_the_theme() {
        let stems = Stems::derive("gamçams", VerbClass::Ergative, true).with_root("ç");
        assert_eq!(stems.present(), "çam");
    }
}
