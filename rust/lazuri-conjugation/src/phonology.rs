//! Phonology: phoneme segmentation, consonant allomorphy and the
//! preverb/person-prefix junction rules.
//!
//! Laz orthography writes ejectives with a combining diacritic (`t̆`, `k̆`,
//! `p̌`, `ç̌`, `ʒ̆`), so a phoneme is a base letter followed by any combining
//! marks. Everything in this module works on those clusters rather than
//! on `char`s.

use tracing::trace;

use crate::person::Slot;
use crate::region::Region;

const BREVE: char = '\u{306}';
const CARON: char = '\u{30C}';
const CEDILLA: char = '\u{327}';

fn is_combining(c: char) -> bool {
    ('\u{300}'..='\u{36F}').contains(&c)
}

/// Split text into phonemes: a base letter plus trailing combining marks.
pub fn phonemes(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = None;
    for (index, c) in text.char_indices() {
        if is_combining(c) {
            continue;
        }
        if let Some(begin) = start {
            out.push(&text[begin..index]);
        }
        start = Some(index);
    }
    if let Some(begin) = start {
        out.push(&text[begin..]);
    }
    out
}

pub fn first_phoneme(text: &str) -> Option<&str> {
    phonemes(text).into_iter().next()
}

pub fn last_phoneme(text: &str) -> Option<&str> {
    phonemes(text).pop()
}

/// Drop the final phoneme, diacritics included.
pub fn without_last_phoneme(text: &str) -> &str {
    match last_phoneme(text) {
        Some(last) => &text[..text.len() - last.len()],
        None => text,
    }
}

pub fn is_vowel(phoneme: &str) -> bool {
    matches!(
        phoneme.chars().next(),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'ı')
    )
}

pub fn starts_with_vowel(text: &str) -> bool {
    first_phoneme(text).is_some_and(is_vowel)
}

pub fn ends_with_vowel(text: &str) -> bool {
    last_phoneme(text).is_some_and(is_vowel)
}

/// Classes a phoneme falls into for the purpose of person-prefix
/// allomorphy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    Vowel,
    /// Labial stops and fricatives: `b p f m`.
    Labial,
    /// Voiced dental, affricate and velar obstruents.
    Voiced,
    /// Voiceless aspirated obstruents and fricatives.
    Aspirate,
    /// Glottalized stops and affricates.
    Ejective,
    /// Nasals, liquids and (outside FA) glides.
    Sonorant,
}

/// Reduce a phoneme to its base letter, folding decomposed cedillas and
/// `g` + breve into the precomposed letters. The flag reports whether an
/// ejective diacritic was present.
fn base_letter(phoneme: &str) -> Option<(char, bool)> {
    let mut chars = phoneme.chars();
    let base = chars.next()?;
    let marks: Vec<char> = chars.collect();
    let cedilla = marks.contains(&CEDILLA);
    let mut ejective = marks.iter().any(|m| *m == BREVE || *m == CARON);
    let base = match (base, cedilla) {
        ('c', true) => 'ç',
        ('s', true) => 'ş',
        ('g', _) if ejective => {
            ejective = false;
            'ğ'
        }
        (other, _) => other,
    };
    Some((base, ejective))
}

/// Classify a phoneme. Region FA partitions the glides `v`/`y` with the
/// voiced obstruents and `ğ` with the sonorants.
pub fn classify(phoneme: &str, region: Region) -> PhonemeClass {
    let Some((base, ejective)) = base_letter(phoneme) else {
        return PhonemeClass::Sonorant;
    };
    if is_vowel(phoneme) {
        return PhonemeClass::Vowel;
    }
    if base == 'q' || (ejective && matches!(base, 'p' | 't' | 'k' | 'ç' | 'ʒ')) {
        return PhonemeClass::Ejective;
    }
    let fa = region == Region::Fa;
    match base {
        'b' | 'p' | 'f' | 'm' => PhonemeClass::Labial,
        'd' | 'g' | 'c' | 'ʒ' | 'z' | 'j' => PhonemeClass::Voiced,
        'v' | 'y' if fa => PhonemeClass::Voiced,
        'ğ' if !fa => PhonemeClass::Voiced,
        't' | 'k' | 'ç' | 's' | 'ş' | 'x' | 'h' => PhonemeClass::Aspirate,
        _ => PhonemeClass::Sonorant,
    }
}

/// Person prefixes whose shape depends on the following phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// 1st-person subject: `v` and its allomorphs `b`, `p`, `p̌`, zero.
    V,
    /// 2nd-person (object or experiencer): `g` and its allomorphs `k`, `k̆`.
    G,
}

impl Series {
    /// The allomorph used before `following` (the first phoneme of what the
    /// prefix attaches to).
    pub fn allomorph(self, following: Option<&str>, region: Region) -> &'static str {
        let class = following.map(|phoneme| classify(phoneme, region));
        match (self, class) {
            (Series::V, Some(PhonemeClass::Vowel | PhonemeClass::Voiced)) => "b",
            (Series::V, Some(PhonemeClass::Labial)) => "",
            (Series::V, Some(PhonemeClass::Aspirate)) => "p",
            (Series::V, Some(PhonemeClass::Ejective)) => "p\u{30C}",
            (Series::V, _) => "v",
            (Series::G, Some(PhonemeClass::Aspirate)) => "k",
            (Series::G, Some(PhonemeClass::Ejective)) => "k\u{306}",
            (Series::G, _) => "g",
        }
    }
}

/// Input to [`resolve_prefix`].
#[derive(Debug, Clone, Copy)]
pub struct PrefixContext<'a> {
    /// Canonical preverb extracted from the root, if any.
    pub preverb: Option<&'a str>,
    pub region: Region,
    pub subject: Slot,
    pub object: Option<Slot>,
    /// The bare subject marker: agreement prefix plus version vowel.
    pub marker: &'a str,
    /// The infinitive belongs to the glide-preverb exception set.
    pub glide_preverb: bool,
}

impl PrefixContext<'_> {
    fn preverb(&self) -> Option<&str> {
        self.preverb.filter(|preverb| !preverb.is_empty())
    }

    fn vowel_junction(&self) -> bool {
        self.preverb().is_some_and(ends_with_vowel) && starts_with_vowel(self.marker)
    }

    fn third_person(&self) -> bool {
        self.subject.person() == 3
    }
}

/// The resolved prefix, and the stem a preverb may force on the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub text: String,
    pub forced_root: Option<&'static str>,
}

impl Prefix {
    fn plain(text: String) -> Self {
        Prefix {
            text,
            forced_root: None,
        }
    }
}

/// The irregular stem a preverb forces on its root, if any.
pub fn forced_root(preverb: &str) -> Option<&'static str> {
    matches!(preverb, "gama" | "gam").then_some("ç")
}

struct PrefixRule {
    name: &'static str,
    matches: fn(&PrefixContext<'_>) -> bool,
    build: fn(&PrefixContext<'_>) -> Prefix,
}

/// Junction rules, evaluated top to bottom; the first match wins.
const PREFIX_RULES: [PrefixRule; 9] = [
    PrefixRule {
        name: "e-glide",
        matches: e_glide_matches,
        build: e_glide,
    },
    PrefixRule {
        name: "glide-exception",
        matches: glide_exception_matches,
        build: glide_exception,
    },
    PrefixRule {
        name: "me-nasal",
        matches: me_nasal_matches,
        build: me_nasal,
    },
    PrefixRule {
        name: "ce-third",
        matches: ce_third_matches,
        build: ce_third,
    },
    PrefixRule {
        name: "gama-stem",
        matches: gama_matches,
        build: gama,
    },
    PrefixRule {
        name: "go-third",
        matches: go_third_matches,
        build: go_third,
    },
    PrefixRule {
        name: "e-third",
        matches: e_third_matches,
        build: e_third,
    },
    PrefixRule {
        name: "preverb",
        matches: preverb_matches,
        build: preverb_and_marker,
    },
    PrefixRule {
        name: "bare",
        matches: always,
        build: bare,
    },
];

fn e_glide_matches(context: &PrefixContext<'_>) -> bool {
    context.vowel_junction()
        && context.subject.person() != 1
        && !context.object.is_some_and(Slot::is_speech_act)
        && context.preverb() == Some("e")
}

fn e_glide(context: &PrefixContext<'_>) -> Prefix {
    let glide = if context.region == Region::Pz { "ey" } else { "y" };
    Prefix::plain(format!("{glide}{}", context.marker))
}

// Outside the exception set a vowel junction keeps the preverb whole;
// that case falls through to the rules below.
fn glide_exception_matches(context: &PrefixContext<'_>) -> bool {
    context.vowel_junction() && context.glide_preverb
}

fn glide_exception(context: &PrefixContext<'_>) -> Prefix {
    let preverb = context.preverb().unwrap_or_default();
    Prefix::plain(format!(
        "{}y{}",
        without_last_phoneme(preverb),
        context.marker
    ))
}

fn me_nasal_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb() == Some("me") && starts_with_vowel(context.marker)
}

fn me_nasal(context: &PrefixContext<'_>) -> Prefix {
    Prefix::plain(format!("n{}", context.marker))
}

fn ce_third_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb() == Some("ce") && context.third_person()
}

fn ce_third(context: &PrefixContext<'_>) -> Prefix {
    Prefix::plain(format!("c{}", context.marker))
}

fn gama_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb().and_then(forced_root).is_some()
}

fn gama(context: &PrefixContext<'_>) -> Prefix {
    let head = if context.third_person() { "gam" } else { "gamo" };
    Prefix {
        text: format!("{head}{}", context.marker),
        forced_root: context.preverb().and_then(forced_root),
    }
}

fn go_third_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb() == Some("go") && context.third_person()
}

fn go_third(context: &PrefixContext<'_>) -> Prefix {
    let head = if context.region == Region::Ho { "gv" } else { "g" };
    Prefix::plain(format!("{head}{}", context.marker))
}

fn e_third_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb() == Some("e") && context.third_person()
}

fn e_third(context: &PrefixContext<'_>) -> Prefix {
    Prefix::plain(format!("y{}", context.marker))
}

fn preverb_matches(context: &PrefixContext<'_>) -> bool {
    context.preverb().is_some()
}

fn preverb_and_marker(context: &PrefixContext<'_>) -> Prefix {
    Prefix::plain(format!(
        "{}{}",
        context.preverb().unwrap_or_default(),
        context.marker
    ))
}

fn always(_: &PrefixContext<'_>) -> bool {
    true
}

fn bare(context: &PrefixContext<'_>) -> Prefix {
    Prefix::plain(context.marker.to_string())
}

/// Build the phonologically adjusted prefix for a preverb and subject
/// marker.
pub fn resolve_prefix(context: &PrefixContext<'_>) -> Prefix {
    for rule in &PREFIX_RULES {
        if (rule.matches)(context) {
            trace!(
                rule = rule.name,
                preverb = ?context.preverb,
                marker = context.marker,
                "prefix rule matched"
            );
            return (rule.build)(context);
        }
    }
    bare(context)
}
