//! Person/number slots for subjects and objects.
//!
//! Laz verbs agree with up to two arguments. Both are drawn from the same
//! six person/number slots; the request boundary spells them `S1_Singular`
//! .. `S3_Plural` for subjects and `O1_Singular` .. `O3_Plural` for
//! objects, and either may be `all`.
//!
//! The derived ordering of [`Slot`] is the canonical ordering used for
//! output: singular before plural, persons 1-2-3 within each number.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// One of the six person/number combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Slot {
    /// All slots in canonical order.
    pub const ALL: [Slot; 6] = [
        Slot::FirstSingular,
        Slot::SecondSingular,
        Slot::ThirdSingular,
        Slot::FirstPlural,
        Slot::SecondPlural,
        Slot::ThirdPlural,
    ];

    /// Position of this slot in a [`PersonTable`].
    pub fn index(self) -> usize {
        match self {
            Slot::FirstSingular => 0,
            Slot::SecondSingular => 1,
            Slot::ThirdSingular => 2,
            Slot::FirstPlural => 3,
            Slot::SecondPlural => 4,
            Slot::ThirdPlural => 5,
        }
    }

    /// Grammatical person: 1, 2 or 3.
    pub fn person(self) -> u8 {
        match self {
            Slot::FirstSingular | Slot::FirstPlural => 1,
            Slot::SecondSingular | Slot::SecondPlural => 2,
            Slot::ThirdSingular | Slot::ThirdPlural => 3,
        }
    }

    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Slot::FirstPlural | Slot::SecondPlural | Slot::ThirdPlural
        )
    }

    pub fn is_speech_act(self) -> bool {
        self.person() < 3
    }

    pub fn subject_code(self) -> &'static str {
        match self {
            Slot::FirstSingular => "S1_Singular",
            Slot::SecondSingular => "S2_Singular",
            Slot::ThirdSingular => "S3_Singular",
            Slot::FirstPlural => "S1_Plural",
            Slot::SecondPlural => "S2_Plural",
            Slot::ThirdPlural => "S3_Plural",
        }
    }

    pub fn object_code(self) -> &'static str {
        match self {
            Slot::FirstSingular => "O1_Singular",
            Slot::SecondSingular => "O2_Singular",
            Slot::ThirdSingular => "O3_Singular",
            Slot::FirstPlural => "O1_Plural",
            Slot::SecondPlural => "O2_Plural",
            Slot::ThirdPlural => "O3_Plural",
        }
    }

    pub fn from_subject_code(code: &str) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.subject_code().eq_ignore_ascii_case(code))
    }

    pub fn from_object_code(code: &str) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.object_code().eq_ignore_ascii_case(code))
    }

    /// A subject and an object referring to the speaker (or to the
    /// addressee) at the same time cannot be conjugated.
    pub fn is_coreferential(subject: Slot, object: Slot) -> bool {
        subject.is_speech_act() && subject.person() == object.person()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = if self.is_plural() { "plural" } else { "singular" };
        match self.person() {
            1 => write!(f, "1st {number}"),
            2 => write!(f, "2nd {number}"),
            _ => write!(f, "3rd {number}"),
        }
    }
}

/// A requested subject or object: one slot, or every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    All,
    One(Slot),
}

impl Selection {
    pub fn slots(self) -> Vec<Slot> {
        match self {
            Selection::All => Slot::ALL.to_vec(),
            Selection::One(slot) => vec![slot],
        }
    }

    /// Parse a subject selection (`S1_Singular` .. `S3_Plural` or `all`).
    pub fn parse_subject(value: &str) -> Result<Selection, ValidationError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        Slot::from_subject_code(value)
            .map(Selection::One)
            .ok_or_else(|| ValidationError::InvalidValue {
                parameter: "subject",
                value: value.to_string(),
            })
    }

    /// Parse an object selection. An empty string means "no object".
    pub fn parse_object(value: &str) -> Result<Option<Selection>, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if value.eq_ignore_ascii_case("all") {
            return Ok(Some(Selection::All));
        }
        Slot::from_object_code(value)
            .map(|slot| Some(Selection::One(slot)))
            .ok_or_else(|| ValidationError::InvalidValue {
                parameter: "obj",
                value: value.to_string(),
            })
    }
}

/// A value for each of the six slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonTable<T>([T; 6]);

impl<T> PersonTable<T> {
    pub const fn new(values: [T; 6]) -> Self {
        PersonTable(values)
    }

    pub fn get(&self, slot: Slot) -> &T {
        &self.0[slot.index()]
    }
}

impl<T: Clone> PersonTable<T> {
    pub fn uniform(value: T) -> Self {
        PersonTable(std::array::from_fn(|_| value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canonical_order_is_singular_then_plural() {
        let mut shuffled = vec![
            Slot::ThirdPlural,
            Slot::FirstPlural,
            Slot::SecondSingular,
            Slot::FirstSingular,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                Slot::FirstSingular,
                Slot::SecondSingular,
                Slot::FirstPlural,
                Slot::ThirdPlural,
            ]
        );
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(
            Selection::parse_subject("s2_plural").unwrap(),
            Selection::One(Slot::SecondPlural)
        );
        assert_eq!(Selection::parse_subject("ALL").unwrap(), Selection::All);
        assert_eq!(
            Selection::parse_object("O3_Singular").unwrap(),
            Some(Selection::One(Slot::ThirdSingular))
        );
    }

    #[test]
    fn empty_object_means_no_object() {
        assert_eq!(Selection::parse_object("").unwrap(), None);
        assert_eq!(Selection::parse_object("   ").unwrap(), None);
    }

    #[test]
    fn object_codes_are_not_subject_codes() {
        assert!(Selection::parse_subject("O1_Singular").is_err());
        assert!(Selection::parse_object("S1_Singular").is_err());
    }

    #[test]
    fn coreference_ignores_number_for_speech_act_persons() {
        assert!(Slot::is_coreferential(Slot::FirstSingular, Slot::FirstSingular));
        assert!(Slot::is_coreferential(Slot::FirstSingular, Slot::FirstPlural));
        assert!(Slot::is_coreferential(Slot::SecondPlural, Slot::SecondSingular));
        assert!(!Slot::is_coreferential(Slot::ThirdSingular, Slot::ThirdSingular));
        assert!(!Slot::is_coreferential(Slot::FirstSingular, Slot::SecondSingular));
    }
}
