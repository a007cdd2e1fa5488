//! Rendering conjugation results into display lines.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dispatch::Conjugations;
use crate::region::Region;
use crate::tables::{object_pronoun, pronoun};

/// Formatted lines per region, in region order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Response(BTreeMap<Region, Vec<String>>);

impl Response {
    pub fn get(&self, region: Region) -> Option<&[String]> {
        self.0.get(&region).map(Vec::as_slice)
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &[String])> {
        self.0.iter().map(|(region, lines)| (*region, lines.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Render every cell as `"{subject} {object}: {form}"`, or
/// `"{subject}: {form}"` when there is no object. Cells are already in
/// canonical subject-then-object order. Empty forms are dropped.
pub fn format(conjugations: &Conjugations) -> Response {
    let mut response = BTreeMap::new();
    for (region, cells) in conjugations.regions() {
        let lines: Vec<String> = cells
            .iter()
            .filter(|((_, _, form), _)| !form.is_empty())
            .map(|((subject, object, form), origin)| {
                let subject = pronoun(origin.pronouns, *subject, region);
                match object {
                    Some(object) => {
                        format!("{subject} {}: {form}", object_pronoun(*object, region))
                    }
                    None => format!("{subject}: {form}"),
                }
            })
            .collect();
        if !lines.is_empty() {
            response.insert(region, lines);
        }
    }
    Response(response)
}
