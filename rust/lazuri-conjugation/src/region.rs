//! Dialect regions and region-conditioned values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ValidationError;

/// One of the four attested dialect regions.
///
/// The derived ordering (FA, AŞ, PZ, HO) is the order regions appear in
/// a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Fındıklı-Arhavi.
    #[serde(rename = "FA")]
    Fa,
    /// Ardeşen.
    #[serde(rename = "AŞ", alias = "AS")]
    As,
    /// Pazar.
    #[serde(rename = "PZ")]
    Pz,
    /// Hopa.
    #[serde(rename = "HO")]
    Ho,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Fa, Region::As, Region::Pz, Region::Ho];

    pub fn code(self) -> &'static str {
        match self {
            Region::Fa => "FA",
            Region::As => "AŞ",
            Region::Pz => "PZ",
            Region::Ho => "HO",
        }
    }

    /// Parse a region code. `AS` is accepted for `AŞ`.
    pub fn from_code(code: &str) -> Option<Region> {
        match code.trim().to_uppercase().as_str() {
            "FA" => Some(Region::Fa),
            "AŞ" | "AS" => Some(Region::As),
            "PZ" => Some(Region::Pz),
            "HO" => Some(Region::Ho),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Region::Fa => 0,
            Region::As => 1,
            Region::Pz => 2,
            Region::Ho => 3,
        }
    }

    /// Parse a comma-separated region filter such as `"HO"` or `"FA, PZ"`.
    pub fn parse_filter(value: &str) -> Result<BTreeSet<Region>, ValidationError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| {
                Region::from_code(code).ok_or_else(|| ValidationError::InvalidValue {
                    parameter: "region",
                    value: code.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value defined for every region.
///
/// Backed by a fixed array so a table can never miss a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regional<T>([T; 4]);

impl<T> Regional<T> {
    pub const fn new(fa: T, as_: T, pz: T, ho: T) -> Self {
        Regional([fa, as_, pz, ho])
    }

    pub fn get(&self, region: Region) -> &T {
        &self.0[region.index()]
    }

    /// Replace the value for one region.
    pub fn with(mut self, region: Region, value: T) -> Self {
        self.0[region.index()] = value;
        self
    }
}

impl<T: Clone> Regional<T> {
    pub fn uniform(value: T) -> Self {
        Regional(std::array::from_fn(|_| value.clone()))
    }
}
