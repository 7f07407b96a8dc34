//! Sector presets for the valuation calculator.
//!
//! A closed set of named (current P/E, fair P/E, CAGR) triples used to seed
//! the calculator inputs.

use serde::Serialize;
use std::fmt;

use crate::types::{DeckError, ValuationInputs};

/// Identifier of a built-in valuation preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    #[default]
    Semiconductors,
    Healthcare,
    Staples,
    Custom,
}

impl PresetId {
    /// All presets, in display order.
    pub const ALL: &'static [PresetId] = &[
        PresetId::Semiconductors,
        PresetId::Healthcare,
        PresetId::Staples,
        PresetId::Custom,
    ];

    /// Short identifier used in URLs, config, and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetId::Semiconductors => "semiconductors",
            PresetId::Healthcare => "healthcare",
            PresetId::Staples => "staples",
            PresetId::Custom => "custom",
        }
    }

    /// The stored parameter set for this preset.
    pub fn preset(&self) -> ValuationPreset {
        let (name, current_pe, fair_pe, cagr) = match self {
            PresetId::Semiconductors => ("Semiconductors", 38.0, 25.0, 20.0),
            PresetId::Healthcare => ("Health Care", 20.0, 18.0, 10.0),
            PresetId::Staples => ("Consumer Staples", 21.0, 18.0, 7.0),
            PresetId::Custom => ("Custom", 30.0, 20.0, 15.0),
        };
        ValuationPreset {
            id: *self,
            name,
            inputs: ValuationInputs::new(current_pe, fair_pe, cagr),
        }
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PresetId {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeckError::UnknownPreset(s.to_string()))
    }
}

/// A named, immutable set of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationPreset {
    pub id: PresetId,
    pub name: &'static str,
    #[serde(flatten)]
    pub inputs: ValuationInputs,
}

impl fmt::Display for ValuationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.inputs)
    }
}

/// Every preset, in display order.
pub fn all_presets() -> Vec<ValuationPreset> {
    PresetId::ALL.iter().map(PresetId::preset).collect()
}
