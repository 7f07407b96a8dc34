//! Shared types for VALUEDECK.
//!
//! The data model used by both calculators and the dashboard. Kept free of
//! logic beyond parsing and display so the mining, valuation, and dashboard
//! modules can depend on it without cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Mining hardware
// ---------------------------------------------------------------------------

/// One entry of the ASIC miner catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    /// Unique catalog identifier, e.g. "antminer-s21".
    pub id: String,
    pub name: String,
    /// Terahash per second.
    pub hashrate_ths: f64,
    /// Joules per terahash.
    pub efficiency_j_per_th: f64,
    /// Upfront purchase cost in USD.
    pub upfront_usd: f64,
}

impl fmt::Display for HardwareProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} TH/s | {} J/TH | ${})",
            self.name, self.id, self.hashrate_ths, self.efficiency_j_per_th, self.upfront_usd,
        )
    }
}

/// The three user-editable fields on the mining page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    Cost,
    Hashrate,
    Efficiency,
}

impl EditableField {
    pub const ALL: &'static [EditableField] = &[
        EditableField::Cost,
        EditableField::Hashrate,
        EditableField::Efficiency,
    ];
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditableField::Cost => write!(f, "upfront_usd"),
            EditableField::Hashrate => write!(f, "hashrate_ths"),
            EditableField::Efficiency => write!(f, "efficiency_j_per_th"),
        }
    }
}

/// Parse a mining field name (case-insensitive, short or long form).
impl std::str::FromStr for EditableField {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cost" | "upfront" | "upfront_usd" => Ok(EditableField::Cost),
            "hashrate" | "hashrate_ths" => Ok(EditableField::Hashrate),
            "efficiency" | "efficiency_j_per_th" => Ok(EditableField::Efficiency),
            _ => Err(DeckError::UnknownField(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Valuation
// ---------------------------------------------------------------------------

/// The three scalars the valuation engine works from.
///
/// Nothing here is validated: `current_pe = 0` or a negative P/E ratio are
/// accepted and simply produce non-finite metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// What you're paying today.
    pub current_pe: f64,
    /// Long-term market valuation (the floor).
    pub fair_pe: f64,
    /// Sustainable compound annual growth rate, in percent.
    pub cagr: f64,
}

impl ValuationInputs {
    pub fn new(current_pe: f64, fair_pe: f64, cagr: f64) -> Self {
        Self {
            current_pe,
            fair_pe,
            cagr,
        }
    }
}

impl fmt::Display for ValuationInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PE {} → {} @ {}%", self.current_pe, self.fair_pe, self.cagr)
    }
}

/// The three user-editable fields on the investment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    CurrentPe,
    FairPe,
    Cagr,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::CurrentPe => write!(f, "current_pe"),
            InputField::FairPe => write!(f, "fair_pe"),
            InputField::Cagr => write!(f, "cagr"),
        }
    }
}

impl std::str::FromStr for InputField {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "current_pe" | "currentpe" | "current" => Ok(InputField::CurrentPe),
            "fair_pe" | "fairpe" | "fair" => Ok(InputField::FairPe),
            "cagr" | "growth" => Ok(InputField::Cagr),
            _ => Err(DeckError::UnknownField(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised at the boundary of the calculators (catalog construction,
/// selection by identifier, field lookup, configuration). The arithmetic
/// itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeckError {
    #[error("Unknown hardware profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown valuation preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Miner catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate hardware profile id: {0}")]
    DuplicateProfile(String),

    #[error("Invalid hardware profile: {0}")]
    InvalidProfile(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
