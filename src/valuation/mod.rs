//! Valuation engine — the three-variable framework.
//!
//! Maps (current P/E, fair P/E, sustainable CAGR) to breakeven time,
//! per-horizon multiples and annualized returns, a 31-point chart series,
//! and two sensitivity sweeps.
//!
//! Expected Return    = (Fair PE / Current PE) × (1 + CAGR)^Years
//! Years to Breakeven = ln(Current PE / Fair PE) / ln(1 + CAGR)
//!
//! `compute` is a pure function. Nothing is clamped: degenerate inputs
//! propagate as infinities or NaN rather than errors.

pub mod calculator;
pub mod presets;

use serde::Serialize;

use crate::types::ValuationInputs;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Horizons (years) reported in the expected-returns table.
pub const HORIZONS: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Last year of the chart series (inclusive).
pub const CHART_YEARS: u32 = 30;

/// Reference line drawn on the chart: $100 invested.
pub const BREAKEVEN_VALUE: f64 = 100.0;

/// Perturbations applied to CAGR (percentage points) and to fair P/E.
pub const SENSITIVITY_DELTAS: [f64; 5] = [-5.0, -2.0, 0.0, 2.0, 5.0];

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Multiple and annualized return at one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonReturn {
    pub years: u32,
    /// Total return multiple (1.0 = money back).
    pub multiple: f64,
    /// Annualized return in percent.
    pub annualized_percent: f64,
}

/// One point of the wealth-accumulation chart ($100 → $X).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: u32,
    /// Projected value of $100, rounded to one decimal.
    pub value: f64,
    pub breakeven: f64,
}

/// Row of the CAGR sensitivity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CagrSensitivity {
    pub cagr: f64,
    /// Raw 10-year multiple (not annualized).
    pub return_10y: f64,
    pub return_20y: f64,
    /// True for the row whose CAGR equals the unvaried input.
    pub is_base: bool,
}

/// Row of the fair-P/E sensitivity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairPeSensitivity {
    pub fair_pe: f64,
    pub return_10y: f64,
    pub return_20y: f64,
    pub is_base: bool,
}

/// Everything derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationMetrics {
    /// Earnings growth needed for the P/E to compress to fair, in percent.
    pub required_growth_percent: f64,
    pub years_to_breakeven: f64,
    /// P/E compression (negative) or expansion (positive), in percent.
    pub pe_change_percent: f64,
    pub returns: Vec<HorizonReturn>,
    pub chart: Vec<ChartPoint>,
    pub cagr_sensitivity: Vec<CagrSensitivity>,
    pub fair_pe_sensitivity: Vec<FairPeSensitivity>,
}

impl ValuationMetrics {
    /// Look up the return row for a horizon in [`HORIZONS`].
    pub fn horizon(&self, years: u32) -> Option<&HorizonReturn> {
        self.returns.iter().find(|r| r.years == years)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Derive the full metric bundle from the three inputs.
pub fn compute(inputs: ValuationInputs) -> ValuationMetrics {
    let ValuationInputs {
        current_pe,
        fair_pe,
        cagr,
    } = inputs;

    let required_growth_percent = (current_pe / fair_pe - 1.0) * 100.0;
    let years_to_breakeven = (current_pe / fair_pe).ln() / (1.0 + cagr / 100.0).ln();
    let pe_change_percent = (fair_pe / current_pe - 1.0) * 100.0;

    let returns = HORIZONS
        .iter()
        .map(|&years| {
            let multiple = projected_multiple(current_pe, fair_pe, cagr, years as f64);
            let annualized_percent = (multiple.powf(1.0 / years as f64) - 1.0) * 100.0;
            HorizonReturn {
                years,
                multiple,
                annualized_percent,
            }
        })
        .collect();

    let chart = (0..=CHART_YEARS)
        .map(|year| {
            let value = projected_multiple(current_pe, fair_pe, cagr, year as f64) * 100.0;
            ChartPoint {
                year,
                value: round_to_tenth(value),
                breakeven: BREAKEVEN_VALUE,
            }
        })
        .collect();

    let cagr_sensitivity = SENSITIVITY_DELTAS
        .iter()
        .map(|delta| {
            let varied = cagr + delta;
            CagrSensitivity {
                cagr: varied,
                return_10y: projected_multiple(current_pe, fair_pe, varied, 10.0),
                return_20y: projected_multiple(current_pe, fair_pe, varied, 20.0),
                is_base: varied == cagr,
            }
        })
        .collect();

    // No floor on the varied fair P/E; non-positive values show the raw math.
    let fair_pe_sensitivity = SENSITIVITY_DELTAS
        .iter()
        .map(|delta| {
            let varied = fair_pe + delta;
            FairPeSensitivity {
                fair_pe: varied,
                return_10y: projected_multiple(current_pe, varied, cagr, 10.0),
                return_20y: projected_multiple(current_pe, varied, cagr, 20.0),
                is_base: varied == fair_pe,
            }
        })
        .collect();

    ValuationMetrics {
        required_growth_percent,
        years_to_breakeven,
        pe_change_percent,
        returns,
        chart,
        cagr_sensitivity,
        fair_pe_sensitivity,
    }
}

/// `(fair / current) × (1 + cagr/100)^years`
pub fn projected_multiple(current_pe: f64, fair_pe: f64, cagr: f64, years: f64) -> f64 {
    (fair_pe / current_pe) * (1.0 + cagr / 100.0).powf(years)
}

/// Round to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
