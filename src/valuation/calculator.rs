//! Investment calculator state.
//!
//! Holds the current inputs, the selected preset, and the metrics derived
//! from those inputs. Every transition recomputes the metrics eagerly, so
//! `metrics()` is always consistent with `inputs()`.

use serde::Serialize;
use tracing::{debug, info};

use super::presets::PresetId;
use super::{compute, ValuationMetrics};
use crate::types::{InputField, ValuationInputs};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentCalculator {
    inputs: ValuationInputs,
    selected_preset: PresetId,
    metrics: ValuationMetrics,
}

impl InvestmentCalculator {
    /// Start from a preset's stored values.
    pub fn new(preset: PresetId) -> Self {
        let inputs = preset.preset().inputs;
        Self {
            inputs,
            selected_preset: preset,
            metrics: compute(inputs),
        }
    }

    pub fn inputs(&self) -> ValuationInputs {
        self.inputs
    }

    pub fn selected_preset(&self) -> PresetId {
        self.selected_preset
    }

    pub fn metrics(&self) -> &ValuationMetrics {
        &self.metrics
    }

    /// Overwrite all three inputs with the preset's values, discarding edits.
    pub fn load_preset(&mut self, preset: PresetId) {
        let stored = preset.preset();
        self.selected_preset = preset;
        self.inputs = stored.inputs;
        self.recompute();
        info!(preset = %preset, inputs = %self.inputs, "Preset loaded");
    }

    /// Overwrite a single input. The preset highlight is left as is.
    pub fn edit_input(&mut self, field: InputField, value: f64) {
        match field {
            InputField::CurrentPe => self.inputs.current_pe = value,
            InputField::FairPe => self.inputs.fair_pe = value,
            InputField::Cagr => self.inputs.cagr = value,
        }
        self.recompute();
        debug!(%field, value, "Valuation input edited");
    }

    fn recompute(&mut self) {
        self.metrics = compute(self.inputs);
    }
}

impl Default for InvestmentCalculator {
    fn default() -> Self {
        Self::new(PresetId::default())
    }
}
