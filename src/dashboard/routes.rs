//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`;
//! each mutating request runs its transition to completion under the write
//! lock, so the last write wins per field.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::format;
use crate::mining::{DeviceSelectionState, EditableFields};
use crate::types::{DeckError, EditableField, HardwareProfile, InputField, ValuationInputs};
use crate::valuation::calculator::InvestmentCalculator;
use crate::valuation::presets::{all_presets, PresetId, ValuationPreset};
use crate::valuation::{compute, ValuationMetrics};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub miner: RwLock<DeviceSelectionState>,
    pub valuation: RwLock<InvestmentCalculator>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl DashboardState {
    pub fn new(miner: DeviceSelectionState, valuation: InvestmentCalculator) -> Self {
        Self {
            miner: RwLock::new(miner),
            valuation: RwLock::new(valuation),
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DeviceSelectionState::default(), InvestmentCalculator::default())
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for DeckError {
    fn into_response(self) -> Response {
        let status = match &self {
            DeckError::UnknownProfile(_) | DeckError::UnknownPreset(_) => StatusCode::NOT_FOUND,
            DeckError::UnknownField(_) => StatusCode::BAD_REQUEST,
            DeckError::EmptyCatalog
            | DeckError::DuplicateProfile(_)
            | DeckError::InvalidProfile(_)
            | DeckError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %self, status = status.as_u16(), "Request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SelectRequest {
    pub id: String,
}

/// Single-field edit. A `null` value stands for an unparseable entry and is
/// stored as NaN.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    pub field: String,
    pub value: Option<f64>,
}

impl EditRequest {
    fn value(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComputeQuery {
    pub current_pe: f64,
    pub fair_pe: f64,
    pub cagr: f64,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct MinerView {
    pub selected: HardwareProfile,
    pub fields: EditableFields,
    pub display: MinerDisplay,
}

/// Strings exactly as the mining page shows them.
#[derive(Debug, Clone, Serialize)]
pub struct MinerDisplay {
    pub upfront_usd: String,
    pub hashrate_ths: String,
    pub efficiency_j_per_th: String,
    pub selected_name: String,
    pub preset_summary: String,
}

impl From<&DeviceSelectionState> for MinerView {
    fn from(state: &DeviceSelectionState) -> Self {
        let snap = state.snapshot();
        let display = MinerDisplay {
            upfront_usd: format::field_value(snap.fields.upfront_usd),
            hashrate_ths: format::field_value(snap.fields.hashrate_ths),
            efficiency_j_per_th: format::field_value(snap.fields.efficiency_j_per_th),
            selected_name: snap.selected.name.clone(),
            preset_summary: format::profile_summary(&snap.selected),
        };
        Self {
            selected: snap.selected,
            fields: snap.fields,
            display,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuationView {
    pub inputs: ValuationInputs,
    pub selected_preset: PresetId,
    pub metrics: ValuationMetrics,
    pub display: ValuationDisplay,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuationDisplay {
    pub required_growth: String,
    pub years_to_breakeven: String,
    pub pe_change: String,
    pub breakeven_note: String,
    pub returns: Vec<ReturnRow>,
    pub cagr_sensitivity: Vec<SensitivityRow>,
    pub fair_pe_sensitivity: Vec<SensitivityRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnRow {
    pub horizon: String,
    pub total_return: String,
    pub annualized: String,
    pub hundred_becomes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensitivityRow {
    pub label: String,
    pub return_10y: String,
    pub return_20y: String,
    pub highlight: bool,
}

impl ValuationView {
    pub fn new(inputs: ValuationInputs, selected_preset: PresetId, metrics: ValuationMetrics) -> Self {
        let display = ValuationDisplay {
            required_growth: format::percent(metrics.required_growth_percent),
            years_to_breakeven: format::years(metrics.years_to_breakeven),
            pe_change: format::percent(metrics.pe_change_percent),
            breakeven_note: format!(
                "Starting with $100, reaching breakeven at year {}",
                format::fixed(metrics.years_to_breakeven, 1)
            ),
            returns: metrics
                .returns
                .iter()
                .map(|r| ReturnRow {
                    horizon: format!("{} years", r.years),
                    total_return: format::multiple(r.multiple),
                    annualized: format::percent(r.annualized_percent),
                    hundred_becomes: format::hundred_becomes(r.multiple),
                })
                .collect(),
            cagr_sensitivity: metrics
                .cagr_sensitivity
                .iter()
                .map(|r| SensitivityRow {
                    label: format!("{}%", r.cagr),
                    return_10y: format::multiple(r.return_10y),
                    return_20y: format::multiple(r.return_20y),
                    highlight: r.is_base,
                })
                .collect(),
            fair_pe_sensitivity: metrics
                .fair_pe_sensitivity
                .iter()
                .map(|r| SensitivityRow {
                    label: r.fair_pe.to_string(),
                    return_10y: format::multiple(r.return_10y),
                    return_20y: format::multiple(r.return_20y),
                    highlight: r.is_base,
                })
                .collect(),
        };
        Self {
            inputs,
            selected_preset,
            metrics,
            display,
        }
    }
}

impl From<&InvestmentCalculator> for ValuationView {
    fn from(calc: &InvestmentCalculator) -> Self {
        Self::new(calc.inputs(), calc.selected_preset(), calc.metrics().clone())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: i64,
}

// ---------------------------------------------------------------------------
// Mining handlers
// ---------------------------------------------------------------------------

/// GET /api/miners
pub async fn get_miners(State(state): State<AppState>) -> Json<Vec<HardwareProfile>> {
    let miner = state.miner.read().await;
    Json(miner.catalog().profiles().to_vec())
}

/// GET /api/miner
pub async fn get_miner(State(state): State<AppState>) -> Json<MinerView> {
    let miner = state.miner.read().await;
    Json(MinerView::from(&*miner))
}

/// POST /api/miner/select
pub async fn select_miner(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<MinerView>, DeckError> {
    let mut miner = state.miner.write().await;
    miner.select_profile(&req.id)?;
    Ok(Json(MinerView::from(&*miner)))
}

/// POST /api/miner/edit
pub async fn edit_miner(
    State(state): State<AppState>,
    Json(req): Json<EditRequest>,
) -> Result<Json<MinerView>, DeckError> {
    let field: EditableField = req.field.parse()?;
    let mut miner = state.miner.write().await;
    miner.edit_field(field, req.value());
    Ok(Json(MinerView::from(&*miner)))
}

// ---------------------------------------------------------------------------
// Valuation handlers
// ---------------------------------------------------------------------------

/// GET /api/valuation/presets
pub async fn get_presets() -> Json<Vec<ValuationPreset>> {
    Json(all_presets())
}

/// GET /api/valuation
pub async fn get_valuation(State(state): State<AppState>) -> Json<ValuationView> {
    let calc = state.valuation.read().await;
    Json(ValuationView::from(&*calc))
}

/// POST /api/valuation/preset
pub async fn load_preset(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<ValuationView>, DeckError> {
    let preset: PresetId = req.id.parse()?;
    let mut calc = state.valuation.write().await;
    calc.load_preset(preset);
    Ok(Json(ValuationView::from(&*calc)))
}

/// POST /api/valuation/input
pub async fn edit_valuation(
    State(state): State<AppState>,
    Json(req): Json<EditRequest>,
) -> Result<Json<ValuationView>, DeckError> {
    let field: InputField = req.field.parse()?;
    let mut calc = state.valuation.write().await;
    calc.edit_input(field, req.value());
    Ok(Json(ValuationView::from(&*calc)))
}

/// GET /api/valuation/compute — stateless; does not touch the shared state.
pub async fn compute_valuation(Query(q): Query<ComputeQuery>) -> Json<ValuationMetrics> {
    Json(compute(ValuationInputs::new(q.current_pe, q.fair_pe, q.cagr)))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: (chrono::Utc::now() - state.started_at).num_seconds(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
