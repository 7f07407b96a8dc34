//! Behavioural properties of the valuation engine and the two state
//! containers, exercised through the public library API.

use valuedeck::mining::{DeviceSelectionState, MinerCatalog};
use valuedeck::types::{EditableField, InputField, ValuationInputs};
use valuedeck::valuation::calculator::InvestmentCalculator;
use valuedeck::valuation::presets::PresetId;
use valuedeck::valuation::{compute, HORIZONS};

fn inputs(current_pe: f64, fair_pe: f64, cagr: f64) -> ValuationInputs {
    ValuationInputs::new(current_pe, fair_pe, cagr)
}

#[test]
fn test_equal_pe_reduces_to_growth() {
    for &pe in &[5.0, 17.0, 38.0, 120.0] {
        for &cagr in &[-20.0, 0.0, 3.5, 10.0, 40.0] {
            let m = compute(inputs(pe, pe, cagr));
            assert_eq!(m.required_growth_percent, 0.0);
            for r in &m.returns {
                let expected = (1.0 + cagr / 100.0_f64).powf(r.years as f64);
                assert!(
                    (r.multiple - expected).abs() <= 1e-12 * expected.max(1.0),
                    "pe {pe} cagr {cagr} y {}: {} vs {expected}",
                    r.years,
                    r.multiple
                );
            }
            assert_eq!(m.chart[0].value, 100.0);
        }
    }
}

#[test]
fn test_breakeven_finite_when_fair_above_current() {
    for &(current, fair) in &[(10.0, 12.0), (15.0, 25.0), (30.0, 31.0)] {
        for &cagr in &[1.0, 5.0, 20.0] {
            let m = compute(inputs(current, fair, cagr));
            assert!(m.years_to_breakeven.is_finite());
        }
    }
}

#[test]
fn test_faster_growth_shortens_breakeven() {
    let mut previous = f64::INFINITY;
    for cagr in [1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 30.0, 50.0] {
        let years = compute(inputs(38.0, 25.0, cagr)).years_to_breakeven;
        assert!(years.is_finite() && years > 0.0);
        assert!(years < previous, "cagr {cagr}: {years} !< {previous}");
        previous = years;
    }
}

#[test]
fn test_compute_is_bit_identical() {
    let a = compute(inputs(21.0, 18.0, 7.0));
    let b = compute(inputs(21.0, 18.0, 7.0));
    assert_eq!(a, b);
    for (x, y) in a.chart.iter().zip(&b.chart) {
        assert_eq!(x.value.to_bits(), y.value.to_bits());
    }
}

#[test]
fn test_chart_always_31_points() {
    for preset in PresetId::ALL {
        let m = compute(preset.preset().inputs);
        assert_eq!(m.chart.len(), 31);
        assert_eq!(m.returns.len(), HORIZONS.len());
        assert_eq!(m.cagr_sensitivity.len(), 5);
        assert_eq!(m.fair_pe_sensitivity.len(), 5);
    }
}

#[test]
fn test_semiconductor_numbers() {
    let m = compute(inputs(38.0, 25.0, 20.0));
    assert!((m.required_growth_percent - 52.0).abs() < 1e-9);
    let ten = m.horizon(10).unwrap();
    assert!((ten.multiple - 4.0735).abs() < 1e-4);
}

#[test]
fn test_healthcare_breakeven_years() {
    let m = compute(inputs(20.0, 18.0, 10.0));
    assert!((m.years_to_breakeven - 1.105).abs() < 1e-3);
}

#[test]
fn test_healthcare_preset_discards_edit() {
    let mut calc = InvestmentCalculator::default();
    calc.edit_input(InputField::CurrentPe, 73.25);
    assert_eq!(calc.inputs().current_pe, 73.25);

    calc.load_preset(PresetId::Healthcare);
    assert_eq!(calc.inputs().current_pe, 20.0);
    assert_eq!(calc.metrics(), &compute(calc.inputs()));
}

#[test]
fn test_profile_switch_overwrites_hand_edits() {
    let mut state = DeviceSelectionState::new(MinerCatalog::default(), None);
    for field in EditableField::ALL {
        state.edit_field(*field, 1.0);
    }
    state.select_profile("whatsminer-m50s").unwrap();

    let fields = state.fields();
    assert_eq!(fields.upfront_usd, 2500.0);
    assert_eq!(fields.hashrate_ths, 126.0);
    assert_eq!(fields.efficiency_j_per_th, 26.0);

    let before = state.fields();
    state.select_profile("whatsminer-m50s").unwrap();
    assert_eq!(state.fields(), before);
}
