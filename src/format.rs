//! Display formatting for the dashboard pages.
//!
//! The engine returns full-precision floats; rounding for display happens
//! only here. Rounding goes through `rust_decimal` on the exact binary value
//! of the float, half away from zero, so `fixed(0.25, 1)` is "0.3" and
//! `fixed(1.005, 2)` is "1.00" (1.005 is slightly below the midpoint).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::HardwareProfile;

/// Round the exact value of `value` to `dp` decimals, half away from zero.
/// `None` for non-finite values or magnitudes beyond `Decimal`'s range.
pub fn round_decimal(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Fixed-point rendering with `dp` decimals. Non-finite values render as
/// "NaN", "Infinity" or "-Infinity".
pub fn fixed(value: f64, dp: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    match round_decimal(value, dp) {
        Some(d) => format!("{:.*}", dp as usize, d),
        None => format!("{:.*}", dp as usize, value),
    }
}

/// Value shown in a numeric input box: shortest form, empty when non-finite.
pub fn field_value(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

/// en-US digit grouping with at most three fraction digits ("4,000",
/// "1,234.568").
pub fn grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let Some(d) = round_decimal(value, 3) else {
        return value.to_string();
    };
    let text = d.normalize().to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Dollar amount with grouping: "$4,000".
pub fn usd(value: f64) -> String {
    format!("${}", grouped(value))
}

/// "52.0%"
pub fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 1))
}

/// "4.07x"
pub fn multiple(value: f64) -> String {
    format!("{}x", fixed(value, 2))
}

/// "1.1 years"
pub fn years(value: f64) -> String {
    format!("{} years", fixed(value, 1))
}

/// What $100 becomes at a given multiple: "$407".
pub fn hundred_becomes(multiple: f64) -> String {
    format!("${}", fixed(multiple * 100.0, 0))
}

/// One-line catalog summary: "200 TH/s • 17.5 J/TH • $4,000".
pub fn profile_summary(profile: &HardwareProfile) -> String {
    format!(
        "{} TH/s • {} J/TH • {}",
        profile.hashrate_ths,
        profile.efficiency_j_per_th,
        usd(profile.upfront_usd)
    )
}
