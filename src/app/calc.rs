use rust_decimal::Decimal;

use crate::models::RateTable;

const AMOUNT_SCALE: u32 = 2;
const RATE_SCALE: u32 = 4;

/// Parses a user-typed amount. Both "." and "," are accepted as the
/// decimal separator; a lone or trailing separator counts as typed
/// mid-entry and parses as if it were absent.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let canonical = raw.trim().replace(',', ".");
    let canonical = canonical.trim_end_matches('.');
    if canonical.is_empty() {
        return None;
    }
    if let Some(fraction) = canonical.strip_prefix('.') {
        return format!("0.{}", fraction).parse().ok();
    }
    canonical.parse().ok()
}

/// Converts through the base currency: `amount × mid(from)` moves the
/// value into base units, dividing by `mid(to)` moves it out again.
/// The base sits in the table with a mid of exactly 1, which folds the
/// base→X and X→base cases into the same expression. Arithmetic that
/// leaves `Decimal` range folds into the same `None` as a missing
/// code; this runs on every keystroke and must not panic.
pub fn convert(table: &RateTable, raw_amount: &str, from: &str, to: &str) -> Option<Decimal> {
    let amount = parse_amount(raw_amount)?;
    let from_mid = table.mid(from)?;
    let to_mid = table.mid(to)?;
    let result = amount.checked_mul(from_mid)?.checked_div(to_mid)?;
    Some(result.round_dp(AMOUNT_SCALE))
}

pub fn unit_rate(table: &RateTable, from: &str, to: &str) -> Option<Decimal> {
    let from_mid = table.mid(from)?;
    let to_mid = table.mid(to)?;
    let rate = from_mid.checked_div(to_mid)?;
    Some(rate.round_dp(RATE_SCALE))
}

pub fn rate_line(table: &RateTable, from: &str, to: &str) -> Option<String> {
    unit_rate(table, from, to).map(|rate| format!("1 {} = {:.4} {}", from, rate, to))
}

pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
