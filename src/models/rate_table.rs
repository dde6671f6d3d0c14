use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::Currency;

pub const BASE_CODE: &str = "PLN";
const BASE_NAME: &str = "złoty polski";

/// Mid-rates quoted against the base currency, kept in the order the
/// upstream table lists them. The base itself is appended as a
/// synthetic entry with a mid of exactly 1, so every lookup goes
/// through the same mapping. Built once per session and replaced
/// wholesale; an empty table is the legal "no rates" state.
#[derive(Clone, Debug, Default)]
pub struct RateTable {
    entries: Vec<Currency>,
    by_code: HashMap<String, Decimal>,
    designation: String,
    as_of: Option<NaiveDate>,
}

impl RateTable {
    pub fn from_entries<I>(designation: String, as_of: NaiveDate, entries: I) -> Self
    where
        I: IntoIterator<Item = Currency>,
    {
        let mut table = Self {
            designation,
            as_of: Some(as_of),
            ..Self::default()
        };

        for currency in entries {
            if currency.code() == BASE_CODE {
                warn!(code = %currency.code(), "payload quotes the base currency, keeping the unit rate");
                continue;
            }
            if *currency.mid() <= Decimal::ZERO {
                warn!(code = %currency.code(), mid = %currency.mid(), "skipping non-positive mid-rate");
                continue;
            }
            table.push(currency);
        }

        table.push(Currency::new(
            BASE_CODE.to_string(),
            BASE_NAME.to_string(),
            dec!(1),
        ));

        table
    }

    fn push(&mut self, currency: Currency) {
        if self.by_code.contains_key(currency.code()) {
            warn!(code = %currency.code(), "skipping duplicate currency code");
            return;
        }
        self.by_code
            .insert(currency.code().clone(), *currency.mid());
        self.entries.push(currency);
    }

    pub fn mid(&self, code: &str) -> Option<Decimal> {
        self.by_code.get(code).copied()
    }

    pub fn entries(&self) -> &[Currency] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}
