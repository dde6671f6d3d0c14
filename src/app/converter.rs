use rust_decimal::Decimal;

use crate::app::calc;
use crate::models::{BASE_CODE, Currency, RateTable};

const MAX_AMOUNT_LEN: usize = 16;
const DEFAULT_TARGET: &str = "EUR";

/// Screen state proper: the published rate table plus the three
/// conversion inputs. Everything displayed is derived from these on
/// demand; no intermediate result is cached anywhere.
#[derive(Clone, Debug)]
pub struct Converter {
    rates: RateTable,
    amount: String,
    from: String,
    to: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(RateTable::default(), BASE_CODE, DEFAULT_TARGET)
    }
}

impl Converter {
    pub fn new(rates: RateTable, from: &str, to: &str) -> Self {
        Self {
            rates,
            amount: String::new(),
            from: from.to_uppercase(),
            to: to.to_uppercase(),
        }
    }

    /// Accepts digits and a single decimal separator ("." or ","),
    /// ignores everything else. The field is capped so the row never
    /// overflows its box.
    pub fn push_char(&mut self, c: char) {
        if self.amount.len() >= MAX_AMOUNT_LEN {
            return;
        }
        match c {
            '0'..='9' => self.amount.push(c),
            '.' | ',' if !self.has_separator() => self.amount.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        self.amount.pop();
    }

    fn has_separator(&self) -> bool {
        self.amount.contains(['.', ','])
    }

    pub fn set_from(&mut self, code: String) {
        self.from = code;
    }

    pub fn set_to(&mut self, code: String) {
        self.to = code;
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn currencies(&self) -> &[Currency] {
        self.rates.entries()
    }

    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.rates.entries().iter().position(|c| c.code() == code)
    }

    pub fn result(&self) -> Option<Decimal> {
        calc::convert(&self.rates, &self.amount, &self.from, &self.to)
    }

    pub fn rate_line(&self) -> Option<String> {
        calc::rate_line(&self.rates, &self.from, &self.to)
    }
}
