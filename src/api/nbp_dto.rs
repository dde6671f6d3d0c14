use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Currency, RateTable};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct NbpTableDto {
    table: String,
    no: String,
    effective_date: NaiveDate,
    rates: Vec<NbpRateDto>,
}

impl NbpTableDto {
    pub fn to_rate_table(&self) -> RateTable {
        RateTable::from_entries(
            self.table.clone(),
            self.effective_date,
            self.rates.iter().map(NbpRateDto::to_currency),
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct NbpRateDto {
    currency: String,
    code: String,
    mid: Decimal,
}

impl NbpRateDto {
    pub fn to_currency(&self) -> Currency {
        Currency::new(self.code.clone(), self.currency.clone(), self.mid)
    }
}
