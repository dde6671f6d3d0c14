use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One row of the published table: `mid` is quoted in base-currency
/// units per one unit of this currency.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Currency {
    code: String,
    name: String,
    mid: Decimal,
}
