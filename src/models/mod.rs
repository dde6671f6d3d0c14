pub mod currency;
pub mod rate_table;

pub use currency::Currency;
pub use rate_table::{BASE_CODE, RateTable};
