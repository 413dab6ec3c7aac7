pub(crate) mod amount;
pub(crate) mod date;

pub(crate) use amount::{parse_purchases, parse_spend};
pub(crate) use date::parse_date;
