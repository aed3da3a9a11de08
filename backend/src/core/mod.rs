//! Shared primitives: lenient numeric input and money formatting

pub mod numeric;

pub use numeric::{
    cents_to_string, format_money, in_money_range, parse_lenient, round_cents, to_cents, NumericField, MAX_MONEY,
};
