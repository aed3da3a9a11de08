//! Quote exports

pub mod text;

pub use text::{render_quote_text, QuoteSummary};
