pub mod receipt_formatter;

pub use receipt_formatter::{format_receipt_text, parse_grand_total};
