// Receipts module

pub mod models;
pub mod services;

pub use models::ReceiptMetadata;
pub use services::receipt_formatter::{format_receipt_text, parse_grand_total};
