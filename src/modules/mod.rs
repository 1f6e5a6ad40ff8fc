pub mod billing;
pub mod catalog;
pub mod receipts;
