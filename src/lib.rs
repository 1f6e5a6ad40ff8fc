//! Restobill Billing Computation Library
//!
//! Pure, deterministic bill/invoice computation for a restaurant point of
//! sale: itemized line totals, discount, GST split, service charge, grand
//! total, and plain-text receipt rendering.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::catalog;
pub use modules::receipts;
