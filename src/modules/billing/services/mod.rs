pub mod invoice_calculator;

pub use invoice_calculator::compute_invoice;
