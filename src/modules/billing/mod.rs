// Billing module

pub mod models;
pub mod services;

pub use models::{
    BillRecordItem, BillRecordRequest, DiscountRequest, DiscountSpec, Invoice, LineItem,
    TaxComponent, TaxConfig,
};
pub use services::invoice_calculator::compute_invoice;
