mod bill_request;
mod discount;
mod invoice;
mod line_item;
mod tax;

pub use bill_request::{BillRecordItem, BillRecordRequest};
pub use discount::{DiscountRequest, DiscountSpec};
pub use invoice::Invoice;
pub use line_item::{LineItem, DEFAULT_LOCALE};
pub use tax::{TaxComponent, TaxConfig, CGST_LABEL, GST_LABEL, SGST_LABEL};
