use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied receipt header fields
///
/// All values are opaque to the formatter; the receipt number in particular
/// is assigned by the persistence backend, never generated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptMetadata {
    pub receipt_number: String,
    pub issued_at: DateTime<Utc>,
    pub customer_name: String,
    pub payment_method: String,
}
