// Outbound payload for the external bill persistence API. The server
// recomputes totals from item ids and quantities on its side of the trust
// boundary, so this shape carries no client-computed amounts.

use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Request body accepted by the bill persistence endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillRecordRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<BillRecordItem>,
    pub apply_gst: bool,
}

/// One cart row in the persistence request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillRecordItem {
    pub item_id: String,
    pub quantity: i32,
}

impl BillRecordRequest {
    /// Build a persistence request from a cart
    pub fn from_cart(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        line_items: &[LineItem],
        apply_gst: bool,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            items: line_items
                .iter()
                .map(|item| BillRecordItem {
                    item_id: item.item_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            apply_gst,
        }
    }
}
