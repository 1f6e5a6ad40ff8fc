// Menu catalog entry as served by the external REST lookup. This crate does
// no I/O; the type only pins down the JSON shape and the conversion into a
// cart line item.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::billing::models::{LineItem, DEFAULT_LOCALE};

/// One menu entry from the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,

    /// English display name
    pub name_en: String,

    /// Hindi display name, when the menu carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_hi: Option<String>,

    pub price: Decimal,

    pub category: String,
}

impl MenuItem {
    /// Build a cart line item for this entry with the given quantity
    pub fn to_line_item(&self, quantity: i32) -> Result<LineItem> {
        let mut name = BTreeMap::new();
        name.insert(DEFAULT_LOCALE.to_string(), self.name_en.clone());
        if let Some(hindi) = &self.name_hi {
            name.insert("hi".to_string(), hindi.clone());
        }

        LineItem::new(self.id.clone(), name, self.price, quantity)
    }
}
