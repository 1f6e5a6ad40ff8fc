// A line item represents one priced row of a cart: an item identifier, its
// display names (the menu carries parallel English/Hindi labels, modeled as
// a locale map), a unit price and a quantity. The line total is
// quantity × unit_price, kept at full precision; rounding happens only when
// the invoice subtotal is presented.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{BillingError, Result};

/// Locale tag used as the display-name fallback
pub const DEFAULT_LOCALE: &str = "en";

/// Represents a single priced item in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Opaque item identifier, unique within a catalog
    pub item_id: String,

    /// Display names keyed by locale tag (e.g. "en", "hi")
    pub name: BTreeMap<String, String>,

    /// Price per unit, non-negative
    pub unit_price: Decimal,

    /// Quantity, at least 1
    pub quantity: i32,
}

impl LineItem {
    /// Create a new line item with validation
    pub fn new(
        item_id: String,
        name: BTreeMap<String, String>,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<Self> {
        Self::validate_quantity(quantity)?;
        Self::validate_unit_price(unit_price)?;

        Ok(Self {
            item_id,
            name,
            unit_price,
            quantity,
        })
    }

    /// Create a line item with a single English display name
    pub fn named(
        item_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<Self> {
        let mut names = BTreeMap::new();
        names.insert(DEFAULT_LOCALE.to_string(), name.into());
        Self::new(item_id.into(), names, unit_price, quantity)
    }

    /// Display name for a locale, falling back to English and then to the
    /// item id when no label exists
    pub fn display_name(&self, locale: &str) -> &str {
        self.name
            .get(locale)
            .or_else(|| self.name.get(DEFAULT_LOCALE))
            .or_else(|| self.name.values().next())
            .map(String::as_str)
            .unwrap_or(&self.item_id)
    }

    /// Line total at full precision: unit_price × quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Re-validate an item that may have been built without the constructor
    /// (e.g. deserialized from JSON)
    pub fn validate(&self) -> Result<()> {
        Self::validate_quantity(self.quantity)?;
        Self::validate_unit_price(self.unit_price)?;
        Ok(())
    }

    /// Validate quantity (must be at least 1)
    fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity < 1 {
            return Err(BillingError::invalid_input(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    /// Validate unit price (must be non-negative)
    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(BillingError::invalid_input(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
