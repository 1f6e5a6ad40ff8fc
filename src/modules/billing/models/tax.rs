// Tax configuration for an invoice. A single rate is applied to the taxable
// amount; GST venues report it as two equal CGST/SGST components, others as
// one GST line. The rate is always threaded in explicitly so no call site
// can bake in its own assumption.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{BillingError, Result};

/// Label for the single tax line when the tax is not split
pub const GST_LABEL: &str = "GST";

/// Label for the central half of a split tax
pub const CGST_LABEL: &str = "CGST";

/// Label for the state half of a split tax
pub const SGST_LABEL: &str = "SGST";

/// Describes how tax is computed for an invoice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TaxConfig {
    /// Tax rate in percent (e.g. 18 for 18% GST)
    pub rate_percent: Decimal,

    /// Report the tax as two equal CGST/SGST components
    pub split_equally: bool,
}

impl TaxConfig {
    /// Create a tax configuration with validation
    pub fn new(rate_percent: Decimal, split_equally: bool) -> Result<Self> {
        let config = Self {
            rate_percent,
            split_equally,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the tax rate (must be non-negative)
    pub fn validate(&self) -> Result<()> {
        if self.rate_percent < Decimal::ZERO {
            return Err(BillingError::invalid_input(format!(
                "Tax rate must be non-negative, got: {}",
                self.rate_percent
            )));
        }

        Ok(())
    }
}

/// One labeled tax line on the computed invoice
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxComponent {
    pub label: String,
    pub amount: Decimal,
}

impl TaxComponent {
    pub fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}
