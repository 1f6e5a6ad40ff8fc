// Discount applied to the subtotal before tax. The source systems this
// replaces conflated flat-amount and percentage discounts per call site;
// here the caller picks exactly one mode.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{BillingError, Result};

/// Discount mode: a flat amount off the subtotal, or a percentage of it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSpec {
    /// Flat amount subtracted from the subtotal
    Amount(Decimal),

    /// Percentage of the subtotal, 0-100
    Percent(Decimal),
}

impl DiscountSpec {
    /// Validate the discount parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            DiscountSpec::Amount(amount) => {
                if *amount < Decimal::ZERO {
                    return Err(BillingError::invalid_input(format!(
                        "Discount amount must be non-negative, got: {}",
                        amount
                    )));
                }
            }
            DiscountSpec::Percent(percent) => {
                if *percent < Decimal::ZERO || *percent > Decimal::ONE_HUNDRED {
                    return Err(BillingError::invalid_input(format!(
                        "Discount percent must be between 0 and 100, got: {}",
                        percent
                    )));
                }
            }
        }

        Ok(())
    }

    /// Exact discount for a subtotal, before rounding and clamping
    pub(crate) fn raw_discount(&self, subtotal: Decimal) -> Decimal {
        match self {
            DiscountSpec::Amount(amount) => *amount,
            DiscountSpec::Percent(percent) => subtotal * *percent / Decimal::ONE_HUNDRED,
        }
    }
}

/// Wire-facing discount form as external callers submit it
///
/// The JSON shape carries both fields; exactly one must be set. This is the
/// boundary where the ambiguous legacy shape is rejected before it reaches
/// the calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct DiscountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
}

impl DiscountRequest {
    /// Resolve the request into a validated discount mode
    pub fn into_spec(self) -> Result<DiscountSpec> {
        let spec = match (self.amount, self.percent) {
            (Some(_), Some(_)) => {
                return Err(BillingError::invalid_input(
                    "Ambiguous discount mode: amount and percent are mutually exclusive",
                ))
            }
            (None, None) => {
                return Err(BillingError::invalid_input(
                    "Discount requires either amount or percent",
                ))
            }
            (Some(amount), None) => DiscountSpec::Amount(amount),
            (None, Some(percent)) => DiscountSpec::Percent(percent),
        };

        spec.validate()?;
        Ok(spec)
    }
}
