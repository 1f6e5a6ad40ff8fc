// The computed invoice breakdown. An Invoice is a pure snapshot produced by
// the calculator: created fresh on every recompute, never mutated and never
// persisted here. Fields are private with read accessors so downstream code
// (the receipt formatter in particular) can only reuse the already-rounded
// values, never rewrite them.

use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::LineItem;
use super::tax::TaxComponent;

/// Fully itemized invoice breakdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Invoice {
    /// Input line items, unchanged
    line_items: Vec<LineItem>,

    /// Sum of unit_price × quantity over all line items
    subtotal: Decimal,

    /// Actual discount subtracted, after rounding and clamping
    discount_applied: Decimal,

    /// subtotal − discount_applied; the base on which tax is computed
    taxable_amount: Decimal,

    /// Ordered tax lines: one GST entry, or CGST then SGST when split
    tax_components: Vec<TaxComponent>,

    /// Sum of the tax component amounts
    tax_total: Decimal,

    /// Flat post-tax service charge (zero if absent)
    service_charge: Decimal,

    /// taxable_amount + tax_total + service_charge
    grand_total: Decimal,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        line_items: Vec<LineItem>,
        subtotal: Decimal,
        discount_applied: Decimal,
        taxable_amount: Decimal,
        tax_components: Vec<TaxComponent>,
        tax_total: Decimal,
        service_charge: Decimal,
        grand_total: Decimal,
    ) -> Self {
        Self {
            line_items,
            subtotal,
            discount_applied,
            taxable_amount,
            tax_components,
            tax_total,
            service_charge,
            grand_total,
        }
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn discount_applied(&self) -> Decimal {
        self.discount_applied
    }

    pub fn taxable_amount(&self) -> Decimal {
        self.taxable_amount
    }

    pub fn tax_components(&self) -> &[TaxComponent] {
        &self.tax_components
    }

    pub fn tax_total(&self) -> Decimal {
        self.tax_total
    }

    pub fn service_charge(&self) -> Decimal {
        self.service_charge
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }
}
