// Invoice calculation pipeline: line totals → discount → taxable base →
// tax split → service charge → grand total.
//
// All monetary math runs in Decimal, never binary floating point. Rounding
// happens only at the presentation points (subtotal, discount, tax
// components, grand total); everything downstream of a rounding point uses
// the rounded value, so the printed lines always add up exactly.

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{money, BillingError, Result};
use crate::modules::billing::models::{
    DiscountSpec, Invoice, LineItem, TaxComponent, TaxConfig, CGST_LABEL, GST_LABEL, SGST_LABEL,
};

/// Compute a fully itemized invoice breakdown for a cart
///
/// Pure and deterministic: same inputs always produce an identical Invoice.
/// Every precondition is checked before any computation, so a failure never
/// leaves partial results.
///
/// # Arguments
/// * `line_items` - non-empty cart; each item needs quantity ≥ 1 and a
///   non-negative unit price
/// * `discount` - optional pre-tax reduction, clamped to the subtotal
/// * `tax_config` - tax rate and whether to report equal CGST/SGST halves
/// * `service_charge` - optional flat post-tax addition, defaults to zero
pub fn compute_invoice(
    line_items: Vec<LineItem>,
    discount: Option<DiscountSpec>,
    tax_config: TaxConfig,
    service_charge: Option<Decimal>,
) -> Result<Invoice> {
    validate_line_items(&line_items)?;
    if let Some(spec) = &discount {
        spec.validate()?;
    }
    tax_config.validate()?;
    let service_charge = validate_service_charge(service_charge)?;

    // Exact sum at full precision, rounded once at the presentation point
    let raw_subtotal: Decimal = line_items.iter().map(LineItem::line_total).sum();
    let subtotal = money::round_half_up(raw_subtotal);

    // Discount rounding truncates toward zero so the rounded value never
    // exceeds the exact one, then clamps to the subtotal
    let discount_applied = match &discount {
        Some(spec) => money::truncate(spec.raw_discount(subtotal)).min(subtotal),
        None => Decimal::ZERO,
    };

    // Both operands are already at currency scale, the difference is exact
    let taxable_amount = subtotal - discount_applied;

    let raw_tax = taxable_amount * tax_config.rate_percent / Decimal::ONE_HUNDRED;
    let tax_total = money::round_half_up(raw_tax);
    let tax_components = build_tax_components(tax_total, tax_config.split_equally);

    // Sum of already-rounded terms, no drift
    let grand_total = taxable_amount + tax_total + service_charge;

    debug!(
        %subtotal,
        %discount_applied,
        %taxable_amount,
        %tax_total,
        %service_charge,
        %grand_total,
        "computed invoice breakdown"
    );

    Ok(Invoice::new(
        line_items,
        subtotal,
        discount_applied,
        taxable_amount,
        tax_components,
        tax_total,
        service_charge,
        grand_total,
    ))
}

/// Build the ordered tax lines for an already-rounded tax total
///
/// When split, the halves are computed in whole paise with the odd paisa
/// assigned to the first (CGST) component, so they always sum back to the
/// total exactly.
fn build_tax_components(tax_total: Decimal, split_equally: bool) -> Vec<TaxComponent> {
    if split_equally {
        let (first, second) = money::split_halves(tax_total);
        vec![
            TaxComponent::new(CGST_LABEL, first),
            TaxComponent::new(SGST_LABEL, second),
        ]
    } else {
        vec![TaxComponent::new(GST_LABEL, tax_total)]
    }
}

fn validate_line_items(line_items: &[LineItem]) -> Result<()> {
    if line_items.is_empty() {
        return Err(BillingError::invalid_input(
            "Cart must contain at least one line item",
        ));
    }

    for item in line_items {
        item.validate()?;
    }

    Ok(())
}

fn validate_service_charge(service_charge: Option<Decimal>) -> Result<Decimal> {
    let amount = service_charge.unwrap_or(Decimal::ZERO);

    if amount < Decimal::ZERO {
        return Err(BillingError::invalid_input(format!(
            "Service charge must be non-negative, got: {}",
            amount
        )));
    }

    Ok(money::round_half_up(amount))
}
