// Property-based tests for the invoice calculation pipeline
//
// Verifies the calculator's structural guarantees across many inputs:
// - referential transparency (same cart, same invoice)
// - exact subtotal
// - discount clamped to the subtotal
// - tax components summing to the tax total
// - grand total identity with no drift

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use restobill::billing::{compute_invoice, DiscountSpec, LineItem, TaxConfig};

/// Build a cart from (price in paise, quantity) rows
fn cart_from(rows: &[(u32, i32)]) -> Vec<LineItem> {
    rows.iter()
        .enumerate()
        .map(|(idx, (paise, qty))| {
            LineItem::named(
                format!("item-{}", idx),
                format!("Item {}", idx),
                Decimal::new(*paise as i64, 2),
                *qty,
            )
            .unwrap()
        })
        .collect()
}

fn cart_strategy() -> impl Strategy<Value = Vec<(u32, i32)>> {
    proptest::collection::vec((1u32..10_000_000u32, 1i32..20i32), 1..10)
}

proptest! {
    /// Property: identical inputs always yield an identical invoice
    #[test]
    fn test_computation_is_deterministic(
        rows in cart_strategy(),
        rate_percent in 0u8..=100u8,
        split in any::<bool>(),
    ) {
        let tax = TaxConfig::new(Decimal::from(rate_percent), split).unwrap();

        let first = compute_invoice(cart_from(&rows), None, tax, None).unwrap();
        let second = compute_invoice(cart_from(&rows), None, tax, None).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: subtotal equals the exact sum of unit_price × quantity
    #[test]
    fn test_subtotal_is_exact(rows in cart_strategy()) {
        let expected: Decimal = rows
            .iter()
            .map(|(paise, qty)| Decimal::new(*paise as i64, 2) * Decimal::from(*qty))
            .sum();

        let invoice = compute_invoice(
            cart_from(&rows),
            None,
            TaxConfig::new(Decimal::ZERO, false).unwrap(),
            None,
        )
        .unwrap();

        prop_assert_eq!(invoice.subtotal(), expected);
    }

    /// Property: the applied discount never exceeds the subtotal
    #[test]
    fn test_discount_clamped_to_subtotal(
        rows in cart_strategy(),
        discount_paise in 0u64..1_000_000_000u64,
    ) {
        let discount = DiscountSpec::Amount(Decimal::new(discount_paise as i64, 2));

        let invoice = compute_invoice(
            cart_from(&rows),
            Some(discount),
            TaxConfig::new(dec!(5), false).unwrap(),
            None,
        )
        .unwrap();

        prop_assert!(invoice.discount_applied() <= invoice.subtotal());
        prop_assert!(invoice.taxable_amount() >= Decimal::ZERO);
    }

    /// Property: tax components sum to the tax total, and split halves
    /// differ by at most one paisa with the larger half first
    #[test]
    fn test_tax_components_sum_to_total(
        rows in cart_strategy(),
        rate_percent in 0u8..=100u8,
        split in any::<bool>(),
    ) {
        let invoice = compute_invoice(
            cart_from(&rows),
            None,
            TaxConfig::new(Decimal::from(rate_percent), split).unwrap(),
            None,
        )
        .unwrap();

        let component_sum: Decimal =
            invoice.tax_components().iter().map(|c| c.amount).sum();
        prop_assert_eq!(component_sum, invoice.tax_total());

        if split {
            prop_assert_eq!(invoice.tax_components().len(), 2);
            let first = invoice.tax_components()[0].amount;
            let second = invoice.tax_components()[1].amount;
            prop_assert!(first >= second);
            prop_assert!(first - second <= dec!(0.01));
        } else {
            prop_assert_eq!(invoice.tax_components().len(), 1);
        }
    }

    /// Property: grand_total = taxable + tax_total + service_charge exactly
    #[test]
    fn test_grand_total_identity(
        rows in cart_strategy(),
        rate_percent in 0u8..=100u8,
        service_paise in 0u32..100_000u32,
    ) {
        let service = Decimal::new(service_paise as i64, 2);

        let invoice = compute_invoice(
            cart_from(&rows),
            None,
            TaxConfig::new(Decimal::from(rate_percent), true).unwrap(),
            Some(service),
        )
        .unwrap();

        prop_assert_eq!(
            invoice.grand_total(),
            invoice.taxable_amount() + invoice.tax_total() + invoice.service_charge()
        );
        prop_assert_eq!(invoice.service_charge(), service);
    }

    /// Property: a percent discount of 100 leaves a zero taxable base
    #[test]
    fn test_full_percent_discount_zeroes_taxable(rows in cart_strategy()) {
        let invoice = compute_invoice(
            cart_from(&rows),
            Some(DiscountSpec::Percent(Decimal::ONE_HUNDRED)),
            TaxConfig::new(dec!(18), true).unwrap(),
            None,
        )
        .unwrap();

        prop_assert_eq!(invoice.taxable_amount(), Decimal::ZERO);
        prop_assert_eq!(invoice.tax_total(), Decimal::ZERO);
        prop_assert_eq!(invoice.grand_total(), Decimal::ZERO);
    }
}

#[test]
fn test_line_items_pass_through_unchanged() {
    let items = cart_from(&[(25000, 1), (2000, 3)]);
    let invoice = compute_invoice(
        items.clone(),
        None,
        TaxConfig::new(dec!(18), true).unwrap(),
        None,
    )
    .unwrap();

    assert_eq!(invoice.line_items(), items.as_slice());
}
