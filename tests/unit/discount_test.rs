// Discount-mode resolution and rounding behavior.
//
// The wire form carries both amount and percent fields; exactly one must be
// set. Percent discounts are computed at full precision and truncated toward
// zero at the currency scale, so rounding never grants a larger discount
// than the exact value.

use rust_decimal_macros::dec;

use restobill::billing::{
    compute_invoice, DiscountRequest, DiscountSpec, LineItem, TaxConfig,
};

fn no_tax() -> TaxConfig {
    TaxConfig::new(dec!(0), false).unwrap()
}

#[test]
fn test_wire_form_resolves_amount_mode() {
    let json = r#"{"amount": "75.50"}"#;
    let request: DiscountRequest = serde_json::from_str(json).unwrap();

    assert_eq!(
        request.into_spec().unwrap(),
        DiscountSpec::Amount(dec!(75.50))
    );
}

#[test]
fn test_wire_form_resolves_percent_mode() {
    let json = r#"{"percent": "12.5"}"#;
    let request: DiscountRequest = serde_json::from_str(json).unwrap();

    assert_eq!(
        request.into_spec().unwrap(),
        DiscountSpec::Percent(dec!(12.5))
    );
}

#[test]
fn test_wire_form_rejects_both_modes() {
    let json = r#"{"amount": "50", "percent": "10"}"#;
    let request: DiscountRequest = serde_json::from_str(json).unwrap();

    assert!(request.into_spec().is_err());
}

#[test]
fn test_wire_form_rejects_neither_mode() {
    let request: DiscountRequest = serde_json::from_str("{}").unwrap();

    assert!(request.into_spec().is_err());
}

#[test]
fn test_percent_above_hundred_rejected() {
    let request = DiscountRequest {
        amount: None,
        percent: Some(dec!(100.01)),
    };

    let result = request.into_spec();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("between 0 and 100"));
}

#[test]
fn test_negative_amount_rejected() {
    let request = DiscountRequest {
        amount: Some(dec!(-0.01)),
        percent: None,
    };

    assert!(request.into_spec().is_err());
}

#[test]
fn test_fractional_percent_discount_truncates() {
    // 15% of 33.33 = 4.9995, truncated to 4.99 rather than rounded to 5.00
    let invoice = compute_invoice(
        vec![LineItem::named("i1", "Juice", dec!(33.33), 1).unwrap()],
        Some(DiscountSpec::Percent(dec!(15))),
        no_tax(),
        None,
    )
    .unwrap();

    assert_eq!(invoice.discount_applied(), dec!(4.99));
    assert_eq!(invoice.taxable_amount(), dec!(28.34));
}

#[test]
fn test_flat_amount_applied_verbatim() {
    let invoice = compute_invoice(
        vec![LineItem::named("i1", "Thali", dec!(150), 2).unwrap()],
        Some(DiscountSpec::Amount(dec!(49.50))),
        no_tax(),
        None,
    )
    .unwrap();

    assert_eq!(invoice.discount_applied(), dec!(49.50));
    assert_eq!(invoice.taxable_amount(), dec!(250.50));
}

#[test]
fn test_zero_discount_modes_are_noops() {
    let cart = || vec![LineItem::named("i1", "Thali", dec!(150), 1).unwrap()];

    let flat = compute_invoice(cart(), Some(DiscountSpec::Amount(dec!(0))), no_tax(), None)
        .unwrap();
    let percent =
        compute_invoice(cart(), Some(DiscountSpec::Percent(dec!(0))), no_tax(), None).unwrap();
    let none = compute_invoice(cart(), None, no_tax(), None).unwrap();

    assert_eq!(flat, percent);
    assert_eq!(percent, none);
}
