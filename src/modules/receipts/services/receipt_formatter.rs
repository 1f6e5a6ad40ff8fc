// Plain-text receipt rendering for a 40-column thermal printer layout.
//
// Strictly a formatting transform: every monetary line reuses the Invoice's
// already-rounded fields verbatim. The one presentational calculation is the
// per-row line amount (unit price × quantity), which is not a field on the
// invoice summary.

use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::billing::models::Invoice;
use crate::modules::receipts::models::ReceiptMetadata;

const WIDTH: usize = 40;
const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";

/// Render an invoice and its metadata as printable receipt text
///
/// Item names are shown in the requested locale, falling back to English.
pub fn format_receipt_text(invoice: &Invoice, metadata: &ReceiptMetadata, locale: &str) -> String {
    let rule = "-".repeat(WIDTH);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push(format!("Receipt No: {}", metadata.receipt_number));
    lines.push(format!(
        "Date:       {}",
        metadata.issued_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(format!("Customer:   {}", metadata.customer_name));
    lines.push(format!("Payment:    {}", metadata.payment_method));
    lines.push(rule.clone());

    lines.push(format!("{:<24}{:>4}{:>12}", "ITEM", "QTY", "AMOUNT"));
    for item in invoice.line_items() {
        let name = truncate_label(item.display_name(locale), 24);
        let line_amount = money::round_half_up(item.line_total());
        lines.push(format!(
            "{:<24}{:>4}{:>12}",
            name,
            item.quantity,
            money::format_amount(line_amount)
        ));
    }
    lines.push(rule.clone());

    lines.push(amount_row("Subtotal", invoice.subtotal()));
    if invoice.discount_applied() > Decimal::ZERO {
        lines.push(amount_row_negative("Discount", invoice.discount_applied()));
        lines.push(amount_row("Taxable Amount", invoice.taxable_amount()));
    }
    for component in invoice.tax_components() {
        lines.push(amount_row(&component.label, component.amount));
    }
    if invoice.service_charge() > Decimal::ZERO {
        lines.push(amount_row("Service Charge", invoice.service_charge()));
    }
    lines.push(rule.clone());
    lines.push(amount_row(GRAND_TOTAL_LABEL, invoice.grand_total()));
    lines.push(rule);

    lines.join("\n")
}

/// Read the grand total back out of formatted receipt text
///
/// Counterpart of `format_receipt_text` used to verify that a printed
/// receipt displays exactly the computed total.
pub fn parse_grand_total(receipt: &str) -> Option<Decimal> {
    receipt
        .lines()
        .find(|line| line.starts_with(GRAND_TOTAL_LABEL))?
        .rsplit(' ')
        .next()?
        .parse()
        .ok()
}

fn amount_row(label: &str, amount: Decimal) -> String {
    format!("{:<24}{:>16}", label, money::format_amount(amount))
}

fn amount_row_negative(label: &str, amount: Decimal) -> String {
    format!("{:<24}{:>16}", label, format!("-{}", money::format_amount(amount)))
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        label.chars().take(max_chars - 1).collect::<String>() + "…"
    }
}
