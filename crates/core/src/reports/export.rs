//! CSV rendering.
//!
//! Output is UTF-8 with a byte order mark so spreadsheet apps pick the right
//! encoding. Amounts have two decimals; amount headers carry the currency
//! symbol.

use chrono::NaiveDate;
use coliving_shared::types::Currency;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ReportError;
use super::types::{ExpenseRow, UnitMonthReport};
use crate::contribution::Contribution;
use crate::expense::{Expense, PaymentMode};
use crate::period::MonthKey;

const BOM: &[u8] = b"\xEF\xBB\xBF";

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(mut wtr: Writer<Vec<u8>>) -> Result<Vec<u8>, ReportError> {
    wtr.flush()?;
    wtr.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

/// Renders one block of rows.
fn section(
    rows: impl FnOnce(&mut Writer<Vec<u8>>) -> Result<(), ReportError>,
) -> Result<Vec<u8>, ReportError> {
    let mut wtr = writer();
    rows(&mut wtr)?;
    finish(wtr)
}

/// BOM followed by the sections, separated by blank lines.
fn document(sections: &[Vec<u8>]) -> Vec<u8> {
    let mut out = BOM.to_vec();
    for (i, block) in sections.iter().enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(block);
    }
    out
}

/// Two-decimal amount, midpoints away from zero.
fn amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn amount_header(label: &str, currency: Currency) -> String {
    format!("{label} ({})", currency.symbol())
}

/// Renders the monthly unit report: title block, category totals, tenant
/// contributions and expense details.
///
/// # Errors
///
/// Returns `ReportError` if encoding fails.
pub fn unit_report_csv(report: &UnitMonthReport) -> Result<Vec<u8>, ReportError> {
    let currency = report.currency;

    let title = section(|w| {
        w.write_record(["Coliving"])?;
        w.write_record([report.title()])?;
        Ok(())
    })?;

    let unit = section(|w| {
        w.write_record(["Unit Report"])?;
        w.write_record(["Unit", report.unit_name.as_str()])?;
        w.write_record(["Period".to_string(), report.month.long_label()])?;
        Ok(())
    })?;

    let categories = section(|w| {
        w.write_record(["Monthly Expenses by Category"])?;
        w.write_record(["Category".to_string(), amount_header("Amount", currency)])?;
        for c in &report.categories {
            w.write_record([c.category.label().to_string(), amount(c.amount)])?;
        }
        w.write_record(["Total".to_string(), amount(report.total)])?;
        Ok(())
    })?;

    let tenants = section(|w| {
        w.write_record(["Tenant Contributions"])?;
        w.write_record([
            "Name".to_string(),
            "Role".to_string(),
            "Contribution".to_string(),
            amount_header("Expected", currency),
            amount_header("Paid", currency),
            amount_header("Balance", currency),
        ])?;
        for t in &report.tenants {
            w.write_record([
                t.name.clone(),
                t.role.label().to_string(),
                t.contribution.clone(),
                amount(t.expected),
                amount(t.paid),
                amount(t.balance),
            ])?;
        }
        Ok(())
    })?;

    let details = section(|w| {
        w.write_record(["Expense Details"])?;
        write_expense_header(w, currency)?;
        for e in &report.expenses {
            write_expense_row(w, e, PaymentMode::as_str)?;
        }
        Ok(())
    })?;

    Ok(document(&[title, unit, categories, tenants, details]))
}

fn write_expense_header(wtr: &mut Writer<Vec<u8>>, currency: Currency) -> Result<(), ReportError> {
    wtr.write_record([
        "Date".to_string(),
        "Category".to_string(),
        amount_header("Amount", currency),
        "Paid By".to_string(),
        "Payment Mode".to_string(),
        "Notes".to_string(),
    ])?;
    Ok(())
}

fn write_expense_row(
    wtr: &mut Writer<Vec<u8>>,
    row: &ExpenseRow,
    mode: impl FnOnce(PaymentMode) -> &'static str,
) -> Result<(), ReportError> {
    wtr.write_record([
        row.date.to_string(),
        row.category.label().to_string(),
        amount(row.amount),
        row.paid_by.clone(),
        row.payment_mode.map(mode).unwrap_or_default().to_string(),
        row.notes.clone(),
    ])?;
    Ok(())
}

/// Renders an expense list with payment mode labels.
///
/// # Errors
///
/// Returns `ReportError` if encoding fails.
pub fn expenses_csv(expenses: &[Expense], currency: Currency) -> Result<Vec<u8>, ReportError> {
    let mut wtr = writer();
    write_expense_header(&mut wtr, currency)?;
    for e in expenses {
        let row = ExpenseRow {
            date: e.date,
            category: e.category,
            amount: e.amount,
            paid_by: e.payer_name.clone().unwrap_or_default(),
            payment_mode: e.payment_mode,
            notes: e.notes.clone().unwrap_or_default(),
        };
        write_expense_row(&mut wtr, &row, PaymentMode::label)?;
    }
    Ok(document(&[finish(wtr)?]))
}

/// Renders contribution requests with their payments summarised as
/// `name: amount (date)` joined by `; `.
///
/// # Errors
///
/// Returns `ReportError` if encoding fails.
pub fn contributions_csv(
    contributions: &[Contribution],
    currency: Currency,
) -> Result<Vec<u8>, ReportError> {
    let mut wtr = writer();
    wtr.write_record([
        "Reason".to_string(),
        amount_header("Amount", currency),
        "Status".to_string(),
        "Requested By".to_string(),
        "Date".to_string(),
        "Payments".to_string(),
    ])?;
    for c in contributions {
        let payments = c
            .payments
            .iter()
            .map(|p| {
                format!(
                    "{}: {} ({})",
                    p.payer_name.as_deref().unwrap_or("Unknown"),
                    amount(p.amount),
                    p.paid_at.date_naive()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        wtr.write_record([
            c.reason.clone(),
            amount(c.amount),
            c.status.as_str().to_string(),
            c.requester_name.clone().unwrap_or_default(),
            c.created_at.date_naive().to_string(),
            payments,
        ])?;
    }
    Ok(document(&[finish(wtr)?]))
}

/// Replaces anything outside `[A-Za-z0-9_-]` with `_`.
#[must_use]
pub fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// `report_<unit>_<YYYY-MM>.csv`.
#[must_use]
pub fn report_file_name(unit_name: &str, month: MonthKey) -> String {
    format!("report_{}_{}.csv", safe_name(unit_name), month.key())
}

/// `expenses_<unit>_<YYYY-MM-DD>.csv`.
#[must_use]
pub fn expenses_file_name(unit_name: &str, on: NaiveDate) -> String {
    format!("expenses_{}_{on}.csv", safe_name(unit_name))
}

/// `contributions_<unit>_<YYYY-MM-DD>.csv`.
#[must_use]
pub fn contributions_file_name(unit_name: &str, on: NaiveDate) -> String {
    format!("contributions_{}_{on}.csv", safe_name(unit_name))
}
