//! Report generation service.

use coliving_shared::config::EndDatePolicy;
use rust_decimal::Decimal;

use super::types::{CategoryAmount, ExpenseRow, TenantRow, UnitMonthReport};
use crate::balance::BalanceService;
use crate::expense::{Expense, ExpenseCategory};
use crate::period::MonthKey;
use crate::unit::UnitSnapshot;

/// Service for building unit reports.
pub struct ReportService;

impl ReportService {
    /// Spend per category for `month`, every category present.
    #[must_use]
    pub fn category_breakdown(expenses: &[Expense], month: MonthKey) -> Vec<CategoryAmount> {
        let mut amounts = [Decimal::ZERO; 5];
        for expense in expenses.iter().filter(|e| e.is_in(month)) {
            amounts[expense.category.index()] += expense.amount;
        }
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| CategoryAmount {
                category,
                amount: amounts[category.index()],
            })
            .collect()
    }

    /// Builds the monthly report for a unit.
    ///
    /// Tenant expectations are measured against the month's actual expense
    /// total, and paid counts expenses only. Every member gets a row; those
    /// `policy` leaves out of the pool are expected to pay nothing.
    #[must_use]
    pub fn unit_month_report(
        snapshot: &UnitSnapshot,
        month: MonthKey,
        policy: EndDatePolicy,
    ) -> UnitMonthReport {
        let rent = snapshot.unit.monthly_rent;
        let pool = BalanceService::pool(&snapshot.members, month, policy);
        let total = BalanceService::month_expense_total(&snapshot.expenses, month);

        let tenants = snapshot
            .members
            .iter()
            .map(|member| {
                let expected = BalanceService::pooled_expected(member, &pool, total, rent);
                let paid: Decimal = snapshot
                    .expenses
                    .iter()
                    .filter(|e| e.paid_by == member.user_id && e.is_in(month))
                    .map(|e| e.amount)
                    .sum();
                TenantRow {
                    name: member.name().to_string(),
                    role: member.role,
                    contribution: member.contribution.report_label(),
                    expected,
                    paid,
                    balance: paid - expected,
                }
            })
            .collect();

        let mut month_expenses: Vec<&Expense> =
            snapshot.expenses.iter().filter(|e| e.is_in(month)).collect();
        month_expenses.sort_by_key(|e| e.date);
        let expenses = month_expenses
            .into_iter()
            .map(|e| ExpenseRow {
                date: e.date,
                category: e.category,
                amount: e.amount,
                paid_by: e.payer_name.clone().unwrap_or_default(),
                payment_mode: e.payment_mode,
                notes: e.notes.clone().unwrap_or_default(),
            })
            .collect();

        UnitMonthReport {
            unit_name: snapshot.unit.name.clone(),
            month,
            currency: snapshot.unit.currency(),
            categories: Self::category_breakdown(&snapshot.expenses, month),
            total,
            tenants,
            expenses,
        }
    }
}
