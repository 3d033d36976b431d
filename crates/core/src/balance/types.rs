//! Balance data types.

use chrono::{DateTime, Utc};
use coliving_shared::types::{BalancePaymentId, MemberId, UserId};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::allocation::ResolvedTotal;
use crate::expense::PaymentMode;
use crate::member::MemberRole;
use crate::period::MonthKey;

/// Direction of a member's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Paid more than expected; the unit owes them.
    Owed,
    /// Paid less than expected.
    Owes,
    /// Exactly even.
    Settled,
}

impl BalanceStatus {
    /// Status for a signed balance.
    #[must_use]
    pub fn from_balance(balance: Decimal) -> Self {
        match balance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::Owed,
            std::cmp::Ordering::Less => Self::Owes,
            std::cmp::Ordering::Equal => Self::Settled,
        }
    }
}

/// One member's position for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberBalance {
    /// Membership ID.
    pub member_id: MemberId,
    /// Member's user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: MemberRole,
    /// Whether the member took part in the allocation.
    pub in_pool: bool,
    /// Amount the member is expected to contribute.
    pub expected: Decimal,
    /// Expenses paid plus balance payments made for the month.
    pub paid: Decimal,
    /// `paid - expected`.
    pub balance: Decimal,
    /// Sign of the balance.
    pub status: BalanceStatus,
}

impl MemberBalance {
    /// Amount to prefill when the member records a payment: what they owe,
    /// or 0 when they owe nothing.
    #[must_use]
    pub fn suggested_payment(&self) -> Decimal {
        if self.balance < Decimal::ZERO {
            self.balance.abs()
        } else {
            Decimal::ZERO
        }
    }
}

/// Money collected by master tenants against the month's spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletSummary {
    /// Balance payments for the month plus master tenants' own expected share.
    pub amount_received: Decimal,
    /// Expenses logged in the month.
    pub month_expenses: Decimal,
    /// `amount_received - month_expenses`.
    pub wallet_balance: Decimal,
}

/// Spend this month against last month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTrend {
    /// Expenses logged this month.
    pub this_month: Decimal,
    /// Expenses logged last month.
    pub last_month: Decimal,
    /// Percent change, 0 when last month had no spend.
    pub percent_change: Decimal,
}

/// Balances for every member of a unit for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBalanceSheet {
    /// Month covered.
    pub month: MonthKey,
    /// Total share members split and where it came from.
    pub total: ResolvedTotal,
    /// Per-member rows in member order.
    pub members: Vec<MemberBalance>,
    /// Wallet figures.
    pub wallet: WalletSummary,
}

impl MonthBalanceSheet {
    /// Row for `user_id`.
    #[must_use]
    pub fn for_user(&self, user_id: UserId) -> Option<&MemberBalance> {
        self.members.iter().find(|m| m.user_id == user_id)
    }
}

/// Who a balance payment went to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PaymentRecipient {
    /// A named member.
    Member(String),
    /// A member whose name is not known.
    MasterTenant,
    /// Paid straight to the landlord or supplier.
    Direct,
}

impl PaymentRecipient {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Member(name) => name,
            Self::MasterTenant => "Master tenant",
            Self::Direct => "Direct",
        }
    }
}

/// A recorded balance payment as listed for its payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentHistoryItem {
    /// Payment ID.
    pub id: BalancePaymentId,
    /// Amount paid.
    pub amount: Decimal,
    /// Month settled.
    pub for_month: MonthKey,
    /// Recipient.
    pub recipient: PaymentRecipient,
    /// Payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// When it was recorded.
    pub paid_at: DateTime<Utc>,
}
