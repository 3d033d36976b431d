//! Per-member monthly balances and the unit dashboard figures built on them.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::BalanceService;
pub use types::{
    BalanceStatus, MemberBalance, MonthBalanceSheet, MonthTrend, PaymentHistoryItem, PaymentRecipient,
    WalletSummary,
};
