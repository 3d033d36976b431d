//! Unit reports and CSV export.
//!
//! [`ReportService`] builds the figures; [`export`] renders them as CSV. Rendering
//! produces bytes; writing them anywhere is the caller's job.

pub mod chart;
pub mod export;
pub mod error;
pub mod service;
pub mod types;


pub use chart::{ChartRow, MonthOnMonthChart};
pub use error::ReportError;
pub use service::ReportService;
pub use types::{CategoryAmount, ExpenseRow, TenantRow, UnitMonthReport};
