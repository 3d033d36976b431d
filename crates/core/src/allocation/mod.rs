//! Allocation engine: how a unit's costs are split between its members.
//!
//! Pure functions over a snapshot. Nothing here fails: missing values were
//! defaulted at the boundary, zero totals short-circuit to zero and negative
//! inputs flow through the arithmetic unchanged.

pub mod engine;
pub mod total;


pub use engine::AllocationEngine;
pub use total::{ExpectedEntriesView, ResolvedTotal, TotalSource};
