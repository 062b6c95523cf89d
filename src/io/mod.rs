//! File output for sizing results.

/// CSV export of the component bill.
pub mod export;
