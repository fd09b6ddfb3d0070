//! Item domain metrics.

use metrics::{counter, gauge};

/// Item metrics recorder
pub struct ItemMetrics;

impl ItemMetrics {
    /// Count one item operation.
    ///
    /// `operation` is one of `create`, `get`, `list`, `update`, `delete`,
    /// `deactivate`, `stats`; `outcome` is `success`, `not_found`,
    /// `invalid` or `error`.
    pub fn record_operation(operation: &'static str, outcome: &'static str) {
        counter!(
            "items_operations_total",
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    /// Publish the counts from the latest stats query.
    pub fn set_totals(active: u64, inactive: u64) {
        gauge!("items_total", "state" => "active").set(active as f64);
        gauge!("items_total", "state" => "inactive").set(inactive as f64);
    }
}
