//! Prometheus metrics for the items service.
//!
//! - Recorder installation and the `/metrics` handler
//! - [`ItemMetrics`] for domain operations
//! - [`metrics_middleware`] for per-request HTTP metrics
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, ItemMetrics};
//!
//! init_metrics();
//! ItemMetrics::record_operation("create", "success");
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod items;
pub mod middleware;

pub use items::ItemMetrics;
pub use middleware::metrics_middleware;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder. Later calls return the same handle.
///
/// If another recorder is already installed, metrics are rendered from a
/// detached recorder and stay empty.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus metrics recorder initialized");
            register_metric_descriptions();
            handle
        }
        Err(e) => {
            warn!("Prometheus recorder not installed: {}", e);
            PrometheusBuilder::new().build_recorder().handle()
        }
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for `GET /metrics`
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    describe_counter!(
        "items_operations_total",
        "Item operations by operation and outcome"
    );
    describe_gauge!("items_total", "Items by activity state at the last stats query");
}
