//! Shared types and state for the crop sales dashboard.
//!
//! The transport structs mirror the backend's JSON payloads so the frontend can
//! deserialize API responses directly. Everything else in this crate is free of
//! I/O: loaders hand out request descriptors and accept completions, which keeps
//! the ordering rules testable on the host.

mod catalog;
pub mod chart;
mod dashboard;
mod error;
mod forecast;
mod loader;
mod selection;
mod sellers;

pub use catalog::CropCatalog;
pub use chart::{BarSeries, LineSeries, SeriesStyle, build_bar_series, build_line_series};
pub use dashboard::{Dashboard, DashboardConfig, MountRequests};
pub use error::{FetchError, SelectionError};
pub use forecast::{ForecastPoint, ForecastResponse, HistoricalPoint};
pub use loader::{
    Completion, ForecastLoader, ForecastRequest, LoadStatus, LoadedForecast, RequestToken,
    SummaryLoader,
};
pub use selection::SelectionController;
pub use sellers::{SellerRecord, SellersSummary};

use serde::{Deserialize, Serialize};

/// Endpoint serving the top and bottom sellers.
pub const SELLERS_ENDPOINT: &str = "/best_worst_sellers";

/// Endpoint serving historical and forecast series for one crop.
pub const FORECAST_ENDPOINT: &str = "/forecast";

/// Forecast horizon requested when nothing else is configured.
pub const DEFAULT_FORECAST_PERIODS: u32 = 7;

/// Crop selected on first load when nothing else is configured.
pub const DEFAULT_CROP: &str = "Rice";

/// Error body returned by the backend alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_decodes_backend_body() {
        let body = r#"{"error": "Not enough data to forecast for this crop."}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error, "Not enough data to forecast for this crop.");
    }
}
