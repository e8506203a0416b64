use tracing::{info, warn};

use crate::chart::{BEST_SELLERS_STYLE, WORST_SELLERS_STYLE};
use crate::{
    BarSeries, Completion, CropCatalog, DEFAULT_CROP, DEFAULT_FORECAST_PERIODS, FetchError,
    ForecastLoader, ForecastRequest, ForecastResponse, LineSeries, LoadStatus, LoadedForecast,
    RequestToken, SelectionController, SelectionError, SellersSummary, SummaryLoader,
    build_bar_series, build_line_series,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Crop selected before the user picks one. `None` waits for the user.
    pub default_crop: Option<String>,
    /// Forecast horizon sent as `periods`.
    pub forecast_periods: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_crop: Some(DEFAULT_CROP.to_string()),
            forecast_periods: DEFAULT_FORECAST_PERIODS,
        }
    }
}

/// Fetches to issue when the page first appears.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MountRequests {
    pub summary: bool,
    pub forecast: Option<ForecastRequest>,
}

/// Page state: sellers summary, selected crop and its forecast.
///
/// Selection changes go straight to the forecast loader; there is no other
/// path by which a forecast fetch is issued.
#[derive(Debug, Clone)]
pub struct Dashboard {
    summary: SummaryLoader,
    selection: SelectionController,
    forecast: ForecastLoader,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            summary: SummaryLoader::new(),
            selection: SelectionController::new(config.default_crop.as_deref()),
            forecast: ForecastLoader::new(config.forecast_periods),
        }
    }

    /// Requests issued on first mount. Later calls return nothing.
    pub fn mount(&mut self) -> MountRequests {
        if !self.summary.start() {
            return MountRequests::default();
        }
        let forecast = self
            .selection
            .selection()
            .map(str::to_string)
            .map(|crop| self.forecast.request(&crop));
        if forecast.is_none() {
            info!("No default crop configured, waiting for a selection");
        }
        MountRequests {
            summary: true,
            forecast,
        }
    }

    pub fn select(&mut self, crop: &str) -> Result<ForecastRequest, SelectionError> {
        let crop = self.selection.set_selection(crop)?.to_string();
        if !self.summary.catalog().is_empty() && !self.summary.catalog().contains(&crop) {
            warn!(crop = %crop, "Selected crop is not among the listed sellers");
        }
        Ok(self.forecast.request(&crop))
    }

    pub fn apply_summary(&mut self, result: Result<SellersSummary, FetchError>) {
        self.summary.complete(result);
    }

    pub fn apply_forecast(
        &mut self,
        token: RequestToken,
        result: Result<ForecastResponse, FetchError>,
    ) -> Completion {
        self.forecast.complete(token, result)
    }

    pub fn best_sellers_chart(&self) -> BarSeries {
        build_bar_series(&self.summary.summary().best_sellers, BEST_SELLERS_STYLE)
    }

    pub fn worst_sellers_chart(&self) -> BarSeries {
        build_bar_series(&self.summary.summary().worst_sellers, WORST_SELLERS_STYLE)
    }

    /// `None` until a forecast has been loaded, so the chart is not drawn empty.
    pub fn forecast_chart(&self) -> Option<LineSeries> {
        self.forecast
            .current()
            .map(|loaded| build_line_series(Some(&loaded.response)))
    }

    pub fn loaded_forecast(&self) -> Option<&LoadedForecast> {
        self.forecast.current()
    }

    pub fn catalog(&self) -> &CropCatalog {
        self.summary.catalog()
    }

    /// Crops offered by the selector: the catalog and nothing else.
    pub fn selector_options(&self) -> Vec<String> {
        self.catalog().as_slice().to_vec()
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.selection()
    }

    pub fn summary_status(&self) -> &LoadStatus {
        self.summary.status()
    }

    pub fn forecast_status(&self) -> &LoadStatus {
        self.forecast.status()
    }

    pub fn is_forecast_loading(&self) -> bool {
        self.forecast.is_loading()
    }
}
