//! Fetch bookkeeping for the two backend endpoints.
//!
//! Loaders never perform I/O. They hand out a request descriptor, the caller
//! performs the HTTP call however its platform allows, and feeds the outcome
//! back. Failures are logged and leave previously published data in place.

use tracing::{debug, error, info, warn};

use crate::{CropCatalog, FetchError, ForecastResponse, SellersSummary};

/// Progress of the most recent fetch of a loader.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Best/worst sellers, fetched once per page lifetime.
#[derive(Debug, Clone, Default)]
pub struct SummaryLoader {
    started: bool,
    status: LoadStatus,
    summary: SellersSummary,
    catalog: CropCatalog,
}

impl SummaryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time only; the caller then issues the request.
    pub fn start(&mut self) -> bool {
        if self.started {
            debug!("Sellers summary already requested, skipping");
            return false;
        }
        self.started = true;
        self.status = LoadStatus::Loading;
        true
    }

    pub fn complete(&mut self, result: Result<SellersSummary, FetchError>) {
        match result {
            Ok(summary) => {
                info!(
                    best = summary.best_sellers.len(),
                    worst = summary.worst_sellers.len(),
                    "Sellers summary loaded"
                );
                self.catalog = CropCatalog::from_sellers(&summary.best_sellers, &summary.worst_sellers);
                self.summary = summary;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                error!("Failed to load sellers summary: {}", err);
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    pub fn summary(&self) -> &SellersSummary {
        &self.summary
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

/// Monotonic identifier of a forecast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Everything needed to issue one forecast fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub token: RequestToken,
    pub crop: String,
    pub periods: u32,
}

impl ForecastRequest {
    /// Query parameters in the order the backend documents them.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [("crop", self.crop.clone()), ("periods", self.periods.to_string())]
    }
}

/// A forecast together with the crop it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedForecast {
    pub crop: String,
    pub response: ForecastResponse,
}

/// Outcome of feeding a completion into [`ForecastLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer request has been issued since; the result was dropped.
    Stale,
}

/// Forecast for the selected crop, refetched on every selection change.
///
/// Only the completion of the latest issued request is accepted, whatever the
/// order in which responses arrive.
#[derive(Debug, Clone)]
pub struct ForecastLoader {
    periods: u32,
    issued: u64,
    pending: Option<ForecastRequest>,
    status: LoadStatus,
    current: Option<LoadedForecast>,
}

impl ForecastLoader {
    pub fn new(periods: u32) -> Self {
        Self {
            periods,
            issued: 0,
            pending: None,
            status: LoadStatus::Idle,
            current: None,
        }
    }

    /// Issues a request for `crop`, superseding any request still in flight.
    pub fn request(&mut self, crop: &str) -> ForecastRequest {
        self.issued += 1;
        let request = ForecastRequest {
            token: RequestToken(self.issued),
            crop: crop.to_string(),
            periods: self.periods,
        };
        if let Some(previous) = self.pending.replace(request.clone()) {
            debug!(
                superseded = %previous.crop,
                token = previous.token.value(),
                "Forecast request superseded"
            );
        }
        self.status = LoadStatus::Loading;
        debug!(crop, token = request.token.value(), "Forecast requested");
        request
    }

    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<ForecastResponse, FetchError>,
    ) -> Completion {
        let request = match self.pending.take() {
            Some(pending) if pending.token == token => pending,
            other => {
                self.pending = other;
                warn!(token = token.value(), "Discarding stale forecast response");
                return Completion::Stale;
            }
        };

        match result {
            Ok(response) => {
                if let Some(echoed) = response.crop.as_deref() {
                    if echoed != request.crop {
                        warn!(requested = %request.crop, echoed, "Backend echoed a different crop");
                    }
                }
                info!(
                    crop = %request.crop,
                    historical = response.historical.len(),
                    forecast = response.forecast.len(),
                    "Forecast loaded"
                );
                self.current = Some(LoadedForecast {
                    crop: request.crop,
                    response,
                });
                self.status = LoadStatus::Loaded;
                Completion::Applied
            }
            Err(err) => {
                error!("Failed to load forecast for {}: {}", request.crop, err);
                self.status = LoadStatus::Failed(err);
                Completion::Failed
            }
        }
    }

    pub fn current(&self) -> Option<&LoadedForecast> {
        self.current.as_ref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForecastPoint, HistoricalPoint, SellerRecord};

    fn forecast_for(crop: &str, value: f64) -> ForecastResponse {
        ForecastResponse {
            crop: Some(crop.to_string()),
            historical: vec![HistoricalPoint {
                date: "2024-03-01".into(),
                actual: value,
            }],
            forecast: vec![ForecastPoint {
                date: "2024-03-02".into(),
                forecast: value + 1.0,
            }],
        }
    }

    #[test]
    fn test_summary_loader_starts_once() {
        let mut loader = SummaryLoader::new();
        assert!(loader.start());
        assert!(loader.status().is_loading());
        assert!(!loader.start());
    }

    #[test]
    fn test_summary_loader_publishes_and_derives_catalog() {
        let mut loader = SummaryLoader::new();
        loader.start();
        loader.complete(Ok(SellersSummary {
            best_sellers: vec![SellerRecord::new("Rice", 10.0)],
            worst_sellers: vec![SellerRecord::new("Corn", 1.0)],
        }));

        assert_eq!(loader.status(), &LoadStatus::Loaded);
        assert_eq!(loader.summary().best_sellers.len(), 1);
        assert_eq!(loader.catalog().as_slice(), &["Rice", "Corn"]);
    }

    #[test]
    fn test_summary_loader_failure_keeps_empty_state() {
        let mut loader = SummaryLoader::new();
        loader.start();
        loader.complete(Err(FetchError::Network("offline".into())));

        assert!(loader.summary().best_sellers.is_empty());
        assert!(loader.summary().worst_sellers.is_empty());
        assert!(loader.catalog().is_empty());
        assert_eq!(
            loader.status().error(),
            Some(&FetchError::Network("offline".into()))
        );
    }

    #[test]
    fn test_forecast_request_carries_periods() {
        let mut loader = ForecastLoader::new(7);
        let request = loader.request("Rice");
        assert_eq!(request.crop, "Rice");
        assert_eq!(request.periods, 7);
        assert_eq!(
            request.query(),
            [("crop", "Rice".to_string()), ("periods", "7".to_string())]
        );
        assert!(loader.is_loading());
    }

    #[test]
    fn test_forecast_tokens_increase() {
        let mut loader = ForecastLoader::new(7);
        let first = loader.request("Rice").token;
        let second = loader.request("Rice").token;
        assert!(second > first);
    }

    #[test]
    fn test_forecast_out_of_order_resolution_keeps_latest() {
        let mut loader = ForecastLoader::new(7);
        let a = loader.request("Rice");
        let b = loader.request("Wheat");

        assert_eq!(loader.complete(b.token, Ok(forecast_for("Wheat", 2.0))), Completion::Applied);
        assert_eq!(loader.complete(a.token, Ok(forecast_for("Rice", 1.0))), Completion::Stale);

        let current = loader.current().unwrap();
        assert_eq!(current.crop, "Wheat");
        assert_eq!(current.response, forecast_for("Wheat", 2.0));
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_forecast_in_order_resolution_keeps_latest() {
        let mut loader = ForecastLoader::new(7);
        let a = loader.request("Rice");
        let b = loader.request("Wheat");

        assert_eq!(loader.complete(a.token, Ok(forecast_for("Rice", 1.0))), Completion::Stale);
        assert!(loader.current().is_none());
        assert!(loader.is_loading());

        assert_eq!(loader.complete(b.token, Ok(forecast_for("Wheat", 2.0))), Completion::Applied);
        assert_eq!(loader.current().unwrap().crop, "Wheat");
    }

    #[test]
    fn test_forecast_failure_keeps_previous_forecast() {
        let mut loader = ForecastLoader::new(7);
        let a = loader.request("Rice");
        loader.complete(a.token, Ok(forecast_for("Rice", 1.0)));

        let b = loader.request("Corn");
        let outcome = loader.complete(
            b.token,
            Err(FetchError::Http {
                status: 400,
                message: "Not enough data to forecast for this crop.".into(),
            }),
        );

        assert_eq!(outcome, Completion::Failed);
        assert_eq!(loader.current().unwrap().crop, "Rice");
        assert!(loader.status().error().is_some());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut loader = ForecastLoader::new(7);
        let a = loader.request("Rice");
        let b = loader.request("Wheat");

        let outcome = loader.complete(a.token, Err(FetchError::Network("timeout".into())));
        assert_eq!(outcome, Completion::Stale);
        assert!(loader.status().is_loading());

        loader.complete(b.token, Ok(forecast_for("Wheat", 3.0)));
        assert_eq!(loader.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn test_duplicate_completion_is_stale() {
        let mut loader = ForecastLoader::new(7);
        let a = loader.request("Rice");
        assert_eq!(loader.complete(a.token, Ok(forecast_for("Rice", 1.0))), Completion::Applied);
        assert_eq!(loader.complete(a.token, Ok(forecast_for("Rice", 9.0))), Completion::Stale);
        assert_eq!(loader.current().unwrap().response, forecast_for("Rice", 1.0));
    }
}
