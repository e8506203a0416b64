use cropdash_common::{FetchError, ForecastRequest, ForecastResponse, FORECAST_ENDPOINT};
use crate::api_client;

pub async fn get_forecast(request: &ForecastRequest) -> Result<ForecastResponse, FetchError> {
    log::trace!(
        "Fetching forecast for crop: {} (periods={}, token={})",
        request.crop,
        request.periods,
        request.token.value()
    );
    let result = api_client::get::<ForecastResponse>(FORECAST_ENDPOINT, &request.query()).await;

    if result.is_ok() {
        log::info!("Successfully fetched forecast for crop: {}", request.crop);
    }

    result
}
