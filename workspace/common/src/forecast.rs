use serde::{Deserialize, Serialize};

/// Observed sales for one period. `date` is kept exactly as the backend labels it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoricalPoint {
    pub date: String,
    pub actual: f64,
}

/// Predicted sales for one future day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastPoint {
    pub date: String,
    pub forecast: f64,
}

/// Response of the forecast endpoint: recent history followed by the forecast horizon.
///
/// Both sequences are chronologically ordered by the backend. Nothing checks that
/// the last historical date precedes the first forecast date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Crop name echoed back by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    pub historical: Vec<HistoricalPoint>,
    pub forecast: Vec<ForecastPoint>,
}

impl ForecastResponse {
    pub fn len(&self) -> usize {
        self.historical.len() + self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecast.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_forecast_response() {
        let body = r#"{
            "crop": "Rice",
            "historical": [
                {"Date": "2024-01-01", "Actual": 10},
                {"Date": "2024-01-02", "Actual": 12.5}
            ],
            "forecast": [{"Date": "2024-01-03", "Forecast": 15.25}]
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.crop.as_deref(), Some("Rice"));
        assert_eq!(response.len(), 3);
        assert_eq!(response.historical[0].date, "2024-01-01");
        assert_eq!(response.historical[1].actual, 12.5);
        assert_eq!(response.forecast[0].forecast, 15.25);
    }

    #[test]
    fn test_decode_without_crop_echo() {
        let body = r#"{"historical": [], "forecast": []}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert!(response.crop.is_none());
        assert!(response.is_empty());
    }

    #[test]
    fn test_decode_keeps_datetime_labels() {
        let body = r#"{
            "historical": [{"Date": "2024-01-01T00:00:00", "Actual": 1}],
            "forecast": [{"Date": "2024-01-02T00:00:00Z", "Forecast": 2}]
        }"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.historical[0].date, "2024-01-01T00:00:00");
        assert_eq!(response.forecast[0].date, "2024-01-02T00:00:00Z");
    }

    #[test]
    fn test_decode_rejects_non_string_date() {
        let body = r#"{"historical": [{"Date": 20240101, "Actual": 1}], "forecast": []}"#;
        assert!(serde_json::from_str::<ForecastResponse>(body).is_err());
    }
}
