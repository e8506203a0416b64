//! Chart-ready series derived from backend records.
//!
//! These functions never touch their inputs and never sort: ordering is whatever
//! the backend sent. The line variant pads each series with `None` so that the
//! historical and forecast traces share one label axis while occupying disjoint
//! ranges; a charting surface that leaves gaps at nulls then draws two separate
//! segments.

use crate::{ForecastResponse, SellerRecord};

/// Legend label and colour attached to one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub color: &'static str,
}

pub const BEST_SELLERS_STYLE: SeriesStyle = SeriesStyle {
    label: "Best Sellers (kg)",
    color: "rgba(54,162,235,0.6)",
};

pub const WORST_SELLERS_STYLE: SeriesStyle = SeriesStyle {
    label: "Worst Sellers (kg)",
    color: "rgba(255,99,132,0.6)",
};

pub const HISTORICAL_STYLE: SeriesStyle = SeriesStyle {
    label: "Historical Sales (kg)",
    color: "blue",
};

pub const FORECAST_STYLE: SeriesStyle = SeriesStyle {
    label: "Forecast (kg)",
    color: "orange",
};

/// One bar per crop, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub style: SeriesStyle,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl BarSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Historical and forecast values aligned on a shared date axis.
///
/// `labels`, `historical` and `forecast` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub labels: Vec<String>,
    pub historical: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
    pub historical_style: SeriesStyle,
    pub forecast_style: SeriesStyle,
}

impl LineSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn build_bar_series(records: &[SellerRecord], style: SeriesStyle) -> BarSeries {
    BarSeries {
        style,
        labels: records.iter().map(|r| r.crop.clone()).collect(),
        values: records.iter().map(|r| r.total_sales).collect(),
    }
}

/// Builds the two-series line chart. `None` yields empty arrays.
pub fn build_line_series(response: Option<&ForecastResponse>) -> LineSeries {
    let mut series = LineSeries {
        labels: Vec::new(),
        historical: Vec::new(),
        forecast: Vec::new(),
        historical_style: HISTORICAL_STYLE,
        forecast_style: FORECAST_STYLE,
    };

    let Some(response) = response else {
        return series;
    };

    let total = response.len();
    let history_len = response.historical.len();
    let forecast_len = response.forecast.len();

    series.labels.reserve(total);
    series.labels.extend(response.historical.iter().map(|p| p.date.clone()));
    series.labels.extend(response.forecast.iter().map(|p| p.date.clone()));

    series.historical.reserve(total);
    series.historical.extend(response.historical.iter().map(|p| Some(p.actual)));
    series.historical.extend(std::iter::repeat_n(None, forecast_len));

    series.forecast.reserve(total);
    series.forecast.extend(std::iter::repeat_n(None, history_len));
    series.forecast.extend(response.forecast.iter().map(|p| Some(p.forecast)));

    series
}
