mod crop_select;
mod forecast_chart;
mod plot;
mod sellers_chart;
mod view;

pub use view::Dashboard;
