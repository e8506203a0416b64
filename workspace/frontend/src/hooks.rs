use std::cell::RefCell;
use std::rc::Rc;

use cropdash_common::{BarSeries, Completion, Dashboard, ForecastRequest, LineSeries};
use yew::prelude::*;

use crate::api_client::{forecast, sellers};
use crate::common::toast::ToastContext;
use crate::settings;

/// Everything the page needs to draw one frame.
#[derive(Clone, PartialEq)]
pub struct DashboardView {
    pub best_sellers: BarSeries,
    pub worst_sellers: BarSeries,
    /// Present once a forecast has loaded; stays on the last good one after a failure.
    pub forecast: Option<LineSeries>,
    pub forecast_crop: Option<String>,
    pub options: Vec<String>,
    pub selection: Option<String>,
    pub forecast_loading: bool,
    pub summary_loading: bool,
    pub summary_error: Option<String>,
    /// Error of the latest forecast request, shown next to any stale chart.
    pub forecast_error: Option<String>,
}

impl DashboardView {
    fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            best_sellers: dashboard.best_sellers_chart(),
            worst_sellers: dashboard.worst_sellers_chart(),
            forecast: dashboard.forecast_chart(),
            forecast_crop: dashboard.loaded_forecast().map(|f| f.crop.clone()),
            options: dashboard.selector_options(),
            selection: dashboard.selection().map(str::to_string),
            forecast_loading: dashboard.is_forecast_loading(),
            summary_loading: dashboard.summary_status().is_loading(),
            summary_error: dashboard.summary_status().error().map(ToString::to_string),
            forecast_error: dashboard.forecast_status().error().map(ToString::to_string),
        }
    }
}

type SharedDashboard = Rc<RefCell<Dashboard>>;

fn spawn_summary(dashboard: SharedDashboard, redraw: UseForceUpdateHandle, toast: Option<ToastContext>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = sellers::get_best_worst_sellers().await;
        if let (Err(err), Some(toast)) = (&result, &toast) {
            toast.show_error(format!("Could not load best and worst sellers: {}", err));
        }
        dashboard.borrow_mut().apply_summary(result);
        redraw.force_update();
    });
}

fn spawn_forecast(
    dashboard: SharedDashboard,
    request: ForecastRequest,
    redraw: UseForceUpdateHandle,
    toast: Option<ToastContext>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = forecast::get_forecast(&request).await;
        let error = result.as_ref().err().cloned();

        let (completion, shown_crop) = {
            let mut dashboard = dashboard.borrow_mut();
            let completion = dashboard.apply_forecast(request.token, result);
            let shown = dashboard.loaded_forecast().map(|f| f.crop.clone());
            (completion, shown)
        };

        match completion {
            Completion::Stale => {
                log::debug!("Ignoring superseded forecast for {}", request.crop);
                return;
            }
            Completion::Failed => {
                if let (Some(err), Some(toast)) = (error, toast) {
                    match shown_crop {
                        Some(shown) => toast.show_warning(format!(
                            "Could not load forecast for {}: {}. Still showing {}.",
                            request.crop, err, shown
                        )),
                        None => toast.show_error(format!(
                            "Could not load forecast for {}: {}",
                            request.crop, err
                        )),
                    }
                }
            }
            Completion::Applied => {}
        }
        redraw.force_update();
    });
}

/// Owns the dashboard state for the lifetime of the page.
///
/// Fetches the sellers summary and the default forecast on mount, and returns a
/// callback that changes the selected crop and fetches its forecast.
#[hook]
pub fn use_dashboard() -> (DashboardView, Callback<String>) {
    let dashboard = use_mut_ref(|| Dashboard::new(settings::get_settings().dashboard_config()));
    let redraw = use_force_update();
    let toast_ctx = use_context::<ToastContext>();

    let on_select = {
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();

        use_callback(toast_ctx.clone(), move |crop: String, toast_ctx| {
            let request = dashboard.borrow_mut().select(&crop);
            match request {
                Ok(request) => {
                    log::debug!("Crop selected: {}", request.crop);
                    spawn_forecast(dashboard.clone(), request, redraw.clone(), toast_ctx.clone());
                    redraw.force_update();
                }
                Err(err) => log::warn!("Ignoring selection change: {}", err),
            }
        })
    };

    // Fetch on mount
    {
        let dashboard = dashboard.clone();
        let redraw = redraw.clone();
        let toast_ctx = toast_ctx.clone();

        use_effect_with((), move |_| {
            let requests = dashboard.borrow_mut().mount();
            if requests.summary {
                spawn_summary(dashboard.clone(), redraw.clone(), toast_ctx.clone());
            }
            if let Some(request) = requests.forecast {
                spawn_forecast(dashboard.clone(), request, redraw.clone(), toast_ctx);
            }
            redraw.force_update();
            || ()
        });
    }

    let view = DashboardView::from_dashboard(&dashboard.borrow());
    (view, on_select)
}
