use cropdash_common::BarSeries;
use yew::prelude::*;

use super::crop_select::CropSelect;
use super::forecast_chart::ForecastChart;
use super::sellers_chart::SellersChart;
use crate::common::loading::Loading;
use crate::hooks::{use_dashboard, DashboardView};

fn alert(class: &'static str, text: String) -> Html {
    html! {
        <div role="alert" class={classes!("alert", class)}>
            <span>{text}</span>
        </div>
    }
}

fn sellers_card(title: &'static str, id: &'static str, series: &BarSeries, view: &DashboardView) -> Html {
    let body = if let Some(err) = &view.summary_error {
        alert("alert-error", format!("Sales data unavailable: {}", err))
    } else if view.summary_loading {
        html! { <Loading text={AttrValue::from("Loading sales...")} /> }
    } else if series.is_empty() {
        html! { <p class="text-base-content/60">{"No sales recorded."}</p> }
    } else {
        html! { <SellersChart {id} series={series.clone()} /> }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                {body}
            </div>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (view, on_select) = use_dashboard();

    html! {
        <>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {sellers_card("Top 3 Best-sellers", "chart-best-sellers", &view.best_sellers, &view)}
                {sellers_card("Top 3 Worst-sellers", "chart-worst-sellers", &view.worst_sellers, &view)}
            </div>
            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Future Trend Forecast"}</h2>
                    <div class="flex items-end gap-4">
                        <CropSelect
                            options={view.options.clone()}
                            selected={view.selection.clone()}
                            on_change={on_select}
                        />
                        if view.forecast_loading && view.forecast.is_some() {
                            <Loading inline={true} text={AttrValue::from("Updating forecast...")} />
                        }
                    </div>
                    if let Some(err) = &view.forecast_error {
                        {alert("alert-warning", format!("Latest forecast request failed: {}", err))}
                    }
                    {match (&view.forecast, view.forecast_loading) {
                        (Some(series), _) if series.is_empty() => html! {
                            <p class="text-base-content/60">{"No forecast data for this crop."}</p>
                        },
                        (Some(series), _) => html! {
                            <ForecastChart
                                series={series.clone()}
                                crop={view.forecast_crop.clone().unwrap_or_default()}
                            />
                        },
                        (None, true) => html! { <Loading text={AttrValue::from("Loading forecast...")} /> },
                        (None, false) => html! {},
                    }}
                </div>
            </div>
        </>
    }
}
