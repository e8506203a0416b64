use cropdash_common::{LineSeries, SeriesStyle};
use plotly::common::{Line, Mode};
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: LineSeries,
    pub crop: AttrValue,
}

const DIV_ID: &str = "chart-crop-forecast";

fn line_trace(labels: &[String], values: &[Option<f64>], style: &SeriesStyle) -> Box<Scatter<String, Option<f64>>> {
    // Nulls must stay gaps so history and forecast read as two segments
    Scatter::new(labels.to_vec(), values.to_vec())
        .mode(Mode::LinesMarkers)
        .name(style.label)
        .connect_gaps(false)
        .line(Line::new().color(style.color).width(2.0))
}

/// Historical and forecast sales on one date axis.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.series.clone(), props.crop.clone()),
        move |(container_ref, series, crop)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(DIV_ID);

                let historical = line_trace(&series.labels, &series.historical, &series.historical_style);
                let forecast = line_trace(&series.labels, &series.forecast, &series.forecast_style);

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text(&format!("{} sales", crop)))
                    .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Date")))
                    .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Quantity sold (kg)")))
                    .height(400);

                let traces: Vec<_> = [plot::trace_value(&historical), plot::trace_value(&forecast)]
                    .into_iter()
                    .flatten()
                    .collect();
                plot::draw(DIV_ID, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
