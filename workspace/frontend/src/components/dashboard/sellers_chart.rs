use cropdash_common::BarSeries;
use plotly::common::Marker;
use plotly::{Bar, Layout};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub series: BarSeries,
}

/// Bar chart of total sales per crop. An empty series draws empty axes.
#[function_component(SellersChart)]
pub fn sellers_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.series.clone(), props.id.clone()),
        move |(container_ref, series, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let trace = Bar::new(series.labels.clone(), series.values.clone())
                    .name(series.style.label)
                    .marker(Marker::new().color(series.style.color));

                let layout = Layout::new()
                    .height(300)
                    .show_legend(true)
                    .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Crop")))
                    .y_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Total sales (kg)")));

                let traces: Vec<_> = plot::trace_value(&trace).into_iter().collect();
                plot::draw(div_id, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:300px;"></div>
    }
}
