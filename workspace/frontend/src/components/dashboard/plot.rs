use plotly::Layout;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

// Plotly wants plain JS objects, so go through JSON text rather than serde maps
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize plot: {}", e))?;
    js_sys::JSON::parse(&json).map_err(|e| format!("Failed to parse plot JSON: {:?}", e))
}

/// Draws `traces` into the element with id `div_id`, replacing any previous plot.
pub fn draw(div_id: &str, traces: &[serde_json::Value], layout: &Layout) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let rendered = to_js(traces)
        .and_then(|data| Ok((data, to_js(layout)?, to_js(&config)?)));

    match rendered {
        Ok((data, layout, config)) => {
            log::trace!("Drawing {} trace(s) into #{}", traces.len(), div_id);
            newPlot(div_id, data, layout, config);
        }
        Err(err) => log::error!("Chart #{} not drawn: {}", div_id, err),
    }
}

/// Serializes a plotly trace for [`draw`].
pub fn trace_value<T: Serialize + ?Sized>(trace: &T) -> Option<serde_json::Value> {
    serde_json::to_value(trace)
        .map_err(|e| log::error!("Failed to serialize trace: {}", e))
        .ok()
}
