use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(CropSelect)]
pub fn crop_select(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    let listed = props
        .selected
        .as_ref()
        .is_some_and(|selected| props.options.contains(selected));

    html! {
        <label class="form-control w-full max-w-xs">
            <div class="label">
                <span class="label-text">{"Select Crop"}</span>
            </div>
            <select class="select select-bordered" {onchange}>
                // The selection may not be a listed crop; show it without offering it.
                if !listed {
                    <option value="" selected={true} disabled={true} hidden={props.selected.is_some()}>
                        {props.selected.clone().unwrap_or_else(|| "Choose a crop".to_string())}
                    </option>
                }
                { for props.options.iter().map(|crop| html! {
                    <option
                        key={crop.clone()}
                        value={crop.clone()}
                        selected={props.selected.as_deref() == Some(crop.as_str())}
                    >
                        {crop.clone()}
                    </option>
                }) }
            </select>
        </label>
    }
}
