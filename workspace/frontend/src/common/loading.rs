use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    /// Inline spinners sit next to other controls instead of filling a card.
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let (container, size) = if props.inline {
        ("inline-flex items-center gap-2", "loading-sm")
    } else {
        ("flex flex-col justify-center items-center py-12 gap-4", "loading-lg")
    };

    html! {
        <div class={container}>
            <span class={classes!("loading", "loading-spinner", size)}></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
