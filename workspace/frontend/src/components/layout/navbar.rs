use yew::prelude::*;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let api_base = settings::get_settings().api_base_url();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none px-4">
                <span class="badge badge-ghost font-mono" title="Prediction service">{ api_base }</span>
            </div>
        </div>
    }
}
