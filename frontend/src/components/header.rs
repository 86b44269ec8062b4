use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub label: String,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="calendar-header">
            <button
                id="prev-month"
                class="nav-button"
                onclick={props.on_prev_month.clone()}
                title="Previous Month"
            >
                {"‹"}
            </button>
            <h2 id="current-month" class="month-year">{&props.label}</h2>
            <button
                id="next-month"
                class="nav-button"
                onclick={props.on_next_month.clone()}
                title="Next Month"
            >
                {"›"}
            </button>
        </header>
    }
}
