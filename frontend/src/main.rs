use yew::prelude::*;
use shared::CalendarConfig;

mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::header::Header;
use components::tooltip::HolidayTooltip;
use hooks::use_calendar::{use_calendar, UseCalendarResult};
use services::config::load_config;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: CalendarConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let UseCalendarResult { view, actions } = use_calendar(&props.config);

    html! {
        <div class="calendar-container">
            <Header
                label={view.label.clone()}
                on_prev_month={actions.prev_month.clone()}
                on_next_month={actions.next_month.clone()}
            />
            <Calendar
                calendar_data={view.month.clone()}
                fading_out={view.fading_out}
                transitioning={view.transitioning}
                on_select_day={actions.select_day.clone()}
                on_hover_day={actions.hover_day.clone()}
                on_leave_day={actions.leave_day.clone()}
            />
            {if let Some(tooltip) = view.tooltip.clone() {
                html! {
                    <HolidayTooltip {tooltip} on_measure={actions.place_tooltip.clone()} />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    Logger::init(&config.log_level);

    if let Err(e) = loaded {
        Logger::warn_with_component("config", &format!("Using default config: {:#}", e));
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
