use shared::{CalendarDay, CalendarMonth, CellRect};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::services::date_utils::element_rect;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub calendar_data: CalendarMonth,
    pub fading_out: bool,
    pub transitioning: bool,
    pub on_select_day: Callback<u32>,
    pub on_hover_day: Callback<(u32, CellRect)>,
    pub on_leave_day: Callback<()>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = props.calendar_data.days.iter().enumerate().map(|(index, day_data)| {
        let key = cell_key(&props.calendar_data, index);
        if day_data.is_filler() {
            html! {
                <div key={key} class="text-center py-2 text-sm calendar-day prev-month">{day_data.day}</div>
            }
        } else {
            month_day(key, day_data, props)
        }
    });

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            <div
                id="calendar-days"
                class={classes!(
                    "calendar-grid",
                    props.fading_out.then(|| "fade-out"),
                    props.transitioning.then(|| "month-transition")
                )}
            >
                {for calendar_days}
            </div>
        </div>
    }
}

/// Cells are keyed by month so a month change mounts fresh nodes and the
/// fade-in cascade replays; redraws within a month keep the same nodes.
fn cell_key(month: &CalendarMonth, index: usize) -> String {
    format!("{}-{}", month.label(), index)
}

fn month_day(key: String, day_data: &CalendarDay, props: &CalendarProps) -> Html {
    let day = day_data.day;

    let onclick = {
        let on_select_day = props.on_select_day.clone();
        Callback::from(move |_: MouseEvent| on_select_day.emit(day))
    };

    let onmouseenter = {
        let on_hover_day = props.on_hover_day.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(cell) = e.target_dyn_into::<Element>() {
                on_hover_day.emit((day, element_rect(&cell)));
            }
        })
    };

    let onmouseleave = {
        let on_leave_day = props.on_leave_day.clone();
        Callback::from(move |_: MouseEvent| on_leave_day.emit(()))
    };

    let style = day_data
        .animation_delay_css()
        .map(|delay| format!("animation-delay: {}", delay));

    html! {
        <div
            key={key}
            class={classes!(
                "calendar-day", "text-center", "py-2", "cursor-pointer", "text-sm", "relative",
                day_data.is_holiday().then(|| "holiday"),
                day_data.is_weekend.then(|| "weekend"),
                day_data.is_today.then(|| "today"),
                day_data.is_selected.then(|| "selected"),
                day_data.is_clicked.then(|| "clicked"),
                "fade-in"
            )}
            data-reason={day_data.holiday_reason.clone()}
            {style}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            {day}
        </div>
    }
}
