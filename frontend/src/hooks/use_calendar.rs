use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{
    render, CalendarConfig, CalendarState, CalendarView, CellRect, NavigationDirection,
    TimerCommand, TimerCommands, TooltipSize,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{today, viewport_width};
use crate::services::logging::Logger;

/// Applies inputs to the shared calendar state and runs its timers.
///
/// Each scheduled timer is a spawned timeout future that hands its token
/// back to the state when it wakes. Cancellation happens inside the state
/// machines: a replaced or cancelled token is simply ignored on delivery.
#[derive(Clone)]
struct CalendarDriver {
    state: Rc<RefCell<CalendarState>>,
    redraw: Callback<()>,
}

impl CalendarDriver {
    fn dispatch(&self, update: impl FnOnce(&mut CalendarState) -> TimerCommands) {
        let commands = update(&mut self.state.borrow_mut());
        self.run(commands);
        self.redraw.emit(());
    }

    fn run(&self, commands: TimerCommands) {
        for (machine, command) in commands {
            if let TimerCommand::Schedule(request) = command {
                let driver = self.clone();
                spawn_local(async move {
                    TimeoutFuture::new(request.delay_ms).await;
                    driver.dispatch(|state| state.on_timer(machine, request.token));
                });
            }
        }
    }

    fn place_tooltip(&self, size: TooltipSize) {
        let placed = self
            .state
            .borrow_mut()
            .place_tooltip(size, viewport_width());
        if placed {
            Logger::debug_with_component(
                "tooltip",
                &format!("Placed tooltip ({}x{})", size.width, size.height),
            );
            self.redraw.emit(());
        }
    }
}

pub struct UseCalendarResult {
    pub view: CalendarView,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_day: Callback<u32>,
    pub hover_day: Callback<(u32, CellRect)>,
    pub leave_day: Callback<()>,
    pub place_tooltip: Callback<TooltipSize>,
}

#[hook]
pub fn use_calendar(config: &CalendarConfig) -> UseCalendarResult {
    let state = use_mut_ref(|| {
        let today = today();
        Logger::info_with_component("calendar", &format!("Starting calendar on {}", today));
        CalendarState::new(config, today)
    });
    let force_update = use_force_update();
    let redraw = Callback::from(move |_| force_update.force_update());
    let driver = CalendarDriver { state, redraw };

    let prev_month = {
        let driver = driver.clone();
        use_callback((), move |_: MouseEvent, _| {
            driver.dispatch(|state| state.advance(NavigationDirection::Previous));
        })
    };

    let next_month = {
        let driver = driver.clone();
        use_callback((), move |_: MouseEvent, _| {
            driver.dispatch(|state| state.advance(NavigationDirection::Next));
        })
    };

    let select_day = {
        let driver = driver.clone();
        use_callback((), move |day: u32, _| {
            driver.dispatch(|state| state.select_day(day));
        })
    };

    let hover_day = {
        let driver = driver.clone();
        use_callback((), move |(day, anchor): (u32, CellRect), _| {
            driver.dispatch(|state| state.pointer_enter(day, anchor));
        })
    };

    let leave_day = {
        let driver = driver.clone();
        use_callback((), move |_: (), _| {
            driver.dispatch(|state| state.pointer_leave());
        })
    };

    let place_tooltip = {
        let driver = driver.clone();
        use_callback((), move |size: TooltipSize, _| {
            driver.place_tooltip(size);
        })
    };

    let view = render(&driver.state.borrow(), today());

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        select_day,
        hover_day,
        leave_day,
        place_tooltip,
    };

    UseCalendarResult { view, actions }
}
