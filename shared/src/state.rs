//! Top-level calendar state and the declarative render function.
//!
//! `CalendarState` owns the focus month and the three animated controllers.
//! Every input returns the timer commands the host must carry out, tagged
//! with the machine they belong to; the host hands fired timers back through
//! `on_timer`. `render` turns the state into a plain view description.

use chrono::NaiveDate;
use log::debug;

use crate::calendar::CalendarService;
use crate::config::CalendarConfig;
use crate::navigation::{NavigationController, NavigationDirection, NavigationEvent};
use crate::selection::SelectionController;
use crate::timer::{TimerCommand, TimerToken};
use crate::tooltip::{CellRect, TooltipController, TooltipSize, VisibleTooltip};
use crate::{CalendarFocusDate, CalendarMonth};

/// Which state machine a timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Machine {
    Tooltip,
    Navigation,
    Selection,
}

pub type TimerCommands = Vec<(Machine, TimerCommand)>;

#[derive(Debug, Clone)]
pub struct CalendarState {
    focus: CalendarFocusDate,
    service: CalendarService,
    tooltip: TooltipController,
    navigation: NavigationController,
    selection: SelectionController,
}

impl CalendarState {
    /// Start on the month containing `today`.
    pub fn new(config: &CalendarConfig, today: NaiveDate) -> Self {
        Self {
            focus: CalendarFocusDate::containing(today),
            service: CalendarService::from_config(config),
            tooltip: TooltipController::new(config),
            navigation: NavigationController::new(config),
            selection: SelectionController::new(config),
        }
    }

    pub fn focus(&self) -> CalendarFocusDate {
        self.focus
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub fn advance(&mut self, direction: NavigationDirection) -> TimerCommands {
        vec![(Machine::Navigation, self.navigation.advance(direction))]
    }

    /// Click on a day of the focus month. Days outside the month are ignored.
    pub fn select_day(&mut self, day: u32) -> TimerCommands {
        if day == 0 || day > self.focus.days_in_month() {
            debug!("Ignoring selection of day {} outside {}", day, self.focus);
            return Vec::new();
        }
        vec![(Machine::Selection, self.selection.select(day))]
    }

    /// Pointer entered a day cell; only holidays request a tooltip.
    pub fn pointer_enter(&mut self, day: u32, anchor: CellRect) -> TimerCommands {
        match self.service.holidays().lookup(self.focus.month(), day) {
            Some(reason) if day <= self.focus.days_in_month() => {
                let reason = reason.to_string();
                vec![(Machine::Tooltip, self.tooltip.request_show(anchor, reason))]
            }
            _ => Vec::new(),
        }
    }

    pub fn pointer_leave(&mut self) -> TimerCommands {
        vec![(Machine::Tooltip, self.tooltip.hide())]
    }

    /// Size the visible tooltip once the host has measured it.
    pub fn place_tooltip(&mut self, size: TooltipSize, viewport_width: f64) -> bool {
        self.tooltip.place(size, viewport_width)
    }

    /// Deliver a fired timer to its machine.
    pub fn on_timer(&mut self, machine: Machine, token: TimerToken) -> TimerCommands {
        match machine {
            Machine::Tooltip => {
                self.tooltip.on_timer(token);
                Vec::new()
            }
            Machine::Selection => {
                self.selection.on_timer(token);
                Vec::new()
            }
            Machine::Navigation => {
                let (event, command) = self.navigation.on_timer(token, &mut self.focus);
                let mut commands = vec![(Machine::Navigation, command)];
                if let NavigationEvent::MonthChanged(_) = event {
                    // Every cell is recreated, so nothing stays selected or hovered
                    commands.push((Machine::Selection, self.selection.clear()));
                    commands.push((Machine::Tooltip, self.tooltip.hide()));
                }
                commands
            }
        }
    }
}

/// Everything the UI needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub label: String,
    pub month: CalendarMonth,
    pub fading_out: bool,
    pub transitioning: bool,
    pub tooltip: Option<VisibleTooltip>,
}

/// Describe the calendar for `state`, flagging `today`.
pub fn render(state: &CalendarState, today: NaiveDate) -> CalendarView {
    let mut month = state.service.generate_calendar_month(state.focus, today);

    for cell in month.days.iter_mut().filter(|cell| !cell.is_filler()) {
        cell.is_selected = state.selection.is_selected(cell.day);
        cell.is_clicked = state.selection.is_pulsing(cell.day);
    }

    CalendarView {
        label: month.label(),
        month,
        fading_out: state.navigation.is_fading_out(),
        transitioning: state.navigation.is_transitioning(),
        tooltip: state.tooltip.current().cloned(),
    }
}
