//! Month-to-month navigation with a fade transition.
//!
//! `advance` fades the grid out; when the fade timer fires the focus month
//! moves, the grid is rebuilt and a transition decoration runs until the
//! transition timer fires.
//!
//! Re-entrant requests: an `advance` during the fade-out is ignored, since
//! the month has not moved yet and the pending shift already answers the
//! click. An `advance` during the transition cuts it short and starts a new
//! fade-out.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::timer::{TimerCommand, TimerSlot, TimerToken};
use crate::CalendarFocusDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDirection {
    Previous,
    Next,
}

impl NavigationDirection {
    pub fn offset(&self) -> i32 {
        match self {
            NavigationDirection::Previous => -1,
            NavigationDirection::Next => 1,
        }
    }
}

/// Visual phase of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Idle,
    /// Grid is fading out; the month has not changed yet
    FadingOut(NavigationDirection),
    /// New month rendered, transition decoration applied
    Transitioning,
}

/// What a fired navigation timer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Stale timer, nothing happened
    Ignored,
    /// Focus moved to this month; the grid must be rebuilt
    MonthChanged(CalendarFocusDate),
    TransitionFinished,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    phase: NavigationPhase,
    timer: TimerSlot,
    fade_out_ms: u32,
    transition_ms: u32,
}

impl NavigationController {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            phase: NavigationPhase::Idle,
            timer: TimerSlot::default(),
            fade_out_ms: config.nav_fade_out_ms,
            transition_ms: config.nav_transition_ms,
        }
    }

    pub fn phase(&self) -> NavigationPhase {
        self.phase
    }

    /// Begin moving one month in `direction`.
    pub fn advance(&mut self, direction: NavigationDirection) -> TimerCommand {
        if let NavigationPhase::FadingOut(pending) = self.phase {
            debug!(
                "Ignoring {:?} navigation while {:?} fade-out is in progress",
                direction, pending
            );
            return TimerCommand::Keep;
        }

        self.phase = NavigationPhase::FadingOut(direction);
        self.timer.schedule(self.fade_out_ms)
    }

    /// Deliver a fired timer, moving `focus` when the fade-out completes.
    pub fn on_timer(
        &mut self,
        token: TimerToken,
        focus: &mut CalendarFocusDate,
    ) -> (NavigationEvent, TimerCommand) {
        if !self.timer.fire(token) {
            return (NavigationEvent::Ignored, TimerCommand::Keep);
        }

        match self.phase {
            NavigationPhase::FadingOut(direction) => {
                *focus = focus.shifted(direction.offset());
                info!("🗓️ CALENDAR: Navigated to {}", focus);
                self.phase = NavigationPhase::Transitioning;
                (
                    NavigationEvent::MonthChanged(*focus),
                    self.timer.schedule(self.transition_ms),
                )
            }
            NavigationPhase::Transitioning => {
                self.phase = NavigationPhase::Idle;
                (NavigationEvent::TransitionFinished, TimerCommand::Keep)
            }
            NavigationPhase::Idle => (NavigationEvent::Ignored, TimerCommand::Keep),
        }
    }

    pub fn is_fading_out(&self) -> bool {
        matches!(self.phase, NavigationPhase::FadingOut(_))
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == NavigationPhase::Transitioning
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::expect_schedule;

    fn focus(year: i32, month: u32) -> CalendarFocusDate {
        CalendarFocusDate::new(year, month).unwrap()
    }

    #[test]
    fn test_full_transition_cycle() {
        let mut navigation = NavigationController::default();
        let mut current = focus(2025, 6);

        let fade = expect_schedule(navigation.advance(NavigationDirection::Next));
        assert_eq!(fade.delay_ms, 300);
        assert!(navigation.is_fading_out());
        assert_eq!(current, focus(2025, 6));

        let (event, command) = navigation.on_timer(fade.token, &mut current);
        assert_eq!(event, NavigationEvent::MonthChanged(focus(2025, 7)));
        assert_eq!(current, focus(2025, 7));
        assert!(navigation.is_transitioning());

        let transition = expect_schedule(command);
        assert_eq!(transition.delay_ms, 500);

        let (event, command) = navigation.on_timer(transition.token, &mut current);
        assert_eq!(event, NavigationEvent::TransitionFinished);
        assert_eq!(command, TimerCommand::Keep);
        assert_eq!(navigation.phase(), NavigationPhase::Idle);
    }

    #[test]
    fn test_december_next_is_january_next_year() {
        let mut navigation = NavigationController::default();
        let mut current = focus(2025, 12);

        let fade = expect_schedule(navigation.advance(NavigationDirection::Next));
        navigation.on_timer(fade.token, &mut current);
        assert_eq!(current, focus(2026, 1));
    }

    #[test]
    fn test_january_previous_is_december_previous_year() {
        let mut navigation = NavigationController::default();
        let mut current = focus(2025, 1);

        let fade = expect_schedule(navigation.advance(NavigationDirection::Previous));
        navigation.on_timer(fade.token, &mut current);
        assert_eq!(current, focus(2024, 12));
    }

    #[test]
    fn test_advance_during_fade_out_is_ignored() {
        let mut navigation = NavigationController::default();
        let mut current = focus(2025, 6);

        let fade = expect_schedule(navigation.advance(NavigationDirection::Next));
        assert_eq!(navigation.advance(NavigationDirection::Next), TimerCommand::Keep);
        assert_eq!(navigation.advance(NavigationDirection::Previous), TimerCommand::Keep);

        navigation.on_timer(fade.token, &mut current);
        assert_eq!(current, focus(2025, 7));
    }

    #[test]
    fn test_advance_during_transition_restarts_fade() {
        let mut navigation = NavigationController::default();
        let mut current = focus(2025, 6);

        let fade = expect_schedule(navigation.advance(NavigationDirection::Next));
        let (_, command) = navigation.on_timer(fade.token, &mut current);
        let transition = expect_schedule(command);

        let second_fade = expect_schedule(navigation.advance(NavigationDirection::Next));
        assert!(navigation.is_fading_out());

        // The cut-short transition timer is stale now
        let (event, _) = navigation.on_timer(transition.token, &mut current);
        assert_eq!(event, NavigationEvent::Ignored);
        assert!(navigation.is_fading_out());

        let (event, _) = navigation.on_timer(second_fade.token, &mut current);
        assert_eq!(event, NavigationEvent::MonthChanged(focus(2025, 8)));
    }
}
