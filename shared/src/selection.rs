//! Single-day selection with a one-shot click pulse.

use log::debug;

use crate::config::CalendarConfig;
use crate::timer::{TimerCommand, TimerSlot, TimerToken};

#[derive(Debug, Clone)]
pub struct SelectionController {
    selected: Option<u32>,
    pulsing: Option<u32>,
    timer: TimerSlot,
    pulse_ms: u32,
}

impl SelectionController {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            selected: None,
            pulsing: None,
            timer: TimerSlot::default(),
            pulse_ms: config.click_pulse_ms,
        }
    }

    /// Select `day`, replacing any previous selection, and start its pulse.
    pub fn select(&mut self, day: u32) -> TimerCommand {
        debug!("Selected day {} (previously {:?})", day, self.selected);
        self.selected = Some(day);
        self.pulsing = Some(day);
        self.timer.schedule(self.pulse_ms)
    }

    /// Forget the selection, e.g. when the month changes.
    pub fn clear(&mut self) -> TimerCommand {
        self.selected = None;
        self.pulsing = None;
        self.timer.cancel()
    }

    /// Deliver a fired timer. Returns true if the pulse ended.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.timer.fire(token) {
            self.pulsing = None;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, day: u32) -> bool {
        self.selected == Some(day)
    }

    pub fn is_pulsing(&self, day: u32) -> bool {
        self.pulsing == Some(day)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}
