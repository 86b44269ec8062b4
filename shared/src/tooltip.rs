//! Holiday tooltip state machine and positioning.
//!
//! Idle -> Pending (show delay) -> Visible -> FadingOut (fade delay) -> Idle.
//! A show request while anything is pending, visible or fading discards it
//! and starts over, so at most one tooltip exists at any time.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::timer::{TimerCommand, TimerSlot, TimerToken};

/// Bounding box of the hovered cell in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Measured size of the rendered tooltip
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

/// Final top-left corner of the tooltip in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

/// Place a tooltip centered above `cell`, `offset_y` units clear of it.
///
/// Overflow on the right pulls it back to `margin` from the edge; overflow
/// on the left pins it at `margin`. The left check runs last, so it wins on
/// a viewport narrower than the tooltip. No vertical clamping.
pub fn position_tooltip(
    cell: CellRect,
    size: TooltipSize,
    viewport_width: f64,
    offset_y: f64,
    margin: f64,
) -> TooltipPosition {
    let mut left = cell.left + cell.width / 2.0 - size.width / 2.0;
    let top = cell.top - offset_y - size.height;

    if left + size.width > viewport_width {
        left = viewport_width - size.width - margin;
    }
    if left < 0.0 {
        left = margin;
    }

    TooltipPosition { left, top }
}

/// The tooltip currently on screen (possibly fading out)
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTooltip {
    pub text: String,
    pub anchor: CellRect,
    /// None until the rendered tooltip has been measured
    pub position: Option<TooltipPosition>,
    /// False once fading out
    pub showing: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum TooltipState {
    Idle,
    Pending { anchor: CellRect, text: String },
    Visible(VisibleTooltip),
    FadingOut(VisibleTooltip),
}

#[derive(Debug, Clone)]
pub struct TooltipController {
    state: TooltipState,
    timer: TimerSlot,
    show_delay_ms: u32,
    fade_ms: u32,
    offset_y: f64,
    edge_margin: f64,
}

impl TooltipController {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            state: TooltipState::Idle,
            timer: TimerSlot::default(),
            show_delay_ms: config.tooltip_show_delay_ms,
            fade_ms: config.tooltip_fade_ms,
            offset_y: config.tooltip_offset_y,
            edge_margin: config.tooltip_edge_margin,
        }
    }

    /// Schedule a tooltip for `anchor` after the show delay, discarding any
    /// pending, visible or fading tooltip first.
    pub fn request_show(&mut self, anchor: CellRect, text: impl Into<String>) -> TimerCommand {
        let text = text.into();
        debug!("Tooltip requested: {}", text);
        self.state = TooltipState::Pending { anchor, text };
        self.timer.schedule(self.show_delay_ms)
    }

    /// Cancel a pending show, or start fading a visible tooltip.
    /// No-op when idle or already fading.
    pub fn hide(&mut self) -> TimerCommand {
        match std::mem::replace(&mut self.state, TooltipState::Idle) {
            TooltipState::Pending { .. } => self.timer.cancel(),
            TooltipState::Visible(mut tooltip) => {
                tooltip.showing = false;
                self.state = TooltipState::FadingOut(tooltip);
                self.timer.schedule(self.fade_ms)
            }
            fading @ TooltipState::FadingOut(_) => {
                self.state = fading;
                TimerCommand::Keep
            }
            TooltipState::Idle => TimerCommand::Keep,
        }
    }

    /// Deliver a fired timer. Returns true if the visible state changed.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.fire(token) {
            return false;
        }

        match std::mem::replace(&mut self.state, TooltipState::Idle) {
            TooltipState::Pending { anchor, text } => {
                self.state = TooltipState::Visible(VisibleTooltip {
                    text,
                    anchor,
                    position: None,
                    showing: true,
                });
                true
            }
            TooltipState::FadingOut(_) => true,
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Position the on-screen tooltip once its size is known.
    /// Returns true if a position was assigned.
    pub fn place(&mut self, size: TooltipSize, viewport_width: f64) -> bool {
        let (offset_y, margin) = (self.offset_y, self.edge_margin);
        match &mut self.state {
            TooltipState::Visible(tooltip) | TooltipState::FadingOut(tooltip)
                if tooltip.position.is_none() =>
            {
                tooltip.position = Some(position_tooltip(
                    tooltip.anchor,
                    size,
                    viewport_width,
                    offset_y,
                    margin,
                ));
                true
            }
            _ => false,
        }
    }

    /// The tooltip to render, if any
    pub fn current(&self) -> Option<&VisibleTooltip> {
        match &self.state {
            TooltipState::Visible(tooltip) | TooltipState::FadingOut(tooltip) => Some(tooltip),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self.state, TooltipState::Pending { .. })
    }
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}
