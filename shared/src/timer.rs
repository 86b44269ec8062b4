//! Timer tokens shared by the animated state machines.
//!
//! Each machine holds at most one live token. Scheduling a new timer issues a
//! fresh token, which implicitly cancels the previous one: when an old timer
//! eventually fires, its token no longer matches and the machine ignores it.

/// Identifies one scheduled timer of one state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A timer the host must schedule, delivering `token` back after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay_ms: u32,
}

/// What the host should do with a machine's single timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Replace whatever is pending with this timer.
    Schedule(TimerRequest),
    /// Drop the pending timer, if any.
    Cancel,
    /// Leave the slot untouched.
    Keep,
}

/// Issues tokens for a single machine and remembers which one is live.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    next: u64,
    live: Option<TimerToken>,
}

impl TimerSlot {
    /// Issue a new token, invalidating the previous one.
    pub fn schedule(&mut self, delay_ms: u32) -> TimerCommand {
        self.next += 1;
        let token = TimerToken(self.next);
        self.live = Some(token);
        TimerCommand::Schedule(TimerRequest { token, delay_ms })
    }

    /// Invalidate the live token.
    pub fn cancel(&mut self) -> TimerCommand {
        match self.live.take() {
            Some(_) => TimerCommand::Cancel,
            None => TimerCommand::Keep,
        }
    }

    /// Consume `token` if it is the live one. Stale tokens return false.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.live == Some(token) {
            self.live = None;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}

#[cfg(test)]
pub(crate) fn expect_schedule(command: TimerCommand) -> TimerRequest {
    match command {
        TimerCommand::Schedule(request) => request,
        other => panic!("expected a scheduled timer, got {:?}", other),
    }
}
