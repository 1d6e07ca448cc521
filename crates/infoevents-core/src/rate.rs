//! Rate limiting for scroll and resize handlers.
//!
//! Both gates are driven by the caller: the throttle is handed the current
//! time, and the debounce hands out tickets that the caller's timer redeems.

use instant::Instant;
use std::time::Duration;

/// What the caller should do with one raw event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottleHit {
    /// Run the handler now.
    Fire,
    /// Dropped, and a trailing run is already pending.
    Drop,
    /// Dropped; arm a timer for `after` and redeem `ticket` when it expires.
    Schedule { ticket: u64, after: Duration },
}

/// Result of redeeming a trailing-run ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingRun {
    Fire,
    /// The gate is not open yet; wait this much longer with the same ticket.
    Wait(Duration),
    /// A leading run superseded this ticket.
    Stale,
}

/// Throttle with a leading and a single trailing run. Runs, leading or
/// trailing, are never closer together than `interval`; events dropped in
/// between collapse into one trailing run so the handler sees the final
/// state.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
    pending: Option<u64>,
    generation: u64,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
            pending: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the gate opens, or `None` when it is open.
    fn remaining(&self, now: Instant) -> Option<Duration> {
        let open_at = self.last? + self.interval;
        (now < open_at).then(|| open_at.duration_since(now))
    }

    /// Leading-edge gate only. Firing cancels any pending trailing run.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        if self.remaining(now).is_some() {
            return false;
        }
        self.last = Some(now);
        self.pending = None;
        true
    }

    pub fn hit(&mut self, now: Instant) -> ThrottleHit {
        if self.try_fire(now) {
            return ThrottleHit::Fire;
        }
        if self.pending.is_some() {
            return ThrottleHit::Drop;
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        ThrottleHit::Schedule {
            ticket: self.generation,
            after: self.remaining(now).unwrap_or(self.interval),
        }
    }

    pub fn redeem(&mut self, ticket: u64, now: Instant) -> TrailingRun {
        if self.pending != Some(ticket) {
            return TrailingRun::Stale;
        }
        match self.remaining(now) {
            Some(left) => TrailingRun::Wait(left),
            None => {
                self.last = Some(now);
                self.pending = None;
                TrailingRun::Fire
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce. Every call supersedes the previous ticket; when
/// the caller's timer for a ticket expires, it runs only if no newer call
/// happened in between.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait: Duration,
    generation: u64,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: 0,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        DebounceTicket(self.generation)
    }

    #[inline]
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }
}
