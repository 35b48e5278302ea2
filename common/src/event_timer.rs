//! Threshold-triggered stopwatch with a best-of-3 leaderboard.
//!
//! One [`EventTimer`] exists per [`EventKind`]. The timer is driven once per
//! control cycle with the filtered pitch; its trigger predicate decides
//! whether the event is in progress:
//!
//! ```text
//!            trigger                     trigger
//!   IDLE ─────────────► RUNNING ◄───────────────┐
//!    ▲                    │  └──────────────────┘
//!    └────── !trigger ────┘   (elapsed = now - start)
//!        (record elapsed)
//! ```
//!
//! The elapsed value shown on the last running cycle is the one frozen and
//! recorded on stop.

use heapless::Vec;

use crate::clock::elapsed_ms;
use crate::config::BEST_TIMES_LEN;
use crate::thresholds::{is_stoppie, is_wheelie};

/// Which event a timer measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    Stoppie,
    Wheelie,
}

impl EventKind {
    pub const ALL: [Self; 2] = [Self::Stoppie, Self::Wheelie];

    /// Position in [`Self::ALL`], for per-kind arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Stoppie => 0,
            Self::Wheelie => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stoppie => "stoppie",
            Self::Wheelie => "wheelie",
        }
    }

    /// Trigger predicate for this event.
    pub const fn trigger(self) -> fn(f32) -> bool {
        match self {
            Self::Stoppie => is_stoppie,
            Self::Wheelie => is_wheelie,
        }
    }
}

/// What a single [`EventTimer::update`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerTransition {
    /// Not triggered, not running.
    Idle,
    /// Trigger just became true; the timer started at this tick.
    Started,
    /// Still triggered; `elapsed` seconds since start.
    Running { elapsed: f32 },
    /// Trigger dropped; `elapsed` was recorded and landed at leaderboard
    /// position `rank` (0 = best) or fell off the board.
    Stopped { elapsed: f32, rank: Option<usize> },
}

impl TimerTransition {
    /// Whether the timer is running after this transition.
    #[inline]
    pub const fn is_running(&self) -> bool { matches!(self, Self::Started | Self::Running { .. }) }
}

// =============================================================================
// Leaderboard
// =============================================================================

/// Longest durations of the session, sorted descending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BestTimes {
    entries: Vec<f32, BEST_TIMES_LEN>,
}

impl BestTimes {
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    /// Insert `time`, keeping the longest [`BEST_TIMES_LEN`] entries.
    ///
    /// Ties are kept (a new equal entry lands after the existing ones).
    /// Returns the position the entry landed at, or `None` if it was too
    /// short to place.
    pub fn record(
        &mut self,
        time: f32,
    ) -> Option<usize> {
        let pos = self.entries.iter().position(|&t| t < time).unwrap_or(self.entries.len());
        if pos >= BEST_TIMES_LEN {
            return None;
        }
        if self.entries.is_full() {
            self.entries.pop();
        }
        // Capacity was freed above
        self.entries.insert(pos, time).ok()?;
        Some(pos)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] { &self.entries }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }
}

// =============================================================================
// Event Timer
// =============================================================================

/// Start/stop stopwatch for one event kind.
#[derive(Clone, Debug)]
pub struct EventTimer {
    kind: EventKind,
    trigger: fn(f32) -> bool,
    start_ms: Option<u32>,
    elapsed: f32,
    best: BestTimes,
}

impl EventTimer {
    pub const fn new(
        kind: EventKind,
        trigger: fn(f32) -> bool,
    ) -> Self {
        Self {
            kind,
            trigger,
            start_ms: None,
            elapsed: 0.0,
            best: BestTimes::new(),
        }
    }

    /// Timer using the standard trigger for `kind`.
    pub const fn for_kind(kind: EventKind) -> Self { Self::new(kind, kind.trigger()) }

    /// Advance the state machine with this cycle's pitch.
    pub fn update(
        &mut self,
        pitch: f32,
        now_ms: u32,
    ) -> TimerTransition {
        let triggered = (self.trigger)(pitch);

        match (self.start_ms, triggered) {
            (None, true) => {
                self.start_ms = Some(now_ms);
                self.elapsed = 0.0;
                TimerTransition::Started
            }
            (Some(start), true) => {
                self.elapsed = elapsed_ms(start, now_ms) as f32 / 1000.0;
                TimerTransition::Running { elapsed: self.elapsed }
            }
            (Some(_), false) => {
                self.start_ms = None;
                let rank = self.record_result(self.elapsed);
                TimerTransition::Stopped {
                    elapsed: self.elapsed,
                    rank,
                }
            }
            (None, false) => TimerTransition::Idle,
        }
    }

    /// Advance a running timer without a pitch reading.
    ///
    /// The trigger state is assumed unchanged, so a run in progress keeps
    /// counting and an idle timer stays idle.
    pub fn hold(
        &mut self,
        now_ms: u32,
    ) -> TimerTransition {
        match self.start_ms {
            Some(start) => {
                self.elapsed = elapsed_ms(start, now_ms) as f32 / 1000.0;
                TimerTransition::Running { elapsed: self.elapsed }
            }
            None => TimerTransition::Idle,
        }
    }

    /// Add a finished duration to the leaderboard.
    pub fn record_result(
        &mut self,
        elapsed: f32,
    ) -> Option<usize> {
        self.best.record(elapsed)
    }

    #[inline]
    pub const fn kind(&self) -> EventKind { self.kind }

    #[inline]
    pub const fn is_running(&self) -> bool { self.start_ms.is_some() }

    /// Seconds of the current run, or the frozen value of the last run.
    #[inline]
    pub const fn elapsed(&self) -> f32 { self.elapsed }

    #[inline]
    pub const fn best_times(&self) -> &BestTimes { &self.best }

    /// Stop without recording and clear the leaderboard.
    pub fn reset(&mut self) {
        self.start_ms = None;
        self.elapsed = 0.0;
        self.best.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
