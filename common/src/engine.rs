//! One control cycle over the averager, both event timers and the session.
//!
//! [`DisplayEngine`] owns all mutable state of the display. The control loop
//! owns the engine and passes it by reference to the widgets; nothing is
//! global.
//!
//! # Cycle Order
//!
//! 1. Average a burst of samples into a pitch reading
//! 2. Update the stoppie timer, then the wheelie timer
//! 3. Forward a wheelie start edge to the session
//! 4. Tick the session with the wheelie timer's state after the update

use crate::averager::SampleAverager;
use crate::clock::Clock;
use crate::event_timer::{EventKind, EventTimer, TimerTransition};
use crate::sensor::{AccelSource, SensorError};
use crate::session::{SessionAccumulator, SessionSnapshot};

/// Everything that happened in one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleReport {
    pub now_ms: u32,
    pub pitch: f32,
    pub stoppie: TimerTransition,
    pub wheelie: TimerTransition,
    pub session: SessionSnapshot,
}

impl CycleReport {
    /// Transition of the timer for `kind`.
    pub const fn transition(
        &self,
        kind: EventKind,
    ) -> TimerTransition {
        match kind {
            EventKind::Stoppie => self.stoppie,
            EventKind::Wheelie => self.wheelie,
        }
    }
}

/// Pitch-tracking and dual-timer state engine.
#[derive(Clone, Debug)]
pub struct DisplayEngine {
    averager: SampleAverager,
    stoppie: EventTimer,
    wheelie: EventTimer,
    session: SessionAccumulator,
}

impl DisplayEngine {
    pub const fn new() -> Self { Self::with_averager(SampleAverager::new()) }

    pub const fn with_averager(averager: SampleAverager) -> Self {
        Self {
            averager,
            stoppie: EventTimer::for_kind(EventKind::Stoppie),
            wheelie: EventTimer::for_kind(EventKind::Wheelie),
            session: SessionAccumulator::new(),
        }
    }

    /// Read the sensor and run one cycle.
    ///
    /// On error nothing is updated; call [`Self::hold`] to keep the ride
    /// clock running.
    pub fn cycle<S, C>(
        &mut self,
        sensor: &mut S,
        clock: &C,
    ) -> Result<CycleReport, SensorError<S::Error>>
    where
        S: AccelSource,
        C: Clock,
    {
        let pitch = self.averager.compute_pitch(sensor, clock)?;
        Ok(self.step(pitch, clock.now_ms()))
    }

    /// Run one cycle with an already filtered pitch.
    pub fn step(
        &mut self,
        pitch: f32,
        now_ms: u32,
    ) -> CycleReport {
        let stoppie = self.stoppie.update(pitch, now_ms);
        let wheelie = self.wheelie.update(pitch, now_ms);

        if wheelie == TimerTransition::Started {
            self.session.mark_wheelie_start(now_ms);
        }
        let session = self.session.tick(now_ms, self.wheelie.is_running());

        CycleReport {
            now_ms,
            pitch,
            stoppie,
            wheelie,
            session,
        }
    }

    /// Advance running timers and the session for a cycle without a pitch
    /// reading.
    ///
    /// Timers keep their trigger state, so a wheelie in progress keeps
    /// counting on both the timer and the session total.
    pub fn hold(
        &mut self,
        now_ms: u32,
    ) -> SessionSnapshot {
        self.stoppie.hold(now_ms);
        self.wheelie.hold(now_ms);
        self.session.tick(now_ms, self.wheelie.is_running())
    }

    /// Clear timers, leaderboards and the ride. The ride restarts at `now_ms`.
    pub fn reset(
        &mut self,
        now_ms: u32,
    ) {
        self.stoppie.reset();
        self.wheelie.reset();
        self.session.reset();
        self.session.tick(now_ms, false);
    }

    #[inline]
    pub const fn averager(&self) -> &SampleAverager { &self.averager }

    #[inline]
    pub const fn stoppie(&self) -> &EventTimer { &self.stoppie }

    #[inline]
    pub const fn wheelie(&self) -> &EventTimer { &self.wheelie }

    /// Timer for `kind`.
    #[inline]
    pub const fn timer(
        &self,
        kind: EventKind,
    ) -> &EventTimer {
        match kind {
            EventKind::Stoppie => &self.stoppie,
            EventKind::Wheelie => &self.wheelie,
        }
    }

    #[inline]
    pub const fn session(&self) -> &SessionAccumulator { &self.session }
}

impl Default for DisplayEngine {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
