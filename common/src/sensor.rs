//! Accelerometer source abstraction and sensor errors.

use core::fmt;

/// One accelerometer reading in units of g.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(
        x: f32,
        y: f32,
        z: f32,
    ) -> Self {
        Self { x, y, z }
    }
}

/// A device that produces acceleration samples on demand.
///
/// `available` is polled until it reports a fresh sample; `read` then
/// consumes that sample.
pub trait AccelSource {
    /// Bus or driver error.
    type Error;

    /// Whether a new sample is ready to be read.
    fn available(&mut self) -> Result<bool, Self::Error>;

    /// Read the latest sample.
    fn read(&mut self) -> Result<AccelSample, Self::Error>;
}

/// Errors raised while bringing up or reading the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError<E> {
    /// The underlying bus transaction failed.
    Bus(E),
    /// No sample arrived within the per-sample timeout.
    ///
    /// `collected` is how many samples of the reading were gathered first.
    Timeout { collected: usize },
    /// The device answered with an unexpected identity register.
    UnknownDevice { who_am_i: u8 },
}

impl<E> SensorError<E> {
    /// Timeouts are recoverable; everything else indicates broken hardware.
    pub const fn is_recoverable(&self) -> bool { matches!(self, Self::Timeout { .. }) }
}

impl<E: fmt::Debug> fmt::Display for SensorError<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "sensor bus error: {e:?}"),
            Self::Timeout { collected } => write!(f, "sensor timeout after {collected} samples"),
            Self::UnknownDevice { who_am_i } => write!(f, "unknown sensor id 0x{who_am_i:02X}"),
        }
    }
}
