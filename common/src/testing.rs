//! Test doubles shared by the unit tests.

use core::cell::Cell;
use std::collections::VecDeque;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::Clock;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sensor::{AccelSample, AccelSource};

/// Clock that advances by `step` every time it is read.
pub struct StepClock {
    now: Cell<u32>,
    step: u32,
}

impl StepClock {
    pub fn new(
        start: u32,
        step: u32,
    ) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step));
        now
    }
}

/// Bus error reported by [`ScriptedImu`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

/// IMU that replays a fixed list of samples and then goes quiet.
pub struct ScriptedImu {
    samples: VecDeque<AccelSample>,
    fail_reads: bool,
}

impl ScriptedImu {
    pub fn new(samples: &[AccelSample]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            fail_reads: false,
        }
    }

    /// IMU that always has `sample` ready.
    pub fn steady(
        sample: AccelSample,
        count: usize,
    ) -> Self {
        Self::new(&std::vec![sample; count])
    }

    pub fn failing() -> Self {
        Self {
            samples: VecDeque::from([AccelSample::default()]),
            fail_reads: true,
        }
    }

    pub fn remaining(&self) -> usize { self.samples.len() }
}

impl AccelSource for ScriptedImu {
    type Error = BusFault;

    fn available(&mut self) -> Result<bool, Self::Error> { Ok(!self.samples.is_empty()) }

    fn read(&mut self) -> Result<AccelSample, Self::Error> {
        if self.fail_reads {
            return Err(BusFault);
        }
        self.samples.pop_front().ok_or(BusFault)
    }
}

/// Gravity vector that the averager turns into `pitch` degrees.
///
/// Only pitches in `(-115, 65)` are representable: the raw angle from
/// `atan2(-x, sqrt(y² + z²))` never leaves `[-90, 90]`.
pub fn sample_for_pitch(pitch: f32) -> AccelSample {
    let raw = (pitch + crate::config::MOUNT_ANGLE_DEG).to_radians();
    AccelSample::new(-raw.sin(), 0.0, raw.cos())
}

/// Full-canvas framebuffer for inspecting widget output.
pub struct TestDisplay {
    pixels: Vec<Rgb565>,
}

impl TestDisplay {
    pub fn new() -> Self {
        Self {
            pixels: std::vec![Rgb565::BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
    }

    /// Number of pixels of `color` inside the given rectangle.
    pub fn count_in(
        &self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgb565,
    ) -> usize {
        let mut n = 0;
        for py in y..y + h as i32 {
            for px in x..x + w as i32 {
                if self.pixel(px, py) == color {
                    n += 1;
                }
            }
        }
        n
    }

    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
