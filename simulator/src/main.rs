//! Wheelie display simulator for desktop platforms.
//!
//! Runs the same engine and widgets as the firmware against a simulated IMU,
//! rendered with `embedded-graphics-simulator`.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `D` | Toggle scripted demo ride / manual pitch |
//! | `W` / `S` | Manual mode: raise / lower the front wheel by 5° |
//! | `F` | Stall the simulated sensor (exercises the read timeout) |
//! | `R` | Reset leaderboards and ride statistics |
//!
//! Log output goes through `env_logger`; set `RUST_LOG=debug` for per-cycle
//! pitch values.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod imu;
mod ride;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info, warn};
use wheelie_common::colors::BLACK;
use wheelie_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use wheelie_common::format::format_time;
use wheelie_common::widgets::{draw_dashboard, draw_fault_frame};
use wheelie_common::{Clock, CycleReport, DisplayEngine, EventKind, RenderState, TimerTransition};

use crate::imu::{SimulatedImu, SystemClock};
use crate::ride::demo_pitch;
use crate::timing::{FRAME_TIME, MANUAL_STEP_DEG};

/// Where the simulated pitch comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Demo,
    Manual,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(4).build();
    let mut window = Window::new("Wheelie Display Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let clock = SystemClock::new();
    let mut imu = SimulatedImu::new();
    let mut engine = DisplayEngine::new();
    let mut render_state = RenderState::new();

    let mut mode = Mode::Demo;
    let mut manual_pitch = 0.0f32;
    let mut demo_start_ms = clock.now_ms();
    let mut reset_requested = false;
    let mut sensor_fault = false;

    info!("Simulator started ({SCREEN_WIDTH}x{SCREEN_HEIGHT}), demo ride running");

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::D => {
                            mode = match mode {
                                Mode::Demo => Mode::Manual,
                                Mode::Manual => {
                                    demo_start_ms = clock.now_ms();
                                    Mode::Demo
                                }
                            };
                            info!("Mode: {mode:?}");
                        }
                        Keycode::W if mode == Mode::Manual => {
                            manual_pitch = (manual_pitch - MANUAL_STEP_DEG).max(-110.0);
                            info!("Manual pitch: {manual_pitch:.0}");
                        }
                        Keycode::S if mode == Mode::Manual => {
                            manual_pitch = (manual_pitch + MANUAL_STEP_DEG).min(60.0);
                            info!("Manual pitch: {manual_pitch:.0}");
                        }
                        Keycode::F => {
                            imu.set_stalled(!imu.is_stalled());
                            info!("Sensor {}", if imu.is_stalled() { "stalled" } else { "resumed" });
                        }
                        Keycode::R => reset_requested = true,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Handle reset
        if reset_requested {
            engine.reset(clock.now_ms());
            display.clear(BLACK).ok();
            render_state.mark_display_cleared();
            info!("Leaderboards and ride statistics reset");
            reset_requested = false;
        }

        let target = match mode {
            Mode::Demo => demo_pitch(clock.now_ms().wrapping_sub(demo_start_ms) as f32 / 1000.0),
            Mode::Manual => manual_pitch,
        };
        imu.set_pitch(target);

        match engine.cycle(&mut imu, &clock) {
            Ok(report) => {
                if sensor_fault {
                    info!("Sensor data resumed");
                    sensor_fault = false;
                }
                log_cycle(&report);
                draw_dashboard(&mut display, &mut render_state, &engine, &report);
            }
            Err(err) => {
                if !sensor_fault {
                    warn!("{err}");
                    sensor_fault = true;
                }
                let session = engine.hold(clock.now_ms());
                draw_fault_frame(&mut display, &mut render_state, &engine, &session);
            }
        }

        render_state.end_frame();
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

fn log_cycle(report: &CycleReport) {
    debug!("pitch {:.1}", report.pitch);

    for kind in EventKind::ALL {
        match report.transition(kind) {
            TimerTransition::Started => debug!("{} started", kind.label()),
            TimerTransition::Stopped { elapsed, rank } => match rank {
                Some(rank) => info!("{} {}s, best #{}", kind.label(), format_time(elapsed), rank + 1),
                None => info!("{} {}s", kind.label(), format_time(elapsed)),
            },
            TimerTransition::Running { .. } | TimerTransition::Idle => {}
        }
    }
}
