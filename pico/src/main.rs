//! Wheelie display firmware for the Arduino Nano RP2040 Connect.
//!
//! Reads pitch from the on-board LSM6DSOX and drives a 160x128 ST7735 TFT.
//! Everything runs in one task: each loop iteration averages a burst of
//! samples, advances the engine and redraws what changed.
//!
//! A sensor or display that fails to initialize halts the board after
//! logging the error; nothing is drawn. Read timeouts during the ride show
//! the fault indicator while the ride clock keeps running.

#![no_std]
#![no_main]

mod clock;
mod display;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::Spi;
use embedded_graphics::prelude::*;
use wheelie_common::colors::BLACK;
use wheelie_common::imu::Lsm6dsox;
use wheelie_common::widgets::{draw_dashboard, draw_fault_frame};
use wheelie_common::{Clock, CycleReport, DisplayEngine, EventKind, RenderState, TimerTransition};
use {defmt_rtt as _, panic_probe as _};

use crate::clock::EmbassyClock;
use crate::display::{SPI_BUFFER_LEN, display_spi_config, init_display};

/// I2C clock for the IMU (fast mode).
const IMU_I2C_FREQUENCY: u32 = 400_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Wheelie display starting...");

    let p = embassy_rp::init(Default::default());

    // IMU on I2C0: SDA=GPIO12, SCL=GPIO13
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = IMU_I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_13, p.PIN_12, i2c_config);

    let mut imu = Lsm6dsox::new(i2c);
    if let Err(e) = imu.init() {
        error!("IMU init failed: {}", e);
        halt();
    }
    info!("IMU initialized");

    // Display pins: CS=D10, DC=D8, RST=D9
    let cs = Output::new(p.PIN_5, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    // Initialize SPI (TX-only, display doesn't need MISO)
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_6, p.PIN_7, display_spi_config());

    let mut spi_buffer = [0u8; SPI_BUFFER_LEN];
    let mut display = match init_display(spi, cs, dc, rst, &mut spi_buffer) {
        Ok(display) => display,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };
    info!("Display initialized!");

    display.clear(BLACK).ok();

    let clock = EmbassyClock;
    let mut engine = DisplayEngine::new();
    let mut render_state = RenderState::new();
    let mut sensor_fault = false;

    // Ride clock starts at power-up
    engine.reset(clock.now_ms());

    info!("Starting main loop...");

    loop {
        match engine.cycle(&mut imu, &clock) {
            Ok(report) => {
                if sensor_fault {
                    info!("IMU data resumed");
                    sensor_fault = false;
                }
                log_transitions(&report);
                draw_dashboard(&mut display, &mut render_state, &engine, &report);
            }
            Err(e) => {
                if !sensor_fault {
                    if e.is_recoverable() {
                        warn!("IMU read: {}", e);
                    } else {
                        error!("IMU read: {}", e);
                    }
                    sensor_fault = true;
                }
                let session = engine.hold(clock.now_ms());
                draw_fault_frame(&mut display, &mut render_state, &engine, &session);
            }
        }

        render_state.end_frame();
    }
}

fn log_transitions(report: &CycleReport) {
    for kind in EventKind::ALL {
        if let TimerTransition::Stopped { elapsed, rank } = report.transition(kind) {
            info!("{=str} {=f32}s rank {}", kind.label(), elapsed, rank);
        }
    }
}

/// Park the core after an unrecoverable init failure.
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
