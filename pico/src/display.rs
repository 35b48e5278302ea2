//! Display driver for the 1.8" ST7735 TFT (128x160, black tab).
//!
//! Pin mapping on the Arduino Nano RP2040 Connect:
//! - CS: GPIO5 (D10)
//! - DC: GPIO20 (D8)
//! - RST: GPIO21 (D9)
//! - CLK: GPIO6 (SPI0 CLK, D13)
//! - MOSI: GPIO7 (SPI0 TX, D11)
//!
//! The panel is used rotated to a 160x128 landscape canvas.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{Orientation, Rotation};

/// Bytes buffered per SPI write by the display interface.
pub const SPI_BUFFER_LEN: usize = 512;

/// Display type alias for the ST7735 with a hardware reset line.
pub type St7735Display<'d> = mipidsi::Display<
    SpiInterface<'d, ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>,
    ST7735s,
    Output<'d>,
>;

/// The controller did not accept the init sequence.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub struct DisplayInitError;

/// Reset and initialize the ST7735.
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    rst: Output<'d>,
    buffer: &'d mut [u8],
) -> Result<St7735Display<'d>, DisplayInitError> {
    // Chip select is a GPIO output and cannot fail
    let Ok(spi_device) = ExclusiveDevice::new_no_delay(spi, cs);

    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 128x160 (portrait); 270 degrees gives landscape with
    // the connector on the left, matching the enclosure
    Builder::new(ST7735s, di)
        .reset_pin(rst)
        .display_size(128, 160)
        .orientation(Orientation::new().rotate(Rotation::Deg270))
        .init(&mut embassy_time::Delay)
        .map_err(|_| DisplayInitError)
}

/// SPI configuration for the ST7735.
///
/// The ST7735 write cycle is 66 ns minimum (~15 MHz).
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 15_000_000;
    config
}
