//! ST LSM6DSOX 6-axis IMU over I2C.
//!
//! Only the accelerometer is read. The gyroscope is still powered up with the
//! same settings the Arduino board library uses.
//!
//! # Configuration
//!
//! | Register | Value | Meaning |
//! |----------|-------|---------|
//! | `CTRL1_XL` | `0x4A` | Accel 104 Hz, ±4 g, LPF2 |
//! | `CTRL2_G` | `0x4C` | Gyro 104 Hz, 2000 dps |
//! | `CTRL7_G` | `0x00` | Gyro high-performance mode |
//! | `CTRL8_XL` | `0x09` | Accel low-pass ODR/4, 6D on LPF2 |

use embedded_hal::i2c::I2c;

use crate::sensor::{AccelSample, AccelSource, SensorError};

/// I2C address with SA0 low (Nano RP2040 Connect wiring).
pub const DEFAULT_ADDRESS: u8 = 0x6A;

/// Expected `WHO_AM_I` contents.
pub const WHO_AM_I_VALUE: u8 = 0x6C;

// Register map (subset)
const WHO_AM_I: u8 = 0x0F;
const CTRL1_XL: u8 = 0x10;
const CTRL2_G: u8 = 0x11;
const CTRL7_G: u8 = 0x16;
const CTRL8_XL: u8 = 0x17;
const STATUS_REG: u8 = 0x1E;
const OUTX_L_A: u8 = 0x28;

/// `STATUS_REG` accelerometer data-ready flag.
const XLDA: u8 = 0x01;

/// g per LSB at ±4 g full scale.
const ACCEL_SCALE: f32 = 4.0 / 32768.0;

/// Startup register writes, in order.
const INIT_SEQUENCE: [(u8, u8); 4] = [(CTRL2_G, 0x4C), (CTRL1_XL, 0x4A), (CTRL7_G, 0x00), (CTRL8_XL, 0x09)];

/// LSM6DSOX accelerometer driver.
pub struct Lsm6dsox<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Lsm6dsox<I> {
    pub const fn new(i2c: I) -> Self { Self::with_address(i2c, DEFAULT_ADDRESS) }

    pub const fn with_address(
        i2c: I,
        address: u8,
    ) -> Self {
        Self { i2c, address }
    }

    /// Check the device identity and configure accelerometer and gyroscope.
    pub fn init(&mut self) -> Result<(), SensorError<I::Error>> {
        let who_am_i = self.read_register(WHO_AM_I)?;
        if who_am_i != WHO_AM_I_VALUE {
            return Err(SensorError::UnknownDevice { who_am_i });
        }

        for (register, value) in INIT_SEQUENCE {
            self.i2c.write(self.address, &[register, value]).map_err(SensorError::Bus)?;
        }
        Ok(())
    }

    /// Release the bus.
    pub fn release(self) -> I { self.i2c }

    fn read_register(
        &mut self,
        register: u8,
    ) -> Result<u8, SensorError<I::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(SensorError::Bus)?;
        Ok(buf[0])
    }
}

impl<I: I2c> AccelSource for Lsm6dsox<I> {
    type Error = I::Error;

    fn available(&mut self) -> Result<bool, Self::Error> {
        let mut status = [0u8; 1];
        self.i2c.write_read(self.address, &[STATUS_REG], &mut status)?;
        Ok(status[0] & XLDA != 0)
    }

    fn read(&mut self) -> Result<AccelSample, Self::Error> {
        let mut raw = [0u8; 6];
        self.i2c.write_read(self.address, &[OUTX_L_A], &mut raw)?;

        let axis = |lo: usize| f32::from(i16::from_le_bytes([raw[lo], raw[lo + 1]])) * ACCEL_SCALE;
        Ok(AccelSample::new(axis(0), axis(2), axis(4)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    use super::*;

    /// Register-file I2C device with auto-incrementing address pointer.
    struct FakeBus {
        registers: [u8; 0x80],
        writes: std::vec::Vec<(u8, u8)>,
        fail: bool,
    }

    impl FakeBus {
        fn new(who_am_i: u8) -> Self {
            let mut registers = [0u8; 0x80];
            registers[WHO_AM_I as usize] = who_am_i;
            Self {
                registers,
                writes: std::vec::Vec::new(),
                fail: false,
            }
        }
    }

    impl ErrorType for FakeBus {
        type Error = ErrorKind;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            if address != DEFAULT_ADDRESS {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }

            let mut pointer = 0usize;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if let Some((&reg, data)) = bytes.split_first() {
                            pointer = reg as usize;
                            for &b in data {
                                self.registers[pointer] = b;
                                self.writes.push((pointer as u8, b));
                                pointer += 1;
                            }
                        }
                    }
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.registers[pointer];
                            pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_init_configures_device() {
        let mut imu = Lsm6dsox::new(FakeBus::new(WHO_AM_I_VALUE));
        imu.init().unwrap();

        let bus = imu.release();
        assert_eq!(bus.writes, INIT_SEQUENCE.to_vec());
        assert_eq!(bus.registers[CTRL1_XL as usize], 0x4A);
    }

    #[test]
    fn test_init_rejects_unknown_device() {
        let mut imu = Lsm6dsox::new(FakeBus::new(0x69));
        assert_eq!(imu.init(), Err(SensorError::UnknownDevice { who_am_i: 0x69 }));
        assert!(imu.release().writes.is_empty(), "nothing written to a foreign device");
    }

    #[test]
    fn test_init_bus_error() {
        let mut bus = FakeBus::new(WHO_AM_I_VALUE);
        bus.fail = true;
        let mut imu = Lsm6dsox::new(bus);
        assert_eq!(imu.init(), Err(SensorError::Bus(ErrorKind::Other)));
    }

    #[test]
    fn test_wrong_address_nacks() {
        let mut imu = Lsm6dsox::with_address(FakeBus::new(WHO_AM_I_VALUE), 0x6B);
        assert_eq!(
            imu.init(),
            Err(SensorError::Bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)))
        );
    }

    #[test]
    fn test_available_follows_xlda() {
        let mut bus = FakeBus::new(WHO_AM_I_VALUE);
        bus.registers[STATUS_REG as usize] = 0x02; // gyro ready only
        let mut imu = Lsm6dsox::new(bus);
        assert!(!imu.available().unwrap());

        let mut bus = imu.release();
        bus.registers[STATUS_REG as usize] = 0x03;
        let mut imu = Lsm6dsox::new(bus);
        assert!(imu.available().unwrap());
    }

    #[test]
    fn test_read_scales_to_g() {
        let mut bus = FakeBus::new(WHO_AM_I_VALUE);
        let raw: [i16; 3] = [8192, -8192, 16384];
        for (i, v) in raw.iter().enumerate() {
            let [lo, hi] = v.to_le_bytes();
            bus.registers[OUTX_L_A as usize + i * 2] = lo;
            bus.registers[OUTX_L_A as usize + i * 2 + 1] = hi;
        }

        let mut imu = Lsm6dsox::new(bus);
        let sample = imu.read().unwrap();
        assert_eq!(sample, AccelSample::new(1.0, -1.0, 2.0));
    }

    #[test]
    fn test_read_full_scale() {
        let mut bus = FakeBus::new(WHO_AM_I_VALUE);
        bus.registers[OUTX_L_A as usize] = 0x00;
        bus.registers[OUTX_L_A as usize + 1] = 0x80; // i16::MIN
        let mut imu = Lsm6dsox::new(bus);
        assert_eq!(imu.read().unwrap().x, -4.0);
    }
}
