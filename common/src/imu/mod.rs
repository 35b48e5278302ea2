//! Accelerometer drivers implementing [`AccelSource`](crate::sensor::AccelSource).
//!
//! Drivers are generic over `embedded-hal` 1.0 bus traits so the same code
//! runs on the RP2040 and against test doubles on the host.

mod lsm6dsox;

pub use lsm6dsox::{DEFAULT_ADDRESS, Lsm6dsox, WHO_AM_I_VALUE};
