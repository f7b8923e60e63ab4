//! Banked arrays of 8-bit SIPO shift registers (74HC595 and friends).
//!
//! A [`Sipo8`] manages a fixed pool of serial-in/parallel-out devices and presents all of their
//! outputs as one flat array of pins.  Devices are grouped into banks, each bank being a chain of
//! devices sharing one data/clock/latch line triple.  Pins are changed in memory and pushed out to
//! the hardware bank by bank with the `xfer_*` methods.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

mod array;
mod bank;
mod common;
mod diag;
mod error;
mod lines;
mod mutex;
pub mod timer;
mod transfer;

#[cfg(test)]
mod test_support;

pub use array::Sipo8;
pub use bank::Bank;
pub use common::{BitOrder, Clock, OutputLines, PINS_PER_SIPO};
pub use error::{BankError, Error};
pub use lines::{PinLines, PinLinesError};
pub use mutex::SipoMutex;
pub use timer::Timers;

#[cfg(feature = "std")]
pub use common::StdClock;
