/// Number of output pins on a single SIPO device.
pub const PINS_PER_SIPO: u16 = 8;

/// Digital output primitive used to drive the data, clock and latch lines of every bank.
///
/// Lines are identified by a plain `u8` id, the same id that is handed to
/// [`Sipo8::create_bank()`][crate::Sipo8::create_bank].  The driver decides what an id maps to;
/// [`PinLines`][crate::PinLines] maps it to an index into an array of `embedded-hal` output pins.
pub trait OutputLines {
    type Error;

    /// Configure `line` as an output and immediately drive it to `level`.
    ///
    /// The level is applied together with the direction change so the line never floats or
    /// glitches while switching.
    fn configure_output(&mut self, line: u8, level: bool) -> Result<(), Self::Error>;

    /// Drive `line` HIGH (`true`) or LOW (`false`).
    fn write(&mut self, line: u8, level: bool) -> Result<(), Self::Error>;
}

impl<T: OutputLines + ?Sized> OutputLines for &mut T {
    type Error = T::Error;

    fn configure_output(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        T::configure_output(self, line, level)
    }

    fn write(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        T::write(self, line, level)
    }
}

/// Monotonic millisecond clock used by the timer slots.
///
/// The value may wrap around at `u32::MAX`; all elapsed-time arithmetic is wrapping.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        C::now_ms(self)
    }
}

/// [`Clock`] backed by [`std::time::Instant`], counting from its creation.
#[cfg(feature = "std")]
pub struct StdClock(std::time::Instant);

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self(std::time::Instant::now())
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        self.0.elapsed().as_millis() as u32
    }
}

/// Order in which bits (and the devices of a daisy-chained bank) are clocked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first, starting with the highest-numbered device of the bank.
    MsbFirst,
    /// Bit 0 first, starting with the lowest-numbered device of the bank.
    LsbFirst,
}
