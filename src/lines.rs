use embedded_hal::digital::OutputPin;

/// [`OutputLines`][crate::OutputLines] driver over an array of `embedded-hal` output pins.
///
/// The line id is the index into the array.  All pins must have the same type, which usually
/// means using the HAL's type-erased pin (`AnyPin`, `ErasedPin`, `Flex`, ...).
///
/// ## Example
/// ```
/// # use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};
/// # let data = Mock::new(&[Transaction::set(State::Low)]);
/// # let clock = Mock::new(&[Transaction::set(State::Low)]);
/// # let latch = Mock::new(&[Transaction::set(State::Low)]);
/// # struct Millis;
/// # impl sipo_array::Clock for Millis { fn now_ms(&self) -> u32 { 0 } }
/// let lines = sipo_array::PinLines::new([data, clock, latch]);
/// let mut sipo = sipo_array::Sipo8::<_, _, 2, 1>::new(lines, Millis).unwrap();
/// let bank = sipo.create_bank(0, 1, 2, 2).unwrap();
/// assert_eq!(sipo.num_pins_in_bank(bank), Ok(16));
/// # let (lines, _) = sipo.release();
/// # for mut pin in lines.into_inner() { pin.done(); }
/// ```
pub struct PinLines<P, const N: usize> {
    pins: [P; N],
}

impl<P, const N: usize> PinLines<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    pub fn into_inner(self) -> [P; N] {
        self.pins
    }

    fn pin(&mut self, line: u8) -> Result<&mut P, PinLinesError<P::Error>>
    where
        P: OutputPin,
    {
        self.pins
            .get_mut(line as usize)
            .ok_or(PinLinesError::UnknownLine(line))
    }
}

/// Error of the [`PinLines`] driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLinesError<E> {
    /// No pin is registered for this line id.
    UnknownLine(u8),
    /// The underlying pin reported an error.
    Pin(E),
}

impl<P: OutputPin, const N: usize> crate::OutputLines for PinLines<P, N> {
    type Error = PinLinesError<P::Error>;

    fn configure_output(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        // embedded-hal output pins are outputs by construction
        self.write(line, level)
    }

    fn write(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        let pin = self.pin(line)?;
        let res = if level { pin.set_high() } else { pin.set_low() };
        res.map_err(PinLinesError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::PinLinesError;
    use crate::OutputLines;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    #[test]
    fn pin_lines() {
        let mut p0 = Mock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);
        let mut p1 = Mock::new(&[Transaction::set(State::High)]);

        let mut lines = super::PinLines::new([p0.clone(), p1.clone()]);
        lines.configure_output(0, false).unwrap();
        lines.write(1, true).unwrap();
        lines.write(0, true).unwrap();

        p0.done();
        p1.done();
    }

    #[test]
    fn pin_lines_unknown_line() {
        let mut p0 = Mock::new(&[]);

        let mut lines = super::PinLines::new([p0.clone()]);
        assert!(matches!(
            lines.write(1, true),
            Err(PinLinesError::UnknownLine(1))
        ));
        assert!(matches!(
            lines.configure_output(7, false),
            Err(PinLinesError::UnknownLine(7))
        ));

        p0.done();
    }
}
