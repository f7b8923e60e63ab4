use crate::PINS_PER_SIPO;

/// Descriptor of one bank of daisy-chained SIPOs sharing a data/clock/latch line triple.
///
/// Banks are created through [`Sipo8::create_bank()`][crate::Sipo8::create_bank] and never change
/// afterwards.  The pin range `low_pin..=high_pin` is absolute and directly follows the range of
/// the previously created bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bank {
    data_line: u8,
    clock_line: u8,
    latch_line: u8,
    num_sipos: u8,
    low_pin: u16,
    high_pin: u16,
}

impl Bank {
    pub(crate) fn new(
        data_line: u8,
        clock_line: u8,
        latch_line: u8,
        num_sipos: u8,
        low_pin: u16,
    ) -> Self {
        Self {
            data_line,
            clock_line,
            latch_line,
            num_sipos,
            low_pin,
            high_pin: low_pin + num_sipos as u16 * PINS_PER_SIPO - 1,
        }
    }

    pub fn data_line(&self) -> u8 {
        self.data_line
    }

    pub fn clock_line(&self) -> u8 {
        self.clock_line
    }

    pub fn latch_line(&self) -> u8 {
        self.latch_line
    }

    pub fn num_sipos(&self) -> u8 {
        self.num_sipos
    }

    /// First absolute pin of this bank.
    pub fn low_pin(&self) -> u16 {
        self.low_pin
    }

    /// Last absolute pin of this bank (inclusive).
    pub fn high_pin(&self) -> u16 {
        self.high_pin
    }

    pub fn num_pins(&self) -> u16 {
        self.num_sipos as u16 * PINS_PER_SIPO
    }

    pub fn contains(&self, pin: u16) -> bool {
        self.low_pin <= pin && pin <= self.high_pin
    }

    /// Index range of this bank's status bytes within the array.
    pub fn status_bytes(&self) -> core::ops::Range<usize> {
        let first = (self.low_pin / PINS_PER_SIPO) as usize;
        first..first + self.num_sipos as usize
    }

    /// Translate a bank-relative pin into an absolute pin.
    ///
    /// The result is not limited to this bank: relative pins past `num_pins()` address the
    /// banks created afterwards.  `None` only if the sum does not fit a pin number.
    pub(crate) fn absolute_pin(&self, pin: u16) -> Option<u16> {
        self.low_pin.checked_add(pin)
    }
}

/// Split an absolute pin into its status byte index and bit position.
#[inline]
pub(crate) fn locate(pin: u16) -> (usize, u8) {
    ((pin / PINS_PER_SIPO) as usize, (pin % PINS_PER_SIPO) as u8)
}
