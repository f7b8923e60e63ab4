use crate::bank::{locate, Bank};
use crate::timer::Timers;
use crate::{BankError, BitOrder, Clock, Error, OutputLines, PINS_PER_SIPO};

/// A fixed pool of 8-bit SIPO shift registers, addressed as one flat array of output pins.
///
/// The pool holds up to `SIPOS` devices, which are handed out to banks by
/// [`create_bank()`][Sipo8::create_bank].  Every device owns one status byte; bit `n` of the byte
/// is output `Qn` of the device.  Absolute pin `p` lives in status byte `p / 8`, bit `p % 8`.
///
/// All mutators only change the in-memory status bytes.  Nothing reaches the hardware until one of
/// the `xfer_*` methods is called.
///
/// Additionally `TIMERS` one-shot timer slots are available for pacing transfers.
///
/// ## Example
/// ```
/// use sipo_array::{BitOrder, Sipo8};
/// # use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};
/// # let mut expect_clock = vec![Transaction::set(State::Low)];
/// # for _ in 0..8 {
/// #     expect_clock.push(Transaction::set(State::High));
/// #     expect_clock.push(Transaction::set(State::Low));
/// # }
/// # let mut expect_data = vec![Transaction::set(State::Low)];
/// # for bit in [false, false, false, false, false, false, false, true] {
/// #     expect_data.push(Transaction::set(if bit { State::High } else { State::Low }));
/// # }
/// # let data = Mock::new(&expect_data);
/// # let clock = Mock::new(&expect_clock);
/// # let latch = Mock::new(&[
/// #     Transaction::set(State::Low),
/// #     Transaction::set(State::Low),
/// #     Transaction::set(State::High),
/// # ]);
/// # struct Millis;
/// # impl sipo_array::Clock for Millis { fn now_ms(&self) -> u32 { 0 } }
/// let lines = sipo_array::PinLines::new([data, clock, latch]);
/// let mut sipo = Sipo8::<_, _, 4, 0>::new(lines, Millis).unwrap();
///
/// let bank = sipo.create_bank(0, 1, 2, 1).unwrap();
/// sipo.set_bank_pin(bank, 0, true).unwrap();
/// sipo.xfer_bank(bank, BitOrder::MsbFirst).unwrap();
/// # let (lines, _) = sipo.release();
/// # for mut pin in lines.into_inner() { pin.done(); }
/// ```
pub struct Sipo8<L, C, const SIPOS: usize, const TIMERS: usize> {
    lines: L,
    status: [u8; SIPOS],
    banks: heapless::Vec<Bank, SIPOS>,
    sipos_used: u8,
    active_pins: u16,
    timers: Timers<C, TIMERS>,
}

impl<L, C, const SIPOS: usize, const TIMERS: usize> Sipo8<L, C, SIPOS, TIMERS>
where
    L: OutputLines,
    C: Clock,
{
    /// Create an empty array with all status bytes LOW and no banks.
    ///
    /// Fails if `SIPOS` is not within `1..=255` or `TIMERS` exceeds 255.
    pub fn new(lines: L, clock: C) -> Result<Self, Error> {
        if SIPOS == 0 || SIPOS > u8::MAX as usize {
            warn!("invalid SIPO capacity {=usize}", SIPOS);
            return Err(Error::InvalidSipoCapacity);
        }
        if TIMERS > u8::MAX as usize {
            warn!("invalid timer capacity {=usize}", TIMERS);
            return Err(Error::TooManyTimers);
        }
        Ok(Self {
            lines,
            status: [0; SIPOS],
            banks: heapless::Vec::new(),
            sipos_used: 0,
            active_pins: 0,
            timers: Timers::new(clock),
        })
    }

    /// Allocate a bank of `num_sipos` daisy-chained devices on the given lines.
    ///
    /// The three lines are configured as outputs driven LOW.  The bank gets the next free range of
    /// absolute pins and its index is returned; indices count up from 0 in creation order.
    ///
    /// Requests for zero devices or for more devices than remain unallocated are rejected without
    /// touching any line or state.
    pub fn create_bank(
        &mut self,
        data_line: u8,
        clock_line: u8,
        latch_line: u8,
        num_sipos: u8,
    ) -> Result<u8, BankError<L::Error>> {
        if num_sipos == 0 {
            return Err(Error::ZeroSipos.into());
        }
        if self.sipos_used as usize + num_sipos as usize > SIPOS {
            debug!(
                "bank of {=u8} SIPOs rejected, {=u8} free",
                num_sipos,
                self.sipos_free()
            );
            return Err(Error::CapacityExhausted.into());
        }

        for line in [data_line, clock_line, latch_line] {
            self.lines
                .configure_output(line, false)
                .map_err(BankError::Line)?;
        }

        let bank = Bank::new(
            data_line,
            clock_line,
            latch_line,
            num_sipos,
            self.active_pins,
        );
        self.banks
            .push(bank)
            .map_err(|_| Error::CapacityExhausted)?;
        self.active_pins += bank.num_pins();
        self.sipos_used += num_sipos;

        let index = (self.banks.len() - 1) as u8;
        debug!(
            "bank {=u8}: {=u8} SIPOs, pins {=u16}..={=u16}",
            index,
            num_sipos,
            bank.low_pin(),
            bank.high_pin()
        );
        Ok(index)
    }

    /// Set every reserved status byte to all-HIGH or all-LOW, including unallocated devices.
    pub fn set_all_array_pins(&mut self, level: bool) {
        let mask = if level { 0xff } else { 0x00 };
        self.status.fill(mask);
    }

    /// Invert every reserved status byte, including unallocated devices.
    pub fn invert_all_array_pins(&mut self) {
        for b in self.status.iter_mut() {
            *b = !*b;
        }
    }

    /// Same as [`set_all_array_pins()`][Self::set_all_array_pins].
    pub fn set_all_banks(&mut self, level: bool) {
        self.set_all_array_pins(level)
    }

    /// Same as [`invert_all_array_pins()`][Self::invert_all_array_pins].
    pub fn invert_all_banks(&mut self) {
        self.invert_all_array_pins()
    }

    /// Set absolute `pin` and return the pin number.
    pub fn set_array_pin(&mut self, pin: u16, level: bool) -> Result<u16, Error> {
        let (byte, bit) = self.locate_pin(pin)?;
        if level {
            self.status[byte] |= 1 << bit;
        } else {
            self.status[byte] &= !(1 << bit);
        }
        Ok(pin)
    }

    /// Invert absolute `pin` and return its new level.
    pub fn invert_array_pin(&mut self, pin: u16) -> Result<bool, Error> {
        let (byte, bit) = self.locate_pin(pin)?;
        self.status[byte] ^= 1 << bit;
        Ok(self.status[byte] & (1 << bit) != 0)
    }

    pub fn read_array_pin(&self, pin: u16) -> Result<bool, Error> {
        let (byte, bit) = self.locate_pin(pin)?;
        Ok(self.status[byte] & (1 << bit) != 0)
    }

    /// Set the bank-relative `pin` of `bank` and return the absolute pin number.
    ///
    /// `pin` is only checked against the active pins of the whole array, so a pin beyond the
    /// end of `bank` lands in the banks following it.
    pub fn set_bank_pin(&mut self, bank: u8, pin: u16, level: bool) -> Result<u16, Error> {
        let pin = self.bank_pin(bank, pin)?;
        self.set_array_pin(pin, level)
    }

    /// Invert the bank-relative `pin` of `bank` and return its new level.
    pub fn invert_bank_pin(&mut self, bank: u8, pin: u16) -> Result<bool, Error> {
        let pin = self.bank_pin(bank, pin)?;
        self.invert_array_pin(pin)
    }

    pub fn read_bank_pin(&self, bank: u8, pin: u16) -> Result<bool, Error> {
        let pin = self.bank_pin(bank, pin)?;
        self.read_array_pin(pin)
    }

    /// Set all pins of `bank`.
    pub fn set_bank(&mut self, bank: u8, level: bool) -> Result<(), Error> {
        let bytes = self.get_bank(bank)?.status_bytes();
        let mask = if level { 0xff } else { 0x00 };
        self.status[bytes].fill(mask);
        Ok(())
    }

    /// Invert all pins of `bank`.
    pub fn invert_bank(&mut self, bank: u8) -> Result<(), Error> {
        let bytes = self.get_bank(bank)?.status_bytes();
        for b in self.status[bytes].iter_mut() {
            *b = !*b;
        }
        Ok(())
    }

    /// Set all pins of banks `from..=to`.  Does nothing if the range is malformed.
    pub fn set_banks(&mut self, from: u8, to: u8, level: bool) {
        for bank in self.bank_range(from, to) {
            let _ = self.set_bank(bank, level);
        }
    }

    /// Invert all pins of banks `from..=to`.  Does nothing if the range is malformed.
    pub fn invert_banks(&mut self, from: u8, to: u8) {
        for bank in self.bank_range(from, to) {
            let _ = self.invert_bank(bank);
        }
    }

    /// Overwrite the status byte of device `sipo` within `bank`.
    ///
    /// Returns the index of the status byte that was written.
    pub fn set_bank_sipo(&mut self, bank: u8, sipo: u8, value: u8) -> Result<u8, Error> {
        let byte = self.sipo_byte(bank, sipo)?;
        self.status[byte] = value;
        Ok(byte as u8)
    }

    /// Invert the status byte of device `sipo` within `bank`.
    ///
    /// Like [`set_bank_sipo()`][Self::set_bank_sipo], returns the index of the status byte that
    /// was written; use [`read_bank_sipo()`][Self::read_bank_sipo] for the new value.
    pub fn invert_bank_sipo(&mut self, bank: u8, sipo: u8) -> Result<u8, Error> {
        let byte = self.sipo_byte(bank, sipo)?;
        self.status[byte] = !self.status[byte];
        Ok(byte as u8)
    }

    pub fn read_bank_sipo(&self, bank: u8, sipo: u8) -> Result<u8, Error> {
        let byte = self.sipo_byte(bank, sipo)?;
        Ok(self.status[byte])
    }

    /// Find the bank that absolute `pin` belongs to.
    pub fn get_bank_from_pin(&self, pin: u16) -> Result<u8, Error> {
        if pin >= self.active_pins {
            return Err(Error::PinOutOfRange);
        }
        self.banks
            .iter()
            .position(|b| b.contains(pin))
            .map(|i| i as u8)
            .ok_or(Error::BankNotFound)
    }

    pub fn num_pins_in_bank(&self, bank: u8) -> Result<u16, Error> {
        Ok(self.get_bank(bank)?.num_pins())
    }

    /// Clock the status bytes of banks `from..=to` out to the hardware.
    ///
    /// Each bank is framed on its own: latch LOW, all of the bank's devices shifted out, latch
    /// HIGH.  With [`BitOrder::MsbFirst`] the bank's highest device is sent first and every byte
    /// is sent bit 7 first; [`BitOrder::LsbFirst`] reverses both.
    ///
    /// A malformed range transfers nothing and returns `Ok(())`.
    pub fn xfer_banks(&mut self, from: u8, to: u8, order: BitOrder) -> Result<(), L::Error> {
        for index in self.bank_range(from, to) {
            trace!("xfer bank {=u8}", index);
            let bank = &self.banks[index as usize];
            crate::transfer::transfer_bank(&mut self.lines, bank, &self.status, order)?;
        }
        Ok(())
    }

    pub fn xfer_bank(&mut self, bank: u8, order: BitOrder) -> Result<(), L::Error> {
        self.xfer_banks(bank, bank, order)
    }

    /// Transfer every allocated bank.
    pub fn xfer_all_banks(&mut self, order: BitOrder) -> Result<(), L::Error> {
        match self.num_banks() {
            0 => Ok(()),
            n => self.xfer_banks(0, n - 1, order),
        }
    }

    /// Same as [`xfer_all_banks()`][Self::xfer_all_banks].
    pub fn xfer_array(&mut self, order: BitOrder) -> Result<(), L::Error> {
        self.xfer_all_banks(order)
    }

    pub fn start_timer(&mut self, slot: u8) {
        self.timers.start(slot)
    }

    pub fn stop_timer(&mut self, slot: u8) {
        self.timers.stop(slot)
    }

    /// See [`Timers::is_elapsed()`].
    pub fn timer_elapsed(&mut self, slot: u8, duration_ms: u32) -> bool {
        self.timers.is_elapsed(slot, duration_ms)
    }

    pub fn timer_active(&self, slot: u8) -> bool {
        self.timers.is_active(slot)
    }

    pub fn timers_mut(&mut self) -> &mut Timers<C, TIMERS> {
        &mut self.timers
    }
}

impl<L, C, const SIPOS: usize, const TIMERS: usize> Sipo8<L, C, SIPOS, TIMERS> {
    pub fn max_sipos(&self) -> u8 {
        SIPOS as u8
    }

    pub fn max_pins(&self) -> u16 {
        SIPOS as u16 * PINS_PER_SIPO
    }

    pub fn max_timers(&self) -> u8 {
        TIMERS as u8
    }

    pub fn num_status_bytes(&self) -> usize {
        self.status.len()
    }

    /// Devices handed out to banks so far.
    pub fn sipos_used(&self) -> u8 {
        self.sipos_used
    }

    pub fn sipos_free(&self) -> u8 {
        (SIPOS - self.sipos_used as usize) as u8
    }

    /// Number of pins covered by the allocated banks.
    pub fn active_pins(&self) -> u16 {
        self.active_pins
    }

    pub fn num_banks(&self) -> u8 {
        self.banks.len() as u8
    }

    pub fn bank(&self, bank: u8) -> Option<&Bank> {
        self.banks.get(bank as usize)
    }

    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    pub fn status_bytes(&self) -> &[u8] {
        &self.status
    }

    /// Access the output lines, e.g. to drive lines not owned by any bank.
    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }

    /// Destroy the array and hand back the output lines and the clock.
    pub fn release(self) -> (L, C) {
        (self.lines, self.timers.into_clock())
    }

    fn get_bank(&self, bank: u8) -> Result<&Bank, Error> {
        self.bank(bank).ok_or(Error::BankNotFound)
    }

    fn locate_pin(&self, pin: u16) -> Result<(usize, u8), Error> {
        if pin < self.active_pins {
            Ok(locate(pin))
        } else {
            Err(Error::PinOutOfRange)
        }
    }

    fn bank_pin(&self, bank: u8, pin: u16) -> Result<u16, Error> {
        self.get_bank(bank)?
            .absolute_pin(pin)
            .ok_or(Error::PinOutOfRange)
    }

    fn sipo_byte(&self, bank: u8, sipo: u8) -> Result<usize, Error> {
        let bank = self.get_bank(bank)?;
        if sipo < bank.num_sipos() {
            Ok(bank.status_bytes().start + sipo as usize)
        } else {
            Err(Error::SipoNotFound)
        }
    }

    fn bank_range(&self, from: u8, to: u8) -> core::ops::Range<u8> {
        if from <= to && (to as usize) < self.banks.len() {
            from..to + 1
        } else {
            0..0
        }
    }
}
