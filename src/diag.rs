//! Human-readable dumps of the array for debugging during development.
use crate::{Sipo8, PINS_PER_SIPO};
use core::fmt::Write;

impl<L, C, const SIPOS: usize, const TIMERS: usize> Sipo8<L, C, SIPOS, TIMERS> {
    /// Print the status bits of every bank, one line per bank.
    ///
    /// Bits are printed most significant first: bit 7 of the bank's highest device down to bit 0
    /// of its lowest, matching the physical order along the chain.
    pub fn print_pin_statuses<W: Write>(&self, w: &mut W) -> core::fmt::Result {
        if self.banks().is_empty() {
            return writeln!(w, "No banks defined");
        }
        writeln!(w, "Active pin array, pin statuses:")?;
        for (i, bank) in self.banks().iter().enumerate() {
            write!(w, "Bank {:>2}: MS", i)?;
            for &byte in self.status_bytes()[bank.status_bytes()].iter().rev() {
                write!(w, "{:08b}", byte)?;
            }
            writeln!(w, "LS")?;
        }
        Ok(())
    }

    /// Print the capacity counters and the descriptor of every bank.
    pub fn print_sipo_data<W: Write>(&self, w: &mut W) -> core::fmt::Result {
        writeln!(w, "SIPO global values:")?;
        writeln!(w, "pins_per_SIPO        = {}", PINS_PER_SIPO)?;
        writeln!(w, "max_SIPOs            = {}", self.max_sipos())?;
        writeln!(w, "bank_SIPO_count      = {}", self.sipos_used())?;
        writeln!(w, "num_active_pins      = {}", self.active_pins())?;
        writeln!(w, "num_pin_status_bytes = {}", self.num_status_bytes())?;
        if self.sipos_free() > 0 {
            writeln!(w, "next free bank       = {}", self.num_banks())?;
        } else {
            writeln!(w, "next free bank       = all SIPOs used")?;
        }
        writeln!(w, "number of timers     = {}", self.max_timers())?;

        writeln!(w, "Bank data:")?;
        for (i, bank) in self.banks().iter().enumerate() {
            writeln!(w, "bank = {}", i)?;
            writeln!(w, "  num SIPOs = {}", bank.num_sipos())?;
            writeln!(
                w,
                "  latch_pin = {}  clock_pin = {}  data_pin = {}",
                bank.latch_line(),
                bank.clock_line(),
                bank.data_line()
            )?;
            writeln!(
                w,
                "  low_pin   = {}  high_pin  = {}",
                bank.low_pin(),
                bank.high_pin()
            )?;
        }
        Ok(())
    }
}
