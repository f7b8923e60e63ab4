//! Bit-banged shift-out of status bytes.
//!
//! Every bit is put on the data line first and then captured by a HIGH-LOW pulse on the clock
//! line.  A bank is framed by its latch line: LOW while shifting, HIGH to present the new outputs
//! on all devices of the chain at once.
use crate::{Bank, BitOrder, OutputLines};

/// Shift one byte out over `data`/`clock`.
pub(crate) fn shift_out<L: OutputLines>(
    lines: &mut L,
    data: u8,
    clock: u8,
    byte: u8,
    order: BitOrder,
) -> Result<(), L::Error> {
    for i in 0..8 {
        let bit = match order {
            BitOrder::MsbFirst => 7 - i,
            BitOrder::LsbFirst => i,
        };
        lines.write(data, byte & (1 << bit) != 0)?;
        lines.write(clock, true)?;
        lines.write(clock, false)?;
    }
    Ok(())
}

/// Shift out all status bytes of `bank` inside one latch frame.
///
/// The first byte clocked in ends up in the device farthest down the chain, so MSB-first starts
/// with the bank's highest status byte and LSB-first with its lowest.
pub(crate) fn transfer_bank<L: OutputLines>(
    lines: &mut L,
    bank: &Bank,
    status: &[u8],
    order: BitOrder,
) -> Result<(), L::Error> {
    let bytes = &status[bank.status_bytes()];
    let (data, clock, latch) = (bank.data_line(), bank.clock_line(), bank.latch_line());

    lines.write(latch, false)?;
    match order {
        BitOrder::MsbFirst => {
            for &byte in bytes.iter().rev() {
                shift_out(lines, data, clock, byte, order)?;
            }
        }
        BitOrder::LsbFirst => {
            for &byte in bytes.iter() {
                shift_out(lines, data, clock, byte, order)?;
            }
        }
    }
    lines.write(latch, true)
}
