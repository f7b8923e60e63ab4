use core::cell::Cell;

/// One line-level operation seen by [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(u8, bool),
    Write(u8, bool),
}

/// Output lines that record every operation in order, across all lines.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    fail_line: Option<u8>,
}

impl Recorder {
    /// Recorder that rejects any operation on `line`, reporting the line id as error.
    pub fn failing_on(line: u8) -> Self {
        Self {
            events: Vec::new(),
            fail_line: Some(line),
        }
    }

    fn check(&self, line: u8) -> Result<(), u8> {
        match self.fail_line {
            Some(l) if l == line => Err(line),
            _ => Ok(()),
        }
    }
}

impl crate::OutputLines for Recorder {
    type Error = u8;

    fn configure_output(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        self.check(line)?;
        self.events.push(Event::Configure(line, level));
        Ok(())
    }

    fn write(&mut self, line: u8, level: bool) -> Result<(), Self::Error> {
        self.check(line)?;
        self.events.push(Event::Write(line, level));
        Ok(())
    }
}

/// Clock whose time only moves when told to.
#[derive(Default)]
pub struct TestClock(Cell<u32>);

impl TestClock {
    pub fn at(ms: u32) -> Self {
        Self(Cell::new(ms))
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl crate::Clock for TestClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

pub fn bits_msb(byte: u8) -> [bool; 8] {
    core::array::from_fn(|i| byte & (0x80 >> i) != 0)
}

pub fn bits_lsb(byte: u8) -> [bool; 8] {
    core::array::from_fn(|i| byte & (1 << i) != 0)
}

/// Expected events for clocking `bits` out over `data`/`clock`.
pub fn clocked(data: u8, clock: u8, bits: &[bool]) -> Vec<Event> {
    bits.iter()
        .flat_map(|&b| {
            [
                Event::Write(data, b),
                Event::Write(clock, true),
                Event::Write(clock, false),
            ]
        })
        .collect()
}
