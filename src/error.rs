/// Errors reported by allocation and addressing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bank was requested with zero devices.
    ZeroSipos,
    /// Not enough unallocated devices remain for the requested bank.
    CapacityExhausted,
    /// Pin lies outside the active pin range.
    PinOutOfRange,
    /// Bank index has not been allocated.
    BankNotFound,
    /// Device index lies outside the addressed bank.
    SipoNotFound,
    /// Device capacity is zero or exceeds 255 devices.
    InvalidSipoCapacity,
    /// Timer capacity exceeds 255 slots.
    TooManyTimers,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ZeroSipos => write!(f, "bank must contain at least one SIPO"),
            Error::CapacityExhausted => write!(f, "not enough unallocated SIPOs for bank"),
            Error::PinOutOfRange => write!(f, "pin outside of active range"),
            Error::BankNotFound => write!(f, "bank not found"),
            Error::SipoNotFound => write!(f, "SIPO not found in bank"),
            Error::InvalidSipoCapacity => write!(f, "SIPO capacity must be between 1 and 255"),
            Error::TooManyTimers => write!(f, "timer capacity must not exceed 255"),
        }
    }
}

/// Error returned when creating a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError<E> {
    /// The request was rejected, nothing was configured or allocated.
    Alloc(Error),
    /// Configuring one of the bank's lines failed; the bank was not allocated.
    Line(E),
}

impl<E> From<Error> for BankError<E> {
    fn from(e: Error) -> Self {
        BankError::Alloc(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for BankError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BankError::Alloc(e) => write!(f, "{}", e),
            BankError::Line(e) => write!(f, "failed to configure bank line: {:?}", e),
        }
    }
}
