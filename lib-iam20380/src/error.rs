use core::{error, fmt};

/// Result type returned by every driver operation, `E` is the bus error type.
///
pub type Result<T, E> = core::result::Result<T, Error<E>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The bus transaction itself failed (NACK, arbitration loss, short transfer, ...).
    I2c(E),
    /// `WHO_AM_I` held an identity byte that no supported chip reports.
    DeviceNotFound(u8),
    /// A configuration value outside the set the chip accepts, nothing was written.
    InvalidArgument,
    /// The requested operation is undefined in the current device state.
    InvalidState,
}

impl<E: fmt::Debug> error::Error for Error<E> {}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::I2c(err) => write!(f, "I2C error: {:?}", err),
            Self::DeviceNotFound(id) => write!(f, "No IAM-20380 found, bad chip id {:#04x}", id),
            Self::InvalidArgument => write!(f, "Configuration value not supported by the chip"),
            Self::InvalidState => write!(f, "Operation not possible in the current device state"),
        }
    }
}

impl<E> From<E> for Error<E>
{
    fn from(err: E) -> Self {
        Error::I2c(err)
    }
}
