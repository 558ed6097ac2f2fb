// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Allocation { bytes: usize },                  // Reserving a pixel buffer failed
    SizeMismatch { expected: usize, actual: usize }, // Snapshot/restore/sync buffers disagree on length
    WindowInit(String),                           // Creating the window failed
    WindowUpdate(String),                         // Updating the window buffer failed
    Config(String),                               // Reading or parsing the config file failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation { bytes } => write!(f, "Allocation error: could not reserve {bytes} bytes"),
            Error::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: expected {expected} pixels, got {actual}")
            }
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

/// Reserve exactly `len` elements or report how many bytes we were after.
pub(crate) fn alloc_filled<T: Copy>(len: usize, value: T) -> Result<Vec<T>, Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::Allocation {
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    v.resize(len, value);
    Ok(v)
}
