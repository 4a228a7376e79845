//! Analog acquisition abstraction

use crate::signal_types::RawSample;

/// A single analog input, sampled once per tick.
///
/// Implementations must perform a fresh conversion on every call; no caching.
/// Read failures are the board's concern: an implementation that cannot
/// convert reports `RawSample::default()` (treated as noise downstream).
pub trait AcquisitionSource {
    /// Perform one conversion.
    fn read(&mut self) -> RawSample;
}

impl<F> AcquisitionSource for F
where
    F: FnMut() -> u16,
{
    fn read(&mut self) -> RawSample {
        RawSample::new(self())
    }
}
