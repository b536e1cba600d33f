//! The Temporal Now component

use crate::host::HostClock;
use crate::TemporalResult;

use super::Instant;

/// The Temporal Now object, reading the current time from a host clock.
pub struct Now<C: HostClock> {
    clock: C,
}

impl<C: HostClock> Now<C> {
    /// Creates a new `Now` backed by the provided clock.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the current instant.
    ///
    /// Temporal-Proposal equivalent: `Temporal.Now.instant`.
    pub fn instant(&self) -> TemporalResult<Instant> {
        let epoch_nanos = self.clock.get_host_epoch_nanoseconds()?;
        Ok(Instant::from(epoch_nanos))
    }
}

#[cfg(feature = "sys")]
impl Now<crate::sys::SystemClock> {
    /// Returns a `Now` backed by the system clock.
    ///
    /// Enable with the `sys` feature flag.
    pub const fn system() -> Self {
        Self::new(crate::sys::SystemClock)
    }
}
