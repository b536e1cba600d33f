use crate::error::ErrorMessage;
use crate::host::HostClock;
use crate::time::EpochNanoseconds;
use crate::{TemporalError, TemporalResult};

use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by [`std::time::SystemTime`].
///
/// Enable with the `sys` feature flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> TemporalResult<EpochNanoseconds> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TemporalError::range().with_enum(ErrorMessage::SystemTimeBeforeEpoch))?
        .as_nanos();
    let nanos = i128::try_from(nanos)
        .map_err(|_| TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange))?;
    EpochNanoseconds::try_from(nanos)
}
