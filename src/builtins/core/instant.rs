//! An implementation of the Temporal Instant.

use core::cmp::Ordering;

use num_bigint::BigInt;

use crate::{
    error::ErrorMessage, options::Unit, time::EpochNanoseconds, TemporalError, TemporalResult,
};

#[cfg(test)]
mod tests;

/// The native Rust implementation of `Temporal.Instant`.
///
/// An `Instant` is an exact point in time, independent of any calendar or
/// time zone, stored as a count of nanoseconds since the Unix epoch.
///
/// The only ways to obtain an `Instant` are its validating constructors, so
/// every value is within ±100,000,000 days of the epoch.
///
/// ```rust
/// use temporal_instant::Instant;
///
/// let instant = Instant::try_new(-1_500).unwrap();
/// assert_eq!(instant.epoch_nanoseconds(), -1_500);
/// // Coarser units always round toward negative infinity.
/// assert_eq!(instant.epoch_microseconds(), -2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(EpochNanoseconds);

impl From<EpochNanoseconds> for Instant {
    fn from(value: EpochNanoseconds) -> Self {
        Self(value)
    }
}

impl TryFrom<&BigInt> for Instant {
    type Error = TemporalError;
    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        EpochNanoseconds::try_from(value).map(Self)
    }
}

// ==== Private API ====

impl Instant {
    /// Scales an epoch value in `unit`s up to nanoseconds and validates it.
    fn from_epoch_units(value: i128, unit: Unit) -> TemporalResult<Self> {
        let Some(nanos) = value.checked_mul(i128::from(unit.as_nanoseconds().get())) else {
            return Err(TemporalError::range().with_enum(ErrorMessage::EpochValueOutOfRange));
        };
        Self::try_new(nanos)
    }
}

// ==== Public API ====

impl Instant {
    /// Create a new validated `Instant`.
    #[inline]
    pub fn try_new(nanoseconds: i128) -> TemporalResult<Self> {
        Ok(Self::from(EpochNanoseconds::try_from(nanoseconds)?))
    }

    /// Create a new validated `Instant` from an arbitrary-precision nanosecond count.
    #[inline]
    pub fn try_from_bigint(nanoseconds: &BigInt) -> TemporalResult<Self> {
        Self::try_from(nanoseconds)
    }

    /// Creates a new `Instant` from the provided Epoch Second value.
    pub fn from_epoch_seconds(epoch_seconds: i128) -> TemporalResult<Self> {
        Self::from_epoch_units(epoch_seconds, Unit::Second)
    }

    /// Creates a new `Instant` from the provided Epoch Millisecond value.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i128) -> TemporalResult<Self> {
        Self::from_epoch_units(epoch_milliseconds, Unit::Millisecond)
    }

    /// Creates a new `Instant` from the provided Epoch Microsecond value.
    pub fn from_epoch_microseconds(epoch_microseconds: i128) -> TemporalResult<Self> {
        Self::from_epoch_units(epoch_microseconds, Unit::Microsecond)
    }

    /// Creates a new `Instant` from the provided Epoch Nanosecond value.
    #[inline]
    pub fn from_epoch_nanoseconds(epoch_nanoseconds: i128) -> TemporalResult<Self> {
        Self::try_new(epoch_nanoseconds)
    }

    /// Compares two `Instant`s, returning their ordering on the time line.
    ///
    /// Temporal-Proposal equivalent: `Temporal.Instant.compare`.
    #[inline]
    #[must_use]
    pub fn compare(one: &Self, two: &Self) -> Ordering {
        one.cmp(two)
    }

    /// Returns whether this `Instant` and `other` are the same point in time.
    #[inline]
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns the number of whole `unit`s since the epoch, rounded toward
    /// negative infinity.
    #[inline]
    #[must_use]
    pub fn to_whole_units(&self, unit: Unit) -> i128 {
        self.0.div_floor(unit.as_nanoseconds())
    }

    /// Returns the `epochSeconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_seconds(&self) -> i128 {
        self.to_whole_units(Unit::Second)
    }

    /// Returns the `epochMilliseconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i128 {
        self.to_whole_units(Unit::Millisecond)
    }

    /// Returns the `epochMicroseconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_microseconds(&self) -> i128 {
        self.to_whole_units(Unit::Microsecond)
    }

    /// Returns the `epochNanoseconds` value for this `Instant`.
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> i128 {
        self.as_i128()
    }

    /// Returns the epoch nanoseconds of this `Instant` as an `i128`.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        self.0.as_i128()
    }

    /// Returns the underlying validated `EpochNanoseconds`.
    #[must_use]
    pub fn as_epoch_nanoseconds(&self) -> EpochNanoseconds {
        self.0
    }
}
