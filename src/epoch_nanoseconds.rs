use core::num::NonZeroU64;

use num_bigint::BigInt;
use num_traits::{Euclid, ToPrimitive};

use crate::{error::ErrorMessage, TemporalError, TemporalResult};

/// A count of nanoseconds since the Unix epoch that is guaranteed to be
/// within the representable range of an `Instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochNanoseconds(i128);

impl TryFrom<i128> for EpochNanoseconds {
    type Error = TemporalError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        let nanos = Self(value);
        nanos.check_validity()?;
        Ok(nanos)
    }
}

impl TryFrom<&BigInt> for EpochNanoseconds {
    type Error = TemporalError;
    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        // Anything wider than an `i128` is far outside the valid range.
        let Some(value) = value.to_i128() else {
            #[cfg(feature = "log")]
            log::debug!("rejected epoch nanoseconds {value}: wider than i128");
            return Err(TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange));
        };
        Self::try_from(value)
    }
}

impl From<EpochNanoseconds> for BigInt {
    fn from(value: EpochNanoseconds) -> Self {
        BigInt::from(value.0)
    }
}

impl EpochNanoseconds {
    /// The Unix epoch.
    pub const UNIX_EPOCH: Self = Self(0);
    /// The latest representable instant, 100,000,000 days after the epoch.
    pub const MAX: Self = Self(crate::NS_MAX_INSTANT);
    /// The earliest representable instant, 100,000,000 days before the epoch.
    pub const MIN: Self = Self(crate::NS_MIN_INSTANT);

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    pub fn check_validity(&self) -> TemporalResult<()> {
        if !is_valid_epoch_nanos(&self.0) {
            #[cfg(feature = "log")]
            log::debug!("rejected epoch nanoseconds {}: out of range", self.0);
            return Err(TemporalError::range().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(())
    }

    /// Returns the number of whole `unit`s elapsed since the epoch, rounding
    /// toward negative infinity.
    ///
    /// `-1500` nanoseconds is `-2` whole microseconds, not `-1`.
    ///
    /// The divisor is positive, so Euclidean division and floor division
    /// agree for every dividend.
    #[inline]
    #[must_use]
    pub fn div_floor(&self, unit: NonZeroU64) -> i128 {
        Euclid::div_euclid(&self.0, &i128::from(unit.get()))
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use num_bigint::BigInt;

    use super::EpochNanoseconds;
    use crate::{error::ErrorKind, NS_MAX_INSTANT, NS_MIN_INSTANT};

    const MICRO: NonZeroU64 = match NonZeroU64::new(1_000) {
        Some(unit) => unit,
        None => unreachable!(),
    };

    #[test]
    fn validity_bounds() {
        assert!(EpochNanoseconds::try_from(NS_MAX_INSTANT).is_ok());
        assert!(EpochNanoseconds::try_from(NS_MIN_INSTANT).is_ok());

        let err = EpochNanoseconds::try_from(NS_MAX_INSTANT + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = EpochNanoseconds::try_from(NS_MIN_INSTANT - 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        assert_eq!(EpochNanoseconds::MAX.as_i128(), 8_640_000_000_000_000_000_000);
        assert_eq!(EpochNanoseconds::MIN.as_i128(), -8_640_000_000_000_000_000_000);
    }

    #[test]
    fn bigint_wider_than_i128() {
        let huge = BigInt::from(i128::MAX) * BigInt::from(4u8);
        let err = EpochNanoseconds::try_from(&huge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = EpochNanoseconds::try_from(&-huge).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let exact = BigInt::from(NS_MIN_INSTANT);
        let nanos = EpochNanoseconds::try_from(&exact).unwrap();
        assert_eq!(BigInt::from(nanos), exact);
    }

    #[test]
    fn floor_division() {
        let div = |n: i128| EpochNanoseconds::try_from(n).unwrap().div_floor(MICRO);

        assert_eq!(div(0), 0);
        assert_eq!(div(999), 0);
        assert_eq!(div(1_000), 1);
        assert_eq!(div(-1), -1);
        assert_eq!(div(-999), -1);
        assert_eq!(div(-1_000), -1);
        assert_eq!(div(-1_001), -2);
    }
}
