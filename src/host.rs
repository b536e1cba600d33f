//! Trait definitions and types for exchanging values with the host environment.
//!
//! An engine embedding `temporal_instant` routes property reads and
//! constructor calls through this module so that brand checks run against the
//! *receiver* of an access, never against the object the property was
//! looked up on.
//!
//! NOTE: This is a power user API.

use alloc::string::String;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::Num;

use crate::{error::ErrorMessage, time::EpochNanoseconds, Instant, TemporalError, TemporalResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds>;
}

// Implement an empty clock that is frozen at the epoch.

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> TemporalResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::UNIX_EPOCH)
    }
}

/// A host value that may carry an `Instant` internal slot.
///
/// Hosts implement this for their own value representation. Only values that
/// genuinely hold an `Instant` may return `Some`; structural look-alikes must
/// return `None`.
pub trait InstantReceiver {
    fn instant_slot(&self) -> Option<&Instant>;
}

impl InstantReceiver for Instant {
    fn instant_slot(&self) -> Option<&Instant> {
        Some(self)
    }
}

impl<T: InstantReceiver + ?Sized> InstantReceiver for &T {
    fn instant_slot(&self) -> Option<&Instant> {
        (**self).instant_slot()
    }
}

impl<T: InstantReceiver> InstantReceiver for Option<T> {
    fn instant_slot(&self) -> Option<&Instant> {
        self.as_ref().and_then(|value| value.instant_slot())
    }
}

/// Returns whether `value` is a genuine `Instant`.
#[inline]
#[must_use]
pub fn is_instant(value: &(impl InstantReceiver + ?Sized)) -> bool {
    value.instant_slot().is_some()
}

/// Brand checks `receiver`, returning its `Instant` or a `TypeError`.
#[inline]
pub fn require_instant<R: InstantReceiver + ?Sized>(receiver: &R) -> TemporalResult<&Instant> {
    match receiver.instant_slot() {
        Some(instant) => Ok(instant),
        None => {
            #[cfg(feature = "log")]
            log::debug!("brand check failed: receiver is not a Temporal.Instant");
            Err(TemporalError::r#type().with_enum(ErrorMessage::NotAnInstant))
        }
    }
}

/// A minimal tagged representation of the host's values.
///
/// Hosts without their own value type can use this directly. Only the
/// `Instant` variant passes a brand check.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(BigInt),
    String(String),
    /// An ordinary object without an `Instant` internal slot.
    Object,
    Instant(Instant),
}

impl InstantReceiver for HostValue {
    fn instant_slot(&self) -> Option<&Instant> {
        match self {
            Self::Instant(instant) => Some(instant),
            _ => None,
        }
    }
}

impl From<Instant> for HostValue {
    fn from(value: Instant) -> Self {
        Self::Instant(value)
    }
}

impl From<BigInt> for HostValue {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl HostValue {
    /// Converts this value to a `BigInt` the way the `ToBigInt` abstract
    /// operation does for primitive values.
    pub fn to_bigint(&self) -> TemporalResult<BigInt> {
        match self {
            Self::BigInt(value) => Ok(value.clone()),
            Self::Boolean(value) => Ok(BigInt::from(u8::from(*value))),
            Self::String(value) => parse_bigint_literal(value),
            Self::Undefined | Self::Null | Self::Number(_) | Self::Object | Self::Instant(_) => {
                Err(TemporalError::r#type().with_enum(ErrorMessage::NotConvertibleToBigInt))
            }
        }
    }
}

/// Parses a `StringIntegerLiteral`, where surrounding whitespace is ignored
/// and an empty string is zero.
///
/// Decimal literals may carry a sign. `0x`, `0o` and `0b` literals may not.
/// Numeric separators are never allowed.
fn parse_bigint_literal(s: &str) -> TemporalResult<BigInt> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(BigInt::default());
    }

    let (digits, radix) = match trimmed.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&trimmed[2..], 16),
        [b'0', b'o' | b'O', ..] => (&trimmed[2..], 8),
        [b'0', b'b' | b'B', ..] => (&trimmed[2..], 2),
        [b'+' | b'-', ..] => (&trimmed[1..], 10),
        _ => (trimmed, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(TemporalError::syntax().with_enum(ErrorMessage::InvalidBigIntLiteral));
    }

    let value = BigInt::from_str_radix(digits, radix)
        .map_err(|_| TemporalError::syntax().with_enum(ErrorMessage::InvalidBigIntLiteral))?;
    Ok(if trimmed.starts_with('-') { -value } else { value })
}

impl Instant {
    /// Creates an `Instant` from a host value the way `new Temporal.Instant(epochNanoseconds)`
    /// does: the argument is converted with `ToBigInt` and then range checked.
    pub fn try_from_host_value(value: &HostValue) -> TemporalResult<Self> {
        let nanoseconds = value.to_bigint()?;
        Self::try_from_bigint(&nanoseconds)
    }
}

/// The read-only accessor properties on `Temporal.Instant.prototype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstantProperty {
    EpochSeconds,
    EpochMilliseconds,
    EpochMicroseconds,
    EpochNanoseconds,
}

impl InstantProperty {
    /// Returns the property key as seen by script.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::EpochSeconds => "epochSeconds",
            Self::EpochMilliseconds => "epochMilliseconds",
            Self::EpochMicroseconds => "epochMicroseconds",
            Self::EpochNanoseconds => "epochNanoseconds",
        }
    }

    /// Runs the accessor's getter with `receiver` as the `this` value.
    ///
    /// The receiver is brand checked, so a meta-level get with an explicit
    /// receiver fails the same way as a direct property access.
    pub fn get<R: InstantReceiver + ?Sized>(&self, receiver: &R) -> TemporalResult<i128> {
        let instant = require_instant(receiver)?;
        Ok(match self {
            Self::EpochSeconds => instant.epoch_seconds(),
            Self::EpochMilliseconds => instant.epoch_milliseconds(),
            Self::EpochMicroseconds => instant.epoch_microseconds(),
            Self::EpochNanoseconds => instant.epoch_nanoseconds(),
        })
    }
}

impl FromStr for InstantProperty {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epochSeconds" => Ok(Self::EpochSeconds),
            "epochMilliseconds" => Ok(Self::EpochMilliseconds),
            "epochMicroseconds" => Ok(Self::EpochMicroseconds),
            "epochNanoseconds" => Ok(Self::EpochNanoseconds),
            _ => Err(TemporalError::general("Unknown Temporal.Instant property.")),
        }
    }
}

/// Returns the `epochMicroseconds` of `receiver`, brand checking it first.
#[inline]
pub fn get_epoch_microseconds<R: InstantReceiver + ?Sized>(receiver: &R) -> TemporalResult<i128> {
    InstantProperty::EpochMicroseconds.get(receiver)
}
