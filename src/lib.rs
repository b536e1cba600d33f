//! The `temporal_instant` crate is an implementation of ECMAScript's
//! `Temporal.Instant` exact time value in Rust.
//!
//! ```rust
//! use temporal_instant::{Instant, options::Unit};
//!
//! let instant = Instant::try_new(1_572_345_998_271_986_289).unwrap();
//! assert_eq!(instant.epoch_microseconds(), 1_572_345_998_271_986);
//! assert_eq!(instant.to_whole_units(Unit::Second), 1_572_345_998);
//!
//! // Conversions to coarser units round toward negative infinity.
//! let before_epoch = Instant::try_new(-1_500).unwrap();
//! assert_eq!(before_epoch.epoch_microseconds(), -2);
//!
//! // Instants are limited to 100,000,000 days on either side of the epoch.
//! assert!(Instant::try_new(8_640_000_000_000_000_000_001).is_err());
//! ```
//!
//! Engines embedding this crate route `Temporal.Instant.prototype` accessors
//! through [`host`], which brand checks the receiver of each access.
//!
//! [`Temporal`][proposal] is the Stage 3 proposal for ECMAScript that
//! provides new JS objects and functions for working with dates and
//! times.
//!
//! [proposal]: https://github.com/tc39/proposal-temporal
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used in tests.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod options;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
mod epoch_nanoseconds;

#[doc(inline)]
pub use error::TemporalError;

/// The `Temporal` result type
pub type TemporalResult<T> = Result<T, TemporalError>;

pub mod time {
    //! Exact time primitives.
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

#[cfg(feature = "sys")]
pub use crate::sys::SystemClock;

pub use crate::builtins::{Instant, Now};

// Relevant numeric constants
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = MS_PER_DAY as u64 * 1_000_000;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
