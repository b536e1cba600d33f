use core::cmp::Ordering;

use num_bigint::BigInt;

use super::Instant;
use crate::{error::ErrorKind, options::Unit, NS_MAX_INSTANT, NS_MIN_INSTANT};

#[test]
fn max_and_minimum_instant_bounds() {
    let max = NS_MAX_INSTANT;
    let min = NS_MIN_INSTANT;
    let max_instant = Instant::try_new(max).unwrap();
    let min_instant = Instant::try_new(min).unwrap();

    assert_eq!(max_instant.epoch_nanoseconds(), max);
    assert_eq!(min_instant.epoch_nanoseconds(), min);

    assert_eq!(max_instant.epoch_microseconds(), 8_640_000_000_000_000_000);
    assert_eq!(min_instant.epoch_microseconds(), -8_640_000_000_000_000_000);
    assert_eq!(max_instant.epoch_milliseconds(), 8_640_000_000_000_000);
    assert_eq!(min_instant.epoch_milliseconds(), -8_640_000_000_000_000);
    assert_eq!(max_instant.epoch_seconds(), 8_640_000_000_000);
    assert_eq!(min_instant.epoch_seconds(), -8_640_000_000_000);

    let max_plus_one = NS_MAX_INSTANT + 1;
    let min_minus_one = NS_MIN_INSTANT - 1;

    let err = Instant::try_new(max_plus_one).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    let err = Instant::try_new(min_minus_one).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn basic_epoch_microseconds() {
    let micros = |nanos: i128| Instant::try_new(nanos).unwrap().epoch_microseconds();

    assert_eq!(micros(0), 0);
    assert_eq!(micros(1), 0);
    assert_eq!(micros(999), 0);
    assert_eq!(micros(1_000), 1);
    assert_eq!(micros(1_500), 1);
    assert_eq!(micros(1_999), 1);
    assert_eq!(micros(2_000), 2);

    assert_eq!(micros(-1_000), -1);
    assert_eq!(micros(-1_500), -2);
    assert_eq!(micros(-1_999), -2);
    assert_eq!(micros(-2_000), -2);
}

#[test]
fn sub_microsecond_negative_values() {
    // There is no signed zero for integers; `-0` is plain zero.
    let micros = |nanos: i128| Instant::try_new(nanos).unwrap().epoch_microseconds();
    assert_eq!(micros(-0), 0);
    assert_eq!(micros(-1), -1);
    assert_eq!(micros(-999), -1);
}

#[test]
fn coarser_units_floor() {
    let instant = Instant::try_new(-1).unwrap();
    assert_eq!(instant.epoch_nanoseconds(), -1);
    assert_eq!(instant.epoch_microseconds(), -1);
    assert_eq!(instant.epoch_milliseconds(), -1);
    assert_eq!(instant.epoch_seconds(), -1);
    assert_eq!(instant.to_whole_units(Unit::Minute), -1);
    assert_eq!(instant.to_whole_units(Unit::Day), -1);

    // 1976-11-18T15:23:30.123456789Z
    let instant = Instant::try_new(217_178_610_123_456_789).unwrap();
    assert_eq!(instant.epoch_microseconds(), 217_178_610_123_456);
    assert_eq!(instant.epoch_milliseconds(), 217_178_610_123);
    assert_eq!(instant.epoch_seconds(), 217_178_610);
    assert_eq!(instant.to_whole_units(Unit::Hour), 60_327);
    assert_eq!(instant.to_whole_units(Unit::Day), 2_513);
    assert_eq!(
        instant.to_whole_units(Unit::Nanosecond),
        instant.epoch_nanoseconds()
    );

    let instant = Instant::try_new(-217_178_610_123_456_789).unwrap();
    assert_eq!(instant.epoch_microseconds(), -217_178_610_123_457);
    assert_eq!(instant.epoch_milliseconds(), -217_178_610_124);
    assert_eq!(instant.epoch_seconds(), -217_178_611);
}

#[test]
fn conversions_are_repeatable() {
    let instant = Instant::try_new(-1_500).unwrap();
    let first = instant.epoch_microseconds();
    let second = instant.epoch_microseconds();
    assert_eq!(first, second);
    assert_eq!(instant.epoch_nanoseconds(), -1_500);
}

#[test]
fn bigint_construction() {
    let max = BigInt::from(NS_MAX_INSTANT);
    let instant = Instant::try_from_bigint(&max).unwrap();
    assert_eq!(instant.epoch_microseconds(), 8_640_000_000_000_000_000);

    let too_large = max + BigInt::from(1u8);
    let err = Instant::try_from_bigint(&too_large).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let too_small = BigInt::from(NS_MIN_INSTANT) - BigInt::from(1u8);
    let err = Instant::try_from(&too_small).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let far_away = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
    let err = Instant::try_from_bigint(&far_away).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn epoch_unit_constructors() {
    let instant = Instant::from_epoch_seconds(-2).unwrap();
    assert_eq!(instant.epoch_nanoseconds(), -2_000_000_000);

    let instant = Instant::from_epoch_milliseconds(1_572_345_998_271).unwrap();
    assert_eq!(instant.epoch_nanoseconds(), 1_572_345_998_271_000_000);

    let instant = Instant::from_epoch_microseconds(8_640_000_000_000_000_000).unwrap();
    assert_eq!(instant.epoch_nanoseconds(), NS_MAX_INSTANT);

    let instant = Instant::from_epoch_nanoseconds(-5).unwrap();
    assert_eq!(instant.epoch_nanoseconds(), -5);

    let err = Instant::from_epoch_seconds(8_640_000_000_001).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = Instant::from_epoch_milliseconds(i128::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = Instant::from_epoch_microseconds(i128::MIN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn compare_and_equals() {
    let earlier = Instant::try_new(217_178_610_123_456_789).unwrap();
    let later = Instant::try_new(1_572_345_998_271_986_289).unwrap();

    assert_eq!(Instant::compare(&earlier, &later), Ordering::Less);
    assert_eq!(Instant::compare(&later, &earlier), Ordering::Greater);
    assert_eq!(Instant::compare(&later, &later), Ordering::Equal);

    assert!(earlier.equals(&earlier));
    assert!(!earlier.equals(&later));
    assert_eq!(
        earlier.as_epoch_nanoseconds().as_i128(),
        earlier.epoch_nanoseconds()
    );
    assert_eq!(later.as_i128(), 1_572_345_998_271_986_289);
}
