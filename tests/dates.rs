use chrono::{Duration, NaiveDate};
use noncontiguous_range_map::{AnyRange, ErrorKind, KeyNotFound, RangeMap, Tail};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn days(n: i64) -> Duration {
	Duration::days(n)
}

const A: (i32, u32, u32) = (2010, 1, 1);
const B: (i32, u32, u32) = (2010, 12, 31);
const C: (i32, u32, u32) = (2011, 6, 1);
const D: (i32, u32, u32) = (2011, 12, 31);
const E: (i32, u32, u32) = (2013, 1, 1);

fn d((y, m, day): (i32, u32, u32)) -> NaiveDate {
	date(y, m, day)
}

#[test]
fn bounded_tail() {
	let map = RangeMap::with_bounded_tail([d(A)..=d(B), d(C)..=d(D)], ["a", "b"]).unwrap();
	assert_eq!(map.tail(), Tail::Bounded);

	assert_eq!(map.get(d(A) - days(1)), None);
	assert_eq!(map.get(d(A)), Some(&"a"));
	assert_eq!(map.get(d(A) + days(100)), Some(&"a"));
	assert_eq!(map.get(d(B)), Some(&"a"));
	assert_eq!(map.get(d(B) + days(1)), None);
	assert_eq!(map.get(d(C) - days(1)), None);
	assert_eq!(map.get(d(C)), Some(&"b"));
	assert_eq!(map.get(d(D)), Some(&"b"));
	assert_eq!(map.get(d(D) + days(1)), None);
	assert_eq!(map.get(d(D) + days(10_000)), None);
}

#[test]
fn unbounded_tail() {
	let map = RangeMap::with_unbounded_tail(
		[
			AnyRange::from(d(A)..=d(B)),
			AnyRange::from(d(C)..=d(D)),
			AnyRange::from(d(E)..),
		],
		["a", "b", "c"],
	)
	.unwrap();
	assert_eq!(map.tail(), Tail::Unbounded);

	assert_eq!(map.get(d(A) - days(1)), None);
	assert_eq!(map.get(d(B)), Some(&"a"));
	assert_eq!(map.get(d(D) + days(1)), None);
	assert_eq!(map.get(d(E) - days(1)), None);
	assert_eq!(map.get(d(E)), Some(&"c"));
	assert_eq!(map.get(d(E) + days(10_000)), Some(&"c"));
	assert_eq!(map.get(NaiveDate::MAX), Some(&"c"));
}

#[test]
fn inferred_tail() {
	let bounded = RangeMap::infer([d(A)..=d(B), d(C)..=d(D)], ["a", "b"]).unwrap();
	assert_eq!(bounded.tail(), Tail::Bounded);
	assert_eq!(bounded.get(d(E)), None);

	let unbounded = RangeMap::infer(
		[AnyRange::from(d(A)..=d(B)), AnyRange::from(d(C)..)],
		["a", "b"],
	)
	.unwrap();
	assert_eq!(unbounded.tail(), Tail::Unbounded);
	assert_eq!(unbounded.get(d(E)), Some(&"b"));
}

#[test]
fn single_point() {
	let map = RangeMap::with_bounded_tail([d(A)..=d(A)], ["v"]).unwrap();
	assert_eq!(map.get(d(A) - days(1)), None);
	assert_eq!(map.get(d(A)), Some(&"v"));
	assert_eq!(map.get(d(A) + days(1)), None);

	let map = RangeMap::singleton(d(A)..=d(A), "v").unwrap();
	assert_eq!(map.get(d(A)), Some(&"v"));
}

#[test]
fn shared_boundary() {
	let err = RangeMap::with_bounded_tail([d(A)..=d(A), d(A)..=d(B)], ["a", "b"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::OutOfOrder);

	let err = RangeMap::with_bounded_tail([d(A)..=d(B), d(B)..=d(C)], ["a", "b"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::OutOfOrder);

	// consecutive days do not share a key
	assert!(RangeMap::with_bounded_tail([d(A)..=d(B), d(B) + days(1)..=d(C)], ["a", "b"]).is_ok());
}

#[test]
fn get_or_err() {
	let map = RangeMap::with_bounded_tail([d(A)..=d(B), d(C)..=d(D)], ["a", "b"]).unwrap();

	let gap = d(B) + days(1);
	let err = map.get_or_err(gap).unwrap_err();
	assert_eq!(err, KeyNotFound { key: gap });
	assert!(err.to_string().contains(&format!("{gap:?}")));

	for key in [d(A), d(B), d(C), d(D) - days(3)] {
		assert_eq!(map.get_or_err(key).ok(), map.get(key));
	}
}

#[test]
fn idempotent() {
	let map = RangeMap::with_bounded_tail([d(A)..=d(B), d(C)..=d(D)], ["a", "b"]).unwrap();
	for offset in -5..800 {
		let key = d(A) + days(offset);
		let first = map.get(key);
		assert_eq!(map.get(key), first);
		assert_eq!(map.get(key), first);
	}
}
