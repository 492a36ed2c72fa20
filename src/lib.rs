//! A *non-contiguous range map* associates values to disjoint, ascending
//! intervals of a totally ordered key type, and answers point queries:
//! given a key, which value (if any) is bound to the interval containing it?
//!
//! Such maps are typically used to describe schedules keyed by date, or
//! bands of numeric values. Unlike a regular range map, there may be holes
//! between intervals, and the map cannot be modified once built.
//!
//! ## Usage
//!
//! Intervals are given as standard Rust ranges. Every interval must be
//! closed (`a..=b`), except the last one which may be open-ended (`a..`)
//! depending on the constructor used:
//!
//! - [`RangeMap::with_bounded_tail`] requires the last interval to be closed;
//! - [`RangeMap::with_unbounded_tail`] requires it to be open-ended;
//! - [`RangeMap::infer`] picks one or the other by looking at the last
//!   interval;
//! - [`RangeMap::singleton`] builds a map with a single interval.
//!
//! ```
//! use noncontiguous_range_map::{AnyRange, RangeMap};
//!
//! let map = RangeMap::infer(
//! 	[AnyRange::from(00..=05), AnyRange::from(10..=15), AnyRange::from(20..)],
//! 	["a", "b", "c"],
//! )
//! .unwrap();
//!
//! assert_eq!(map.get(-1), None);
//! assert_eq!(map.get(05), Some(&"a"));
//! assert_eq!(map.get(07), None); // in the gap between the first two intervals
//! assert_eq!(map.get(10), Some(&"b"));
//! assert_eq!(map.get(1_000_000), Some(&"c"));
//! ```
//!
//! Intervals must be strictly ascending: two intervals cannot share a key.
//!
//! ```
//! use noncontiguous_range_map::{BuildError, RangeMap};
//!
//! assert_eq!(
//! 	RangeMap::<i32, char>::with_bounded_tail([0..=5, 5..=9], ['a', 'b']),
//! 	Err(BuildError::OutOfOrder { index: 1 })
//! );
//! ```
//!
//! ### Floats
//!
//! Floating point numbers are not totally ordered and must be wrapped, for
//! instance in [`ordered_float::OrderedFloat`]. With the `ordered-float`
//! feature enabled, the [`float`] module allows plain `f32`/`f64` ranges.
mod error;
mod interval;
mod map;
mod range;
mod validate;

#[cfg(feature = "ordered-float")]
pub mod float;

pub use error::*;
pub use interval::*;
pub use map::{IntoIter, Iter, RangeMap};
pub use range::*;
pub use validate::Tail;
