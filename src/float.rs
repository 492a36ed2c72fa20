//! Floating point keys.
//!
//! `f32` and `f64` are not totally ordered and cannot be used as keys
//! directly. This module lets plain float ranges be given to the range map
//! constructors, wrapping their bounds into [`OrderedFloat`].
//!
//! ```
//! use noncontiguous_range_map::float::F64RangeMap;
//! use ordered_float::OrderedFloat;
//!
//! let map = F64RangeMap::with_bounded_tail([1.5..=2.5, 4.5..=5.5], ['x', 'y']).unwrap();
//! assert_eq!(map.get(OrderedFloat(2.5)), Some(&'x'));
//! assert_eq!(map.get(OrderedFloat(3.0)), None);
//! ```
use crate::{AnyRange, RangeMap};
use ordered_float::OrderedFloat;
use std::ops::{Bound, RangeFrom, RangeInclusive};

pub type F32RangeMap<V> = RangeMap<OrderedFloat<f32>, V>;
pub type F64RangeMap<V> = RangeMap<OrderedFloat<f64>, V>;

macro_rules! impl_float_ranges {
	($ty:ty) => {
		impl From<RangeInclusive<$ty>> for AnyRange<OrderedFloat<$ty>> {
			fn from(range: RangeInclusive<$ty>) -> Self {
				let (start, end) = range.into_inner();
				AnyRange::new(
					Bound::Included(OrderedFloat(start)),
					Bound::Included(OrderedFloat(end)),
				)
			}
		}

		impl From<RangeFrom<$ty>> for AnyRange<OrderedFloat<$ty>> {
			fn from(range: RangeFrom<$ty>) -> Self {
				AnyRange::new(Bound::Included(OrderedFloat(range.start)), Bound::Unbounded)
			}
		}
	};
}

impl_float_ranges!(f32);
impl_float_ranges!(f64);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn bounded() {
		let map = F64RangeMap::with_bounded_tail([1.5..=2.5, 4.5..=5.5], ["x", "y"]).unwrap();
		assert_eq!(map.get(OrderedFloat(1.4999)), None);
		assert_eq!(map.get(OrderedFloat(1.5)), Some(&"x"));
		assert_eq!(map.get(OrderedFloat(2.5)), Some(&"x"));
		assert_eq!(map.get(OrderedFloat(2.5001)), None);
		assert_eq!(map.get(OrderedFloat(5.0)), Some(&"y"));
	}

	#[test]
	fn unbounded() {
		let map = F32RangeMap::singleton(0.0.., "positive").unwrap();
		assert_eq!(map.get(OrderedFloat(f32::INFINITY)), Some(&"positive"));
		assert_eq!(map.get(OrderedFloat(-0.5)), None);
	}

	#[test]
	fn touching() {
		let err = F64RangeMap::with_bounded_tail([0.0..=1.0, 1.0..=2.0], [(), ()]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::OutOfOrder);
	}
}
