use crate::{AnyRange, BuildError};
use std::{
	fmt,
	ops::{Bound, RangeBounds},
};

/// Interval stored in a [`RangeMap`](crate::RangeMap).
///
/// Only two shapes can be represented, and all bounds are inclusive:
/// `[lower, upper]` and `[lower, +inf)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval<K> {
	/// `[lower, upper]`, with `lower <= upper`.
	Closed { lower: K, upper: K },

	/// `[lower, +inf)`.
	LowerOnly { lower: K },
}

impl<K> Interval<K> {
	/// Creates the closed interval `[lower, upper]`.
	///
	/// Fails if `lower > upper`.
	pub fn closed(lower: K, upper: K) -> Result<Self, BuildError>
	where
		K: Ord,
	{
		if lower > upper {
			Err(BuildError::InvalidIntervalShape { index: None })
		} else {
			Ok(Self::Closed { lower, upper })
		}
	}

	/// Creates the interval `[lower, +inf)`.
	pub fn lower_only(lower: K) -> Self {
		Self::LowerOnly { lower }
	}

	/// Creates a single-point interval `[key, key]`.
	pub fn point(key: K) -> Self
	where
		K: Clone,
	{
		Self::Closed {
			upper: key.clone(),
			lower: key,
		}
	}

	pub fn lower(&self) -> &K {
		match self {
			Self::Closed { lower, .. } | Self::LowerOnly { lower } => lower,
		}
	}

	pub fn upper(&self) -> Option<&K> {
		match self {
			Self::Closed { upper, .. } => Some(upper),
			Self::LowerOnly { .. } => None,
		}
	}

	pub fn is_closed(&self) -> bool {
		matches!(self, Self::Closed { .. })
	}

	pub fn is_lower_only(&self) -> bool {
		matches!(self, Self::LowerOnly { .. })
	}

	/// Returns the start and end bounds, as for [`RangeBounds`].
	pub fn bounds(&self) -> (Bound<&K>, Bound<&K>) {
		match self {
			Self::Closed { lower, upper } => (Bound::Included(lower), Bound::Included(upper)),
			Self::LowerOnly { lower } => (Bound::Included(lower), Bound::Unbounded),
		}
	}

	pub fn satisfies_lower(&self, key: &K) -> bool
	where
		K: Ord,
	{
		self.lower() <= key
	}

	pub fn satisfies_upper(&self, key: &K) -> bool
	where
		K: Ord,
	{
		match self {
			Self::Closed { upper, .. } => key <= upper,
			Self::LowerOnly { .. } => true,
		}
	}

	pub fn contains(&self, key: &K) -> bool
	where
		K: Ord,
	{
		self.satisfies_lower(key) && self.satisfies_upper(key)
	}

	/// Checks that every key of `self` is strictly below every key of
	/// `next`.
	pub fn is_strictly_before(&self, next: &Self) -> bool
	where
		K: Ord,
	{
		match self.upper() {
			Some(upper) => upper < next.lower(),
			None => false,
		}
	}

	pub fn into_any_range(self) -> AnyRange<K> {
		match self {
			Self::Closed { lower, upper } => {
				AnyRange::new(Bound::Included(lower), Bound::Included(upper))
			}
			Self::LowerOnly { lower } => AnyRange::new(Bound::Included(lower), Bound::Unbounded),
		}
	}
}

impl<K> RangeBounds<K> for Interval<K> {
	fn start_bound(&self) -> Bound<&K> {
		self.bounds().0
	}

	fn end_bound(&self) -> Bound<&K> {
		self.bounds().1
	}
}

impl<K: Ord> TryFrom<AnyRange<K>> for Interval<K> {
	type Error = BuildError;

	fn try_from(range: AnyRange<K>) -> Result<Self, BuildError> {
		match (range.start, range.end) {
			(Bound::Included(lower), Bound::Included(upper)) => Self::closed(lower, upper),
			(Bound::Included(lower), Bound::Unbounded) => Ok(Self::lower_only(lower)),
			_ => Err(BuildError::InvalidIntervalShape { index: None }),
		}
	}
}

impl<K> From<Interval<K>> for AnyRange<K> {
	fn from(interval: Interval<K>) -> Self {
		interval.into_any_range()
	}
}

impl<K: fmt::Display> fmt::Display for Interval<K> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Closed { lower, upper } => write!(f, "[{lower}, {upper}]"),
			Self::LowerOnly { lower } => write!(f, "[{lower}, +inf)"),
		}
	}
}
