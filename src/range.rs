use std::ops::{
	Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

/// Unrestricted range description.
///
/// Each bound is independently absent (`Unbounded`), inclusive or exclusive.
/// This is the form in which intervals are handed to the range map
/// constructors, before their shape is checked. Every standard range type
/// converts into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyRange<T> {
	pub start: Bound<T>,
	pub end: Bound<T>,
}

/// Shape of an [`AnyRange`], i.e. which bounds are present and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Both bounds present and inclusive.
	Closed,

	/// Inclusive lower bound, no upper bound.
	LowerOnly,

	/// Anything else.
	Other,
}

impl<T> AnyRange<T> {
	pub fn new(start: Bound<T>, end: Bound<T>) -> AnyRange<T> {
		AnyRange { start, end }
	}

	pub fn shape(&self) -> Shape {
		match (&self.start, &self.end) {
			(Bound::Included(_), Bound::Included(_)) => Shape::Closed,
			(Bound::Included(_), Bound::Unbounded) => Shape::LowerOnly,
			_ => Shape::Other,
		}
	}

	pub fn has_upper_bound(&self) -> bool {
		!matches!(self.end, Bound::Unbounded)
	}

	/// Checks that the start bound value is not greater than the end bound
	/// value. Ranges with a missing bound are always well ordered.
	pub fn is_well_ordered(&self) -> bool
	where
		T: PartialOrd,
	{
		match (bound_value(&self.start), bound_value(&self.end)) {
			(Some(a), Some(b)) => a <= b,
			_ => true,
		}
	}
}

fn bound_value<T>(bound: &Bound<T>) -> Option<&T> {
	match bound {
		Bound::Included(t) | Bound::Excluded(t) => Some(t),
		Bound::Unbounded => None,
	}
}

impl<T> RangeBounds<T> for AnyRange<T> {
	fn start_bound(&self) -> Bound<&T> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&T> {
		self.end.as_ref()
	}
}

impl<T> From<RangeInclusive<T>> for AnyRange<T> {
	fn from(range: RangeInclusive<T>) -> Self {
		let (start, end) = range.into_inner();
		AnyRange::new(Bound::Included(start), Bound::Included(end))
	}
}

impl<T> From<RangeFrom<T>> for AnyRange<T> {
	fn from(range: RangeFrom<T>) -> Self {
		AnyRange::new(Bound::Included(range.start), Bound::Unbounded)
	}
}

impl<T> From<Range<T>> for AnyRange<T> {
	fn from(range: Range<T>) -> Self {
		AnyRange::new(Bound::Included(range.start), Bound::Excluded(range.end))
	}
}

impl<T> From<RangeTo<T>> for AnyRange<T> {
	fn from(range: RangeTo<T>) -> Self {
		AnyRange::new(Bound::Unbounded, Bound::Excluded(range.end))
	}
}

impl<T> From<RangeToInclusive<T>> for AnyRange<T> {
	fn from(range: RangeToInclusive<T>) -> Self {
		AnyRange::new(Bound::Unbounded, Bound::Included(range.end))
	}
}

impl<T> From<RangeFull> for AnyRange<T> {
	fn from(_: RangeFull) -> Self {
		AnyRange::new(Bound::Unbounded, Bound::Unbounded)
	}
}

impl<T> From<(Bound<T>, Bound<T>)> for AnyRange<T> {
	fn from((start, end): (Bound<T>, Bound<T>)) -> Self {
		AnyRange::new(start, end)
	}
}
