use crate::{
	validate::{validate, TailRule, Validated},
	AnyRange, BuildError, Interval, KeyNotFound, Shape, Tail,
};
use std::{
	fmt::{self, Debug},
	iter::FusedIterator,
	slice, vec,
};

/// Immutable map from disjoint, ascending intervals to values.
///
/// Every interval is closed (`[lower, upper]`), except possibly the last one
/// which may extend to infinity (`[lower, +inf)`) when the map was built
/// with an unbounded [`Tail`]. Intervals never touch, but gaps between them
/// are allowed: keys falling in a gap have no value.
///
/// The content is checked once when the map is built and can never be
/// modified afterward.
///
/// ```
/// use noncontiguous_range_map::RangeMap;
///
/// let map = RangeMap::with_bounded_tail([0..=9, 20..=29], ["low", "high"]).unwrap();
/// assert_eq!(map.get(5), Some(&"low"));
/// assert_eq!(map.get(15), None);
/// assert_eq!(map.get(29), Some(&"high"));
/// assert_eq!(map.get(30), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RangeMap<K, V> {
	entries: Vec<(Interval<K>, V)>,
	tail: Tail,
}

impl<K: Ord, V> RangeMap<K, V> {
	fn build<I, R, W>(intervals: I, values: W, rule: TailRule) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = R>,
		R: Into<AnyRange<K>>,
		W: IntoIterator<Item = V>,
	{
		let intervals: Vec<AnyRange<K>> = intervals.into_iter().map(Into::into).collect();
		let values: Vec<V> = values.into_iter().collect();
		let Validated { entries, tail } = validate(intervals, values, rule)?;
		log::trace!("built range map with {} intervals ({tail:?} tail)", entries.len());
		Ok(RangeMap { entries, tail })
	}

	/// Builds a map where every interval, including the last one, is closed.
	///
	/// ```
	/// use noncontiguous_range_map::{RangeMap, ErrorKind};
	///
	/// assert!(RangeMap::<i32, char>::with_bounded_tail([0..=1, 4..=5], ['a', 'b']).is_ok());
	///
	/// let err = RangeMap::<i32, char>::with_bounded_tail([0..=1, 1..=5], ['a', 'b']).unwrap_err();
	/// assert_eq!(err.kind(), ErrorKind::OutOfOrder);
	/// ```
	pub fn with_bounded_tail<I, R, W>(intervals: I, values: W) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = R>,
		R: Into<AnyRange<K>>,
		W: IntoIterator<Item = V>,
	{
		Self::build(intervals, values, TailRule::Fixed(Tail::Bounded))
	}

	/// Builds a map where every interval is closed except the last one,
	/// which must have a lower bound and no upper bound.
	///
	/// ```
	/// use noncontiguous_range_map::{AnyRange, RangeMap};
	///
	/// let intervals = [AnyRange::from(0..=1), AnyRange::from(4..)];
	/// let map = RangeMap::with_unbounded_tail(intervals, ['a', 'b']).unwrap();
	/// assert_eq!(map.get(i32::MAX), Some(&'b'));
	/// ```
	pub fn with_unbounded_tail<I, R, W>(intervals: I, values: W) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = R>,
		R: Into<AnyRange<K>>,
		W: IntoIterator<Item = V>,
	{
		Self::build(intervals, values, TailRule::Fixed(Tail::Unbounded))
	}

	/// Builds a map with a bounded tail if the last given interval has an
	/// upper bound, and with an unbounded tail otherwise.
	///
	/// ```
	/// use noncontiguous_range_map::{AnyRange, RangeMap, Tail};
	///
	/// let bounded = RangeMap::infer([0..=1, 4..=5], ['a', 'b']).unwrap();
	/// assert_eq!(bounded.tail(), Tail::Bounded);
	/// assert_eq!(bounded.get(6), None);
	///
	/// let unbounded = RangeMap::infer([AnyRange::from(0..=1), AnyRange::from(4..)], ['a', 'b']).unwrap();
	/// assert_eq!(unbounded.tail(), Tail::Unbounded);
	/// assert_eq!(unbounded.get(6), Some(&'b'));
	/// ```
	pub fn infer<I, R, W>(intervals: I, values: W) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = R>,
		R: Into<AnyRange<K>>,
		W: IntoIterator<Item = V>,
	{
		Self::build(intervals, values, TailRule::Infer)
	}

	/// Builds a map with a single interval.
	///
	/// The interval must either be closed or have only a lower bound.
	pub fn singleton<R: Into<AnyRange<K>>>(interval: R, value: V) -> Result<Self, BuildError> {
		let interval = interval.into();
		match interval.shape() {
			Shape::LowerOnly => Self::with_unbounded_tail([interval], [value]),
			_ => Self::with_bounded_tail([interval], [value]),
		}
	}

	/// Returns the index of the interval containing `key`, if any.
	pub fn index_of(&self, key: &K) -> Option<usize> {
		let i = binary_search(&self.entries, key)?;
		if self.entries[i].0.satisfies_upper(key) {
			Some(i)
		} else {
			None
		}
	}

	/// Returns the value bound to the interval containing `key`, if any.
	pub fn get(&self, key: K) -> Option<&V> {
		self.get_key_value(&key).map(|(_, value)| value)
	}

	/// Returns the value bound to the interval containing `key`, or an error
	/// holding `key` if it falls outside every interval.
	pub fn get_or_err(&self, key: K) -> Result<&V, KeyNotFound<K>>
	where
		K: Debug,
	{
		match self.get_key_value(&key) {
			Some((_, value)) => Ok(value),
			None => Err(KeyNotFound { key }),
		}
	}

	/// Returns the interval containing `key` with its value, if any.
	pub fn get_key_value(&self, key: &K) -> Option<(&Interval<K>, &V)> {
		let result = self.index_of(key).map(|i| {
			let (interval, value) = &self.entries[i];
			(interval, value)
		});
		log::trace!(
			"range map lookup {}",
			if result.is_some() { "hit" } else { "miss" }
		);
		result
	}

	pub fn contains_key(&self, key: &K) -> bool {
		self.index_of(key).is_some()
	}
}

impl<K, V> RangeMap<K, V> {
	/// Number of intervals in the map. Never zero.
	pub fn range_count(&self) -> usize {
		self.entries.len()
	}

	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn tail(&self) -> Tail {
		self.tail
	}

	pub fn is_bounded(&self) -> bool {
		self.tail == Tail::Bounded
	}

	pub fn first(&self) -> (&Interval<K>, &V) {
		let (interval, value) = &self.entries[0];
		(interval, value)
	}

	pub fn last(&self) -> (&Interval<K>, &V) {
		let (interval, value) = &self.entries[self.entries.len() - 1];
		(interval, value)
	}

	pub fn iter(&self) -> Iter<K, V> {
		Iter {
			inner: self.entries.iter(),
		}
	}

	pub fn intervals(&self) -> impl DoubleEndedIterator<Item = &Interval<K>> + ExactSizeIterator {
		self.entries.iter().map(|(interval, _)| interval)
	}

	pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
		self.entries.iter().map(|(_, value)| value)
	}
}

/// Search for the index of the greatest interval whose lower bound is less
/// than or equal to `key`.
fn binary_search<K: Ord, V>(entries: &[(Interval<K>, V)], key: &K) -> Option<usize> {
	if entries.is_empty() || !entries[0].0.satisfies_lower(key) {
		None
	} else {
		let mut i = 0;
		let mut j = entries.len() - 1;

		if entries[j].0.satisfies_lower(key) {
			return Some(j);
		}

		// invariants:
		// entries[i].lower <= key
		// entries[j].lower > key
		// j > i

		while j - i > 1 {
			let k = (i + j) / 2;

			if entries[k].0.satisfies_lower(key) {
				i = k;
			} else {
				j = k;
			}
		}

		Some(i)
	}
}

impl<K: Debug, V: Debug> Debug for RangeMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

pub struct Iter<'a, K, V> {
	inner: slice::Iter<'a, (Interval<K>, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
	type Item = (&'a Interval<K>, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(interval, value)| (interval, value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back().map(|(interval, value)| (interval, value))
	}
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> IntoIterator for &'a RangeMap<K, V> {
	type Item = (&'a Interval<K>, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

pub struct IntoIter<K, V> {
	inner: vec::IntoIter<(Interval<K>, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
	type Item = (Interval<K>, V);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for RangeMap<K, V> {
	type Item = (Interval<K>, V);
	type IntoIter = IntoIter<K, V>;

	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.entries.into_iter(),
		}
	}
}

impl<K, V> cc_traits::Collection for RangeMap<K, V> {
	type Item = V;
}

impl<K, V> cc_traits::CollectionRef for RangeMap<K, V> {
	type ItemRef<'a> = &'a V where Self: 'a;

	fn upcast_item_ref<'short, 'long: 'short>(r: &'long V) -> &'short V
	where
		Self: 'long,
	{
		r
	}
}

impl<K, V> cc_traits::Len for RangeMap<K, V> {
	fn len(&self) -> usize {
		self.entries.len()
	}

	fn is_empty(&self) -> bool {
		false
	}
}

impl<K: Ord, V> cc_traits::Get<K> for RangeMap<K, V> {
	fn get(&self, key: K) -> Option<&V> {
		RangeMap::get(self, key)
	}
}
