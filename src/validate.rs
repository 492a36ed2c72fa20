use crate::{AnyRange, BuildError, Interval, Shape};

/// Shape required of the last interval of a range map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
	/// The last interval is closed, like every other interval.
	Bounded,

	/// The last interval has no upper bound.
	Unbounded,
}

/// How the tail shape is chosen when validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TailRule {
	Fixed(Tail),

	/// Bounded if the last given interval has an upper bound, unbounded
	/// otherwise.
	Infer,
}

impl TailRule {
	fn resolve<K>(self, last: &AnyRange<K>) -> Tail {
		match self {
			Self::Fixed(tail) => tail,
			Self::Infer => {
				if last.has_upper_bound() {
					Tail::Bounded
				} else {
					Tail::Unbounded
				}
			}
		}
	}
}

/// Validated content of a range map.
pub(crate) struct Validated<K, V> {
	pub entries: Vec<(Interval<K>, V)>,
	pub tail: Tail,
}

/// Checks the candidate intervals and pairs them with their values.
///
/// Intervals must be closed except for the last one, whose shape is given by
/// `rule`, and each interval must be strictly after the previous one.
pub(crate) fn validate<K: Ord, V>(
	intervals: Vec<AnyRange<K>>,
	values: Vec<V>,
	rule: TailRule,
) -> Result<Validated<K, V>, BuildError> {
	if intervals.len() != values.len() {
		log::debug!(
			"rejecting range map: {} intervals for {} values",
			intervals.len(),
			values.len()
		);
		return Err(BuildError::SizeMismatch {
			intervals: intervals.len(),
			values: values.len(),
		});
	}

	let tail = match intervals.last() {
		Some(last) => rule.resolve(last),
		None => {
			log::debug!("rejecting empty range map");
			return Err(BuildError::Empty);
		}
	};

	let last_index = intervals.len() - 1;
	let intervals = intervals
		.into_iter()
		.enumerate()
		.map(|(index, range)| {
			let expected = if index == last_index && tail == Tail::Unbounded {
				Shape::LowerOnly
			} else {
				Shape::Closed
			};

			if range.shape() != expected {
				log::debug!(
					"rejecting range map: interval {index} has shape {:?}, expected {expected:?}",
					range.shape()
				);
				return Err(BuildError::shape_at(index));
			}

			if !range.is_well_ordered() {
				log::debug!("rejecting range map: interval {index} has its bounds reversed");
				return Err(BuildError::shape_at(index));
			}

			Interval::try_from(range).map_err(|_| BuildError::shape_at(index))
		})
		.collect::<Result<Vec<_>, _>>()?;

	if let Some(index) = intervals
		.windows(2)
		.position(|pair| !pair[0].is_strictly_before(&pair[1]))
	{
		log::debug!(
			"rejecting range map: interval {} is not after interval {index}",
			index + 1
		);
		return Err(BuildError::OutOfOrder { index: index + 1 });
	}

	let entries = intervals.into_iter().zip(values).collect();
	Ok(Validated { entries, tail })
}
