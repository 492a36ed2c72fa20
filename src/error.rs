use std::fmt::Debug;
use thiserror::Error;

/// Error returned when a range map cannot be built from the given
/// intervals and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The number of intervals differs from the number of values.
	#[error("{intervals} intervals given for {values} values")]
	SizeMismatch { intervals: usize, values: usize },

	/// No interval was given.
	#[error("at least one interval is required")]
	Empty,

	/// An interval does not have a legal shape for its position, or its
	/// lower bound is greater than its upper bound.
	///
	/// The index is `None` when the interval was built on its own.
	#[error("invalid interval shape{}", display_index(.index))]
	InvalidIntervalShape { index: Option<usize> },

	/// The interval at `index` overlaps, touches or precedes the one before
	/// it.
	#[error("interval {index} is not strictly after interval {}", .index - 1)]
	OutOfOrder { index: usize },
}

fn display_index(index: &Option<usize>) -> String {
	match index {
		Some(i) => format!(" at index {i}"),
		None => String::new(),
	}
}

/// Fieldless view of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	SizeMismatch,
	Empty,
	InvalidIntervalShape,
	OutOfOrder,
}

impl BuildError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
			Self::Empty => ErrorKind::Empty,
			Self::InvalidIntervalShape { .. } => ErrorKind::InvalidIntervalShape,
			Self::OutOfOrder { .. } => ErrorKind::OutOfOrder,
		}
	}

	pub(crate) fn shape_at(index: usize) -> Self {
		Self::InvalidIntervalShape { index: Some(index) }
	}
}

/// Error returned by [`RangeMap::get_or_err`](crate::RangeMap::get_or_err)
/// when no interval contains the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key {key:?} is not covered by any interval")]
pub struct KeyNotFound<K: Debug> {
	pub key: K,
}
