use thiserror::Error;

use crate::record::Offset;

/// Errors returned by [`crate::options::LogOptionsBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("start offset must be >= 0, got {0}")]
  NegativeStartOffset(Offset),
  #[error("max segment size must be > 0, got {0}")]
  NonPositiveSegmentSize(usize),
  #[error("max segments must be >= 2, got {0}")]
  TooFewSegments(usize),
}

/// Errors returned by [`crate::Log::write`], [`crate::Log::read`] and [`crate::Log::range`].
///
/// `OutOfRange` and `FutureOffset` are distinguishable by callers without
/// string matching: compare with `==` or `matches!`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
  #[error("offset {0} is out of range (purged or before the log's start offset)")]
  OutOfRange(Offset),
  #[error("offset {0} is beyond the current tail")]
  FutureOffset(Offset),
  #[error("payload rejected: {0}")]
  Payload(String),
  #[error("operation cancelled before it took effect")]
  Context,
}
