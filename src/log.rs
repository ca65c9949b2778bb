/// The log is the public facade: it combines the offset allocator, the
/// segment ring, and the clock. Writes are serialized against the ring's
/// mutation (append, seal, roll, purge); reads are admitted concurrently
/// with each other and with an in-flight write, subject only to the
/// `RwLock`'s reader/writer discipline.
use std::sync::RwLock;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::{ConfigError, LogError};
use crate::options::LogOptions;
use crate::record::{Offset, Record};
use crate::ring::{RingReadError, SegmentRing};

pub struct Log {
  options: LogOptions,
  ring: RwLock<SegmentRing>,
}

impl Log {
  /// Constructs a new, empty log. `options` is validated before the log is
  /// constructed: see [`crate::LogOptionsBuilder::build`].
  pub fn new(options: LogOptions) -> Result<Self, ConfigError> {
    let ring = SegmentRing::new(
      options.start_offset,
      options.max_segment_size,
      options.max_segments,
    );

    Ok(Self {
      options,
      ring: RwLock::new(ring),
    })
  }

  /// Appends a new record whose payload is `data`, stamping its metadata
  /// with the configured clock's current time. Returns the assigned offset.
  ///
  /// Rejects an already-cancelled `cancel` before touching the log, and
  /// rejects an empty payload. Once the write lock is acquired the mutation
  /// always completes: cancellation observed afterward has no effect.
  pub fn write(
    &self,
    data: impl Into<Bytes>,
    cancel: Option<&CancellationToken>,
  ) -> Result<Offset, LogError> {
    if is_cancelled(cancel) {
      return Err(LogError::Context);
    }

    let data = data.into();

    if data.is_empty() {
      return Err(LogError::Payload("payload must not be empty".to_string()));
    }

    let mut ring = self.ring.write().unwrap();

    let created = self.options.clock.now();
    let offset = ring.write(data, created);

    trace!(offset, "appended record");

    Ok(offset)
  }

  /// Returns the record at `offset`.
  pub fn read(&self, offset: Offset, cancel: Option<&CancellationToken>) -> Result<Record, LogError> {
    if is_cancelled(cancel) {
      return Err(LogError::Context);
    }

    let ring = self.ring.read().unwrap();

    match ring.read(offset) {
      Ok(record) => Ok(record),
      Err(RingReadError::OutOfRange) => Err(LogError::OutOfRange(offset)),
      Err(RingReadError::Future) => Err(LogError::FutureOffset(offset)),
    }
  }

  /// Returns `(earliest_offset, latest_offset)`, or `(-1, -1)` if the log has
  /// never accepted a write.
  pub fn range(&self, cancel: Option<&CancellationToken>) -> Result<(Offset, Offset), LogError> {
    if is_cancelled(cancel) {
      return Err(LogError::Context);
    }

    let ring = self.ring.read().unwrap();

    let range = ring.range();

    debug!(earliest = range.0, latest = range.1, "range snapshot");

    Ok(range)
  }
}

fn is_cancelled(cancel: Option<&CancellationToken>) -> bool {
  cancel.map(CancellationToken::is_cancelled).unwrap_or(false)
}
