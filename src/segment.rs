/// A segment is a fixed-capacity, append-only array of records covering a
/// contiguous offset range `[base_offset, base_offset + capacity)`.
///
/// Segments are not thread-safe on their own; the [`crate::ring::SegmentRing`]
/// that owns them is responsible for synchronizing access.
use std::time::SystemTime;

use bytes::Bytes;

use crate::record::{Metadata, Offset, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentReadError {
  /// `offset` falls before `base_offset` or at/after the filled portion of
  /// the segment (either past its capacity, or within capacity but not yet
  /// written when the segment is still active).
  OutOfRange,
}

#[derive(Debug)]
pub(crate) struct Segment {
  base_offset: Offset,
  capacity: usize,
  records: Vec<Record>,
}

impl Segment {
  pub(crate) fn new(base_offset: Offset, capacity: usize) -> Self {
    Self {
      base_offset,
      capacity,
      records: Vec::with_capacity(capacity),
    }
  }

  pub(crate) fn base_offset(&self) -> Offset {
    self.base_offset
  }

  pub(crate) fn len(&self) -> usize {
    self.records.len()
  }

  /// The offset one past the last record currently stored.
  pub(crate) fn next_offset(&self) -> Offset {
    self.base_offset + self.records.len() as Offset
  }

  /// `true` once `len == capacity`; from then on the segment is immutable.
  pub(crate) fn is_sealed(&self) -> bool {
    self.records.len() == self.capacity
  }

  /// Appends `data` stamped with `created`, returning the assigned offset.
  ///
  /// The ring (the only caller) never invokes this on a sealed segment: it
  /// rolls to a fresh active segment before the capacity is exhausted.
  pub(crate) fn append(&mut self, data: Bytes, created: SystemTime) -> Offset {
    debug_assert!(!self.is_sealed(), "append called on a sealed segment");

    let offset = self.next_offset();

    self.records.push(Record {
      metadata: Metadata { offset, created },
      data,
    });

    offset
  }

  /// Returns a clone of the record at `offset`, or `OutOfRange` if that slot
  /// has not been written yet (active segment) or falls outside the segment
  /// entirely.
  pub(crate) fn read(&self, offset: Offset) -> Result<Record, SegmentReadError> {
    let index = offset - self.base_offset;

    if index < 0 || index as usize >= self.records.len() {
      return Err(SegmentReadError::OutOfRange);
    }

    Ok(self.records[index as usize].clone())
  }
}
