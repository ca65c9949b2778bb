use std::time::SystemTime;

use bytes::Bytes;

/// Identifies a record's position in the logical stream.
///
/// Monotonically increasing across writes. [`NO_OFFSET`] is the sentinel
/// returned where no offset applies (an empty log's range).
pub type Offset = i64;

/// Sentinel value meaning "no valid offset".
pub const NO_OFFSET: Offset = -1;

/// Metadata stamped onto a [`Record`] at write time; never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
  pub offset: Offset,
  pub created: SystemTime,
}

/// A single entry in the log: an opaque payload plus its metadata.
///
/// `data` is reference-counted (`bytes::Bytes`) so a record obtained from
/// [`crate::Log::read`] stays valid even if its segment is purged afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  pub metadata: Metadata,
  pub data: Bytes,
}
