/// An in-memory, append-only, offset-addressable record log.
///
/// A [`Log`] is a single logical stream of opaque byte-payload records, each
/// assigned a strictly monotonic offset on write. Random-access reads are
/// admitted concurrently with each other and with an in-flight write; only
/// the write path is serialized. A bounded amount of history is retained —
/// older records are purged automatically as the log advances, which is why
/// [`Log::read`] can return [`LogError::OutOfRange`] even for an offset that
/// was once written successfully.
///
/// "Resuming from a checkpoint" (replaying a source stream starting from an
/// offset a caller has already consumed through) is expressed by
/// constructing a fresh [`Log`] with [`LogOptionsBuilder::start_offset`] set
/// to the checkpoint; [`LogError::FutureOffset`] is the signal that a reader
/// has caught up to the tail.
pub mod clock;
pub mod error;
pub mod options;
mod record;
mod ring;
mod segment;

mod log;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, LogError};
pub use log::Log;
pub use options::{LogOptions, LogOptionsBuilder};
pub use record::{Metadata, Offset, Record, NO_OFFSET};
