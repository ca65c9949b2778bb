/// A source of timestamps for record metadata.
///
/// This trait exists so tests can inject a deterministic clock instead of
/// depending on wall-clock time; production code uses [`SystemClock`].
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub trait Clock: Send + Sync {
  /// Returns the current time.
  fn now(&self) -> SystemTime;
}

/// The default clock, backed by [`std::time::SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> SystemTime {
    SystemTime::now()
  }
}

/// A clock whose value is set explicitly, for deterministic tests.
///
/// Starts at the UNIX epoch and can be advanced with [`ManualClock::advance`]
/// or pinned with [`ManualClock::set`].
#[derive(Debug)]
pub struct ManualClock {
  nanos_since_epoch: AtomicI64,
}

impl ManualClock {
  pub fn new() -> Self {
    Self {
      nanos_since_epoch: AtomicI64::new(0),
    }
  }

  pub fn set(&self, time: SystemTime) {
    let nanos = time
      .duration_since(UNIX_EPOCH)
      .expect("time before UNIX epoch")
      .as_nanos() as i64;
    self.nanos_since_epoch.store(nanos, Ordering::SeqCst);
  }

  pub fn advance(&self, by: Duration) {
    self
      .nanos_since_epoch
      .fetch_add(by.as_nanos() as i64, Ordering::SeqCst);
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for ManualClock {
  fn now(&self) -> SystemTime {
    UNIX_EPOCH + Duration::from_nanos(self.nanos_since_epoch.load(Ordering::SeqCst) as u64)
  }
}
