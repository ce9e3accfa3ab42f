use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier of a track entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u64);

impl TrackId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out ids to successfully constructed entries.
///
/// Implementations must never return the same id twice.
pub trait IdSource {
    fn next_id(&self) -> TrackId;
}

/// Monotonic counter starting at 1.
///
/// Safe to share between threads; ids stay unique under concurrent use.
#[derive(Debug)]
pub struct IdCounter {
    next: AtomicU64,
}

impl IdCounter {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// The id the next call to [`IdSource::next_id`] will return.
    pub fn peek(&self) -> TrackId {
        TrackId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for IdCounter {
    fn next_id(&self) -> TrackId {
        TrackId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

static GLOBAL_IDS: IdCounter = IdCounter::new();

/// The counter shared by every entry built with [`crate::library::TrackEntry::new`].
///
/// Initialized at process start and never reset.
pub fn global_ids() -> &'static IdCounter {
    &GLOBAL_IDS
}
