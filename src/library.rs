//! Track entries: validated metadata records for a music catalog.
//!
//! A [`TrackEntry`] can only be obtained through a successful construction,
//! so every value in circulation satisfies the field invariants. Mutators
//! reject invalid input with an [`EntryError`] and leave the entry untouched.

mod display;
mod error;
mod ids;
mod model;
mod text;

pub use error::EntryError;
pub use ids::{IdCounter, IdSource, TrackId, global_ids};
pub use model::{MAX_RATING, MIN_RATING, TrackEntry, compare_for_ordering};
