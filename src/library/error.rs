use thiserror::Error;

/// Why a track entry operation was rejected.
///
/// The entry is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("artist must not be empty")]
    EmptyArtist,

    #[error("duration must be a positive number of seconds, got {0}")]
    NonPositiveDuration(i64),

    #[error("rating must be within 1..=5, got {0}")]
    RatingOutOfRange(i64),

    #[error("tag must not be empty")]
    EmptyTag,

    /// Holds the tag as it was passed in, after trimming.
    #[error("tag already exists (case-insensitive): {0}")]
    DuplicateTag(String),

    #[error("tag not found: {0}")]
    TagNotFound(String),
}
