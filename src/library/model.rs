use std::cmp::Ordering;
use std::time::Duration;

use super::error::EntryError;
use super::ids::{IdSource, TrackId, global_ids};
use super::text::{contains_folded, eq_folded, fold, non_empty_trimmed};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A single song in a catalog.
///
/// Title and artist are stored trimmed and never empty, the duration is
/// positive, the rating lies in `MIN_RATING..=MAX_RATING` and tags are
/// unique ignoring case, kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackEntry {
    id: TrackId,
    title: String,
    artist: String,
    duration_seconds: u64,
    rating: u8,
    tags: Vec<String>,
}

fn validate_duration(seconds: i64) -> Result<u64, EntryError> {
    u64::try_from(seconds)
        .ok()
        .filter(|&s| s > 0)
        .ok_or(EntryError::NonPositiveDuration(seconds))
}

fn validate_rating(value: i64) -> Result<u8, EntryError> {
    u8::try_from(value)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(EntryError::RatingOutOfRange(value))
}

impl TrackEntry {
    /// Create an entry with an id from the process-wide counter.
    ///
    /// Constraints are checked in order (title, artist, duration, rating) and
    /// only the first violation is returned. A rejected construction does not
    /// consume an id.
    pub fn new(
        title: &str,
        artist: &str,
        duration_seconds: i64,
        rating: i64,
    ) -> Result<Self, EntryError> {
        Self::with_ids(global_ids(), title, artist, duration_seconds, rating)
    }

    /// Like [`TrackEntry::new`], drawing the id from `ids`.
    pub fn with_ids<I: IdSource + ?Sized>(
        ids: &I,
        title: &str,
        artist: &str,
        duration_seconds: i64,
        rating: i64,
    ) -> Result<Self, EntryError> {
        let title = non_empty_trimmed(title).ok_or(EntryError::EmptyTitle)?;
        let artist = non_empty_trimmed(artist).ok_or(EntryError::EmptyArtist)?;
        let duration_seconds = validate_duration(duration_seconds)?;
        let rating = validate_rating(rating)?;

        let id = ids.next_id();
        log::debug!("created track #{id}: {artist} - {title}");

        Ok(Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration_seconds,
            rating,
            tags: Vec::new(),
        })
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_seconds)
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Tags in insertion order, original case preserved.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), EntryError> {
        let title = non_empty_trimmed(title).ok_or(EntryError::EmptyTitle)?;
        self.title = title.to_string();
        Ok(())
    }

    pub fn set_artist(&mut self, artist: &str) -> Result<(), EntryError> {
        let artist = non_empty_trimmed(artist).ok_or(EntryError::EmptyArtist)?;
        self.artist = artist.to_string();
        Ok(())
    }

    pub fn set_duration(&mut self, seconds: i64) -> Result<(), EntryError> {
        self.duration_seconds = validate_duration(seconds)?;
        Ok(())
    }

    pub fn set_rating(&mut self, value: i64) -> Result<(), EntryError> {
        self.rating = validate_rating(value)?;
        Ok(())
    }

    /// Append a tag unless an equal one (ignoring case) is already present.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), EntryError> {
        let tag = non_empty_trimmed(tag).ok_or(EntryError::EmptyTag)?;
        if self.tags.iter().any(|existing| eq_folded(existing, tag)) {
            log::trace!("track #{}: duplicate tag {tag:?} ignored", self.id);
            return Err(EntryError::DuplicateTag(tag.to_string()));
        }
        log::debug!("track #{}: tag {tag:?} added", self.id);
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove the first tag equal to `tag` ignoring case.
    pub fn remove_tag(&mut self, tag: &str) -> Result<(), EntryError> {
        let tag = tag.trim();
        let wanted = fold(tag);
        let Some(pos) = self.tags.iter().position(|t| fold(t) == wanted) else {
            log::trace!("track #{}: tag {tag:?} not found", self.id);
            return Err(EntryError::TagNotFound(tag.to_string()));
        };
        let removed = self.tags.remove(pos);
        log::debug!("track #{}: tag {removed:?} removed", self.id);
        Ok(())
    }

    /// Case-insensitive substring search over title, artist and tags.
    ///
    /// A blank keyword never matches.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let Some(keyword) = non_empty_trimmed(keyword) else {
            return false;
        };
        let keyword = fold(keyword);

        contains_folded(&self.title, &keyword)
            || contains_folded(&self.artist, &keyword)
            || self.tags.iter().any(|t| contains_folded(t, &keyword))
    }
}

/// Sort order for entries: rating descending, then title ascending, then id.
///
/// Ids are unique, so this is a total order. Use with `sort_by`.
pub fn compare_for_ordering(a: &TrackEntry, b: &TrackEntry) -> Ordering {
    b.rating
        .cmp(&a.rating)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}
