use std::fmt;

use super::model::TrackEntry;

const TAG_SEPARATOR: &str = ", ";

/// One rating star per point, e.g. `***` for a rating of 3.
pub(crate) fn rating_stars(rating: u8) -> String {
    "*".repeat(usize::from(rating))
}

/// Single-line summary:
///
/// `[#<id>] <artist> - <title> (<seconds>s) <stars>` followed by
/// `  [tags: a, b]` when the entry has tags.
impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id(),
            self.artist(),
            self.title(),
            self.duration_seconds(),
            rating_stars(self.rating()),
        )?;
        if !self.tags().is_empty() {
            write!(f, "  [tags: {}]", self.tags().join(TAG_SEPARATOR))?;
        }
        Ok(())
    }
}

impl TrackEntry {
    pub fn render(&self) -> String {
        self.to_string()
    }
}
