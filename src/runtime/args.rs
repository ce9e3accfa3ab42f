use thiserror::Error;

pub const USAGE: &str =
    "usage: songbook <title> <artist> <seconds> <rating> [tag ...] [--match <keyword>]";

/// Command line of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub title: String,
    pub artist: String,
    pub seconds: i64,
    pub rating: i64,
    pub tags: Vec<String>,
    pub keyword: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing argument: {0}")]
    Missing(&'static str),

    #[error("{name} must be an integer, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("--match needs a keyword")]
    MissingKeyword,
}

fn integer(name: &'static str, value: String) -> Result<i64, UsageError> {
    value
        .trim()
        .parse()
        .map_err(|_| UsageError::NotANumber { name, value })
}

/// Parse the arguments following the program name.
///
/// Numbers are only checked to be integers; range checks are left to the entry.
pub fn parse<I>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut keyword = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--match" {
            keyword = Some(args.next().ok_or(UsageError::MissingKeyword)?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let title = positional.next().ok_or(UsageError::Missing("title"))?;
    let artist = positional.next().ok_or(UsageError::Missing("artist"))?;
    let seconds = integer(
        "seconds",
        positional.next().ok_or(UsageError::Missing("seconds"))?,
    )?;
    let rating = integer(
        "rating",
        positional.next().ok_or(UsageError::Missing("rating"))?,
    )?;

    Ok(Invocation {
        title,
        artist,
        seconds,
        rating,
        tags: positional.collect(),
        keyword,
    })
}
