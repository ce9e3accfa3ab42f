//! Human-readable diagnostics for rejected entry operations.
//!
//! Entry operations return [`EntryError`]; this module turns them into the
//! one-line messages shown to users and writes them to an output channel.

use std::io::{self, Write};

use crate::config::{DiagnosticsSettings, Locale};
use crate::library::EntryError;

/// What the caller was doing when the rejection happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Building a new entry. Rejections are errors: no entry exists.
    Create,
    /// Changing an existing entry. Rejections are notes: the change is ignored.
    Update,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Note,
}

impl Action {
    pub fn severity(self) -> Severity {
        match self {
            Self::Create => Severity::Error,
            Self::Update => Severity::Note,
        }
    }
}

fn severity_label(severity: Severity, locale: Locale) -> &'static str {
    match (locale, severity) {
        (Locale::Zh, Severity::Error) => "[错误]",
        (Locale::Zh, Severity::Note) => "[提示]",
        (Locale::En, Severity::Error) => "[error]",
        (Locale::En, Severity::Note) => "[note]",
    }
}

/// Message text for `err`, without the severity label.
pub fn message(err: &EntryError, action: Action, locale: Locale) -> &'static str {
    use Action::{Create, Update};
    use EntryError::*;

    match locale {
        Locale::Zh => match (err, action) {
            (EmptyTitle, Create) => "标题不能为空",
            (EmptyTitle, Update) => "标题不能为空，已忽略本次修改",
            (EmptyArtist, Create) => "艺人不能为空",
            (EmptyArtist, Update) => "艺人不能为空，已忽略本次修改",
            (NonPositiveDuration(_), Create) => "时长必须为正整数（秒）",
            (NonPositiveDuration(_), Update) => "时长需为正整数，已忽略本次修改",
            (RatingOutOfRange(_), Create) => "评分必须在 1...5 之间",
            (RatingOutOfRange(_), Update) => "评分需在 1..5，已忽略本次修改",
            (EmptyTag, _) => "空标签已忽略",
            (DuplicateTag(_), _) => "标签已存在（忽略大小写）",
            (TagNotFound(_), _) => "未找到该标签",
        },
        Locale::En => match (err, action) {
            (EmptyTitle, Create) => "title must not be empty",
            (EmptyTitle, Update) => "title must not be empty, change ignored",
            (EmptyArtist, Create) => "artist must not be empty",
            (EmptyArtist, Update) => "artist must not be empty, change ignored",
            (NonPositiveDuration(_), Create) => "duration must be a positive number of seconds",
            (NonPositiveDuration(_), Update) => "duration must be positive, change ignored",
            (RatingOutOfRange(_), Create) => "rating must be between 1 and 5",
            (RatingOutOfRange(_), Update) => "rating must be within 1..5, change ignored",
            (EmptyTag, _) => "empty tag ignored",
            (DuplicateTag(_), _) => "tag already exists (case-insensitive)",
            (TagNotFound(_), _) => "tag not found",
        },
    }
}

/// Writes rejection messages to `out` according to [`DiagnosticsSettings`].
#[derive(Debug)]
pub struct Diagnostics<W> {
    out: W,
    settings: DiagnosticsSettings,
}

impl<W: Write> Diagnostics<W> {
    pub fn new(out: W, settings: DiagnosticsSettings) -> Self {
        Self { out, settings }
    }

    /// Print the message for `err`, unless diagnostics are disabled.
    pub fn rejected(&mut self, action: Action, err: &EntryError) -> io::Result<()> {
        log::trace!("{action:?} rejected: {err}");
        if !self.settings.enabled {
            return Ok(());
        }
        let locale = self.settings.locale;
        let text = message(err, action, locale);
        if self.settings.prefix {
            writeln!(
                self.out,
                "{} {text}",
                severity_label(action.severity(), locale)
            )
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// Pass an operation outcome through, reporting it if it was rejected.
    ///
    /// Returns `Some` with the success value, or `None` after reporting.
    pub fn check<T>(
        &mut self,
        action: Action,
        outcome: Result<T, EntryError>,
    ) -> io::Result<Option<T>> {
        match outcome {
            Ok(v) => Ok(Some(v)),
            Err(err) => {
                self.rejected(action, &err)?;
                Ok(None)
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
