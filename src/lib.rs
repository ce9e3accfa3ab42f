//! Validated music track entries.
//!
//! [`library::TrackEntry`] is the core type. [`report`] turns rejected
//! operations into user-facing messages and [`config`] controls how.

pub mod config;
pub mod library;
pub mod report;
