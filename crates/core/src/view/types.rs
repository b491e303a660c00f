use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_optional_datetime, deserialize_optional_string};

/// The granularity of a single calendar view walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        };
        f.write_str(name)
    }
}

/// A calendar entry as reported by an entry provider.
///
/// `start` is always present; `end`, when present, is expected to be at or
/// after `start` (the provider's responsibility, not enforced here). Entries
/// that belong to a series carry the sequence flags so a renderer can draw
/// the first and last tile differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub display_name: String,
    pub start: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub end: Option<NaiveDateTime>,
    /// Target link for the entry tile. Not HTML-escaped.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub link: Option<String>,
    #[serde(default)]
    pub sequence_start: bool,
    #[serde(default)]
    pub sequence_end: bool,
}

impl CalendarEntry {
    /// Creates a punctual entry with the given display name and start.
    pub fn new(display_name: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            display_name: display_name.into(),
            start,
            end: None,
            link: None,
            sequence_start: false,
            sequence_end: false,
        }
    }

    /// Sets the end of this entry.
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the link for this entry.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Marks this entry's position within a sequence of related entries.
    pub fn with_sequence(mut self, start: bool, end: bool) -> Self {
        self.sequence_start = start;
        self.sequence_end = end;
        self
    }
}
