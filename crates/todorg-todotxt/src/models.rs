use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag key carrying a fallback priority letter (`pri:a`).
pub const PRIORITY_TAG: &str = "pri";

/// Tag key carrying a due date (`due:2023-04-04`).
pub const DUE_TAG: &str = "due";

/// Tag key carrying a threshold date (`t:2023-03-03`), the date before
/// which a task is not yet actionable.
pub const THRESHOLD_TAG: &str = "t";

/// TodoRecord - one parsed todo.txt task line.
///
/// Dates are kept as the `YYYY-MM-DD` text found on the line; calendar
/// validation happens where a date is actually used, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// `x ` completion marker present
    pub completed: bool,

    /// Uppercase letter from a `(A)` priority marker
    pub priority: Option<char>,

    /// First leading date of a completed task
    pub completion_date: Option<String>,

    /// Leading date of an open task, or the second leading date of a
    /// completed one
    pub creation_date: Option<String>,

    /// `+project` labels, in order of appearance
    pub projects: Vec<String>,

    /// `@context` labels, in order of appearance
    pub contexts: Vec<String>,

    /// `key:value` tags, later occurrences of a key win
    pub tags: BTreeMap<String, String>,

    /// Description with markers, dates, and tag tokens removed
    pub text: String,
}

impl TodoRecord {
    /// Tag lookup by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Check if this record carries a due date tag
    pub fn has_due_tag(&self) -> bool {
        self.tags.contains_key(DUE_TAG)
    }
}
