use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;

/// Milliseconds in an hour; entry durations arrive in milliseconds.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A single logged work interval, as returned by the provider.
///
/// The provider encodes `start`, `end` and `duration` as strings. They are
/// kept verbatim here and parsed leniently on access, so one malformed
/// record never poisons a whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub task: Option<Task>,
    pub user: EntryUser,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub start: String,
    pub end: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
    pub task_location: TaskLocation,
    #[serde(default)]
    pub task_tags: Vec<Tag>,
    #[serde(default)]
    pub task_url: Option<String>,
}

impl TimeEntry {
    /// The instant the interval ended, if the provider sent a parseable
    /// epoch-millisecond value.
    pub fn end_timestamp(&self) -> Option<DateTime<Utc>> {
        let millis = self.end.trim().parse::<f64>().ok()?;
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Logged duration as fractional hours.
    ///
    /// `None` when the value is missing, unparseable or negative; callers
    /// treat that as "no contribution" rather than an error.
    pub fn duration_hours(&self) -> Option<f64> {
        let millis = self.duration.trim().parse::<f64>().ok()?;
        if !millis.is_finite() || millis < 0.0 {
            return None;
        }
        Some(millis / MILLIS_PER_HOUR)
    }

    /// Entry-level and task-level tags folded into one set.
    ///
    /// A name present in both lists yields a single element, so it can only
    /// contribute once per entry.
    pub fn tag_names(&self) -> BTreeSet<&str> {
        self.tags
            .iter()
            .chain(&self.task_tags)
            .map(|tag| tag.name.as_str())
            .collect()
    }

    /// `"<space> > <list>"` breadcrumb for the entry's location.
    pub fn location_path(&self) -> String {
        format!(
            "{} > {}",
            self.task_location.space_name, self.task_location.list_name
        )
    }
}

/// The task a time entry was booked on, when it was booked on one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub custom_id: Option<String>,
}

/// The user a time entry is attributed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default, rename = "profilePicture")]
    pub profile_picture: Option<String>,
}

/// Where the entry's task lives in the workspace hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLocation {
    pub list_id: i64,
    pub list_name: String,
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub space_id: Option<i64>,
    pub space_name: String,
}
