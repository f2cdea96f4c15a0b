use std::collections::HashMap;

use itertools::Itertools;

use clickup::TimeEntry;

use crate::domain::models::{
    DayEntries, DayKey, ListActivity, ListId, TagActivity, UserActivity, UserId,
};

/// A raw entry reduced to the two values the dimension tables consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedEntry {
    pub day: DayKey,
    pub hours: f64,
}

/// Reduces a raw entry to its UTC day bucket and fractional hours.
///
/// Entries with an unparseable end timestamp or duration yield `None`: a
/// missing contribution is indistinguishable from a zero one downstream, so
/// the bad record is dropped instead of failing the pass.
pub fn normalize(entry: &TimeEntry) -> Option<NormalizedEntry> {
    let Some(end) = entry.end_timestamp() else {
        tracing::debug!(
            entry_id = %entry.id,
            end = %entry.end,
            "skipping entry with unparseable end timestamp"
        );
        return None;
    };
    let Some(hours) = entry.duration_hours() else {
        tracing::debug!(
            entry_id = %entry.id,
            duration = %entry.duration,
            "skipping entry with unparseable duration"
        );
        return None;
    };

    Some(NormalizedEntry {
        day: DayKey::from_datetime(end),
        hours,
    })
}

/// The three dimension tables produced by one aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub lists: HashMap<ListId, ListActivity>,
    pub users: HashMap<UserId, UserActivity>,
    pub tags: HashMap<String, TagActivity>,
}

/// Folds raw entries into the three dimension tables.
///
/// Pure accumulation: the result is independent of entry order and of how
/// the input was batched upstream. Presentation ordering is applied
/// separately by [`Aggregation::into_rows`].
pub fn aggregate(entries: &[TimeEntry]) -> Aggregation {
    let mut tables = Aggregation::default();
    for entry in entries {
        let Some(normalized) = normalize(entry) else {
            continue;
        };
        tables.accumulate(entry, normalized);
    }
    tables
}

impl Aggregation {
    fn accumulate(&mut self, entry: &TimeEntry, normalized: NormalizedEntry) {
        let NormalizedEntry { day, hours } = normalized;
        let location = &entry.task_location;
        let user_name = entry.user.username.as_str();
        let path = entry.location_path();

        // By list, broken down per user.
        let list_id = ListId::from(location.list_id);
        let list = self.lists.entry(list_id).or_insert_with(|| ListActivity {
            id: list_id,
            space: location.space_name.clone(),
            name: location.list_name.clone(),
            entries: DayEntries::new(),
        });
        list.entries.entry(day).or_default().add(user_name, hours);

        // By user, broken down per "<space> > <list>" path.
        let user_id = UserId::from(entry.user.id);
        let user = self.users.entry(user_id).or_insert_with(|| UserActivity {
            id: user_id,
            name: entry.user.username.clone(),
            entries: DayEntries::new(),
        });
        user.entries.entry(day).or_default().add(path.as_str(), hours);

        // By tag name, broken down per "<space> > <list> > <user>" path.
        // Entry-level and task-level tags are folded into one set, so a
        // name present in both contributes once per entry.
        let tag_reference = format!("{path} > {user_name}");
        for tag_name in entry.tag_names() {
            let tag = self
                .tags
                .entry(tag_name.to_string())
                .or_insert_with(|| TagActivity {
                    name: tag_name.to_string(),
                    entries: DayEntries::new(),
                });
            tag.entries
                .entry(day)
                .or_default()
                .add(tag_reference.as_str(), hours);
        }
    }

    /// Consumes the tables into display-ordered rows, sorted by name.
    pub fn into_rows(self) -> (Vec<ListActivity>, Vec<UserActivity>, Vec<TagActivity>) {
        let lists = self
            .lists
            .into_values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();
        let users = self
            .users
            .into_values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();
        let tags = self
            .tags
            .into_values()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();
        (lists, users, tags)
    }
}
