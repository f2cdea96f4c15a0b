use chrono::{DateTime, Utc};

use crate::config::RangeSettings;
use crate::domain::models::DayKey;

/// The ordered sequence of visible calendar days, plus the widened fetch
/// start needed so budget cycles beginning before the window still sum
/// their real hours.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRange {
    days: Vec<DayKey>,
    first: DayKey,
    last: DayKey,
    overfetch_start: DayKey,
    end: DateTime<Utc>,
}

impl DayRange {
    /// Builds the visible range ending on `end`'s calendar day: one key per
    /// day, ascending, `lookback_days + 1` keys in total.
    pub fn ending_at(end: DateTime<Utc>, settings: &RangeSettings) -> Self {
        let last = DayKey::from_datetime(end);
        let first = last.minus_days(u64::from(settings.lookback_days));

        let mut days = Vec::with_capacity(settings.lookback_days as usize + 1);
        let mut day = first;
        while day <= last {
            days.push(day);
            day = day.succ();
        }

        Self {
            days,
            first,
            last,
            overfetch_start: first.minus_days(u64::from(settings.overfetch_days)),
            end,
        }
    }

    pub fn days(&self) -> &[DayKey] {
        &self.days
    }

    pub fn first(&self) -> DayKey {
        self.first
    }

    pub fn last(&self) -> DayKey {
        self.last
    }

    pub fn contains(&self, day: DayKey) -> bool {
        day >= self.first && day <= self.last
    }

    /// Where raw-entry fetches must start so that cycles overlapping the
    /// visible range still find their hours.
    pub fn overfetch_start(&self) -> DayKey {
        self.overfetch_start
    }

    /// The epoch-millisecond span to request raw entries over: from the
    /// overfetch start's midnight up to the range's end instant.
    pub fn fetch_window(&self) -> (i64, i64) {
        (
            self.overfetch_start.start_of_day_ms(),
            self.end.timestamp_millis(),
        )
    }
}
