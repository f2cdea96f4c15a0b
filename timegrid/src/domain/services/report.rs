use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Serialize;

use clickup::{TimeEntriesQuery, TimeEntry};

use crate::{
    config::RangeSettings,
    domain::{
        models::{DayKey, ListActivity, TagActivity, TeamId, TimePlan, UserActivity},
        ports::outbound::{TimeEntryProvider, TimePlanStore},
        TimingError,
    },
};

use super::{aggregate, DayRange};

/// Everything the utilization grid needs for one render pass.
#[derive(Debug, Serialize)]
pub struct TimingReport {
    pub days: Vec<DayKey>,
    pub lists: Vec<ListActivity>,
    pub users: Vec<UserActivity>,
    pub tags: Vec<TagActivity>,
    pub plans: Vec<TimePlan>,
}

/// Builds [`TimingReport`]s from the two outbound ports.
///
/// Entry fetches fan out per team over the widened overfetch window and are
/// joined before the single aggregation pass; aggregating a partial entry
/// set and merging later is not supported.
pub struct TimingReportService<P, S> {
    provider: Arc<P>,
    plan_store: Arc<S>,
    range_settings: RangeSettings,
}

impl<P, S> TimingReportService<P, S>
where
    P: TimeEntryProvider,
    S: TimePlanStore,
{
    pub fn new(provider: Arc<P>, plan_store: Arc<S>, range_settings: RangeSettings) -> Self {
        Self {
            provider,
            plan_store,
            range_settings,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn build_report(&self, end: DateTime<Utc>) -> Result<TimingReport, TimingError> {
        let range = DayRange::ending_at(end, &self.range_settings);
        let (fetch_start, fetch_end) = range.fetch_window();

        let teams = self.provider.fetch_teams().await?;

        let entry_batches = try_join_all(teams.iter().map(|team| {
            let query =
                TimeEntriesQuery::new(fetch_start, fetch_end).with_assignee(team.assignee_csv());
            let team_id = TeamId::from(team.id.as_str());
            async move { self.provider.fetch_time_entries(&team_id, &query).await }
        }))
        .await?;
        let entries: Vec<TimeEntry> = entry_batches.into_iter().flatten().collect();
        tracing::debug!(
            teams = teams.len(),
            entries = entries.len(),
            "fetched time entries over the overfetch window"
        );

        let plan_batches = try_join_all(teams.iter().map(|team| {
            let team_id = TeamId::from(team.id.as_str());
            async move { self.plan_store.plans_for_team(&team_id).await }
        }))
        .await?;
        let plans: Vec<TimePlan> = plan_batches
            .into_iter()
            .flatten()
            .filter(|plan| !plan.is_tombstone())
            .filter(|plan| plan.intersects(range.first(), range.last()))
            .collect();

        let (lists, users, tags) = aggregate(&entries).into_rows();

        Ok(TimingReport {
            days: range.days().to_vec(),
            lists,
            users,
            tags,
            plans,
        })
    }
}
