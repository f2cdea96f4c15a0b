use async_trait::async_trait;

use clickup::{Team, TimeEntriesQuery, TimeEntry};

use crate::domain::{models::TeamId, TimingError};

/// Outbound port for the external time-tracking provider.
///
/// The real HTTP client (and its authentication) lives outside the core;
/// anything that can deliver teams and raw time entries satisfies this
/// contract.
#[async_trait]
pub trait TimeEntryProvider: Send + Sync + 'static {
    /// Teams visible to the requesting user.
    async fn fetch_teams(&self) -> Result<Vec<Team>, TimingError>;

    /// Raw time entries for one team over the queried span.
    ///
    /// Implementations must not pre-aggregate or re-bucket; the core folds
    /// entries itself.
    async fn fetch_time_entries(
        &self,
        team_id: &TeamId,
        query: &TimeEntriesQuery,
    ) -> Result<Vec<TimeEntry>, TimingError>;
}
