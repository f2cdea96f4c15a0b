use async_trait::async_trait;

use crate::domain::{
    models::{TeamId, TimePlan},
    TimingError,
};

/// Outbound port for persisted time plan definitions.
///
/// Creation, update and deletion (including the `hours <= 0` tombstone
/// convention) stay with the persistence layer; the core only reads a
/// snapshot per computation pass.
#[async_trait]
pub trait TimePlanStore: Send + Sync + 'static {
    /// All plans stored for one team.
    async fn plans_for_team(&self, team_id: &TeamId) -> Result<Vec<TimePlan>, TimingError>;
}
