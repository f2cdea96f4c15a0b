use thiserror::Error;

/// Errors crossing the core's collaborator seams.
///
/// Nothing inside the aggregation itself is fatal: malformed telemetry is
/// absorbed where it is read. Only the outbound ports and plan validation
/// can fail.
#[derive(Debug, Error)]
pub enum TimingError {
    #[error("provider error: {0}")]
    Provider(String),
    #[error("plan store error: {0}")]
    PlanStore(String),
    #[error("invalid time plan: {0}")]
    InvalidPlan(&'static str),
}

impl TimingError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn plan_store(msg: impl Into<String>) -> Self {
        Self::PlanStore(msg.into())
    }
}
