use serde::Serialize;

/// Query parameters for the provider's team time-entries endpoint.
///
/// The HTTP client itself lives outside this crate; these are the
/// parameters any implementation is expected to send. Timestamps are epoch
/// milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntriesQuery {
    pub start_date: i64,
    pub end_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub include_location_names: bool,
    pub include_task_tags: bool,
}

impl TimeEntriesQuery {
    /// A query over `[start_date, end_date]` with location names and task
    /// tags included, since the aggregation needs both.
    pub fn new(start_date: i64, end_date: i64) -> Self {
        Self {
            start_date,
            end_date,
            assignee: None,
            include_location_names: true,
            include_task_tags: true,
        }
    }

    /// Restricts the query to the given comma-separated user ids.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}
