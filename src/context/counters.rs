use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every query made.
    pub total_queries: usize,

    /// A count of every decision made, across queries.
    pub total_decisions: usize,

    /// A count of every conflict seen, across queries.
    pub total_conflicts: usize,

    /// Decisions and conflicts during the current (or most recent) query.
    pub query_steps: usize,

    /// The time taken across queries.
    pub time: Duration,
}
