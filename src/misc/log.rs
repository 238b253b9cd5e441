/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Queries left undecided by a budget are logged as warnings, as the analyses continue regardless.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to queries of the [context](crate::context)
    pub const ORACLE: &str = "oracle";

    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [assumption stack](crate::oracle::AssumptionStack)
    pub const ASSUMPTIONS: &str = "assumptions";

    /// Logs related to [core/dead analysis](crate::analysis::core_dead)
    pub const CORE_DEAD: &str = "core_dead";

    /// Logs related to [redundancy analysis](crate::analysis::redundancy)
    pub const REDUNDANCY: &str = "redundancy";

    /// Logs related to [cause analysis](crate::analysis::cause)
    pub const CAUSE: &str = "cause";

    /// Logs related to [atomic set discovery](crate::analysis::atomic_sets)
    pub const ATOMIC_SETS: &str = "atomic_sets";
}
