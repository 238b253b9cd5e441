use std::str::FromStr;

/// What atomic set discovery does when a query is left undecided by a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeoutPolicy {
    /// Retract the assumption and leave the atom undecided.
    /// Discovery continues with the next atom.
    Skip = 0,

    /// Stop discovery, returning the sets finalized so far.
    Halt,
}

impl std::fmt::Display for TimeoutPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "Skip"),
            Self::Halt => write!(f, "Halt"),
        }
    }
}

impl TimeoutPolicy {
    /// The minimum TimeoutPolicy type.
    pub const MIN: TimeoutPolicy = TimeoutPolicy::Skip;

    /// The maximum TimeoutPolicy type.
    pub const MAX: TimeoutPolicy = TimeoutPolicy::Halt;
}

impl FromStr for TimeoutPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Skip" => Ok(Self::Skip),

            "Halt" => Ok(Self::Halt),

            _unknown_string => Err(()),
        }
    }
}
