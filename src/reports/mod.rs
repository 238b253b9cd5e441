/*!
Reports on a query.
*/

/// The outcome of a query.
///
/// An oracle may be unable to decide a query within its budget, and so there are three outcomes rather than two.
/// Analyses treat [Unknown](Report::Unknown) as "no information", never as either of the other outcomes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable under the assumptions.
    Satisfiable,

    /// The formula is unsatisfiable under the assumptions.
    Unsatisfiable,

    /// Satisfiability of the formula under the assumptions is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
