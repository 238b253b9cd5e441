/*!
The oracle consumed by the analyses.

# Overview

An oracle is a stateful satisfiability solver, queried under assumptions.
The analyses make no assumptions about how an oracle decides a query, and interact only through the [Oracle] trait:

- Clauses are [pushed](Oracle::push) to the formula of an oracle, irreversibly.
- Literals are assumed through the [assumption stack](AssumptionStack) of the oracle, which is consulted on every query.
- A query [reports](Oracle::has_solution) one of three outcomes, with [Unknown](Report::Unknown) returned if the oracle could not decide the query within its budget.
- A satisfiable query leaves a model, available as the [internal solution](Oracle::internal_solution) until the next query.
- The models found may be diversified by a [selection strategy](SelectionStrategy) and by [shuffling](Oracle::shuffle_order) the order in which the oracle considers atoms.
- An oracle may be asked to [remember](Oracle::remember_solution_history) the distinct models found by later queries.

An oracle must not be shared by two analyses at the same time, as the assumption stack and the internal state of the oracle are mutated by each query.
Analyses on distinct oracles are independent.

# Example

```rust
# use otter_anomalies::context::Context;
# use otter_anomalies::config::Config;
# use otter_anomalies::oracle::Oracle;
# use otter_anomalies::reports::Report;
# use otter_anomalies::structures::literal_set::LiteralSet;
let mut the_context = Context::from_config(Config::default());
let clause = LiteralSet::from_ints(&[-1, 2]).unwrap();
assert!(the_context.push(&[clause]).is_ok());

assert!(the_context.assumptions_mut().push(1).is_ok());
assert!(the_context.assumptions_mut().push(-2).is_ok());
assert_eq!(the_context.has_solution(), Ok(Report::Unsatisfiable));

assert!(the_context.assumptions_mut().replace_last(2).is_ok());
assert_eq!(the_context.find_solution().map(|model| model.value_of(2)), Ok(Some(2)));
```
*/

mod assumptions;
pub use assumptions::{AssumptionScope, AssumptionStack};

mod history;
pub use history::SolutionHistory;

use crate::{
    reports::Report,
    structures::{atom::Atom, literal::CLiteral, literal_set::LiteralSet, model::Model},
    types::err::{ErrorKind, OracleError},
};

/// A bias on the polarity chosen when an oracle freely values an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Prefer true.
    Positive,

    /// Prefer false.
    Negative,

    /// Choose uniformly at random, from a source seeded with the given seed.
    Random(u64),
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Random(seed) => write!(f, "Random({seed})"),
        }
    }
}

/// A stateful satisfiability oracle, queried under assumptions.
pub trait Oracle {
    /// Adds `clauses` to the formula of the oracle.
    ///
    /// Clauses cannot be removed, and so any clause pushed is part of every later query.
    fn push(&mut self, clauses: &[LiteralSet]) -> Result<(), ErrorKind>;

    /// A positive literal of some atom which does not appear in the formula of the oracle.
    fn fresh_variable(&mut self) -> Result<CLiteral, ErrorKind>;

    /// A count of the atoms known to the oracle.
    fn atom_count(&self) -> Atom;

    /// Decides the formula of the oracle under the current assumptions.
    fn has_solution(&mut self) -> Result<Report, ErrorKind>;

    /// The model found by the most recent satisfiable query, if the most recent query was satisfiable.
    fn internal_solution(&self) -> Option<&Model>;

    /// Some model of the formula under the current assumptions.
    ///
    /// Fails with [OracleError::Unsatisfiable] if there is no model, or [OracleError::Unknown] if the query could not be decided.
    fn find_solution(&mut self) -> Result<Model, ErrorKind> {
        match self.has_solution()? {
            Report::Satisfiable => match self.internal_solution() {
                Some(model) => Ok(model.clone()),
                None => Err(OracleError::Corrupt.into()),
            },
            Report::Unsatisfiable => Err(OracleError::Unsatisfiable.into()),
            Report::Unknown => Err(OracleError::Unknown.into()),
        }
    }

    /// The assumption stack of the oracle.
    fn assumptions(&self) -> &AssumptionStack;

    /// The assumption stack of the oracle, for revision.
    fn assumptions_mut(&mut self) -> &mut AssumptionStack;

    /// Sets the bias used when freely valuing an atom, for all later queries.
    fn set_selection_strategy(&mut self, strategy: SelectionStrategy);

    /// Permutes the order in which atoms are considered, using `rng`.
    fn shuffle_order<G: rand::Rng + ?Sized>(&mut self, rng: &mut G);

    /// Forgets any remembered models and begins recording at most `limit` distinct models found by later queries.
    fn remember_solution_history(&mut self, limit: usize);

    /// The models remembered, most recent first.
    fn solution_history(&self) -> &SolutionHistory;
}
