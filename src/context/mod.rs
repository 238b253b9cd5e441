/*!
The context --- a reference [oracle](crate::oracle), to which formulas are added and within which queries take place.

Strictly, a [GenericContext] and a [Context].
The generic context is generic over the source of randomness used for [random selection](crate::oracle::SelectionStrategy::Random), while a context fixes the source as [MinimalPCG32](crate::generic::random::MinimalPCG32).

The context is simple by intent.
Each query starts from an empty valuation, asserts the unit clauses of the formula and each assumption, and then searches for a model by DPLL with chronological backtracking, using watched literals for propagation.
No clauses are learnt.

Each query is bounded by the [decision limit](crate::config::Config::decision_limit) and [time limit](crate::config::Config::time_limit) of the configuration, and a query which exceeds either reports [Unknown](crate::reports::Report::Unknown).

# Example
```rust
# use otter_anomalies::context::Context;
# use otter_anomalies::config::Config;
# use otter_anomalies::oracle::{Oracle, SelectionStrategy};
# use otter_anomalies::reports::Report;
# use otter_anomalies::structures::literal_set::LiteralSet;
let mut the_context = Context::from_config(Config::default());

let p_or_q = LiteralSet::from_ints(&[1, 2]).unwrap();
assert!(the_context.push(&[p_or_q]).is_ok());

the_context.set_selection_strategy(SelectionStrategy::Negative);
assert_eq!(the_context.has_solution(), Ok(Report::Satisfiable));

// With a preference for false, only the atom required to be true is true.
let model = the_context.internal_solution().unwrap();
assert_eq!(model.literals(), &[-1, 2]);
```
*/

mod counters;
pub use counters::Counters;

mod oracle_impl;

use crate::{
    config::Config,
    db::{trail::Trail, ClauseDB},
    generic::random::MinimalPCG32,
    oracle::{AssumptionStack, SelectionStrategy, SolutionHistory},
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        model::Model,
    },
    types::err::{ErrorKind, OracleError},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no query has been made since the last input.
    Input,

    /// The most recent query was satisfiable.
    Satisfiable,

    /// The most recent query was unsatisfiable.
    Unsatisfiable,

    /// The most recent query was not decided.
    Unknown,
}

/// A generic context, parameratised to a source of randomness.
pub struct GenericContext<R: rand::Rng + rand::SeedableRng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to queries.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The value of each atom, indexed by atom, with index 0 unused.
    pub valuation: Vec<Option<bool>>,

    /// Assignments made during a query.
    pub trail: Trail,

    /// The order in which atoms are chosen for decisions.
    pub(crate) order: Vec<Atom>,

    /// The position of each atom in the order, indexed by atom.
    pub(crate) order_position: Vec<usize>,

    /// No atom before this position in the order is without a value.
    pub(crate) order_head: usize,

    /// The bias used when choosing the value of an atom.
    pub(crate) strategy: SelectionStrategy,

    /// The source of rng, for random selection.
    pub rng: R,

    /// The assumptions of each query.
    pub(crate) assumptions: AssumptionStack,

    /// Models remembered.
    pub(crate) history: SolutionHistory,

    /// The model of the most recent query, if satisfiable.
    pub(crate) model: Option<Model>,

    /// The status of the context.
    pub state: ContextState,
}

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            valuation: vec![Some(true)],
            trail: Trail::default(),

            order: Vec::default(),
            order_position: vec![0],
            order_head: 0,
            strategy: SelectionStrategy::Positive,
            rng: R::seed_from_u64(0),

            assumptions: AssumptionStack::default(),
            history: SolutionHistory::default(),
            model: None,

            state: ContextState::Input,
        }
    }

    /// A report on the most recent query.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Unknown => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The value of `atom` on the current valuation, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The value of `literal` on the current valuation, if the atom of the literal has some value.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Ensures `atom` (and every atom below it) is part of the context.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        if atom > ATOM_MAX {
            return Err(OracleError::AtomsExhausted.into());
        }
        let count = self.atoms();
        if atom <= count {
            return Ok(());
        }

        for fresh in (count + 1)..=atom {
            self.valuation.push(None);
            self.order_position.push(self.order.len());
            self.order.push(fresh);
        }
        self.clause_db.ensure_atom(atom);
        Ok(())
    }

    /// A count of the atoms of the context.
    pub(crate) fn atoms(&self) -> Atom {
        (self.valuation.len() - 1) as Atom
    }
}
