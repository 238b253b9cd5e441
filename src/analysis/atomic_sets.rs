/*!
Atomic set discovery: groups of atoms whose values are perfectly correlated across every model.

# Overview

Two atoms *x* and *y* are in the same atomic set if, on every model, *x* and *y* have the same value, or if on every model *x* and *y* have opposite values.
An [AtomicSet] notes one joint assignment to its atoms, from which the correlation of any pair of atoms in the set follows.

Discovery begins from a reference model, found with a preference for true, and proceeds in two passes:

1. The core/dead pass.
   Atoms with a single value on every model are found as in [core/dead analysis](crate::analysis::core_dead), with the value of each fixed atom kept as an assumption for the rest of discovery.
   These form the first set returned, which may be empty.
2. The pairwise pass.
   Each atom *x* not yet in a set is taken in turn as a pivot, and assumed to have its reference value.
   Each later atom *y* not yet in a set is then probed by assuming the opposite of its reference value.
   If this is unsatisfiable, the value of *x* determines the value of *y*, and *y* is pending.
   Following this the pivot is negated, and each pending atom is checked again on a model found with the pivot negated.
   Those pending atoms which remain determined join *x* in a set, and any others are released for some later pivot.

# Pruning

Many probes are avoided:
- Throughout, a buffer of the model found with the pivot assumed (or the reference model, during the core/dead pass) has each slot cleared as soon as some model disagrees on the value of the slot.
  An atom whose slot is cleared is not determined, and is not probed.
- Distinct models found are remembered in the [solution history](crate::oracle::SolutionHistory) of the oracle, and any pair of atoms whose correlation is contradicted by some remembered model is not probed.
- Each time a fresh model is found the order of atoms in the oracle is [shuffled](crate::oracle::Oracle::shuffle_order), to diversify the models found.

# Budgets

A query left undecided by a budget is handled as the [timeout policy](crate::config::TimeoutPolicy) requires.
Either the atom (or pivot) in question is left undecided and discovery continues, or discovery halts and returns the sets already found.

```rust
# use otter_anomalies::analysis::{atomic_sets::{AtomicSetAnalysis, Correlation}, monitor::NullMonitor};
# use otter_anomalies::config::Config;
# use otter_anomalies::context::Context;
# use otter_anomalies::generic::random::MinimalPCG32;
# use otter_anomalies::oracle::Oracle;
# use otter_anomalies::structures::literal_set::LiteralSet;
# use rand::SeedableRng;
let config = Config::default();
let mut the_context = Context::from_config(config.clone());

// 1 is core, 2 and 3 are equivalent, and 4 is free.
let clauses = vec![
    LiteralSet::from_ints(&[1]).unwrap(),
    LiteralSet::from_ints(&[-2, 3]).unwrap(),
    LiteralSet::from_ints(&[2, -3]).unwrap(),
];
assert!(the_context.push(&clauses).is_ok());
assert!(the_context.fresh_variable().is_ok());

let mut rng = MinimalPCG32::seed_from_u64(0);
let analysis = AtomicSetAnalysis::from_config(&config);
let sets = analysis.discover(&mut the_context, &mut rng, &mut NullMonitor).unwrap();

assert_eq!(sets.len(), 2);
assert_eq!(sets[0].literals(), &[1]);
assert_eq!(sets[1].correlation(2, 3), Some(Correlation::Same));
```
*/

use crate::{
    analysis::monitor::Monitor,
    config::{Config, TimeoutPolicy},
    misc::log::targets::{self},
    oracle::{AssumptionScope, Oracle, SelectionStrategy, SolutionHistory},
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        literal_set::LiteralSet,
        model::Model,
    },
    types::err::{ErrorKind, OracleError},
};

/// How the values of two atoms relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Correlation {
    /// The atoms have the same value on every model.
    Same,

    /// The atoms have opposite values on every model.
    Opposite,
}

/// An ordered assignment to some atoms, whose values are correlated across every model.
///
/// The first literal is of the pivot from which the set was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomicSet {
    literals: Vec<CLiteral>,
}

impl AtomicSet {
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literal of the pivot, if the set is not empty.
    pub fn pivot(&self) -> Option<CLiteral> {
        self.literals.first().copied()
    }

    /// The literal of `atom` in the set, if the atom is in the set.
    pub fn literal_of(&self, atom: Atom) -> Option<CLiteral> {
        self.literals.iter().find(|literal| literal.atom() == atom).copied()
    }

    /// The correlation of `a` and `b`, if both are in the set.
    pub fn correlation(&self, a: Atom, b: Atom) -> Option<Correlation> {
        let a = self.literal_of(a)?;
        let b = self.literal_of(b)?;
        match a.polarity() == b.polarity() {
            true => Some(Correlation::Same),
            false => Some(Correlation::Opposite),
        }
    }
}

impl From<Vec<CLiteral>> for AtomicSet {
    fn from(literals: Vec<CLiteral>) -> Self {
        AtomicSet { literals }
    }
}

impl std::fmt::Display for AtomicSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            match index {
                0 => write!(f, "{literal}")?,
                _ => write!(f, " {literal}")?,
            }
        }
        write!(f, "}}")
    }
}

/// The progress of an atom through discovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Undecided,

    /// Determined by the current pivot, awaiting validation.
    Pending,

    /// In some set, or not to be examined.
    Done,
}

/// Sets found so far.
#[derive(Default)]
struct Found {
    core: Vec<CLiteral>,
    sets: Vec<AtomicSet>,
}

impl Found {
    fn into_sets(self) -> Vec<AtomicSet> {
        let mut sets = Vec::with_capacity(self.sets.len() + 1);
        sets.push(AtomicSet::from(self.core));
        sets.extend(self.sets);
        sets
    }
}

/// Whether some model contradicts `pivot` and `partner` having correlated values.
fn contradicted(history: &SolutionHistory, pivot: CLiteral, partner: CLiteral) -> bool {
    history.iter().any(|model| {
        match (model.value_of(pivot.atom()), model.value_of(partner.atom())) {
            (Some(x), Some(y)) => (x == pivot) != (y == partner),
            _ => false,
        }
    })
}

/// The model of the most recent satisfiable query of `oracle`.
fn latest_model<O: Oracle>(oracle: &O) -> Result<&Model, ErrorKind> {
    match oracle.internal_solution() {
        Some(model) => Ok(model),
        None => Err(OracleError::Corrupt.into()),
    }
}

/// Atomic set discovery.
#[derive(Clone, Debug)]
pub struct AtomicSetAnalysis {
    history_limit: usize,
    timeout_policy: TimeoutPolicy,
    report_singletons: bool,
    variables: Option<LiteralSet>,
}

impl AtomicSetAnalysis {
    /// An analysis of every atom, with options from `config`.
    pub fn from_config(config: &Config) -> Self {
        AtomicSetAnalysis {
            history_limit: config.solution_history.value,
            timeout_policy: config.timeout_policy.value,
            report_singletons: config.report_singletons.value,
            variables: None,
        }
    }

    /// Restricts the analysis to the atoms of `variables`.
    /// Other atoms are never examined, and appear in no set.
    pub fn with_variables(mut self, variables: LiteralSet) -> Self {
        self.variables = Some(variables.variables());
        self
    }

    fn halts(&self) -> bool {
        self.timeout_policy == TimeoutPolicy::Halt
    }

    /// The atomic sets of the formula of `oracle`, under any assumptions already made.
    ///
    /// The first set is of the core/dead atoms, and is present (though perhaps empty) whenever the formula has a model.
    /// If the formula has no model, or whether the formula has a model is undecided, there are no sets.
    ///
    /// On return the oracle prefers true, and no longer remembers models.
    pub fn discover<O: Oracle, G: rand::Rng, M: Monitor>(
        &self,
        oracle: &mut O,
        rng: &mut G,
        monitor: &mut M,
    ) -> Result<Vec<AtomicSet>, ErrorKind> {
        let mut scope = AssumptionScope::new(oracle);
        let result = self.discover_within(&mut *scope, rng, monitor);

        scope.remember_solution_history(0);
        scope.set_selection_strategy(SelectionStrategy::Positive);

        if let Ok(sets) = &result {
            log::info!(target: targets::ATOMIC_SETS, "{} sets found", sets.len());
        }
        result
    }

    fn discover_within<O: Oracle, G: rand::Rng, M: Monitor>(
        &self,
        oracle: &mut O,
        rng: &mut G,
        monitor: &mut M,
    ) -> Result<Vec<AtomicSet>, ErrorKind> {
        let base = oracle.assumptions().len();

        oracle.set_selection_strategy(SelectionStrategy::Positive);
        let reference = match oracle.find_solution() {
            Ok(model) => model,
            Err(ErrorKind::Oracle(OracleError::Unsatisfiable)) => {
                log::info!(target: targets::ATOMIC_SETS, "No model, and so no sets");
                return Ok(Vec::default());
            }
            Err(ErrorKind::Oracle(OracleError::Unknown)) => {
                log::warn!(target: targets::ATOMIC_SETS, "Unknown whether there is a model");
                return Ok(Vec::default());
            }
            Err(e) => return Err(e),
        };
        oracle.remember_solution_history(self.history_limit);

        let count = reference.len();
        let mut status = vec![Status::Undecided; count];
        let mut buffer = reference.clone();

        oracle.set_selection_strategy(SelectionStrategy::Negative);
        match oracle.has_solution()? {
            Report::Satisfiable => buffer.clear_disagreements(latest_model(oracle)?),
            Report::Unsatisfiable => return Err(OracleError::Corrupt.into()),
            Report::Unknown => log::warn!(target: targets::ATOMIC_SETS, "Unknown whether there is a second model"),
        }
        oracle.set_selection_strategy(SelectionStrategy::Positive);

        if let Some(variables) = &self.variables {
            for (index, state) in status.iter_mut().enumerate() {
                let atom = index as Atom + 1;
                if !variables.contains_atom(atom) {
                    *state = Status::Done;
                    buffer.clear(atom);
                }
            }
        }

        monitor.set_total_steps(count + 1);
        let mut found = Found::default();

        // The core/dead pass.
        for (index, state) in status.iter_mut().enumerate() {
            let value = buffer.slot(index);
            if value == 0 {
                continue;
            }
            if monitor.is_canceled() {
                log::info!(target: targets::ATOMIC_SETS, "Canceled during the core/dead pass");
                found.core = oracle.assumptions().as_vec(base, oracle.assumptions().len());
                return Ok(found.into_sets());
            }

            oracle.assumptions_mut().push(value.negate())?;
            match oracle.has_solution()? {
                Report::Unsatisfiable => {
                    oracle.assumptions_mut().replace_last(value)?;
                    *state = Status::Done;
                }

                Report::Satisfiable => {
                    oracle.assumptions_mut().pop()?;
                    buffer.clear_disagreements(latest_model(oracle)?);
                    oracle.shuffle_order(rng);
                }

                Report::Unknown => {
                    log::warn!(target: targets::ATOMIC_SETS, "Unknown whether {} is fixed", value.atom());
                    oracle.assumptions_mut().pop()?;
                    if self.halts() {
                        found.core = oracle.assumptions().as_vec(base, oracle.assumptions().len());
                        return Ok(found.into_sets());
                    }
                }
            }
        }

        let mut fixed_length = oracle.assumptions().len();
        found.core = oracle.assumptions().as_vec(base, fixed_length);
        log::debug!(target: targets::ATOMIC_SETS, "{} atoms fixed", found.core.len());
        monitor.add_step();

        oracle.set_selection_strategy(SelectionStrategy::Random(rng.random()));

        // The pairwise pass.
        'pivot_loop: for i in 0..count {
            if status[i] != Status::Undecided {
                continue 'pivot_loop;
            }
            if monitor.is_canceled() {
                log::info!(target: targets::ATOMIC_SETS, "Canceled at pivot {}", i + 1);
                break 'pivot_loop;
            }
            monitor.add_step();
            status[i] = Status::Done;

            let pivot = reference.slot(i);
            if pivot == 0 {
                continue 'pivot_loop;
            }
            let mut pivot_model = reference.clone();
            oracle.assumptions_mut().push(pivot)?;

            for j in (i + 1)..count {
                let partner = pivot_model.slot(j);
                if partner == 0 || status[j] != Status::Undecided {
                    continue;
                }
                if contradicted(oracle.solution_history(), pivot, partner) {
                    continue;
                }

                oracle.assumptions_mut().push(partner.negate())?;
                match oracle.has_solution()? {
                    Report::Unsatisfiable => status[j] = Status::Pending,

                    Report::Satisfiable => {
                        pivot_model.clear_disagreements(latest_model(oracle)?);
                        oracle.shuffle_order(rng);
                    }

                    Report::Unknown => {
                        log::warn!(target: targets::ATOMIC_SETS, "Unknown whether {pivot} determines {partner}");
                        if self.halts() {
                            return Ok(found.into_sets());
                        }
                    }
                }
                oracle.assumptions_mut().pop()?;
            }

            oracle.assumptions_mut().replace_last(pivot.negate())?;
            let mut flipped_model = match oracle.has_solution()? {
                Report::Satisfiable => latest_model(oracle)?.clone(),

                Report::Unsatisfiable => {
                    log::debug!(target: targets::ATOMIC_SETS, "Pivot {pivot} is fixed");
                    release_pending(&mut status);
                    oracle.assumptions_mut().replace_last(pivot)?;
                    fixed_length += 1;
                    found.core.push(pivot);
                    continue 'pivot_loop;
                }

                Report::Unknown => {
                    log::warn!(target: targets::ATOMIC_SETS, "Unknown whether {pivot} is fixed");
                    release_pending(&mut status);
                    if self.halts() {
                        return Ok(found.into_sets());
                    }
                    oracle.assumptions_mut().clear_to(fixed_length)?;
                    if self.report_singletons {
                        found.sets.push(AtomicSet::from(vec![pivot.negate()]));
                    }
                    continue 'pivot_loop;
                }
            };

            for j in (i + 1)..count {
                if status[j] != Status::Pending {
                    continue;
                }
                let partner = flipped_model.slot(j);
                if partner == 0 || partner == reference.slot(j) {
                    status[j] = Status::Undecided;
                    continue;
                }

                oracle.assumptions_mut().push(partner.negate())?;
                match oracle.has_solution()? {
                    Report::Unsatisfiable => {
                        oracle.assumptions_mut().replace_last(partner)?;
                        status[j] = Status::Done;
                    }

                    Report::Satisfiable => {
                        status[j] = Status::Undecided;
                        oracle.assumptions_mut().pop()?;
                        flipped_model.clear_disagreements(latest_model(oracle)?);
                        oracle.shuffle_order(rng);
                    }

                    Report::Unknown => {
                        log::warn!(target: targets::ATOMIC_SETS, "Unknown whether {partner} is fixed with {}", pivot.negate());
                        status[j] = Status::Undecided;
                        oracle.assumptions_mut().pop()?;
                        if self.halts() {
                            return Ok(found.into_sets());
                        }
                    }
                }
            }

            let set = AtomicSet::from(oracle.assumptions().as_vec(fixed_length, oracle.assumptions().len()));
            oracle.assumptions_mut().clear_to(fixed_length)?;
            log::trace!(target: targets::ATOMIC_SETS, "Set {set}");

            if set.len() > 1 || self.report_singletons {
                found.sets.push(set);
            }
        }

        Ok(found.into_sets())
    }
}

/// Releases every pending atom, for some later pivot.
fn release_pending(status: &mut [Status]) {
    for state in status.iter_mut() {
        if *state == Status::Pending {
            *state = Status::Undecided;
        }
    }
}

#[cfg(test)]
mod atomic_set_tests {
    use crate::{
        analysis::monitor::{CancelableMonitor, NullMonitor},
        context::Context,
        generic::random::MinimalPCG32,
    };
    use rand::SeedableRng;

    use super::*;

    fn context_with(clauses: &[&[i32]]) -> Context {
        let mut ctx = Context::from_config(Config::default());
        let clauses = clauses
            .iter()
            .map(|clause| LiteralSet::from_ints(clause).unwrap())
            .collect::<Vec<_>>();
        assert!(ctx.push(&clauses).is_ok());
        ctx
    }

    fn discover(ctx: &mut Context, analysis: &AtomicSetAnalysis) -> Vec<AtomicSet> {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        analysis.discover(ctx, &mut rng, &mut NullMonitor).unwrap()
    }

    #[test]
    fn correlation() {
        let set = AtomicSet::from(vec![-4, 2, -7]);
        assert_eq!(set.correlation(4, 7), Some(Correlation::Same));
        assert_eq!(set.correlation(2, 7), Some(Correlation::Opposite));
        assert_eq!(set.correlation(2, 3), None);
        assert_eq!(set.pivot(), Some(-4));
        assert_eq!(set.to_string(), "{-4 2 -7}");
    }

    #[test]
    fn chain_of_equivalences() {
        // 1 ↔ 2 ↔ ¬3, 4 free, and 5 dead.
        let mut ctx = context_with(&[&[-1, 2], &[1, -2], &[2, 3], &[-2, -3], &[4, 5], &[-5]]);
        let analysis = AtomicSetAnalysis::from_config(&Config::default());
        let sets = discover(&mut ctx, &analysis);

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].literals(), &[4, -5]);
        assert_eq!(sets[1].atoms().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(sets[1].correlation(1, 2), Some(Correlation::Same));
        assert_eq!(sets[1].correlation(1, 3), Some(Correlation::Opposite));
        assert!(ctx.assumptions().is_empty());
    }

    #[test]
    fn unsatisfiable() {
        let mut ctx = context_with(&[&[1], &[-1]]);
        let analysis = AtomicSetAnalysis::from_config(&Config::default());
        assert!(discover(&mut ctx, &analysis).is_empty());
    }

    #[test]
    fn singletons() {
        let mut ctx = context_with(&[&[1, 2]]);
        let mut config = Config::default();

        let analysis = AtomicSetAnalysis::from_config(&config);
        assert_eq!(discover(&mut ctx, &analysis), vec![AtomicSet::default()]);

        assert!(config.report_singletons.set(true).is_ok());
        let analysis = AtomicSetAnalysis::from_config(&config);
        let sets = discover(&mut ctx, &analysis);
        assert_eq!(sets.len(), 3);
        assert!(sets[1..].iter().all(|set| set.len() == 1));
    }

    #[test]
    fn restricted_variables() {
        let mut ctx = context_with(&[&[-1, 2], &[1, -2], &[-3, 4], &[3, -4]]);
        let analysis = AtomicSetAnalysis::from_config(&Config::default()).with_variables(LiteralSet::from_ints(&[3, 4]).unwrap());
        let sets = discover(&mut ctx, &analysis);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[1].atoms().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn under_existing_assumptions() {
        let mut ctx = context_with(&[&[-1, 2, 3], &[1, -2], &[1, -3]]);
        assert!(ctx.assumptions_mut().push(-3).is_ok());

        let analysis = AtomicSetAnalysis::from_config(&Config::default());
        let sets = discover(&mut ctx, &analysis);
        // The assumed value of 3 is fixed.
        assert_eq!(sets[0].literals(), &[-3]);
        assert_eq!(sets[1].correlation(1, 2), Some(Correlation::Same));
        assert_eq!(ctx.assumptions().literals(), &[-3]);
    }

    #[test]
    fn canceled() {
        let mut ctx = context_with(&[&[-1, 2], &[1, -2]]);
        let analysis = AtomicSetAnalysis::from_config(&Config::default());
        let mut monitor = CancelableMonitor::default();
        monitor.cancel();

        let mut rng = MinimalPCG32::seed_from_u64(0);
        let sets = analysis.discover(&mut ctx, &mut rng, &mut monitor).unwrap();
        assert_eq!(sets, vec![AtomicSet::default()]);
        assert_eq!(monitor.progress(), (1, 3));
    }

    #[test]
    fn canceled_during_core_pass() {
        // 1 and 2 agree on both models, so remain core candidates.
        let mut ctx = context_with(&[&[1], &[-1, 2], &[3, 4]]);
        let analysis = AtomicSetAnalysis::from_config(&Config::default());
        let mut monitor = CancelableMonitor::default();
        monitor.cancel();

        let mut rng = MinimalPCG32::seed_from_u64(0);
        let sets = analysis.discover(&mut ctx, &mut rng, &mut monitor).unwrap();
        assert_eq!(sets, vec![AtomicSet::default()]);
        assert_eq!(ctx.counters.total_queries, 2);
        assert_eq!(monitor.progress(), (0, 5));
        assert!(ctx.assumptions().is_empty());
    }
}
