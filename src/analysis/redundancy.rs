/*!
Independent redundancy analysis: which candidate clauses are entailed by every other clause of a formula.

# Overview

A clause *C* is redundant if the formula without *C* entails *C*.
Equivalently, if the formula without *C*, together with the negation of each literal of *C*, is unsatisfiable.

As clauses cannot be removed from an [oracle](crate::oracle::Oracle), a clause which may need to be set aside is pushed with a guard.
That is, for a fresh atom *s* the clause *C* ∨ ¬*s* is pushed in place of *C*.
While *s* is assumed the guarded clause is equivalent to *C*, and otherwise the guarded clause is satisfied by valuing *s* false.

So, to check *C* every selector is assumed except the selector of (the first guard of) *C*.
Any other guard of the same clause remains active, and so a clause which appears twice is redundant.

```rust
# use otter_anomalies::analysis::{monitor::NullMonitor, redundancy::{ClauseGuards, RedundancyAnalysis}};
# use otter_anomalies::config::Config;
# use otter_anomalies::context::Context;
# use otter_anomalies::structures::literal_set::LiteralSet;
let mut the_context = Context::from_config(Config::default());
let p_or_q = LiteralSet::from_ints(&[1, 2]).unwrap();
let q = LiteralSet::from_ints(&[2]).unwrap();

let mut guards = ClauseGuards::default();
ClauseGuards::reserve(&mut the_context, 2).unwrap();
guards.guard(&mut the_context, &p_or_q).unwrap();
guards.guard(&mut the_context, &q).unwrap();

let analysis = RedundancyAnalysis::new(vec![p_or_q.clone(), q]);
let redundant = analysis.execute(&mut the_context, &guards, &mut NullMonitor).unwrap();
assert_eq!(redundant, vec![p_or_q]);
```
*/

use crate::{
    analysis::monitor::Monitor,
    misc::log::targets::{self},
    oracle::{AssumptionScope, Oracle},
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        literal_set::LiteralSet,
    },
    types::err::ErrorKind,
};

/// Clauses pushed with a guard, and the selector of each guard, in the order pushed.
#[derive(Clone, Debug, Default)]
pub struct ClauseGuards {
    guards: Vec<(LiteralSet, CLiteral)>,
}

impl ClauseGuards {
    /// Ensures every atom up to `atom` is known to `oracle`, so that later selectors are distinct from these atoms.
    pub fn reserve<O: Oracle>(oracle: &mut O, atom: Atom) -> Result<(), ErrorKind> {
        while oracle.atom_count() < atom {
            oracle.fresh_variable()?;
        }
        Ok(())
    }

    /// Pushes `clause` to `oracle` with a fresh guard, returning the selector of the guard.
    pub fn guard<O: Oracle>(&mut self, oracle: &mut O, clause: &LiteralSet) -> Result<CLiteral, ErrorKind> {
        let selector = oracle.fresh_variable()?;
        let guarded = clause.with(selector.negate())?;
        oracle.push(&[guarded])?;

        log::trace!(target: targets::REDUNDANCY, "Guard {clause} with {selector}");
        self.guards.push((clause.clone(), selector));
        Ok(selector)
    }

    /// Every selector, activating every guarded clause.
    pub fn activations(&self) -> Vec<CLiteral> {
        self.guards.iter().map(|(_, selector)| *selector).collect()
    }

    /// Every selector except the selector of the first guard of `clause`, if `clause` has a guard.
    pub fn activations_without(&self, clause: &LiteralSet) -> Vec<CLiteral> {
        let excluded = self.guards.iter().position(|(guarded, _)| guarded == clause);
        self.guards
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != excluded)
            .map(|(_, (_, selector))| *selector)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// Independent redundancy analysis over some candidate clauses.
#[derive(Clone, Debug, Default)]
pub struct RedundancyAnalysis {
    candidates: Vec<LiteralSet>,
}

impl RedundancyAnalysis {
    pub fn new(candidates: Vec<LiteralSet>) -> Self {
        RedundancyAnalysis { candidates }
    }

    pub fn candidates(&self) -> &[LiteralSet] {
        &self.candidates
    }

    /// The redundant candidates, in the order given.
    ///
    /// A candidate whose check is undecided is not redundant.
    pub fn execute<O: Oracle, M: Monitor>(
        &self,
        oracle: &mut O,
        guards: &ClauseGuards,
        monitor: &mut M,
    ) -> Result<Vec<LiteralSet>, ErrorKind> {
        monitor.set_total_steps(self.candidates.len());
        let mut redundant = Vec::default();

        for clause in &self.candidates {
            if monitor.is_canceled() {
                log::info!(target: targets::REDUNDANCY, "Canceled with {} redundant", redundant.len());
                break;
            }

            let mut scope = AssumptionScope::new(oracle);
            scope.assumptions_mut().extend(guards.activations_without(clause))?;
            scope.assumptions_mut().extend(clause.negate().literals().iter().copied())?;

            match scope.has_solution()? {
                Report::Unsatisfiable => {
                    log::trace!(target: targets::REDUNDANCY, "Redundant {clause}");
                    redundant.push(clause.clone());
                }
                Report::Satisfiable => {}
                Report::Unknown => log::warn!(target: targets::REDUNDANCY, "Unknown whether {clause} is redundant"),
            }

            monitor.add_step();
        }

        log::debug!(target: targets::REDUNDANCY, "{} of {} candidates redundant", redundant.len(), self.candidates.len());
        Ok(redundant)
    }
}
