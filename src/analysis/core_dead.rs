/*!
Core/dead analysis: which candidate atoms have a single value in every model.

# Overview

Two models are found, one with a preference for true and one with a preference for false.
Any candidate valued differently by the two is free, and is not examined further.

For each remaining candidate *x*, with value *v* on the first model, the negation of *v* is assumed:
- If the query is unsatisfiable, *x* is fixed to *v*.
  The assumption is then replaced by *v* itself, as every later query may take *x* to have value *v*.
- If the query is satisfiable, any candidate valued differently on the model found is free.
- If the query is undecided, *x* is left unfixed.

```rust
# use otter_anomalies::analysis::{core_dead::CoreDeadAnalysis, monitor::NullMonitor};
# use otter_anomalies::config::Config;
# use otter_anomalies::context::Context;
# use otter_anomalies::oracle::Oracle;
# use otter_anomalies::structures::literal_set::LiteralSet;
let mut the_context = Context::from_config(Config::default());
let clauses = vec![
    LiteralSet::from_ints(&[-1]).unwrap(),
    LiteralSet::from_ints(&[1, 2]).unwrap(),
    LiteralSet::from_ints(&[3, 4]).unwrap(),
];
assert!(the_context.push(&clauses).is_ok());

let analysis = CoreDeadAnalysis::new(LiteralSet::from_ints(&[1, 2, 3, 4]).unwrap());
let fixed = analysis.execute(&mut the_context, &[], &mut NullMonitor).unwrap();
assert_eq!(fixed.literals(), &[-1, 2]);
```
*/

use crate::{
    analysis::monitor::Monitor,
    misc::log::targets::{self},
    oracle::{AssumptionScope, Oracle, SelectionStrategy},
    reports::Report,
    structures::{
        literal::{CLiteral, Literal},
        literal_set::LiteralSet,
        model::Model,
    },
    types::err::{ErrorKind, OracleError},
};

/// Core/dead analysis over some candidate atoms.
#[derive(Clone, Debug, Default)]
pub struct CoreDeadAnalysis {
    candidates: LiteralSet,
}

impl CoreDeadAnalysis {
    /// An analysis of the atoms of `candidates`, regardless of polarity.
    pub fn new(candidates: LiteralSet) -> Self {
        CoreDeadAnalysis {
            candidates: candidates.variables(),
        }
    }

    pub fn candidates(&self) -> &LiteralSet {
        &self.candidates
    }

    /// The fixed candidates, as literals with the value of the candidate, under `activations` and any assumptions already made.
    ///
    /// An unsatisfiable or undecided formula has no fixed candidates, as no value is certain.
    pub fn execute<O: Oracle, M: Monitor>(
        &self,
        oracle: &mut O,
        activations: &[CLiteral],
        monitor: &mut M,
    ) -> Result<LiteralSet, ErrorKind> {
        if self.candidates.is_empty() {
            return Ok(LiteralSet::default());
        }
        monitor.set_total_steps(self.candidates.len() + 2);

        let mut scope = AssumptionScope::new(oracle);
        scope.assumptions_mut().extend(activations.iter().copied())?;

        scope.set_selection_strategy(SelectionStrategy::Positive);
        let mut buffer = match base_model(&mut *scope)? {
            Some(model) => model,
            None => return Ok(LiteralSet::default()),
        };
        monitor.add_step();

        scope.set_selection_strategy(SelectionStrategy::Negative);
        let second = base_model(&mut *scope)?;
        scope.set_selection_strategy(SelectionStrategy::Positive);
        if let Some(second) = second {
            buffer.clear_disagreements(&second);
        }
        monitor.add_step();

        let mut fixed = Vec::default();

        for atom in self.candidates.atoms() {
            if monitor.is_canceled() {
                log::info!(target: targets::CORE_DEAD, "Canceled with {} fixed", fixed.len());
                break;
            }
            monitor.add_step();

            let Some(value) = buffer.value_of(atom) else {
                continue;
            };

            scope.assumptions_mut().push(value.negate())?;
            match scope.has_solution()? {
                Report::Unsatisfiable => {
                    log::trace!(target: targets::CORE_DEAD, "Fixed {value}");
                    scope.assumptions_mut().replace_last(value)?;
                    fixed.push(value);
                }

                Report::Satisfiable => {
                    scope.assumptions_mut().pop()?;
                    match scope.internal_solution() {
                        Some(model) => buffer.clear_disagreements(model),
                        None => return Err(OracleError::Corrupt.into()),
                    }
                }

                Report::Unknown => {
                    log::warn!(target: targets::CORE_DEAD, "Unknown whether {atom} is fixed");
                    scope.assumptions_mut().pop()?;
                }
            }
        }

        log::debug!(target: targets::CORE_DEAD, "{} of {} candidates fixed", fixed.len(), self.candidates.len());
        Ok(LiteralSet::new(fixed)?)
    }
}

/// A model under the current assumptions, or nothing with a warning if there is no model or the query is undecided.
pub(crate) fn base_model<O: Oracle>(oracle: &mut O) -> Result<Option<Model>, ErrorKind> {
    match oracle.find_solution() {
        Ok(model) => Ok(Some(model)),
        Err(ErrorKind::Oracle(OracleError::Unsatisfiable)) => {
            log::warn!(target: targets::CORE_DEAD, "No model, so nothing is fixed");
            Ok(None)
        }
        Err(ErrorKind::Oracle(OracleError::Unknown)) => {
            log::warn!(target: targets::CORE_DEAD, "Unknown whether there is a model");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod core_dead_tests {
    use crate::{analysis::monitor::NullMonitor, config::Config, context::Context};

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

    #[test]
    fn implied_values() {
        // 1 is core, and 1 implies 2 implies -3.
        let mut ctx = context_with(&[&[1], &[-1, 2], &[-2, -3], &[4, 5]]);
        let analysis = CoreDeadAnalysis::new(LiteralSet::from_ints(&[1, 2, 3, 4, 5]).unwrap());
        let fixed = analysis.execute(&mut ctx, &[], &mut NullMonitor).unwrap();
        assert_eq!(fixed.literals(), &[1, 2, -3]);
        assert!(ctx.assumptions().is_empty());
    }

    #[test]
    fn under_activations() {
        let mut ctx = context_with(&[&[-1, 2], &[-1, 3]]);
        let analysis = CoreDeadAnalysis::new(LiteralSet::from_ints(&[2, 3]).unwrap());

        assert!(analysis.execute(&mut ctx, &[], &mut NullMonitor).unwrap().is_empty());

        let fixed = analysis.execute(&mut ctx, &[1], &mut NullMonitor).unwrap();
        assert_eq!(fixed.literals(), &[2, 3]);
        assert!(ctx.assumptions().is_empty());
    }

    #[test]
    fn unsatisfiable_base() {
        let mut ctx = context_with(&[&[1], &[-1]]);
        let analysis = CoreDeadAnalysis::new(LiteralSet::from_ints(&[1]).unwrap());
        assert!(analysis.execute(&mut ctx, &[], &mut NullMonitor).unwrap().is_empty());
    }

    #[test]
    fn undecided_is_not_fixed() {
        let mut ctx = context_with(&[&[1], &[2, 3]]);
        assert!(ctx.config.decision_limit.set(Some(0)).is_ok());
        let analysis = CoreDeadAnalysis::new(LiteralSet::from_ints(&[1, 2]).unwrap());

        // Without decisions no model is found, and so nothing is fixed.
        assert!(analysis.execute(&mut ctx, &[], &mut NullMonitor).unwrap().is_empty());
    }
}
