/*!
Cause analysis: the first group of clauses after which each known anomaly of a formula appears.

# Overview

Given the anomalies of a full formula --- its core/dead atoms and its redundant clauses --- the clauses of the formula are revealed to an oracle one group at a time, and after each group the anomalies not yet seen are checked for.
As both core/dead atoms and redundant clauses persist as clauses are added, each anomaly is attributed to exactly one group, and a single sweep over the groups suffices.

Before any group is revealed, anomalies already present in the formula of the oracle are set aside.
These are never attributed.

During the sweep:
- The sweep ends early once every anomaly is attributed.
- A group which is not relevant is revealed, but not checked.
- Clauses which are candidates for redundancy are revealed with a [guard](crate::analysis::redundancy::ClauseGuards), so that each may be set aside when checking whether the clause is redundant.

The analysis returns one slot for each group.
A slot is empty if nothing was attributed to the group.

```rust
# use otter_anomalies::analysis::{cause::{Anomalies, CauseAnalysis}, monitor::NullMonitor};
# use otter_anomalies::config::Config;
# use otter_anomalies::context::Context;
# use otter_anomalies::structures::literal_set::LiteralSet;
let mut the_context = Context::from_config(Config::default());
let clauses = vec![
    LiteralSet::from_ints(&[-1, 2]).unwrap(),
    LiteralSet::from_ints(&[-2, 3]).unwrap(),
    LiteralSet::from_ints(&[-1, 3]).unwrap(),
    LiteralSet::from_ints(&[-3]).unwrap(),
];

let analysis = CauseAnalysis {
    anomalies: Some(Anomalies {
        dead_variables: LiteralSet::from_ints(&[1, 2, 3]).unwrap(),
        redundant_clauses: vec![clauses[2].clone()],
    }),
    group_sizes: Some(vec![2, 1, 1]),
    relevant: None,
};

let slots = analysis.analyze(&mut the_context, &clauses, &mut NullMonitor).unwrap();

// The third clause follows from the first two.
assert_eq!(slots[0].as_ref().unwrap().redundant_clauses, vec![clauses[2].clone()]);
assert!(slots[1].is_none());
assert_eq!(slots[2].as_ref().unwrap().dead_variables.literals(), &[-1, -2, -3]);
```
*/

use crate::{
    analysis::{
        core_dead::CoreDeadAnalysis,
        monitor::{Monitor, NullMonitor},
        redundancy::{ClauseGuards, RedundancyAnalysis},
    },
    misc::log::targets::{self},
    oracle::Oracle,
    structures::{groups::ClauseGroups, literal_set::LiteralSet},
    types::err::{ErrorKind, InputError},
};

/// Anomalies of a formula, or of a group of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Anomalies {
    /// Core/dead atoms, as literals with their fixed value.
    pub dead_variables: LiteralSet,

    /// Redundant clauses.
    pub redundant_clauses: Vec<LiteralSet>,
}

impl Anomalies {
    pub fn is_empty(&self) -> bool {
        self.dead_variables.is_empty() && self.redundant_clauses.is_empty()
    }
}

/// Cause analysis of some known anomalies.
#[derive(Clone, Debug, Default)]
pub struct CauseAnalysis {
    /// The anomalies of the full formula.
    /// If absent, there is nothing to attribute.
    pub anomalies: Option<Anomalies>,

    /// The sizes of the groups in which clauses are revealed.
    /// If absent, each clause is a group.
    pub group_sizes: Option<Vec<usize>>,

    /// Which groups may introduce an anomaly.
    /// If absent, every group may.
    pub relevant: Option<Vec<bool>>,
}

/// The slot of `index`, created if empty.
fn slot(slots: &mut [Option<Anomalies>], index: usize) -> &mut Anomalies {
    slots[index].get_or_insert_with(Anomalies::default)
}

impl CauseAnalysis {
    /// Attributes the anomalies to groups of `clauses`, revealing `clauses` to `oracle` in the process.
    ///
    /// The input is checked before any query is made.
    /// If canceled, the attribution made so far is returned.
    pub fn analyze<O: Oracle, M: Monitor>(
        &self,
        oracle: &mut O,
        clauses: &[LiteralSet],
        monitor: &mut M,
    ) -> Result<Vec<Option<Anomalies>>, ErrorKind> {
        let groups = match &self.group_sizes {
            Some(sizes) => ClauseGroups::new(sizes.clone(), clauses.len())?,
            None => ClauseGroups::singletons(clauses.len()),
        };
        if let Some(flags) = &self.relevant {
            if flags.len() != groups.len() {
                return Err(InputError::RelevanceLength {
                    groups: groups.len(),
                    flags: flags.len(),
                }
                .into());
            }
        }

        let mut slots: Vec<Option<Anomalies>> = vec![None; groups.len()];
        let Some(anomalies) = &self.anomalies else {
            return Ok(slots);
        };
        monitor.set_total_steps(groups.len() + 3);

        let top_atom = clauses
            .iter()
            .chain(anomalies.redundant_clauses.iter())
            .chain(std::iter::once(&anomalies.dead_variables))
            .flat_map(|set| set.atoms())
            .max()
            .unwrap_or(0);
        ClauseGuards::reserve(oracle, top_atom)?;

        let mut remaining_variables = anomalies.dead_variables.variables();
        let mut remaining_clauses = anomalies.redundant_clauses.clone();
        monitor.add_step();

        if !remaining_clauses.is_empty() {
            let redundant = RedundancyAnalysis::new(remaining_clauses.clone()).execute(
                oracle,
                &ClauseGuards::default(),
                &mut NullMonitor,
            )?;
            log::info!(target: targets::CAUSE, "{} clauses redundant before any group", redundant.len());
            remaining_clauses.retain(|clause| !redundant.contains(clause));
        }
        monitor.add_step();

        if !remaining_variables.is_empty() {
            let fixed = CoreDeadAnalysis::new(remaining_variables.clone()).execute(oracle, &[], &mut NullMonitor)?;
            log::info!(target: targets::CAUSE, "{} atoms fixed before any group", fixed.len());
            remaining_variables = remaining_variables.remove_all(&fixed);
        }
        monitor.add_step();

        let mut guards = ClauseGuards::default();

        for (index, range) in groups.ranges().enumerate() {
            if remaining_variables.is_empty() && remaining_clauses.is_empty() {
                log::info!(target: targets::CAUSE, "Every anomaly attributed by group {index}");
                break;
            }
            if monitor.is_canceled() {
                log::info!(target: targets::CAUSE, "Canceled before group {index}");
                break;
            }

            let mut unguarded = Vec::default();
            for clause in &clauses[range] {
                match remaining_clauses.contains(clause) {
                    true => {
                        guards.guard(oracle, clause)?;
                    }
                    false => unguarded.push(clause.clone()),
                }
            }
            oracle.push(&unguarded)?;

            let relevant = self.relevant.as_ref().map_or(true, |flags| flags[index]);
            if relevant {
                let activations = guards.activations();

                if !remaining_variables.is_empty() {
                    let fixed = CoreDeadAnalysis::new(remaining_variables.clone()).execute(
                        oracle,
                        &activations,
                        &mut NullMonitor,
                    )?;
                    if !fixed.is_empty() {
                        log::debug!(target: targets::CAUSE, "Group {index} fixes {fixed}");
                        remaining_variables = remaining_variables.remove_all(&fixed);
                        slot(&mut slots, index).dead_variables = fixed;
                    }
                }

                if !remaining_clauses.is_empty() {
                    let redundant = RedundancyAnalysis::new(remaining_clauses.clone()).execute(
                        oracle,
                        &guards,
                        &mut NullMonitor,
                    )?;
                    if !redundant.is_empty() {
                        log::debug!(target: targets::CAUSE, "Group {index} makes {} clauses redundant", redundant.len());
                        remaining_clauses.retain(|clause| !redundant.contains(clause));
                        slot(&mut slots, index).redundant_clauses = redundant;
                    }
                }
            }

            monitor.add_step();
        }

        if !remaining_variables.is_empty() || !remaining_clauses.is_empty() {
            log::warn!(
                target: targets::CAUSE,
                "Unattributed: {} atoms and {} clauses",
                remaining_variables.len(),
                remaining_clauses.len()
            );
        }

        Ok(slots)
    }
}

#[cfg(test)]
mod cause_tests {
    use crate::{analysis::monitor::CancelableMonitor, config::Config, context::Context};

    use super::*;

    fn sets(clauses: &[&[i32]]) -> Vec<LiteralSet> {
        clauses
            .iter()
            .map(|clause| LiteralSet::from_ints(clause).unwrap())
            .collect()
    }

    fn dead(literals: &[i32]) -> Anomalies {
        Anomalies {
            dead_variables: LiteralSet::from_ints(literals).unwrap(),
            redundant_clauses: Vec::default(),
        }
    }

    #[test]
    fn invalid_input() {
        let mut ctx = Context::from_config(Config::default());
        let clauses = sets(&[&[1], &[2]]);

        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1])),
            group_sizes: Some(vec![1]),
            relevant: None,
        };
        assert_eq!(
            analysis.analyze(&mut ctx, &clauses, &mut NullMonitor),
            Err(ErrorKind::Input(InputError::GroupSizeMismatch { expected: 2, found: 1 }))
        );

        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1])),
            group_sizes: None,
            relevant: Some(vec![true]),
        };
        assert_eq!(
            analysis.analyze(&mut ctx, &clauses, &mut NullMonitor),
            Err(ErrorKind::Input(InputError::RelevanceLength { groups: 2, flags: 1 }))
        );
        assert_eq!(ctx.counters.total_queries, 0);
    }

    #[test]
    fn no_anomalies() {
        let mut ctx = Context::from_config(Config::default());
        let analysis = CauseAnalysis::default();
        let slots = analysis.analyze(&mut ctx, &sets(&[&[1], &[-1]]), &mut NullMonitor).unwrap();
        assert_eq!(slots, vec![None, None]);
        assert_eq!(ctx.counters.total_queries, 0);
    }

    #[test]
    fn fixed_before_any_group() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.push(&sets(&[&[3]])).is_ok());

        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1, 3])),
            group_sizes: None,
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &sets(&[&[2], &[-2, 1]]), &mut NullMonitor).unwrap();
        assert_eq!(slots[0], None);
        assert_eq!(slots[1], Some(dead(&[1])));
    }

    #[test]
    fn irrelevant_group_defers() {
        let mut ctx = Context::from_config(Config::default());
        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[-1])),
            group_sizes: None,
            relevant: Some(vec![false, true]),
        };
        let slots = analysis.analyze(&mut ctx, &sets(&[&[-1], &[2, 3]]), &mut NullMonitor).unwrap();
        assert_eq!(slots, vec![None, Some(dead(&[-1]))]);
    }

    #[test]
    fn redundant_by_later_group() {
        let mut ctx = Context::from_config(Config::default());
        let clauses = sets(&[&[1, 2, 3], &[1, 2], &[4, 5]]);
        let analysis = CauseAnalysis {
            anomalies: Some(Anomalies {
                dead_variables: LiteralSet::default(),
                redundant_clauses: vec![clauses[0].clone()],
            }),
            group_sizes: None,
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &clauses, &mut NullMonitor).unwrap();
        assert_eq!(slots[0], None);
        assert_eq!(slots[1].as_ref().map(|slot| slot.redundant_clauses.clone()), Some(vec![clauses[0].clone()]));
        assert_eq!(slots[2], None);
        assert!(ctx.assumptions().is_empty());
    }

    #[test]
    fn canceled() {
        let mut ctx = Context::from_config(Config::default());
        let mut monitor = CancelableMonitor::default();
        monitor.cancel();

        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1])),
            group_sizes: None,
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &sets(&[&[1]]), &mut monitor).unwrap();
        assert_eq!(slots, vec![None]);
        assert_eq!(monitor.progress(), (3, 4));
    }
}
