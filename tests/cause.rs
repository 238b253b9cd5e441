use otter_anomalies::{
    analysis::{
        cause::{Anomalies, CauseAnalysis},
        core_dead::CoreDeadAnalysis,
        monitor::{Monitor, NullMonitor},
    },
    config::Config,
    context::Context,
    oracle::Oracle,
    structures::literal_set::LiteralSet,
};

mod common;
use common::*;

fn dead(literals: &[i32]) -> Anomalies {
    Anomalies {
        dead_variables: LiteralSet::from_ints(literals).unwrap(),
        redundant_clauses: Vec::default(),
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn disjunction_and_equivalence() {
        init_logger();
        let clauses: &[&[i32]] = &[&[1, 2], &[-3, 4], &[3, -4]];

        let mut ctx = context_with(clauses);
        let everything = LiteralSet::from_ints(&[1, 2, 3, 4]).unwrap();
        let fixed = CoreDeadAnalysis::new(everything)
            .execute(&mut ctx, &[], &mut NullMonitor)
            .unwrap();
        assert!(fixed.is_empty());

        let mut ctx = Context::from_config(Config::default());
        let analysis = CauseAnalysis {
            anomalies: Some(Anomalies::default()),
            group_sizes: Some(vec![1, 2]),
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &sets(clauses), &mut NullMonitor).unwrap();
        assert_eq!(slots, vec![None, None]);
    }

    #[test]
    fn single_dead_atom() {
        init_logger();
        let clauses: &[&[i32]] = &[&[-1]];

        let mut ctx = context_with(clauses);
        let fixed = CoreDeadAnalysis::new(LiteralSet::from_ints(&[1]).unwrap())
            .execute(&mut ctx, &[], &mut NullMonitor)
            .unwrap();
        assert_eq!(fixed.literals(), &[-1]);

        let mut ctx = Context::from_config(Config::default());
        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1])),
            group_sizes: Some(vec![1]),
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &sets(clauses), &mut NullMonitor).unwrap();
        assert_eq!(slots, vec![Some(dead(&[-1]))]);
    }
}

mod properties {
    use super::*;

    #[test]
    fn partition() {
        init_logger();
        let mut ctx = context_with(&[&[8]]);
        let clauses = sets(&[&[1, 2], &[-1], &[3, 4], &[-3], &[-4, 5], &[6, 7]]);

        let known = LiteralSet::from_ints(&[1, 2, 3, 4, 5, 8]).unwrap();
        let analysis = CauseAnalysis {
            anomalies: Some(Anomalies {
                dead_variables: known.clone(),
                redundant_clauses: Vec::default(),
            }),
            group_sizes: Some(vec![1, 2, 2, 1]),
            relevant: None,
        };
        let slots = analysis.analyze(&mut ctx, &clauses, &mut NullMonitor).unwrap();

        assert_eq!(slots[0], None);
        assert_eq!(slots[1], Some(dead(&[-1, 2])));
        assert_eq!(slots[2], Some(dead(&[-3, 4, 5])));
        assert_eq!(slots[3], None);

        let mut union = LiteralSet::default();
        for slot in slots.iter().flatten() {
            assert!(union.variables().remove_all(&slot.dead_variables).len() == union.len());
            union = union.union(&slot.dead_variables).unwrap();
        }
        let pre_fixed = LiteralSet::from_ints(&[8]).unwrap();
        assert_eq!(union.variables(), known.remove_all(&pre_fixed));
    }

    #[test]
    fn monotonicity() {
        init_logger();
        let clauses = sets(&[&[1, 2, 3], &[-1, 2], &[1, 2], &[4, 5]]);
        let candidates = sets(&[&[1, 2, 3], &[2, 4]]);

        let analysis = CauseAnalysis {
            anomalies: Some(Anomalies {
                dead_variables: LiteralSet::default(),
                redundant_clauses: candidates.clone(),
            }),
            group_sizes: None,
            relevant: None,
        };

        let mut ctx = Context::from_config(Config::default());
        let slots = analysis.analyze(&mut ctx, &clauses, &mut NullMonitor).unwrap();
        assert_eq!(slots[2].as_ref().map(|slot| slot.redundant_clauses.clone()), Some(candidates.clone()));

        for (index, slot) in slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            let mut fresh = Context::from_config(Config::default());
            let prefix = analysis.analyze(&mut fresh, &clauses[..=index], &mut NullMonitor).unwrap();
            for clause in &slot.redundant_clauses {
                assert!(prefix.iter().flatten().any(|found| found.redundant_clauses.contains(clause)));
            }
        }
    }

    #[test]
    fn idempotence_of_fixed_sets() {
        init_logger();
        let mut ctx = context_with(&[&[1], &[-1, 2], &[3, 4], &[-3, -4]]);
        let everything = LiteralSet::from_ints(&[1, 2, 3, 4]).unwrap();

        let fixed = CoreDeadAnalysis::new(everything.clone())
            .execute(&mut ctx, &[], &mut NullMonitor)
            .unwrap();
        assert_eq!(fixed.literals(), &[1, 2]);

        assert!(ctx.assumptions_mut().extend(fixed.literals().iter().copied()).is_ok());
        let again = CoreDeadAnalysis::new(everything.remove_all(&fixed))
            .execute(&mut ctx, &[], &mut NullMonitor)
            .unwrap();
        assert!(again.is_empty());
        assert_eq!(ctx.assumptions().literals(), &[1, 2]);
    }
}

mod budgets {
    use super::*;

    /// Cancels once the given count of steps is taken.
    struct StopAfter {
        taken: usize,
        limit: usize,
    }

    impl Monitor for StopAfter {
        fn set_total_steps(&mut self, _steps: usize) {}

        fn add_step(&mut self) {
            self.taken += 1;
        }

        fn is_canceled(&self) -> bool {
            self.taken >= self.limit
        }
    }

    #[test]
    fn canceled_after_first_group() {
        init_logger();
        let mut ctx = Context::from_config(Config::default());
        let analysis = CauseAnalysis {
            anomalies: Some(dead(&[1, 2])),
            group_sizes: None,
            relevant: None,
        };
        let mut monitor = StopAfter { taken: 0, limit: 4 };

        let slots = analysis.analyze(&mut ctx, &sets(&[&[1], &[-2]]), &mut monitor).unwrap();
        assert_eq!(slots, vec![Some(dead(&[1])), None]);
    }

    #[test]
    fn undecided_queries_leave_anomalies_unattributed() {
        init_logger();
        let mut oracle = Undecided::new(Context::from_config(Config::default()), (1..1000).collect());
        let analysis = CauseAnalysis {
            anomalies: Some(Anomalies {
                dead_variables: LiteralSet::from_ints(&[1]).unwrap(),
                redundant_clauses: sets(&[&[1, 2]]),
            }),
            group_sizes: None,
            relevant: None,
        };

        let slots = analysis.analyze(&mut oracle, &sets(&[&[1], &[1, 2]]), &mut NullMonitor).unwrap();
        assert_eq!(slots, vec![None, None]);
        assert!(oracle.assumptions().is_empty());
    }
}
