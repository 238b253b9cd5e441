//! Incremental, assumption-driven analysis of boolean formulas in conjunctive normal form.
//!
//! otter_anomalies answers two structural questions about a formula, as asked during the analysis of feature models:
//! - *Where does an anomaly come from?*
//!   Given the core/dead atoms and the redundant clauses of a full formula, [cause analysis](crate::analysis::cause) finds the first group of clauses (in the order the formula is revealed) after which each anomaly appears.
//! - *Which atoms move together?*
//!   [Atomic set discovery](crate::analysis::atomic_sets) partitions atoms into groups whose values are perfectly correlated (or anti-correlated) across every satisfying valuation.
//!
//! # Orientation
//!
//! Both analyses drive a stateful satisfiability oracle through many small queries.
//! The [oracle] module gives the contract consumed by the analyses: an [assumption stack](crate::oracle::AssumptionStack), a tri-state [report](crate::reports::Report), selection strategies, order shuffling and a bounded [solution history](crate::oracle::SolutionHistory).
//!
//! Any incremental solver may implement [Oracle](crate::oracle::Oracle).
//! A small reference implementation is bundled as the [context], a DPLL search over watched clauses which is sufficient for moderately sized formulas and for tests.
//!
//! Useful starting points, then, may be:
//! - The [analysis] module for the two engines and the sub-analyses they are built from.
//! - The [structures] for literals, literal sets, models and clause groups.
//! - The [configuration](crate::config) to see which budgets and policies are supported.
//!
//! # Example
//!
//! Exactly one of `x` and `y` holds, and so `x` and `y` form an atomic set with opposite polarity.
//!
//! ```rust
//! # use otter_anomalies::analysis::{atomic_sets::{AtomicSetAnalysis, Correlation}, monitor::NullMonitor};
//! # use otter_anomalies::config::Config;
//! # use otter_anomalies::context::Context;
//! # use otter_anomalies::generic::random::MinimalPCG32;
//! # use otter_anomalies::oracle::Oracle;
//! # use otter_anomalies::structures::literal_set::LiteralSet;
//! # use rand::SeedableRng;
//! let config = Config::default();
//! let mut the_context = Context::from_config(config.clone());
//!
//! let clauses = vec![
//!     LiteralSet::from_ints(&[1, 2]).unwrap(),
//!     LiteralSet::from_ints(&[-1, -2]).unwrap(),
//! ];
//! assert!(the_context.push(&clauses).is_ok());
//!
//! let mut rng = MinimalPCG32::seed_from_u64(7);
//! let analysis = AtomicSetAnalysis::from_config(&config);
//! let sets = analysis.discover(&mut the_context, &mut rng, &mut NullMonitor).unwrap();
//!
//! // The core/dead set comes first, and is empty.
//! assert!(sets[0].is_empty());
//! assert_eq!(sets[1].correlation(1, 2), Some(Correlation::Opposite));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, each with a target from [misc::log].
//! No log implementation is provided.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Attribution of anomalies to groups can be followed with `RUST_LOG=cause=debug …`
//! - Queries left undecided by a budget are reported with `RUST_LOG=warn …`

#![allow(clippy::collapsible_else_if)]

pub mod analysis;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod oracle;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
