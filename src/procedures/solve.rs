//! Decides the formula of a context under the assumptions of the context.
//!
//! # Overview
//!
//! Each query begins from an empty valuation.
//! The units of the formula are asserted, then each assumption, in order, and the consequences of these are propagated.
//! Any conflict at this point is independent of any decision, and so the query is unsatisfiable.
//!
//! Following this, the query is a depth-first search over decisions:
//!
//! ```none
//!            +---------------+
//!   +------->| make_decision |-----> satisfiable, if every atom has a value
//!   |        +---------------+
//!   |                |
//!   |                ⌄
//!   |          +-----------+
//!   +----------| propagate |
//!   |          +-----------+
//!   |                |
//!   |                | on a conflict
//!   |                ⌄
//!   |       +-----------------+
//!   +-------| flip a decision |-----> unsatisfiable, if every decision is flipped
//!           +-----------------+
//! ```
//!
//! A decision is flipped by undoing each level down to and including the most recent level opened by a decision, and opening a level with the negation of the decision.
//! A level opened by a flip is never flipped again, as both values of the atom have then been tried.
//!
//! # Budget
//!
//! Decisions and conflicts each count as a step of the query.
//! Before each decision the steps taken are checked against the [decision limit](crate::config::Config::decision_limit), and the time taken against the [time limit](crate::config::Config::time_limit).
//! If either limit is reached the query is [Unknown](crate::reports::Report::Unknown).
//!
//! Budgets are checked only when a decision is required, and so a query decided by propagation alone is decided under any budget.

use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    db::trail::LevelKind,
    misc::log::targets::{self},
    reports::Report,
    structures::{
        literal::{CLiteral, Literal},
        model::Model,
    },
    types::err::{BCPError, ErrorKind},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Determines the satisfiability of the formula under the current assumptions.
    ///
    /// If satisfiable, the model found is kept until the next query and noted in the solution history.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let query_time = Instant::now();
        self.counters.total_queries += 1;
        self.counters.query_steps = 0;

        self.clear_assignments();
        self.model = None;

        let report = self.search(query_time)?;

        if report == Report::Satisfiable {
            let model = Model::from_valuation(&self.valuation[1..]);
            self.history.record(&model);
            self.model = Some(model);
        }
        self.clear_assignments();

        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Unknown,
        };

        self.counters.time += query_time.elapsed();
        log::debug!(target: targets::ORACLE, "Query {} with {} assumptions: {report}", self.counters.total_queries, self.assumptions.len());
        Ok(report)
    }

    /// Asserts `literal` as a fact of the query, returning false if the literal is already false.
    fn assert_fact(&mut self, literal: CLiteral) -> bool {
        match self.literal_value(literal) {
            Some(value) => value,
            None => {
                self.assign(literal);
                true
            }
        }
    }

    /// Opens a fresh level with `literal`.
    fn open_level(&mut self, literal: CLiteral, kind: LevelKind) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.push_level(literal, kind);
    }

    fn budget_exhausted(&self, query_time: &Instant) -> bool {
        if let Some(limit) = self.config.decision_limit.value {
            if self.counters.query_steps >= limit {
                log::warn!(target: targets::ORACLE, "Decision limit of {limit} reached");
                return true;
            }
        }
        if let Some(limit) = self.config.time_limit.value {
            if query_time.elapsed() > limit {
                log::warn!(target: targets::ORACLE, "Time limit of {limit:?} reached");
                return true;
            }
        }
        false
    }

    fn search(&mut self, query_time: Instant) -> Result<Report, ErrorKind> {
        if self.clause_db.contains_empty {
            return Ok(Report::Unsatisfiable);
        }

        for index in 0..self.clause_db.units.len() {
            let unit = self.clause_db.units[index];
            if !self.assert_fact(unit) {
                return Ok(Report::Unsatisfiable);
            }
        }

        for index in 0..self.assumptions.len() {
            let assumption = self.assumptions.literals()[index];
            self.ensure_atom(assumption.atom())?;
            if !self.assert_fact(assumption) {
                log::trace!(target: targets::ORACLE, "Assumption {assumption} is false");
                return Ok(Report::Unsatisfiable);
            }
        }

        if self.propagate().is_err() {
            return Ok(Report::Unsatisfiable);
        }

        'search_loop: loop {
            let Some(decision) = self.make_decision() else {
                return Ok(Report::Satisfiable);
            };

            if self.budget_exhausted(&query_time) {
                return Ok(Report::Unknown);
            }

            log::trace!(target: targets::ORACLE, "Decision {decision}");
            self.counters.query_steps += 1;
            self.counters.total_decisions += 1;
            self.open_level(decision, LevelKind::Decision);

            while let Err(BCPError::Conflict(_)) = self.propagate() {
                self.counters.query_steps += 1;
                self.counters.total_conflicts += 1;

                'flip_loop: loop {
                    match self.backtrack_level() {
                        None => return Ok(Report::Unsatisfiable),

                        Some(level) if level.kind == LevelKind::Decision => {
                            self.open_level(level.literal.negate(), LevelKind::Flipped);
                            break 'flip_loop;
                        }

                        Some(_) => {}
                    }
                }
            }

            continue 'search_loop;
        }
    }
}
