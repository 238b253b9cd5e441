#![allow(dead_code)]

use otter_anomalies::{
    config::Config,
    context::Context,
    oracle::{AssumptionStack, Oracle, SelectionStrategy, SolutionHistory},
    reports::Report,
    structures::{atom::Atom, literal::CLiteral, literal_set::LiteralSet, model::Model},
    types::err::ErrorKind,
};

/// Installs a logger for the tests, e.g. RUST_LOG=atomic_sets=trace.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sets(clauses: &[&[i32]]) -> Vec<LiteralSet> {
    clauses
        .iter()
        .map(|clause| LiteralSet::from_ints(clause).unwrap())
        .collect()
}

pub fn context_with(clauses: &[&[i32]]) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.push(&sets(clauses)).is_ok());
    ctx
}

/// Every model of `clauses` over atoms 1..=atoms, found by enumeration.
pub fn every_model(clauses: &[&[i32]], atoms: Atom) -> Vec<Vec<CLiteral>> {
    let mut models = Vec::default();
    for bits in 0_u32..(1 << atoms) {
        let model = (1..=atoms)
            .map(|atom| match bits & (1 << (atom - 1)) {
                0 => -(atom as CLiteral),
                _ => atom as CLiteral,
            })
            .collect::<Vec<_>>();
        if clauses
            .iter()
            .all(|clause| clause.iter().any(|literal| model.contains(literal)))
        {
            models.push(model);
        }
    }
    models
}

/// A context which reports unknown on the queries of the given indices, counting from one, and on any query made under one of the given assumption stacks.
pub struct Undecided {
    pub context: Context,
    pub unknown_on: Vec<usize>,
    pub unknown_under: Vec<Vec<CLiteral>>,
    pub queries: usize,
}

impl Undecided {
    pub fn new(context: Context, unknown_on: Vec<usize>) -> Self {
        Undecided {
            context,
            unknown_on,
            unknown_under: Vec::default(),
            queries: 0,
        }
    }

    pub fn under(context: Context, unknown_under: &[&[CLiteral]]) -> Self {
        Undecided {
            context,
            unknown_on: Vec::default(),
            unknown_under: unknown_under.iter().map(|stack| stack.to_vec()).collect(),
            queries: 0,
        }
    }

    fn undecided(&self) -> bool {
        let assumptions = self.context.assumptions();
        self.unknown_on.contains(&self.queries)
            || self
                .unknown_under
                .contains(&assumptions.as_vec(0, assumptions.len()))
    }
}

impl Oracle for Undecided {
    fn push(&mut self, clauses: &[LiteralSet]) -> Result<(), ErrorKind> {
        self.context.push(clauses)
    }

    fn fresh_variable(&mut self) -> Result<CLiteral, ErrorKind> {
        self.context.fresh_variable()
    }

    fn atom_count(&self) -> Atom {
        self.context.atom_count()
    }

    fn has_solution(&mut self) -> Result<Report, ErrorKind> {
        self.queries += 1;
        match self.undecided() {
            true => Ok(Report::Unknown),
            false => self.context.has_solution(),
        }
    }

    fn internal_solution(&self) -> Option<&Model> {
        self.context.internal_solution()
    }

    fn assumptions(&self) -> &AssumptionStack {
        self.context.assumptions()
    }

    fn assumptions_mut(&mut self) -> &mut AssumptionStack {
        self.context.assumptions_mut()
    }

    fn set_selection_strategy(&mut self, strategy: SelectionStrategy) {
        self.context.set_selection_strategy(strategy)
    }

    fn shuffle_order<G: rand::Rng + ?Sized>(&mut self, rng: &mut G) {
        self.context.shuffle_order(rng)
    }

    fn remember_solution_history(&mut self, limit: usize) {
        self.context.remember_solution_history(limit)
    }

    fn solution_history(&self) -> &SolutionHistory {
        self.context.solution_history()
    }
}
