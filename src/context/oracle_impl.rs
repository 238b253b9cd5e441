use rand::seq::SliceRandom;

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseOk,
    misc::log::targets::{self},
    oracle::{AssumptionStack, Oracle, SelectionStrategy, SolutionHistory},
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        literal_set::LiteralSet,
        model::Model,
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + rand::SeedableRng> Oracle for GenericContext<R> {
    fn push(&mut self, clauses: &[LiteralSet]) -> Result<(), ErrorKind> {
        for clause in clauses {
            if let Some(atom) = clause.atoms().max() {
                self.ensure_atom(atom)?;
            }
            if self.clause_db.store(clause) == ClauseOk::Empty {
                log::info!(target: targets::ORACLE, "The formula contains the empty clause");
            }
        }
        self.state = ContextState::Input;
        Ok(())
    }

    fn fresh_variable(&mut self) -> Result<CLiteral, ErrorKind> {
        let atom = self.atoms() + 1;
        self.ensure_atom(atom)?;
        Ok(CLiteral::new(atom, true))
    }

    fn atom_count(&self) -> Atom {
        self.atoms()
    }

    fn has_solution(&mut self) -> Result<Report, ErrorKind> {
        self.solve()
    }

    fn internal_solution(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    fn assumptions(&self) -> &AssumptionStack {
        &self.assumptions
    }

    fn assumptions_mut(&mut self) -> &mut AssumptionStack {
        &mut self.assumptions
    }

    fn set_selection_strategy(&mut self, strategy: SelectionStrategy) {
        log::trace!(target: targets::ORACLE, "Selection strategy {strategy}");
        if let SelectionStrategy::Random(seed) = strategy {
            self.rng = R::seed_from_u64(seed);
        }
        self.strategy = strategy;
    }

    fn shuffle_order<G: rand::Rng + ?Sized>(&mut self, rng: &mut G) {
        self.order.shuffle(rng);
        for (position, atom) in self.order.iter().enumerate() {
            self.order_position[*atom as usize] = position;
        }
        self.order_head = 0;
    }

    fn remember_solution_history(&mut self, limit: usize) {
        self.history.start(limit);
    }

    fn solution_history(&self) -> &SolutionHistory {
        &self.history
    }
}
