/*!
A context method to aid boolean constraint propagation.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal, which is now false, and for each clause:
- Keeping the watch, if the other watched literal is true.
- Moving the watch to some literal which is not false, if there is one.
- Otherwise, assigning the other watched literal, or noting a conflict if the other watched literal is also false.

The watched literals of a clause are kept at positions 0 and 1 of the clause.

# Complications

The watch list of the false literal is taken from the clause database during traversal, and restored afterwards.
This is safe, as a watch is never moved to a false literal, and so the taken list is never extended during traversal.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::BCPError,
};

/// The value of `literal` on `valuation`.
fn literal_value(valuation: &[Option<bool>], literal: CLiteral) -> Option<bool> {
    valuation[literal.atom() as usize].map(|value| value == literal.polarity())
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Values the atom of `literal` so that the literal is true, and stores the assignment on the trail.
    ///
    /// # Soundness
    /// The atom of the literal must not have a value.
    pub fn assign(&mut self, literal: CLiteral) {
        log::trace!(target: targets::PROPAGATION, "Assign {literal}");
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.trail.store_assignment(literal);
    }

    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), BCPError> {
        let false_literal = literal.negate();
        let mut watch_list = std::mem::take(&mut self.clause_db.watches[false_literal.index()]);

        let mut result = Ok(());
        let mut index = 0;

        'watch_loop: while index < watch_list.len() {
            let key: ClauseKey = watch_list[index];
            let clause = &mut self.clause_db.clauses[key];

            if clause[0] == false_literal {
                clause.swap(0, 1);
            }

            let other = clause[0];
            if literal_value(&self.valuation, other) == Some(true) {
                index += 1;
                continue 'watch_loop;
            }

            for position in 2..clause.len() {
                if literal_value(&self.valuation, clause[position]) != Some(false) {
                    clause.swap(1, position);
                    let fresh_watch = clause[1];
                    self.clause_db.watches[fresh_watch.index()].push(key);
                    watch_list.swap_remove(index);
                    continue 'watch_loop;
                }
            }

            match literal_value(&self.valuation, other) {
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {key} from {literal}");
                    result = Err(BCPError::Conflict(key));
                    break 'watch_loop;
                }

                None => {
                    self.valuation[other.atom() as usize] = Some(other.polarity());
                    self.trail.store_assignment(other);
                }

                Some(true) => {}
            }

            index += 1;
        }

        self.clause_db.watches[false_literal.index()] = watch_list;
        result
    }

    /// Propagates assignments on the trail until every assignment is propagated or a conflict is found.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some(&literal) = self.trail.literals.get(self.trail.q_head) {
            self.bcp(literal)?;
            self.trail.q_head += 1;
        }
        Ok(())
    }
}
