/*!
Databases used by the [context](crate::context).

- The formula is stored in a [ClauseDB], with watch lists for each literal.
- The valuation under construction during a query is stored in a [Trail](trail::Trail), in order of assignment and grouped by level.
*/

pub mod trail;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        literal_set::LiteralSet,
    },
};

/// The key of a clause of two or more literals.
pub type ClauseKey = usize;

/// How a clause was stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// As a unit, asserted at the start of each query.
    Unit,

    /// As a watched clause, with the given key.
    Watched(ClauseKey),

    /// As the empty clause, and so the formula is unsatisfiable.
    Empty,
}

/// The clauses of a formula, and watch lists.
///
/// Each clause of two or more literals watches the literals at positions 0 and 1.
/// The watch list of a literal holds the keys of clauses watching the literal.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses of two or more literals, indexed by key.
    pub clauses: Vec<Vec<CLiteral>>,

    /// The literals of unit clauses.
    pub units: Vec<CLiteral>,

    /// Whether the empty clause is part of the formula.
    pub contains_empty: bool,

    /// Watch lists, indexed by [literal index](crate::structures::literal::Literal::index).
    pub watches: Vec<Vec<ClauseKey>>,
}

impl ClauseDB {
    /// Ensures there are watch lists for both literals of `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.watches.len() < required {
            self.watches.resize_with(required, Vec::default);
        }
    }

    /// Stores `clause`.
    ///
    /// # Soundness
    /// Watch lists for the atoms of the clause must exist, and the clause must be stored when no atom has a value.
    pub fn store(&mut self, clause: &LiteralSet) -> ClauseOk {
        match clause.literals() {
            [] => {
                log::debug!(target: targets::ORACLE, "Empty clause stored");
                self.contains_empty = true;
                ClauseOk::Empty
            }

            [unit] => {
                self.units.push(*unit);
                ClauseOk::Unit
            }

            literals => {
                let key = self.clauses.len();
                self.watches[literals[0].index()].push(key);
                self.watches[literals[1].index()].push(key);
                self.clauses.push(literals.to_vec());
                ClauseOk::Watched(key)
            }
        }
    }

    /// A count of all clauses stored, of any length.
    pub fn clause_count(&self) -> usize {
        self.clauses.len() + self.units.len() + self.contains_empty as usize
    }
}
