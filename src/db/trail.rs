use crate::structures::literal::CLiteral;

/// Index to a level.
pub type LevelIndex = usize;

/// How a level was opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    /// A decision, whose negation is yet to be tried.
    Decision,

    /// The negation of an earlier decision, whose other value led to a conflict.
    Flipped,
}

/// A level: the literal which opened the level and the index of the literal on the trail.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    pub literal: CLiteral,
    pub kind: LevelKind,
    pub start: usize,
}

/// Assignments, in order.
///
/// Assignments before the first level are facts of the query: units of the formula, assumptions, and their consequences.
#[derive(Default)]
pub struct Trail {
    pub literals: Vec<CLiteral>,
    pub levels: Vec<Level>,
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment on the top level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh level with `literal` as its first assignment.
    pub fn push_level(&mut self, literal: CLiteral, kind: LevelKind) {
        self.levels.push(Level {
            literal,
            kind,
            start: self.literals.len(),
        });
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.levels.len()
    }

    /// Removes the top level, if it exists, returning the level and the assignments made on it.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the assignments.
    pub fn forget_top_level(&mut self) -> Option<(Level, Vec<CLiteral>)> {
        let level = self.levels.pop()?;
        let assignments = self.literals.split_off(level.start);
        self.q_head = self.q_head.min(self.literals.len());
        Some((level, assignments))
    }

    /// Removes every assignment, returning the assignments.
    pub fn take_assignments(&mut self) -> Vec<CLiteral> {
        self.levels.clear();
        self.q_head = 0;
        std::mem::take(&mut self.literals)
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.store_assignment(-1);
        trail.push_level(2, LevelKind::Decision);
        trail.store_assignment(3);
        trail.q_head = 3;
        assert_eq!(trail.level(), 1);

        let (level, assignments) = trail.forget_top_level().unwrap();
        assert_eq!(level.literal, 2);
        assert_eq!(assignments, vec![2, 3]);
        assert_eq!(trail.q_head, 1);
        assert_eq!(trail.literals, vec![-1]);
        assert!(trail.forget_top_level().is_none());
    }
}
