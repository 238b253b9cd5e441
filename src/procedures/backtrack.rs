/*!
Methods for undoing assignments.

As the [trail](crate::db::trail::Trail) groups assignments by level, undoing a level clears the value of each assignment on the level.
The order head is revised so that no atom without a value is skipped by the next [decision](crate::procedures::decision).
*/

use crate::{
    context::GenericContext,
    db::trail::Level,
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    fn clear_values(&mut self, assignments: &[CLiteral]) {
        for literal in assignments {
            let atom = literal.atom() as usize;
            self.valuation[atom] = None;
            self.order_head = self.order_head.min(self.order_position[atom]);
        }
    }

    /// Undoes the top level, returning the level, if some level exists.
    pub fn backtrack_level(&mut self) -> Option<Level> {
        let (level, assignments) = self.trail.forget_top_level()?;
        self.clear_values(&assignments);
        Some(level)
    }

    /// Undoes every assignment, including those made before the first level.
    pub fn clear_assignments(&mut self) {
        let assignments = self.trail.take_assignments();
        self.clear_values(&assignments);
    }
}

#[cfg(test)]
mod backtrack_tests {
    use crate::{config::Config, context::Context, db::trail::LevelKind};

    #[test]
    fn undo_level() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.ensure_atom(3).is_ok());

        ctx.assign(1);
        ctx.trail.push_level(2, LevelKind::Decision);
        ctx.valuation[2] = Some(true);
        ctx.assign(-3);
        ctx.order_head = 3;

        let level = ctx.backtrack_level().unwrap();
        assert_eq!(level.literal, 2);
        assert_eq!(ctx.value_of(1), Some(true));
        assert_eq!(ctx.value_of(2), None);
        assert_eq!(ctx.value_of(3), None);
        assert_eq!(ctx.order_head, 1);

        ctx.clear_assignments();
        assert_eq!(ctx.value_of(1), None);
        assert_eq!(ctx.order_head, 0);
    }
}
