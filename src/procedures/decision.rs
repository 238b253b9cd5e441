/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through the atoms of the context, in order, for an atom which is not assigned a value, and assign either true or false.

The order begins as the natural order on atoms, and may be [shuffled](crate::oracle::Oracle::shuffle_order) to diversify models.

# Polarity

The value assigned follows the [selection strategy](crate::oracle::SelectionStrategy) of the context:
- [Positive](crate::oracle::SelectionStrategy::Positive) values true.
- [Negative](crate::oracle::SelectionStrategy::Negative) values false.
- [Random](crate::oracle::SelectionStrategy::Random) values true with probability one half, drawing from the rng of the context.
*/

use crate::{
    context::GenericContext,
    oracle::SelectionStrategy,
    structures::literal::{CLiteral, Literal},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Returns a decision, as a literal, for the first atom in the order without a value.
    /// Or, if every atom has a value, nothing.
    pub fn make_decision(&mut self) -> Option<CLiteral> {
        while let Some(&atom) = self.order.get(self.order_head) {
            if self.valuation[atom as usize].is_none() {
                let polarity = match self.strategy {
                    SelectionStrategy::Positive => true,
                    SelectionStrategy::Negative => false,
                    SelectionStrategy::Random(_) => self.rng.random_bool(0.5),
                };
                return Some(CLiteral::new(atom, polarity));
            }
            self.order_head += 1;
        }
        None
    }
}
