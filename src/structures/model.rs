/*!
A (partial) valuation, as found by an oracle.

A model holds one slot per atom: the slot at index *i* is for the atom *i + 1*, and holds either the literal of the atom with the polarity of its value, or `0` if the atom has no value.

Models are also used as conflict-tracking buffers during analysis.
A buffer starts as a copy of some reference model, and each slot is cleared as soon as some other model disagrees with the reference on the atom of the slot.
What remains are atoms which have had the same value in every model seen.

```rust
# use otter_anomalies::structures::model::Model;
let mut buffer = Model::from(vec![1, -2, 3]);
buffer.clear_disagreements(&Model::from(vec![1, 2, 3]));
assert_eq!(buffer.literals(), &[1, 0, 3]);
assert_eq!(buffer.value_of(2), None);
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// A valuation, indexed by atom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Model {
    slots: Vec<CLiteral>,
}

impl Model {
    /// A model of the given valuation, where `valuation[i]` is the value of the atom *i + 1*.
    pub fn from_valuation(valuation: &[Option<bool>]) -> Self {
        Model {
            slots: valuation
                .iter()
                .enumerate()
                .map(|(index, value)| match value {
                    Some(polarity) => CLiteral::new(index as Atom + 1, *polarity),
                    None => 0,
                })
                .collect(),
        }
    }

    /// The slots of the model.
    pub fn literals(&self) -> &[CLiteral] {
        &self.slots
    }

    /// A count of the slots of the model.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The literal of `atom` on the model, if the atom has some value.
    pub fn value_of(&self, atom: Atom) -> Option<CLiteral> {
        match atom {
            0 => None,
            _ => match self.slots.get(atom as usize - 1) {
                Some(0) | None => None,
                Some(literal) => Some(*literal),
            },
        }
    }

    /// The literal in the slot at `index`, or `0` if the slot is empty or missing.
    pub fn slot(&self, index: usize) -> CLiteral {
        self.slots.get(index).copied().unwrap_or(0)
    }

    /// Clears the slot of `atom`.
    pub fn clear(&mut self, atom: Atom) {
        if let Some(slot) = self.slots.get_mut((atom as usize).wrapping_sub(1)) {
            *slot = 0;
        }
    }

    /// Clears every slot on which `other` has a different value.
    ///
    /// Slots missing from `other` are treated as agreeing, as are empty slots in `other`.
    pub fn clear_disagreements(&mut self, other: &Model) {
        for (slot, other_slot) in self.slots.iter_mut().zip(other.slots.iter()) {
            if *slot != 0 && *other_slot != 0 && slot != other_slot {
                *slot = 0;
            }
        }
    }

    /// An iterator over the literals of atoms with some value.
    pub fn valued_literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.slots.iter().copied().filter(|literal| *literal != 0)
    }
}

impl From<Vec<CLiteral>> for Model {
    fn from(slots: Vec<CLiteral>) -> Self {
        Model { slots }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for literal in self.valued_literals() {
            write!(f, "{literal} ")?;
        }
        write!(f, "0")
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn from_valuation() {
        let model = Model::from_valuation(&[Some(true), None, Some(false)]);
        assert_eq!(model.literals(), &[1, 0, -3]);
        assert_eq!(model.value_of(3), Some(-3));
        assert_eq!(model.value_of(2), None);
        assert_eq!(model.value_of(0), None);
        assert_eq!(model.value_of(9), None);
    }

    #[test]
    fn disagreements_are_sticky() {
        let mut buffer = Model::from(vec![1, 2, -3, 4]);
        buffer.clear_disagreements(&Model::from(vec![1, -2, -3, 4]));
        buffer.clear_disagreements(&Model::from(vec![1, 2, -3, -4]));
        assert_eq!(buffer.literals(), &[1, 0, -3, 0]);
        assert_eq!(format!("{buffer}"), "1 -3 0");
    }
}
