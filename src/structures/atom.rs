/*!
An atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

In other words, the atoms of a formula are [1..=*m*] for some *m*, and the atom *a* is found at index *a - 1* of a [model](crate::structures::model).

Note, in the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, as literals are signed 32-bit integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
