//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is an integer, with the sign of the integer indicating the polarity of the literal.
//! Zero is not a literal.
//!
//! ```rust
//! # use otter_anomalies::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

use crate::{
    structures::atom::{Atom, ATOM_MAX},
    types::err::LiteralError,
};

/// The canonical representation of a literal.
pub type CLiteral = i32;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: Sized {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The literal from an integer, if the integer is not zero and its atom is at most [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    fn checked(value: i32) -> Result<Self, LiteralError>;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// An index unique to the literal, with the literals of atom *a* at 2*a* and 2*a* + 1.
    fn index(&self) -> usize;
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn checked(value: i32) -> Result<Self, LiteralError> {
        match value {
            0 => Err(LiteralError::Zero),
            _ if value.unsigned_abs() > ATOM_MAX => Err(LiteralError::AtomTooLarge(value)),
            _ => Ok(value),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn index(&self) -> usize {
        2 * (self.atom() as usize) + (self.polarity() as usize)
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn index_pairs() {
        let p = CLiteral::new(3, true);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate().index(), 6);
    }

    #[test]
    fn zero() {
        assert_eq!(CLiteral::checked(0), Err(LiteralError::Zero));
        assert_eq!(CLiteral::checked(-4), Ok(-4));
    }

    #[test]
    fn largest_atom() {
        assert_eq!(CLiteral::checked(i32::MAX), Ok(i32::MAX));
        assert_eq!(CLiteral::checked(-i32::MAX), Ok(-i32::MAX));
        assert_eq!(CLiteral::checked(i32::MIN), Err(LiteralError::AtomTooLarge(i32::MIN)));
    }
}
