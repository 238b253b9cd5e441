//! Abstract structures used by the analyses, and their representation.
//!
//! - [Atoms](atom) are positive integers.
//! - [Literals](literal) are signed integers, the sign giving polarity.
//! - [Literal sets](literal_set) are sorted by atom, with each atom at most once, and stand for both clauses and collections of (signed) atoms.
//! - [Models](model) are valuations found by an oracle, indexed by atom.
//! - [Clause groups](groups) partition an ordered list of clauses.

pub mod atom;
pub mod groups;
pub mod literal;
pub mod literal_set;
pub mod model;
