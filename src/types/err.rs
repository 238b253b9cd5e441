//! Error types used in the library.
//!
//! - Some of these are expected outcomes of a query --- e.g. [OracleError::Unsatisfiable] is returned when a model is requested of an unsatisfiable formula.
//!   Analyses treat these as information, not as failure.
//! - Some are input errors --- e.g. a [GroupSizeMismatch](InputError::GroupSizeMismatch) is returned before any query is made.
//! - Some are internal --- e.g. [OracleError::Corrupt], after which the state of an oracle should not be trusted.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::ClauseKey,
    structures::{atom::Atom, literal::CLiteral},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Assumption(AssumptionError),
    Config(ConfigError),
    Input(InputError),
    Literal(LiteralError),
    Oracle(OracleError),
}

/// Misuse of an [assumption stack](crate::oracle::AssumptionStack).
///
/// As the stack mirrors what an oracle assumes, each of these indicates a divergence between the two.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssumptionError {
    /// An attempt to pop or replace the last assumption of an empty stack.
    EmptyStack,

    /// An attempt to truncate the stack to a mark above its length.
    MarkAboveLength { mark: usize, length: usize },

    /// An attempt to assume the (invalid) zero literal.
    ZeroLiteral,

    /// An attempt to assume a literal whose atom is beyond the largest supported atom.
    AtomTooLarge(CLiteral),
}

impl From<AssumptionError> for ErrorKind {
    fn from(e: AssumptionError) -> Self {
        ErrorKind::Assumption(e)
    }
}

/// Errors when revising a [configuration](crate::config).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Invalid input to an analysis, noted before any query is made.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {
    /// The sum of the group sizes differs from the count of clauses.
    GroupSizeMismatch { expected: usize, found: usize },

    /// The count of relevance flags differs from the count of groups.
    RelevanceLength { groups: usize, flags: usize },
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}

/// Errors when building literals or sets of literals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralError {
    /// Zero is not a literal.
    Zero,

    /// Some atom appears more than once, with either polarity.
    DuplicateAtom(Atom),

    /// The atom of the literal is beyond the largest supported atom.
    AtomTooLarge(CLiteral),

    /// The union of two sets would contain a literal and its negation.
    Contradiction(CLiteral),
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}

/// Outcomes of a request to an oracle which did not produce a model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// There is no model under the current assumptions.
    /// This is expected from time to time.
    Unsatisfiable,

    /// The oracle could not decide within its budget.
    Unknown,

    /// There are no more fresh atoms.
    AtomsExhausted,

    /// The internal state of the oracle is inconsistent.
    /// This is unexpected, and the oracle should not be queried further.
    Corrupt,
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found with the clause of the given key.
    /// This is expected from time to time, and leads to backtracking.
    Conflict(ClauseKey),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assumption(AssumptionError::EmptyStack) => write!(f, "the assumption stack is empty"),
            Self::Assumption(AssumptionError::MarkAboveLength { mark, length }) => {
                write!(f, "mark {mark} is above the assumption stack length {length}")
            }
            Self::Assumption(AssumptionError::ZeroLiteral) => write!(f, "zero cannot be assumed"),
            Self::Assumption(AssumptionError::AtomTooLarge(literal)) => {
                write!(f, "{literal} cannot be assumed, as its atom is too large")
            }

            Self::Config(ConfigError::OutOfBounds(name)) => write!(f, "value out of bounds for {name}"),

            Self::Input(InputError::GroupSizeMismatch { expected, found }) => {
                write!(f, "group sizes sum to {found}, but there are {expected} clauses")
            }
            Self::Input(InputError::RelevanceLength { groups, flags }) => {
                write!(f, "{flags} relevance flags given for {groups} groups")
            }

            Self::Literal(LiteralError::Zero) => write!(f, "zero is not a literal"),
            Self::Literal(LiteralError::DuplicateAtom(atom)) => write!(f, "atom {atom} appears more than once"),
            Self::Literal(LiteralError::AtomTooLarge(literal)) => write!(f, "the atom of {literal} is too large"),
            Self::Literal(LiteralError::Contradiction(literal)) => {
                write!(f, "both {literal} and its negation are present")
            }

            Self::Oracle(OracleError::Unsatisfiable) => write!(f, "unsatisfiable"),
            Self::Oracle(OracleError::Unknown) => write!(f, "unknown"),
            Self::Oracle(OracleError::AtomsExhausted) => write!(f, "no fresh atoms remain"),
            Self::Oracle(OracleError::Corrupt) => write!(f, "corrupt oracle state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
