/*!
The assumption stack, and scoped use of the stack.

# Overview

An [AssumptionStack] is the ordered sequence of literals assumed by an oracle on each query.
The stack is owned by the oracle, and so what is on the stack is exactly what the oracle assumes.

Analyses share a single stack, and a sub-analysis must leave the stack as it found it.
For this, an [AssumptionScope] notes the length of the stack when created and truncates the stack to that length when dropped --- including on early return through `?`.

```rust
# use otter_anomalies::context::Context;
# use otter_anomalies::config::Config;
# use otter_anomalies::oracle::{AssumptionScope, Oracle};
let mut the_context = Context::from_config(Config::default());
assert!(the_context.assumptions_mut().push(1).is_ok());

{
    let mut scope = AssumptionScope::new(&mut the_context);
    assert!(scope.assumptions_mut().push(-2).is_ok());
    assert!(scope.assumptions_mut().push(3).is_ok());
    assert_eq!(scope.assumptions().len(), 3);
}

assert_eq!(the_context.assumptions().literals(), &[1]);
```
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    structures::{atom::ATOM_MAX, literal::CLiteral},
    types::err::AssumptionError,
};

/// An ordered sequence of assumed literals.
#[derive(Clone, Debug, Default)]
pub struct AssumptionStack {
    literals: Vec<CLiteral>,
}

impl AssumptionStack {
    /// Appends `literal` to the stack.
    pub fn push(&mut self, literal: CLiteral) -> Result<(), AssumptionError> {
        valid_assumption(literal)?;
        log::trace!(target: targets::ASSUMPTIONS, "Push {literal}");
        self.literals.push(literal);
        Ok(())
    }

    /// Appends each literal to the stack, in order.
    pub fn extend(&mut self, literals: impl IntoIterator<Item = CLiteral>) -> Result<(), AssumptionError> {
        for literal in literals {
            self.push(literal)?;
        }
        Ok(())
    }

    /// Removes and returns the last literal of the stack.
    pub fn pop(&mut self) -> Result<CLiteral, AssumptionError> {
        match self.literals.pop() {
            Some(literal) => {
                log::trace!(target: targets::ASSUMPTIONS, "Pop {literal}");
                Ok(literal)
            }
            None => {
                log::error!(target: targets::ASSUMPTIONS, "! Pop from an empty stack");
                Err(AssumptionError::EmptyStack)
            }
        }
    }

    /// Replaces the last literal of the stack with `literal`.
    pub fn replace_last(&mut self, literal: CLiteral) -> Result<(), AssumptionError> {
        valid_assumption(literal)?;
        match self.literals.last_mut() {
            Some(last) => {
                log::trace!(target: targets::ASSUMPTIONS, "Replace {last} with {literal}");
                *last = literal;
                Ok(())
            }
            None => {
                log::error!(target: targets::ASSUMPTIONS, "! Replace on an empty stack");
                Err(AssumptionError::EmptyStack)
            }
        }
    }

    /// The literals in the given range of the stack, as a fresh vector.
    pub fn as_vec(&self, start: usize, end: usize) -> Vec<CLiteral> {
        let end = end.min(self.literals.len());
        let start = start.min(end);
        self.literals[start..end].to_vec()
    }

    /// Shortens the stack to `length`, if the stack is longer.
    pub fn truncate(&mut self, length: usize) {
        self.literals.truncate(length);
    }

    /// Clears every literal above `mark`.
    ///
    /// Unlike [truncate](AssumptionStack::truncate), a mark above the length of the stack is an error, as it indicates some literal below the mark was removed.
    pub fn clear_to(&mut self, mark: usize) -> Result<(), AssumptionError> {
        if mark > self.literals.len() {
            log::error!(target: targets::ASSUMPTIONS, "! Clear to {mark} above length {}", self.literals.len());
            return Err(AssumptionError::MarkAboveLength {
                mark,
                length: self.literals.len(),
            });
        }
        self.literals.truncate(mark);
        Ok(())
    }

    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn last(&self) -> Option<CLiteral> {
        self.literals.last().copied()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

fn valid_assumption(literal: CLiteral) -> Result<(), AssumptionError> {
    match literal {
        0 => Err(AssumptionError::ZeroLiteral),
        _ if literal.unsigned_abs() > ATOM_MAX => Err(AssumptionError::AtomTooLarge(literal)),
        _ => Ok(()),
    }
}

/// Exclusive use of an oracle, restoring the assumption stack of the oracle to its length on creation when dropped.
///
/// The scope dereferences to the oracle.
pub struct AssumptionScope<'o, O: Oracle> {
    oracle: &'o mut O,
    mark: usize,
}

impl<'o, O: Oracle> AssumptionScope<'o, O> {
    pub fn new(oracle: &'o mut O) -> Self {
        let mark = oracle.assumptions().len();
        AssumptionScope { oracle, mark }
    }

    /// The length of the stack on creation of the scope.
    pub fn mark(&self) -> usize {
        self.mark
    }
}

impl<O: Oracle> std::ops::Deref for AssumptionScope<'_, O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        self.oracle
    }
}

impl<O: Oracle> std::ops::DerefMut for AssumptionScope<'_, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.oracle
    }
}

impl<O: Oracle> Drop for AssumptionScope<'_, O> {
    fn drop(&mut self) {
        if self.oracle.assumptions_mut().clear_to(self.mark).is_err() {
            log::error!(target: targets::ASSUMPTIONS, "! Assumptions below the mark of a scope were removed");
        }
    }
}

#[cfg(test)]
mod assumption_tests {
    use super::*;

    #[test]
    fn stack_operations() {
        let mut stack = AssumptionStack::default();
        assert!(stack.push(1).is_ok());
        assert!(stack.push(-2).is_ok());
        assert!(stack.push(3).is_ok());

        assert!(stack.replace_last(-3).is_ok());
        assert_eq!(stack.as_vec(1, 3), vec![-2, -3]);
        assert_eq!(stack.pop(), Ok(-3));

        assert!(stack.clear_to(1).is_ok());
        assert_eq!(stack.literals(), &[1]);
        assert_eq!(stack.clear_to(2), Err(AssumptionError::MarkAboveLength { mark: 2, length: 1 }));
    }

    #[test]
    fn empty_stack() {
        let mut stack = AssumptionStack::default();
        assert_eq!(stack.pop(), Err(AssumptionError::EmptyStack));
        assert_eq!(stack.replace_last(1), Err(AssumptionError::EmptyStack));
        assert_eq!(stack.push(0), Err(AssumptionError::ZeroLiteral));
        assert_eq!(stack.push(i32::MIN), Err(AssumptionError::AtomTooLarge(i32::MIN)));
        assert!(stack.is_empty());
    }
}
