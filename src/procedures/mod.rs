/*!
Procedures of the [context](crate::context) during a query.

- [bcp] propagates an assignment through the watched clauses of the formula.
- [decision] chooses an atom without a value, and a value for the atom.
- [backtrack] undoes assignments.
- [solve] combines these into a query.
*/

pub mod backtrack;
pub mod bcp;
pub mod decision;
pub mod solve;
