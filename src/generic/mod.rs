//! Generic structures, not specific to the analysis of formulas.

pub mod random;
