/*!
Analyses of a formula, each driving an [oracle](crate::oracle::Oracle) through many queries.

# Engines

- [Cause analysis](cause) attributes each known anomaly of a formula to the first group of clauses after which the anomaly appears.
- [Atomic set discovery](atomic_sets) partitions atoms into groups whose values are perfectly correlated.

# Sub-analyses

The engines are composed from smaller analyses, each of which may also be used alone:

- [Core/dead analysis](core_dead) finds the candidate atoms which have a single value in every model.
- [Redundancy analysis](redundancy) finds the candidate clauses entailed by every other clause of a formula.

Every analysis borrows the oracle exclusively, and leaves the [assumption stack](crate::oracle::AssumptionStack) of the oracle as it was found, whether the analysis returns successfully or not.

# Progress

Each analysis reports progress to a [Monitor](monitor::Monitor), and checks the monitor for cancellation between (never during) queries.
A canceled analysis returns what was found before cancellation.
*/

pub mod atomic_sets;
pub mod cause;
pub mod core_dead;
pub mod monitor;
pub mod redundancy;
