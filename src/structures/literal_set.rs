/*!
A set of literals, sorted by atom.

A literal set is the representation of both a clause (a disjunction of its literals) and of a collection of signed atoms, such as the core/dead atoms of a formula.

Each atom appears at most once in a literal set, and so a literal set never contains both a literal and its negation.
This is checked on construction.

```rust
# use otter_anomalies::structures::literal_set::LiteralSet;
let set = LiteralSet::from_ints(&[3, -1, 2]).unwrap();
assert_eq!(set.literals(), &[-1, 2, 3]);

let variables = set.variables();
assert_eq!(variables.literals(), &[1, 2, 3]);

let fixed = LiteralSet::from_ints(&[-2]).unwrap();
assert_eq!(variables.remove_all(&fixed).literals(), &[1, 3]);

assert!(LiteralSet::from_ints(&[1, -1]).is_err());
```
*/

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::LiteralError,
};

/// A set of literals, sorted by atom, with each atom at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LiteralSet {
    literals: Vec<CLiteral>,
}

impl LiteralSet {
    /// A literal set from some literals, in any order.
    ///
    /// Fails if some literal is zero or has too large an atom, or if some atom appears more than once.
    pub fn new(mut literals: Vec<CLiteral>) -> Result<Self, LiteralError> {
        for literal in &literals {
            CLiteral::checked(*literal)?;
        }
        literals.sort_unstable_by_key(|literal| literal.atom());
        for pair in literals.windows(2) {
            if pair[0].atom() == pair[1].atom() {
                return Err(LiteralError::DuplicateAtom(pair[0].atom()));
            }
        }
        Ok(LiteralSet { literals })
    }

    /// A literal set from a slice of integers.
    pub fn from_ints(values: &[i32]) -> Result<Self, LiteralError> {
        Self::new(values.to_vec())
    }

    /// A literal set from literals which are known to be sorted by atom with no atom repeated.
    pub(crate) fn from_sorted_unchecked(literals: Vec<CLiteral>) -> Self {
        debug_assert!(literals.windows(2).all(|pair| pair[0].atom() < pair[1].atom()));
        LiteralSet { literals }
    }

    /// The literals of the set, sorted by atom.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    /// The atoms of the set, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literal of `atom` in the set, if the atom appears in the set.
    pub fn value_of(&self, atom: Atom) -> Option<CLiteral> {
        self.literals
            .binary_search_by_key(&atom, |literal| literal.atom())
            .ok()
            .map(|index| self.literals[index])
    }

    pub fn contains_atom(&self, atom: Atom) -> bool {
        self.value_of(atom).is_some()
    }

    pub fn contains(&self, literal: CLiteral) -> bool {
        self.value_of(literal.atom()) == Some(literal)
    }

    /// The atoms of the set as positive literals.
    pub fn variables(&self) -> LiteralSet {
        LiteralSet::from_sorted_unchecked(
            self.atoms().map(|atom| CLiteral::new(atom, true)).collect(),
        )
    }

    /// The set with each literal negated.
    pub fn negate(&self) -> LiteralSet {
        LiteralSet::from_sorted_unchecked(self.literals.iter().map(|literal| literal.negate()).collect())
    }

    /// The literals of the set whose atom does not appear in `other`, regardless of polarity.
    pub fn remove_all(&self, other: &LiteralSet) -> LiteralSet {
        LiteralSet::from_sorted_unchecked(
            self.literals
                .iter()
                .filter(|literal| !other.contains_atom(literal.atom()))
                .copied()
                .collect(),
        )
    }

    /// The union of two sets.
    ///
    /// Fails if the union would contain some literal and its negation.
    pub fn union(&self, other: &LiteralSet) -> Result<LiteralSet, LiteralError> {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let (left, right) = (&self.literals, &other.literals);
        let (mut l, mut r) = (0, 0);

        while l < left.len() && r < right.len() {
            match left[l].atom().cmp(&right[r].atom()) {
                std::cmp::Ordering::Less => {
                    merged.push(left[l]);
                    l += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(right[r]);
                    r += 1;
                }
                std::cmp::Ordering::Equal => {
                    if left[l] != right[r] {
                        return Err(LiteralError::Contradiction(left[l]));
                    }
                    merged.push(left[l]);
                    l += 1;
                    r += 1;
                }
            }
        }
        merged.extend_from_slice(&left[l..]);
        merged.extend_from_slice(&right[r..]);

        Ok(LiteralSet::from_sorted_unchecked(merged))
    }

    /// The set with `literal` added.
    pub fn with(&self, literal: CLiteral) -> Result<LiteralSet, LiteralError> {
        self.union(&LiteralSet::new(vec![literal])?)
    }
}

impl<'a> IntoIterator for &'a LiteralSet {
    type Item = &'a CLiteral;
    type IntoIter = std::slice::Iter<'a, CLiteral>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl TryFrom<Vec<CLiteral>> for LiteralSet {
    type Error = LiteralError;

    fn try_from(value: Vec<CLiteral>) -> Result<Self, Self::Error> {
        LiteralSet::new(value)
    }
}

impl std::fmt::Display for LiteralSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            match index {
                0 => write!(f, "{literal}")?,
                _ => write!(f, " {literal}")?,
            }
        }
        write!(f, "}}")
    }
}
