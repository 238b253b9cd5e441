/*!
Groups of clauses.

An ordered list of clauses is revealed to an oracle incrementally, one group at a time.
The groups are given by their sizes, and partition the list: the first group is the first *s₀* clauses, the second group the next *s₁* clauses, and so on.

```rust
# use otter_anomalies::structures::groups::ClauseGroups;
let groups = ClauseGroups::new(vec![2, 1], 3).unwrap();
assert_eq!(groups.ranges().collect::<Vec<_>>(), vec![0..2, 2..3]);

assert!(ClauseGroups::new(vec![2, 2], 3).is_err());
```
*/

use crate::types::err::InputError;

/// The sizes of a sequence of groups partitioning some list of clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseGroups {
    sizes: Vec<usize>,
}

impl ClauseGroups {
    /// Groups of the given sizes, which must sum to `clause_count`.
    pub fn new(sizes: Vec<usize>, clause_count: usize) -> Result<Self, InputError> {
        let found: usize = sizes.iter().sum();
        match found == clause_count {
            true => Ok(ClauseGroups { sizes }),
            false => Err(InputError::GroupSizeMismatch {
                expected: clause_count,
                found,
            }),
        }
    }

    /// One group for each clause.
    pub fn singletons(clause_count: usize) -> Self {
        ClauseGroups {
            sizes: vec![1; clause_count],
        }
    }

    /// A count of the groups.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// The range of clause indices of each group, in order.
    pub fn ranges(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        self.sizes.iter().scan(0, |end, size| {
            let start = *end;
            *end += size;
            Some(start..*end)
        })
    }
}
