//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Overlap-rejecting wrapper around [`RangeTrie`].

use crate::key;
use crate::result::{RangeTrieError, RangeTrieResult};
use crate::trie::RangeTrie;
use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::debug;

/// A decorator that guards a [`RangeTrie`] against two ranges of the same
/// length that numerically overlap.
///
/// Overlap is a same-length concept: ranges of different lengths are
/// independent specificity tiers and are never compared against each
/// other, since longest-prefix resolution already arbitrates between
/// them. Within a tier, a registration that overlaps a previously
/// accepted range fails with
/// [`RangeConflict`](crate::RangeTrieError::RangeConflict) before the
/// underlying trie is touched, surfacing the ambiguity at build time
/// rather than as a silent shadow match later.
///
/// The validator owns its trie; storage and conflict policy stay separate
/// concerns. Use [`into_inner`](Self::into_inner) to take the trie back
/// once the build phase is done.
///
/// # Examples
///
/// ```rust
/// use rangetrie::{DuplicateRangeValidator, RangeTrieError};
///
/// let mut table = DuplicateRangeValidator::new();
/// table.add_value_for_range("10", "19", 1).unwrap();
///
/// // [12, 13] is inside [10, 19]; the registration is refused.
/// assert!(matches!(
///     table.add_value_for_range("12", "13", 2),
///     Err(RangeTrieError::RangeConflict { .. })
/// ));
///
/// // A four-digit range is a different tier and coexists.
/// table.add_value_for_range("1200", "1299", 3).unwrap();
/// assert_eq!(table.get_value_from_prefix("1234").unwrap(), Some(&3));
/// ```
pub struct DuplicateRangeValidator<V> {
    trie: RangeTrie<V>,
    /// Accepted ranges tiered by digit count. Each tier maps a range's
    /// start bound to its end bound and stays pairwise disjoint.
    tiers: BTreeMap<usize, BTreeMap<Box<str>, Box<str>>>,
}

impl<V> DuplicateRangeValidator<V> {
    /// Creates a validator around an empty [`RangeTrie`].
    pub fn new() -> Self {
        Self {
            trie: RangeTrie::new(),
            tiers: BTreeMap::new(),
        }
    }

    /// Registers the closed range `[start, end]`, bound to `value`, after
    /// checking it against every previously accepted range of the same
    /// length.
    ///
    /// Bounds are validated exactly as by
    /// [`RangeTrie::add_value_for_range`]; a malformed, mismatched, or
    /// inverted range is reported as such, not as a conflict. On overlap
    /// the call fails with
    /// [`RangeConflict`](crate::RangeTrieError::RangeConflict) naming both
    /// the new and the conflicting range, and neither the trie nor the
    /// bookkeeping is mutated. A repeated identical registration is a
    /// conflict: every range overlaps itself.
    pub fn add_value_for_range(&mut self, start: &str, end: &str, value: V) -> RangeTrieResult<()> {
        key::check_range(start, end)?;
        self.check_conflict(start, end)?;
        self.trie.add_value_for_range(start, end, value)?;
        self.tiers
            .entry(start.len())
            .or_default()
            .insert(start.into(), end.into());
        Ok(())
    }

    /// Returns the value of the longest accepted range containing the
    /// corresponding-length prefix of `prefix`.
    ///
    /// Delegates to [`RangeTrie::get_value_from_prefix`].
    pub fn get_value_from_prefix(&self, prefix: &str) -> RangeTrieResult<Option<&V>> {
        self.trie.get_value_from_prefix(prefix)
    }

    /// Returns the number of accepted ranges.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if no range has been accepted.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Returns a reference to the guarded trie.
    pub fn inner(&self) -> &RangeTrie<V> {
        &self.trie
    }

    /// Consumes the validator and returns the guarded trie.
    ///
    /// Useful once the build phase is complete and only lookups remain.
    pub fn into_inner(self) -> RangeTrie<V> {
        self.trie
    }

    /// Fails with `RangeConflict` if `[start, end]` overlaps an accepted
    /// range of the same length.
    ///
    /// Closed intervals `[a, b]` and `[c, d]` overlap iff `a <= d && c <= b`.
    /// A tier is kept pairwise disjoint and its map is ordered by start
    /// bound, so only the nearest accepted range on either side of `start`
    /// can overlap the candidate.
    fn check_conflict(&self, start: &str, end: &str) -> RangeTrieResult<()> {
        let Some(tier) = self.tiers.get(&start.len()) else {
            return Ok(());
        };
        let below = tier
            .range::<str, _>((Bound::Unbounded, Bound::Included(start)))
            .next_back();
        let above = tier
            .range::<str, _>((Bound::Excluded(start), Bound::Unbounded))
            .next();
        for (existing_start, existing_end) in below.into_iter().chain(above) {
            if existing_start.as_bytes() <= end.as_bytes()
                && start.as_bytes() <= existing_end.as_bytes()
            {
                debug!(start, end, %existing_start, %existing_end, "rejected overlapping range");
                return Err(RangeTrieError::RangeConflict {
                    start: start.to_owned(),
                    end: end.to_owned(),
                    existing_start: existing_start.to_string(),
                    existing_end: existing_end.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<V> Default for DuplicateRangeValidator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for DuplicateRangeValidator<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DuplicateRangeValidator {{ len: {} }}", self.len())
    }
}
