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

use super::*;

use proptest::prelude::*;

fn digit_string(len: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// A well-formed closed range: two same-length digit strings, ordered.
fn digit_range() -> impl Strategy<Value = (String, String)> {
    (1usize..=5).prop_flat_map(|len| {
        (digit_string(len), digit_string(len))
            .prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    })
}

/// Reference model: a linear scan over every registered range, picking the
/// greatest (length, registration index) among the matches.
fn scan_lookup(ranges: &[(String, String, usize)], query: &str) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, (start, end, _)) in ranges.iter().enumerate() {
        let len = start.len();
        if len > query.len() {
            continue;
        }
        let window = &query.as_bytes()[..len];
        if start.as_bytes() <= window
            && window <= end.as_bytes()
            && best.map_or(true, |(l, i)| (l, i) < (len, idx))
        {
            best = Some((len, idx));
        }
    }
    best.map(|(_, idx)| ranges[idx].2)
}

/// Overlap over closed intervals of same-length digit strings.
fn overlaps(a: &(String, String), b: &(String, String)) -> bool {
    a.0.len() == b.0.len() && a.0 <= b.1 && b.0 <= a.1
}

proptest! {
    /// The trie agrees with the naive linear scan on arbitrary range sets
    /// (overlaps included) and arbitrary queries.
    #[test]
    fn trie_matches_linear_scan(
        ranges in proptest::collection::vec(digit_range(), 0..32),
        queries in proptest::collection::vec(digit_string(1..12), 1..32),
    ) {
        let mut trie = RangeTrie::new();
        let mut model = Vec::new();
        for (value, (start, end)) in ranges.iter().enumerate() {
            trie.add_value_for_range(start, end, value).unwrap();
            model.push((start.clone(), end.clone(), value));
        }
        prop_assert_eq!(trie.len(), model.len());

        for query in &queries {
            let expected = scan_lookup(&model, query);
            prop_assert_eq!(trie.get_value_from_prefix(query).unwrap().copied(), expected);
        }

        // Every registered range comes back out.
        let mut stored: Vec<_> = trie
            .ranges()
            .map(|(s, e, v)| (s.to_owned(), e.to_owned(), *v))
            .collect();
        let mut model = model;
        stored.sort();
        model.sort();
        prop_assert_eq!(stored, model);
    }

    /// The validator accepts a range exactly when it is disjoint from every
    /// accepted same-length range, and its tiers stay pairwise disjoint.
    #[test]
    fn validator_accepts_only_disjoint_tiers(
        ranges in proptest::collection::vec(digit_range(), 0..32),
    ) {
        let mut validator = DuplicateRangeValidator::new();
        let mut accepted: Vec<(String, String)> = Vec::new();
        for (value, range) in ranges.iter().enumerate() {
            let conflicting = accepted.iter().any(|prior| overlaps(prior, range));
            match validator.add_value_for_range(&range.0, &range.1, value) {
                Ok(()) => {
                    prop_assert!(!conflicting);
                    accepted.push(range.clone());
                }
                Err(RangeTrieError::RangeConflict { .. }) => prop_assert!(conflicting),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
        prop_assert_eq!(validator.len(), accepted.len());
    }

    /// Within a single tier nothing can shadow an accepted range, so both
    /// of its bounds must look its own value back up.
    #[test]
    fn accepted_bounds_round_trip(
        ranges in proptest::collection::vec(digit_range(), 1..24),
    ) {
        let len = ranges[0].0.len();
        let mut validator = DuplicateRangeValidator::new();
        let mut accepted = Vec::new();
        for (value, (start, end)) in ranges.iter().enumerate() {
            if start.len() != len {
                continue;
            }
            if validator.add_value_for_range(start, end, value).is_ok() {
                accepted.push((start, end, value));
            }
        }
        for (start, end, value) in accepted {
            prop_assert_eq!(validator.get_value_from_prefix(start).unwrap(), Some(&value));
            prop_assert_eq!(validator.get_value_from_prefix(end).unwrap(), Some(&value));
        }
    }
}
