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

//! # Rangetrie
//!
//! A Rust library providing longest-prefix-match (LPM) lookups over closed
//! ranges of decimal digit strings. Callers register ranges of same-length
//! digit keys (telephone-number or numeric-code ranges), each bound to a
//! value, and later query by a digit string to retrieve the value of the
//! most specific registered prefix that numerically contains it — the
//! classic routing-table problem applied to string-encoded numeric ranges
//! rather than binary IP addresses.
//!
//! ## Key Features
//!
//! - **Range Registration**: Register closed ranges `[start, end]` of
//!   same-length digit strings, each bound to an arbitrary value
//! - **Longest Prefix Match**: Queries resolve to the most specific
//!   (longest) registered range containing the query's prefix
//! - **Numeric Semantics**: `["09", "11"]` contains `"10"` — bounds are
//!   fixed-length numbers, never naively compared strings
//! - **Digit-Indexed Lookup**: Query time grows with the number of digits
//!   examined, not with the number of registered ranges
//! - **Overlap Validation**: An optional decorator rejects same-length
//!   overlapping registrations with an error naming both ranges
//! - **Generic Value Support**: The table is generic over an opaque value
//!   type with no trait bounds
//!
//! ## Usage Examples
//!
//! ### Basic Lookup
//!
//! ```rust
//! use rangetrie::RangeTrie;
//!
//! let mut trie = RangeTrie::new();
//! trie.add_value_for_range("1", "1", 1).unwrap();
//! trie.add_value_for_range("1000", "1999", 2).unwrap();
//!
//! // "1234" falls inside [1000, 1999], the most specific match.
//! assert_eq!(trie.get_value_from_prefix("1234567890").unwrap(), Some(&2));
//!
//! // Only the one-digit range matches a one-digit query.
//! assert_eq!(trie.get_value_from_prefix("1").unwrap(), Some(&1));
//!
//! // No range covers "2..."; absence is not an error.
//! assert_eq!(trie.get_value_from_prefix("234567890").unwrap(), None);
//! ```
//!
//! ### Rejecting Overlapping Ranges
//!
//! ```rust
//! use rangetrie::{DuplicateRangeValidator, RangeTrieError};
//!
//! let mut table = DuplicateRangeValidator::new();
//! table.add_value_for_range("10", "19", "carrier a").unwrap();
//!
//! // [12, 13] overlaps [10, 19] at the same length and is refused.
//! assert!(matches!(
//!     table.add_value_for_range("12", "13", "carrier b"),
//!     Err(RangeTrieError::RangeConflict { .. })
//! ));
//!
//! // Different lengths are independent specificity tiers.
//! table.add_value_for_range("1200", "1299", "carrier c").unwrap();
//! assert_eq!(
//!     table.get_value_from_prefix("1234").unwrap(),
//!     Some(&"carrier c")
//! );
//! ```
//!
//! ## Table Types
//!
//! ### RangeTrie
//!
//! The core engine. Accepts overlapping same-length ranges and resolves
//! ties in favor of the range registered last; multiple tiers (range
//! lengths) always coexist, with the longest matching tier taking
//! precedence.
//!
//! ### DuplicateRangeValidator
//!
//! A decorator owning a `RangeTrie` that refuses any registration
//! overlapping a previously accepted range of the same length, so
//! ambiguity surfaces as a build-time error instead of a silent shadow
//! match. Storage and conflict policy stay independently usable.
//!
//! ## Error Handling
//!
//! Operations return [`RangeTrieResult<T>`] which can contain the
//! following errors:
//!
//! - [`RangeTrieError::MalformedKey`]: a key is empty or contains a
//!   non-digit character
//! - [`RangeTrieError::LengthMismatch`]: range bounds differ in digit
//!   count
//! - [`RangeTrieError::InvertedRange`]: a range's start exceeds its end
//! - [`RangeTrieError::RangeConflict`]: a same-length range overlaps a
//!   previously accepted one (validator only)
//!
//! A query that matches nothing returns `Ok(None)`; absence is a normal,
//! representable outcome, never an error.
//!
//! ## Thread Safety
//!
//! The tables are built for the build-once, read-many pattern: perform all
//! registrations from a single writer, then query freely from any number
//! of threads — lookups take `&self` and never mutate, and both table
//! types are `Send + Sync` whenever the value type is. Interleaving
//! further registrations with concurrent reads requires external
//! synchronization.
//!
//! ## Performance Considerations
//!
//! - Registration walks at most one node per digit of the range's common
//!   prefix
//! - Lookup cost is proportional to `min(query digits, deepest registered
//!   branch)`, independent of the number of registered ranges
//! - The validator screens each registration with an ordered probe of its
//!   length tier rather than a scan of accepted ranges
//! - Registration emits `tracing` events at trace/debug level; they cost
//!   nothing unless a subscriber is installed
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod key;
mod result;
mod trie;
mod validator;

#[cfg(test)]
mod proptests;

pub use self::result::{RangeTrieError, RangeTrieResult};
pub use self::trie::{RangeTrie, Ranges};
pub use self::validator::DuplicateRangeValidator;
