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

//! Error types and results for the RangeTrie library.

use thiserror::Error;

/// A specialized Result type for RangeTrie operations.
pub type RangeTrieResult<T> = Result<T, RangeTrieError>;

/// Errors that can occur during RangeTrie operations.
///
/// All variants are detected synchronously at the offending call and leave
/// the structure untouched. A query that finds no match is *not* an error;
/// it is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeTrieError {
    /// A key was empty or contained a character other than `'0'`–`'9'`.
    #[error("malformed key {key:?}: keys must be non-empty strings of decimal digits")]
    MalformedKey {
        /// The offending key.
        key: String,
    },
    /// The bounds of a range differ in digit count.
    #[error("length mismatch: bounds {start:?} and {end:?} must have the same number of digits")]
    LengthMismatch {
        /// Start bound of the rejected range.
        start: String,
        /// End bound of the rejected range.
        end: String,
    },
    /// The start of a range is numerically greater than its end.
    #[error("inverted range: start {start:?} is greater than end {end:?}")]
    InvertedRange {
        /// Start bound of the rejected range.
        start: String,
        /// End bound of the rejected range.
        end: String,
    },
    /// A range overlaps a previously accepted range of the same length.
    #[error(
        "range [{start:?}, {end:?}] overlaps previously accepted range \
         [{existing_start:?}, {existing_end:?}]"
    )]
    RangeConflict {
        /// Start bound of the rejected range.
        start: String,
        /// End bound of the rejected range.
        end: String,
        /// Start bound of the conflicting range already in the table.
        existing_start: String,
        /// End bound of the conflicting range already in the table.
        existing_end: String,
    },
}
