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

//! Validation and comparison helpers for decimal digit-string keys.
//!
//! Keys are kept as strings throughout. Two digit strings of equal length
//! compare numerically exactly as their bytes compare lexicographically
//! ("09" < "10" both ways), so range membership never converts to machine
//! integers and keys may carry any number of digits.

use crate::result::{RangeTrieError, RangeTrieResult};

/// Checks that `key` is a non-empty string of decimal digits.
pub(crate) fn check_digits(key: &str) -> RangeTrieResult<()> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeTrieError::MalformedKey {
            key: key.to_owned(),
        });
    }
    Ok(())
}

/// Checks that `start` and `end` form a well-formed closed range: both
/// non-empty digit strings of the same length with `start <= end`.
pub(crate) fn check_range(start: &str, end: &str) -> RangeTrieResult<()> {
    check_digits(start)?;
    check_digits(end)?;
    if start.len() != end.len() {
        return Err(RangeTrieError::LengthMismatch {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }
    if start.as_bytes() > end.as_bytes() {
        return Err(RangeTrieError::InvertedRange {
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }
    Ok(())
}

/// Returns the number of leading digits shared by `start` and `end`.
pub(crate) fn common_prefix_len(start: &str, end: &str) -> usize {
    start
        .bytes()
        .zip(end.bytes())
        .take_while(|(a, b)| a == b)
        .count()
}
