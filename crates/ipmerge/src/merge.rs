// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::range::Range;

/// collapse overlapping and adjacent ranges
///
/// the result is sorted by start, and no two of its ranges overlap or sit
/// next to each other. it covers exactly the addresses the input covered
#[must_use]
pub fn merge(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_unstable_by_key(Range::start);

    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut()
            && let Some(union) = last.union(&range)
        {
            *last = union;
        } else {
            merged.push(range);
        }
    }

    tracing::debug!(merged = merged.len(), "merged ranges");
    merged
}

#[cfg(test)]
use crate::range::r;

#[test]
fn test_overlap() {
    assert_eq!(merge(vec![r(1, 2), r(2, 3)]), vec![r(1, 3)]);
}

#[test]
fn test_adjacent() {
    assert_eq!(merge(vec![r(1, 2), r(3, 4)]), vec![r(1, 4)]);
}

#[test]
fn test_gap() {
    assert_eq!(merge(vec![r(1, 2), r(4, 5)]), vec![r(1, 2), r(4, 5)]);
}

#[test]
fn test_unsorted() {
    assert_eq!(
        merge(vec![r(20, 30), r(4, 5), r(1, 2), r(6, 8), r(25, 40)]),
        vec![r(1, 2), r(4, 8), r(20, 40)]
    );
}

#[test]
fn test_nested_and_duplicates() {
    assert_eq!(
        merge(vec![r(1, 100), r(5, 6), r(1, 100), r(50, 101)]),
        vec![r(1, 101)]
    );
}

#[test]
fn test_single() {
    assert_eq!(merge(vec![r(9, 9)]), vec![r(9, 9)]);
}

#[test]
fn test_empty() {
    assert_eq!(merge(vec![]), vec![]);
}

#[test]
fn test_address_space_edges() {
    assert_eq!(
        merge(vec![
            r(0x8000_0000, u32::MAX),
            r(0, 0x7fff_ffff),
            r(u32::MAX, u32::MAX),
        ]),
        vec![r(0, u32::MAX)]
    );
}
