// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::report::Dotted;
use std::fmt;

/// a closed range of ipv4 addresses
///
/// both ends are included, and the start is never past the end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: u32,
    end: u32,
}

impl Range {
    /// returns [`None`] if `start` is past `end`
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// number of addresses covered
    ///
    /// wider than the addresses themselves, since the whole address space
    /// holds one more address than fits in a u32
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    /// always false, a range covers at least one address
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// the smallest range covering both
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// whether the two ranges overlap or sit right next to each other
    ///
    /// if the hull is no longer than both ranges laid end to end, there is
    /// no gap between them
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.hull(other).len() <= self.len() + other.len()
    }

    /// the hull of both ranges, if it covers nothing either of them didn't
    #[must_use]
    pub fn union(&self, other: &Self) -> Option<Self> {
        self.touches(other).then(|| self.hull(other))
    }

    #[must_use]
    pub const fn contains(&self, addr: u32) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", Dotted(self.start), Dotted(self.end))
    }
}

#[cfg(test)]
pub(crate) fn r(start: u32, end: u32) -> Range {
    Range::new(start, end).unwrap()
}

#[test]
fn test_new() {
    assert_eq!(Range::new(1, 2).map(|r| (r.start(), r.end())), Some((1, 2)));
    assert!(Range::new(7, 7).is_some());
    assert_eq!(Range::new(3, 2), None);
}

#[test]
fn test_len() {
    assert_eq!(r(5, 5).len(), 1);
    assert_eq!(r(1, 4).len(), 4);
    assert_eq!(r(0, u32::MAX).len(), 1 << 32);
}

#[test]
fn test_touches() {
    assert!(r(1, 2).touches(&r(2, 3)));
    assert!(r(1, 2).touches(&r(3, 4)));
    assert!(r(3, 4).touches(&r(1, 2)));
    assert!(!r(1, 2).touches(&r(4, 5)));
    assert!(r(1, 10).touches(&r(4, 5)));
    assert!(r(0, u32::MAX).touches(&r(0, u32::MAX)));
    assert!(r(0, 0x7fff_ffff).touches(&r(0x8000_0000, u32::MAX)));
}

#[test]
fn test_union() {
    assert_eq!(r(1, 2).union(&r(2, 3)), Some(r(1, 3)));
    assert_eq!(r(1, 2).union(&r(3, 4)), Some(r(1, 4)));
    assert_eq!(r(1, 10).union(&r(4, 5)), Some(r(1, 10)));
    assert_eq!(r(1, 2).union(&r(4, 5)), None);
}

#[test]
fn test_display() {
    assert_eq!(
        r(0xff00_0000, 0xff00_0200).to_string(),
        "255.0.0.0 - 255.0.2.0"
    );
}
