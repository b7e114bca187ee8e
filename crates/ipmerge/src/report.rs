// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::range::Range;
use std::{fmt, io::Write};

/// displays an address as four dot-separated octets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dotted(pub u32);

impl fmt::Display for Dotted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = self.0;
        write!(
            f,
            "{}.{}.{}.{}",
            (addr >> 24) & 0xff,
            (addr >> 16) & 0xff,
            (addr >> 8) & 0xff,
            addr & 0xff
        )
    }
}

/// write one line per range, then the total
pub fn report(ranges: &[Range], out: &mut impl Write) -> std::io::Result<()> {
    for range in ranges {
        writeln!(out, "{range}")?;
    }
    writeln!(out, "Total:  {}", ranges.len())?;
    out.flush()
}

#[test]
fn test_dotted() {
    assert_eq!(Dotted(0).to_string(), "0.0.0.0");
    assert_eq!(Dotted(u32::MAX).to_string(), "255.255.255.255");
    assert_eq!(Dotted(0xc0a8_0001).to_string(), "192.168.0.1");
    assert_eq!(Dotted(0x0a00_ff10).to_string(), "10.0.255.16");
}

#[test]
fn test_report() {
    let ranges = [
        Range::new(0x0a00_0000, 0x0a00_00ff).unwrap(),
        Range::new(0xff00_0000, 0xff00_0200).unwrap(),
    ];
    let mut out = Vec::new();
    report(&ranges, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "10.0.0.0 - 10.0.0.255\n255.0.0.0 - 255.0.2.0\nTotal:  2\n"
    );
}
