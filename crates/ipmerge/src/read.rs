// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::range::Range;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::hex_digit1,
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
};
use std::io::BufRead;

/// why a line did not turn into a range
#[derive(Debug, PartialEq, Eq, foxerror::FoxError)]
pub enum LineError {
    /// blank line
    Blank,
    /// expected exactly two addresses
    TokenCount(usize),
    /// not a 32-bit hexadecimal number
    Hex(String),
    /// range starts after it ends
    Inverted { start: u32, end: u32 },
}

fn hexadecimal_value(inp: &str) -> IResult<&str, u32> {
    map_res(
        preceded(opt(alt((tag("0x"), tag("0X")))), hex_digit1),
        |out: &str| u32::from_str_radix(out, 16),
    )
    .parse(inp)
}

fn parse_hex(token: &str) -> Result<u32, LineError> {
    all_consuming(hexadecimal_value)
        .parse(token)
        .map(|(_, n)| n)
        .map_err(|_| LineError::Hex(token.to_string()))
}

/// parse a line like `0xff000000 - 0xff0000ff`
///
/// dashes count as whitespace, so `ff000000-ff0000ff` works too
pub fn parse_line(line: &str) -> Result<Range, LineError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    let [start, end] = tokens[..] else {
        return Err(if tokens.is_empty() {
            LineError::Blank
        } else {
            LineError::TokenCount(tokens.len())
        });
    };
    let start = parse_hex(start)?;
    let end = parse_hex(end)?;

    Range::new(start, end).ok_or(LineError::Inverted { start, end })
}

/// collect every valid range, skipping lines that are not one
///
/// skipped lines are only mentioned in warnings, blank ones not even that
pub fn read_ranges(reader: impl BufRead) -> std::io::Result<Vec<Range>> {
    let mut ranges = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        match parse_line(&line?) {
            Ok(range) => ranges.push(range),
            Err(LineError::Blank) => (),
            Err(e) => tracing::warn!(line = n + 1, reason = %e, "skipping line"),
        }
    }

    tracing::debug!(read = ranges.len(), "read ranges");
    Ok(ranges)
}

#[test]
fn test_hex() {
    assert_eq!(parse_hex("ff"), Ok(0xff));
    assert_eq!(parse_hex("0xFF000000"), Ok(0xff00_0000));
    assert_eq!(parse_hex("0XaB"), Ok(0xab));
    assert_eq!(parse_hex("0"), Ok(0));
    assert_eq!(parse_hex("ffffffff"), Ok(u32::MAX));
    assert_eq!(parse_hex("100000000"), Err(LineError::Hex("100000000".into())));
    assert_eq!(parse_hex("0x"), Err(LineError::Hex("0x".into())));
    assert_eq!(parse_hex("12g"), Err(LineError::Hex("12g".into())));
    assert_eq!(parse_hex("+1"), Err(LineError::Hex("+1".into())));
}

#[test]
fn test_parse_line() {
    let r = |start, end| Range::new(start, end).unwrap();

    assert_eq!(
        parse_line("0xff000000 - 0xff000100"),
        Ok(r(0xff00_0000, 0xff00_0100))
    );
    assert_eq!(parse_line("  1-2\n"), Ok(r(1, 2)));
    assert_eq!(parse_line("a\t -   b\r\n"), Ok(r(0xa, 0xb)));
    assert_eq!(parse_line("5 - 5"), Ok(r(5, 5)));
    assert_eq!(parse_line("1 2"), Ok(r(1, 2)));
}

#[test]
fn test_parse_line_rejects() {
    assert_eq!(parse_line(""), Err(LineError::Blank));
    assert_eq!(parse_line("  - \t"), Err(LineError::Blank));
    assert_eq!(parse_line("ff"), Err(LineError::TokenCount(1)));
    assert_eq!(parse_line("1 - 2 - 3"), Err(LineError::TokenCount(3)));
    assert_eq!(parse_line("not-a-range"), Err(LineError::TokenCount(3)));
    assert_eq!(parse_line("xy - 2"), Err(LineError::Hex("xy".into())));
    assert_eq!(
        parse_line("0x10 - 0x0f"),
        Err(LineError::Inverted { start: 16, end: 15 })
    );
}

#[test]
fn test_read_ranges() {
    let input = "0xff000000 - 0xff000100\nnot-a-range\n\n2 - 1\n0xff000080 - 0xff000200\n";
    let ranges = read_ranges(input.as_bytes()).unwrap();
    assert_eq!(
        ranges,
        vec![
            Range::new(0xff00_0000, 0xff00_0100).unwrap(),
            Range::new(0xff00_0080, 0xff00_0200).unwrap(),
        ]
    );
}

#[test]
fn test_read_ranges_invalid_utf8() {
    let input: &[u8] = b"1 - 2\n\xff\xfe - 3\n";
    assert!(read_ranges(input).is_err());
}
