// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

//! merge overlapping and adjacent ipv4 ranges
//!
//! ```rust
//! use ipmerge::{Range, merge, read_ranges};
//!
//! let input = "0xff000000 - 0xff000100\n0xff000080 - 0xff000200\n";
//! let merged = merge(read_ranges(input.as_bytes()).unwrap());
//! assert_eq!(merged, [Range::new(0xff000000, 0xff000200).unwrap()]);
//! assert_eq!(merged[0].to_string(), "255.0.0.0 - 255.0.2.0");
//! ```

mod merge;
mod range;
mod read;
mod report;

pub use merge::merge;
pub use range::Range;
pub use read::{LineError, parse_line, read_ranges};
pub use report::{Dotted, report};
