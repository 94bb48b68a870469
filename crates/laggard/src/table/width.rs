// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cell width measurement and padding.
//!
//! Cells may carry ANSI color codes that occupy bytes but no screen
//! columns. Widths are always measured on the stripped string while
//! the colored original is what lands in the output, so padding has
//! to compensate for the invisible bytes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches SGR escape sequences such as `\x1b[92m` and `\x1b[1;94m`.
#[allow(clippy::expect_used)]
static SGR_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid regex pattern"));

/// Remove ANSI color codes from a string.
pub fn strip_sgr(s: &str) -> Cow<'_, str> {
    // Fast path: no escape byte, nothing to strip.
    if memchr::memchr(0x1b, s.as_bytes()).is_none() {
        return Cow::Borrowed(s);
    }
    SGR_CODES.replace_all(s, "")
}

/// Width of a cell as it appears on screen, color codes excluded.
pub fn visible_width(s: &str) -> usize {
    strip_sgr(s).chars().count()
}

/// Whether the string parses as a number (int or float).
pub(crate) fn is_number(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

/// Whether the string parses as an integer.
pub(crate) fn is_integer(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// Characters after the decimal point, or -1 when the string is
/// integral or not numeric. Exponent notation counts from the `e`,
/// so `123e45` reports 2.
pub fn after_point(s: &str) -> isize {
    if !is_number(s) || is_integer(s) {
        return -1;
    }
    let lowered = s.to_lowercase();
    match s.rfind('.').or_else(|| lowered.rfind('e')) {
        Some(pos) => (s.len() - pos - 1) as isize,
        None => -1,
    }
}

/// Extra width a colored string needs so its visible part reaches
/// `width` columns.
fn invisible_surplus(s: &str) -> usize {
    s.chars().count() - visible_width(s)
}

/// Flush right to `width` screen columns.
pub fn pad_left(width: usize, s: &str) -> String {
    let target = width + invisible_surplus(s);
    format!("{s:>target$}")
}

/// Flush left to `width` screen columns.
pub fn pad_right(width: usize, s: &str) -> String {
    let target = width + invisible_surplus(s);
    format!("{s:<target$}")
}

/// Center within `width` screen columns.
pub fn pad_both(width: usize, s: &str) -> String {
    let target = width + invisible_surplus(s);
    format!("{s:^target$}")
}

#[cfg(test)]
#[path = "width_tests.rs"]
mod tests;
