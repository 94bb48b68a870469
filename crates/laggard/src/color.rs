// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime color bands and the report color scheme.
//!
//! Colors are emitted unconditionally as embedded escape codes; the
//! table renderer knows not to count them toward column widths.

use anstyle::Style;

/// Runtimes under this many seconds are always fast.
const FAST_CUTOFF: f64 = 0.5;

/// Severity band assigned to a single test's runtime, for display
/// emphasis only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Fast,
    Slow,
    Painful,
    Agonizing,
}

impl Band {
    pub fn style(self) -> Style {
        match self {
            Band::Fast => scheme::fast(),
            Band::Slow => scheme::slow(),
            Band::Painful => scheme::painful(),
            Band::Agonizing => scheme::agonizing(),
        }
    }
}

/// Bucket a runtime against the longest runtime in the run.
///
/// Anything under half a second is fast. The range from the cutoff up
/// to the longest test splits into three equal segments: slow,
/// painful, agonizing. The segment width is floored at epsilon so a
/// run whose longest test sits exactly on the cutoff still buckets.
pub fn classify(runtime: f64, longest: f64) -> Band {
    if runtime < FAST_CUTOFF {
        return Band::Fast;
    }
    let segment = ((longest - FAST_CUTOFF) / 3.0).max(f64::EPSILON);
    let over = runtime - FAST_CUTOFF;
    if over <= segment {
        Band::Slow
    } else if over <= segment * 2.0 {
        Band::Painful
    } else {
        Band::Agonizing
    }
}

/// Wrap `text` in the escape codes for `style`.
pub fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Fixed color scheme for the timing report.
pub mod scheme {
    use anstyle::{AnsiColor, Style};

    /// Runtimes under the fast cutoff.
    pub fn fast() -> Style {
        AnsiColor::BrightGreen.on_default()
    }

    /// First segment above the cutoff.
    pub fn slow() -> Style {
        AnsiColor::BrightYellow.on_default()
    }

    /// Second segment above the cutoff.
    pub fn painful() -> Style {
        AnsiColor::BrightMagenta.on_default()
    }

    /// Final segment: the tests worth fixing first.
    pub fn agonizing() -> Style {
        AnsiColor::BrightRed.on_default()
    }

    /// `module.Class` group header lines.
    pub fn group() -> Style {
        AnsiColor::BrightBlue.on_default().bold()
    }

    /// Per-class subtotal rows.
    pub fn subtotal() -> Style {
        AnsiColor::BrightCyan.on_default()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
