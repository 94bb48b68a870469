// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output dialect catalog.
//!
//! A dialect frames a table: the horizontal rules above, below, and
//! between rows, plus how a row of cells is joined. Rules and rows
//! are tagged variants: either a fixed template or one of a few
//! named strategies for dialects whose syntax depends on the column
//! layout (pipe alignment colons, LaTeX preambles, per-cell markup).

use super::Align;

/// Horizontal rule drawn from fixed begin/fill/separator/end strings.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub begin: &'static str,
    pub fill: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

/// How to draw one horizontal rule.
#[derive(Clone, Copy, Debug)]
pub enum LineSpec {
    Fixed(Rule),
    /// Pipe-dialect rule with alignment colons, e.g. `|:---|---:|`.
    PipeColons,
    /// `\begin{tabular}{...}` plus the opening rule.
    LatexBegin { booktabs: bool },
}

/// Fixed row template: begin, cell separator, end.
#[derive(Clone, Copy, Debug)]
pub struct RowTemplate {
    pub begin: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

/// How to draw one row of cells.
#[derive(Clone, Copy, Debug)]
pub enum RowSpec {
    Fixed(RowTemplate),
    /// MediaWiki rows carry per-cell alignment attributes; header rows
    /// separate with `!`, data rows with `|`.
    MediaWiki { sep: &'static str },
    /// HTML rows wrap cells in `<th>`/`<td>` with alignment styles.
    Html { tag: &'static str },
    /// LaTeX rows join cells with `&` and escape special characters.
    Latex,
}

/// Structural parts some dialects drop when headers are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    LineAbove,
    LineBelow,
}

/// A complete dialect description.
#[derive(Clone, Copy, Debug)]
pub struct TableStyle {
    pub line_above: Option<LineSpec>,
    pub line_below_header: Option<LineSpec>,
    pub line_between_rows: Option<LineSpec>,
    pub line_below: Option<LineSpec>,
    pub header_row: RowSpec,
    pub data_row: RowSpec,
    pub padding: usize,
    pub hide_with_header: &'static [Part],
}

/// The built-in output dialects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Plain,
    Simple,
    Grid,
    FancyGrid,
    Pipe,
    Orgtbl,
    Psql,
    Rst,
    MediaWiki,
    Html,
    Latex,
    LatexBooktabs,
    Tsv,
}

impl Dialect {
    /// Every dialect, in catalog order.
    pub const ALL: &'static [Dialect] = &[
        Dialect::Plain,
        Dialect::Simple,
        Dialect::Grid,
        Dialect::FancyGrid,
        Dialect::Pipe,
        Dialect::Orgtbl,
        Dialect::Psql,
        Dialect::Rst,
        Dialect::MediaWiki,
        Dialect::Html,
        Dialect::Latex,
        Dialect::LatexBooktabs,
        Dialect::Tsv,
    ];

    /// Look up a dialect by name. Unknown names fall back to `simple`
    /// rather than failing.
    pub fn from_name(name: &str) -> Dialect {
        match name {
            "plain" => Dialect::Plain,
            "simple" => Dialect::Simple,
            "grid" => Dialect::Grid,
            "fancy_grid" => Dialect::FancyGrid,
            "pipe" => Dialect::Pipe,
            "orgtbl" => Dialect::Orgtbl,
            "psql" => Dialect::Psql,
            "rst" => Dialect::Rst,
            "mediawiki" => Dialect::MediaWiki,
            "html" => Dialect::Html,
            "latex" => Dialect::Latex,
            "latex_booktabs" => Dialect::LatexBooktabs,
            "tsv" => Dialect::Tsv,
            _ => Dialect::Simple,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Plain => "plain",
            Dialect::Simple => "simple",
            Dialect::Grid => "grid",
            Dialect::FancyGrid => "fancy_grid",
            Dialect::Pipe => "pipe",
            Dialect::Orgtbl => "orgtbl",
            Dialect::Psql => "psql",
            Dialect::Rst => "rst",
            Dialect::MediaWiki => "mediawiki",
            Dialect::Html => "html",
            Dialect::Latex => "latex",
            Dialect::LatexBooktabs => "latex_booktabs",
            Dialect::Tsv => "tsv",
        }
    }

    pub(crate) fn style(self) -> TableStyle {
        const TWO_SPACE: RowSpec = RowSpec::Fixed(RowTemplate { begin: "", sep: "  ", end: "" });
        const PIPED: RowSpec = RowSpec::Fixed(RowTemplate { begin: "|", sep: "|", end: "|" });

        match self {
            Dialect::Plain => TableStyle {
                line_above: None,
                line_below_header: None,
                line_between_rows: None,
                line_below: None,
                header_row: TWO_SPACE,
                data_row: TWO_SPACE,
                padding: 0,
                hide_with_header: &[],
            },
            Dialect::Simple => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule { begin: "", fill: "-", sep: "  ", end: "" })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "",
                    fill: "-",
                    sep: "  ",
                    end: "",
                })),
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule { begin: "", fill: "-", sep: "  ", end: "" })),
                header_row: TWO_SPACE,
                data_row: TWO_SPACE,
                padding: 0,
                hide_with_header: &[Part::LineAbove, Part::LineBelow],
            },
            Dialect::Grid => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "-",
                    sep: "+",
                    end: "+",
                })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "=",
                    sep: "+",
                    end: "+",
                })),
                line_between_rows: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "-",
                    sep: "+",
                    end: "+",
                })),
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "-",
                    sep: "+",
                    end: "+",
                })),
                header_row: PIPED,
                data_row: PIPED,
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::FancyGrid => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule {
                    begin: "╒",
                    fill: "═",
                    sep: "╤",
                    end: "╕",
                })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "╞",
                    fill: "═",
                    sep: "╪",
                    end: "╡",
                })),
                line_between_rows: Some(LineSpec::Fixed(Rule {
                    begin: "├",
                    fill: "─",
                    sep: "┼",
                    end: "┤",
                })),
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "╘",
                    fill: "═",
                    sep: "╧",
                    end: "╛",
                })),
                header_row: RowSpec::Fixed(RowTemplate { begin: "│", sep: "│", end: "│" }),
                data_row: RowSpec::Fixed(RowTemplate { begin: "│", sep: "│", end: "│" }),
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::Pipe => TableStyle {
                line_above: Some(LineSpec::PipeColons),
                line_below_header: Some(LineSpec::PipeColons),
                line_between_rows: None,
                line_below: None,
                header_row: PIPED,
                data_row: PIPED,
                padding: 1,
                hide_with_header: &[Part::LineAbove],
            },
            Dialect::Orgtbl => TableStyle {
                line_above: None,
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "|",
                    fill: "-",
                    sep: "+",
                    end: "|",
                })),
                line_between_rows: None,
                line_below: None,
                header_row: PIPED,
                data_row: PIPED,
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::Psql => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "-",
                    sep: "+",
                    end: "+",
                })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "|",
                    fill: "-",
                    sep: "+",
                    end: "|",
                })),
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "+",
                    fill: "-",
                    sep: "+",
                    end: "+",
                })),
                header_row: PIPED,
                data_row: PIPED,
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::Rst => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule { begin: "", fill: "=", sep: "  ", end: "" })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "",
                    fill: "=",
                    sep: "  ",
                    end: "",
                })),
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule { begin: "", fill: "=", sep: "  ", end: "" })),
                header_row: TWO_SPACE,
                data_row: TWO_SPACE,
                padding: 0,
                hide_with_header: &[],
            },
            Dialect::MediaWiki => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule {
                    begin: "{| class=\"wikitable\" style=\"text-align: left;\"",
                    fill: "",
                    sep: "",
                    end: "\n|+ <!-- caption -->\n|-",
                })),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "|-",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                line_between_rows: Some(LineSpec::Fixed(Rule {
                    begin: "|-",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                line_below: Some(LineSpec::Fixed(Rule { begin: "|}", fill: "", sep: "", end: "" })),
                header_row: RowSpec::MediaWiki { sep: "!" },
                data_row: RowSpec::MediaWiki { sep: "|" },
                padding: 0,
                hide_with_header: &[],
            },
            Dialect::Html => TableStyle {
                line_above: Some(LineSpec::Fixed(Rule {
                    begin: "<table>",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                line_below_header: None,
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "</table>",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                header_row: RowSpec::Html { tag: "th" },
                data_row: RowSpec::Html { tag: "td" },
                padding: 0,
                hide_with_header: &[],
            },
            Dialect::Latex => TableStyle {
                line_above: Some(LineSpec::LatexBegin { booktabs: false }),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "\\hline",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "\\hline\n\\end{tabular}",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                header_row: RowSpec::Latex,
                data_row: RowSpec::Latex,
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::LatexBooktabs => TableStyle {
                line_above: Some(LineSpec::LatexBegin { booktabs: true }),
                line_below_header: Some(LineSpec::Fixed(Rule {
                    begin: "\\midrule",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                line_between_rows: None,
                line_below: Some(LineSpec::Fixed(Rule {
                    begin: "\\bottomrule\n\\end{tabular}",
                    fill: "",
                    sep: "",
                    end: "",
                })),
                header_row: RowSpec::Latex,
                data_row: RowSpec::Latex,
                padding: 1,
                hide_with_header: &[],
            },
            Dialect::Tsv => TableStyle {
                line_above: None,
                line_below_header: None,
                line_between_rows: None,
                line_below: None,
                header_row: RowSpec::Fixed(RowTemplate { begin: "", sep: "\t", end: "" }),
                data_row: RowSpec::Fixed(RowTemplate { begin: "", sep: "\t", end: "" }),
                padding: 0,
                hide_with_header: &[],
            },
        }
    }
}

/// Join pre-padded cells with a fixed template and trim the right edge.
fn join_row(cells: &[String], begin: &str, sep: &str, end: &str) -> String {
    format!("{begin}{}{end}", cells.join(sep)).trim_end().to_string()
}

/// Render one horizontal rule.
pub(crate) fn build_line(spec: LineSpec, widths: &[usize], aligns: &[Align]) -> String {
    match spec {
        LineSpec::Fixed(rule) => {
            let cells: Vec<String> = widths.iter().map(|w| rule.fill.repeat(*w)).collect();
            join_row(&cells, rule.begin, rule.sep, rule.end)
        }
        LineSpec::PipeColons => {
            let segments: Vec<String> = widths
                .iter()
                .zip(aligns)
                .map(|(w, a)| pipe_segment(*a, *w))
                .collect();
            format!("|{}|", segments.join("|"))
        }
        LineSpec::LatexBegin { booktabs } => {
            let letters: String = aligns
                .iter()
                .map(|a| match a {
                    Align::Right | Align::Decimal => 'r',
                    Align::Center => 'c',
                    Align::Left => 'l',
                })
                .collect();
            let rule = if booktabs { "\\toprule" } else { "\\hline" };
            format!("\\begin{{tabular}}{{{letters}}}\n{rule}")
        }
    }
}

/// One segment of a pipe rule, with colons marking the alignment.
fn pipe_segment(align: Align, width: usize) -> String {
    match align {
        Align::Right | Align::Decimal => format!("{}:", "-".repeat(width.saturating_sub(1))),
        Align::Center => format!(":{}:", "-".repeat(width.saturating_sub(2))),
        Align::Left => format!(":{}", "-".repeat(width.saturating_sub(1))),
    }
}

/// Render one row of pre-padded cells.
pub(crate) fn build_row(spec: RowSpec, cells: &[String], aligns: &[Align]) -> String {
    match spec {
        RowSpec::Fixed(t) => join_row(cells, t.begin, t.sep, t.end),
        RowSpec::MediaWiki { sep } => mediawiki_row(sep, cells, aligns),
        RowSpec::Html { tag } => html_row(tag, cells, aligns),
        RowSpec::Latex => {
            let escaped: Vec<String> = cells.iter().map(|c| latex_escape(c)).collect();
            join_row(&escaped, "", "&", "\\\\")
        }
    }
}

fn mediawiki_row(sep: &str, cells: &[String], aligns: &[Align]) -> String {
    let attributed: Vec<String> = cells
        .iter()
        .zip(aligns)
        .map(|(c, a)| {
            let attr = match a {
                Align::Right | Align::Decimal => "align=\"right\"| ",
                Align::Center => "align=\"center\"| ",
                Align::Left => "",
            };
            format!(" {attr}{c} ")
        })
        .collect();
    let colsep = sep.repeat(2);
    format!("{sep}{}", attributed.join(&colsep)).trim_end().to_string()
}

fn html_row(tag: &str, cells: &[String], aligns: &[Align]) -> String {
    let mut body = String::new();
    for (c, a) in cells.iter().zip(aligns) {
        let attr = match a {
            Align::Right | Align::Decimal => " style=\"text-align: right;\"",
            Align::Center => " style=\"text-align: center;\"",
            Align::Left => "",
        };
        body.push_str(&format!("<{tag}{attr}>{c}</{tag}>"));
    }
    format!("<tr>{}</tr>", body.trim_end())
}

fn latex_escape(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    for ch in cell.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '^' => out.push_str("\\^{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            '<' => out.push_str("\\ensuremath{<}"),
            '>' => out.push_str("\\ensuremath{>}"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
