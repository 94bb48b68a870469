// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generic fixed-width table rendering.
//!
//! Turns rows of cells into a text table in one of several output
//! dialects. Columns are typed by inspecting every cell, numeric
//! columns line up on the decimal point, and color codes embedded in
//! cells never count toward column widths.
//!
//! Input rows come in two shapes: bare sequences ([`Rows::Flat`]) or
//! named records ([`Rows::Records`]) whose first-seen key order fixes
//! the column order. A record with no keys renders as a blank line,
//! which callers use as a group separator.

mod style;
mod width;

pub use style::{Dialect, LineSpec, Part, RowSpec, RowTemplate, Rule, TableStyle};
pub use width::{after_point, strip_sgr, visible_width};

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use style::{build_line, build_row};
use width::{pad_both, pad_left, pad_right};

/// Screen columns reserved around each header beyond its own width.
pub const MIN_PADDING: usize = 2;

/// Input the renderer cannot interpret as a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("unsupported tabular shape: {0}")]
    UnsupportedShape(&'static str),
}

/// One cell of input data.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Nil,
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Cell {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Cell {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Cell {
        Cell::Float(v)
    }
}

/// A record row: column name to cell, in insertion order.
pub type Record = IndexMap<String, Cell>;

/// Input rows, in either supported shape.
#[derive(Clone, Debug)]
pub enum Rows {
    Flat(Vec<Vec<Cell>>),
    Records(Vec<Record>),
}

/// Where column headers come from.
#[derive(Clone, Debug, Default)]
pub enum Headers {
    /// No header row.
    #[default]
    None,
    /// Record keys in first-seen order; column indices for flat rows.
    Keys,
    /// The first data row is the header row.
    FirstRow,
    /// An explicit list of names.
    Explicit(Vec<String>),
}

/// Per-column alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    /// Right-aligned with fractional parts padded so decimal points
    /// line up down the column.
    Decimal,
}

/// How floats in numeric columns are written.
#[derive(Clone, Copy, Debug, Default)]
pub enum FloatFormat {
    /// Shortest round-trip representation.
    #[default]
    General,
    /// Fixed number of decimal places.
    Precision(usize),
}

/// Rendering options beyond the dialect itself.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub float_format: FloatFormat,
    /// Placeholder for [`Cell::Nil`] values.
    pub missing: String,
    /// Default alignment for numeric columns.
    pub numeric_align: Align,
    /// Default alignment for text columns.
    pub text_align: Align,
    /// Per-column overrides; columns past the end fall back to the
    /// inferred default.
    pub aligns: Option<Vec<Align>>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            float_format: FloatFormat::General,
            missing: String::new(),
            numeric_align: Align::Decimal,
            text_align: Align::Left,
            aligns: None,
        }
    }
}

/// Column kind, ordered from least to most generic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Nil,
    Int,
    Float,
    Text,
}

/// Render a fixed-width table.
pub fn render(
    rows: &Rows,
    headers: &Headers,
    dialect: Dialect,
    opts: &RenderOptions,
) -> Result<String, TableError> {
    let (data, mut names) = normalize(rows, headers)?;

    let ncols = data.iter().map(Vec::len).max().unwrap_or(names.len());
    if ncols == 0 {
        return Ok(String::new());
    }

    // Short explicit header lists pad on the left, long ones truncate.
    if !names.is_empty() && !data.is_empty() {
        while names.len() < ncols {
            names.insert(0, String::new());
        }
        names.truncate(ncols);
    }

    // Transpose into columns, padding ragged rows with empty cells.
    let mut cols: Vec<Vec<Cell>> = vec![Vec::with_capacity(data.len()); ncols];
    for row in &data {
        for (i, col) in cols.iter_mut().enumerate() {
            col.push(row.get(i).cloned().unwrap_or(Cell::Nil));
        }
    }

    let kinds: Vec<Kind> = cols.iter().map(|c| column_kind(c)).collect();

    let aligns: Vec<Align> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            if let Some(overrides) = &opts.aligns
                && let Some(a) = overrides.get(i)
            {
                return *a;
            }
            match kind {
                Kind::Int | Kind::Float => opts.numeric_align,
                Kind::Nil | Kind::Text => opts.text_align,
            }
        })
        .collect();

    let mut min_widths: Vec<usize> = if names.is_empty() {
        vec![0; ncols]
    } else {
        names.iter().map(|h| visible_width(h) + MIN_PADDING).collect()
    };

    // Format cells, then pad each column to a uniform width.
    let aligned: Vec<Vec<String>> = cols
        .iter()
        .zip(&kinds)
        .zip(&aligns)
        .zip(&min_widths)
        .map(|(((col, kind), align), min_width)| {
            let strings: Vec<String> =
                col.iter().map(|c| format_cell(c, *kind, opts)).collect();
            align_column(strings, *align, *min_width)
        })
        .collect();

    let header_cells: Vec<String> = if names.is_empty() {
        Vec::new()
    } else {
        for (min_width, col) in min_widths.iter_mut().zip(&aligned) {
            if let Some(first) = col.first() {
                *min_width = (*min_width).max(visible_width(first));
            }
        }
        names
            .iter()
            .zip(&aligns)
            .zip(&min_widths)
            .map(|((h, align), w)| match align {
                Align::Left => pad_right(*w, h),
                Align::Center => pad_both(*w, h),
                Align::Right | Align::Decimal => pad_left(*w, h),
            })
            .collect()
    };

    let widths: Vec<usize> = if names.is_empty() {
        aligned
            .iter()
            .map(|col| col.first().map(|c| visible_width(c)).unwrap_or(0))
            .collect()
    } else {
        min_widths
    };

    // Transpose back into display rows.
    let nrows = data.len();
    let display_rows: Vec<Vec<String>> = (0..nrows)
        .map(|r| aligned.iter().map(|col| col[r].clone()).collect())
        .collect();

    Ok(assemble(dialect.style(), &header_cells, &display_rows, &widths, &aligns))
}

/// Flatten both input shapes into rows of cells plus header names.
fn normalize(rows: &Rows, headers: &Headers) -> Result<(Vec<Vec<Cell>>, Vec<String>), TableError> {
    match rows {
        Rows::Records(records) => {
            if matches!(headers, Headers::Explicit(_)) {
                return Err(TableError::UnsupportedShape(
                    "explicit header list combined with record rows",
                ));
            }

            let first_is_header = matches!(headers, Headers::FirstRow);
            let (label_row, body) = if first_is_header {
                match records.split_first() {
                    Some((first, rest)) => (Some(first), rest),
                    None => (None, records.as_slice()),
                }
            } else {
                (None, records.as_slice())
            };

            // Column order is the order keys are first seen.
            let mut keys: IndexSet<String> = IndexSet::new();
            if let Some(first) = label_row {
                keys.extend(first.keys().cloned());
            }
            for record in body {
                for key in record.keys() {
                    keys.insert(key.clone());
                }
            }

            let data: Vec<Vec<Cell>> = body
                .iter()
                .map(|record| {
                    keys.iter()
                        .map(|k| record.get(k).cloned().unwrap_or(Cell::Nil))
                        .collect()
                })
                .collect();

            let names: Vec<String> = match headers {
                Headers::None => Vec::new(),
                Headers::Keys => keys.into_iter().collect(),
                Headers::FirstRow => keys
                    .iter()
                    .map(|k| match label_row.and_then(|r| r.get(k)) {
                        Some(cell) => cell_to_label(cell),
                        None => k.clone(),
                    })
                    .collect(),
                Headers::Explicit(_) => unreachable!("rejected above"),
            };

            Ok((data, names))
        }
        Rows::Flat(data) => {
            let mut data = data.clone();
            let names: Vec<String> = match headers {
                Headers::None => Vec::new(),
                Headers::Keys => {
                    let ncols = data.iter().map(Vec::len).max().unwrap_or(0);
                    (0..ncols).map(|i| i.to_string()).collect()
                }
                Headers::FirstRow => {
                    if data.is_empty() {
                        Vec::new()
                    } else {
                        data.remove(0).iter().map(cell_to_label).collect()
                    }
                }
                Headers::Explicit(names) => names.clone(),
            };
            Ok((data, names))
        }
    }
}

fn cell_to_label(cell: &Cell) -> String {
    match cell {
        Cell::Nil => String::new(),
        Cell::Int(v) => v.to_string(),
        Cell::Float(v) => v.to_string(),
        Cell::Text(s) => s.clone(),
    }
}

fn cell_kind(cell: &Cell) -> Kind {
    match cell {
        Cell::Nil => Kind::Nil,
        Cell::Int(_) => Kind::Int,
        Cell::Float(_) => Kind::Float,
        Cell::Text(s) => {
            let plain = strip_sgr(s);
            if width::is_integer(&plain) {
                Kind::Int
            } else if width::is_number(&plain) {
                Kind::Float
            } else {
                Kind::Text
            }
        }
    }
}

/// The least generic kind every cell in the column converts to.
fn column_kind(col: &[Cell]) -> Kind {
    col.iter().map(cell_kind).fold(Kind::Int, Kind::max)
}

fn format_float(v: f64, fmt: FloatFormat) -> String {
    match fmt {
        FloatFormat::General => format!("{v}"),
        FloatFormat::Precision(p) => format!("{v:.prec$}", prec = p),
    }
}

fn format_cell(cell: &Cell, kind: Kind, opts: &RenderOptions) -> String {
    match cell {
        Cell::Nil => opts.missing.clone(),
        Cell::Int(v) => {
            if kind == Kind::Float {
                format_float(*v as f64, opts.float_format)
            } else {
                v.to_string()
            }
        }
        Cell::Float(v) => {
            if kind == Kind::Float {
                format_float(*v, opts.float_format)
            } else {
                v.to_string()
            }
        }
        Cell::Text(s) => {
            if kind == Kind::Float {
                // Numeric string, possibly colored: reformat the digits
                // in place and keep the surrounding codes.
                let plain = strip_sgr(s);
                match plain.trim().parse::<f64>() {
                    Ok(v) => {
                        let formatted = format_float(v, opts.float_format);
                        s.replace(plain.as_ref(), &formatted)
                    }
                    Err(_) => s.clone(),
                }
            } else {
                s.clone()
            }
        }
    }
}

/// Pad every cell of a column to a uniform visible width.
fn align_column(strings: Vec<String>, align: Align, min_width: usize) -> Vec<String> {
    let prepared: Vec<String> = match align {
        Align::Decimal => {
            // Line up decimal points: pad fractional parts out to the
            // column's maximum before right-aligning.
            let decimals: Vec<isize> =
                strings.iter().map(|s| after_point(&strip_sgr(s))).collect();
            let max_decimals = decimals.iter().copied().max().unwrap_or(-1);
            strings
                .iter()
                .zip(&decimals)
                .map(|(s, d)| {
                    let fill = (max_decimals - d).max(0) as usize;
                    format!("{s}{}", " ".repeat(fill))
                })
                .collect()
        }
        _ => strings.iter().map(|s| s.trim().to_string()).collect(),
    };

    let max_width = prepared
        .iter()
        .map(|s| visible_width(s))
        .max()
        .unwrap_or(0)
        .max(min_width);

    prepared
        .iter()
        .map(|s| match align {
            Align::Right | Align::Decimal => pad_left(max_width, s),
            Align::Center => pad_both(max_width, s),
            Align::Left => pad_right(max_width, s),
        })
        .collect()
}

/// Stitch padded headers and rows together according to the dialect.
fn assemble(
    style: TableStyle,
    headers: &[String],
    rows: &[Vec<String>],
    widths: &[usize],
    aligns: &[Align],
) -> String {
    let hidden: &[Part] = if headers.is_empty() { &[] } else { style.hide_with_header };
    let pad = " ".repeat(style.padding);
    let padded_widths: Vec<usize> = widths.iter().map(|w| w + 2 * style.padding).collect();
    let pad_cells =
        |cells: &[String]| -> Vec<String> { cells.iter().map(|c| format!("{pad}{c}{pad}")).collect() };

    let mut lines: Vec<String> = Vec::new();

    if let Some(spec) = style.line_above
        && !hidden.contains(&Part::LineAbove)
    {
        lines.push(build_line(spec, &padded_widths, aligns));
    }

    if !headers.is_empty() {
        lines.push(build_row(style.header_row, &pad_cells(headers), aligns));
        if let Some(spec) = style.line_below_header {
            lines.push(build_line(spec, &padded_widths, aligns));
        }
    }

    if let Some(between) = style.line_between_rows
        && !rows.is_empty()
    {
        for row in &rows[..rows.len() - 1] {
            lines.push(build_row(style.data_row, &pad_cells(row), aligns));
            lines.push(build_line(between, &padded_widths, aligns));
        }
        if let Some(last) = rows.last() {
            lines.push(build_row(style.data_row, &pad_cells(last), aligns));
        }
    } else {
        for row in rows {
            lines.push(build_row(style.data_row, &pad_cells(row), aligns));
        }
    }

    if let Some(spec) = style.line_below
        && !hidden.contains(&Part::LineBelow)
    {
        lines.push(build_line(spec, &padded_widths, aligns));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
