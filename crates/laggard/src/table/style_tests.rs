// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the dialect catalog.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;

#[parameterized(
    plain = { "plain", Dialect::Plain },
    simple = { "simple", Dialect::Simple },
    grid = { "grid", Dialect::Grid },
    fancy_grid = { "fancy_grid", Dialect::FancyGrid },
    pipe = { "pipe", Dialect::Pipe },
    orgtbl = { "orgtbl", Dialect::Orgtbl },
    psql = { "psql", Dialect::Psql },
    rst = { "rst", Dialect::Rst },
    mediawiki = { "mediawiki", Dialect::MediaWiki },
    html = { "html", Dialect::Html },
    latex = { "latex", Dialect::Latex },
    latex_booktabs = { "latex_booktabs", Dialect::LatexBooktabs },
    tsv = { "tsv", Dialect::Tsv },
)]
fn from_name_resolves_every_dialect(name: &str, expected: Dialect) {
    assert_eq!(Dialect::from_name(name), expected);
}

#[test]
fn from_name_falls_back_to_simple() {
    assert_eq!(Dialect::from_name("not-a-real-format"), Dialect::Simple);
    assert_eq!(Dialect::from_name(""), Dialect::Simple);
}

#[test]
fn name_round_trips_through_from_name() {
    for dialect in Dialect::ALL {
        assert_eq!(Dialect::from_name(dialect.name()), *dialect);
    }
}

#[test]
fn fixed_line_repeats_fill_between_separators() {
    let spec = LineSpec::Fixed(Rule { begin: "+", fill: "-", sep: "+", end: "+" });
    assert_eq!(build_line(spec, &[3, 2], &[Align::Left, Align::Left]), "+---+--+");
}

#[test]
fn pipe_line_marks_alignment_with_colons() {
    let line = build_line(
        LineSpec::PipeColons,
        &[5, 5, 5, 5],
        &[Align::Left, Align::Right, Align::Center, Align::Decimal],
    );
    assert_eq!(line, "|:----|----:|:---:|----:|");
}

#[test]
fn latex_begin_maps_alignments_to_column_letters() {
    let line = build_line(
        LineSpec::LatexBegin { booktabs: false },
        &[1, 1, 1],
        &[Align::Left, Align::Right, Align::Center],
    );
    assert_eq!(line, "\\begin{tabular}{lrc}\n\\hline");
}

#[test]
fn latex_begin_booktabs_uses_toprule() {
    let line = build_line(LineSpec::LatexBegin { booktabs: true }, &[1], &[Align::Left]);
    assert_eq!(line, "\\begin{tabular}{l}\n\\toprule");
}

#[test]
fn fixed_row_joins_and_trims() {
    let spec = RowSpec::Fixed(RowTemplate { begin: "|", sep: "|", end: "|" });
    let cells = vec![" a ".to_string(), " b ".to_string()];
    assert_eq!(build_row(spec, &cells, &[Align::Left, Align::Left]), "| a | b |");
}

#[test]
fn html_row_adds_alignment_styles() {
    let cells = vec!["x".to_string(), "1".to_string()];
    let row = build_row(RowSpec::Html { tag: "td" }, &cells, &[Align::Left, Align::Decimal]);
    assert_eq!(row, "<tr><td>x</td><td style=\"text-align: right;\">1</td></tr>");
}

#[test]
fn mediawiki_data_row_doubles_separator_between_cells() {
    let cells = vec!["x".to_string(), "1".to_string()];
    let row =
        build_row(RowSpec::MediaWiki { sep: "|" }, &cells, &[Align::Left, Align::Decimal]);
    assert_eq!(row, "| x || align=\"right\"| 1");
}

#[test]
fn latex_row_escapes_special_characters() {
    let cells = vec!["50%".to_string(), "a_b".to_string()];
    let row = build_row(RowSpec::Latex, &cells, &[Align::Left, Align::Left]);
    assert_eq!(row, "50\\%&a\\_b\\\\");
}
