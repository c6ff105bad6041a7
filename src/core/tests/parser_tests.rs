// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser module tests
//!
//! Tests for parsing control tables:
//! - Directive parsing (container, allow_empty, default)
//! - Cell splitting (bare, quoted, empty)
//! - Cell typing (bool, number, text)
//! - Header validation
//! - Full table parsing with line numbers

use crate::core::{
    parser::*,
    types::{DefaultOption, ParamValue},
};
use std::io::Write;

#[test]
fn test_parse_directive() {
    let (_, directive) = parse_directive("@container = sliders").unwrap();
    assert_eq!(directive.name, "container");
    assert_eq!(directive.arg, None);
    assert_eq!(directive.value, "sliders");

    let (_, directive) = parse_directive("@default max=10").unwrap();
    assert_eq!(directive.name, "default");
    assert_eq!(directive.arg, Some("max"));
    assert_eq!(directive.value, "10");
}

#[test]
fn test_parse_directive_quoted_value() {
    let (_, directive) = parse_directive("@container = \"Model inputs\"").unwrap();
    assert_eq!(directive.value, "Model inputs");
}

#[test]
fn test_parse_cells() {
    let (rest, cells) = parse_cells("alpha, Alpha ,0.3").unwrap();
    assert_eq!(rest, "");
    let texts: Vec<&str> = cells.iter().map(|c| c.text).collect();
    assert_eq!(texts, vec!["alpha", "Alpha", "0.3"]);
    assert!(cells.iter().all(|c| !c.quoted));
}

#[test]
fn test_parse_cells_quoted_and_empty() {
    let (_, cells) = parse_cells("\"a, b\",,\"\"").unwrap();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0], Cell { text: "a, b", quoted: true });
    assert_eq!(cells[1], Cell { text: "", quoted: false });
    assert_eq!(cells[2], Cell { text: "", quoted: true });
}

#[test]
fn test_cell_typing() {
    let bare = |text| Cell { text, quoted: false };

    assert_eq!(cell_value("max", &bare("10")), Some(ParamValue::Number(10.0)));
    assert_eq!(cell_value("ticks", &bare("FALSE")), Some(ParamValue::Bool(false)));
    assert_eq!(cell_value("post", &bare("%")), Some(ParamValue::from("%")));
    assert_eq!(cell_value("max", &bare("")), None);
    assert_eq!(cell_value("max", &bare("NaN")), Some(ParamValue::from("NaN")));
}

#[test]
fn test_id_and_label_always_text() {
    let bare = |text| Cell { text, quoted: false };

    assert_eq!(cell_value("id", &bare("42")), Some(ParamValue::from("42")));
    assert_eq!(cell_value("label", &bare("true")), Some(ParamValue::from("true")));
}

#[test]
fn test_quoted_number_stays_text() {
    let cell = Cell { text: "10", quoted: true };
    assert_eq!(cell_value("max", &cell), Some(ParamValue::from("10")));
}

#[test]
fn test_parse_table_complete() {
    let content = r#"
# Model sliders
@container = sliders
@allow_empty = true
@default max = 10
@default step = 0.5

id, label, value, ticks
alpha, Alpha, 0.3, true
beta, , ,
"gamma", "Gamma, the third", 7,
"#;

    let table = parse_table(content).unwrap();

    assert_eq!(table.settings.container_name.as_deref(), Some("sliders"));
    assert_eq!(table.settings.allow_empty, Some(true));
    assert_eq!(
        table.settings.defaults,
        vec![(DefaultOption::Max, 10.0), (DefaultOption::Step, 0.5)]
    );
    assert_eq!(table.columns, vec!["id", "label", "value", "ticks"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.row_lines, vec![9, 10, 11]);

    // Empty cells are left unset
    assert_eq!(table.rows[1].id(), Some("beta"));
    assert_eq!(table.rows[1].len(), 1);

    assert_eq!(table.rows[0].get("ticks"), Some(&ParamValue::Bool(true)));
    assert_eq!(
        table.rows[2].get("label"),
        Some(&ParamValue::from("Gamma, the third"))
    );
    assert_eq!(table.rows[2].get("value"), Some(&ParamValue::Number(7.0)));
}

#[test]
fn test_header_only_table() {
    let table = parse_table("id, max\n").unwrap();
    assert_eq!(table.columns.len(), 2);
    assert!(table.rows.is_empty());
}

#[test]
fn test_empty_content() {
    let table = parse_table("# nothing here\n\n").unwrap();
    assert!(table.columns.is_empty());
    assert!(table.rows.is_empty());
    assert_eq!(table.settings, TableSettings::default());
}

#[test]
fn test_cell_count_mismatch_reports_line() {
    let result = parse_table("id, max\nalpha, 1\nbeta\n");
    assert!(matches!(
        result,
        Err(ParseError::InvalidSyntax { line: 3, .. })
    ));
}

#[test]
fn test_unterminated_quote_rejected() {
    let result = parse_table("id, label\nalpha, \"Alpha\n");
    assert!(matches!(
        result,
        Err(ParseError::InvalidSyntax { line: 2, .. })
    ));
}

#[test]
fn test_unknown_directive() {
    let result = parse_table("@theme = dark\nid\n");
    assert!(matches!(
        result,
        Err(ParseError::UnknownDirective { ref name, line: 1 }) if name == "theme"
    ));
}

#[test]
fn test_bad_directive_values() {
    assert!(matches!(
        parse_table("@allow_empty = maybe\n"),
        Err(ParseError::InvalidSyntax { line: 1, .. })
    ));
    assert!(matches!(
        parse_table("@default width = 3\n"),
        Err(ParseError::InvalidSyntax { line: 1, .. })
    ));
    assert!(matches!(
        parse_table("@default max = lots\n"),
        Err(ParseError::InvalidSyntax { line: 1, .. })
    ));
    assert!(matches!(
        parse_table("@default = 3\n"),
        Err(ParseError::InvalidSyntax { line: 1, .. })
    ));
    assert!(matches!(
        parse_table("@container =\n"),
        Err(ParseError::InvalidSyntax { line: 1, .. })
    ));
}

#[test]
fn test_valid_column_names() {
    let table = parse_table("id, _hidden, max_2, Label\n").unwrap();
    assert_eq!(table.columns, vec!["id", "_hidden", "max_2", "Label"]);
}

#[test]
fn test_invalid_column_name() {
    let result = parse_table("id, 2nd\n");
    assert!(matches!(
        result,
        Err(ParseError::InvalidColumn { ref name, line: 1 }) if name == "2nd"
    ));
}

#[test]
fn test_duplicate_column_name() {
    let result = parse_table("\nid, max, max\n");
    assert!(matches!(
        result,
        Err(ParseError::DuplicateColumn { ref name, line: 2 }) if name == "max"
    ));
}

#[test]
fn test_parse_table_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id, max").unwrap();
    writeln!(file, "alpha, 3").unwrap();

    let table = parse_table_file(file.path()).unwrap();
    assert_eq!(table.rows[0].get("max"), Some(&ParamValue::Number(3.0)));
}

#[test]
fn test_parse_table_file_missing() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = parse_table_file(&dir.path().join("missing.table"));
    assert!(matches!(result, Err(ParseError::IoError(_))));
}
