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

//! src/core/parser.rs
//!
//! Control table parser
//!
//! This module parses control tables into `ControlSpec` rows.
//! It handles:
//! - Directives (`@container = sliders`, `@default max = 10`)
//! - A header line naming the columns
//! - Comma-separated data rows with optional double-quoted cells
//! - Cell typing (bool, number, text)
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Format
//! ```text
//! # Sliders for the model panel
//! @container = sliders
//! @default max = 10
//! id, label, value
//! alpha, Alpha, 0.3
//! beta, ,
//! ```
//!
//! An empty cell means "not set": the row falls back to the defaults (and
//! to its id for the label). The parser only structures data; identifier
//! checks happen in the builder.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, space0, space1},
};
use nom::{
    combinator::{all_consuming, map, opt},
    multi::separated_list1,
    sequence::{delimited, preceded},
};
use nom::{IResult, Parser};
use regex::Regex;
use std::{collections::HashSet, fs, path::Path, sync::LazyLock};
use thiserror::Error;

use crate::core::types::{ControlSpec, DefaultOption, ParamValue, ID_FIELD, LABEL_FIELD};

/// Valid column names: a letter or underscore, then word characters
// Literal pattern, covered by the column-name tests
#[allow(clippy::expect_used)]
static COLUMN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("column name pattern should be valid regex")
});

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unknown directive '@{name}' on line {line}")]
    UnknownDirective { name: String, line: usize },

    #[error("Invalid column name '{name}' on line {line}")]
    InvalidColumn { name: String, line: usize },

    #[error("Duplicate column '{name}' on line {line}")]
    DuplicateColumn { name: String, line: usize },

    #[error("IO error reading table: {0}")]
    IoError(#[from] std::io::Error),
}

/// Build settings declared inside a table via directives
///
/// Every field is optional; unset fields leave the caller's configuration
/// alone (see `BuildConfig::with_settings`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSettings {
    /// `@container = <name>`
    pub container_name: Option<String>,

    /// `@allow_empty = true|false`
    pub allow_empty: Option<bool>,

    /// `@default <option> = <number>`, in file order
    pub defaults: Vec<(DefaultOption, f64)>,
}

/// A parsed control table
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlTable {
    /// Directive values
    pub settings: TableSettings,

    /// Header column names, in file order (empty if the table had no header)
    pub columns: Vec<String>,

    /// One spec per data row, in file order
    pub rows: Vec<ControlSpec>,

    /// 1-based source line of each row (parallel to `rows`)
    pub row_lines: Vec<usize>,
}

/// A raw cell before typing
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<'a> {
    pub text: &'a str,
    /// Quoted cells are always text, even when empty
    pub quoted: bool,
}

/// A raw directive line: `@name [arg] = value`
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arg: Option<&'a str>,
    pub value: &'a str,
}

/// Reads and parses a control table file
pub fn parse_table_file(path: &Path) -> Result<ControlTable, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_table(&content)
}

/// Parse a complete control table
///
/// # Arguments
/// * `content` - The full table text
///
/// # Returns
/// The directives, header and rows, or the first ParseError
///
/// # Example
/// ```
/// use control_rows::core::parser::parse_table;
///
/// let table = parse_table("id, max\nalpha, 10\nbeta,\n")?;
/// assert_eq!(table.rows.len(), 2);
/// assert_eq!(table.rows[0].id(), Some("alpha"));
/// # Ok::<(), control_rows::core::parser::ParseError>(())
/// ```
pub fn parse_table(content: &str) -> Result<ControlTable, ParseError> {
    let mut table = ControlTable::default();
    let mut header_seen = false;

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        if line_trimmed.starts_with('@') {
            let directive = match parse_directive(line_trimmed) {
                Ok((_, directive)) => directive,
                Err(e) => {
                    return Err(ParseError::InvalidSyntax {
                        line: line_num,
                        message: format!("malformed directive: {:?}", e),
                    })
                }
            };
            apply_directive(&mut table.settings, &directive, line_num)?;
            continue;
        }

        let cells = split_cells(line_trimmed, line_num)?;

        if !header_seen {
            table.columns = parse_header(&cells, line_num)?;
            header_seen = true;
            continue;
        }

        if cells.len() != table.columns.len() {
            return Err(ParseError::InvalidSyntax {
                line: line_num,
                message: format!(
                    "expected {} cells, found {}",
                    table.columns.len(),
                    cells.len()
                ),
            });
        }

        let spec = table
            .columns
            .iter()
            .zip(&cells)
            .filter_map(|(column, cell)| {
                cell_value(column, cell).map(|value| (column.clone(), value))
            })
            .collect::<ControlSpec>();

        table.rows.push(spec);
        table.row_lines.push(line_num);
    }

    Ok(table)
}

/// Parse a directive line
///
/// Format: @NAME [ARG] = VALUE
/// Examples:
/// - "@container = sliders" → ("container", None, "sliders")
/// - "@default max = 10" → ("default", Some("max"), "10")
pub fn parse_directive(input: &str) -> IResult<&str, Directive<'_>> {
    let (input, name) = preceded(char('@'), identifier).parse(input)?;
    let (input, arg) = opt(preceded(space1, identifier)).parse(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;

    Ok((
        "",
        Directive {
            name,
            arg,
            value: unquote(input.trim()),
        },
    ))
}

/// Interprets a directive and records it in the settings
fn apply_directive(
    settings: &mut TableSettings,
    directive: &Directive<'_>,
    line: usize,
) -> Result<(), ParseError> {
    let invalid = |message: String| ParseError::InvalidSyntax { line, message };

    match directive.name {
        "container" => {
            if directive.value.is_empty() {
                return Err(invalid("@container needs a name".to_string()));
            }
            settings.container_name = Some(directive.value.to_string());
        }
        "allow_empty" => {
            let flag = parse_bool(directive.value).ok_or_else(|| {
                invalid(format!("@allow_empty expects true or false, found '{}'", directive.value))
            })?;
            settings.allow_empty = Some(flag);
        }
        "default" => {
            let arg = directive
                .arg
                .ok_or_else(|| invalid("@default needs an option name (min, max, value, step)".to_string()))?;
            let option = DefaultOption::from_name(arg)
                .ok_or_else(|| invalid(format!("unknown default option '{}'", arg)))?;
            let value = parse_number(directive.value).ok_or_else(|| {
                invalid(format!("@default {} expects a number, found '{}'", option, directive.value))
            })?;
            settings.defaults.push((option, value));
        }
        other => {
            return Err(ParseError::UnknownDirective {
                name: other.to_string(),
                line,
            })
        }
    }

    Ok(())
}

/// Validates header cells and returns the column names
fn parse_header(cells: &[Cell<'_>], line: usize) -> Result<Vec<String>, ParseError> {
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(cells.len());

    for cell in cells {
        let name = cell.text.trim();
        if !COLUMN_NAME.is_match(name) {
            return Err(ParseError::InvalidColumn {
                name: name.to_string(),
                line,
            });
        }
        if !seen.insert(name) {
            return Err(ParseError::DuplicateColumn {
                name: name.to_string(),
                line,
            });
        }
        columns.push(name.to_string());
    }

    Ok(columns)
}

/// Splits one line into cells, mapping nom failures to a line-numbered error
fn split_cells(line: &str, line_num: usize) -> Result<Vec<Cell<'_>>, ParseError> {
    match all_consuming(parse_cells).parse(line) {
        Ok((_, cells)) => Ok(cells),
        Err(e) => Err(ParseError::InvalidSyntax {
            line: line_num,
            message: format!("malformed row: {:?}", e),
        }),
    }
}

/// Parse a comma-separated list of cells
///
/// Formats supported:
/// - "alpha, 0.3" → [alpha, 0.3]
/// - "\"a, b\", 1" → [a, b (quoted), 1]
/// - "alpha,," → [alpha, "", ""]
pub fn parse_cells(input: &str) -> IResult<&str, Vec<Cell<'_>>> {
    separated_list1(char(','), parse_cell).parse(input)
}

/// Parse a single cell, quoted or bare, ignoring surrounding spaces
pub fn parse_cell(input: &str) -> IResult<&str, Cell<'_>> {
    delimited(space0, alt((quoted_cell, bare_cell)), space0).parse(input)
}

fn quoted_cell(input: &str) -> IResult<&str, Cell<'_>> {
    map(
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        |text: &str| Cell { text, quoted: true },
    )
    .parse(input)
}

fn bare_cell(input: &str) -> IResult<&str, Cell<'_>> {
    map(take_while(|c: char| c != ',' && c != '"'), |text: &str| Cell {
        text: text.trim(),
        quoted: false,
    })
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Types a cell for the given column; `None` means the column is unset
///
/// - Quoted cells, `id` and `label` are always text
/// - `true`/`false` (any case) become booleans
/// - Finite numbers become numbers
/// - Everything else is text
pub fn cell_value(column: &str, cell: &Cell<'_>) -> Option<ParamValue> {
    if cell.quoted {
        return Some(ParamValue::Text(cell.text.to_string()));
    }
    if cell.text.is_empty() {
        return None;
    }
    if column == ID_FIELD || column == LABEL_FIELD {
        return Some(ParamValue::Text(cell.text.to_string()));
    }

    if let Some(flag) = parse_bool(cell.text) {
        return Some(ParamValue::Bool(flag));
    }
    if let Some(number) = parse_number(cell.text) {
        return Some(ParamValue::Number(number));
    }

    Some(ParamValue::Text(cell.text.to_string()))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
