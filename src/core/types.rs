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

//! src/core/types.rs
//!
//! Core type definitions for control compilation
//!
//! This module defines the fundamental types used throughout the crate:
//! - `ParamValue`: A single cell value (text, number or boolean)
//! - `ControlSpec`: One declarative input row
//! - `ControlDefaults`: The recognised default options (min, max, value, step)
//! - `ControlDescriptor`: A fully resolved control, ready for rendering
//! - `ContainerDescriptor`: An ordered, named group of descriptors
//!
//! Maps are `BTreeMap`s throughout so that two builds over the same input
//! are identical down to option ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the mandatory identifier column
pub const ID_FIELD: &str = "id";

/// Name of the optional display label column
pub const LABEL_FIELD: &str = "label";

/// A single parameter value from a control row
///
/// Serialised untagged, so `{"max": 10}` and `{"label": "Alpha"}` read
/// naturally in JSON output.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag (e.g. `ticks = true`)
    Bool(bool),
    /// Numeric option (e.g. `max = 10`)
    Number(f64),
    /// Free text (identifiers, labels, units)
    Text(String),
}

impl ParamValue {
    /// Returns the numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "boolean",
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(f64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// One row of declarative input
///
/// Maps parameter names (table columns) to values. A spec is immutable once
/// built: `with` consumes the spec and returns an extended copy, which keeps
/// construction chains readable in tests and callers.
///
/// # Example
/// ```
/// use control_rows::core::ControlSpec;
///
/// let spec = ControlSpec::new().with("id", "alpha").with("max", 10);
/// assert_eq!(spec.id(), Some("alpha"));
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ControlSpec {
    params: BTreeMap<String, ParamValue>,
}

impl ControlSpec {
    /// Creates an empty spec (which will not build until it gets an `id`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a spec carrying only an identifier
    pub fn with_id(id: &str) -> Self {
        Self::new().with(ID_FIELD, id)
    }

    /// Returns a copy of this spec with `name` set to `value`
    ///
    /// Setting a name twice keeps the last value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Looks up a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// Text identifier, if present and of text type
    ///
    /// Does not check for emptiness; that is the builder's job.
    pub fn id(&self) -> Option<&str> {
        self.get(ID_FIELD).and_then(ParamValue::as_text)
    }

    /// Iterates over parameters in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters in this row
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if the row has no parameters at all
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl FromIterator<(String, ParamValue)> for ControlSpec {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

/// The recognised default options
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultOption {
    /// Lower bound
    Min,
    /// Upper bound
    Max,
    /// Initial value
    Value,
    /// Increment
    Step,
}

impl DefaultOption {
    /// All recognised options, in declaration order
    pub const ALL: [DefaultOption; 4] = [
        DefaultOption::Min,
        DefaultOption::Max,
        DefaultOption::Value,
        DefaultOption::Step,
    ];

    /// Column/option name for this option
    pub fn name(self) -> &'static str {
        match self {
            DefaultOption::Min => "min",
            DefaultOption::Max => "max",
            DefaultOption::Value => "value",
            DefaultOption::Step => "step",
        }
    }

    /// Resolves an option name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|opt| opt.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for DefaultOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Default option values applied to every control
///
/// Row values override these field by field.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ControlDefaults {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub step: f64,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.5,
            step: 0.1,
        }
    }
}

impl ControlDefaults {
    /// Reads one option
    pub fn get(&self, option: DefaultOption) -> f64 {
        match option {
            DefaultOption::Min => self.min,
            DefaultOption::Max => self.max,
            DefaultOption::Value => self.value,
            DefaultOption::Step => self.step,
        }
    }

    /// Returns a copy with one option replaced
    pub fn with(mut self, option: DefaultOption, value: f64) -> Self {
        match option {
            DefaultOption::Min => self.min = value,
            DefaultOption::Max => self.max = value,
            DefaultOption::Value => self.value = value,
            DefaultOption::Step => self.step = value,
        }
        self
    }

    /// Expands the defaults into an option map, the starting point of
    /// every descriptor
    pub fn to_options(&self) -> BTreeMap<String, ParamValue> {
        DefaultOption::ALL
            .into_iter()
            .map(|opt| (opt.name().to_string(), ParamValue::Number(self.get(opt))))
            .collect()
    }
}

/// A fully resolved control
///
/// # Example
/// ```ignore
/// let descriptor = ControlDescriptor {
///     id: "alpha".to_string(),
///     label: "alpha".to_string(),
///     options: ControlDefaults::default().to_options(),
/// };
/// // Displays as: alpha "alpha" [max=1, min=0, step=0.1, value=0.5]
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ControlDescriptor {
    /// Unique, non-empty identifier
    pub id: String,

    /// Display label (the id when the row has none)
    pub label: String,

    /// Resolved options: defaults overridden by row values
    pub options: BTreeMap<String, ParamValue>,
}

impl ControlDescriptor {
    /// Looks up a resolved option
    pub fn option(&self, name: &str) -> Option<&ParamValue> {
        self.options.get(name)
    }

    /// Looks up a resolved option as a number
    pub fn number(&self, name: &str) -> Option<f64> {
        self.option(name).and_then(ParamValue::as_f64)
    }
}

impl fmt::Display for ControlDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.id, self.label)?;

        if !self.options.is_empty() {
            let opts = self
                .options
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " [{}]", opts)?;
        }

        Ok(())
    }
}

/// An ordered, named group of control descriptors
///
/// Only the container assembler creates these, so the order always matches
/// the input rows and the empty-container policy has already been applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContainerDescriptor {
    name: String,
    controls: Vec<ControlDescriptor>,
}

impl ContainerDescriptor {
    pub(crate) fn new(name: String, controls: Vec<ControlDescriptor>) -> Self {
        Self { name, controls }
    }

    /// Container name/label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptors in input row order
    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    /// Iterates over descriptors in input row order
    pub fn iter(&self) -> std::slice::Iter<'_, ControlDescriptor> {
        self.controls.iter()
    }

    /// Identifiers in input row order
    pub fn ids(&self) -> Vec<&str> {
        self.controls.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Consumes the container, yielding its descriptors
    pub fn into_controls(self) -> Vec<ControlDescriptor> {
        self.controls
    }
}

impl<'a> IntoIterator for &'a ContainerDescriptor {
    type Item = &'a ControlDescriptor;
    type IntoIter = std::slice::Iter<'a, ControlDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.controls.iter()
    }
}
