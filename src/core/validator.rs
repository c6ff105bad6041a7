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

//! Descriptor lint
//!
//! Checks resolved descriptors for option combinations that compile fine
//! but would render a broken control:
//! - `min` greater than `max`
//! - non-positive `step`
//! - recognised options holding non-numeric values
//! - initial `value` outside `[min, max]`
//!
//! The lint is advisory. `compile` never runs it; the CLI `check` command
//! does, and refuses (exit code 1) when the report has errors.
//!
//! # Example
//! ```
//! use control_rows::core::{compile, lint_container, BuildConfig, ControlSpec};
//!
//! let rows = vec![ControlSpec::with_id("a").with("min", 5).with("max", 1)];
//! let container = compile(&rows, &BuildConfig::default())?;
//!
//! let report = lint_container(&container);
//! assert!(report.has_errors());
//! # Ok::<(), control_rows::core::BuildError>(())
//! ```

use crate::core::types::{ContainerDescriptor, ControlDescriptor, DefaultOption};

/// Lint severity level
///
/// - **Error**: The control cannot render sensibly
/// - **Warning**: Suspicious but renderable
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LintLevel {
    Error,
    Warning,
}

/// A single issue found on one control
#[derive(Clone, Debug, PartialEq)]
pub struct LintIssue {
    /// Index of the control within its container (0-based)
    pub control_index: usize,
    /// Id of the control
    pub control_id: String,
    /// Severity level
    pub level: LintLevel,
    /// Human-readable description of the issue
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

/// Every issue found in a container, in control order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LintReport {
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    /// Creates a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the report contains any Error-level issues
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.level == LintLevel::Error)
    }

    /// Number of issues at the given level
    pub fn count(&self, level: LintLevel) -> usize {
        self.issues.iter().filter(|issue| issue.level == level).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(
        &mut self,
        control: (usize, &ControlDescriptor),
        level: LintLevel,
        message: String,
        suggestion: Option<String>,
    ) {
        self.issues.push(LintIssue {
            control_index: control.0,
            control_id: control.1.id.clone(),
            level,
            message,
            suggestion,
        });
    }
}

/// Lints every control in a container
pub fn lint_container(container: &ContainerDescriptor) -> LintReport {
    let mut report = LintReport::new();
    for (index, descriptor) in container.iter().enumerate() {
        lint_descriptor(index, descriptor, &mut report);
    }
    report
}

/// Lints one control, appending its issues to `report`
pub fn lint_descriptor(index: usize, descriptor: &ControlDescriptor, report: &mut LintReport) {
    let control = (index, descriptor);

    // Recognised options must stay numeric
    let mut all_numeric = true;
    for option in DefaultOption::ALL {
        if let Some(value) = descriptor.option(option.name()) {
            if value.as_f64().is_none() {
                all_numeric = false;
                report.push(
                    control,
                    LintLevel::Error,
                    format!("'{}' must be a number, found {} '{}'", option, value.kind(), value),
                    None,
                );
            }
        }
    }
    if !all_numeric {
        return;
    }

    let min = descriptor.number(DefaultOption::Min.name());
    let max = descriptor.number(DefaultOption::Max.name());
    let value = descriptor.number(DefaultOption::Value.name());
    let step = descriptor.number(DefaultOption::Step.name());

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            report.push(
                control,
                LintLevel::Error,
                format!("min ({}) is greater than max ({})", min, max),
                Some("swap the bounds".to_string()),
            );
        } else if let Some(value) = value {
            if value < min || value > max {
                report.push(
                    control,
                    LintLevel::Warning,
                    format!("value ({}) lies outside [{}, {}]", value, min, max),
                    Some(format!("use {} instead", value.clamp(min, max))),
                );
            }
        }
    }

    if let Some(step) = step {
        if step <= 0.0 {
            report.push(
                control,
                LintLevel::Error,
                format!("step ({}) must be positive", step),
                None,
            );
        }
    }
}
