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

//! Control descriptor builder
//!
//! Turns one `ControlSpec` row into one `ControlDescriptor`:
//! 1. Check the identifier
//! 2. Seed options from the defaults
//! 3. Override field by field with the row's values (the row wins)
//! 4. Fall back to the id when the row has no label
//!
//! The builder is pure: everything it needs arrives as a parameter.

use crate::core::error::SpecError;
use crate::core::types::{ControlDefaults, ControlDescriptor, ControlSpec, ID_FIELD, LABEL_FIELD};

/// Builds one descriptor from one row
///
/// # Example
/// ```
/// use control_rows::core::{build_descriptor, ControlDefaults, ControlSpec};
///
/// let spec = ControlSpec::with_id("alpha").with("max", 10);
/// let descriptor = build_descriptor(&spec, &ControlDefaults::default())?;
///
/// assert_eq!(descriptor.label, "alpha");
/// assert_eq!(descriptor.number("max"), Some(10.0));
/// assert_eq!(descriptor.number("step"), Some(0.1));
/// # Ok::<(), control_rows::core::SpecError>(())
/// ```
pub fn build_descriptor(
    spec: &ControlSpec,
    defaults: &ControlDefaults,
) -> Result<ControlDescriptor, SpecError> {
    let id = validate_id(spec)?;

    let mut options = defaults.to_options();
    for (name, value) in spec.iter() {
        if name == ID_FIELD || name == LABEL_FIELD {
            continue;
        }
        options.insert(name.to_string(), value.clone());
    }

    let label = spec
        .get(LABEL_FIELD)
        .map(|value| value.to_string())
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| id.to_string());

    Ok(ControlDescriptor {
        id: id.to_string(),
        label,
        options,
    })
}

/// Returns the row's identifier, trimmed, if it is usable
fn validate_id(spec: &ControlSpec) -> Result<&str, SpecError> {
    let value = spec.get(ID_FIELD).ok_or(SpecError::MissingId)?;
    let id = value.as_text().ok_or(SpecError::NonTextId(value.kind()))?.trim();

    if id.is_empty() {
        return Err(SpecError::EmptyId);
    }

    Ok(id)
}
