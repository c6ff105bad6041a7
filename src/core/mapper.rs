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

//! Row-to-descriptor mapper
//!
//! Applies a builder to every row, keeping row order. Rows are built
//! independently; the only check spanning rows is id uniqueness, done
//! incrementally with a `DuplicateDetector`.

use tracing::trace;

use crate::core::duplicates::DuplicateDetector;
use crate::core::error::{BuildError, SpecError};
use crate::core::types::{ControlDescriptor, ControlSpec};

/// Maps rows to descriptors, stopping at the first invalid or duplicate row
///
/// `build` is usually a closure over [`build_descriptor`](crate::core::build_descriptor)
/// with a set of defaults.
///
/// # Errors
/// - `BuildError::InvalidSpec` when `build` rejects a row
/// - `BuildError::DuplicateId` when a row reuses an earlier row's id
///
/// # Example
/// ```
/// use control_rows::core::{build_descriptor, map_rows, ControlDefaults, ControlSpec};
///
/// let defaults = ControlDefaults::default();
/// let rows = vec![ControlSpec::with_id("a"), ControlSpec::with_id("b")];
/// let descriptors = map_rows(&rows, |spec| build_descriptor(spec, &defaults))?;
///
/// assert_eq!(descriptors.len(), 2);
/// assert_eq!(descriptors[1].id, "b");
/// # Ok::<(), control_rows::core::BuildError>(())
/// ```
pub fn map_rows<F>(rows: &[ControlSpec], build: F) -> Result<Vec<ControlDescriptor>, BuildError>
where
    F: Fn(&ControlSpec) -> Result<ControlDescriptor, SpecError>,
{
    let mut seen = DuplicateDetector::new();
    let mut descriptors = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let descriptor = build(row).map_err(|source| BuildError::InvalidSpec { index, source })?;

        if let Some(first) = seen.add_id(&descriptor.id, index) {
            return Err(BuildError::DuplicateId {
                id: descriptor.id,
                first,
                second: index,
            });
        }

        trace!(index, id = %descriptor.id, "built control");
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}
