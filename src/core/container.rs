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

//! Container assembler

use serde::{Deserialize, Serialize};

use crate::core::error::BuildError;
use crate::core::types::{ContainerDescriptor, ControlDescriptor};

/// Container policy
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContainerPolicy {
    /// Accept a container with zero controls (default: false)
    pub allow_empty: bool,
}

/// Wraps descriptors into a named container, order untouched
///
/// Fails with `BuildError::EmptyContainer` when there are no descriptors
/// and `policy.allow_empty` is false.
pub fn assemble(
    descriptors: Vec<ControlDescriptor>,
    name: &str,
    policy: ContainerPolicy,
) -> Result<ContainerDescriptor, BuildError> {
    if descriptors.is_empty() && !policy.allow_empty {
        return Err(BuildError::EmptyContainer {
            name: name.to_string(),
        });
    }

    Ok(ContainerDescriptor::new(name.to_string(), descriptors))
}
