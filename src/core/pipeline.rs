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

//! Full build pipeline
//!
//! `compile` chains the three stages:
//! 1. `build_descriptor` per row (with `BuildConfig::defaults`)
//! 2. `map_rows` across the table (order + id uniqueness)
//! 3. `assemble` into the named container (empty policy)
//!
//! Configuration is layered with explicit override rules, later source
//! wins: built-in defaults, then table directives, then caller overrides.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::builder::build_descriptor;
use crate::core::container::{assemble, ContainerPolicy};
use crate::core::error::BuildError;
use crate::core::mapper::map_rows;
use crate::core::parser::TableSettings;
use crate::core::types::{ContainerDescriptor, ControlDefaults, ControlSpec};

/// Container name used when nothing else is configured
pub const DEFAULT_CONTAINER_NAME: &str = "controls";

/// Everything a build pass needs besides the rows
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BuildConfig {
    /// Option values every control starts from
    pub defaults: ControlDefaults,

    /// Name of the resulting container
    pub container_name: String,

    /// Empty-container policy
    pub container: ContainerPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            defaults: ControlDefaults::default(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            container: ContainerPolicy::default(),
        }
    }
}

impl BuildConfig {
    /// Built-in defaults overridden by a table's directives
    pub fn from_settings(settings: &TableSettings) -> Self {
        Self::default().with_settings(settings)
    }

    /// Applies table directives on top of this config
    pub fn with_settings(mut self, settings: &TableSettings) -> Self {
        if let Some(name) = &settings.container_name {
            self.container_name = name.clone();
        }
        if let Some(allow_empty) = settings.allow_empty {
            self.container.allow_empty = allow_empty;
        }
        for &(option, value) in &settings.defaults {
            self.defaults = self.defaults.with(option, value);
        }
        self
    }
}

/// Compiles rows into a container descriptor
///
/// # Example
/// ```
/// use control_rows::core::{compile, BuildConfig, ControlSpec};
///
/// let rows = vec![ControlSpec::with_id("alpha"), ControlSpec::with_id("beta")];
/// let container = compile(&rows, &BuildConfig::default())?;
///
/// assert_eq!(container.ids(), vec!["alpha", "beta"]);
/// # Ok::<(), control_rows::core::BuildError>(())
/// ```
pub fn compile(rows: &[ControlSpec], config: &BuildConfig) -> Result<ContainerDescriptor, BuildError> {
    debug!(
        rows = rows.len(),
        container = %config.container_name,
        "compiling control table"
    );

    let descriptors = map_rows(rows, |spec| build_descriptor(spec, &config.defaults))?;
    let container = assemble(descriptors, &config.container_name, config.container)?;

    debug!(controls = container.len(), "compiled container");
    Ok(container)
}
