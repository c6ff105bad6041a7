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

//! Control Rows
//!
//! A declarative row-to-control compiler: describe UI controls as rows of a
//! table (one row per control, one column per parameter) and get back an
//! ordered container of fully resolved control descriptors.
//!
//! # Features
//!
//! - **Defaults with overrides:** Every control starts from `min`, `max`,
//!   `value` and `step` defaults; row values win field by field
//! - **Label fallback:** Rows without a label are labelled by their id
//! - **Order preservation:** Output order always matches row order
//! - **Duplicate detection:** O(1) id clash detection while mapping rows
//! - **Table format:** A small comment/directive-aware text format
//! - **Atomic output:** JSON written via temp-file-then-rename, with backups
//!
//! # Architecture
//!
//! - **`core`:** Pure compilation logic (types, builder, mapper, assembler,
//!   parser, lint)
//! - **`config`:** Output rendering and file writes
//!
//! Rendering descriptors into an actual UI is left to the consumer; the
//! `ContainerDescriptor` (or its JSON form) is the whole contract.
//!
//! # Examples
//!
//! ## Compiling rows
//!
//! ```
//! use control_rows::core::{compile, BuildConfig, ControlSpec};
//!
//! let rows = vec![
//!     ControlSpec::with_id("alpha"),
//!     ControlSpec::with_id("beta").with("label", "Beta").with("max", 10),
//! ];
//!
//! let container = compile(&rows, &BuildConfig::default())?;
//! assert_eq!(container.ids(), vec!["alpha", "beta"]);
//! assert_eq!(container.controls()[0].label, "alpha");
//! # Ok::<(), control_rows::core::BuildError>(())
//! ```
//!
//! ## Compiling a table
//!
//! ```
//! use control_rows::core::{compile, parser::parse_table, BuildConfig};
//!
//! let table = parse_table("@container = sliders\nid, value\nalpha, 0.3\n")?;
//! let config = BuildConfig::from_settings(&table.settings);
//!
//! let container = compile(&table.rows, &config)?;
//! assert_eq!(container.name(), "sliders");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{
    compile, BuildConfig, BuildError, ContainerDescriptor, ControlDefaults, ControlDescriptor,
    ControlSpec, ParamValue,
};
