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

//! src/core/mod.rs
//!
//! Core compilation logic
//!
//! This module contains the data structures and transformations that turn
//! control tables into descriptors:
//! - Type definitions for rows, descriptors and containers
//! - The descriptor builder, row mapper and container assembler
//! - Duplicate id detection using HashMap-based O(1) lookup
//! - Table parsing and descriptor linting
//!
//! Everything here is pure and synchronous: no I/O except
//! `parser::parse_table_file`, no shared state between builds.

pub mod builder;
pub mod container;
pub mod duplicates;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod pipeline;
pub mod types;
pub mod validator;

pub use builder::build_descriptor;
pub use container::{assemble, ContainerPolicy};
pub use duplicates::{Duplicate, DuplicateDetector};
pub use error::{BuildError, SpecError};
pub use mapper::map_rows;
pub use pipeline::{compile, BuildConfig};
pub use types::*;
pub use validator::{lint_container, LintLevel, LintReport};

#[cfg(test)]
mod tests;
