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

//! Build errors
//!
//! Every failure aborts the whole build: there are no partial results and
//! nothing is retried. These are input errors, not transient ones.

use thiserror::Error;

/// Why a single row cannot become a descriptor
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SpecError {
    /// Row has no `id` column
    #[error("missing 'id'")]
    MissingId,

    /// `id` is present but empty or whitespace
    #[error("'id' is empty")]
    EmptyId,

    /// `id` is a number or boolean instead of text
    #[error("'id' must be text, found {0}")]
    NonTextId(&'static str),
}

/// Errors from a build pass
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildError {
    /// A row lacks a usable identifier
    #[error("Invalid control spec at row {index}: {source}")]
    InvalidSpec {
        /// 0-based row index
        index: usize,
        source: SpecError,
    },

    /// Two rows share an identifier
    #[error("Duplicate control id '{id}' at rows {first} and {second}")]
    DuplicateId {
        id: String,
        /// 0-based index of the first occurrence
        first: usize,
        /// 0-based index of the clashing row
        second: usize,
    },

    /// Zero controls and the container does not allow that
    #[error("Container '{name}' has no controls and empty containers are not allowed")]
    EmptyContainer { name: String },
}
