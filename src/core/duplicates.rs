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

//! Duplicate control id detection
//!
//! This module implements O(1) duplicate detection using HashMap-based
//! indexing. When multiple rows use the same id, they are flagged as
//! duplicates.
//!
//! # Performance
//! - Add id: O(1) average case
//! - Check duplicate: O(1) average case
//! - List all duplicates: O(n log n) where n = number of unique ids
//!   (results are sorted by first occurrence)

use std::collections::HashMap;

/// Detects duplicate ids using HashMap-based indexing.
///
/// Keys are ids, values are the row indices using that id, in insertion
/// order. A duplicate exists when any vector has length > 1.
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    rows: HashMap<String, Vec<usize>>,
}

/// Represents an id claimed by more than one row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Duplicate {
    /// The shared id
    pub id: String,

    /// All row indices using this id (always 2 or more, ascending if the
    /// rows were added in order)
    pub indices: Vec<usize>,
}

impl DuplicateDetector {
    /// Creates a new empty detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that row `index` uses `id`.
    ///
    /// Returns the index of the earliest row already using this id, if any,
    /// which lets callers fail fast on the first clash.
    pub fn add_id(&mut self, id: &str, index: usize) -> Option<usize> {
        let indices = self.rows.entry(id.to_string()).or_default();
        let first = indices.first().copied();
        indices.push(index);
        first
    }

    /// Finds all duplicates, ordered by where each id first appeared.
    pub fn find_duplicates(&self) -> Vec<Duplicate> {
        let mut duplicates: Vec<Duplicate> = self
            .rows
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(id, indices)| Duplicate {
                id: id.clone(),
                indices: indices.clone(),
            })
            .collect();

        duplicates.sort_by_key(|d| d.indices.first().copied().unwrap_or(usize::MAX));
        duplicates
    }

    /// Checks if a specific id is used by 2 or more rows.
    pub fn has_duplicate(&self, id: &str) -> bool {
        self.rows
            .get(id)
            .map(|indices| indices.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of rows tracked.
    pub fn total_ids(&self) -> usize {
        self.rows.values().map(|v| v.len()).sum()
    }
}
