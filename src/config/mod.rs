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

//! Output file management with atomic writes and backup support.
//!
//! Compiled containers are handed to the presentation layer as JSON files.
//! Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Overwriting an existing file first copies it to
//!   a timestamped backup
//! - **Rollback safety**: A failed write leaves the previous output untouched
//!
//! # Example
//!
//! ```no_run
//! use control_rows::config::{render_json, OutputWriter};
//! use control_rows::core::{compile, BuildConfig, ControlSpec};
//!
//! let container = compile(&[ControlSpec::with_id("alpha")], &BuildConfig::default())?;
//! let writer = OutputWriter::new("/tmp/controls.json".into())?;
//! writer.write(&render_json(&container)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod output;

pub use error::ConfigError;
pub use output::{render_json, OutputWriter};

#[cfg(test)]
mod tests;
