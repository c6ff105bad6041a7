//! Config module tests
//!
//! - Output rendering and atomic writes with backups
