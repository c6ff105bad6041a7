//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Duplicate detection and row mapping tests
//! - Table parser tests
//! - End-to-end pipeline tests
//! - Descriptor lint tests

#[cfg(test)]
mod duplicates_tests;
#[cfg(test)]
mod mapper_tests;
#[cfg(test)]
mod parser_tests;
