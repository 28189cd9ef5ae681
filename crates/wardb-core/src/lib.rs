//! Core types and definitions for the wardb analysis tool.
//!
//! This crate defines the vocabulary shared by the analysis models:
//! parameter records, enums, constants, unit conversions, and errors.
//! It has no dependency on the database layer or any UI framework.

pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
pub mod units;
