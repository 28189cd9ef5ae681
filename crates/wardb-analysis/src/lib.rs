//! Analysis models for the wardb inspection tool.
//!
//! Two independent closed-form models over `wardb-core` records:
//! radar detection range and missile hit probability. Both are pure,
//! stateless functions — safe to call from any thread, trivially
//! parallel over batches.

pub mod missile;
pub mod radar;

#[cfg(test)]
mod tests;
