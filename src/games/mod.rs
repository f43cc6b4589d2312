//! Game implementations.

pub mod towers;
pub mod knight;
