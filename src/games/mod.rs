//! Game implementations.

pub mod mobility;
