//! Business logic services.

pub mod stats;
