//! Wire and query models.

pub mod stats;
