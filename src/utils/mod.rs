//! Utility modules shared by both pipelines.

pub mod path;
pub mod plural;
pub mod write;
