//! Command implementations

pub mod diagnose;
pub mod serve;

pub use diagnose::*;
pub use serve::*;
