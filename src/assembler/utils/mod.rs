//! Utility functions for assembly.

pub mod fs;
