//! Command execution functions for assembler operations.

mod assemble;
mod plan;

pub use assemble::{run_assemble, Summary};
pub use plan::print_plan;
