pub mod clause_families;
pub mod config;
pub mod encoder;
pub mod stats;
pub mod variable_mapper;

use smallvec::SmallVec;

use crate::graph::*;

pub use clause_families::ClauseFamily;
pub use config::EncoderConfig;
pub use encoder::HamiltonianPathEncoder;
pub use stats::*;
pub use variable_mapper::VariableMapper;

/// DIMACS variable; always positive
pub type Var = i32;

/// DIMACS literal: `v` or `-v` for a variable `v`
pub type Lit = i32;

/// Disjunction of literals. Most clauses of the encoding are binary.
pub type Clause = SmallVec<[Lit; 4]>;

/// Largest number of nodes `n` such that all `n²` variables fit into a [`Var`]
pub const MAX_NODES: NumNodes = 46_340;
