use thiserror::Error;

use crate::graph::{Edge, Node, NodeRange};

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Violated preconditions of a Hamiltonian path instance. All of them are
/// detected before a single clause is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("the instance contains no edges, so the node range cannot be inferred")]
    NoEdges,

    #[error("an instance needs at least one node")]
    NoNodes,

    #[error("the node range [{min}, {max}] is empty")]
    EmptyNodeRange { min: Node, max: Node },

    #[error("edge {edge} leaves the node range {range}")]
    EdgeOutOfRange { edge: Edge, range: NodeRange },

    #[error("{number_of_nodes} nodes exceed the DIMACS variable space ({max_nodes} nodes at most)")]
    TooManyNodes { number_of_nodes: u64, max_nodes: u64 },
}
