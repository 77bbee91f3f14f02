pub mod complement;
pub mod edge;
pub mod gnp;
pub mod instance;
pub mod node_range;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;

use std::ops::RangeInclusive;

pub use complement::*;
pub use edge::*;
pub use gnp::*;
pub use instance::*;
pub use node_range::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the node identifiers in ascending order. In contrast to zero-based
    /// graphs, identifiers start at an arbitrary minimum.
    fn vertices(&self) -> RangeInclusive<Node>;

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Provides efficient tests whether an edge exists
pub trait AdjacencyTest {
    /// Returns *true* exactly if the graph contains the directed edge (u, v)
    fn has_edge(&self, u: Node, v: Node) -> bool;
}
