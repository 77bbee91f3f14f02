use std::ops::RangeInclusive;

use fxhash::FxHashSet;
use itertools::Itertools;
use log::debug;

use super::*;
use crate::{
    encoding::MAX_NODES,
    errors::{InstanceError, InvariantCheck},
};

/// A directed graph whose nodes are exactly the identifiers of a [`NodeRange`].
/// Parallel edges collapse; the edge set is immutable after construction.
#[derive(Clone, Debug)]
pub struct HamiltonianInstance {
    range: NodeRange,
    edges: FxHashSet<Edge>,
}

impl HamiltonianInstance {
    /// Builds an instance over an explicitly given node range.
    /// Fails if an edge leaves the range or if the range is too large to be encoded.
    pub fn try_new(
        range: NodeRange,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, InstanceError> {
        let instance = Self {
            range,
            edges: edges.into_iter().map(|e| e.into()).collect(),
        };

        instance.is_correct()?;
        debug!(
            "Instance with {} nodes in {} and {} edges",
            instance.number_of_nodes(),
            instance.range,
            instance.number_of_edges()
        );

        Ok(instance)
    }

    /// Builds an instance whose node range is the interval spanned by the endpoints
    /// of `edges`. Fails with [`InstanceError::NoEdges`] if `edges` is empty.
    pub fn try_from_edges(
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self, InstanceError> {
        let edges: Vec<Edge> = edges.into_iter().map(|e| e.into()).collect();
        let range = NodeRange::from_edges(&edges)?;
        Self::try_new(range, edges)
    }

    pub fn range(&self) -> NodeRange {
        self.range
    }

    /// Returns the edges in lexicographic order
    pub fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied().sorted_unstable()
    }

    /// Returns the nodes that are neither source nor target of any edge, in
    /// ascending order. Such nodes are unreachable by any path of length > 1.
    pub fn nodes_without_edges(&self) -> Vec<Node> {
        let touched: FxHashSet<Node> = self.edges.iter().flat_map(|&Edge(u, v)| [u, v]).collect();
        self.vertices().filter(|u| !touched.contains(u)).collect()
    }
}

impl GraphNodeOrder for HamiltonianInstance {
    fn number_of_nodes(&self) -> NumNodes {
        // bounded by MAX_NODES, see is_correct
        self.range.number_of_nodes() as NumNodes
    }

    fn vertices(&self) -> RangeInclusive<Node> {
        self.range.iter()
    }
}

impl GraphEdgeOrder for HamiltonianInstance {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl AdjacencyTest for HamiltonianInstance {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains(&Edge(u, v))
    }
}

impl InvariantCheck<InstanceError> for HamiltonianInstance {
    fn is_correct(&self) -> Result<(), InstanceError> {
        let number_of_nodes = self.range.number_of_nodes();
        if number_of_nodes > MAX_NODES as u64 {
            return Err(InstanceError::TooManyNodes {
                number_of_nodes,
                max_nodes: MAX_NODES as u64,
            });
        }

        if let Some(edge) = self
            .edges
            .iter()
            .filter(|&&Edge(u, v)| !self.range.contains(u) || !self.range.contains(v))
            .min()
        {
            return Err(InstanceError::EdgeOutOfRange {
                edge: *edge,
                range: self.range,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const REFERENCE: [(Node, Node); 6] = [(1, 3), (1, 5), (2, 5), (3, 4), (3, 5), (4, 2)];

    #[test]
    fn reference_instance() {
        let instance = HamiltonianInstance::try_from_edges(REFERENCE).unwrap();
        assert_eq!(instance.number_of_nodes(), 5);
        assert_eq!(instance.number_of_edges(), 6);
        assert_eq!(instance.vertices().collect_vec(), vec![1, 2, 3, 4, 5]);
        assert!(instance.has_edge(1, 3));
        assert!(!instance.has_edge(3, 1));
        assert!(!instance.has_edge(1, 2));
        assert!(instance.nodes_without_edges().is_empty());
        assert_eq!(
            instance.ordered_edges().collect_vec(),
            REFERENCE.iter().map(Edge::from).collect_vec()
        );
    }

    #[test]
    fn parallel_edges_collapse() {
        let instance = HamiltonianInstance::try_from_edges([(1, 2), (1, 2), (2, 1)]).unwrap();
        assert_eq!(instance.number_of_edges(), 2);
    }

    #[test]
    fn no_edges() {
        assert_eq!(
            HamiltonianInstance::try_from_edges(Vec::<Edge>::new()).unwrap_err(),
            InstanceError::NoEdges
        );

        // an explicit range does not need edges
        let single = HamiltonianInstance::try_new(NodeRange::try_new(1, 1).unwrap(), Vec::<Edge>::new())
            .unwrap();
        assert_eq!(single.number_of_nodes(), 1);
        assert_eq!(single.nodes_without_edges(), vec![1]);
    }

    #[test]
    fn edge_out_of_range() {
        let range = NodeRange::try_new(1, 4).unwrap();
        assert_eq!(
            HamiltonianInstance::try_new(range, [(1, 2), (6, 1), (5, 3)]).unwrap_err(),
            InstanceError::EdgeOutOfRange {
                edge: Edge(5, 3),
                range
            }
        );
    }

    #[test]
    fn too_many_nodes() {
        let range = NodeRange::try_new(1, MAX_NODES).unwrap();
        assert!(HamiltonianInstance::try_new(range, [(1, 2)]).is_ok());

        let err = HamiltonianInstance::try_from_edges([(0, MAX_NODES)]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::TooManyNodes {
                number_of_nodes: MAX_NODES as u64 + 1,
                max_nodes: MAX_NODES as u64
            }
        );
    }

    #[test]
    fn gaps_become_nodes() {
        let instance = HamiltonianInstance::try_from_edges([(1, 2), (2, 4), (4, 1)]).unwrap();
        assert_eq!(instance.number_of_nodes(), 4);
        assert_eq!(instance.nodes_without_edges(), vec![3]);
    }
}
