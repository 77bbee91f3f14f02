use itertools::iproduct;

use super::*;

pub trait Complement {
    /// Returns every ordered pair `(u, v)` of vertices, loops included, that is
    /// not an edge of the graph; in lexicographic order.
    fn non_edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns the length of [`Complement::non_edges`] without enumerating it.
    /// Assumes that all edges run between vertices of the graph.
    fn number_of_non_edges(&self) -> u64;
}

impl<G> Complement for G
where
    G: GraphNodeOrder + GraphEdgeOrder + AdjacencyTest,
{
    fn non_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        iproduct!(self.vertices(), self.vertices())
            .filter(|&(u, v)| !self.has_edge(u, v))
            .map(Edge::from)
    }

    fn number_of_non_edges(&self) -> u64 {
        let n = self.number_of_nodes() as u64;
        n * n - self.number_of_edges()
    }
}
