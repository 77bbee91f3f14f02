use std::{borrow::Borrow, fmt, ops::RangeInclusive};

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use super::*;
use crate::errors::InstanceError;

/// Contiguous, non-empty interval `[min, max]` of node identifiers.
///
/// The encoding addresses nodes by their *rank* within the range, i.e.
/// `min` has rank 1 and `max` has rank `max - min + 1`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
pub struct NodeRange {
    min: Node,
    max: Node,
}

impl NodeRange {
    pub fn try_new(min: Node, max: Node) -> Result<Self, InstanceError> {
        if min > max {
            return Err(InstanceError::EmptyNodeRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest interval covering all endpoints of `edges`.
    /// Interior identifiers that no edge references are part of the range.
    pub fn from_edges<I>(edges: I) -> Result<Self, InstanceError>
    where
        I: IntoIterator,
        I::Item: Borrow<Edge>,
    {
        let endpoints = edges.into_iter().flat_map(|e| {
            let Edge(u, v) = *e.borrow();
            [u, v]
        });

        match endpoints.minmax() {
            MinMaxResult::NoElements => Err(InstanceError::NoEdges),
            MinMaxResult::OneElement(u) => Ok(Self { min: u, max: u }),
            MinMaxResult::MinMax(min, max) => Ok(Self { min, max }),
        }
    }

    pub fn min(&self) -> Node {
        self.min
    }

    pub fn max(&self) -> Node {
        self.max
    }

    /// Returns `max - min + 1`; as a u64 since `[0, Node::MAX]` has more than `Node::MAX` elements
    pub fn number_of_nodes(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }

    pub fn contains(&self, u: Node) -> bool {
        (self.min..=self.max).contains(&u)
    }

    /// Returns the 1-based rank of `u` within the range.
    /// ** Panics in debug builds if `u` is not contained **
    pub fn rank_of(&self, u: Node) -> NumNodes {
        debug_assert!(self.contains(u));
        u - self.min + 1
    }

    /// Inverse of [`NodeRange::rank_of`]
    pub fn node_of_rank(&self, rank: NumNodes) -> Node {
        debug_assert!(rank >= 1 && (rank as u64) <= self.number_of_nodes());
        self.min + (rank - 1)
    }

    pub fn iter(&self) -> RangeInclusive<Node> {
        self.min..=self.max
    }
}

impl fmt::Display for NodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
