use std::ops::RangeInclusive;

use super::*;
use crate::errors::InstanceError;

/// Bijection between `(position, node)` pairs and DIMACS variables.
///
/// Positions and nodes are both 1-based ranks in `1..=n`. Variables are
/// assigned position-major, i.e. `var(p, u) = (p - 1) * n + u`, so the
/// identifiers are exactly `1..=n²` and `var(1, 1) = 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableMapper {
    num_nodes: NumNodes,
}

impl VariableMapper {
    pub fn try_new(num_nodes: u64) -> Result<Self, InstanceError> {
        if num_nodes == 0 {
            return Err(InstanceError::NoNodes);
        }

        if num_nodes > MAX_NODES as u64 {
            return Err(InstanceError::TooManyNodes {
                number_of_nodes: num_nodes,
                max_nodes: MAX_NODES as u64,
            });
        }

        Ok(Self {
            num_nodes: num_nodes as NumNodes,
        })
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    /// Returns the variable stating that `node` occupies `position`.
    /// ** Panics in debug builds if either argument is not in `1..=n` **
    #[inline]
    pub fn var(&self, position: NumNodes, node: NumNodes) -> Var {
        debug_assert!(self.positions().contains(&position));
        debug_assert!(self.nodes().contains(&node));
        ((position - 1) * self.num_nodes + node) as Var
    }

    /// Returns `var(position, node)` if `value` and its negation otherwise
    #[inline]
    pub fn literal(&self, position: NumNodes, node: NumNodes, value: bool) -> Lit {
        let var = self.var(position, node);
        if value { var } else { -var }
    }

    /// Inverse of [`VariableMapper::var`]; `None` if `var` is not in `1..=n²`
    pub fn position_and_node(&self, var: Var) -> Option<(NumNodes, NumNodes)> {
        if var < 1 || var > self.max_var() {
            return None;
        }

        let idx = var as NumNodes - 1;
        Some((idx / self.num_nodes + 1, idx % self.num_nodes + 1))
    }

    /// Largest variable in use, which is also the number of variables
    pub fn max_var(&self) -> Var {
        (self.num_nodes * self.num_nodes) as Var
    }

    pub fn positions(&self) -> RangeInclusive<NumNodes> {
        1..=self.num_nodes
    }

    pub fn nodes(&self) -> RangeInclusive<NumNodes> {
        1..=self.num_nodes
    }

    /// Returns all `(position, node, var)` triples in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (NumNodes, NumNodes, Var)> + '_ {
        self.positions()
            .flat_map(move |p| self.nodes().map(move |u| (p, u, self.var(p, u))))
    }
}

impl From<&HamiltonianInstance> for VariableMapper {
    fn from(instance: &HamiltonianInstance) -> Self {
        // the instance already guarantees 1 <= n <= MAX_NODES
        Self {
            num_nodes: instance.number_of_nodes(),
        }
    }
}
