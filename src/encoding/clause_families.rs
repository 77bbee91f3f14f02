use std::fmt;

use itertools::{Itertools, iproduct};
use serde::Serialize;
use smallvec::smallvec;

use super::*;

/// The five groups of clauses making up the encoding.
///
/// The first four force the true variables to form a permutation matrix, i.e.
/// every position holds exactly one node and every node sits at exactly one
/// position. The last one rules out consecutive nodes that are not joined by an arc.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseFamily {
    AtMostOneNodePerPosition,
    AtLeastOneNodePerPosition,
    AtMostOnePositionPerNode,
    AtLeastOnePositionPerNode,
    IllegalStep,
}

impl ClauseFamily {
    /// Order in which the families appear in DIMACS output
    pub const EMISSION_ORDER: [ClauseFamily; 5] = [
        ClauseFamily::AtMostOneNodePerPosition,
        ClauseFamily::AtLeastOneNodePerPosition,
        ClauseFamily::AtLeastOnePositionPerNode,
        ClauseFamily::AtMostOnePositionPerNode,
        ClauseFamily::IllegalStep,
    ];

    /// Text of the comment line preceding the family
    pub fn label(&self) -> &'static str {
        match self {
            ClauseFamily::AtMostOneNodePerPosition => "At most one edge",
            ClauseFamily::AtLeastOneNodePerPosition => "At least one edge",
            ClauseFamily::AtLeastOnePositionPerNode => "Each node appears in path",
            ClauseFamily::AtMostOnePositionPerNode => "Each node appears at most once in path",
            ClauseFamily::IllegalStep => "Prevent illegal steps",
        }
    }
}

impl fmt::Display for ClauseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[inline]
fn binary(a: Lit, b: Lit) -> Clause {
    smallvec![a, b]
}

/// `¬var(o, n1) ∨ ¬var(o, n2)` for every position `o` and nodes `n1 < n2`
pub fn at_most_one_node_per_position(mapper: VariableMapper) -> impl Iterator<Item = Clause> {
    mapper.positions().flat_map(move |o| {
        mapper
            .nodes()
            .tuple_combinations()
            .map(move |(n1, n2)| binary(-mapper.var(o, n1), -mapper.var(o, n2)))
    })
}

/// `var(o, 1) ∨ … ∨ var(o, n)` for every position `o`
pub fn at_least_one_node_per_position(mapper: VariableMapper) -> impl Iterator<Item = Clause> {
    mapper
        .positions()
        .map(move |o| mapper.nodes().map(|u| mapper.var(o, u)).collect::<Clause>())
}

/// `¬var(k, u) ∨ ¬var(l, u)` for every node `u` and positions `k ≠ l`.
/// Without `symmetric_duplicates` only `k < l` is emitted.
pub fn at_most_one_position_per_node(
    mapper: VariableMapper,
    symmetric_duplicates: bool,
) -> impl Iterator<Item = Clause> {
    mapper.nodes().flat_map(move |u| {
        iproduct!(mapper.positions(), mapper.positions())
            .filter(move |&(k, l)| if symmetric_duplicates { k != l } else { k < l })
            .map(move |(k, l)| binary(-mapper.var(k, u), -mapper.var(l, u)))
    })
}

/// `var(1, u) ∨ … ∨ var(n, u)` for every node `u`
pub fn at_least_one_position_per_node(mapper: VariableMapper) -> impl Iterator<Item = Clause> {
    mapper
        .nodes()
        .map(move |u| mapper.positions().map(|o| mapper.var(o, u)).collect::<Clause>())
}

/// `¬var(o, u) ∨ ¬var(o + 1, v)` for every non-edge `(u, v)`, loops included,
/// and every position `o < n`
pub fn illegal_steps(
    instance: &HamiltonianInstance,
    mapper: VariableMapper,
) -> impl Iterator<Item = Clause> + '_ {
    let range = instance.range();
    instance.non_edges().flat_map(move |Edge(u, v)| {
        let (src, tgt) = (range.rank_of(u), range.rank_of(v));
        (1..mapper.number_of_nodes())
            .map(move |o| binary(-mapper.var(o, src), -mapper.var(o + 1, tgt)))
    })
}
