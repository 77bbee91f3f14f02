use super::{encoding::*, graph::*};
use itertools::Itertools as _;

pub const REFERENCE_EDGES: [(Node, Node); 6] = [(1, 3), (1, 5), (2, 5), (3, 4), (3, 5), (4, 2)];

pub fn reference_instance() -> HamiltonianInstance {
    HamiltonianInstance::try_from_edges(REFERENCE_EDGES).unwrap()
}

/// Truth value of variable `v` at index `v`; index 0 is unused
pub type Assignment = Vec<bool>;

fn is_satisfied(clause: &[Lit], assignment: &[bool]) -> bool {
    clause
        .iter()
        .any(|&lit| assignment[lit.unsigned_abs() as usize] == (lit > 0))
}

pub fn satisfies(encoder: &HamiltonianPathEncoder, assignment: &[bool]) -> bool {
    encoder
        .clauses()
        .all(|(_, clause)| is_satisfied(&clause, assignment))
}

/// Enumerates all `2^(n²)` assignments; only feasible for `n <= 4`
pub fn satisfying_assignments(encoder: &HamiltonianPathEncoder) -> Vec<Assignment> {
    let num_vars = encoder.number_of_variables() as usize;
    assert!(num_vars <= 16, "brute force is limited to tiny instances");

    let clauses = encoder.clauses().map(|(_, c)| c).collect_vec();
    (0u64..(1 << num_vars))
        .filter_map(|mask| {
            let assignment: Assignment = (0..=num_vars)
                .map(|v| v > 0 && (mask >> (v - 1)) & 1 == 1)
                .collect();
            clauses
                .iter()
                .all(|c| is_satisfied(c, &assignment))
                .then_some(assignment)
        })
        .collect()
}

/// Sets `var(o, u)` for the node `u` at the `o`-th entry of `path` and clears every other variable
pub fn assignment_of_path(encoder: &HamiltonianPathEncoder, path: &[Node]) -> Assignment {
    let mapper = encoder.mapper();
    let range = encoder.instance().range();

    let mut assignment = vec![false; mapper.max_var() as usize + 1];
    for (pos, &u) in path.iter().enumerate() {
        assignment[mapper.var(pos as NumNodes + 1, range.rank_of(u)) as usize] = true;
    }
    assignment
}

/// Reads the node sequence off an assignment. Returns `None` unless every
/// position holds exactly one node and no node repeats.
pub fn decode_assignment(encoder: &HamiltonianPathEncoder, assignment: &[bool]) -> Option<Vec<Node>> {
    let mapper = encoder.mapper();
    let range = encoder.instance().range();

    let path: Vec<Node> = mapper
        .positions()
        .map(|o| {
            mapper
                .nodes()
                .filter(|&u| assignment[mapper.var(o, u) as usize])
                .exactly_one()
                .ok()
                .map(|u| range.node_of_rank(u))
        })
        .collect::<Option<_>>()?;

    path.iter().all_unique().then_some(path)
}

/// All Hamiltonian paths by brute force over permutations, lexicographically sorted
pub fn hamiltonian_paths(instance: &HamiltonianInstance) -> Vec<Vec<Node>> {
    let mut paths = instance
        .vertices()
        .permutations(instance.len())
        .filter(|p| p.windows(2).all(|w| instance.has_edge(w[0], w[1])))
        .collect_vec();
    paths.sort_unstable();
    paths
}
