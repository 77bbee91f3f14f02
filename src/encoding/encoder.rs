use log::{debug, warn};

use super::{clause_families::*, *};

/// Produces the CNF formula of a [`HamiltonianInstance`] as a lazy stream of clauses.
///
/// The encoder keeps no state besides the borrowed instance, so iterating the
/// clauses twice yields identical sequences.
#[derive(Clone, Debug)]
pub struct HamiltonianPathEncoder<'a> {
    instance: &'a HamiltonianInstance,
    mapper: VariableMapper,
    config: EncoderConfig,
}

impl<'a> HamiltonianPathEncoder<'a> {
    pub fn new(instance: &'a HamiltonianInstance, config: EncoderConfig) -> Self {
        let without_edges = instance.nodes_without_edges();
        if instance.number_of_nodes() > 1 && !without_edges.is_empty() {
            warn!(
                "{} node(s) in {} have no incident edge (e.g. {}); the formula is unsatisfiable",
                without_edges.len(),
                instance.range(),
                without_edges[0]
            );
        }

        Self {
            instance,
            mapper: VariableMapper::from(instance),
            config,
        }
    }

    pub fn instance(&self) -> &'a HamiltonianInstance {
        self.instance
    }

    pub fn mapper(&self) -> VariableMapper {
        self.mapper
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn number_of_variables(&self) -> Var {
        self.mapper.max_var()
    }

    /// Returns the clauses of a single family in emission order
    pub fn clauses_of(&self, family: ClauseFamily) -> Box<dyn Iterator<Item = Clause> + '_> {
        let mapper = self.mapper;
        match family {
            ClauseFamily::AtMostOneNodePerPosition => {
                Box::new(at_most_one_node_per_position(mapper))
            }
            ClauseFamily::AtLeastOneNodePerPosition => {
                Box::new(at_least_one_node_per_position(mapper))
            }
            ClauseFamily::AtMostOnePositionPerNode => Box::new(at_most_one_position_per_node(
                mapper,
                self.config.symmetric_duplicates,
            )),
            ClauseFamily::AtLeastOnePositionPerNode => {
                Box::new(at_least_one_position_per_node(mapper))
            }
            ClauseFamily::IllegalStep => Box::new(illegal_steps(self.instance, mapper)),
        }
    }

    /// Returns all clauses, tagged with their family, in emission order
    pub fn clauses(&self) -> impl Iterator<Item = (ClauseFamily, Clause)> + '_ {
        ClauseFamily::EMISSION_ORDER
            .into_iter()
            .flat_map(move |family| self.clauses_of(family).map(move |c| (family, c)))
    }

    /// Number of clauses [`HamiltonianPathEncoder::clauses_of`] yields, computed in closed form
    pub fn number_of_clauses_of(&self, family: ClauseFamily) -> u64 {
        let n = self.mapper.number_of_nodes() as u64;
        let pairs = n * (n - 1) / 2;

        match family {
            ClauseFamily::AtMostOneNodePerPosition => n * pairs,
            ClauseFamily::AtLeastOneNodePerPosition => n,
            ClauseFamily::AtMostOnePositionPerNode if self.config.symmetric_duplicates => {
                n * 2 * pairs
            }
            ClauseFamily::AtMostOnePositionPerNode => n * pairs,
            ClauseFamily::AtLeastOnePositionPerNode => n,
            ClauseFamily::IllegalStep => self.instance.number_of_non_edges() * (n - 1),
        }
    }

    pub fn number_of_clauses(&self) -> u64 {
        ClauseFamily::EMISSION_ORDER
            .iter()
            .map(|&f| self.number_of_clauses_of(f))
            .sum()
    }

    /// Size of the formula without producing it
    pub fn stats(&self) -> EncodingStats {
        let stats = EncodingStats::new(
            self,
            ClauseFamily::EMISSION_ORDER.map(|f| (f, self.number_of_clauses_of(f))),
        );
        debug!("Expected formula size: {stats:?}");
        stats
    }
}
