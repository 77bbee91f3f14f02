use std::io::Write;

use serde::Serialize;

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FamilyStats {
    pub family: ClauseFamily,
    pub clauses: u64,
}

/// Size of an encoded instance; serializes to JSON for the command line front end
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EncodingStats {
    pub range: NodeRange,
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub number_of_variables: Var,
    pub number_of_clauses: u64,
    pub families: Vec<FamilyStats>,
}

impl EncodingStats {
    pub fn new(
        encoder: &HamiltonianPathEncoder<'_>,
        clauses_per_family: impl IntoIterator<Item = (ClauseFamily, u64)>,
    ) -> Self {
        let families: Vec<_> = clauses_per_family
            .into_iter()
            .map(|(family, clauses)| FamilyStats { family, clauses })
            .collect();

        let instance = encoder.instance();
        Self {
            range: instance.range(),
            number_of_nodes: instance.number_of_nodes(),
            number_of_edges: instance.number_of_edges(),
            number_of_variables: encoder.number_of_variables(),
            number_of_clauses: families.iter().map(|f| f.clauses).sum(),
            families,
        }
    }

    /// Returns the number of clauses of `family`, or 0 if it was not recorded
    pub fn clauses_of(&self, family: ClauseFamily) -> u64 {
        self.families
            .iter()
            .find(|f| f.family == family)
            .map_or(0, |f| f.clauses)
    }

    /// Writes the statistics as a single line of JSON
    pub fn write_json<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(writer, "{}", serde_json::to_string(self)?)?;
        Ok(())
    }
}
