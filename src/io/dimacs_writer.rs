use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use log::{debug, info};
#[cfg(feature = "par")]
use rayon::prelude::*;

use crate::encoding::*;

pub trait DimacsWriter {
    /// Streams the formula in DIMACS CNF format into `writer`, one clause per line.
    /// The writer is not buffered internally; wrap raw files and stdout into a [`BufWriter`].
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<EncodingStats, std::io::Error>;
    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<EncodingStats, std::io::Error>;
}

impl DimacsWriter for HamiltonianPathEncoder<'_> {
    fn try_write_dimacs<W: Write>(&self, mut writer: W) -> Result<EncodingStats, std::io::Error> {
        let start = Instant::now();

        if self.config().emit_header {
            writeln!(
                writer,
                "p cnf {} {}",
                self.number_of_variables(),
                self.number_of_clauses()
            )?;
        }

        #[cfg(not(feature = "par"))]
        let written = {
            let mut written = Vec::with_capacity(ClauseFamily::EMISSION_ORDER.len());
            for family in ClauseFamily::EMISSION_ORDER {
                written.push((family, write_family(self, family, &mut writer)?));
            }
            written
        };

        #[cfg(feature = "par")]
        let written = {
            let buffers = ClauseFamily::EMISSION_ORDER[..]
                .par_iter()
                .map(|&family| {
                    let mut buffer: Vec<u8> = Vec::new();
                    write_family(self, family, &mut buffer).map(|count| (family, count, buffer))
                })
                .collect::<Result<Vec<_>, std::io::Error>>()?;

            let mut written = Vec::with_capacity(buffers.len());
            for (family, count, buffer) in buffers {
                writer.write_all(&buffer)?;
                written.push((family, count));
            }
            written
        };

        writer.flush()?;

        for &(family, count) in &written {
            debug!("{count:>10} clauses: {family}");
            debug_assert_eq!(count, self.number_of_clauses_of(family));
        }

        let stats = EncodingStats::new(self, written);
        info!(
            "Wrote {} clauses over {} variables in {:?}",
            stats.number_of_clauses,
            stats.number_of_variables,
            start.elapsed()
        );

        Ok(stats)
    }

    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<EncodingStats, std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dimacs(writer)
    }
}

/// Writes the optional comment line and all clauses of `family`; returns the number of clauses
fn write_family<W: Write>(
    encoder: &HamiltonianPathEncoder<'_>,
    family: ClauseFamily,
    writer: &mut W,
) -> Result<u64, std::io::Error> {
    if encoder.config().emit_comments {
        writeln!(writer, "c {family}")?;
    }

    let mut count = 0;
    for clause in encoder.clauses_of(family) {
        write_clause(writer, &clause)?;
        count += 1;
    }

    Ok(count)
}

/// Writes `l1 l2 ... 0` followed by a newline
pub fn write_clause<W: Write>(writer: &mut W, clause: &[Lit]) -> Result<(), std::io::Error> {
    for lit in clause {
        write!(writer, "{lit} ")?;
    }
    writeln!(writer, "0")
}
