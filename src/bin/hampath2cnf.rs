use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ::log::{LevelFilter, info};
use hampath_sat::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Reduces the Hamiltonian path problem of a directed graph to SAT and prints the DIMACS CNF formula
#[derive(Debug, StructOpt)]
struct Opts {
    /// Edge list with one `source target` pair per line; reads STDIN if omitted
    #[structopt(short, long, parse(from_os_str))]
    instance: Option<PathBuf>,

    /// Destination of the formula; writes to STDOUT if omitted
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Emit the `p cnf` problem line
    #[structopt(long)]
    header: bool,

    /// Omit the comment line in front of each clause family
    #[structopt(long)]
    no_comments: bool,

    /// Emit each at-most-one-position clause only once instead of for both orders
    #[structopt(long)]
    dedup: bool,

    /// Smallest node identifier; together with --max replaces inference from the edges
    #[structopt(long, requires = "max")]
    min: Option<Node>,

    /// Largest node identifier
    #[structopt(long, requires = "min")]
    max: Option<Node>,

    /// Write the size of the formula as JSON to this file
    #[structopt(long, parse(from_os_str))]
    stats: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

impl Opts {
    fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            emit_header: self.header,
            emit_comments: !self.no_comments,
            symmetric_duplicates: !self.dedup,
        }
    }
}

fn load_edges(path: &Option<PathBuf>) -> anyhow::Result<Vec<Edge>> {
    if let Some(path) = path {
        Ok(try_read_edge_list_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(try_read_edge_list(stdin)?)
    }
}

fn load_instance(opts: &Opts) -> anyhow::Result<HamiltonianInstance> {
    let edges = load_edges(&opts.instance)?;
    info!("Read {} edges", edges.len());

    let instance = match (opts.min, opts.max) {
        (Some(min), Some(max)) => HamiltonianInstance::try_new(NodeRange::try_new(min, max)?, edges)?,
        _ => HamiltonianInstance::try_from_edges(edges)?,
    };
    info!(
        "Instance has {} nodes in {} and {} distinct edges",
        instance.number_of_nodes(),
        instance.range(),
        instance.number_of_edges()
    );

    Ok(instance)
}

fn write_formula(encoder: &HamiltonianPathEncoder, path: &Option<PathBuf>) -> anyhow::Result<EncodingStats> {
    let stats = if let Some(path) = path {
        encoder.try_write_dimacs_file(path)?
    } else {
        let writer = BufWriter::new(std::io::stdout().lock());
        encoder.try_write_dimacs(writer)?
    };

    Ok(stats)
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let instance = load_instance(&opts)?;
    let encoder = HamiltonianPathEncoder::new(&instance, opts.encoder_config());
    let stats = write_formula(&encoder, &opts.output)?;

    if let Some(path) = &opts.stats {
        let mut writer = BufWriter::new(File::create(path)?);
        stats.write_json(&mut writer)?;
        writer.flush()?;
    }

    Ok(())
}
