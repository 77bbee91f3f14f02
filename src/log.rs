use std::io::Write;

use ::log::LevelFilter;
use env_logger::{Builder, Target};

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs an `env_logger` writing `[level] message` lines to stderr.
/// Stdout is kept free for the formula. `RUST_LOG` overrides `level`.
/// Calling it a second time is a no-op.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(Target::Stderr)
        .parse_default_env();

    let _ = builder.try_init();
}

/// Raises `default` by one level per occurrence of `-v`
pub fn build_logger_for_verbosity(default: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(default, verbosity));
}

fn level_for_verbosity(default: LevelFilter, verbosity: usize) -> LevelFilter {
    let idx = (default as usize).saturating_add(verbosity);
    LEVELS[idx.min(LEVELS.len() - 1)]
}
