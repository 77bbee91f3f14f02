pub mod encoding;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;

pub mod prelude {
    pub use super::encoding::*;
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
