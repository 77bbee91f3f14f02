pub mod dimacs_writer;
pub use dimacs_writer::{DimacsWriter, write_clause};

pub mod edge_list_reader;
pub use edge_list_reader::{EdgeListReader, try_read_edge_list, try_read_edge_list_file};
