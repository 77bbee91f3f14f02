use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::Edge;

pub type Result<T> = std::io::Result<T>;

/// Reads a directed edge list: one `source target` pair per line, separated by
/// whitespace. Blank lines and lines starting with `c` or `#` are skipped.
pub fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    EdgeListReader::new(reader).collect()
}

pub fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>> {
    let reader = File::open(path)?;
    try_read_edge_list(BufReader::new(reader))
}

pub struct EdgeListReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line {} when parsing {}.", $line, $name)
        );

        let token = next.unwrap();
        let parsed = token.parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!(
                "Invalid value {:?} in line {}. Cannot parse {}.",
                token, $line, $name
            )
        );

        parsed.unwrap()
    }};
}

impl<R: BufRead> EdgeListReader<R> {
    fn next_data_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with('c') || trimmed.starts_with('#') {
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let line = self.next_data_line()?;
        if let Some(line) = line {
            let mut parts = line.split_whitespace();

            let from = parse_next_value!(parts, "source node", self.line_number);
            let dest = parse_next_value!(parts, "target node", self.line_number);

            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Expected end of line {} after target node.", self.line_number)
            );

            Ok(Some(Edge(from, dest)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "c reference\n1 3\n1\t5\n\n# comment\n  2 5 \n3 4\nc TEST\n3 5\n4 2";
        let edges = try_read_edge_list(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(
            edges,
            vec![
                Edge(1, 3),
                Edge(1, 5),
                Edge(2, 5),
                Edge(3, 4),
                Edge(3, 5),
                Edge(4, 2)
            ]
        );
    }

    #[test]
    fn empty() {
        assert!(try_read_edge_list("".as_bytes()).unwrap().is_empty());
        assert!(try_read_edge_list("c nothing\n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn errors() {
        for (input, needle) in [
            ("1 2\n3\n", "Premature end of line 2"),
            ("1 2\n3 x\n", "Invalid value \"x\" in line 2"),
            ("1 -2\n", "Invalid value \"-2\" in line 1"),
            ("1 2.5\n", "Invalid value \"2.5\" in line 1"),
            ("1 2 3\n", "Expected end of line 1"),
        ] {
            let err = try_read_edge_list(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData);
            assert!(err.to_string().contains(needle), "{input:?}: {err}");
        }
    }

    #[test]
    fn error_reports_line() {
        let mut reader = EdgeListReader::new("1 2\nfoo bar\n3 4\n".as_bytes());
        assert_eq!(reader.next().unwrap().unwrap(), Edge(1, 2));
        assert!(reader.next().unwrap().is_err());
        assert_eq!(reader.line_number(), 2);
    }
}
