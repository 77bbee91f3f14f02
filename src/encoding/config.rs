/// Knobs that change the produced text but never the satisfiability of the formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Emit `p cnf <variables> <clauses>` as first line
    pub emit_header: bool,

    /// Emit a `c <label>` line in front of each clause family
    pub emit_comments: bool,

    /// Emit the at-most-one-position clauses for both orders `(k, l)` and `(l, k)`
    pub symmetric_duplicates: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::compatible()
    }
}

impl EncoderConfig {
    /// Headerless output with labels and duplicated clauses; the classic
    /// byte-for-byte format of this encoding
    pub fn compatible() -> Self {
        Self {
            emit_header: false,
            emit_comments: true,
            symmetric_duplicates: true,
        }
    }

    /// Smallest output that every DIMACS parser accepts
    pub fn solver_ready() -> Self {
        Self {
            emit_header: true,
            emit_comments: true,
            symmetric_duplicates: false,
        }
    }
}
