//! Result statuses in the style of the SZS ontology.

use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?}", self.0)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS output start")?;
        write!(f, "{}", self.0)?;
        writeln!(f, "% SZS output end")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuccessKind {
    /// the conclusion follows from the premises
    Theorem,
    /// the statement is true under every valuation
    Tautology,
    /// the statement is false under every valuation
    Unsatisfiable,
    /// the statement is true under some valuation
    Satisfiable,
    /// the conclusion does not follow from the premises
    CounterSatisfiable,
    /// the statements are true under the same valuations
    Equivalent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoSuccessKind {
    OsError,
    InputError,
    SyntaxError,
    /// no proof was found, although the search space was exhausted
    GaveUp,
    /// no proof was found within the search limits
    ResourceOut,
}

#[test]
fn display() {
    use alloc::string::ToString;
    assert_eq!(Status(Theorem).to_string(), "% SZS status Theorem\n");
    let out = Output("1. A  Premise\n").to_string();
    assert_eq!(out, "% SZS output start\n1. A  Premise\n% SZS output end\n");
}
