//! Natural deduction proofs and their search.

mod check;
mod ledger;
mod rule;
mod search;
mod strategy;

pub use check::Error as CheckError;
pub use ledger::{Disp, Justification, Lines, Proof, Step};
pub use rule::Rule;
pub use search::{Failed, Opt, Search};
