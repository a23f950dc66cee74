//! Natural deduction for propositional logic.
//!
//! This crate parses propositional statements, evaluates them,
//! classifies them by truth tables, and
//! searches for natural deduction proofs of conclusions from premises.
//!
//! ~~~
//! let lines = natded::prove(&["A->B", "A"], "B").unwrap();
//! let (statement, justification) = &lines[&3];
//! assert_eq!(statement, "B");
//! assert_eq!(justification.to_string(), "->E 1, 2");
//! ~~~

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod eval;
pub mod parse;
pub mod proof;
mod statement;
pub mod szs;
pub mod table;

pub use eval::Assignment;
pub use proof::{Justification, Lines, Opt, Proof, Rule};
pub use statement::{Op, Statement};

use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Keep only the first occurrence of every element.
pub(crate) fn keep_first<T: Eq>(v: impl Iterator<Item = T>) -> Vec<T> {
    let mut result = Vec::new();
    for x in v {
        if result.iter().all(|y| x != *y) {
            result.push(x)
        }
    }
    result
}

/// Any error produced by the string-based functions of this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Parse(parse::Error),
    Eval(eval::Error),
    Failed(proof::Failed),
}

impl Error {
    /// Return the status that corresponds to the error.
    pub fn kind(&self) -> szs::NoSuccessKind {
        match self {
            Self::Parse(_) => szs::SyntaxError,
            Self::Eval(_) => szs::InputError,
            Self::Failed(f) if f.incomplete => szs::ResourceOut,
            Self::Failed(_) => szs::GaveUp,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::Eval(e) => write!(f, "evaluation error: {}", e),
            Self::Failed(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Failed(e) => Some(e),
        }
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<eval::Error> for Error {
    fn from(e: eval::Error) -> Self {
        Self::Eval(e)
    }
}

impl From<proof::Failed> for Error {
    fn from(e: proof::Failed) -> Self {
        Self::Failed(e)
    }
}

/// Evaluate a statement under the given assignment.
///
/// ~~~
/// use natded::{evaluate, eval};
/// let asg = "A=T,B=F".parse().unwrap();
/// assert_eq!(evaluate("A->B", &asg), Ok(false));
/// let err = evaluate("A->C", &asg).unwrap_err();
/// assert_eq!(err, natded::Error::Eval(eval::Error::Unassigned('C')));
/// ~~~
pub fn evaluate(s: &str, assignment: &Assignment) -> Result<bool, Error> {
    Ok(parse::parse(s)?.eval(assignment)?)
}

/// Search for a proof of the conclusion from the premises with the given options.
pub fn prove_with(opt: Opt, premises: &[&str], conclusion: &str) -> Result<Proof, Error> {
    let premises = premises.iter().map(|p| parse::parse(p));
    let premises = premises.collect::<Result<Vec<_>, _>>()?;
    let conclusion = parse::parse(conclusion)?;
    let proof = Proof::new(premises, conclusion);
    Ok(proof::Search::new(opt).prove(proof)?)
}

/// Search for a proof of the conclusion from the premises.
///
/// ~~~
/// let lines = natded::prove(&["A", "B"], "A^B").unwrap();
/// assert_eq!(lines.len(), 3);
/// assert!(natded::prove(&["A"], "B").is_err());
/// ~~~
pub fn prove(premises: &[&str], conclusion: &str) -> Result<Lines, Error> {
    Ok(prove_with(Opt::default(), premises, conclusion)?.lines())
}

/// Search for a proof of the conclusion from no premises.
///
/// ~~~
/// let lines = natded::prove_tautology("B->(A->B)").unwrap();
/// assert_eq!(lines[&4].0, "B->(A->B)");
/// ~~~
pub fn prove_tautology(conclusion: &str) -> Result<Lines, Error> {
    prove(&[], conclusion)
}

/// Is the statement true under every valuation?
pub fn tautology(s: &str) -> Result<bool, Error> {
    Ok(parse::parse(s)?.is_tautology())
}

/// Is the statement false under every valuation?
pub fn contradiction(s: &str) -> Result<bool, Error> {
    Ok(parse::parse(s)?.is_contradiction())
}

/// Is the statement true under some valuation?
pub fn satisfiable(s: &str) -> Result<bool, Error> {
    Ok(parse::parse(s)?.is_satisfiable())
}

/// Is the statement neither a tautology nor a contradiction?
pub fn contingent(s: &str) -> Result<bool, Error> {
    Ok(parse::parse(s)?.is_contingent())
}

/// Do the statements have the same truth value under every valuation?
///
/// ~~~
/// assert_eq!(natded::equivalent("A->B", "B->A"), Ok(false));
/// assert_eq!(natded::equivalent("A->B", "~B->~A"), Ok(true));
/// ~~~
pub fn equivalent(s1: &str, s2: &str) -> Result<bool, Error> {
    Ok(parse::parse(s1)?.is_equivalent(&parse::parse(s2)?))
}
