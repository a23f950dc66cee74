//! Truth tables and semantic classification of statements.

use crate::eval::{tf, Assignment, Interpretation};
use crate::Statement;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Maximal number of distinct sentences, given by the number of uppercase letters.
pub const MAX_SENTENCES: usize = 26;

/// Row of a truth table.
///
/// The `i`-th sentence is false iff the `(n - 1 - i)`-th bit of the row is set,
/// such that the first row makes all sentences true.
#[derive(Copy, Clone, Debug)]
pub struct Valuation<'a> {
    sentences: &'a [char],
    row: u32,
}

impl<'a> Valuation<'a> {
    pub fn values(&self) -> impl Iterator<Item = (char, bool)> + 'a {
        let (n, row) = (self.sentences.len(), self.row);
        let bit = move |i: usize| row & (1 << (n - 1 - i)) == 0;
        self.sentences.iter().enumerate().map(move |(i, s)| (*s, bit(i)))
    }
}

impl Interpretation for Valuation<'_> {
    fn value(&self, sentence: char) -> Option<bool> {
        let i = self.sentences.iter().position(|s| *s == sentence)?;
        let n = self.sentences.len();
        Some(self.row & (1 << (n - 1 - i)) == 0)
    }
}

impl From<Valuation<'_>> for Assignment {
    fn from(v: Valuation<'_>) -> Self {
        v.values().collect()
    }
}

/// All valuations of a list of sentences, in truth table order.
pub struct Valuations<'a> {
    sentences: &'a [char],
    next: u64,
}

impl<'a> Valuations<'a> {
    /// Enumerate the valuations for at most [`MAX_SENTENCES`] sentences.
    pub fn new(sentences: &'a [char]) -> Self {
        assert!(sentences.len() <= MAX_SENTENCES);
        Self { sentences, next: 0 }
    }
}

impl<'a> Iterator for Valuations<'a> {
    type Item = Valuation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= 1 << self.sentences.len() {
            return None;
        }
        let row = self.next as u32;
        self.next += 1;
        let sentences = self.sentences;
        Some(Valuation { sentences, row })
    }
}

impl Statement {
    /// Does any valuation of the statement's sentences yield the given truth value?
    fn any_row(&self, value: bool) -> bool {
        let sentences = self.sentence_set();
        let mut valuations = Valuations::new(&sentences);
        valuations.any(|v| matches!(self.eval(&v), Ok(b) if b == value))
    }

    /// Is the statement true under every valuation?
    ///
    /// ~~~
    /// use natded::Statement;
    /// let fm: Statement = "Av~A".parse().unwrap();
    /// assert!(fm.is_tautology());
    /// ~~~
    pub fn is_tautology(&self) -> bool {
        !self.any_row(false)
    }

    /// Is the statement false under every valuation?
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// Is the statement true under some valuation?
    pub fn is_satisfiable(&self) -> bool {
        self.any_row(true)
    }

    /// Is the statement true under some valuations and false under others?
    pub fn is_contingent(&self) -> bool {
        self.is_satisfiable() && !self.is_tautology()
    }

    /// Do both statements have the same truth value under every valuation?
    pub fn is_equivalent(&self, other: &Self) -> bool {
        Self::iff(self.clone(), other.clone()).is_tautology()
    }

    /// Return the first valuation that makes the statement false.
    pub fn counterexample(&self) -> Option<Assignment> {
        let sentences = self.sentence_set();
        let mut valuations = Valuations::new(&sentences);
        let v = valuations.find(|v| matches!(self.eval(v), Ok(false)))?;
        Some(Assignment::from(v))
    }
}

/// Full truth table of a statement, for display.
pub struct TruthTable<'a> {
    statement: &'a Statement,
    sentences: Vec<char>,
}

impl<'a> TruthTable<'a> {
    pub fn new(statement: &'a Statement) -> Self {
        let sentences = statement.sentence_set();
        Self {
            statement,
            sentences,
        }
    }
}

impl Display for TruthTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.sentences {
            write!(f, "{} ", s)?;
        }
        writeln!(f, "| {}", self.statement)?;
        for v in Valuations::new(&self.sentences) {
            for (_, b) in v.values() {
                write!(f, "{} ", tf(b))?;
            }
            match self.statement.eval(&v) {
                Ok(b) => writeln!(f, "| {}", tf(b))?,
                Err(e) => writeln!(f, "| {}", e)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::parse::parse;

#[test]
fn valuations() {
    let sentences = ['A', 'B'];
    let rows: Vec<Vec<_>> = Valuations::new(&sentences)
        .map(|v| v.values().map(|(_, b)| b).collect())
        .collect();
    let expected = [[true, true], [true, false], [false, true], [false, false]];
    assert_eq!(rows, expected.map(Vec::from).to_vec());
    assert_eq!(Valuations::new(&[]).count(), 1);
}

#[test]
fn classify() {
    let taut = parse("(A->B)<->(~Av B)").unwrap();
    assert!(taut.is_tautology() && taut.is_satisfiable());
    assert!(!taut.is_contradiction() && !taut.is_contingent());

    let contra = parse("A^~A").unwrap();
    assert!(contra.is_contradiction() && !contra.is_satisfiable());

    let cont = parse("A->B").unwrap();
    assert!(cont.is_contingent());
    let cex = cont.counterexample().unwrap();
    assert_eq!((cex.get('A'), cex.get('B')), (Some(true), Some(false)));
    assert_eq!(taut.counterexample(), None);
}

#[test]
fn equivalent() {
    let l = parse("~(A^B)").unwrap();
    let r = parse("~Av~B").unwrap();
    assert!(l.is_equivalent(&r));
    assert!(!l.is_equivalent(&parse("~A^~B").unwrap()));
    // sentences only occurring on one side count as well
    assert!(!parse("A").unwrap().is_equivalent(&parse("A^B").unwrap()));
}

#[test]
fn table() {
    use alloc::string::ToString;
    let fm = parse("A->B").unwrap();
    let table = TruthTable::new(&fm).to_string();
    let expected = "A B | A->B\nT T | T\nT F | F\nF T | T\nF F | T\n";
    assert_eq!(table, expected);
}
