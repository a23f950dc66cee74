//! Propositional statements.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::ops::Neg;

/// A propositional formula.
///
/// Atomic sentences are single uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statement {
    Sentence(char),
    Not(Box<Statement>),
    Or(Box<Statement>, Box<Statement>),
    And(Box<Statement>, Box<Statement>),
    If(Box<Statement>, Box<Statement>),
    Iff(Box<Statement>, Box<Statement>),
}

/// Binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Or,
    And,
    If,
    Iff,
}

impl Op {
    /// Connectives in the order in which the parser tries to match them.
    ///
    /// `<->` has to precede `->`.
    pub const ALL: [Self; 4] = [Self::Iff, Self::If, Self::Or, Self::And];

    /// Textual representation of the connective.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Or => "v",
            Self::And => "^",
            Self::If => "->",
            Self::Iff => "<->",
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Neg for Statement {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl core::ops::BitAnd for Statement {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::And, rhs)
    }
}

impl core::ops::BitOr for Statement {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Or, rhs)
    }
}

impl Statement {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        let (l, r) = (Box::new(l), Box::new(r));
        match o {
            Op::Or => Self::Or(l, r),
            Op::And => Self::And(l, r),
            Op::If => Self::If(l, r),
            Op::Iff => Self::Iff(l, r),
        }
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::If, r)
    }

    pub fn iff(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Iff, r)
    }

    /// Return `S ∧ ¬S`.
    pub fn contradiction(s: char) -> Self {
        Self::Sentence(s) & -Self::Sentence(s)
    }

    /// Is the statement of the shape `S ∧ ¬S` for some sentence `S`?
    pub fn is_contradiction_pair(&self) -> bool {
        match self {
            Self::And(l, r) => match (&**l, &**r) {
                (Self::Sentence(s), Self::Not(n)) => **n == Self::Sentence(*s),
                _ => false,
            },
            _ => false,
        }
    }

    /// Return the statement and all its sub-statements in pre-order.
    pub fn subforms(&self) -> Box<dyn Iterator<Item = &Statement> + '_> {
        use core::iter::once;
        match self {
            Self::Sentence(_) => Box::new(once(self)),
            Self::Not(fm) => Box::new(once(self).chain(fm.subforms())),
            Self::Or(l, r) | Self::And(l, r) | Self::If(l, r) | Self::Iff(l, r) => {
                Box::new(once(self).chain(l.subforms()).chain(r.subforms()))
            }
        }
    }

    /// Return all occurrences of atomic sentences, left to right.
    pub fn sentences(&self) -> impl Iterator<Item = char> + '_ {
        self.subforms().filter_map(|fm| match fm {
            Self::Sentence(s) => Some(*s),
            _ => None,
        })
    }

    /// Return the distinct atomic sentences, sorted alphabetically.
    pub fn sentence_set(&self) -> Vec<char> {
        let set: BTreeSet<_> = self.sentences().collect();
        set.into_iter().collect()
    }
}

/// Write a sub-statement, parenthesised if it is longer than two characters.
fn grouped(f: &mut fmt::Formatter<'_>, fm: &Statement) -> fmt::Result {
    let s = fm.to_string();
    if s.chars().count() > 2 {
        write!(f, "({})", s)
    } else {
        f.write_str(&s)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentence(s) => write!(f, "{}", s),
            Self::Not(fm) => {
                write!(f, "~")?;
                grouped(f, fm)
            }
            Self::Or(l, r) => binary(f, l, Op::Or, r),
            Self::And(l, r) => binary(f, l, Op::And, r),
            Self::If(l, r) => binary(f, l, Op::If, r),
            Self::Iff(l, r) => binary(f, l, Op::Iff, r),
        }
    }
}

fn binary(f: &mut fmt::Formatter<'_>, l: &Statement, o: Op, r: &Statement) -> fmt::Result {
    grouped(f, l)?;
    write!(f, "{}", o)?;
    grouped(f, r)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Statement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
fn s(c: char) -> Statement {
    Statement::Sentence(c)
}

#[test]
fn display() {
    assert_eq!((s('A') & -s('B')).to_string(), "A^~B");
    assert_eq!((-(s('A') & s('B'))).to_string(), "~(A^B)");
    assert_eq!((-(-s('A'))).to_string(), "~~A");
    assert_eq!((-(-(-s('A')))).to_string(), "~(~~A)");
    let fm = Statement::imp(s('B'), Statement::imp(s('A'), s('B')));
    assert_eq!(fm.to_string(), "B->(A->B)");
    let fm = Statement::iff(-(-s('A')) | s('C'), s('D'));
    assert_eq!(fm.to_string(), "((~~A)vC)<->D");
}

#[test]
fn subforms() {
    let fm = Statement::imp(s('A'), s('A') & s('B'));
    let subs: Vec<_> = fm.subforms().cloned().collect();
    assert_eq!(
        subs,
        Vec::from([fm.clone(), s('A'), s('A') & s('B'), s('A'), s('B')])
    );
    assert_eq!(fm.sentences().collect::<Vec<_>>(), Vec::from(['A', 'A', 'B']));
    assert_eq!((s('C') | s('A')).sentence_set(), Vec::from(['A', 'C']));
}

#[test]
fn contradiction_pair() {
    assert!(Statement::contradiction('A').is_contradiction_pair());
    assert!(!(s('A') & -s('B')).is_contradiction_pair());
    assert!(!(-s('A') & s('A')).is_contradiction_pair());
}
