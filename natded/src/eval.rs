//! Evaluation of statements under truth assignments.

use crate::Statement;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
use hashbrown::HashMap;

/// A (partial) map from atomic sentences to truth values.
pub trait Interpretation {
    fn value(&self, sentence: char) -> Option<bool>;
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// the sentence occurs in the statement, but has no truth value
    Unassigned(char),
    /// the value given for the sentence is not a truth value
    NotBoolean(char, String),
    /// an assignment entry is not of the shape `S=value`
    Malformed(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned(s) => write!(f, "no truth value assigned to {}", s),
            Self::NotBoolean(s, v) => write!(f, "value \"{}\" of {} is not a truth value", v, s),
            Self::Malformed(e) => write!(f, "malformed assignment \"{}\"", e),
        }
    }
}

impl core::error::Error for Error {}

/// Explicit assignment of truth values to sentences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment(HashMap<char, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the truth value of a sentence, returning the previous one.
    pub fn insert(&mut self, sentence: char, value: bool) -> Option<bool> {
        self.0.insert(sentence, value)
    }

    pub fn get(&self, sentence: char) -> Option<bool> {
        self.0.get(&sentence).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Interpretation for Assignment {
    fn value(&self, sentence: char) -> Option<bool> {
        self.get(sentence)
    }
}

impl core::iter::FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Print assignments sorted by sentence, in the shape accepted by `from_str`.
impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort();
        let mut iter = entries.into_iter();
        if let Some((s, v)) = iter.next() {
            write!(f, "{}={}", s, tf(*v))?;
        }
        iter.try_for_each(|(s, v)| write!(f, ",{}={}", s, tf(*v)))
    }
}

pub(crate) fn tf(b: bool) -> char {
    if b {
        'T'
    } else {
        'F'
    }
}

fn truth_value(s: &str) -> Option<bool> {
    match s {
        "T" | "t" | "true" | "1" => Some(true),
        "F" | "f" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Read assignments of the shape `A=T,B=false,C=1`.
///
/// ~~~
/// use natded::eval::{Assignment, Error};
/// let a: Assignment = "A=T, B=0".parse().unwrap();
/// assert_eq!((a.get('A'), a.get('B'), a.get('C')), (Some(true), Some(false), None));
/// let e = "A=maybe".parse::<Assignment>();
/// assert_eq!(e, Err(Error::NotBoolean('A', "maybe".to_string())));
/// ~~~
impl FromStr for Assignment {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s.split(',').map(str::trim).filter(|e| !e.is_empty());
        entries
            .map(|entry| {
                let malformed = || Error::Malformed(entry.to_string());
                let (name, value) = entry.split_once('=').ok_or_else(malformed)?;
                let mut chars = name.trim().chars();
                let sentence = match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_uppercase() => c,
                    _ => return Err(malformed()),
                };
                let value = value.trim();
                let value = truth_value(value)
                    .ok_or_else(|| Error::NotBoolean(sentence, value.to_string()))?;
                Ok((sentence, value))
            })
            .collect()
    }
}

impl Statement {
    /// Compute the truth value of the statement.
    ///
    /// Both operands of binary connectives are always evaluated,
    /// so that every unassigned sentence in the statement is reported.
    pub fn eval(&self, i: &impl Interpretation) -> Result<bool, Error> {
        use Statement::*;
        Ok(match self {
            Sentence(s) => i.value(*s).ok_or(Error::Unassigned(*s))?,
            Not(fm) => !fm.eval(i)?,
            Or(l, r) => {
                let (l, r) = (l.eval(i)?, r.eval(i)?);
                l || r
            }
            And(l, r) => {
                let (l, r) = (l.eval(i)?, r.eval(i)?);
                l && r
            }
            If(l, r) => {
                let (l, r) = (l.eval(i)?, r.eval(i)?);
                !l || r
            }
            Iff(l, r) => l.eval(i)? == r.eval(i)?,
        })
    }
}

#[test]
fn connectives() {
    use crate::parse::parse;
    let rows = [(true, true), (true, false), (false, true), (false, false)];
    for (a, b) in rows {
        let asg: Assignment = [('A', a), ('B', b)].into_iter().collect();
        let eval = |s| parse(s).unwrap().eval(&asg);
        assert_eq!(eval("~A"), Ok(!a));
        assert_eq!(eval("AvB"), Ok(a || b));
        assert_eq!(eval("A^B"), Ok(a && b));
        assert_eq!(eval("A->B"), Ok(!(a && !b)));
        assert_eq!(eval("A<->B"), Ok(a == b));
    }
}

#[test]
fn unassigned() {
    let asg: Assignment = [('A', true)].into_iter().collect();
    let fm = crate::parse::parse("AvB").unwrap();
    assert_eq!(fm.eval(&asg), Err(Error::Unassigned('B')));
}

#[test]
fn display() {
    let asg: Assignment = [('B', false), ('A', true)].into_iter().collect();
    assert_eq!(asg.to_string(), "A=T,B=F");
    assert_eq!(asg.to_string().parse::<Assignment>(), Ok(asg));
}

#[test]
fn malformed() {
    assert_eq!(
        "A=T,BB=F".parse::<Assignment>(),
        Err(Error::Malformed("BB=F".to_string()))
    );
    assert_eq!("A".parse::<Assignment>(), Err(Error::Malformed("A".to_string())));
    assert_eq!("".parse::<Assignment>(), Ok(Assignment::new()));
}
