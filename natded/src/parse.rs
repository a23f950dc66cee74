//! Parsing of statements.
//!
//! The grammar is deliberately small:
//!
//! ~~~ text
//! sentence    := [A-Z]
//! statement   := "(" expression ")" | "~" statement | sentence
//! expression  := statement (("->" | "<->" | "v" | "^") statement)?
//! ~~~
//!
//! Binary connectives do not associate, so `AvBvC` has to be written
//! as `(AvB)vC` or `Av(BvC)`.
//! Whitespace between tokens is ignored.

use crate::statement::{Op, Statement};
use core::fmt::{self, Display};
use core::str::FromStr;

/// Parse error, storing the byte offset at which parsing failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// a statement (sentence, negation, or parenthesised expression) was expected
    Statement(usize),
    /// a closing parenthesis was expected
    Close(usize),
    /// the input continues after a complete expression
    Trailing(usize),
    /// statements are nested deeper than [`MAX_DEPTH`]
    Depth(usize),
}

/// Maximal nesting of statements.
///
/// Statements are processed recursively, so this bounds the stack usage
/// of parsing, printing, evaluation, and proof search.
pub const MAX_DEPTH: usize = 256;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement(o) => write!(f, "expected statement at offset {}", o),
            Self::Close(o) => write!(f, "expected ')' at offset {}", o),
            Self::Trailing(o) => write!(f, "unexpected input at offset {}", o),
            Self::Depth(o) => write!(f, "statement nested too deeply at offset {}", o),
        }
    }
}

impl core::error::Error for Error {}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume `token` if the remaining input starts with it.
    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        let found = self.rest().starts_with(token);
        if found {
            self.pos += token.len()
        }
        found
    }

    fn statement(&mut self) -> Result<Statement, Error> {
        if self.depth >= MAX_DEPTH {
            self.skip_ws();
            return Err(Error::Depth(self.pos));
        }
        self.depth += 1;
        let fm = self.nested();
        self.depth -= 1;
        fm
    }

    fn nested(&mut self) -> Result<Statement, Error> {
        if self.eat("(") {
            let fm = self.expression()?;
            if self.eat(")") {
                Ok(fm)
            } else {
                Err(Error::Close(self.pos))
            }
        } else if self.eat("~") {
            Ok(-self.statement()?)
        } else {
            match self.rest().chars().next() {
                Some(c) if c.is_ascii_uppercase() => {
                    self.pos += 1;
                    Ok(Statement::Sentence(c))
                }
                _ => Err(Error::Statement(self.pos)),
            }
        }
    }

    fn operator(&mut self) -> Option<Op> {
        Op::ALL.into_iter().find(|op| self.eat(op.symbol()))
    }

    fn expression(&mut self) -> Result<Statement, Error> {
        let l = self.statement()?;
        match self.operator() {
            Some(op) => Ok(Statement::bin(l, op, self.statement()?)),
            None => Ok(l),
        }
    }
}

/// Parse a statement, requiring that the whole input is consumed.
///
/// ~~~
/// use natded::parse::parse;
/// let fm = parse("~A -> (B ^ C)").unwrap();
/// assert_eq!(fm.to_string(), "~A->(B^C)");
/// assert!(parse("AvBvC").is_err());
/// ~~~
pub fn parse(s: &str) -> Result<Statement, Error> {
    let mut parser = Parser::new(s);
    let fm = parser.expression()?;
    parser.skip_ws();
    if parser.rest().is_empty() {
        Ok(fm)
    } else {
        Err(Error::Trailing(parser.pos))
    }
}

impl FromStr for Statement {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
use alloc::string::ToString;

#[test]
fn sentences() {
    assert_eq!(parse("A"), Ok(Statement::Sentence('A')));
    assert_eq!(parse("(A)"), Ok(Statement::Sentence('A')));
    assert_eq!(parse("a"), Err(Error::Statement(0)));
    assert_eq!(parse(""), Err(Error::Statement(0)));
}

#[test]
fn connectives() {
    let (a, b) = (Statement::Sentence('A'), Statement::Sentence('B'));
    assert_eq!(parse("AvB"), Ok(a.clone() | b.clone()));
    assert_eq!(parse("A^B"), Ok(a.clone() & b.clone()));
    assert_eq!(parse("A->B"), Ok(Statement::imp(a.clone(), b.clone())));
    assert_eq!(parse("A<->B"), Ok(Statement::iff(a.clone(), b.clone())));
    assert_eq!(parse("~A^B"), Ok(-a.clone() & b.clone()));
    assert_eq!(parse("~(A^B)"), Ok(-(a.clone() & b)));
    assert_eq!(parse("~~A"), Ok(-(-a)));
}

#[test]
fn errors() {
    assert_eq!(parse("AvBvC"), Err(Error::Trailing(3)));
    assert_eq!(parse("(A^B"), Err(Error::Close(4)));
    assert_eq!(parse("A->"), Err(Error::Statement(3)));
    assert_eq!(parse("A-B"), Err(Error::Trailing(1)));
    assert_eq!(parse("A<>B"), Err(Error::Trailing(1)));
    assert_eq!(parse("~"), Err(Error::Statement(1)));
}

#[test]
fn depth() {
    use alloc::format;
    let negs = |n| format!("{}A", "~".repeat(n));
    assert!(parse(&negs(MAX_DEPTH - 1)).is_ok());
    assert_eq!(parse(&negs(MAX_DEPTH)), Err(Error::Depth(MAX_DEPTH)));
    assert_eq!(parse(&negs(200_000)), Err(Error::Depth(MAX_DEPTH)));

    let parens = format!("{}A{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(parse(&parens), Err(Error::Depth(MAX_DEPTH)));
}

#[test]
fn roundtrip() {
    let inputs = [
        "A",
        "~~A",
        "~(~~A)",
        "(AvB)->C",
        "(A<->B)^~(C->D)",
        "B->(A->B)",
        "~((~A)v(B^C))",
    ];
    for input in inputs {
        let fm = parse(input).unwrap();
        assert_eq!(parse(&fm.to_string()), Ok(fm));
    }
}
