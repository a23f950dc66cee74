//! Verification of proofs.

use super::strategy::cover;
use super::{Justification, Proof, Rule, Step};
use crate::Statement;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Reason why a proof is invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// the step does not carry its position as number
    Numbering(usize),
    /// the step does not match the premise at its position
    Premise(usize),
    /// the step cites itself, a later step, or no step at all
    Citation(usize),
    /// the cited steps do not license the statement by the rule
    Rule(usize, Rule),
    /// no step proves the conclusion
    Conclusion,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbering(n) => write!(f, "step {} is misnumbered", n),
            Self::Premise(n) => write!(f, "step {} is not the corresponding premise", n),
            Self::Citation(n) => write!(f, "step {} cites invalid steps", n),
            Self::Rule(n, rule) => write!(f, "step {} does not follow by {}", n, rule),
            Self::Conclusion => write!(f, "conclusion not proved"),
        }
    }
}

impl core::error::Error for Error {}

/// Cited steps of a rule application.
struct Cited<'p>(Vec<&'p Step>);

impl<'p> Cited<'p> {
    fn statements(&self) -> impl Iterator<Item = &'p Statement> + '_ {
        self.0.iter().map(|step| &step.statement)
    }

    fn contains(&self, fm: &Statement) -> bool {
        self.statements().any(|s| s == fm)
    }

    fn assumes(&self, fm: &Statement) -> bool {
        let assumed = |step: &&Step| step.justification == Justification::Assumption;
        self.0.iter().any(|step| assumed(step) && step.statement == *fm)
    }

    fn contradiction(&self) -> bool {
        self.statements().any(|s| s.is_contradiction_pair())
    }
}

/// Does the rule applied to the cited statements yield the statement?
fn licenses(rule: Rule, fm: &Statement, cited: &Cited) -> bool {
    use Statement::*;
    match (rule, fm) {
        (Rule::ImplElim, g) => cited.statements().any(|s| match s {
            If(x, y) => **y == *g && cited.contains(x),
            _ => false,
        }),
        (Rule::ConjElim, g) => cited.statements().any(|s| match s {
            And(l, r) => **l == *g || **r == *g,
            _ => false,
        }),
        (Rule::DisjElim, g) => {
            let ants: Vec<_> = cited
                .statements()
                .filter_map(|s| match s {
                    If(x, y) if **y == *g => Some(&**x),
                    _ => None,
                })
                .collect();
            ants.len() >= 2 && cited.statements().any(|s| cover(s, &ants).is_some())
        }
        (Rule::BicondElim, g) => cited.statements().any(|s| match s {
            Iff(l, r) => (**r == *g && cited.contains(l)) || (**l == *g && cited.contains(r)),
            _ => false,
        }),
        (Rule::ConjIntro, And(l, r)) => cited.contains(l) && cited.contains(r),
        (Rule::DisjIntro, Or(l, r)) => cited.contains(l) || cited.contains(r),
        (Rule::BicondIntro, Iff(l, r)) => {
            let lr = Statement::imp((**l).clone(), (**r).clone());
            let rl = Statement::imp((**r).clone(), (**l).clone());
            cited.contains(&lr) && cited.contains(&rl)
        }
        (Rule::ImplIntro, If(a, b)) => cited.assumes(a) && cited.contains(b),
        (Rule::NegIntro, Not(a)) => cited.assumes(a) && cited.contradiction(),
        (Rule::NegElim, g) => cited.assumes(&-g.clone()) && cited.contradiction(),
        _ => false,
    }
}

impl Proof {
    /// Check that every step of the proof is justified and that the conclusion is proved.
    ///
    /// Assumptions are not checked to be discharged.
    pub fn check(&self) -> Result<(), Error> {
        let premises = self.premises().len();
        for (i, step) in self.steps().iter().enumerate() {
            let n = step.number;
            if n != i + 1 {
                return Err(Error::Numbering(n));
            }
            let premise = self.premises().get(i);
            match (&step.justification, premise) {
                (Justification::Premise, Some(p)) if *p == step.statement => (),
                (Justification::Premise, _) => return Err(Error::Premise(n)),
                (_, Some(_)) => return Err(Error::Premise(n)),
                (Justification::Assumption, None) => (),
                (Justification::Rule(rule, cited), None) => {
                    if cited.is_empty() || cited.iter().any(|c| *c == 0 || *c >= n) {
                        return Err(Error::Citation(n));
                    }
                    // cited steps are earlier, so they exist
                    let cited = Cited(cited.iter().filter_map(|c| self.get(*c)).collect());
                    if !licenses(*rule, &step.statement, &cited) {
                        return Err(Error::Rule(n, *rule));
                    }
                }
            }
        }
        if self.len() < premises {
            return Err(Error::Premise(self.next_step()));
        }
        match self.conclusion_step() {
            Some(_) => Ok(()),
            None => Err(Error::Conclusion),
        }
    }
}

#[cfg(test)]
fn proof(premises: &[&str], conclusion: &str) -> Proof {
    let premises = premises.iter().map(|fm| fm.parse().unwrap()).collect();
    Proof::new(premises, conclusion.parse().unwrap())
}

#[cfg(test)]
fn just(rule: Rule, steps: &[usize]) -> Justification {
    Justification::rule(rule, steps.to_vec())
}

#[test]
fn valid() {
    let p = proof(&["A->B", "A"], "B");
    let p = p.append("B".parse().unwrap(), just(Rule::ImplElim, &[1, 2]));
    assert_eq!(p.check(), Ok(()));

    let p = proof(&[], "B->(A->B)");
    let p = p.assume("B".parse().unwrap());
    let p = p.assume("A".parse().unwrap());
    let p = p.append("A->B".parse().unwrap(), just(Rule::ImplIntro, &[1, 2]));
    let p = p.append("B->(A->B)".parse().unwrap(), just(Rule::ImplIntro, &[1, 3]));
    assert_eq!(p.check(), Ok(()));
}

#[test]
fn invalid() {
    let p = proof(&["A"], "B");
    assert_eq!(p.check(), Err(Error::Conclusion));

    let wrong = p.clone().append("B".parse().unwrap(), just(Rule::DisjIntro, &[1]));
    assert_eq!(wrong.check(), Err(Error::Rule(2, Rule::DisjIntro)));

    let forward = p.clone().append("B".parse().unwrap(), just(Rule::ConjElim, &[2]));
    assert_eq!(forward.check(), Err(Error::Citation(2)));

    // implication introduction needs an assumption, a premise does not do
    let p = proof(&["A", "B"], "A->B");
    let p = p.append("A->B".parse().unwrap(), just(Rule::ImplIntro, &[1, 2]));
    assert_eq!(p.check(), Err(Error::Rule(3, Rule::ImplIntro)));

    // a premise proves itself
    assert_eq!(proof(&["A", "B"], "A").check(), Ok(()));
}

#[test]
fn disjunction_elimination() {
    let p = proof(&["Av(BvC)", "A->D", "B->D", "C->D"], "D");
    let p = p.append("D".parse().unwrap(), just(Rule::DisjElim, &[1, 2, 3, 4]));
    assert_eq!(p.check(), Ok(()));

    let p = proof(&["Av(BvC)", "A->D", "B->D"], "D");
    let p = p.append("D".parse().unwrap(), just(Rule::DisjElim, &[1, 2, 3]));
    assert_eq!(p.check(), Err(Error::Rule(4, Rule::DisjElim)));
}

#[test]
fn negation() {
    let p = proof(&["A->B", "~B"], "~A");
    let p = p.assume("A".parse().unwrap());
    let p = p.append("B".parse().unwrap(), just(Rule::ImplElim, &[1, 3]));
    let p = p.append("B^~B".parse().unwrap(), just(Rule::ConjIntro, &[2, 4]));
    let p = p.append("~A".parse().unwrap(), just(Rule::NegIntro, &[3, 5]));
    assert_eq!(p.check(), Ok(()));

    let p = proof(&["B", "~B"], "A");
    let p = p.assume("~A".parse().unwrap());
    let p = p.append("B^~B".parse().unwrap(), just(Rule::ConjIntro, &[1, 2]));
    let p = p.append("A".parse().unwrap(), just(Rule::NegElim, &[3, 4]));
    assert_eq!(p.check(), Ok(()));
}
