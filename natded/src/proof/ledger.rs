use super::Rule;
use crate::Statement;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Reason why a statement holds at a step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Justification {
    Premise,
    Assumption,
    /// application of a rule to earlier steps, given in ascending order
    Rule(Rule, Vec<usize>),
}

impl Justification {
    /// Justify by a rule, sorting and deduplicating the cited steps.
    pub fn rule(rule: Rule, mut steps: Vec<usize>) -> Self {
        steps.sort_unstable();
        steps.dedup();
        Self::Rule(rule, steps)
    }

    /// Return the steps cited by the justification.
    pub fn cited(&self) -> &[usize] {
        match self {
            Self::Premise | Self::Assumption => &[],
            Self::Rule(_, steps) => steps,
        }
    }
}

impl Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Premise => write!(f, "Premise"),
            Self::Assumption => write!(f, "Assumption"),
            Self::Rule(rule, steps) => {
                write!(f, "{}", rule)?;
                let mut steps = steps.iter();
                if let Some(step) = steps.next() {
                    write!(f, " {}", step)?;
                    steps.try_for_each(|step| write!(f, ", {}", step))?;
                }
                Ok(())
            }
        }
    }
}

/// A line of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    pub number: usize,
    pub statement: Statement,
    pub justification: Justification,
}

/// Proof lines indexed by step number, with printed statements.
pub type Lines = BTreeMap<usize, (String, Justification)>;

/// Ledger of derived steps.
///
/// Extending a proof consumes it and returns the extended proof.
/// Search branches that may fail therefore work on clones,
/// so that alternative branches never see each other's steps.
#[derive(Clone, Debug)]
pub struct Proof {
    premises: Vec<Statement>,
    conclusion: Statement,
    steps: Vec<Step>,
}

impl Proof {
    /// Create a proof that contains one step per premise.
    pub fn new(premises: Vec<Statement>, conclusion: Statement) -> Self {
        let steps = Vec::with_capacity(premises.len());
        let proof = Self {
            premises: Vec::new(),
            conclusion,
            steps,
        };
        let proof = premises.iter().cloned().fold(proof, |proof, premise| {
            proof.append(premise, Justification::Premise)
        });
        Self { premises, ..proof }
    }

    pub fn premises(&self) -> &[Statement] {
        &self.premises
    }

    pub fn conclusion(&self) -> &Statement {
        &self.conclusion
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Return the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Return the number that the next added step will receive.
    pub fn next_step(&self) -> usize {
        self.steps.len() + 1
    }

    /// Return the step with the given number.
    pub fn get(&self, number: usize) -> Option<&Step> {
        number.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Add a step.
    pub fn append(mut self, statement: Statement, justification: Justification) -> Self {
        let number = self.next_step();
        self.steps.push(Step {
            number,
            statement,
            justification,
        });
        self
    }

    /// Add a step that holds by assumption.
    pub fn assume(self, statement: Statement) -> Self {
        self.append(statement, Justification::Assumption)
    }

    /// Return the first step whose statement equals the given one.
    pub fn find_step_proving(&self, statement: &Statement) -> Option<&Step> {
        self.steps.iter().find(|step| step.statement == *statement)
    }

    /// Return all statements and their sub-statements, in ascending step order.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.steps.iter().flat_map(|step| step.statement.subforms())
    }

    /// Return the distinct atomic sentences in order of first occurrence.
    pub fn sentences(&self) -> Vec<char> {
        let sentences = self.steps.iter().flat_map(|step| step.statement.sentences());
        crate::keep_first(sentences)
    }

    /// Return the step proving the conclusion, if any.
    pub fn conclusion_step(&self) -> Option<&Step> {
        self.find_step_proving(&self.conclusion)
    }

    /// Return the proof lines, with statements printed.
    ///
    /// If the conclusion is proved, the lines end with the last step proving it.
    pub fn lines(&self) -> Lines {
        let line = |step: &Step| {
            let content = (step.statement.to_string(), step.justification.clone());
            (step.number, content)
        };
        let last = self.steps.iter().rposition(|s| s.statement == self.conclusion);
        let end = last.map_or(self.steps.len(), |i| i + 1);
        self.steps[..end].iter().map(line).collect()
    }

    pub fn display(&self) -> Disp<'_> {
        Disp { proof: self }
    }
}

/// A proof as a table of numbered lines.
pub struct Disp<'p> {
    proof: &'p Proof,
}

impl<'p> Display for Disp<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self.proof.steps();
        let lines: Vec<_> = steps.iter().map(|s| s.statement.to_string()).collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let nwidth = steps.len().to_string().len();
        for (step, line) in steps.iter().zip(lines) {
            let (n, j) = (step.number, &step.justification);
            writeln!(f, "{: >nwidth$}. {: <width$}  {}", n, line, j)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn premises(fms: &[&str]) -> Proof {
    let fms = fms.iter().map(|fm| fm.parse().unwrap()).collect();
    Proof::new(fms, Statement::Sentence('Z'))
}

#[test]
fn initialize() {
    let proof = premises(&["A", "A->B"]);
    assert_eq!(proof.len(), 2);
    assert_eq!(proof.next_step(), 3);
    let numbers: Vec<_> = proof.steps().iter().map(|s| s.number).collect();
    assert_eq!(numbers, Vec::from([1, 2]));
    assert!(proof.steps().iter().all(|s| s.justification == Justification::Premise));
    assert_eq!(proof.premises().len(), 2);
    assert!(proof.get(0).is_none() && proof.get(3).is_none());
}

#[test]
fn append() {
    let proof = premises(&["A", "B"]);
    let ab: Statement = "A^B".parse().unwrap();
    let just = Justification::rule(Rule::ConjIntro, Vec::from([2, 1, 2]));
    assert_eq!(just.cited(), &[1, 2]);
    let extended = proof.clone().append(ab.clone(), just);
    assert_eq!(proof.len(), 2);
    assert_eq!(extended.len(), 3);
    assert_eq!(extended.find_step_proving(&ab).map(|s| s.number), Some(3));
    assert!(proof.find_step_proving(&ab).is_none());

    let assumed = extended.assume(Statement::Sentence('A'));
    let a = Statement::Sentence('A');
    assert_eq!(assumed.find_step_proving(&a).map(|s| s.number), Some(1));
    assert_eq!(assumed.get(4).map(|s| &s.justification), Some(&Justification::Assumption));
}

#[test]
fn search() {
    let proof = premises(&["A->(C^B)", "~D"]);
    let conj = proof.statements().find(|fm| matches!(fm, Statement::And(..)));
    assert_eq!(conj.map(|fm| fm.to_string()), Some("C^B".to_string()));
    assert_eq!(proof.sentences(), Vec::from(['A', 'C', 'B', 'D']));
}

#[test]
fn display() {
    let proof = premises(&["A", "B"]);
    let just = Justification::rule(Rule::ConjIntro, Vec::from([1, 2]));
    let proof = proof.append("A^B".parse().unwrap(), just);
    let expected = "1. A    Premise\n2. B    Premise\n3. A^B  ^I 1, 2\n";
    assert_eq!(proof.display().to_string(), expected);
    let lines = proof.lines();
    assert_eq!(lines.keys().copied().collect::<Vec<_>>(), Vec::from([1, 2, 3]));
    assert_eq!(lines[&3].0, "A^B");
}

#[test]
fn lines_end_with_conclusion() {
    let (a, b) = (Statement::Sentence('A'), Statement::Sentence('B'));
    let proof = Proof::new(Vec::from([a.clone(), b]), a);
    let lines = proof.lines();
    assert_eq!(lines.keys().copied().collect::<Vec<_>>(), Vec::from([1]));
    assert_eq!(proof.len(), 2);
}
