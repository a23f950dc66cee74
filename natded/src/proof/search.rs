use super::{Proof, Rule};
use crate::Statement;
use core::fmt::{self, Display};
use hashbrown::HashSet;
use log::{debug, info, trace};

/// Search options.
#[derive(Copy, Clone, Debug)]
pub struct Opt {
    /// maximal number of goals pursued simultaneously
    pub depth: usize,
    /// maximal number of rule applications
    pub inferences: Option<usize>,
}

impl Default for Opt {
    fn default() -> Self {
        Self {
            depth: 64,
            inferences: Some(100_000),
        }
    }
}

/// Reason why a goal could not be proved on the current path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Fail {
    /// the goal is already being pursued by an ancestor
    Cycle,
    /// too many goals are pursued simultaneously
    Depth,
    /// the maximal number of inferences was exceeded
    Limit,
    /// no rule proves the goal
    Exhausted,
}

/// No proof was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Failed {
    /// Was the search cut short by a limit?
    ///
    /// If not, the search space was exhausted.
    pub incomplete: bool,
}

impl Display for Failed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.incomplete {
            write!(f, "proof failed (search limit reached)")
        } else {
            write!(f, "proof failed")
        }
    }
}

impl core::error::Error for Failed {}

/// Goal-directed proof search.
///
/// Goals that are currently being proved are kept in a set,
/// which is restored whenever a goal is left.
/// This prevents a goal from being used to prove itself, while
/// the same goal may still be proved on independent branches.
pub struct Search {
    attempted: HashSet<Statement>,
    inferences: usize,
    incomplete: bool,
    opt: Opt,
}

impl Search {
    pub fn new(opt: Opt) -> Self {
        Self {
            attempted: HashSet::new(),
            inferences: 0,
            incomplete: false,
            opt,
        }
    }

    /// Return the number of rule applications tried so far.
    pub fn inferences(&self) -> usize {
        self.inferences
    }

    /// Extend the proof until it proves its conclusion.
    pub fn prove(&mut self, proof: Proof) -> Result<Proof, Failed> {
        let conclusion = proof.conclusion().clone();
        info!("prove {} from {} premises", conclusion, proof.premises().len());
        match self.goal(&proof, &conclusion) {
            Ok(proof) => {
                info!("proof found after {} inferences", self.inferences);
                debug_assert_eq!(proof.check(), Ok(()));
                Ok(proof)
            }
            Err(fail) => {
                info!("no proof found after {} inferences ({:?})", self.inferences, fail);
                let incomplete = self.incomplete;
                Err(Failed { incomplete })
            }
        }
    }

    /// Prove a sub-goal, returning the extended proof and the step proving the goal.
    pub(super) fn sub(&mut self, proof: &Proof, goal: &Statement) -> Option<(Proof, usize)> {
        let proof = self.goal(proof, goal).ok()?;
        let step = proof.find_step_proving(goal)?.number;
        Some((proof, step))
    }

    pub(super) fn goal(&mut self, proof: &Proof, goal: &Statement) -> Result<Proof, Fail> {
        if proof.find_step_proving(goal).is_some() {
            return Ok(proof.clone());
        }
        if self.attempted.contains(goal) {
            debug!("cycle: {}", goal);
            return Err(Fail::Cycle);
        }
        if self.attempted.len() >= self.opt.depth {
            debug!("depth limit reached: {}", goal);
            self.incomplete = true;
            return Err(Fail::Depth);
        }

        debug!("goal: {} (depth {})", goal, self.attempted.len());
        self.attempted.insert(goal.clone());
        let result = self.strategies(proof, goal);
        self.attempted.remove(goal);
        result
    }

    fn strategies(&mut self, proof: &Proof, goal: &Statement) -> Result<Proof, Fail> {
        for rule in Rule::PRIORITY {
            if self.opt.inferences.map_or(false, |lim| self.inferences >= lim) {
                debug!("inference limit reached");
                self.incomplete = true;
                return Err(Fail::Limit);
            }
            self.inferences += 1;
            trace!("try {} on {}", rule, goal);
            if let Some(proof) = self.apply(rule, proof, goal) {
                debug!("{} proves {}", rule, goal);
                return Ok(proof);
            }
        }
        Err(Fail::Exhausted)
    }
}
