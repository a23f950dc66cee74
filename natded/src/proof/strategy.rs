//! Rule strategies.
//!
//! Every strategy tries to prove a goal by a single rule,
//! proving the premises of the rule as sub-goals.
//! On success, it returns the proof extended by a step for the goal.
//!
//! Elimination rules look for candidate statements anywhere in the proof,
//! including inside the statements of steps,
//! and try candidates in the order of their first occurrence.

use super::{Justification, Proof, Rule, Search};
use crate::{keep_first, Statement};
use alloc::vec::Vec;
use log::trace;

fn rule(rule: Rule, steps: impl Into<Vec<usize>>) -> Justification {
    Justification::rule(rule, steps.into())
}

/// Decompose a disjunction into disjuncts that are among the given antecedents.
///
/// Nested disjunctions are traversed until reaching an antecedent.
fn disjuncts<'a>(fm: &'a Statement, ants: &[&Statement], out: &mut Vec<&'a Statement>) -> bool {
    if ants.contains(&fm) {
        out.push(fm);
        true
    } else if let Statement::Or(l, r) = fm {
        disjuncts(l, ants, out) && disjuncts(r, ants, out)
    } else {
        false
    }
}

/// Return the disjuncts of a disjunction if all of them are among the antecedents.
pub(super) fn cover<'a>(fm: &'a Statement, ants: &[&Statement]) -> Option<Vec<&'a Statement>> {
    let mut out = Vec::new();
    match fm {
        Statement::Or(l, r) if disjuncts(l, ants, &mut out) && disjuncts(r, ants, &mut out) => {
            Some(out)
        }
        _ => None,
    }
}

impl Search {
    pub(super) fn apply(&mut self, rule: Rule, proof: &Proof, goal: &Statement) -> Option<Proof> {
        use Rule::*;
        match rule {
            ImplElim => self.impl_elim(proof, goal),
            ConjElim => self.conj_elim(proof, goal),
            DisjElim => self.disj_elim(proof, goal),
            BicondElim => self.bicond_elim(proof, goal),
            ConjIntro => self.conj_intro(proof, goal),
            DisjIntro => self.disj_intro(proof, goal),
            BicondIntro => self.bicond_intro(proof, goal),
            ImplIntro => self.impl_intro(proof, goal),
            NegIntro => self.neg_intro(proof, goal),
            NegElim => self.neg_elim(proof, goal),
        }
    }

    /// From `X -> G` and `X`, conclude `G`.
    fn impl_elim(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let imps = proof.statements().filter_map(|fm| match fm {
            Statement::If(x, g) if **g == *goal => Some((fm, &**x)),
            _ => None,
        });
        for (imp, ant) in keep_first(imps) {
            trace!("->E: try {}", imp);
            let Some((proof, ia)) = self.sub(proof, ant) else {
                continue;
            };
            if let Some((proof, ii)) = self.sub(&proof, imp) {
                return Some(proof.append(goal.clone(), rule(Rule::ImplElim, [ii, ia])));
            }
        }
        None
    }

    /// From `G ^ B` or `A ^ G`, conclude `G`.
    fn conj_elim(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let conjs = proof.statements().filter(|fm| match fm {
            Statement::And(l, r) => **l == *goal || **r == *goal,
            _ => false,
        });
        for conj in keep_first(conjs) {
            trace!("^E: try {}", conj);
            if let Some((proof, ic)) = self.sub(proof, conj) {
                return Some(proof.append(goal.clone(), rule(Rule::ConjElim, [ic])));
            }
        }
        None
    }

    /// From `X1 v ... v Xn` and `Xi -> G` for all `i`, conclude `G`.
    fn disj_elim(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let ants = proof.statements().filter_map(|fm| match fm {
            Statement::If(x, g) if **g == *goal => Some(&**x),
            _ => None,
        });
        let ants = keep_first(ants);
        if ants.len() < 2 {
            return None;
        }

        let disjs = proof.statements().filter_map(|fm| Some((fm, cover(fm, &ants)?)));
        'disj: for (disj, ds) in keep_first(disjs) {
            trace!("vE: try {}", disj);
            let Some((mut proof, id)) = self.sub(proof, disj) else {
                continue;
            };
            let mut steps = Vec::from([id]);
            for d in ds {
                let imp = Statement::imp(d.clone(), goal.clone());
                match self.sub(&proof, &imp) {
                    Some((p, ii)) => {
                        proof = p;
                        steps.push(ii)
                    }
                    None => continue 'disj,
                }
            }
            return Some(proof.append(goal.clone(), rule(Rule::DisjElim, steps)));
        }
        None
    }

    /// From `A <-> G` (or `G <-> A`) and `A`, conclude `G`.
    fn bicond_elim(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let bics = proof.statements().filter_map(|fm| match fm {
            Statement::Iff(l, r) if **r == *goal => Some((fm, &**l)),
            Statement::Iff(l, r) if **l == *goal => Some((fm, &**r)),
            _ => None,
        });
        for (bic, other) in keep_first(bics) {
            trace!("<->E: try {}", bic);
            let Some((proof, io)) = self.sub(proof, other) else {
                continue;
            };
            if let Some((proof, ib)) = self.sub(&proof, bic) {
                return Some(proof.append(goal.clone(), rule(Rule::BicondElim, [io, ib])));
            }
        }
        None
    }

    fn conj_intro(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let Statement::And(l, r) = goal else {
            return None;
        };
        let (proof, il) = self.sub(proof, l)?;
        let (proof, ir) = self.sub(&proof, r)?;
        Some(proof.append(goal.clone(), rule(Rule::ConjIntro, [il, ir])))
    }

    fn disj_intro(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let Statement::Or(l, r) = goal else {
            return None;
        };
        let (proof, i) = self.sub(proof, l).or_else(|| self.sub(proof, r))?;
        Some(proof.append(goal.clone(), rule(Rule::DisjIntro, [i])))
    }

    fn bicond_intro(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let Statement::Iff(l, r) = goal else {
            return None;
        };
        let lr = Statement::imp((**l).clone(), (**r).clone());
        let rl = Statement::imp((**r).clone(), (**l).clone());
        let (proof, ilr) = self.sub(proof, &lr)?;
        let (proof, irl) = self.sub(&proof, &rl)?;
        Some(proof.append(goal.clone(), rule(Rule::BicondIntro, [ilr, irl])))
    }

    /// Assume `A`, prove `B`, and conclude `A -> B`.
    fn impl_intro(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let Statement::If(a, b) = goal else {
            return None;
        };
        let proof = proof.clone().assume((**a).clone());
        let ia = proof.len();
        let (proof, ib) = self.sub(&proof, b)?;
        Some(proof.append(goal.clone(), rule(Rule::ImplIntro, [ia, ib])))
    }

    /// Assume `A`, derive a contradiction, and conclude `~A`.
    fn neg_intro(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let Statement::Not(a) = goal else {
            return None;
        };
        let proof = proof.clone().assume((**a).clone());
        let ia = proof.len();
        let (proof, ic) = self.contradiction(&proof)?;
        Some(proof.append(goal.clone(), rule(Rule::NegIntro, [ia, ic])))
    }

    /// Assume `~G`, derive a contradiction, and conclude `G`.
    fn neg_elim(&mut self, proof: &Proof, goal: &Statement) -> Option<Proof> {
        let proof = proof.clone().assume(-goal.clone());
        let ia = proof.len();
        let (proof, ic) = self.contradiction(&proof)?;
        Some(proof.append(goal.clone(), rule(Rule::NegElim, [ia, ic])))
    }

    /// Prove `S ^ ~S` for some sentence `S` occurring in the proof.
    ///
    /// Candidates are all sentences occurring anywhere in the steps,
    /// also inside compound statements, not only sentences derived as steps.
    /// For example, `A -> B` and `~B` yield the candidates `A` and `B`,
    /// which is what makes modus tollens provable.
    fn contradiction(&mut self, proof: &Proof) -> Option<(Proof, usize)> {
        let sentences = proof.sentences();
        sentences.into_iter().find_map(|s| {
            trace!("contradiction: try {}", s);
            self.sub(proof, &Statement::contradiction(s))
        })
    }
}
