use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Inference rule of natural deduction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Rule {
    ImplElim,
    ConjElim,
    DisjElim,
    BicondElim,
    ConjIntro,
    DisjIntro,
    BicondIntro,
    ImplIntro,
    NegIntro,
    NegElim,
}

impl Rule {
    /// Rules in the order in which proof search tries them.
    pub const PRIORITY: [Self; 10] = [
        Self::ImplElim,
        Self::ConjElim,
        Self::DisjElim,
        Self::BicondElim,
        Self::ConjIntro,
        Self::DisjIntro,
        Self::BicondIntro,
        Self::ImplIntro,
        Self::NegIntro,
        Self::NegElim,
    ];
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Rule::*;
        let s = match self {
            ImplElim => "->E",
            ConjElim => "^E",
            DisjElim => "vE",
            BicondElim => "<->E",
            ConjIntro => "^I",
            DisjIntro => "vI",
            BicondIntro => "<->I",
            ImplIntro => "->I",
            NegIntro => "~I",
            NegElim => "~E",
        };
        f.write_str(s)
    }
}
