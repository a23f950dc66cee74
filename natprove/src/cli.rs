use clap::{Args, Parser, Subcommand};
use natded::Opt;
use std::fmt::Display;
use std::path::PathBuf;

/// Natural deduction prover for propositional logic
///
/// Statements are built from the sentences A to Z,
/// negation (~), conjunction (^), disjunction (v),
/// implication (->), and biconditional (<->).
/// Binary connectives do not associate,
/// so "AvBvC" has to be written as "(AvB)vC" or "Av(BvC)".
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub limits: Limits,

    #[command(flatten)]
    pub paths: Paths,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search for a proof of a conclusion from premises
    ///
    /// If no proof is found and the argument is invalid,
    /// print a valuation that makes all premises true and the conclusion false.
    Prove {
        /// Premise, may be given several times
        #[arg(short, long = "premise")]
        premises: Vec<String>,

        /// Statement to prove
        conclusion: String,
    },

    /// Evaluate a statement under a truth assignment
    Eval {
        statement: String,

        /// Truth values of sentences, for example "A=T,B=F"
        #[arg(short, long)]
        assignment: String,
    },

    /// Classify a statement by its truth table
    Classify { statement: String },

    /// Decide whether two statements are equivalent
    Equiv { left: String, right: String },

    /// Print the truth table of a statement
    Table { statement: String },
}

#[derive(Args)]
pub struct Limits {
    /// Maximal number of goals pursued simultaneously
    #[arg(long, global = true, default_value_t = Opt::default().depth)]
    depth: usize,

    /// Maximal number of rule applications
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Do not limit the number of rule applications
    #[arg(long, global = true, conflicts_with = "limit")]
    nolimit: bool,
}

impl Limits {
    pub fn opt(&self) -> Opt {
        let inferences = if self.nolimit {
            None
        } else {
            self.limit.or(Opt::default().inferences)
        };
        Opt {
            depth: self.depth,
            inferences,
        }
    }
}

#[derive(Args)]
pub struct Paths {
    /// Print proofs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Write SZS output (such as proofs and error details) to given file
    #[arg(short, global = true)]
    pub output: Option<PathBuf>,
}

impl Paths {
    pub fn output(&self, out: impl Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", natded::szs::Output(out)),
        }
    }
}

#[test]
fn limits() {
    let cli = Cli::parse_from(["natprove", "prove", "-p", "A", "A"]);
    let opt = cli.limits.opt();
    assert_eq!((opt.depth, opt.inferences), (64, Some(100_000)));

    let cli = Cli::parse_from(["natprove", "--depth", "8", "prove", "A", "--nolimit"]);
    let opt = cli.limits.opt();
    assert_eq!((opt.depth, opt.inferences), (8, None));

    let cli = Cli::try_parse_from(["natprove", "prove", "A", "--limit", "5", "--nolimit"]);
    assert!(cli.is_err());
}

#[test]
fn commands() {
    let args = ["natprove", "--json", "prove", "-p", "A->B", "--premise", "A", "B"];
    let cli = Cli::parse_from(args);
    assert!(cli.paths.json);
    match cli.command {
        Command::Prove {
            premises,
            conclusion,
        } => {
            assert_eq!(premises, ["A->B", "A"]);
            assert_eq!(conclusion, "B");
        }
        _ => panic!("expected prove"),
    }

    let cli = Cli::parse_from(["natprove", "eval", "A^B", "-a", "A=T,B=F"]);
    assert!(matches!(cli.command, Command::Eval { .. }));
    assert!(Cli::try_parse_from(["natprove", "eval", "A^B"]).is_err());
}
