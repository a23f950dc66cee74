use clap::Parser;
use log::{error, info};
use natded::proof::{Proof, Search};
use natded::table::TruthTable;
use natded::{szs, Assignment, Statement};
use natprove::{Cli, Command, Error};

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(e) = result {
        print!("{}", szs::Status(e.get_kind()));
        if let Some(e) = e.get_error() {
            if let Err(e) = cli.paths.output(e) {
                error!("could not write output: {}", e)
            }
        };
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Command::Prove {
            premises,
            conclusion,
        } => prove(cli, premises, conclusion),
        Command::Eval {
            statement,
            assignment,
        } => {
            let fm: Statement = statement.parse()?;
            let asg: Assignment = assignment.parse()?;
            let value = fm.eval(&asg)?;
            info!("{} under {} is {}", fm, asg, value);
            let status = if value {
                szs::Satisfiable
            } else {
                szs::CounterSatisfiable
            };
            print!("{}", szs::Status(status));
            cli.paths.output(format!("{}\n", value))?;
            Ok(())
        }
        Command::Classify { statement } => {
            let fm: Statement = statement.parse()?;
            classify(cli, &fm)
        }
        Command::Equiv { left, right } => {
            let (l, r): (Statement, Statement) = (left.parse()?, right.parse()?);
            match Statement::iff(l, r).counterexample() {
                None => print!("{}", szs::Status(szs::Equivalent)),
                Some(cex) => {
                    print!("{}", szs::Status(szs::CounterSatisfiable));
                    cli.paths.output(format!("{}\n", cex))?
                }
            }
            Ok(())
        }
        Command::Table { statement } => {
            let fm: Statement = statement.parse()?;
            cli.paths.output(TruthTable::new(&fm))?;
            Ok(())
        }
    }
}

fn classify(cli: &Cli, fm: &Statement) -> Result<(), Error> {
    if fm.is_tautology() {
        info!("{} is a tautology", fm);
        print!("{}", szs::Status(szs::Tautology));
    } else if fm.is_contradiction() {
        info!("{} is a contradiction", fm);
        print!("{}", szs::Status(szs::Unsatisfiable));
    } else {
        info!("{} is contingent", fm);
        print!("{}", szs::Status(szs::Satisfiable));
        if let Some(cex) = fm.counterexample() {
            cli.paths.output(format!("{}\n", cex))?
        }
    }
    Ok(())
}

fn prove(cli: &Cli, premises: &[String], conclusion: &str) -> Result<(), Error> {
    let premises = premises.iter().map(|p| p.parse());
    let premises = premises.collect::<Result<Vec<Statement>, _>>()?;
    let conclusion: Statement = conclusion.parse()?;
    let proof = Proof::new(premises, conclusion);

    let mut search = Search::new(cli.limits.opt());
    let result = search.prove(proof.clone());
    info!("search completed after {} inferences", search.inferences());

    match result {
        Ok(proof) => {
            print!("{}", szs::Status(szs::Theorem));
            if cli.paths.json {
                let json = serde_json::to_string_pretty(proof.steps())?;
                cli.paths.output(json + "\n")?
            } else {
                cli.paths.output(proof.display())?
            }
        }
        Err(failed) => {
            // the argument as a single statement P1 -> (P2 -> ... -> C)
            let premises = proof.premises().iter().rev().cloned();
            let arg = premises.fold(proof.conclusion().clone(), |c, p| Statement::imp(p, c));
            let cex = arg.counterexample().ok_or(failed)?;
            info!("counterexample: {}", cex);
            print!("{}", szs::Status(szs::CounterSatisfiable));
            cli.paths.output(format!("{}\n", cex))?
        }
    }
    Ok(())
}
