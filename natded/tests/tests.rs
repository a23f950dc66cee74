use natded::proof::{Failed, Search};
use natded::{Justification, Opt, Proof, Rule, Statement};

fn fm(s: &str) -> Statement {
    s.parse().unwrap()
}

fn search(premises: &[&str], conclusion: &str) -> Result<Proof, Failed> {
    let premises = premises.iter().map(|p| fm(p)).collect();
    let proof = Proof::new(premises, fm(conclusion));
    Search::new(Opt::default()).prove(proof)
}

/// Prove, check, and return the justification of the last step.
fn last(premises: &[&str], conclusion: &str) -> (Proof, Justification) {
    let proof = search(premises, conclusion).unwrap();
    assert_eq!(proof.check(), Ok(()));
    let step = proof.steps().last().unwrap();
    assert_eq!(step.statement, fm(conclusion));
    let just = step.justification.clone();
    (proof, just)
}

#[test]
fn conjunction_introduction() {
    let lines = natded::prove(&["A", "B"], "A^B").unwrap();
    let lines: Vec<_> = lines.into_iter().collect();
    let expected = [
        (1, ("A".to_string(), Justification::Premise)),
        (2, ("B".to_string(), Justification::Premise)),
        (3, ("A^B".to_string(), Justification::Rule(Rule::ConjIntro, vec![1, 2]))),
    ];
    assert_eq!(lines, expected.to_vec());
}

#[test]
fn disjunction_introduction() {
    let lines = natded::prove(&["A"], "AvB").unwrap();
    assert_eq!(lines.len(), 2);
    let just = Justification::Rule(Rule::DisjIntro, vec![1]);
    assert_eq!(lines[&2], ("AvB".to_string(), just));

    let (proof, just) = last(&["B"], "AvB");
    assert_eq!(proof.len(), 2);
    assert_eq!(just, Justification::Rule(Rule::DisjIntro, vec![1]));
}

#[test]
fn unprovable() {
    let err = natded::prove(&["A"], "B").unwrap_err();
    assert_eq!(err, natded::Error::Failed(Failed { incomplete: false }));
    assert_eq!(err.kind(), natded::szs::GaveUp);
    assert!(natded::prove(&["A->B"], "A").is_err());
    assert!(natded::prove(&["AvB"], "A").is_err());
}

#[test]
fn premise_is_conclusion() {
    let lines = natded::prove(&["A", "B"], "A").unwrap();
    let lines: Vec<_> = lines.into_iter().collect();
    assert_eq!(lines, [(1, ("A".to_string(), Justification::Premise))]);

    let lines = natded::prove(&["B", "A"], "A").unwrap();
    assert_eq!(lines.keys().last(), Some(&2));
}

#[test]
fn implication_elimination() {
    let (proof, just) = last(&["A->B", "A"], "B");
    assert_eq!(proof.len(), 3);
    assert_eq!(just, Justification::Rule(Rule::ImplElim, vec![1, 2]));

    // the implication is buried inside a conjunction
    let (_, just) = last(&["(A->B)^C", "A"], "B");
    assert!(matches!(just, Justification::Rule(Rule::ImplElim, _)));
}

#[test]
fn conjunction_elimination() {
    let (proof, just) = last(&["A^(B^C)"], "C");
    assert_eq!(proof.len(), 3);
    assert_eq!(just, Justification::Rule(Rule::ConjElim, vec![2]));
    assert_eq!(proof.steps()[1].statement, fm("B^C"));
}

#[test]
fn disjunction_elimination() {
    let (proof, just) = last(&["AvB", "A->C", "B->C"], "C");
    assert_eq!(proof.len(), 4);
    assert_eq!(just, Justification::Rule(Rule::DisjElim, vec![1, 2, 3]));

    let (_, just) = last(&["Av(BvC)", "A->D", "B->D", "C->D"], "D");
    assert_eq!(just, Justification::Rule(Rule::DisjElim, vec![1, 2, 3, 4]));

    // one implication is missing
    assert!(search(&["Av(BvC)", "A->D", "B->D"], "D").is_err());
}

#[test]
fn biconditional_elimination() {
    let (_, just) = last(&["A<->B", "A"], "B");
    assert_eq!(just, Justification::Rule(Rule::BicondElim, vec![1, 2]));
    let (_, just) = last(&["A<->B", "B"], "A");
    assert_eq!(just, Justification::Rule(Rule::BicondElim, vec![1, 2]));
}

#[test]
fn biconditional_introduction() {
    let (proof, just) = last(&["A->B", "B->A"], "A<->B");
    assert_eq!(proof.len(), 3);
    assert_eq!(just, Justification::Rule(Rule::BicondIntro, vec![1, 2]));

    let (_, just) = last(&[], "A<->A");
    assert!(matches!(just, Justification::Rule(Rule::BicondIntro, _)));
}

#[test]
fn implication_introduction() {
    let lines = natded::prove_tautology("B->(A->B)").unwrap();
    let lines: Vec<_> = lines.into_values().collect();
    let expected = [
        ("B".to_string(), Justification::Assumption),
        ("A".to_string(), Justification::Assumption),
        ("A->B".to_string(), Justification::Rule(Rule::ImplIntro, vec![1, 2])),
        ("B->(A->B)".to_string(), Justification::Rule(Rule::ImplIntro, vec![1, 3])),
    ];
    assert_eq!(lines, expected.to_vec());

    let (proof, just) = last(&[], "A->A");
    assert_eq!(proof.len(), 2);
    assert_eq!(just, Justification::Rule(Rule::ImplIntro, vec![1]));

    let (_, just) = last(&["A->B", "B->C"], "A->C");
    assert_eq!(just, Justification::Rule(Rule::ImplIntro, vec![3, 5]));
}

#[test]
fn negation() {
    // modus tollens
    let (_, just) = last(&["A->B", "~B"], "~A");
    assert!(matches!(just, Justification::Rule(Rule::NegIntro, _)));

    // ex falso
    let (_, just) = last(&["B", "~B"], "A");
    assert!(matches!(just, Justification::Rule(Rule::NegElim, _)));

    let (_, just) = last(&[], "(A->B)->(~B->~A)");
    assert_eq!(just, Justification::Rule(Rule::ImplIntro, vec![1, 9]));
}

#[test]
fn cycle() {
    // proving A^B must not try to prove A^B again
    let (proof, _) = last(&["A->(A^B)"], "A->B");
    assert_eq!(proof.steps()[2].statement, fm("A^B"));
    assert!(search(&["A->(A^B)"], "B").is_err());
}

#[test]
fn sibling_after_cycle() {
    // B fails as left disjunct, where proving it runs into B again,
    // but is proved later under the assumption A
    assert!(search(&["A->B"], "B").is_err());
    let (proof, just) = last(&["A->B"], "Bv(A->(B^A))");
    assert_eq!(proof.len(), 6);
    assert_eq!(proof.steps()[2].statement, fm("B"));
    let elim = Justification::Rule(Rule::ImplElim, vec![1, 2]);
    assert_eq!(proof.steps()[2].justification, elim);
    assert_eq!(just, Justification::Rule(Rule::DisjIntro, vec![5]));
}

#[test]
fn limits() {
    let premises = Vec::from([fm("A")]);
    let proof = Proof::new(premises, fm("B"));
    let opt = Opt {
        depth: 64,
        inferences: Some(5),
    };
    let mut search = Search::new(opt);
    let failed = search.prove(proof.clone()).err();
    assert_eq!(failed, Some(Failed { incomplete: true }));
    assert_eq!(search.inferences(), 5);

    let opt = Opt {
        depth: 1,
        inferences: None,
    };
    let failed = Search::new(opt).prove(proof).err();
    assert_eq!(failed, Some(Failed { incomplete: true }));

    let opt = Opt {
        depth: 0,
        inferences: None,
    };
    let err = natded::prove_with(opt, &["A", "B"], "A^B").unwrap_err();
    assert_eq!(err.kind(), natded::szs::ResourceOut);
}

#[test]
fn parse_errors() {
    let err = natded::prove(&["A", "B^"], "A").unwrap_err();
    assert_eq!(err, natded::Error::Parse(natded::parse::Error::Statement(2)));
    assert_eq!(err.kind(), natded::szs::SyntaxError);
    assert!(natded::prove_tautology("A->B->C").is_err());

    let deep = format!("{}A", "~".repeat(100_000));
    let err = natded::prove(&[deep.as_str()], "B").unwrap_err();
    let depth = natded::parse::MAX_DEPTH;
    assert_eq!(err, natded::Error::Parse(natded::parse::Error::Depth(depth)));
}

#[test]
fn classification() {
    let exprs = ["Av~A", "A^~A", "A->B", "(A->B)^(B->C)->(A->C)", "((A->B)^(B->C))->(A->C)"];
    for e in exprs {
        let (t, c, s, k) = match natded::tautology(e) {
            Ok(t) => (
                t,
                natded::contradiction(e).unwrap(),
                natded::satisfiable(e).unwrap(),
                natded::contingent(e).unwrap(),
            ),
            Err(_) => continue,
        };
        assert!(!t || (s && !c));
        assert!(!c || !s);
        assert_eq!(k, s && !t);
    }
    assert_eq!(natded::tautology("((A->B)^(B->C))->(A->C)"), Ok(true));
    assert_eq!(natded::contradiction("A^~A"), Ok(true));
    assert_eq!(natded::contingent("A->B"), Ok(true));
    assert!(natded::tautology("A^").is_err());
}

#[test]
fn equivalence() {
    let pairs = [("A->B", "~AvB"), ("~(AvB)", "~A^~B"), ("A", "B"), ("A<->B", "B<->A")];
    for (l, r) in pairs {
        let iff = format!("({})<->({})", l, r);
        assert_eq!(natded::equivalent(l, r), natded::tautology(&iff));
    }
}

#[test]
fn evaluation() {
    let asg = "A=T,B=F,C=T".parse().unwrap();
    assert_eq!(natded::evaluate("(AvB)->C", &asg), Ok(true));
    assert_eq!(natded::evaluate("A<->B", &asg), Ok(false));
    assert_eq!(natded::evaluate("~(A^~B)", &asg), Ok(false));
    let err = natded::evaluate("D", &asg).unwrap_err();
    assert_eq!(err.kind(), natded::szs::InputError);
}

#[test]
fn display() {
    let proof = search(&["A->B", "A"], "B").unwrap();
    let expected = "1. A->B  Premise\n2. A     Premise\n3. B     ->E 1, 2\n";
    assert_eq!(proof.display().to_string(), expected);
}
