use judged::{
    config::Config,
    context::Context,
    types::err::{ErrorKind, ProbabilityError},
};

fn seeded(seed: u64) -> Context {
    Context::from_config(Config {
        seed: Some(seed),
        ..Config::default()
    })
}

mod exact {
    use super::*;
    use judged::structures::{literal::Literal, term::Term};

    #[test]
    fn coin_sentence() {
        let mut ctx = seeded(0);
        ctx.ingest_str(
            "heads(c1) [x=1].
             tails(c1) [x=2].
             @P(x=1) = 0.5.
             @P(x=2) = 0.5.",
        )
        .unwrap();

        let goal = Literal::positive("heads", vec![Term::Var("C".to_owned())]);
        let answers = ctx.exact(&goal).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.answers[0].literal.to_string(), "heads(c1)");
        assert_eq!(answers.answers[0].sentence.to_string(), "x=1");
    }

    #[test]
    fn exclusive_conjunction_collapses() {
        // The rule is live under x=2 yet requires a body live under x=1.
        let mut ctx = seeded(0);
        ctx.ingest_str(
            "p [x=1].
             q :- p, p [x=2].",
        )
        .unwrap();

        let goal = Literal::positive("q", Vec::default());
        assert!(ctx.exact(&goal).unwrap().is_empty());
    }

    #[test]
    fn negation_unsupported() {
        let mut ctx = seeded(0);
        ctx.ingest_str(
            "p(1).
             q(X) :- p(X), ~r(X).
             r(2).",
        )
        .unwrap();

        let goal = Literal::positive("q", vec![Term::Var("X".to_owned())]);
        assert_eq!(
            ctx.exact(&goal),
            Err(ErrorKind::Probability(ProbabilityError::UnsupportedOperation))
        );
    }
}

mod montecarlo {
    use super::*;

    #[test]
    fn coin_estimate() {
        let mut ctx = seeded(0);
        ctx.ingest_str(
            "heads(c1) [x=1].
             tails(c1) [x=2].
             @P(x=1) = 0.5.
             @P(x=2) = 0.5.",
        )
        .unwrap();

        let answers = ctx.query_str("heads(C)?").unwrap();
        let estimates = ctx.estimate(&answers).unwrap();
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].samples, 10_000);
        assert!((estimates[0].probability() - 0.5).abs() < 0.03);
    }

    #[test]
    fn exhaustive_disjunction() {
        let mut ctx = seeded(0);
        ctx.ingest_str(
            "either(c1) [x=1].
             either(c1) [x=2].
             @P(x=1) = 0.5.
             @P(x=2) = 0.5.",
        )
        .unwrap();

        // Both proofs collapse to one answer under x=1 or x=2, which holds in every world.
        let answers = ctx.query_str("either(C)?").unwrap();
        assert_eq!(answers.len(), 1);

        let estimates = ctx.estimate(&answers).unwrap();
        assert_eq!(estimates[0].probability(), 1.0);
    }

    #[test]
    fn seeded_runs_repeat() {
        let program = "heads(c1) [x=1].
             tails(c1) [x=2].
             @P(x=1) = 0.5.
             @P(x=2) = 0.5.";

        let mut first = seeded(73);
        first.ingest_str(program).unwrap();
        let mut second = seeded(73);
        second.ingest_str(program).unwrap();

        let answers = first.query_str("heads(C)?").unwrap();
        let left = first.estimate(&answers).unwrap();
        let answers = second.query_str("heads(C)?").unwrap();
        let right = second.estimate(&answers).unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn missing_probability() {
        let mut ctx = seeded(0);
        ctx.ingest_str("heads(c1) [x=1].").unwrap();

        let answers = ctx.query_str("heads(C)?").unwrap();
        assert!(matches!(
            ctx.estimate(&answers),
            Err(ErrorKind::Probability(ProbabilityError::MissingProbability(_)))
        ));
    }

    #[test]
    fn convergence_stops_early() {
        let mut ctx = Context::from_config(Config {
            seed: Some(0),
            convergence: Some(0.05),
            ..Config::default()
        });
        ctx.ingest_str(
            "heads(c1) [x=1].
             tails(c1) [x=2].
             @P(x=1) = 0.5.
             @P(x=2) = 0.5.",
        )
        .unwrap();

        let answers = ctx.query_str("heads(C)?").unwrap();
        let estimates = ctx.estimate(&answers).unwrap();

        assert!(estimates[0].samples >= 128);
        assert!(estimates[0].samples < 10_000);
        assert!((estimates[0].probability() - 0.5).abs() < 0.1);
    }

    #[test]
    fn uniform_three_way() {
        let mut ctx = seeded(11);
        ctx.ingest_str(
            "spin(s1) [w=1]. spin(s2) [w=2]. spin(s3) [w=3].
             @uniform w.",
        )
        .unwrap();

        let answers = ctx.query_str("spin(S)?").unwrap();
        let estimates = ctx.estimate(&answers).unwrap();
        assert_eq!(estimates.len(), 3);

        let total: f64 = estimates.iter().map(|estimate| estimate.probability()).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for estimate in &estimates {
            assert!((estimate.probability() - 1.0 / 3.0).abs() < 0.03);
        }
    }

    #[test]
    fn negated_label_estimate() {
        let mut ctx = seeded(5);
        ctx.ingest_str(
            "closed(door) [x=1].
             open(door) :- ~closed(door).
             @P(x=1) = 0.25.
             @P(x=2) = 0.75.",
        )
        .unwrap();

        let answers = ctx.query_str("open(door)?").unwrap();
        let estimates = ctx.estimate(&answers).unwrap();
        assert!((estimates[0].probability() - 0.75).abs() < 0.03);
    }
}
