use judged::{config::Config, context::Context, reports::Warning};

mod basic {
    use super::*;

    #[test]
    fn facts() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(a). p(b).").unwrap();

        let answers = ctx.query_str("p(X)?").unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.answers[0].literal.to_string(), "p(a)");
        assert_eq!(answers.answers[1].literal.to_string(), "p(b)");
    }

    #[test]
    fn bound_argument() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(a). p(b).").unwrap();

        let answers = ctx.query_str("p(b)?").unwrap();
        assert_eq!(answers.len(), 1);
        assert!(ctx.query_str("p(c)?").unwrap().is_empty());
    }

    #[test]
    fn ancestor_recursion() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "parent(a, b). parent(b, c).
             anc(X, Y) :- parent(X, Y).
             anc(X, Y) :- parent(X, Z), anc(Z, Y).",
        )
        .unwrap();

        let answers = ctx.query_str("anc(a, Y)?").unwrap();
        let found = answers
            .iter()
            .map(|answer| answer.bindings[0].1.to_string())
            .collect::<Vec<_>>();
        assert_eq!(found, vec!["b", "c"]);
    }

    #[test]
    fn left_recursion_terminates() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "edge(a, b). edge(b, a). edge(b, c).
             path(X, Y) :- path(X, Z), edge(Z, Y).
             path(X, Y) :- edge(X, Y).",
        )
        .unwrap();

        let answers = ctx.query_str("path(a, Y)?").unwrap();
        let mut found = answers
            .iter()
            .map(|answer| answer.bindings[0].1.to_string())
            .collect::<Vec<_>>();
        found.sort();
        assert_eq!(found, vec!["a", "b", "c"]);
    }

    #[test]
    fn determinism() {
        let program = "edge(a, b). edge(b, c). edge(a, c).
             path(X, Y) :- edge(X, Y).
             path(X, Y) :- edge(X, Z), path(Z, Y).";

        let mut first = Context::from_config(Config::default());
        first.ingest_str(program).unwrap();
        let mut second = Context::from_config(Config::default());
        second.ingest_str(program).unwrap();

        for _ in 0..3 {
            let left = first.query_str("path(X, Y)?").unwrap();
            let right = second.query_str("path(X, Y)?").unwrap();

            let render = |answers: &judged::reports::AnswerSet| {
                answers
                    .iter()
                    .map(|answer| format!("{} [{}]", answer.literal, answer.sentence))
                    .collect::<Vec<_>>()
            };
            assert_eq!(render(&left), render(&right));
        }
    }

    #[test]
    fn unknown_predicate_warns() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(a).").unwrap();

        let answers = ctx.query_str("q(X)?").unwrap();
        assert!(answers.is_empty());
        assert!(matches!(
            answers.warnings.as_slice(),
            [Warning::UnknownPredicate(signature)] if signature.to_string() == "q/1"
        ));
    }

    #[test]
    fn retraction() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(a). p(b).").unwrap();
        assert_eq!(ctx.query_str("p(X)?").unwrap().len(), 2);

        use judged::{
            builder::{IngestOk, Statement},
            structures::{clause::Clause, literal::Literal, term::Term},
        };

        let target = Clause::fact(Literal::positive("p", vec![Term::Const("a".to_owned())]));
        let removed = ctx.ingest(Statement::Retract(target.clone())).unwrap();
        assert!(matches!(removed, IngestOk::Retracted(true)));

        // Tables are per query, so the next query sees the removal.
        assert_eq!(ctx.query_str("p(X)?").unwrap().len(), 1);

        // A second retraction of the same clause misses, silently.
        let missed = ctx.ingest(Statement::Retract(target)).unwrap();
        assert!(matches!(missed, IngestOk::Retracted(false)));
    }

    #[test]
    fn extension_resolution() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "@use builtin.
             item(a). item(b).
             pair(X, Y) :- item(X), item(Y), distinct(X, Y).",
        )
        .unwrap();

        let answers = ctx.query_str("pair(X, Y)?").unwrap();
        let found = answers
            .iter()
            .map(|answer| answer.literal.to_string())
            .collect::<Vec<_>>();
        assert_eq!(found, vec!["pair(a, b)", "pair(b, a)"]);
    }

    #[test]
    fn unknown_extension() {
        use judged::types::err::{ErrorKind, ExtensionError};

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.ingest_str("@use nonesuch."),
            Err(ErrorKind::Extension(ExtensionError::Unknown(
                "nonesuch".to_owned()
            )))
        );
    }

    #[test]
    fn answer_ceiling() {
        use judged::types::err::{ErrorKind, Resource};

        let mut ctx = Context::from_config(Config {
            answer_ceiling: 1,
            ..Config::default()
        });
        ctx.ingest_str("p(a). p(b).").unwrap();

        assert_eq!(
            ctx.query_str("p(X)?"),
            Err(ErrorKind::ResourceExhausted(Resource::TableAnswers))
        );
    }
}
