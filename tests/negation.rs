use judged::{
    config::Config,
    context::Context,
    types::err::{ClauseError, ErrorKind, StratifyError},
};

mod negation {
    use super::*;

    #[test]
    fn stratified_filter() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "p(1). p(2).
             q(X) :- p(X), ~r(X).
             r(1).",
        )
        .unwrap();

        let answers = ctx.query_str("q(X)?").unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.answers[0].bindings[0].1.to_string(), "2");
    }

    #[test]
    fn keyword_negation() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "p(1). p(2).
             q(X) :- p(X), not r(X).
             r(1).",
        )
        .unwrap();

        assert_eq!(ctx.query_str("q(X)?").unwrap().len(), 1);
    }

    #[test]
    fn unstratified_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "move(a, b). move(b, a).
             win(X) :- move(X, Y), ~win(Y).",
        )
        .unwrap();

        assert!(matches!(
            ctx.query_str("win(X)?"),
            Err(ErrorKind::Stratify(StratifyError::UnstratifiedNegation(_)))
        ));
    }

    #[test]
    fn unsafe_clause_rejected() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.ingest_str("q(X) :- ~r(X)."),
            Err(ErrorKind::Clause(ClauseError::Unsafe("X".to_owned())))
        );
    }

    #[test]
    fn negation_selected_once_ground() {
        // The negative literal leads the body; resolution delays it until q grounds X.
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "q(1). q(2).
             p(2).
             u(X) :- ~p(X), q(X).",
        )
        .unwrap();

        let answers = ctx.query_str("u(X)?").unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.answers[0].bindings[0].1.to_string(), "1");
    }

    #[test]
    fn negative_query() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(1).").unwrap();

        assert_eq!(ctx.query_str("~p(1)?").unwrap().len(), 0);
        assert_eq!(ctx.query_str("~p(2)?").unwrap().len(), 1);
    }

    #[test]
    fn negative_query_requires_ground() {
        use judged::types::err::ResolveError;

        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("p(1).").unwrap();

        assert!(matches!(
            ctx.query_str("~p(X)?"),
            Err(ErrorKind::Resolve(ResolveError::UngroundedNegation(_)))
        ));
    }

    #[test]
    fn power_grid() {
        // Cities drawing from plant a are powered; f sits on an isolated loop.
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "node(a). node(b). node(c). node(d). node(f).
             plant(a).
             edge(a, b). edge(b, c). edge(c, d). edge(f, f).
             link(X, Y) :- edge(X, Y).
             link(X, Y) :- edge(Y, X).
             powered(X) :- plant(X).
             powered(X) :- link(X, Y), powered(Y).
             unpowered(X) :- node(X), ~powered(X).",
        )
        .unwrap();

        let answers = ctx.query_str("unpowered(C)?").unwrap();
        let found = answers
            .iter()
            .map(|answer| answer.literal.to_string())
            .collect::<Vec<_>>();
        assert_eq!(found, vec!["unpowered(f)"]);

        assert_eq!(ctx.query_str("powered(d)?").unwrap().len(), 1);
    }

    #[test]
    fn sentence_aware_negation() {
        // The negation of a labelled fact contributes a sentence rather than failing outright.
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str(
            "closed(door) [x=1].
             open(door) :- ~closed(door).",
        )
        .unwrap();

        let answers = ctx.query_str("open(door)?").unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.answers[0].sentence.to_string(), "not x=1");
    }
}
