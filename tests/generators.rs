use judged::{builder::IngestOk, config::Config, context::Context};

mod generators {
    use super::*;

    #[test]
    fn expansion_counts() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("coin(c1). coin(c2).").unwrap();

        let results = ctx
            .ingest_str(
                "{ result(C, h) :- coin(C) [c(C)=h].
                   result(C, t) :- coin(C) [c(C)=t].
                   @uniform c(C).
                   | coin(C) }",
            )
            .unwrap();

        // Three statements instantiated per coin.
        assert_eq!(results, vec![IngestOk::Expanded(6)]);
        assert_eq!(ctx.clause_db.clause_count(), 6);
    }

    #[test]
    fn instantiated_labels() {
        let mut ctx = Context::from_config(Config {
            seed: Some(0),
            ..Config::default()
        });
        ctx.ingest_str(
            "coin(c1). coin(c2).
             { result(C, h) :- coin(C) [c(C)=h].
               result(C, t) :- coin(C) [c(C)=t].
               @uniform c(C).
               | coin(C) }",
        )
        .unwrap();

        let answers = ctx.query_str("result(C, R)?").unwrap();
        let found = answers
            .iter()
            .map(|answer| format!("{} [{}]", answer.literal, answer.sentence))
            .collect::<Vec<_>>();
        assert_eq!(
            found,
            vec![
                "result(c1, h) [c(c1)=h]",
                "result(c1, t) [c(c1)=t]",
                "result(c2, h) [c(c2)=h]",
                "result(c2, t) [c(c2)=t]",
            ],
        );

        let estimates = ctx.estimate(&answers).unwrap();
        for estimate in &estimates {
            assert!((estimate.probability() - 0.5).abs() < 0.03);
        }
    }

    #[test]
    fn guard_without_answers() {
        let mut ctx = Context::from_config(Config::default());
        ctx.ingest_str("coin(c1).").unwrap();

        let results = ctx
            .ingest_str("{ result(C) :- die(C). | die(C) }")
            .unwrap();
        assert_eq!(results, vec![IngestOk::Expanded(0)]);
    }
}
