/*!
A library for answering queries over probabilistic Datalog programs.

judged evaluates programs of Horn clauses with stratified negation, where each clause may carry a *descriptive sentence*: a propositional formula over `partition=value` labels.
A query returns, for each answer, the sentence under which the answer is derivable, and independent probabilities attached to the labels then yield either the exact sentence or a Monte-Carlo estimate of the answer's probability.

judged is developed to support investigation into tabled resolution and probabilistic logic programming, whether as a novice or through implementing novel ideas.

# Orientation

The library is designed around the core structure of a [context].

Programs may be added through the surface syntax ([ingest_str](crate::context::GenericContext::ingest_str)) or [programmatically](crate::context::GenericContext::ingest).

Internally, and at a high level, a query is viewed in terms of a handful of databases and the procedures which read them:

- A program is stored in a [clause database](crate::db::clause), indexed by signature.
- Partitions and their probabilities are stored in a [label database](crate::db::label).
- The [resolver](crate::procedures::resolve) derives answers through tabled SLDNF resolution, composing sentences along proof trees.
- The [probability back-ends](crate::probability) turn sentence-annotated answers into exact sentences or sampled estimates.

Useful starting points, then, may be:
- The [resolution procedure](crate::procedures::resolve) to inspect the dynamics of a query.
- The [structures] to familiarise yourself with the elements of a program (terms, literals, clauses, sentences, worlds).
- The [configuration](crate::config) to see what is adjustable.

# Examples

+ A coin, flipped.

```rust
# use judged::{config::Config, context::Context};
let mut ctx = Context::from_config(Config {
    seed: Some(0),
    ..Config::default()
});

ctx.ingest_str(
    "heads(c1) [x=1].
     tails(c1) [x=2].
     @P(x=1) = 0.5.
     @P(x=2) = 0.5.",
).unwrap();

let answers = ctx.query_str("heads(C)?").unwrap();
assert_eq!(answers.len(), 1);
assert_eq!(answers.answers[0].sentence.to_string(), "x=1");

let estimates = ctx.estimate(&answers).unwrap();
assert!((estimates[0].probability() - 0.5).abs() < 0.05);
```

+ Recursion, tabled.

```rust
# use judged::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

ctx.ingest_str(
    "parent(a, b). parent(b, c).
     anc(X, Y) :- parent(X, Y).
     anc(X, Y) :- parent(X, Z), anc(Z, Y).",
).unwrap();

let answers = ctx.query_str("anc(a, Y)?").unwrap();
let found = answers.iter().map(|a| a.literal.to_string()).collect::<Vec<_>>();
assert_eq!(found, vec!["anc(a, b)", "anc(a, c)"]);
```

# Guiding principles

## Modularity

+ The evaluator is built of many interconnected parts, but where possible (and reasonable) interaction between parts happens through documented access points. For example:
  - Clauses are stored in a [clause database](db::clause) and read back through signature lookup; the internal structure of the database is private.
  - The algorithm for answering a query is factored into a collection of [procedures].
  - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).

## Determinism

+ For a fixed program, a query yields the same answers in the same order on every run, and a seeded Monte-Carlo run yields the same estimate on every run.
  Internal iteration is over ordered structures, and sentences are kept in a canonical form, so determinism is a property to test rather than an accident.

# Logs

The library logs the interesting moments of a query --- tables created and completed, answers inserted and widened, strata assigned, worlds sampled --- under named targets, listed in [misc::log].
Since a log implementation is only wired up on request, the calls are free to be verbose.

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to the tables of a query can be filtered with `RUST_LOG=tables …` or,
- Logs of world sampling with `RUST_LOG=sampler=debug …`
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod probability;
pub mod reports;

pub mod db;

pub mod misc;
