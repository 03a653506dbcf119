/*!
Tools for building the knowledge base of a context.

A program reaches the context as a sequence of [statements](Statement), dispatched exhaustively by [ingest](crate::context::GenericContext::ingest).
Programs in the surface syntax are turned into statements by the [parser](parse), exposed as [ingest_str](crate::context::GenericContext::ingest_str) and [read_program](crate::context::GenericContext::read_program).

# Generators

A generator `{ stmt … | guard }` is a loader construct: the guard is evaluated as a query, and for each answer the statements are instantiated with the answer substitution and ingested.
The resolver never sees generator forms.

# Example

```rust
# use judged::config::Config;
# use judged::context::Context;
let mut ctx = Context::from_config(Config::default());

ctx.ingest_str("coin(c1). coin(c2).").unwrap();
ctx.ingest_str(
    "{ result(C, h) :- coin(C) [c(C)=h].
       result(C, t) :- coin(C) [c(C)=t].
       @uniform c(C).
       | coin(C) }",
).unwrap();

let answers = ctx.query_str("result(C, R)?").unwrap();
assert_eq!(answers.len(), 4);
```
*/

pub mod parse;

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    reports::AnswerSet,
    structures::{
        bindings::Bindings,
        clause::Clause,
        literal::Literal,
        sentence::Label,
        term::Term,
    },
    types::err::{self, ErrorKind},
};

/// A parsed statement, dispatched by [ingest](GenericContext::ingest).
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// A clause of the program.
    Clause(Clause),

    /// A query.
    Query(Literal),

    /// An interactive assertion; ingested like a program clause.
    Assert(Clause),

    /// An interactive retraction; the first structurally equal clause is removed.
    Retract(Clause),

    /// A probability for a label.
    LabelProb(Label, f64),

    /// A uniform distribution over the currently declared values of a partition.
    UniformPartition(Term),

    /// Activation of a cataloged extension.
    UseExtension(String),

    /// A generator, expanded at ingest.
    Generator(Generator),
}

/// A block of statements to instantiate once per answer of a guard query.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    /// The statements of the block.
    pub statements: Vec<Statement>,

    /// The guard literal.
    pub guard: Literal,
}

/// Ok results of ingesting a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum IngestOk {
    /// A clause was added.
    Added,

    /// Whether a clause was retracted; a miss is not an error.
    Retracted(bool),

    /// The answers to a query statement.
    Answers(AnswerSet),

    /// A probability was recorded.
    Probability,

    /// A uniform distribution was recorded.
    Uniform,

    /// An extension was activated.
    Extension,

    /// A generator was expanded into the given number of statements.
    Expanded(usize),
}

/// A statement with an answer substitution applied throughout.
fn instantiate(statement: &Statement, bindings: &Bindings) -> Statement {
    let clause = |clause: &Clause| Clause {
        head: bindings.resolve_literal(&clause.head),
        body: clause.body.iter().map(|literal| bindings.resolve_literal(literal)).collect(),
        sentence: clause.sentence.apply(bindings),
    };

    match statement {
        Statement::Clause(c) => Statement::Clause(clause(c)),
        Statement::Assert(c) => Statement::Assert(clause(c)),
        Statement::Retract(c) => Statement::Retract(clause(c)),
        Statement::Query(literal) => Statement::Query(bindings.resolve_literal(literal)),
        Statement::LabelProb(label, probability) => Statement::LabelProb(
            Label {
                partition: bindings.resolve(&label.partition),
                value: bindings.resolve(&label.value),
            },
            *probability,
        ),
        Statement::UniformPartition(partition) => {
            Statement::UniformPartition(bindings.resolve(partition))
        }
        Statement::UseExtension(name) => Statement::UseExtension(name.clone()),
        Statement::Generator(generator) => Statement::Generator(Generator {
            statements: generator
                .statements
                .iter()
                .map(|inner| instantiate(inner, bindings))
                .collect(),
            guard: bindings.resolve_literal(&generator.guard),
        }),
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Ingests one statement.
    ///
    /// Errors are propagated, never swallowed; whether to continue a batch after an error is the shell's decision.
    pub fn ingest(&mut self, statement: Statement) -> Result<IngestOk, ErrorKind> {
        match statement {
            Statement::Clause(clause) | Statement::Assert(clause) => {
                clause.check()?;

                let mut labels = Vec::default();
                clause.sentence.collect_labels(&mut labels);
                for label in &labels {
                    self.label_db.note_label(label);
                }

                self.clause_db.assert(clause);
                Ok(IngestOk::Added)
            }

            Statement::Retract(clause) => Ok(IngestOk::Retracted(self.clause_db.retract(&clause))),

            Statement::Query(goal) => Ok(IngestOk::Answers(self.query(&goal)?)),

            Statement::LabelProb(label, probability) => {
                self.label_db.set_probability(&label, probability);
                Ok(IngestOk::Probability)
            }

            Statement::UniformPartition(partition) => {
                self.label_db.set_uniform(&partition)?;
                Ok(IngestOk::Uniform)
            }

            Statement::UseExtension(name) => match self.catalog.get(&name) {
                Some(extension) => {
                    self.extensions.register(extension.clone());
                    log::info!(target: targets::LOADER, "Using extension '{name}'");
                    Ok(IngestOk::Extension)
                }
                None => Err(err::ExtensionError::Unknown(name).into()),
            },

            Statement::Generator(generator) => self.expand_generator(generator),
        }
    }

    /// Expands a generator: the guard is queried, and the statements are instantiated and ingested once per answer.
    fn expand_generator(&mut self, generator: Generator) -> Result<IngestOk, ErrorKind> {
        let answers = self.query(&generator.guard)?;

        let mut expanded = 0;
        for answer in answers.iter() {
            let mut bindings = Bindings::empty();
            for (variable, term) in &answer.bindings {
                bindings.bind(variable.clone(), term.clone());
            }

            for statement in &generator.statements {
                self.ingest(instantiate(statement, &bindings))?;
                expanded += 1;
            }
        }

        log::info!(
            target: targets::LOADER,
            "Generator over {} expanded to {expanded} statements",
            generator.guard,
        );
        Ok(IngestOk::Expanded(expanded))
    }

    /// Parses and ingests a program, statement by statement.
    ///
    /// The first error aborts the rest of the source.
    pub fn ingest_str(&mut self, source: &str) -> Result<Vec<IngestOk>, ErrorKind> {
        let statements = parse::parse_program(source)?;

        let mut results = Vec::with_capacity(statements.len());
        for statement in statements {
            results.push(self.ingest(statement)?);
        }
        Ok(results)
    }

    /// Reads a program from a reader, then ingests it.
    pub fn read_program(&mut self, mut reader: impl BufRead) -> Result<Vec<IngestOk>, ErrorKind> {
        let mut source = String::default();
        if reader.read_to_string(&mut source).is_err() {
            return Err(err::ParseError::UnexpectedEnd.into());
        }
        self.ingest_str(&source)
    }

    /// Parses a single query statement and runs it.
    pub fn query_str(&mut self, source: &str) -> Result<AnswerSet, ErrorKind> {
        let statements = parse::parse_program(source)?;

        match statements.as_slice() {
            [Statement::Query(goal)] => self.query(goal),
            _ => Err(err::ParseError::Expected("a single query", 1).into()),
        }
    }
}
