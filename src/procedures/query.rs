/*!
The public contract of a query.

Given the knowledge base of the context and a query literal, [query](crate::context::GenericContext::query) produces the finite set of `(substitution, sentence)` pairs such that for each answer there is a proof tree of the instantiated query, and the attached sentence is the disjunction of the per-proof conjunctions of clause sentences.

For a fixed knowledge base the answers arrive in a deterministic order, derived from clause declaration order and binding discovery order.

Tables are discarded once the query returns: semantics never depend on table persistence across queries.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::{resolve::Resolver, stratify::stratify, unify::unify_terms},
    reports::{Answer, AnswerSet, Warning},
    structures::{bindings::Bindings, literal::Literal, sentence::Sentence, term::Term},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// The answers to a query literal, each with the sentence under which it is derivable.
    ///
    /// A negative literal is admitted when ground, and answers with the negated disjunction of the sentences of its counterpart, unless that negation simplifies to `false`.
    pub fn query(&mut self, goal: &Literal) -> Result<AnswerSet, ErrorKind> {
        self.counters.queries += 1;
        log::info!(target: targets::RESOLVER, "Query {goal}");

        let stratification = stratify(&self.clause_db)?;
        let mut resolver = Resolver::new(
            &self.clause_db,
            &self.extensions,
            stratification,
            self.config.answer_ceiling,
        );

        let mut warnings = Vec::default();
        let signature = goal.signature();
        if self.extensions.lookup(&signature).is_none() && !self.clause_db.defines(&signature) {
            warnings.push(Warning::UnknownPredicate(signature));
        }

        let mut variables = Vec::default();
        goal.collect_variables(&mut variables);

        let mut answers = Vec::default();

        match goal.polarity {
            true => {
                let (table, _) = resolver.call(goal)?;

                for row in resolver.answers(table) {
                    let mut bindings = Bindings::empty();
                    let matched = goal
                        .terms
                        .iter()
                        .zip(&row.terms)
                        .all(|(from, to)| unify_terms(&mut bindings, from, to));
                    if !matched {
                        continue;
                    }

                    let substitution = variables
                        .iter()
                        .map(|name| (name.clone(), bindings.resolve(&Term::Var(name.clone()))))
                        .collect();

                    answers.push(Answer {
                        literal: bindings.resolve_literal(goal),
                        bindings: substitution,
                        sentence: row.sentence.clone(),
                    });
                }
            }

            false => {
                if !goal.is_ground() {
                    return Err(err::ResolveError::UngroundedNegation(goal.clone()).into());
                }

                let counterpart = goal.negated();
                let (table, _) = resolver.call(&counterpart)?;

                let disjuncts = resolver
                    .answers(table)
                    .iter()
                    .map(|row| row.sentence.clone())
                    .collect::<Vec<_>>();
                let sentence = Sentence::Not(Box::new(Sentence::Or(disjuncts))).simplified();

                if sentence != Sentence::False {
                    answers.push(Answer {
                        literal: goal.clone(),
                        bindings: Vec::default(),
                        sentence,
                    });
                }
            }
        }

        self.counters.activations += resolver.activations();
        self.counters.answers += answers.len();
        log::info!(target: targets::RESOLVER, "{} answers to {goal}", answers.len());

        Ok(AnswerSet { answers, warnings })
    }
}
