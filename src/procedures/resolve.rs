/*!
The tabled SLDNF engine.

# Overview

A query is answered top-down: the leftmost admissible body literal is resolved against the clauses whose head may unify with it, and each solved body instantiates the head as an answer annotated with the conjunction of the clause sentence and the sentences of the body subgoals.
Answers to the same tuple through different proofs collapse to one row by disjoining sentences.

Left recursion makes plain SLD diverge, so positive subgoals are resolved through tables keyed by the call pattern of the subgoal: signature plus the ground terms at bound argument positions.

- A table seen for the first time is driven by resolving its pattern against every matching clause, in declaration order, until a full pass adds no answer and widens no sentence.
- A table which is on the evaluation stack replays the answers found so far, and the consulting evaluation records how deep on the stack the table sits.
- A table which is off the stack but not complete is driven again; its answers may have been cut short by a cycle through an ancestor.
- A table whose evaluation never reached below its own frame on the stack is complete, and replays a frozen answer set from then on.

The deepest frame reached is threaded through evaluation as a link, in the manner of the minimal dependencies of a recursive search graph.
An evaluation inside a recursive component is re-driven by the fixpoint loop of the component's root, so every table an answer is read from is at its fixpoint once the root completes.

Sentences widen monotonically within the finite lattice of [canonical sentences](crate::structures::sentence) over the program's labels, which bounds the fixpoint on cyclic labelled programs.

# Negation

A negative body literal is selected only once its arguments are ground.
Its positive counterpart sits in a strictly lower stratum --- guaranteed by a valid [stratification](crate::procedures::stratify) --- and so evaluates to completion without touching the stack.
The negation then contributes `not (s₁ or … or sₙ)` over the answer sentences of the counterpart, simplified, and fails only when that sentence is `false`.
In particular a negation over answers with non-trivial sentences succeeds with a non-trivial sentence rather than failing outright.

# Resources

Tables live for the duration of a single query.
The count of answers across all tables is bounded by [answer_ceiling](crate::config::Config::answer_ceiling); programs outside the Datalog fragment may diverge, and hitting the ceiling aborts the query with a [resource error](crate::types::err::ErrorKind::ResourceExhausted) rather than looping.
*/

use std::collections::HashMap;

use crate::{
    db::{clause::ClauseDB, extension::ExtensionRegistry},
    misc::log::targets::{self},
    procedures::{
        stratify::Stratification,
        unify::{unify, unify_terms},
    },
    structures::{
        bindings::Bindings,
        clause::Clause,
        literal::{Literal, Signature},
        sentence::Sentence,
        term::Term,
    },
    types::err::{self, ErrorKind},
};

/// The index of a table in the forest of a query.
pub type TableIndex = usize;

/// A link to the deepest active frame an evaluation reached, or [NO_LINK].
type Link = usize;

/// The link of an evaluation which stayed within its own frame.
const NO_LINK: Link = usize::MAX;

/// A call pattern: the predicate of a call and its arguments with variables canonicalized.
///
/// Variables are numbered in occurrence order, so two calls which differ only in variable names share a table, while calls with distinct binding structure --- `p(X, X)` against `p(X, Y)`, or `p(f(X))` against `p(Y)` --- do not.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CallKey {
    symbol: String,
    pattern: Vec<Term>,
}

impl CallKey {
    fn of(literal: &Literal) -> Self {
        fn canonical(term: &Term, seen: &mut Vec<String>) -> Term {
            match term {
                Term::Var(name) => {
                    let index = match seen.iter().position(|known| known == name) {
                        Some(index) => index,
                        None => {
                            seen.push(name.clone());
                            seen.len() - 1
                        }
                    };
                    Term::Var(format!("_{index}"))
                }
                Term::Const(_) => term.clone(),
                Term::Compound(functor, terms) => Term::Compound(
                    functor.clone(),
                    terms.iter().map(|sub| canonical(sub, seen)).collect(),
                ),
            }
        }

        let mut seen = Vec::default();
        CallKey {
            symbol: literal.predicate.clone(),
            pattern: literal
                .terms
                .iter()
                .map(|term| canonical(term, &mut seen))
                .collect(),
        }
    }
}

/// An answer row of a table.
#[derive(Clone, Debug)]
pub struct AnswerRow {
    /// The call arguments, resolved under the answer.
    pub terms: Vec<Term>,

    /// The disjunction of the sentences of each proof found so far, canonical.
    pub sentence: Sentence,
}

/// A table for a call pattern.
#[derive(Debug)]
struct Table {
    /// The signature of the pattern.
    signature: Signature,

    /// Answers, in discovery order.
    answers: Vec<AnswerRow>,

    /// The answer set is frozen.
    complete: bool,

    /// The table is being evaluated, aka. has a frame on the stack.
    active: bool,
}

/// The state of one query: tables over a read-only knowledge base.
pub struct Resolver<'kb> {
    clause_db: &'kb ClauseDB,
    extensions: &'kb ExtensionRegistry,

    /// The stratification the query runs under.
    stratification: Stratification,

    /// Tables, in creation order.
    tables: Vec<Table>,

    /// Table lookup by call pattern.
    lookup: HashMap<CallKey, TableIndex>,

    /// Indices of the tables under evaluation, outermost first.
    stack: Vec<TableIndex>,

    /// A count of answers across all tables, against the ceiling.
    answer_count: usize,

    /// The ceiling on answers across all tables.
    answer_ceiling: usize,

    /// A count of clause activations, used to standardize apart.
    activations: usize,
}

impl<'kb> Resolver<'kb> {
    pub fn new(
        clause_db: &'kb ClauseDB,
        extensions: &'kb ExtensionRegistry,
        stratification: Stratification,
        answer_ceiling: usize,
    ) -> Self {
        Resolver {
            clause_db,
            extensions,
            stratification,
            tables: Vec::default(),
            lookup: HashMap::default(),
            stack: Vec::default(),
            answer_count: 0,
            answer_ceiling,
            activations: 0,
        }
    }

    /// The answers of a table.
    pub fn answers(&self, table: TableIndex) -> &[AnswerRow] {
        &self.tables[table].answers
    }

    /// A count of clause activations over the query.
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// The table for a positive literal, evaluated as far as the tabling discipline allows.
    ///
    /// Returns the table index and the link to the deepest active frame the call reached.
    pub fn call(&mut self, literal: &Literal) -> Result<(TableIndex, Link), ErrorKind> {
        let key = CallKey::of(literal);

        if let Some(&index) = self.lookup.get(&key) {
            if self.tables[index].complete {
                return Ok((index, NO_LINK));
            }

            if self.tables[index].active {
                let frame = self
                    .stack
                    .iter()
                    .position(|active| *active == index)
                    .expect("active table has a frame");
                log::trace!(target: targets::TABLES, "Cycle on {literal} at frame {frame}");
                return Ok((index, frame));
            }

            // Incomplete and inactive: cut short by a cycle, drive again.
            return self.evaluate(index, literal);
        }

        let index = self.tables.len();
        self.tables.push(Table {
            signature: literal.signature(),
            answers: Vec::default(),
            complete: false,
            active: false,
        });
        self.lookup.insert(key, index);
        log::debug!(target: targets::TABLES, "Table {index} for {literal}");
        self.evaluate(index, literal)
    }

    /// Drives a table to its local fixpoint.
    fn evaluate(
        &mut self,
        index: TableIndex,
        literal: &Literal,
    ) -> Result<(TableIndex, Link), ErrorKind> {
        self.tables[index].active = true;
        self.stack.push(index);
        let frame = self.stack.len() - 1;
        let mut link = NO_LINK;

        let signature = literal.signature();
        let provider = self.extensions.lookup(&signature);

        let result = 'fixpoint: loop {
            let mut changed = false;

            match &provider {
                Some(extension) => {
                    let candidates = match extension.resolve(literal, self.clause_db) {
                        Ok(candidates) => candidates,
                        Err(e) => break 'fixpoint Err(ErrorKind::from(e)),
                    };

                    for (terms, sentence) in candidates {
                        let mut bindings = Bindings::empty();
                        let matched = literal.terms.len() == terms.len()
                            && literal
                                .terms
                                .iter()
                                .zip(&terms)
                                .all(|(call, candidate)| unify_terms(&mut bindings, call, candidate));
                        if !matched {
                            continue;
                        }

                        let resolved = literal.terms.iter().map(|term| bindings.resolve(term)).collect();
                        match self.insert_answer(index, resolved, sentence) {
                            Ok(fresh) => changed |= fresh,
                            Err(e) => break 'fixpoint Err(e),
                        }
                    }
                }

                None => {
                    let clauses = self.clause_db.clauses_for(&signature).to_vec();
                    if clauses.is_empty() {
                        log::warn!(target: targets::RESOLVER, "No clauses for {signature}");
                    }

                    for clause in &clauses {
                        match self.expand(index, literal, clause, &mut link) {
                            Ok(fresh) => changed |= fresh,
                            Err(e) => break 'fixpoint Err(e),
                        }
                    }
                }
            }

            if !changed {
                break 'fixpoint Ok(());
            }
        };

        self.stack.pop();
        self.tables[index].active = false;
        result?;

        if link >= frame {
            self.tables[index].complete = true;
            log::debug!(
                target: targets::TABLES,
                "Table {index} complete with {} answers",
                self.tables[index].answers.len(),
            );
        }

        match link < frame {
            true => Ok((index, link)),
            false => Ok((index, NO_LINK)),
        }
    }

    /// Resolves one clause against the pattern of a table.
    /// Returns whether the table changed.
    fn expand(
        &mut self,
        index: TableIndex,
        call: &Literal,
        clause: &Clause,
        link: &mut Link,
    ) -> Result<bool, ErrorKind> {
        self.activations += 1;
        let activated = clause.renamed(self.activations);

        let Some(bindings) = unify(call, &activated.head, &Bindings::empty()) else {
            return Ok(false);
        };

        let mut solved = Vec::default();
        self.solve_body(&activated.body, bindings, Vec::default(), &mut solved, link)?;

        let mut changed = false;
        for (answer_bindings, parts) in solved {
            let mut conjuncts = Vec::with_capacity(parts.len() + 1);
            conjuncts.push(activated.sentence.clone());
            conjuncts.extend(parts);

            let sentence = Sentence::And(conjuncts).apply(&answer_bindings).simplified();
            if sentence == Sentence::False {
                continue;
            }

            let terms = call.terms.iter().map(|term| answer_bindings.resolve(term)).collect();
            changed |= self.insert_answer(index, terms, sentence)?;
        }

        Ok(changed)
    }

    /// Solves the remaining body literals under the given bindings, pushing each solution with the sentences of its subgoals.
    fn solve_body(
        &mut self,
        body: &[Literal],
        bindings: Bindings,
        parts: Vec<Sentence>,
        solved: &mut Vec<(Bindings, Vec<Sentence>)>,
        link: &mut Link,
    ) -> Result<(), ErrorKind> {
        if body.is_empty() {
            solved.push((bindings, parts));
            return Ok(());
        }

        // The leftmost literal which is positive, or negative with ground arguments.
        let selected = body
            .iter()
            .position(|literal| literal.polarity || bindings.resolve_literal(literal).is_ground());
        let Some(position) = selected else {
            let stuck = bindings.resolve_literal(&body[0]);
            return Err(err::ResolveError::UngroundedNegation(stuck).into());
        };

        let literal = bindings.resolve_literal(&body[position]);
        let mut rest = body.to_vec();
        rest.remove(position);

        match literal.polarity {
            true => {
                let (table, sub_link) = self.call(&literal)?;
                *link = (*link).min(sub_link);

                let rows = self.tables[table].answers.clone();
                for row in rows {
                    let mut extended = bindings.clone();
                    let matched = literal
                        .terms
                        .iter()
                        .zip(&row.terms)
                        .all(|(call, answer)| unify_terms(&mut extended, call, answer));
                    if !matched {
                        continue;
                    }

                    let mut sub_parts = parts.clone();
                    sub_parts.push(row.sentence);
                    self.solve_body(&rest, extended, sub_parts, solved, link)?;
                }
            }

            false => {
                let counterpart = literal.negated();

                // A valid stratification puts the counterpart strictly below the head under evaluation.
                let frame = self.stack.last().expect("! Negation outside an evaluation");
                assert!(
                    self.stratification.stratum(&counterpart.signature())
                        < self.stratification.stratum(&self.tables[*frame].signature),
                    "! Negation of {counterpart} within its own stratum",
                );

                let (table, sub_link) = self.call(&counterpart)?;
                *link = (*link).min(sub_link);
                assert!(
                    self.tables[table].complete,
                    "! Negation consulted an incomplete table",
                );

                let disjuncts = self.tables[table]
                    .answers
                    .iter()
                    .map(|row| row.sentence.clone())
                    .collect::<Vec<_>>();
                let sentence = Sentence::Not(Box::new(Sentence::Or(disjuncts))).simplified();

                if sentence == Sentence::False {
                    return Ok(());
                }

                let mut sub_parts = parts.clone();
                sub_parts.push(sentence);
                self.solve_body(&rest, bindings, sub_parts, solved, link)?;
            }
        }

        Ok(())
    }

    /// Inserts an answer, or widens the sentence of its row.
    /// Returns whether the table changed.
    fn insert_answer(
        &mut self,
        index: TableIndex,
        terms: Vec<Term>,
        sentence: Sentence,
    ) -> Result<bool, ErrorKind> {
        if sentence == Sentence::False {
            return Ok(false);
        }

        let table = &mut self.tables[index];
        match table.answers.iter_mut().find(|row| row.terms == terms) {
            Some(row) => {
                let widened = row.sentence.clone().disjoin(sentence);
                match widened == row.sentence {
                    true => Ok(false),
                    false => {
                        log::trace!(target: targets::TABLES, "Widened {:?} to {widened}", row.terms);
                        row.sentence = widened;
                        Ok(true)
                    }
                }
            }

            None => {
                self.answer_count += 1;
                if self.answer_count > self.answer_ceiling {
                    log::warn!(target: targets::RESOLVER, "Answer ceiling {} hit", self.answer_ceiling);
                    return Err(ErrorKind::ResourceExhausted(err::Resource::TableAnswers));
                }

                log::trace!(target: targets::TABLES, "Answer {terms:?} under {sentence}");
                table.answers.push(AnswerRow { terms, sentence });
                Ok(true)
            }
        }
    }
}
