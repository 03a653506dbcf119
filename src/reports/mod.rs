/*!
Reports from a query and the probability back-ends.
*/

use crate::structures::{
    literal::{Literal, Signature},
    sentence::Sentence,
    term::Term,
};

/// One answer to a query.
#[derive(Clone, Debug, PartialEq)]
pub struct Answer {
    /// The query literal, instantiated by the answer.
    pub literal: Literal,

    /// The answer substitution, one term per query variable, in occurrence order.
    pub bindings: Vec<(String, Term)>,

    /// The sentence under which the answer is derivable, canonical.
    pub sentence: Sentence,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// The answers to a query, in derivation order, with any warnings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerSet {
    /// The answers, in derivation order.
    pub answers: Vec<Answer>,

    /// Warnings gathered while answering.
    pub warnings: Vec<Warning>,
}

impl AnswerSet {
    /// The number of answers.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when there are no answers.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// An iterator over the answers, in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }
}

/// Conditions worth a note, though not worth abandoning a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// The query mentions a predicate with no clauses and no extension: its answer set is empty.
    UnknownPredicate(Signature),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPredicate(signature) => {
                write!(f, "unknown predicate {signature}")
            }
        }
    }
}

/// A Monte-Carlo estimate for one answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    /// The instantiated query literal.
    pub literal: Literal,

    /// The number of sampled worlds in which the answer's sentence held.
    pub hits: usize,

    /// The number of sampled worlds.
    pub samples: usize,
}

impl Estimate {
    /// The estimated probability, `hits/samples`.
    pub fn probability(&self) -> f64 {
        match self.samples {
            0 => 0.0,
            _ => self.hits as f64 / self.samples as f64,
        }
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {:.4}", self.literal, self.probability())
    }
}
