/*!
Clauses, aka. a head literal, a body of literals, and a descriptive sentence.

A clause with an empty body is a fact.
The head must be positive, and any variable occurring in a negative body literal must also occur in some positive body literal --- these invariants are checked when a clause reaches the context, see [check](Clause::check).

The descriptive sentence defaults to [True](crate::structures::sentence::Sentence::True): the clause is live in every world.
*/

use crate::{
    structures::{
        literal::Literal,
        sentence::Sentence,
    },
    types::err::{self},
};

/// A fact or rule, annotated with a sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// The head literal, always positive.
    pub head: Literal,

    /// The body, an ordered sequence of literals, empty for a fact.
    pub body: Vec<Literal>,

    /// The sentence under which the clause is live.
    pub sentence: Sentence,
}

impl Clause {
    /// A fact, live in every world.
    pub fn fact(head: Literal) -> Self {
        Self {
            head,
            body: Vec::default(),
            sentence: Sentence::True,
        }
    }

    /// A rule, live in every world.
    pub fn rule(head: Literal, body: Vec<Literal>) -> Self {
        Self {
            head,
            body,
            sentence: Sentence::True,
        }
    }

    /// The clause with the given sentence in place of its current sentence.
    pub fn with_sentence(mut self, sentence: Sentence) -> Self {
        self.sentence = sentence;
        self
    }

    /// True when the body is empty.
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// Checks the clause invariants: a positive head, and every variable of a negative body literal covered by some positive body literal.
    pub fn check(&self) -> Result<(), err::ClauseError> {
        if !self.head.polarity {
            return Err(err::ClauseError::NegativeHead);
        }

        let mut positive_variables = Vec::default();
        for literal in &self.body {
            if literal.polarity {
                literal.collect_variables(&mut positive_variables);
            }
        }

        for literal in &self.body {
            if literal.polarity {
                continue;
            }
            let mut negative_variables = Vec::default();
            literal.collect_variables(&mut negative_variables);
            for variable in negative_variables {
                if !positive_variables.contains(&variable) {
                    return Err(err::ClauseError::Unsafe(variable));
                }
            }
        }

        Ok(())
    }

    /// The clause standardized apart with the given activation count.
    ///
    /// Every variable of the head, body, and sentence is renamed; the resolver must never leak one activation's variables into another.
    pub fn renamed(&self, activation: usize) -> Clause {
        Clause {
            head: self.head.renamed(activation),
            body: self.body.iter().map(|literal| literal.renamed(activation)).collect(),
            sentence: self.sentence.renamed(activation),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.head)?;
        if !self.body.is_empty() {
            write!(f, " :- ")?;
            for (index, literal) in self.body.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{literal}")?;
            }
        }
        if self.sentence != Sentence::True {
            write!(f, " [{}]", self.sentence)?;
        }
        write!(f, ".")
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::term::Term;

    #[test]
    fn safety() {
        let safe = Clause::rule(
            Literal::positive("q", vec![Term::Var("X".to_owned())]),
            vec![
                Literal::positive("p", vec![Term::Var("X".to_owned())]),
                Literal::negative("r", vec![Term::Var("X".to_owned())]),
            ],
        );
        assert!(safe.check().is_ok());

        let unsafe_clause = Clause::rule(
            Literal::positive("q", vec![Term::Var("X".to_owned())]),
            vec![Literal::negative("r", vec![Term::Var("X".to_owned())])],
        );
        assert_eq!(
            unsafe_clause.check(),
            Err(err::ClauseError::Unsafe("X".to_owned()))
        );
    }

    #[test]
    fn standardized_apart() {
        let clause = Clause::rule(
            Literal::positive("p", vec![Term::Var("X".to_owned())]),
            vec![Literal::positive("q", vec![Term::Var("X".to_owned())])],
        );
        let renamed = clause.renamed(3);
        assert_eq!(renamed.head.terms, vec![Term::Var("X#3".to_owned())]);
        assert_eq!(renamed.body[0].terms, vec![Term::Var("X#3".to_owned())]);
    }
}
