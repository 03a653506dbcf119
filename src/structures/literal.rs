/*!
Literals, aka. a predicate applied to an ordered sequence of terms, with a polarity.

A negative literal in a clause body is interpreted as negation-as-failure, relative to a [stratification](crate::procedures::stratify).

The [Signature] of a literal is its predicate symbol together with its arity, and is the key by which the [clause database](crate::db::clause) indexes clauses.
*/

use crate::structures::term::Term;

/// A predicate symbol together with an arity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    /// The predicate symbol.
    pub symbol: String,

    /// The number of arguments.
    pub arity: usize,
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.symbol, self.arity)
    }
}

/// A predicate applied to terms, with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The predicate symbol.
    pub predicate: String,

    /// True for a positive literal, false for a negated literal.
    pub polarity: bool,

    /// The arguments, in order.
    pub terms: Vec<Term>,
}

impl Literal {
    /// A positive literal.
    pub fn positive(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            polarity: true,
            terms,
        }
    }

    /// A negated literal.
    pub fn negative(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            polarity: false,
            terms,
        }
    }

    /// The signature of the literal.
    pub fn signature(&self) -> Signature {
        Signature {
            symbol: self.predicate.clone(),
            arity: self.terms.len(),
        }
    }

    /// True when every argument is ground.
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(Term::is_ground)
    }

    /// Pushes each variable of the literal not already present in `out`, in occurrence order.
    pub fn collect_variables(&self, out: &mut Vec<String>) {
        for term in &self.terms {
            term.collect_variables(out);
        }
    }

    /// The literal with flipped polarity.
    pub fn negated(&self) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            polarity: !self.polarity,
            terms: self.terms.clone(),
        }
    }

    /// The literal with each variable suffixed by the given activation count.
    pub fn renamed(&self, activation: usize) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            polarity: self.polarity,
            terms: self.terms.iter().map(|term| term.renamed(activation)).collect(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.predicate)?;
        if !self.terms.is_empty() {
            write!(f, "(")?;
            for (index, term) in self.terms.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{term}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
