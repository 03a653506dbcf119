/*!
Bindings from variables to terms.

A binding set is the representation of a substitution.
Extension happens through [unification](crate::procedures::unify), and application is recursive with no in-place mutation of the bound terms.

Chains of variable bindings may arise during unification (X bound to Y, Y bound to a).
[walk](Bindings::walk) follows such a chain one level deep, [resolve](Bindings::resolve) applies the bindings throughout a term.
*/

use std::collections::HashMap;

use crate::structures::{literal::Literal, term::Term};

/// A set of bindings from variables to terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    map: HashMap<String, Term>,
}

impl Bindings {
    /// A binding set which binds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The term bound to the given variable, if any.
    pub fn get(&self, variable: &str) -> Option<&Term> {
        self.map.get(variable)
    }

    /// Binds a variable to a term.
    ///
    /// The caller is responsible for the occurs check; see [unify](crate::procedures::unify).
    pub fn bind(&mut self, variable: String, term: Term) {
        self.map.insert(variable, term);
    }

    /// The number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Follows a chain of variable bindings from the given term, without descending into compounds.
    pub fn walk<'t>(&'t self, term: &'t Term) -> &'t Term {
        let mut current = term;
        while let Term::Var(name) = current {
            match self.map.get(name) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// The term with the bindings applied throughout.
    pub fn resolve(&self, term: &Term) -> Term {
        let walked = self.walk(term);
        match walked {
            Term::Var(_) | Term::Const(_) => walked.clone(),
            Term::Compound(functor, terms) => Term::Compound(
                functor.clone(),
                terms.iter().map(|sub| self.resolve(sub)).collect(),
            ),
        }
    }

    /// The literal with the bindings applied to each argument.
    pub fn resolve_literal(&self, literal: &Literal) -> Literal {
        Literal {
            predicate: literal.predicate.clone(),
            polarity: literal.polarity,
            terms: literal.terms.iter().map(|term| self.resolve(term)).collect(),
        }
    }
}
