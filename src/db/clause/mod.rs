/*!
A database of clauses, indexed by the signature of the head.

Clauses are kept in declaration order, and lookup by signature is a coarse filter: the [resolver](crate::procedures::resolve) performs the actual unification against each candidate head.

The database is mutated only between queries; the resolver treats it as read-only for the duration of a query.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Signature},
};

/// A database of clauses.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Clauses, keyed by the signature of their head, in declaration order.
    clauses: HashMap<Signature, Vec<Clause>>,

    /// Signatures, in order of first assertion.
    signatures: Vec<Signature>,
}

impl ClauseDB {
    /// Appends a clause to the list for its head's signature.
    pub fn assert(&mut self, clause: Clause) {
        let signature = clause.head.signature();
        log::debug!(target: targets::CLAUSE_DB, "Assert {clause}");

        match self.clauses.get_mut(&signature) {
            Some(list) => list.push(clause),
            None => {
                self.signatures.push(signature.clone());
                self.clauses.insert(signature, vec![clause]);
            }
        }
    }

    /// Removes the first structurally equal clause, if any.
    /// Returns whether a clause was removed.
    pub fn retract(&mut self, clause: &Clause) -> bool {
        let signature = clause.head.signature();
        let Some(list) = self.clauses.get_mut(&signature) else {
            log::debug!(target: targets::CLAUSE_DB, "Retract missed {clause}");
            return false;
        };

        match list.iter().position(|candidate| candidate == clause) {
            Some(index) => {
                list.remove(index);
                log::debug!(target: targets::CLAUSE_DB, "Retract {clause}");
                true
            }
            None => {
                log::debug!(target: targets::CLAUSE_DB, "Retract missed {clause}");
                false
            }
        }
    }

    /// The clauses whose head might unify with a literal of the given signature, in declaration order.
    pub fn clauses_for(&self, signature: &Signature) -> &[Clause] {
        match self.clauses.get(signature) {
            Some(list) => list,
            None => &[],
        }
    }

    /// True when some clause is stored for the signature.
    pub fn defines(&self, signature: &Signature) -> bool {
        self.clauses.get(signature).is_some_and(|list| !list.is_empty())
    }

    /// The signatures of the database, in order of first assertion.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }

    /// An iterator over every stored clause, signature by signature.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.signatures
            .iter()
            .filter_map(|signature| self.clauses.get(signature))
            .flat_map(|list| list.iter())
    }

    /// True when some clause has a negative body literal.
    pub fn has_negation(&self) -> bool {
        self.clauses()
            .any(|clause| clause.body.iter().any(|literal| !literal.polarity))
    }

    /// A count of all stored clauses.
    pub fn clause_count(&self) -> usize {
        self.signatures
            .iter()
            .filter_map(|signature| self.clauses.get(signature))
            .map(|list| list.len())
            .sum()
    }
}
