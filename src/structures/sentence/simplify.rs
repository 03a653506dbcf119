/*!
Canonicalization of sentences.

A sentence is rewritten to a disjunction of products, where a product is a conjunction of labels and negated labels, stored as a positive map and a negative set (a label and its negation in one product is a contradiction).

During the rewrite:
- A product which maps one partition to two values is dropped (partition exclusivity).
- A negated label whose partition is positively mapped to a different value is redundant, and dropped from the product.
- A product which extends another product of the disjunction is absorbed by it.
- Products and their members are kept in the derived term order, and deduplicated.

The rewrite is sound --- each step preserves the set of worlds in which the sentence holds --- and the canonical sentences over a finite label vocabulary are finitely many, which is what bounds the sentence fixpoint of the [resolver](crate::procedures::resolve) on cyclic programs.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::structures::{
    sentence::{Label, Sentence},
    term::Term,
};

/// A conjunction of labels and negated labels.
///
/// `pos` maps a partition to its required value, `neg` holds the labels required to not obtain.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Product {
    pos: BTreeMap<Term, Term>,
    neg: BTreeSet<Label>,
}

impl Product {
    /// Extends the product with a positive label, or None on contradiction.
    fn with_pos(mut self, label: &Label) -> Option<Product> {
        if let Some(value) = self.pos.get(&label.partition) {
            if *value != label.value {
                return None;
            }
        }
        if self.neg.contains(label) {
            return None;
        }
        self.pos.insert(label.partition.clone(), label.value.clone());

        // A negated label over the same partition is now either contradictory or redundant.
        self.neg.retain(|negated| negated.partition != label.partition);
        Some(self)
    }

    /// Extends the product with a negated label, or None on contradiction.
    fn with_neg(mut self, label: &Label) -> Option<Product> {
        match self.pos.get(&label.partition) {
            Some(value) if *value == label.value => None,
            Some(_) => Some(self),
            None => {
                self.neg.insert(label.clone());
                Some(self)
            }
        }
    }

    /// Merges another product into the product, or None on contradiction.
    fn merge(self, other: &Product) -> Option<Product> {
        let mut merged = self;
        for (partition, value) in &other.pos {
            merged = merged.with_pos(&Label::new(partition.clone(), value.clone()))?;
        }
        for label in &other.neg {
            merged = merged.with_neg(label)?;
        }
        Some(merged)
    }

    /// True when every label of the product occurs in the other product.
    fn generalizes(&self, other: &Product) -> bool {
        self.pos
            .iter()
            .all(|(partition, value)| other.pos.get(partition) == Some(value))
            && self.neg.is_subset(&other.neg)
    }

    fn into_sentence(self) -> Sentence {
        let mut members = Vec::with_capacity(self.pos.len() + self.neg.len());
        for (partition, value) in self.pos {
            members.push(Sentence::Lit(Label::new(partition, value)));
        }
        for label in self.neg {
            members.push(Sentence::Not(Box::new(Sentence::Lit(label))));
        }
        members.sort();

        match members.len() {
            0 => Sentence::True,
            1 => members.swap_remove(0),
            _ => Sentence::And(members),
        }
    }
}

/// The products of the sentence, before absorption.
fn products(sentence: &Sentence) -> Vec<Product> {
    match sentence {
        Sentence::True => vec![Product::default()],

        Sentence::False => vec![],

        Sentence::Lit(label) => match Product::default().with_pos(label) {
            Some(product) => vec![product],
            None => vec![],
        },

        Sentence::And(conjuncts) => {
            let mut accumulated = vec![Product::default()];
            for conjunct in conjuncts {
                let right = products(conjunct);
                let mut crossed = Vec::with_capacity(accumulated.len() * right.len());
                for left in &accumulated {
                    for product in &right {
                        if let Some(merged) = left.clone().merge(product) {
                            crossed.push(merged);
                        }
                    }
                }
                accumulated = crossed;
                if accumulated.is_empty() {
                    break;
                }
            }
            accumulated
        }

        Sentence::Or(disjuncts) => {
            let mut accumulated = Vec::default();
            for disjunct in disjuncts {
                accumulated.append(&mut products(disjunct));
            }
            accumulated
        }

        Sentence::Not(inner) => complement(&products(inner)),
    }
}

/// The products of the negation of a disjunction of products, by De Morgan and distribution.
fn complement(disjunction: &[Product]) -> Vec<Product> {
    let mut accumulated = vec![Product::default()];

    for product in disjunction {
        // The negation of a product is the disjunction of its negated members.
        let mut negated_members = Vec::with_capacity(product.pos.len() + product.neg.len());
        for (partition, value) in &product.pos {
            if let Some(member) =
                Product::default().with_neg(&Label::new(partition.clone(), value.clone()))
            {
                negated_members.push(member);
            }
        }
        for label in &product.neg {
            if let Some(member) = Product::default().with_pos(label) {
                negated_members.push(member);
            }
        }

        let mut crossed = Vec::with_capacity(accumulated.len() * negated_members.len());
        for left in &accumulated {
            for member in &negated_members {
                if let Some(merged) = left.clone().merge(member) {
                    crossed.push(merged);
                }
            }
        }
        accumulated = crossed;
        if accumulated.is_empty() {
            break;
        }
    }

    accumulated
}

/// Sorts, deduplicates, and absorbs extensions of weaker products.
fn absorb(mut disjunction: Vec<Product>) -> Vec<Product> {
    disjunction.sort();
    disjunction.dedup();

    let mut kept: Vec<Product> = Vec::with_capacity(disjunction.len());
    'product_loop: for product in disjunction {
        for other in &kept {
            if other.generalizes(&product) {
                continue 'product_loop;
            }
        }
        kept.retain(|other| !product.generalizes(other));
        kept.push(product);
    }
    kept.sort();
    kept
}

/// A semantically equivalent sentence in canonical form.
pub fn simplify(sentence: &Sentence) -> Sentence {
    let mut disjunction = absorb(products(sentence))
        .into_iter()
        .map(Product::into_sentence)
        .collect::<Vec<_>>();

    match disjunction.len() {
        0 => Sentence::False,
        1 => disjunction.swap_remove(0),
        _ => Sentence::Or(disjunction),
    }
}

#[cfg(test)]
mod simplify_tests {
    use super::*;
    use crate::structures::world::World;

    fn lit(partition: &str, value: &str) -> Sentence {
        Sentence::Lit(Label::new(
            Term::Const(partition.to_owned()),
            Term::Const(value.to_owned()),
        ))
    }

    #[test]
    fn units() {
        let x1 = lit("x", "1");

        assert_eq!(Sentence::True.conjoin(x1.clone()), x1);
        assert_eq!(Sentence::False.conjoin(x1.clone()), Sentence::False);
        assert_eq!(Sentence::False.disjoin(x1.clone()), x1);
        assert_eq!(Sentence::True.disjoin(x1.clone()), Sentence::True);
        assert_eq!(Sentence::True.negate(), Sentence::False);
        assert_eq!(Sentence::False.negate(), Sentence::True);
    }

    #[test]
    fn double_negation() {
        let x1 = lit("x", "1");
        assert_eq!(x1.clone().negate().negate(), x1);
    }

    #[test]
    fn partition_exclusivity() {
        let conflict = lit("x", "1").conjoin(lit("x", "2"));
        assert_eq!(conflict, Sentence::False);

        let distinct = lit("x", "1").conjoin(lit("y", "2"));
        assert!(matches!(distinct, Sentence::And(_)));
    }

    #[test]
    fn absorption() {
        let weaker = lit("x", "1");
        let stronger = lit("x", "1").conjoin(lit("y", "1"));
        assert_eq!(stronger.disjoin(weaker.clone()), weaker);
    }

    #[test]
    fn idempotent_disjunction() {
        let x1 = lit("x", "1");
        assert_eq!(x1.clone().disjoin(x1.clone()), x1);
    }

    #[test]
    fn redundant_negation_dropped() {
        // x=1 and not x=2 holds exactly when x=1 holds.
        let s = lit("x", "1").conjoin(lit("x", "2").negate());
        assert_eq!(s, lit("x", "1"));
    }

    #[test]
    fn de_morgan_equivalence() {
        let original = Sentence::Not(Box::new(Sentence::And(vec![lit("x", "1"), lit("y", "1")])));
        let simplified = original.simplified();

        // Equivalence checked over every world on two binary partitions.
        for x in ["1", "2"] {
            for y in ["1", "2"] {
                let mut world = World::default();
                world.assign(Term::Const("x".to_owned()), Term::Const(x.to_owned()));
                world.assign(Term::Const("y".to_owned()), Term::Const(y.to_owned()));
                assert_eq!(original.holds_in(&world), simplified.holds_in(&world));
            }
        }
    }
}
