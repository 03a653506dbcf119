/*!
A database of partitions, their declared values, and their probabilities.

A partition is declared by the first label which mentions it, whether in a clause sentence or a probability annotation, and its values accumulate in declaration order.
`@uniform` freezes the distribution from the values declared at that moment; later value declarations do not re-normalize.

For each partition the declared probabilities must sum to one.
The loader signals a violation through [validate](LabelDB::validate); the core trusts the invariant.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{sentence::Label, term::Term, world::World},
    types::err::{self},
};

/// A partition: declared values in declaration order, with their probabilities.
#[derive(Debug, Default)]
struct Partition {
    values: Vec<Term>,
    probabilities: HashMap<Term, f64>,
}

/// A database of partitions and probabilities.
#[derive(Debug, Default)]
pub struct LabelDB {
    /// The partitions, keyed by their (ground) partition term.
    partitions: HashMap<Term, Partition>,

    /// Partition terms, in order of first declaration.
    order: Vec<Term>,
}

impl LabelDB {
    fn partition_mut(&mut self, partition: &Term) -> &mut Partition {
        if !self.partitions.contains_key(partition) {
            self.order.push(partition.clone());
        }
        self.partitions.entry(partition.clone()).or_default()
    }

    /// Declares the partition and value of a label, without assigning a probability.
    pub fn note_label(&mut self, label: &Label) {
        let partition = self.partition_mut(&label.partition);
        if !partition.values.contains(&label.value) {
            partition.values.push(label.value.clone());
        }
    }

    /// Assigns a probability to a label, declaring its partition and value as needed.
    pub fn set_probability(&mut self, label: &Label, probability: f64) {
        log::debug!(target: targets::LABEL_DB, "P({label}) = {probability}");
        self.note_label(label);
        let partition = self.partition_mut(&label.partition);
        partition.probabilities.insert(label.value.clone(), probability);
    }

    /// Assigns `1/k` to each of the `k` currently declared values of the partition.
    pub fn set_uniform(&mut self, partition: &Term) -> Result<(), err::LabelDBError> {
        let Some(entry) = self.partitions.get_mut(partition) else {
            return Err(err::LabelDBError::EmptyPartition(partition.to_string()));
        };
        if entry.values.is_empty() {
            return Err(err::LabelDBError::EmptyPartition(partition.to_string()));
        }

        let share = 1.0 / entry.values.len() as f64;
        log::debug!(target: targets::LABEL_DB, "P({partition}=…) = {share} over {} values", entry.values.len());
        for value in &entry.values {
            entry.probabilities.insert(value.clone(), share);
        }
        Ok(())
    }

    /// The probability assigned to a label, if any.
    pub fn probability(&self, label: &Label) -> Option<f64> {
        self.partitions
            .get(&label.partition)?
            .probabilities
            .get(&label.value)
            .copied()
    }

    /// True when the partition of the label has at least one assigned probability.
    pub fn randomized(&self, partition: &Term) -> bool {
        self.partitions
            .get(partition)
            .is_some_and(|entry| !entry.probabilities.is_empty())
    }

    /// The first of the given labels whose partition has no assigned probabilities, if any.
    pub fn missing_probability<'a>(&self, labels: &'a [Label]) -> Option<&'a Label> {
        labels.iter().find(|label| !self.randomized(&label.partition))
    }

    /// Checks that for each randomized partition the probabilities sum to one.
    pub fn validate(&self) -> Result<(), err::LabelDBError> {
        const TOLERANCE: f64 = 1e-9;

        for partition in &self.order {
            let entry = &self.partitions[partition];
            if entry.probabilities.is_empty() {
                continue;
            }
            let sum: f64 = entry
                .values
                .iter()
                .filter_map(|value| entry.probabilities.get(value))
                .sum();
            if (sum - 1.0).abs() > TOLERANCE {
                return Err(err::LabelDBError::UnbalancedPartition(
                    partition.to_string(),
                    sum,
                ));
            }
        }
        Ok(())
    }

    /// Draws a world: one value for each randomized partition, in declaration order, according to the declared distribution.
    pub fn sample_world<R: rand::Rng>(&self, rng: &mut R) -> World {
        let mut world = World::default();

        for partition in &self.order {
            let entry = &self.partitions[partition];
            if entry.probabilities.is_empty() {
                continue;
            }

            let draw: f64 = rng.gen();
            let mut cumulative = 0.0;
            let mut drawn: Option<&Term> = None;
            for value in &entry.values {
                let Some(probability) = entry.probabilities.get(value) else {
                    continue;
                };
                cumulative += probability;
                drawn = Some(value);
                if draw < cumulative {
                    break;
                }
            }

            if let Some(value) = drawn {
                world.assign(partition.clone(), value.clone());
            }
        }

        world
    }
}

#[cfg(test)]
mod label_tests {
    use super::*;

    fn label(partition: &str, value: &str) -> Label {
        Label::new(Term::Const(partition.to_owned()), Term::Const(value.to_owned()))
    }

    #[test]
    fn uniform_freezes_at_declaration() {
        let mut db = LabelDB::default();
        db.note_label(&label("c", "h"));
        db.note_label(&label("c", "t"));
        assert!(db.set_uniform(&Term::Const("c".to_owned())).is_ok());

        // A later value does not re-normalize the earlier shares.
        db.note_label(&label("c", "e"));
        assert_eq!(db.probability(&label("c", "h")), Some(0.5));
        assert_eq!(db.probability(&label("c", "t")), Some(0.5));
        assert_eq!(db.probability(&label("c", "e")), None);
    }

    #[test]
    fn uniform_requires_values() {
        let mut db = LabelDB::default();
        assert!(db.set_uniform(&Term::Const("c".to_owned())).is_err());
    }

    #[test]
    fn validation() {
        let mut db = LabelDB::default();
        db.set_probability(&label("x", "1"), 0.5);
        assert!(db.validate().is_err());
        db.set_probability(&label("x", "2"), 0.5);
        assert!(db.validate().is_ok());
    }
}
