/*!
Sentences, aka. propositional formulas over `partition=value` labels.

A sentence describes the worlds in which a clause is live.
Two labels over the same partition with different values are mutually exclusive, as a [world](crate::structures::world) maps each partition to exactly one value.

The connectives are n-ary internally.
Binary composition happens through [conjoin](Sentence::conjoin), [disjoin](Sentence::disjoin), and [negate](Sentence::negate), each of which [simplifies](Sentence::simplified) the result.
The contract on simplification is semantic equivalence under world evaluation, not any particular structure; see [simplify] for the canonical form used.
*/

mod simplify;

use crate::structures::{bindings::Bindings, term::Term, world::World};

/// A `partition=value` label.
///
/// Both sides are terms; in the knowledge base labels are ground, though labels inside a generator body may mention guard variables until the generator is expanded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    /// The partition, a discrete random variable.
    pub partition: Term,

    /// The value the partition is required to take.
    pub value: Term,
}

impl Label {
    pub fn new(partition: Term, value: Term) -> Self {
        Self { partition, value }
    }

    /// True when both sides are ground.
    pub fn is_ground(&self) -> bool {
        self.partition.is_ground() && self.value.is_ground()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.partition, self.value)
    }
}

/// A propositional formula over labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentence {
    /// Holds in every world.
    True,

    /// Holds in no world.
    False,

    /// Holds in the worlds which map the label's partition to the label's value.
    Lit(Label),

    /// Holds when every conjunct holds.
    And(Vec<Sentence>),

    /// Holds when some disjunct holds.
    Or(Vec<Sentence>),

    /// Holds when the negated sentence does not hold.
    Not(Box<Sentence>),
}

impl Sentence {
    /// The conjunction of two sentences, simplified.
    pub fn conjoin(self, other: Sentence) -> Sentence {
        Sentence::And(vec![self, other]).simplified()
    }

    /// The disjunction of two sentences, simplified.
    pub fn disjoin(self, other: Sentence) -> Sentence {
        Sentence::Or(vec![self, other]).simplified()
    }

    /// The negation of the sentence, simplified.
    pub fn negate(self) -> Sentence {
        Sentence::Not(Box::new(self)).simplified()
    }

    /// A semantically equivalent sentence in the canonical form described in [simplify].
    pub fn simplified(&self) -> Sentence {
        simplify::simplify(self)
    }

    /// Whether the sentence holds in the given world.
    ///
    /// A label over a partition the world does not assign holds in no world; the probability back-ends rule this case out before evaluation.
    pub fn holds_in(&self, world: &World) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Lit(label) => world.value_of(&label.partition) == Some(&label.value),
            Self::And(conjuncts) => conjuncts.iter().all(|s| s.holds_in(world)),
            Self::Or(disjuncts) => disjuncts.iter().any(|s| s.holds_in(world)),
            Self::Not(inner) => !inner.holds_in(world),
        }
    }

    /// Pushes each label of the sentence not already present in `out`.
    pub fn collect_labels(&self, out: &mut Vec<Label>) {
        match self {
            Self::True | Self::False => {}
            Self::Lit(label) => {
                if !out.contains(label) {
                    out.push(label.clone());
                }
            }
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_labels(out);
                }
            }
            Self::Not(inner) => inner.collect_labels(out),
        }
    }

    /// The sentence with the bindings applied to each label.
    pub fn apply(&self, bindings: &Bindings) -> Sentence {
        match self {
            Self::True => Self::True,
            Self::False => Self::False,
            Self::Lit(label) => Self::Lit(Label {
                partition: bindings.resolve(&label.partition),
                value: bindings.resolve(&label.value),
            }),
            Self::And(children) => {
                Self::And(children.iter().map(|child| child.apply(bindings)).collect())
            }
            Self::Or(children) => {
                Self::Or(children.iter().map(|child| child.apply(bindings)).collect())
            }
            Self::Not(inner) => Self::Not(Box::new(inner.apply(bindings))),
        }
    }

    /// The sentence with each variable in a label suffixed by the given activation count.
    pub fn renamed(&self, activation: usize) -> Sentence {
        match self {
            Self::True => Self::True,
            Self::False => Self::False,
            Self::Lit(label) => Self::Lit(Label {
                partition: label.partition.renamed(activation),
                value: label.value.renamed(activation),
            }),
            Self::And(children) => {
                Self::And(children.iter().map(|child| child.renamed(activation)).collect())
            }
            Self::Or(children) => {
                Self::Or(children.iter().map(|child| child.renamed(activation)).collect())
            }
            Self::Not(inner) => Self::Not(Box::new(inner.renamed(activation))),
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Lit(label) => write!(f, "{label}"),
            Self::And(conjuncts) => {
                write!(f, "(")?;
                for (index, conjunct) in conjuncts.iter().enumerate() {
                    if index > 0 {
                        write!(f, " and ")?;
                    }
                    write!(f, "{conjunct}")?;
                }
                write!(f, ")")
            }
            Self::Or(disjuncts) => {
                write!(f, "(")?;
                for (index, disjunct) in disjuncts.iter().enumerate() {
                    if index > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{disjunct}")?;
                }
                write!(f, ")")
            }
            Self::Not(inner) => write!(f, "not {inner}"),
        }
    }
}
