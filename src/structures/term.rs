/*!
Terms, the first-order vocabulary of a program.

A term is a variable, a constant, or a compound of a functor applied to terms.
Equality is structural, and the derived order is used wherever a canonical order over terms is needed (notably by the [sentence simplifier](crate::structures::sentence)).

Variables introduced by standardizing a clause apart are suffixed with `#` and the activation count.
The surface syntax does not permit `#` in identifiers, so renamed variables never collide with source variables.
*/

/// A first-order term.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A variable, identified by name.
    Var(String),

    /// A constant, numeric or symbolic, always opaque.
    Const(String),

    /// A functor applied to an ordered sequence of terms.
    Compound(String, Vec<Term>),
}

impl Term {
    /// True when no variable occurs in the term.
    pub fn is_ground(&self) -> bool {
        match self {
            Self::Var(_) => false,
            Self::Const(_) => true,
            Self::Compound(_, terms) => terms.iter().all(Term::is_ground),
        }
    }

    /// Pushes each variable of the term not already present in `out`, in occurrence order.
    pub fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Self::Var(name) => {
                if !out.iter().any(|present| present == name) {
                    out.push(name.clone());
                }
            }
            Self::Const(_) => {}
            Self::Compound(_, terms) => {
                for term in terms {
                    term.collect_variables(out);
                }
            }
        }
    }

    /// The term with each variable suffixed by the given activation count.
    pub fn renamed(&self, activation: usize) -> Term {
        match self {
            Self::Var(name) => Self::Var(format!("{name}#{activation}")),
            Self::Const(_) => self.clone(),
            Self::Compound(functor, terms) => Self::Compound(
                functor.clone(),
                terms.iter().map(|term| term.renamed(activation)).collect(),
            ),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{name}"),
            Self::Const(name) => write!(f, "{name}"),
            Self::Compound(functor, terms) => {
                write!(f, "{functor}(")?;
                for (index, term) in terms.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{term}")?;
                }
                write!(f, ")")
            }
        }
    }
}
