/*!
Robinson unification over bindings, occurs check enabled.

Unification extends a binding set rather than mutating terms.
A variable bound to a term containing that variable would make application loop, so the occurs check is never skipped.
*/

use crate::structures::{bindings::Bindings, literal::Literal, term::Term};

/// Whether the variable occurs in the term, under the bindings.
fn occurs(bindings: &Bindings, variable: &str, term: &Term) -> bool {
    match bindings.walk(term) {
        Term::Var(name) => name == variable,
        Term::Const(_) => false,
        Term::Compound(_, terms) => terms.iter().any(|sub| occurs(bindings, variable, sub)),
    }
}

/// Extends the bindings to make two terms equal, if possible.
/// Returns false, and may leave partial extensions, otherwise.
pub fn unify_terms(bindings: &mut Bindings, left: &Term, right: &Term) -> bool {
    let left = bindings.walk(left).clone();
    let right = bindings.walk(right).clone();

    match (&left, &right) {
        (Term::Var(l), Term::Var(r)) if l == r => true,

        (Term::Var(name), term) | (term, Term::Var(name)) => {
            if occurs(bindings, name, term) {
                return false;
            }
            bindings.bind(name.clone(), term.clone());
            true
        }

        (Term::Const(l), Term::Const(r)) => l == r,

        (Term::Compound(l, ls), Term::Compound(r, rs)) => {
            l == r
                && ls.len() == rs.len()
                && ls.iter().zip(rs).all(|(a, b)| unify_terms(bindings, a, b))
        }

        _ => false,
    }
}

/// The most general extension of the given bindings unifying two literals of equal predicate and arity, if one exists.
pub fn unify(left: &Literal, right: &Literal, base: &Bindings) -> Option<Bindings> {
    if left.predicate != right.predicate || left.terms.len() != right.terms.len() {
        return None;
    }

    let mut extended = base.clone();
    for (l, r) in left.terms.iter().zip(&right.terms) {
        if !unify_terms(&mut extended, l, r) {
            return None;
        }
    }
    Some(extended)
}

#[cfg(test)]
mod unify_tests {
    use super::*;

    fn var(name: &str) -> Term {
        Term::Var(name.to_owned())
    }

    fn constant(name: &str) -> Term {
        Term::Const(name.to_owned())
    }

    #[test]
    fn bind_and_resolve() {
        let left = Literal::positive("p", vec![var("X"), constant("b")]);
        let right = Literal::positive("p", vec![constant("a"), var("Y")]);

        let bindings = unify(&left, &right, &Bindings::empty()).expect("unifiable");
        assert_eq!(bindings.resolve(&var("X")), constant("a"));
        assert_eq!(bindings.resolve(&var("Y")), constant("b"));
    }

    #[test]
    fn clash() {
        let left = Literal::positive("p", vec![constant("a")]);
        let right = Literal::positive("p", vec![constant("b")]);
        assert!(unify(&left, &right, &Bindings::empty()).is_none());
    }

    #[test]
    fn chained_variables() {
        let mut bindings = Bindings::empty();
        assert!(unify_terms(&mut bindings, &var("X"), &var("Y")));
        assert!(unify_terms(&mut bindings, &var("Y"), &constant("a")));
        assert_eq!(bindings.resolve(&var("X")), constant("a"));
    }

    #[test]
    fn occurs_check() {
        let mut bindings = Bindings::empty();
        let looping = Term::Compound("f".to_owned(), vec![var("X")]);
        assert!(!unify_terms(&mut bindings, &var("X"), &looping));
    }

    #[test]
    fn compound_structure() {
        let left = Literal::positive("p", vec![Term::Compound("f".to_owned(), vec![var("X"), constant("b")])]);
        let right = Literal::positive("p", vec![Term::Compound("f".to_owned(), vec![constant("a"), var("Y")])]);

        let bindings = unify(&left, &right, &Bindings::empty()).expect("unifiable");
        assert_eq!(bindings.resolve(&var("X")), constant("a"));
        assert_eq!(bindings.resolve(&var("Y")), constant("b"));
    }
}
