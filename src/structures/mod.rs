/*!
The abstract elements of a program and their representation.

- [Terms](term) are the first-order vocabulary: variables, constants, and compounds.
- [Literals](literal) apply a predicate to terms, with a polarity.
- [Clauses](clause) pair a head literal with a body and a descriptive [sentence](sentence).
- [Sentences](sentence) are propositional formulas over `partition=value` labels, evaluated in [worlds](world).
- [Bindings](bindings) map variables to terms, and are extended through unification.
*/

pub mod bindings;
pub mod clause;
pub mod literal;
pub mod sentence;
pub mod term;
pub mod world;
