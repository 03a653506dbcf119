/*!
The algorithm for answering queries, factored into a collection of procedures.

- [unify] extends bindings through Robinson unification, occurs check enabled.
- [stratify] layers the predicates of a program so negation-as-failure is well-founded.
- [resolve] is the tabled SLDNF engine, producing answers annotated with sentences.
- [query] wraps resolution as the public contract of a context.
*/

pub mod query;
pub mod resolve;
pub mod stratify;
pub mod unify;
