/*!
The databases of a context.

- The [clause database](clause) holds the program, indexed by signature.
- The [label database](label) holds the partitions, their declared values, and their probabilities.
- The [extension registry](extension) holds providers of predicates computed on demand.

Fields of the databases are private to ensure the use of methods which may be needed to uphold invariants.
*/

pub mod clause;
pub mod extension;
pub mod label;
