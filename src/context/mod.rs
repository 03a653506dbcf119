/*!
The context --- to which programs are added and within which queries take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

# Example
```rust
# use judged::config::Config;
# use judged::context::Context;
let mut ctx = Context::from_config(Config::default());

ctx.ingest_str("parent(a, b). parent(b, c).").unwrap();
ctx.ingest_str("anc(X, Y) :- parent(X, Y).").unwrap();
ctx.ingest_str("anc(X, Y) :- parent(X, Z), anc(Z, Y).").unwrap();

let answers = ctx.query_str("anc(a, Y)?").unwrap();
assert_eq!(answers.len(), 2);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
