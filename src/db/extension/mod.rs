/*!
Extensions, aka. providers of predicates computed on demand.

An extension declares a name and the signatures it provides.
When resolver lookup for a signature hits the registry, the extension is invoked with a partially bound literal and a knowledge-base snapshot, and yields candidate argument tuples paired with sentences (commonly [True](crate::structures::sentence::Sentence::True)).

Extensions must be pure for a given snapshot and may not mutate the knowledge base; the resolver checks the registry before the clause store.

The context holds a catalog of loadable extensions, activated by `@use`; see [builtin_catalog].
*/

use std::{collections::HashMap, rc::Rc};

use crate::{
    db::clause::ClauseDB,
    structures::{
        literal::{Literal, Signature},
        sentence::Sentence,
        term::Term,
    },
    types::err::{self},
};

/// A provider of one or more predicates computed on demand.
pub trait Extension {
    /// The name under which the extension is cataloged.
    fn name(&self) -> &str;

    /// The signatures the extension provides.
    fn provides(&self) -> Vec<Signature>;

    /// Candidate argument tuples for a partially bound literal, each paired with a sentence.
    ///
    /// The resolver unifies each returned tuple against the call, so a tuple which does not match is wasted rather than wrong.
    fn resolve(
        &self,
        literal: &Literal,
        kb: &ClauseDB,
    ) -> Result<Vec<(Vec<Term>, Sentence)>, err::ExtensionError>;
}

/// The active extensions of a context, indexed by provided signature.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Rc<dyn Extension>>,
    by_signature: HashMap<Signature, usize>,
}

impl ExtensionRegistry {
    /// Registers an extension for each of its provided signatures.
    ///
    /// A signature registered twice resolves through the later registration.
    pub fn register(&mut self, extension: Rc<dyn Extension>) {
        let index = self.extensions.len();
        for signature in extension.provides() {
            self.by_signature.insert(signature, index);
        }
        self.extensions.push(extension);
    }

    /// The extension providing the given signature, if any.
    pub fn lookup(&self, signature: &Signature) -> Option<Rc<dyn Extension>> {
        self.by_signature
            .get(signature)
            .map(|index| self.extensions[*index].clone())
    }

    /// True when no extension is registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// The catalog of extensions shipped with the library.
///
/// For the moment this is limited to `builtin`, which provides `distinct/2`.
pub fn builtin_catalog() -> HashMap<String, Rc<dyn Extension>> {
    let mut catalog: HashMap<String, Rc<dyn Extension>> = HashMap::default();
    catalog.insert("builtin".to_owned(), Rc::new(Builtin {}));
    catalog
}

/// The `builtin` extension: `distinct/2` holds of two ground, structurally distinct terms.
struct Builtin {}

impl Extension for Builtin {
    fn name(&self) -> &str {
        "builtin"
    }

    fn provides(&self) -> Vec<Signature> {
        vec![Signature {
            symbol: "distinct".to_owned(),
            arity: 2,
        }]
    }

    fn resolve(
        &self,
        literal: &Literal,
        _kb: &ClauseDB,
    ) -> Result<Vec<(Vec<Term>, Sentence)>, err::ExtensionError> {
        let [left, right] = literal.terms.as_slice() else {
            return Err(err::ExtensionError::Failure(format!(
                "distinct/2 applied to {} arguments",
                literal.terms.len()
            )));
        };

        if !left.is_ground() || !right.is_ground() {
            return Err(err::ExtensionError::Failure(
                "distinct/2 requires ground arguments".to_owned(),
            ));
        }

        match left == right {
            true => Ok(Vec::default()),
            false => Ok(vec![(vec![left.clone(), right.clone()], Sentence::True)]),
        }
    }
}
