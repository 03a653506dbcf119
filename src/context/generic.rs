use std::{collections::HashMap, rc::Rc};

use crate::{
    config::Config,
    db::{clause::ClauseDB, extension::Extension, extension::ExtensionRegistry, label::LabelDB},
};

use super::Counters;

/// A generic context, paramaterised to a source of randomness.
///
/// The source of randomness is used only by the Monte-Carlo back-end; a seeded source makes an estimate reproducible.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The label database.
    pub label_db: LabelDB,

    /// The active extensions.
    pub extensions: ExtensionRegistry,

    /// The catalog of loadable extensions, consulted by `@use`.
    pub catalog: HashMap<String, Rc<dyn Extension>>,

    /// The source of rng.
    pub rng: R,
}
