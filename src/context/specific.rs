use rand::SeedableRng;

use crate::{
    config::Config,
    db::{clause::ClauseDB, extension, extension::ExtensionRegistry, label::LabelDB},
    generic::pcg::Pcg32,
};

use super::{Counters, GenericContext};

/// A context which uses [Pcg32] as a source of randomness.
pub type Context = GenericContext<Pcg32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The random source is seeded from the configuration, or from entropy when no seed is given.
    pub fn from_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };

        Self {
            counters: Counters::default(),

            clause_db: ClauseDB::default(),
            label_db: LabelDB::default(),

            extensions: ExtensionRegistry::default(),
            catalog: extension::builtin_catalog(),

            config,

            rng,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
