/*!
Configuration of a context.

Options are plain fields with defaults collected in [defaults], referenced by the CLI when documenting flags.
*/

/// Default values for the configuration.
pub mod defaults {
    /// The default number of Monte-Carlo samples.
    pub const SAMPLE_COUNT: usize = 10_000;

    /// The default minimum number of samples before a convergence check.
    pub const MINIMUM_SAMPLES: usize = 128;

    /// The default ceiling on samples when sampling to a convergence threshold.
    pub const SAMPLE_CEILING: usize = 1 << 24;

    /// The default ceiling on answers across the tables of a query.
    pub const ANSWER_CEILING: usize = 1 << 16;

    /// The interval, in samples, between convergence checks.
    pub const CONVERGENCE_INTERVAL: usize = 64;
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of Monte-Carlo samples to draw, when no convergence threshold is set.
    pub sample_count: usize,

    /// The seed for the random source of the context, drawn from by Monte-Carlo sampling.
    /// Absent, the source is seeded from entropy and estimates are nondeterministic.
    pub seed: Option<u64>,

    /// A convergence threshold on the half-width of a Wilson-score interval at 95%.
    /// Set, sampling stops when the largest half-width across answers falls below the threshold.
    pub convergence: Option<f64>,

    /// The minimum number of samples to draw before any convergence check.
    pub minimum_samples: usize,

    /// A ceiling on samples when sampling to a convergence threshold.
    pub sample_ceiling: usize,

    /// A ceiling on answers across the tables of a single query.
    pub answer_ceiling: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_count: defaults::SAMPLE_COUNT,
            seed: None,
            convergence: None,
            minimum_samples: defaults::MINIMUM_SAMPLES,
            sample_ceiling: defaults::SAMPLE_CEILING,
            answer_ceiling: defaults::ANSWER_CEILING,
        }
    }
}
