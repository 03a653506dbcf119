/// Counts for various things which count, roughly.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of all queries made.
    pub queries: usize,

    /// A count of all clause activations across queries.
    pub activations: usize,

    /// A count of all answers derived across queries.
    pub answers: usize,

    /// A count of all worlds sampled across Monte-Carlo runs.
    pub samples: usize,
}
