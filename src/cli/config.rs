/*!
The command line surface, and its mapping onto a [Config].
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use judged::config::{defaults, Config};

/// Answers queries over probabilistic Datalog programs.
#[derive(Parser)]
#[command(name = "judged_cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

/// The back-end a query statement runs through.
#[derive(Subcommand)]
pub enum Mode {
    /// Print the answers to each query, ignoring sentences.
    Deterministic(CommonArgs),

    /// Print the canonical sentence of each answer. Programs with negation are not supported.
    Exact(CommonArgs),

    /// Estimate the probability of each answer by sampling worlds.
    Montecarlo(MonteCarloArgs),
}

impl Mode {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Mode::Deterministic(common) | Mode::Exact(common) => common,
            Mode::Montecarlo(args) => &args.common,
        }
    }

    /// The context configuration the arguments describe.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Mode::Montecarlo(args) = self {
            config.sample_count = args.samples;
            config.seed = args.seed;
            config.convergence = args.convergence;
        }
        config
    }
}

/// Arguments common to every mode.
#[derive(Args)]
pub struct CommonArgs {
    /// Drop into an interactive session after loading the program.
    #[arg(short, long)]
    pub interactive: bool,

    /// Note each loaded statement.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print resolution detail alongside answers.
    #[arg(short, long)]
    pub debug: bool,

    /// The output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Color)]
    pub format: OutputFormat,

    /// Extensions to activate from the catalog, before loading.
    #[arg(short, long = "extension")]
    pub extensions: Vec<String>,

    /// Additional program files to load, before the program file.
    #[arg(short, long = "module")]
    pub modules: Vec<PathBuf>,

    /// The program file.
    pub file: Option<PathBuf>,
}

/// Arguments specific to the Monte-Carlo back-end.
#[derive(Args)]
pub struct MonteCarloArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// The number of worlds to sample.
    #[arg(short = 'n', long, default_value_t = defaults::SAMPLE_COUNT)]
    pub samples: usize,

    /// Seed the sampler, for a reproducible estimate.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sample until the 95% interval half-width falls below the threshold.
    #[arg(short, long)]
    pub convergence: Option<f64>,
}

/// Whether output is colorized.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Color,
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color => write!(f, "color"),
            Self::Plain => write!(f, "plain"),
        }
    }
}
