/*!
Rendering of answers, estimates, warnings, and errors.

Output lines follow the program syntax where possible: answers print as facts, notes as `%` comments.
*/

use crossterm::style::Stylize;

use judged::{
    context::Context,
    reports::{AnswerSet, Estimate, Warning},
    structures::literal::Literal,
    types::err::ErrorKind,
};

use crate::config::OutputFormat;

/// Which back-end query statements run through.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Deterministic,
    Exact,
    Montecarlo,
}

/// Settings for rendering, shared by batch and interactive sessions.
#[derive(Clone, Copy)]
pub struct Renderer {
    pub backend: Backend,
    pub format: OutputFormat,
    pub verbose: bool,
    pub debug: bool,
}

impl Renderer {
    fn colored(&self) -> bool {
        self.format == OutputFormat::Color
    }

    /// Runs a query through the configured back-end and prints the results.
    pub fn run_query(&self, ctx: &mut Context, goal: &Literal) -> Result<(), ErrorKind> {
        match self.backend {
            Backend::Deterministic => {
                let answers = ctx.query(goal)?;
                self.answers(&answers, false);
            }

            Backend::Exact => {
                let answers = ctx.exact(goal)?;
                self.answers(&answers, true);
            }

            Backend::Montecarlo => {
                ctx.label_db.validate()?;
                let answers = ctx.query(goal)?;
                for warning in &answers.warnings {
                    self.warning(warning);
                }
                for estimate in ctx.estimate(&answers)? {
                    self.estimate(&estimate);
                }
            }
        }

        if self.debug {
            self.note(&format!(
                "{} activations, {} answers so far",
                ctx.counters.activations, ctx.counters.answers,
            ));
        }

        Ok(())
    }

    fn answers(&self, answers: &AnswerSet, sentences: bool) {
        for warning in &answers.warnings {
            self.warning(warning);
        }

        if answers.is_empty() {
            self.note("no answers");
            return;
        }

        for answer in answers.iter() {
            let line = match sentences || self.debug {
                true => format!("{} [{}].", answer.literal, answer.sentence),
                false => format!("{}.", answer.literal),
            };
            match self.colored() {
                true => println!("{}", line.green()),
                false => println!("{line}"),
            }
        }
    }

    fn estimate(&self, estimate: &Estimate) {
        let line = match self.debug {
            true => format!(
                "{} ~ {:.4} ({}/{})",
                estimate.literal,
                estimate.probability(),
                estimate.hits,
                estimate.samples,
            ),
            false => format!("{}", estimate),
        };
        match self.colored() {
            true => println!("{}", line.cyan()),
            false => println!("{line}"),
        }
    }

    pub fn warning(&self, warning: &Warning) {
        let line = format!("% warning: {warning}");
        match self.colored() {
            true => eprintln!("{}", line.yellow()),
            false => eprintln!("{line}"),
        }
    }

    pub fn error(&self, error: &ErrorKind) {
        let line = format!("% error: {error}");
        match self.colored() {
            true => eprintln!("{}", line.red()),
            false => eprintln!("{line}"),
        }
    }

    pub fn note(&self, note: &str) {
        let line = format!("% {note}");
        match self.colored() {
            true => println!("{}", line.dark_grey()),
            false => println!("{line}"),
        }
    }
}
