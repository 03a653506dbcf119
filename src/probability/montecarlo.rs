/*!
The Monte-Carlo back-end.

Per sample, a world is drawn --- one value per randomized partition, according to the declared distribution --- and each answer's sentence is evaluated against the world, pure boolean evaluation.
The reported probability of an answer is `hits/samples`.

Worlds are drawn from the random source of the [context](crate::context), seeded from the configuration when the context is built: with a seed, the estimates of a context are reproducible on every run, without one they are nondeterministic.

With a [convergence threshold](crate::config::Config::convergence) set, sampling continues until the largest half-width of a Wilson-score interval at 95% across the answers falls below the threshold, after a minimum-sample floor.
The [sample ceiling](crate::config::Config::sample_ceiling) cuts an unconverging run off with a [resource error](crate::types::err::ErrorKind::ResourceExhausted).

Samples are independent, so drawing them in parallel would be sound; for the moment sampling is sequential, which keeps the draw sequence of a seeded context reproducible at no effort.
*/

use crate::{
    config::defaults,
    context::GenericContext,
    misc::log::targets::{self},
    reports::{AnswerSet, Estimate},
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

/// The half-width of a Wilson score interval at 95% confidence.
fn wilson_half_width(hits: usize, samples: usize) -> f64 {
    const Z: f64 = 1.959964;

    let n = samples as f64;
    let p = hits as f64 / n;

    let spread = (p * (1.0 - p) / n + Z * Z / (4.0 * n * n)).sqrt();
    (Z * spread) / (1.0 + Z * Z / n)
}

impl<R: rand::Rng> GenericContext<R> {
    /// Queries, then estimates the probability of each answer by sampling worlds.
    pub fn montecarlo(&mut self, goal: &Literal) -> Result<Vec<Estimate>, ErrorKind> {
        let answers = self.query(goal)?;
        self.estimate(&answers)
    }

    /// Estimates the probability of each answer of an answer set by sampling worlds.
    pub fn estimate(&mut self, answers: &AnswerSet) -> Result<Vec<Estimate>, ErrorKind> {
        let mut labels = Vec::default();
        for answer in answers.iter() {
            answer.sentence.collect_labels(&mut labels);
        }
        if let Some(label) = self.label_db.missing_probability(&labels) {
            return Err(err::ProbabilityError::MissingProbability(label.clone()).into());
        }

        let mut hits = vec![0_usize; answers.len()];
        let mut samples = 0;

        let mut draw = |hits: &mut Vec<usize>| {
            let world = self.label_db.sample_world(&mut self.rng);
            for (answer, hit) in answers.iter().zip(hits.iter_mut()) {
                if answer.sentence.holds_in(&world) {
                    *hit += 1;
                }
            }
        };

        match self.config.convergence {
            None => {
                for _ in 0..self.config.sample_count {
                    draw(&mut hits);
                    samples += 1;
                }
            }

            Some(threshold) => 'sampling: loop {
                if samples >= self.config.sample_ceiling {
                    log::warn!(target: targets::SAMPLER, "Unconverged after {samples} samples");
                    return Err(ErrorKind::ResourceExhausted(err::Resource::Samples));
                }

                draw(&mut hits);
                samples += 1;

                if samples < self.config.minimum_samples
                    || samples % defaults::CONVERGENCE_INTERVAL != 0
                {
                    continue 'sampling;
                }

                let widest = hits
                    .iter()
                    .map(|hit| wilson_half_width(*hit, samples))
                    .fold(0.0, f64::max);
                if widest < threshold {
                    log::debug!(target: targets::SAMPLER, "Converged after {samples} samples");
                    break 'sampling;
                }
            },
        }

        self.counters.samples += samples;
        log::info!(target: targets::SAMPLER, "{samples} worlds sampled");

        Ok(answers
            .iter()
            .zip(hits)
            .map(|(answer, hits)| Estimate {
                literal: answer.literal.clone(),
                hits,
                samples,
            })
            .collect())
    }
}

#[cfg(test)]
mod width_tests {
    use super::*;

    #[test]
    fn narrows_with_samples() {
        let coarse = wilson_half_width(50, 100);
        let fine = wilson_half_width(5_000, 10_000);
        assert!(fine < coarse);
        assert!(fine < 0.01);
    }

    #[test]
    fn widest_at_even_odds() {
        let even = wilson_half_width(500, 1_000);
        let skewed = wilson_half_width(50, 1_000);
        assert!(skewed < even);
    }
}
