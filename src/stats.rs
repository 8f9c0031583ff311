//! Repeated-trial harness for comparing estimators.
//!
//! The estimators are Monte Carlo algorithms, so a single run says little.
//! [`run_trials`] and [`compare`] repeat them on fresh copies of a graph and
//! [`Trials::summary`] reduces the results to the numbers usually reported:
//! smallest cut seen, mean, sample variance and, when the true minimum cut is
//! known, how often it was hit.

use std::fmt;
use std::io::Write;

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::graph::karger::CutEstimate;
use crate::graph::karger_stein::AmplifierConfig;
use crate::graph::selector::EdgeSelector;
use crate::graph::Graph;

/// Repetitions used when the caller does not ask for a specific number:
/// `⌊n² / 2⌋`, at least 1.
pub fn default_repetitions(vertex_count: usize) -> usize {
    (vertex_count * vertex_count / 2).max(1)
}

/// The three estimators usually compared side by side: plain Karger, classic
/// Karger-Stein, and an amplifier halving the graph with three branches.
pub fn standard_comparison() -> Vec<Algorithm> {
    vec![
        Algorithm::karger(),
        Algorithm::recursive(),
        Algorithm::KargerStein(AmplifierConfig {
            reduction_factor: 2.0,
            branch_count: 3,
        }),
    ]
}

/// Results of repeatedly running one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Trials {
    /// Column label, e.g. `karger` or `custom(a=0.5, b=4)`.
    pub label: String,
    pub cuts: Vec<usize>,
    pub contractions: Vec<usize>,
}

/// Aggregate numbers over a set of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub min: Option<usize>,
    pub mean: f64,
    /// Sample variance; needs at least two trials.
    pub variance: Option<f64>,
    /// Fraction of trials that returned the known minimum cut.
    pub hit_frequency: Option<f64>,
}

impl Trials {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cuts: Vec::new(),
            contractions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn min_cut(&self) -> Option<usize> {
        self.cuts.iter().copied().min()
    }

    pub fn summary(&self, true_min_cut: Option<usize>) -> Summary {
        let n = self.cuts.len();
        let mean = if n == 0 {
            0.0
        } else {
            self.cuts.iter().sum::<usize>() as f64 / n as f64
        };
        let variance = (n >= 2).then(|| {
            self.cuts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / (n - 1) as f64
        });
        let hit_frequency = true_min_cut.filter(|_| n > 0).map(|k| {
            self.cuts.iter().filter(|&&c| c == k).count() as f64 / n as f64
        });
        Summary {
            trials: n,
            min: self.min_cut(),
            mean,
            variance,
            hit_frequency,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trials: {}", self.trials)?;
        match self.min {
            Some(min) => write!(f, ", min cut: {min}")?,
            None => write!(f, ", min cut: n/a")?,
        }
        write!(f, ", mean: {:.3}", self.mean)?;
        match self.variance {
            Some(variance) => write!(f, ", variance: {variance:.3}")?,
            None => write!(f, ", variance: n/a")?,
        }
        if let Some(frequency) = self.hit_frequency {
            write!(f, ", min cut frequency: {frequency:.3}")?;
        }
        Ok(())
    }
}

/// Runs `algorithm` `repetitions` times, each time on a fresh copy of `graph`.
pub fn run_trials<S: EdgeSelector>(
    graph: &Graph,
    algorithm: &Algorithm,
    repetitions: usize,
    selector: &mut S,
) -> Result<Trials> {
    let runs = compare(graph, std::slice::from_ref(algorithm), repetitions, selector)?;
    single(runs)
}

/// [`run_trials`] with amplifier branches spread over the rayon pool.
pub fn run_trials_parallel<S: EdgeSelector + Send>(
    graph: &Graph,
    algorithm: &Algorithm,
    repetitions: usize,
    selector: &mut S,
) -> Result<Trials> {
    let runs = compare_parallel(graph, std::slice::from_ref(algorithm), repetitions, selector)?;
    single(runs)
}

/// Runs every algorithm once per repetition, interleaved, and returns one
/// [`Trials`] per algorithm in the order given.
pub fn compare<S: EdgeSelector>(
    graph: &Graph,
    algorithms: &[Algorithm],
    repetitions: usize,
    selector: &mut S,
) -> Result<Vec<Trials>> {
    record(algorithms, repetitions, |algorithm| {
        algorithm.run(graph, selector)
    })
}

/// [`compare`] with amplifier branches spread over the rayon pool.
pub fn compare_parallel<S: EdgeSelector + Send>(
    graph: &Graph,
    algorithms: &[Algorithm],
    repetitions: usize,
    selector: &mut S,
) -> Result<Vec<Trials>> {
    record(algorithms, repetitions, |algorithm| {
        algorithm.run_parallel(graph, selector)
    })
}

fn single(mut runs: Vec<Trials>) -> Result<Trials> {
    runs.pop()
        .ok_or_else(|| Error::invalid_input("no trials were recorded"))
}

fn record<F>(algorithms: &[Algorithm], repetitions: usize, mut run: F) -> Result<Vec<Trials>>
where
    F: FnMut(&Algorithm) -> Result<CutEstimate>,
{
    let mut runs: Vec<Trials> = algorithms
        .iter()
        .map(|algorithm| Trials::new(algorithm.to_string()))
        .collect();
    for repetition in 0..repetitions {
        for (algorithm, trials) in algorithms.iter().zip(runs.iter_mut()) {
            let estimate = run(algorithm)?;
            log::debug!(
                "{} #{}: cut {} with {} contractions",
                trials.label,
                repetition,
                estimate.cut_size,
                estimate.contractions
            );
            trials.cuts.push(estimate.cut_size);
            trials.contractions.push(estimate.contractions);
        }
    }
    Ok(runs)
}

/// Writes the cut sizes as CSV: one column per algorithm, one row per
/// repetition. Shorter columns are padded with empty fields.
pub fn write_csv<W: Write>(writer: W, runs: &[Trials]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(runs.iter().map(|t| t.label.as_str()))?;
    let rows = runs.iter().map(Trials::len).max().unwrap_or(0);
    for row in 0..rows {
        wtr.write_record(
            runs.iter()
                .map(|t| t.cuts.get(row).map_or_else(String::new, usize::to_string)),
        )?;
    }
    wtr.flush()?;
    Ok(())
}
