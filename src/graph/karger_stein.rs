//! Karger-Stein recursive amplification of the contraction algorithm.
//!
//! A single contraction run finds a minimum cut only with probability
//! `Ω(n^-2)`, and most of the risk sits in the last few contractions. The
//! amplifier therefore contracts cheaply down to `n / reduction_factor`
//! vertices once, then repeats the remaining work on `branch_count` independent
//! copies and keeps the smallest cut.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::graph::karger::{self, CutEstimate};
use crate::graph::selector::EdgeSelector;
use crate::graph::Graph;

/// Shrink factor between recursion levels in the classic algorithm.
pub const DEFAULT_REDUCTION_FACTOR: f64 = std::f64::consts::SQRT_2;

/// Number of recursive attempts per level in the classic algorithm.
pub const DEFAULT_BRANCH_COUNT: usize = 2;

/// Tunables of the recursive amplifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplifierConfig {
    /// Each level contracts the graph from `n` to `n / reduction_factor`
    /// vertices. Must be greater than 1.
    pub reduction_factor: f64,
    /// Independent attempts launched from each reduced graph. At least 1.
    pub branch_count: usize,
}

impl Default for AmplifierConfig {
    fn default() -> Self {
        Self {
            reduction_factor: DEFAULT_REDUCTION_FACTOR,
            branch_count: DEFAULT_BRANCH_COUNT,
        }
    }
}

impl AmplifierConfig {
    pub fn new(reduction_factor: f64, branch_count: usize) -> Result<Self> {
        let config = Self {
            reduction_factor,
            branch_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// A factor of 1 or less would recurse without ever shrinking the graph.
    pub fn validate(&self) -> Result<()> {
        if !self.reduction_factor.is_finite() || self.reduction_factor <= 1.0 {
            return Err(Error::invalid_input(format!(
                "reduction factor must be a finite number greater than 1, got {}",
                self.reduction_factor
            )));
        }
        if self.branch_count == 0 {
            return Err(Error::invalid_input("branch count must be at least 1"));
        }
        Ok(())
    }
}

/// Runs the Karger-Stein amplifier on a copy of `graph`.
///
/// The returned cut is the smallest one seen across all branches and the
/// contraction count covers the shared prefix of every level plus all
/// branches.
///
/// # Errors
/// * `InvalidGraph` if the graph has fewer than 2 vertices
/// * `InvalidInput` if the configuration is invalid
pub fn estimate_cut_amplified<S: EdgeSelector>(
    graph: &Graph,
    config: &AmplifierConfig,
    selector: &mut S,
) -> Result<CutEstimate> {
    let mut work = graph.clone();
    estimate_cut_amplified_in_place(&mut work, config, selector)
}

/// Same as [`estimate_cut_amplified`] but the first reduction level contracts
/// the caller's graph directly. Branches always work on their own copies.
pub fn estimate_cut_amplified_in_place<S: EdgeSelector>(
    graph: &mut Graph,
    config: &AmplifierConfig,
    selector: &mut S,
) -> Result<CutEstimate> {
    config.validate()?;
    graph.require_estimable()?;
    amplify(graph, config, selector, 0)
}

/// Runs the branches of every level on the rayon thread pool.
///
/// Each branch receives a selector forked from its parent, so the result is
/// reproducible for a seeded selector regardless of scheduling.
pub fn estimate_cut_amplified_parallel<S: EdgeSelector + Send>(
    graph: &Graph,
    config: &AmplifierConfig,
    selector: &mut S,
) -> Result<CutEstimate> {
    config.validate()?;
    graph.require_estimable()?;
    let mut work = graph.clone();
    amplify_parallel(&mut work, config, selector, 0)
}

/// Contracts `graph` to the next level's size. Returns the estimate and
/// whether recursion should stop here.
fn reduce<S: EdgeSelector>(
    graph: &mut Graph,
    config: &AmplifierConfig,
    selector: &mut S,
    level: usize,
) -> Result<(CutEstimate, bool)> {
    let depth = graph.vertex_count() as f64 / config.reduction_factor;
    let reduced = karger::estimate_cut_in_place(graph, depth, selector)?;
    log::debug!(
        "level {}: reduced to {} vertices (target {:.2})",
        level,
        graph.vertex_count(),
        depth
    );
    // Stalling above the target means no edges were left; recursing again
    // would never shrink the graph.
    let done = depth <= 2.0 || graph.vertex_count() as f64 > depth;
    Ok((reduced, done))
}

fn amplify<S: EdgeSelector>(
    graph: &mut Graph,
    config: &AmplifierConfig,
    selector: &mut S,
    level: usize,
) -> Result<CutEstimate> {
    let (reduced, done) = reduce(graph, config, selector, level)?;
    if done {
        return Ok(reduced);
    }

    let mut best = CutEstimate {
        cut_size: usize::MAX,
        contractions: reduced.contractions,
    };
    for _ in 0..config.branch_count {
        let mut branch = graph.clone();
        let found = amplify(&mut branch, config, selector, level + 1)?;
        best = merge(best, found);
    }
    Ok(best)
}

fn amplify_parallel<S: EdgeSelector + Send>(
    graph: &mut Graph,
    config: &AmplifierConfig,
    selector: &mut S,
    level: usize,
) -> Result<CutEstimate> {
    let (reduced, done) = reduce(graph, config, selector, level)?;
    if done {
        return Ok(reduced);
    }

    let shared: &Graph = graph;
    let forks: Vec<S> = (0..config.branch_count).map(|_| selector.fork()).collect();
    let found = forks
        .into_par_iter()
        .map(|mut fork| {
            let mut branch = shared.clone();
            amplify_parallel(&mut branch, config, &mut fork, level + 1)
        })
        .collect::<Result<Vec<_>>>()?;

    let start = CutEstimate {
        cut_size: usize::MAX,
        contractions: reduced.contractions,
    };
    Ok(found.into_iter().fold(start, merge))
}

/// Minimum cut, total work.
fn merge(acc: CutEstimate, found: CutEstimate) -> CutEstimate {
    CutEstimate {
        cut_size: acc.cut_size.min(found.cut_size),
        contractions: acc.contractions + found.contractions,
    }
}
