//! Execution-operator surface for the rank computation.
//!
//! The pipeline host hands a finite in-memory edge collection to
//! [`PageRankOperator::evaluate`] and consumes the resulting rank stream
//! exactly once. Channel selection, scheduling, cost accounting and lineage
//! stay with the host; the operator itself is synchronous and owns all of
//! its working state for the duration of the call.

use crate::algo::{page_rank, DegreeIndex, Edge, PageRankConfig, PageRankResult, RankStream};
use tracing::debug;

/// PageRank execution operator.
///
/// Holds the injected configuration and runs the three stages in order:
/// degree indexing, `iterations` synchronous update rounds, result
/// emission. Separate evaluations share nothing.
#[derive(Debug, Clone)]
pub struct PageRankOperator {
    config: PageRankConfig,
}

impl PageRankOperator {
    /// Operator running the given number of rounds with the default
    /// damping factor.
    pub fn new(iterations: usize) -> Self {
        Self::with_config(PageRankConfig {
            iterations,
            ..PageRankConfig::default()
        })
    }

    /// Operator with fully caller-supplied configuration.
    ///
    /// The damping factor must lie strictly between 0 and 1.
    pub fn with_config(config: PageRankConfig) -> Self {
        debug_assert!(
            config.damping_factor > 0.0 && config.damping_factor < 1.0,
            "damping factor {} outside (0, 1)",
            config.damping_factor
        );
        Self { config }
    }

    /// The configuration this operator runs with.
    pub fn config(&self) -> &PageRankConfig {
        &self.config
    }

    /// Compute the ranks for the edge collection.
    ///
    /// Returns the one-pass stream of (vertex, rank) records, in
    /// unspecified order. See [`page_rank`] for the errors.
    pub fn evaluate(&self, edges: &[Edge]) -> PageRankResult<RankStream> {
        let degrees = DegreeIndex::from_edges(edges);
        debug!(
            "indexed {} vertices from {} edges",
            degrees.num_vertices(),
            edges.len()
        );

        let scores = page_rank(edges, &degrees, &self.config)?;
        debug!(
            "ranked {} vertices in {} iterations",
            scores.len(),
            self.config.iterations
        );

        Ok(scores.into_stream())
    }
}
