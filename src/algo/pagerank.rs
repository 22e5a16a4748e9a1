//! PageRank over an edge multiset
//!
//! Fixed number of damped power-iteration rounds; no convergence threshold
//! and no early exit. Each round computes a fresh rank map from a frozen
//! snapshot of the previous one.

use super::common::{DegreeIndex, Edge, Rank, VertexId};
use rustc_hash::FxHashMap;
use std::collections::hash_map;
use std::iter::FusedIterator;
use thiserror::Error;

/// Errors raised by the rank computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageRankError {
    /// The edge collection touches no vertices, so there is no meaningful
    /// initial rank (1/0). The caller decides whether this is a no-op or a
    /// hard failure.
    #[error("graph has no vertices to rank")]
    EmptyGraph,

    /// A vertex was used as an edge source while indexed with out-degree 0.
    /// The degree index counts exactly the out-edges, so this can only
    /// happen when the index and the edge collection disagree — a
    /// programming error, not a retryable condition.
    #[error("vertex {0} is an edge source but has out-degree 0")]
    DanglingSourceDegree(VertexId),
}

pub type PageRankResult<T> = Result<T, PageRankError>;

/// PageRank configuration
///
/// Supplied by the caller; the computation never reads configuration
/// storage itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor, strictly between 0 and 1 (usually 0.85)
    pub damping_factor: f32,
    /// Number of update rounds; 0 leaves the uniform initial ranks
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Run the fixed-iteration PageRank update over the edges.
///
/// Every vertex in `degrees` starts at `1 / num_vertices`. Each round seeds
/// a new map with the random-jump term `(1 - damping) / num_vertices` for
/// every vertex, then walks the edges once, adding
/// `damping * previous[source] / degree[source]` to the new entry for the
/// target. Duplicate edges contribute independently. The previous round's
/// map stays frozen while the new one is filled, so no edge can observe a
/// rank already updated in the same round.
///
/// The rank sum is approximately 1 only for graphs without zero-out-degree
/// vertices; sinks leak mass by design.
///
/// # Errors
///
/// - [`PageRankError::EmptyGraph`] if `degrees` indexes no vertices.
/// - [`PageRankError::DanglingSourceDegree`] if an edge source is missing
///   from `degrees` or indexed with degree 0. Unreachable when `degrees`
///   was built from the same `edges`.
pub fn page_rank(
    edges: &[Edge],
    degrees: &DegreeIndex,
    config: &PageRankConfig,
) -> PageRankResult<RankScores> {
    let num_vertices = degrees.num_vertices();
    if num_vertices == 0 {
        return Err(PageRankError::EmptyGraph);
    }

    let initial_rank = 1.0 / num_vertices as Rank;
    let mut current: FxHashMap<VertexId, Rank> =
        degrees.vertices().map(|v| (v, initial_rank)).collect();

    let damping_rank = (1.0 - config.damping_factor) / num_vertices as Rank;

    for _ in 0..config.iterations {
        // Seed the damping term first so every vertex keeps an entry even
        // when it receives no incoming rank this round.
        let mut next: FxHashMap<VertexId, Rank> =
            FxHashMap::with_capacity_and_hasher(num_vertices, Default::default());
        next.extend(degrees.vertices().map(|v| (v, damping_rank)));

        for &(source, target) in edges {
            let degree = match degrees.out_degree(source) {
                Some(d) if d > 0 => d,
                _ => return Err(PageRankError::DanglingSourceDegree(source)),
            };
            let current_rank = current.get(&source).copied().unwrap_or(0.0);
            let partial = config.damping_factor * current_rank / degree as Rank;
            *next.entry(target).or_insert(0.0) += partial;
        }

        current = next;
    }

    Ok(RankScores { ranks: current })
}

/// Final rank map: exactly one entry per indexed vertex.
#[derive(Debug, Clone)]
pub struct RankScores {
    ranks: FxHashMap<VertexId, Rank>,
}

impl RankScores {
    /// Number of ranked vertices.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether no vertex was ranked. Never true for a successfully
    /// computed result.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank of a vertex, or `None` if it was not part of the graph.
    pub fn rank(&self, vertex: VertexId) -> Option<Rank> {
        self.ranks.get(&vertex).copied()
    }

    /// Borrowing iterator over (vertex, rank), in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Rank)> + '_ {
        self.ranks.iter().map(|(&v, &r)| (v, r))
    }

    /// Consume the scores into the one-pass output stream.
    pub fn into_stream(self) -> RankStream {
        RankStream {
            inner: self.ranks.into_iter(),
        }
    }
}

impl IntoIterator for RankScores {
    type Item = (VertexId, Rank);
    type IntoIter = RankStream;

    fn into_iter(self) -> RankStream {
        self.into_stream()
    }
}

/// One-pass, lazily drained stream of (vertex, rank) records.
///
/// Order is unspecified. The stream is not restartable; iterating again
/// requires recomputing or cloning the scores first.
pub struct RankStream {
    inner: hash_map::IntoIter<VertexId, Rank>,
}

impl Iterator for RankStream {
    type Item = (VertexId, Rank);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RankStream {}
impl FusedIterator for RankStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config(damping_factor: f32, iterations: usize) -> PageRankConfig {
        PageRankConfig {
            damping_factor,
            iterations,
        }
    }

    #[test]
    fn test_two_cycle_single_round() {
        // degrees = {1:1, 2:1}, initial 0.5, damping seed 0.075,
        // each edge carries 0.85 * 0.5 / 1 = 0.425
        let edges = vec![(1, 2), (2, 1)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 1)).unwrap();

        assert_eq!(scores.len(), 2);
        assert!((scores.rank(1).unwrap() - 0.5).abs() < 1e-6);
        assert!((scores.rank(2).unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_iterations_keeps_uniform_initial_ranks() {
        let edges = vec![(1, 2)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 0)).unwrap();

        assert_eq!(scores.rank(1), Some(0.5));
        assert_eq!(scores.rank(2), Some(0.5));
    }

    #[test]
    fn test_empty_graph_is_an_error() {
        let degrees = DegreeIndex::from_edges(&[]);
        let result = page_rank(&[], &degrees, &PageRankConfig::default());
        assert_eq!(result.unwrap_err(), PageRankError::EmptyGraph);
    }

    #[test]
    fn test_key_set_is_preserved_across_rounds() {
        let edges = vec![(1, 2), (2, 3), (3, 1), (4, 1)];
        let degrees = DegreeIndex::from_edges(&edges);
        let expected: HashSet<VertexId> = degrees.vertices().collect();

        for iterations in [0, 1, 5, 25] {
            let scores = page_rank(&edges, &degrees, &config(0.85, iterations)).unwrap();
            let keys: HashSet<VertexId> = scores.iter().map(|(v, _)| v).collect();
            assert_eq!(keys, expected, "after {} iterations", iterations);
        }
    }

    #[test]
    fn test_rank_sum_is_conserved_without_sinks() {
        // 3-cycle plus a chord; every vertex has out-degree >= 1
        let edges = vec![(1, 2), (2, 3), (3, 1), (1, 3)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 30)).unwrap();

        let sum: f32 = scores.iter().map(|(_, r)| r).sum();
        assert!((sum - 1.0).abs() < 1e-4, "rank sum {} drifted", sum);
    }

    #[test]
    fn test_sink_vertex_leaks_mass() {
        // Vertex 2 is a sink: it keeps receiving rank but redistributes
        // only the damping term, so the total drops below 1.
        let edges = vec![(1, 2)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 5)).unwrap();

        let sum: f32 = scores.iter().map(|(_, r)| r).sum();
        assert!(sum < 1.0);
        assert!(scores.rank(2).unwrap() > scores.rank(1).unwrap());
    }

    #[test]
    fn test_dangling_source_degree_is_detected() {
        // Hand-built index contradicting the edges: 1 has degree 0 yet
        // sources an edge.
        let mut raw = FxHashMap::default();
        raw.insert(1, 0);
        raw.insert(2, 0);
        let degrees = DegreeIndex::from_raw(raw);

        let result = page_rank(&[(1, 2)], &degrees, &config(0.85, 1));
        assert_eq!(result.unwrap_err(), PageRankError::DanglingSourceDegree(1));
    }

    #[test]
    fn test_unindexed_source_is_detected() {
        let mut raw = FxHashMap::default();
        raw.insert(2, 0);
        let degrees = DegreeIndex::from_raw(raw);

        let result = page_rank(&[(1, 2)], &degrees, &config(0.85, 1));
        assert_eq!(result.unwrap_err(), PageRankError::DanglingSourceDegree(1));
    }

    #[test]
    fn test_duplicate_edges_split_outgoing_rank() {
        // 1 -> 2 twice and 1 -> 3 once: vertex 2 receives two thirds of
        // vertex 1's redistributed rank, vertex 3 one third.
        let edges = vec![(1, 2), (1, 2), (1, 3)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 1)).unwrap();

        let damping_rank = (1.0 - 0.85) / 3.0;
        let carried = 0.85 * (1.0 / 3.0) / 3.0;
        assert!((scores.rank(2).unwrap() - (damping_rank + 2.0 * carried)).abs() < 1e-6);
        assert!((scores.rank(3).unwrap() - (damping_rank + carried)).abs() < 1e-6);
    }

    #[test]
    fn test_stream_is_finite_and_exact_sized() {
        let edges = vec![(1, 2), (2, 3)];
        let degrees = DegreeIndex::from_edges(&edges);
        let scores = page_rank(&edges, &degrees, &config(0.85, 2)).unwrap();

        let mut stream = scores.into_stream();
        assert_eq!(stream.len(), 3);
        let drained: Vec<_> = stream.by_ref().collect();
        assert_eq!(drained.len(), 3);
        assert_eq!(stream.next(), None);
    }
}
