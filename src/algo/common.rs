//! Vertex/edge model and degree indexing shared by the rank computation.
//!
//! PageRank only needs the out-degree of every vertex, not full adjacency,
//! so the index is a single integer-keyed map rather than an adjacency view.

use rustc_hash::FxHashMap;

/// Vertex identifier type (i64). Opaque: equality and hashing only.
pub type VertexId = i64;

/// Rank value type (f32)
pub type Rank = f32;

/// A directed edge as (source, target)
pub type Edge = (VertexId, VertexId);

/// Out-degree index over every vertex touched by an edge collection.
///
/// Built once, read-only afterwards. Degree lookups sit on the per-edge hot
/// path of every iteration round, hence `FxHashMap` over plain `i64` keys.
///
/// Invariant: the key set equals the union of all sources and targets seen
/// across the edges; a vertex that only ever appears as a target keeps
/// out-degree 0.
#[derive(Debug, Clone, Default)]
pub struct DegreeIndex {
    degrees: FxHashMap<VertexId, u32>,
}

impl DegreeIndex {
    /// Build the index in one pass over the edges.
    ///
    /// Duplicate edges each contribute to the source's degree; traversal
    /// order does not matter. An empty edge collection yields an empty
    /// index, which is valid but degenerate (see
    /// [`PageRankError::EmptyGraph`](super::pagerank::PageRankError)).
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut degrees = FxHashMap::default();
        for &(source, target) in edges {
            *degrees.entry(source).or_insert(0) += 1;
            degrees.entry(target).or_insert(0);
        }
        Self { degrees }
    }

    /// Out-degree of a vertex, or `None` if no edge touches it.
    pub fn out_degree(&self, vertex: VertexId) -> Option<u32> {
        self.degrees.get(&vertex).copied()
    }

    /// Number of distinct vertices touched by any edge.
    pub fn num_vertices(&self) -> usize {
        self.degrees.len()
    }

    /// Whether no vertex is indexed at all.
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Whether the vertex appears in the index.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.degrees.contains_key(&vertex)
    }

    /// Iterate over the indexed vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.degrees.keys().copied()
    }

    /// Index with caller-supplied degrees, bypassing the edge scan.
    /// Only for tests that need to violate the indexing invariant.
    #[cfg(test)]
    pub(crate) fn from_raw(degrees: FxHashMap<VertexId, u32>) -> Self {
        Self { degrees }
    }
}
