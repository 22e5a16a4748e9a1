//! Graph rank computation
//!
//! Pure, single-threaded stages: degree indexing, damped power iteration,
//! result emission. No stage suspends or shares state across invocations.

pub mod common;
pub mod pagerank;

pub use common::{DegreeIndex, Edge, Rank, VertexId};
pub use pagerank::{
    page_rank, PageRankConfig, PageRankError, PageRankResult, RankScores, RankStream,
};
