//! Rankflow — in-process PageRank computation operator
//!
//! Given a finite multiset of directed edges over 64-bit integer vertex
//! identifiers, computes a per-vertex importance score with a fixed number
//! of damped power-iteration rounds and exposes the result as a one-pass
//! record stream for a downstream consumer.
//!
//! # Architecture
//!
//! Three sequential stages over the same in-memory data:
//!
//! - degree indexing ([`algo::common::DegreeIndex`]) — one pass over the
//!   edges, registering every touched vertex with its out-degree
//! - fixed-iteration rank updates ([`algo::pagerank::page_rank`]) — each
//!   round produces a fresh rank map from a frozen snapshot of the previous
//!   one
//! - result emission ([`algo::pagerank::RankStream`]) — a lazy, single-pass
//!   iterator over the final map
//!
//! [`operator::PageRankOperator`] composes the three stages behind the
//! surface a pipeline host calls, and [`sink`] provides line-oriented glue
//! for text destinations. Everything is synchronous and single-threaded;
//! scheduling and channel selection belong to the host.
//!
//! # Example
//!
//! ```rust
//! use rankflow::PageRankOperator;
//!
//! let edges = vec![(1, 2), (2, 1)];
//! let operator = PageRankOperator::new(1);
//!
//! let ranks: Vec<(i64, f32)> = operator.evaluate(&edges).unwrap().collect();
//! assert_eq!(ranks.len(), 2);
//! ```

pub mod algo;
pub mod operator;
pub mod sink;

pub use algo::{
    page_rank, DegreeIndex, Edge, PageRankConfig, PageRankError, PageRankResult, Rank, RankScores,
    RankStream, VertexId,
};
pub use operator::PageRankOperator;
pub use sink::{SinkError, SinkResult, TextLineSink};
