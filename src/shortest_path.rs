//! Eager and lazy single-source shortest paths
//!
//! Two renditions of Dijkstra's algorithm over the same [`Graph`], built to
//! compare how much priority-update traffic each one generates:
//!
//! - [`eager`] keeps one entry per node in an
//!   [`IndexedMinHeap`](crate::indexed_binary::IndexedMinHeap) and lowers it
//!   in place with `decrease_key` whenever a shorter path is found.
//! - [`lazy`] uses a plain min-heap, pushes a brand-new `(distance, node)`
//!   entry for every improvement, and discards entries that are already
//!   outdated when they surface.
//!
//! Both return the same distance table for the same graph and source; the
//! interesting output is [`ShortestPaths::decrease_keys`], which counts
//! improving relaxations identically in both so the variants can be compared
//! run for run.
//!
//! Distances are `f64` with `f64::INFINITY` standing for "unreached".
//! Priorities inside the heaps are wrapped in [`OrderedFloat`] to satisfy the
//! heaps' `Ord` bound; the weights are finite and non-negative, so no NaN can
//! arise.

use crate::graph::Graph;
use crate::indexed_binary::IndexedMinHeap;
use crate::simple_binary::SimpleBinaryHeap;
use crate::traits::{Heap, HeapError};
use ordered_float::OrderedFloat;
use std::fmt;

/// Error type for shortest-path runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The source node id is not in `0..nodes`
    InvalidSource {
        /// The offending source id
        source: usize,
        /// The graph's node count
        nodes: usize,
    },
    /// A heap precondition was violated mid-run
    ///
    /// Does not happen for well-formed graphs; surfaced rather than
    /// swallowed because a failed heap operation means the heap's internal
    /// state can no longer be trusted.
    Heap(HeapError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidSource { source, nodes } => {
                write!(
                    f,
                    "source node {} out of range for a graph with {} nodes",
                    source, nodes
                )
            }
            SearchError::Heap(err) => write!(f, "heap operation failed: {}", err),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Heap(err) => Some(err),
            SearchError::InvalidSource { .. } => None,
        }
    }
}

impl From<HeapError> for SearchError {
    fn from(err: HeapError) -> Self {
        SearchError::Heap(err)
    }
}

/// Result of one shortest-path run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Distance from the source per node; `f64::INFINITY` for unreachable
    /// nodes
    pub distances: Vec<f64>,
    /// Number of improving relaxations: `decrease_key` calls for the eager
    /// variant, counted identically (one per improvement) for the lazy one
    pub decrease_keys: usize,
}

/// Runs eager Dijkstra from `source`
///
/// Every node goes into the indexed heap up front, the source at distance
/// zero and the rest at the infinite sentinel, and improvements are applied to
/// the existing entries with `decrease_key`. A node's state is implicit in
/// the heap: present with an infinite priority means untouched, present with
/// a finite one means on the frontier, extracted means its distance is
/// final.
///
/// Extracting an infinite minimum means no reachable node remains, so the
/// run stops there rather than draining the rest.
///
/// # Errors
/// Returns [`SearchError::InvalidSource`] if `source` is out of range.
pub fn eager(graph: &Graph, source: usize) -> Result<ShortestPaths, SearchError> {
    let n = graph.node_count();
    if source >= n {
        return Err(SearchError::InvalidSource { source, nodes: n });
    }

    let mut distances = vec![f64::INFINITY; n];
    distances[source] = 0.0;

    let mut heap = IndexedMinHeap::with_capacity(n);
    for node in 0..n {
        let priority = if node == source { 0.0 } else { f64::INFINITY };
        heap.insert(node, OrderedFloat(priority))?;
    }

    while !heap.is_empty() {
        let (u, OrderedFloat(dist_u)) = heap.extract_min()?;
        if dist_u.is_infinite() {
            break;
        }

        for &(v, weight) in graph.neighbors(u) {
            let candidate = dist_u + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                heap.decrease_key(v, OrderedFloat(candidate))?;
            }
        }
    }

    Ok(ShortestPaths {
        decrease_keys: heap.decrease_key_count(),
        distances,
    })
}

/// Runs lazy Dijkstra from `source` using [`SimpleBinaryHeap`]
///
/// See [`lazy_with`] for the algorithm; this is the instantiation the
/// comparison experiments use.
///
/// # Errors
/// Returns [`SearchError::InvalidSource`] if `source` is out of range.
pub fn lazy(graph: &Graph, source: usize) -> Result<ShortestPaths, SearchError> {
    lazy_with::<SimpleBinaryHeap<_>>(graph, source)
}

/// Runs lazy Dijkstra from `source` over any duplicate-tolerant min-heap
///
/// No decrease-key: every improving relaxation pushes a fresh
/// `(distance, node)` entry instead, so a node can sit in the heap several
/// times at once. An extracted entry whose distance is worse than the node's
/// current best is stale (a newer entry already superseded it) and is
/// dropped without relaxing anything. Entries are ordered by distance first
/// and node id second, which keeps extraction deterministic when distances
/// tie.
///
/// The counter increments once per improving relaxation, the same event the
/// eager variant counts, so the two runs are directly comparable.
///
/// # Errors
/// Returns [`SearchError::InvalidSource`] if `source` is out of range.
pub fn lazy_with<H>(graph: &Graph, source: usize) -> Result<ShortestPaths, SearchError>
where
    H: Heap<(OrderedFloat<f64>, usize)>,
{
    let n = graph.node_count();
    if source >= n {
        return Err(SearchError::InvalidSource { source, nodes: n });
    }

    let mut distances = vec![f64::INFINITY; n];
    distances[source] = 0.0;
    let mut decrease_keys = 0;

    let mut heap = H::new();
    heap.push((OrderedFloat(0.0), source));

    while let Some((OrderedFloat(dist_u), u)) = heap.pop() {
        if dist_u > distances[u] {
            // Stale: a later improvement already replaced this entry.
            continue;
        }

        for &(v, weight) in graph.neighbors(u) {
            let candidate = distances[u] + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                decrease_keys += 1;
                heap.push((OrderedFloat(candidate), v));
            }
        }
    }

    Ok(ShortestPaths {
        distances,
        decrease_keys,
    })
}
