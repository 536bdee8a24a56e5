//! Indexed min-heap Dijkstra vs lazy-deletion Dijkstra
//!
//! This crate pairs an indexed, mutable-priority binary min-heap with two
//! renditions of Dijkstra's shortest-path algorithm over dense random
//! graphs:
//!
//! - **Eager**: one heap entry per node, lowered in place via `decrease_key`
//!   (O(log n) repair, O(1) node lookup through a position index).
//! - **Lazy**: a plain min-heap that accumulates duplicate entries and skips
//!   the stale ones on extraction.
//!
//! Both produce identical distance tables; each reports how many improving
//! relaxations it performed, so the decrease-key traffic of the two designs
//! can be compared trial by trial. The `decrease-key-survey` binary runs
//! that comparison as a Monte-Carlo sweep over graph sizes.
//!
//! # Example
//!
//! ```rust
//! use dijkstra_heaps::graph::Graph;
//! use dijkstra_heaps::shortest_path;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1.0);
//! graph.add_edge(0, 2, 4.0);
//! graph.add_edge(1, 2, 1.0);
//! graph.add_edge(1, 3, 5.0);
//! graph.add_edge(2, 3, 1.0);
//!
//! let eager = shortest_path::eager(&graph, 0)?;
//! let lazy = shortest_path::lazy(&graph, 0)?;
//!
//! assert_eq!(eager.distances, vec![0.0, 1.0, 2.0, 3.0]);
//! assert_eq!(eager.distances, lazy.distances);
//! # Ok::<(), dijkstra_heaps::shortest_path::SearchError>(())
//! ```

pub mod graph;
pub mod indexed_binary;
pub mod shortest_path;
pub mod simple_binary;
pub mod traits;

// Re-export the heap seam for convenience
pub use traits::{Heap, HeapError};
