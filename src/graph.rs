//! Dense weighted digraph for the shortest-path engine
//!
//! Nodes are `usize` ids in `0..n`; adjacency is a vector of out-edge lists,
//! each edge a `(neighbor, weight)` pair with a non-negative `f64` weight.
//!
//! Graphs come from two places: [`Graph::add_edge`] for explicit adjacency
//! (tests, known topologies) and [`Graph::complete_random`] for the
//! Monte-Carlo experiments, which draw a complete directed graph with an
//! independent uniform `[0, 1)` weight per ordered pair. The weights are not
//! symmetric: `(u, v)` and `(v, u)` are drawn independently.

use rand::Rng;
use std::fmt;

/// A directed graph with non-negative `f64` edge weights
#[derive(Debug, Clone)]
pub struct Graph {
    adj: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Creates a graph with `nodes` nodes and no edges
    pub fn new(nodes: usize) -> Self {
        Graph {
            adj: vec![Vec::new(); nodes],
        }
    }

    /// Creates a complete directed graph on `nodes` nodes with independent
    /// uniform `[0, 1)` weights
    ///
    /// Every ordered pair `(u, v)` with `u != v` gets its own draw from
    /// `rng`, so the edge order and weights are reproducible from the rng
    /// seed.
    pub fn complete_random<R: Rng>(nodes: usize, rng: &mut R) -> Self {
        let mut graph = Graph::new(nodes);
        for u in 0..nodes {
            graph.adj[u].reserve(nodes.saturating_sub(1));
            for v in 0..nodes {
                if u != v {
                    graph.adj[u].push((v, rng.gen::<f64>()));
                }
            }
        }
        graph
    }

    /// Adds a directed edge `from -> to`
    ///
    /// Both endpoints must be in range and the weight non-negative; these
    /// are construction-time contracts, not runtime inputs.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        assert!(from < self.adj.len(), "edge source {} out of range", from);
        assert!(to < self.adj.len(), "edge target {} out of range", to);
        assert!(weight >= 0.0, "negative edge weight {}", weight);
        self.adj[from].push((to, weight));
    }

    /// Returns the number of nodes
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the out-edges of `node` as `(neighbor, weight)` pairs
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        &self.adj[node]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, edges) in self.adj.iter().enumerate() {
            write!(f, "Node {}:", u)?;
            for (v, weight) in edges {
                write!(f, " ({}, {:.2})", v, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_complete_random_shape() {
        let mut rng = SmallRng::seed_from_u64(7);
        let graph = Graph::complete_random(5, &mut rng);

        assert_eq!(graph.node_count(), 5);
        for u in 0..5 {
            let edges = graph.neighbors(u);
            assert_eq!(edges.len(), 4);
            for &(v, weight) in edges {
                assert_ne!(v, u);
                assert!((0.0..1.0).contains(&weight));
            }
        }
    }

    #[test]
    fn test_complete_random_reproducible() {
        let a = Graph::complete_random(6, &mut SmallRng::seed_from_u64(42));
        let b = Graph::complete_random(6, &mut SmallRng::seed_from_u64(42));

        for u in 0..6 {
            assert_eq!(a.neighbors(u), b.neighbors(u));
        }
    }

    #[test]
    fn test_explicit_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 0.5);
        graph.add_edge(0, 2, 1.5);

        assert_eq!(graph.neighbors(0), &[(1, 0.5), (2, 1.5)]);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_display_lists_adjacency() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 0.25);

        let printed = graph.to_string();
        assert_eq!(printed, "Node 0: (1, 0.25)\nNode 1:\n");
    }
}
