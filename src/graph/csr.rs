//! Compressed Sparse Row (CSR) snapshot of a graph
//!
//! Ranking iterates over every vertex's neighbours many times. Freezing the
//! graph into CSR once per training run keeps that loop on contiguous memory,
//! whatever the backing.

use super::TextGraph;

/// A frozen graph in Compressed Sparse Row format.
///
/// Only edges with positive weight are kept, in ascending neighbour index.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (neighbour nodes) for each edge
    pub col_idx: Vec<usize>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total edge weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Snapshot any graph backing into CSR format
    pub fn from_graph<G: TextGraph>(graph: &G) -> Self {
        let num_nodes = graph.vertex_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for node in 0..num_nodes {
            let edges = graph.neighbors_at(node);
            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbours of a node
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[node];
        let end = self.row_ptr[node + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Number of neighbours with positive weight
    pub fn degree(&self, node: usize) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// Total edge weight of a node
    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.total_weight[node]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
