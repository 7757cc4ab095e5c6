// VnfMig: Traffic-Optimal VNF Placement and Migration
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

#![deny(missing_docs, missing_debug_implementations)]

//! # Topology
//!
//! This module contains the graph model of the PPDC (the network of hosts and switches), on which
//! VNFs are placed and migrated. All algorithms of this crate only access the topology through the
//! [`GraphModel`] trait, which is implemented by [`Ppdc`].
//!
//! ## Example usage
//!
//! ```rust
//! use vnfmig::topology::{GraphModel, Ppdc};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut net = Ppdc::new();
//!
//!     let h1 = net.add_host("h1")?;
//!     let s1 = net.add_switch("s1")?;
//!     let s2 = net.add_switch("s2")?;
//!     let h2 = net.add_host("h2")?;
//!
//!     net.add_link(h1, s1, 1.0)?;
//!     net.add_link(s1, s2, 2.0)?;
//!     net.add_link(s2, h2, 1.0)?;
//!
//!     assert_eq!(net.shortest_path(h1, h2)?, vec![h1, s1, s2, h2]);
//!     assert_eq!(net.shortest_path_length(h1, h2)?, 4.0);
//!
//!     Ok(())
//! }
//! ```

mod ppdc;
pub mod printer;
mod types;

pub use ppdc::Ppdc;
pub use types::{Flow, LinkWeight, NodeData, NodeId, NodeType, PpdcGraph, TopologyError};

/// # Graph Model
///
/// Interface through which the placement and migration algorithms access the topology. The graph
/// is undirected, and all link weights are finite and non-negative. Node identifiers must be
/// dense, i.e., all nodes have an index in `0..node_count()`. The algorithms never modify the
/// graph.
pub trait GraphModel {
    /// Number of nodes in the graph
    fn node_count(&self) -> usize;

    /// All nodes of the graph, ordered by their index.
    fn nodes(&self) -> Vec<NodeId>;

    /// Returns true if the node is part of the graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// All neighbors of the node.
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, TopologyError>;

    /// Weight of the link between `a` and `b`, or an error if the two nodes are not adjacent.
    fn edge_weight(&self, a: NodeId, b: NodeId) -> Result<LinkWeight, TopologyError>;

    /// Sequence of nodes on a shortest (weighted) path from `a` to `b`, including both `a` and
    /// `b`. If `a == b`, the path only contains `a`.
    fn shortest_path(&self, a: NodeId, b: NodeId) -> Result<Vec<NodeId>, TopologyError>;

    /// Length (sum of all link weights) of the shortest path from `a` to `b`.
    fn shortest_path_length(&self, a: NodeId, b: NodeId) -> Result<LinkWeight, TopologyError>;
}
