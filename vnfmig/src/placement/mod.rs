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

//! # Traffic-Optimal Placement (TOP)
//!
//! Given a flow from a source to a destination, and a number `n` of VNFs, the placement searches
//! the walk (stroll) of exactly `n + 1` links starting at the source, which has the minimal
//! communication cost. Every inner node of the walk hosts one VNF. Nodes may be visited multiple
//! times.
//!
//! - **[`StrollSolver`]**: Layered dynamic program solving the problem for a single flow (TOP-1).
//!   The convenience function [`solve_top1`] uses the default [`SolverConfig`].
//!
//! - **[`TopSolution`]**: Result of solving TOP-1 for every flow independently, returned by
//!   [`solve_top_multi`] or [`StrollSolver::solve_all`].
//!
//! ## End of the walk
//!
//! The solver can be configured in two ways, see [`DestinationMode`]. By default, the walk may
//! end at any node of the graph (the best egress point after `n` VNFs is chosen), and the
//! destination of the flow does not constrain the result. If the destination is pinned, the walk
//! must end at the destination of the flow.

use crate::topology::{LinkWeight, NodeId, TopologyError};
use thiserror::Error;

mod multi_flow;
mod stroll;

pub use multi_flow::{solve_top_multi, FlowPlacement, TopSolution};
pub use stroll::{solve_top1, walk_cost, StrollSolver};

/// Default upper limit on the number of entries in the dynamic programming table.
pub const DEFAULT_MAX_TABLE_ENTRIES: usize = 1 << 24;

/// Choice of the node at which the walk of a flow ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationMode {
    /// The walk may end at any node. The node with the cheapest walk is chosen, and on ties, the
    /// node with the smallest index.
    Free,
    /// The walk must end at the destination of the flow.
    Pinned,
}

impl Default for DestinationMode {
    fn default() -> Self {
        Self::Free
    }
}

/// Configuration of the [`StrollSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Where the walk is allowed to end
    pub destination: DestinationMode,
    /// Maximum number of entries of the table, computed as `(n + 2) * node_count`.
    pub max_table_entries: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            destination: DestinationMode::default(),
            max_table_entries: DEFAULT_MAX_TABLE_ENTRIES,
        }
    }
}

impl SolverConfig {
    /// Configuration where the walk must end at the destination of the flow.
    pub fn pinned() -> Self {
        Self { destination: DestinationMode::Pinned, ..Default::default() }
    }
}

/// # Stroll
/// Walk of a single flow through all of its VNFs. The path contains `n + 2` nodes: the source,
/// the `n` nodes hosting the VNFs (in order), and the node at which the walk ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroll {
    /// Communication cost of the walk (sum of all link weights)
    pub cost: LinkWeight,
    /// Sequence of nodes
    pub path: Vec<NodeId>,
}

impl Stroll {
    /// Number of VNFs placed along the walk
    pub fn num_vnfs(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// Nodes hosting the VNFs, in the order in which the flow traverses them.
    pub fn vnf_hosts(&self) -> &[NodeId] {
        if self.path.len() < 2 {
            &[]
        } else {
            &self.path[1..self.path.len() - 1]
        }
    }

    /// Node at which the walk ends
    pub fn end(&self) -> Option<NodeId> {
        self.path.last().copied()
    }
}

/// Errors while computing a placement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Error propagated from the topology
    #[error("Topology Error: {0}")]
    Topology(#[from] TopologyError),
    /// At least one VNF must be placed
    #[error("The number of VNFs must be at least 1")]
    NoVnfs,
    /// The dynamic programming table would exceed the configured limit
    #[error("The table would have {entries} entries, but only {limit} are allowed")]
    TableTooLarge {
        /// Required number of entries
        entries: usize,
        /// Configured limit
        limit: usize,
    },
    /// No walk with the required number of links exists
    #[error("No walk of {edges} links exists from {start:?} (to {end:?})")]
    Unreachable {
        /// Start of the walk
        start: NodeId,
        /// Required end of the walk, if pinned
        end: Option<NodeId>,
        /// Required number of links
        edges: usize,
    },
}
