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

//! # Traffic-Optimal Migration (TOM)
//!
//! When the traffic changes, the optimal placement of the VNFs changes as well. This module
//! computes how the VNFs are moved from the old placement to the new one, and what this costs.
//! Moving a VNF over a link costs the weight of the link, multiplied with the migration
//! coefficient `µ`.
//!
//! - **[`estimate_migration_cost`]**: Static estimate of the total migration cost, as the sum of
//!   the shortest path lengths between the old and the new node of every VNF.
//!
//! - **[`MigrationScheduler`]**: Moves all VNFs in synchronous rounds, one link per round, along a
//!   shortest path towards their target. The convenience function [`migrate`] uses the default
//!   round limit.
//!
//! - **[`TomOrchestrator`]**: Computes the placement before and after a
//!   [traffic shift](TrafficShift), and migrates the VNFs from the old to the new placement. The
//!   convenience function [`run_tom`] uses the default configuration, and reverses the order of
//!   the flows as traffic shift.
//!
//! VNFs are identified by their [`VnfSlot`], i.e., the flow they serve and the position of the VNF
//! along the walk of the flow. The order of the flows in the list does not matter. See
//! [`TopSolution::vnf_placement`](crate::placement::TopSolution::vnf_placement).

use crate::topology::{Flow, GraphModel, NodeId, TopologyError};
use std::collections::BTreeMap;
use thiserror::Error;

mod cost;
mod orchestrator;
mod scheduler;
mod traffic_shift;

pub use cost::estimate_migration_cost;
pub use orchestrator::{run_tom, TomOrchestrator, TomSolution};
pub use scheduler::{migrate, Migration, MigrationScheduler};
pub use traffic_shift::{ExplicitFlows, ReverseEndpoints, ReverseFlowOrder, TrafficShift};

/// Identification of a single VNF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VnfSlot {
    /// Flow served by the VNF
    pub flow: Flow,
    /// Distinguishes multiple copies of the same flow. The first copy in the list of flows has
    /// occurrence 0, the second one occurrence 1, and so on.
    pub occurrence: usize,
    /// Position of the VNF along the walk of the flow, starting at 0
    pub vnf: usize,
}

impl VnfSlot {
    /// Create a new VNF slot on the first copy of `flow`.
    pub fn new(flow: Flow, vnf: usize) -> Self {
        Self { flow, occurrence: 0, vnf }
    }

    /// Create a new VNF slot on the given copy of `flow`.
    pub fn with_occurrence(flow: Flow, occurrence: usize, vnf: usize) -> Self {
        Self { flow, occurrence, vnf }
    }
}

/// Mapping of every VNF to the node hosting it
pub type VnfPlacement = BTreeMap<VnfSlot, NodeId>;

/// Errors during the migration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MigrationError {
    /// Error propagated from the topology
    #[error("Topology Error: {0}")]
    Topology(#[from] TopologyError),
    /// The old and the new placement do not contain the same VNFs
    #[error("The placements do not contain the same VNFs. Mismatched: {0:?}")]
    PlacementKeyMismatch(Vec<VnfSlot>),
    /// The placement of a flow has failed, and its VNFs cannot be migrated
    #[error("The VNFs of {0:?} are not placed")]
    IncompletePlacement(Flow),
    /// The migration did not finish within the allowed number of rounds
    #[error("The migration did not finish after {rounds} rounds")]
    NoConvergence {
        /// Number of rounds performed
        rounds: usize,
    },
}

/// Check that both placements contain exactly the same VNFs, and that all nodes are part of the
/// graph.
pub(crate) fn check_placements<G: GraphModel>(
    net: &G,
    old: &VnfPlacement,
    new: &VnfPlacement,
) -> Result<(), MigrationError> {
    let mismatched: Vec<VnfSlot> = old
        .keys()
        .filter(|k| !new.contains_key(*k))
        .chain(new.keys().filter(|k| !old.contains_key(*k)))
        .copied()
        .collect();
    if !mismatched.is_empty() {
        return Err(MigrationError::PlacementKeyMismatch(mismatched));
    }
    for node in old.values().chain(new.values()) {
        if !net.contains_node(*node) {
            return Err(TopologyError::InvalidNode(*node).into());
        }
    }
    Ok(())
}
