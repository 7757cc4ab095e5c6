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

//! # Multi-Flow Placement (TOP)

use super::{PlacementError, StrollSolver, Stroll};
use crate::migration::{MigrationError, VnfPlacement, VnfSlot};
use crate::topology::{Flow, GraphModel, LinkWeight};

use petgraph::algo::FloatMeasure;
use std::collections::BTreeMap;

/// Placement of the VNFs of a single flow, or the reason why the flow could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPlacement {
    /// The flow
    pub flow: Flow,
    /// Walk of the flow through its VNFs
    pub result: Result<Stroll, PlacementError>,
}

/// # TOP Solution
/// Placement of every flow, in the order in which the flows were given. The total cost is the sum
/// of the communication cost of every flow, and is infinite as soon as a single flow could not be
/// placed.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSolution {
    /// Placement of every flow
    pub placements: Vec<FlowPlacement>,
    /// Total communication cost
    pub total_cost: LinkWeight,
    /// Number of VNFs placed on every flow
    pub num_vnfs: usize,
}

impl TopSolution {
    pub(super) fn new(num_vnfs: usize) -> Self {
        Self { placements: Vec::new(), total_cost: 0.0, num_vnfs }
    }

    pub(super) fn push(&mut self, placement: FlowPlacement) {
        self.total_cost += match placement.result.as_ref() {
            Ok(stroll) => stroll.cost,
            Err(_) => LinkWeight::infinite(),
        };
        self.placements.push(placement);
    }

    /// Returns the placement of the given flow. If the flow occurs multiple times, the first one
    /// is returned.
    pub fn get(&self, flow: &Flow) -> Option<&FlowPlacement> {
        self.placements.iter().find(|p| p.flow == *flow)
    }

    /// Returns true if every flow was placed successfully.
    pub fn is_complete(&self) -> bool {
        self.placements.iter().all(|p| p.result.is_ok())
    }

    /// Returns all flows which could not be placed.
    pub fn failed_flows(&self) -> Vec<Flow> {
        self.placements.iter().filter(|p| p.result.is_err()).map(|p| p.flow).collect()
    }

    /// Number of flows
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if no flow is part of the solution
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Transform the solution into a placement of individual VNFs. The VNF at position `i`
    /// (starting at 0) of `flow` is stored at `VnfSlot { flow, occurrence, vnf: i }`, where
    /// `occurrence` counts the copies of `flow` earlier in the list. Fails if any flow could not be
    /// placed.
    pub fn vnf_placement(&self) -> Result<VnfPlacement, MigrationError> {
        self.vnf_placement_by(|flow| *flow)
    }

    /// Same as [`TopSolution::vnf_placement`], but the VNFs of every flow are stored under the flow
    /// returned by `key`.
    pub fn vnf_placement_by<F>(&self, key: F) -> Result<VnfPlacement, MigrationError>
    where
        F: Fn(&Flow) -> Flow,
    {
        let mut placement = VnfPlacement::new();
        let mut occurrences: BTreeMap<Flow, usize> = BTreeMap::new();
        for p in self.placements.iter() {
            let stroll =
                p.result.as_ref().map_err(|_| MigrationError::IncompletePlacement(p.flow))?;
            let flow = key(&p.flow);
            let occurrence = occurrences.entry(flow).or_insert(0);
            for (i, node) in stroll.vnf_hosts().iter().enumerate() {
                placement.insert(VnfSlot::with_occurrence(flow, *occurrence, i), *node);
            }
            *occurrence += 1;
        }
        Ok(placement)
    }
}

/// Solve TOP for every flow independently, using the default solver configuration.
pub fn solve_top_multi<G: GraphModel>(net: &G, flows: &[Flow], num_vnfs: usize) -> TopSolution {
    StrollSolver::new(net).solve_all(flows, num_vnfs)
}
