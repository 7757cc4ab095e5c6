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

//! # TOM Orchestrator

use super::{Migration, MigrationScheduler, ReverseFlowOrder, TrafficShift, VnfPlacement, VnfSlot};
use crate::placement::{SolverConfig, StrollSolver, TopSolution};
use crate::topology::{Flow, GraphModel, LinkWeight, NodeId};
use crate::Error;

use log::*;
use std::collections::BTreeMap;

/// Result of the traffic-optimal migration
#[derive(Debug, Clone, PartialEq)]
pub struct TomSolution {
    /// Placement before the traffic shift
    pub initial: TopSolution,
    /// VNFs before the migration, stored under the slots they take over after the traffic shift
    pub initial_placement: VnfPlacement,
    /// Flows after the traffic shift
    pub shifted_flows: Vec<Flow>,
    /// Placement after the traffic shift
    pub shifted: TopSolution,
    /// Migration from the initial to the shifted placement
    pub migration: Migration,
    /// Communication cost after the shift plus the migration cost
    pub total_cost: LinkWeight,
}

impl TomSolution {
    /// Placement of all VNFs after the migration
    pub fn final_placement(&self) -> &VnfPlacement {
        &self.migration.final_placement
    }

    /// Path traveled by every VNF during the migration
    pub fn migration_paths(&self) -> &BTreeMap<VnfSlot, Vec<NodeId>> {
        &self.migration.paths
    }

    /// Communication cost after the traffic shift
    pub fn communication_cost(&self) -> LinkWeight {
        self.shifted.total_cost
    }

    /// Communication cost before the traffic shift. This cost is not part of the total cost.
    pub fn initial_communication_cost(&self) -> LinkWeight {
        self.initial.total_cost
    }

    /// Cost of the migration
    pub fn migration_cost(&self) -> LinkWeight {
        self.migration.cost
    }
}

/// # TOM Orchestrator
///
/// Solves the traffic-optimal migration in four steps:
///
/// 1. Compute the placement of the current flows.
/// 2. Apply the [`TrafficShift`] to get the new flows, and compute their placement.
/// 3. Migrate the VNFs from the first placement to the second one, using the
///    [`MigrationScheduler`]. The VNFs of every flow move to the walk of its
///    [successor](TrafficShift::successor).
/// 4. The total cost is the communication cost of the new flows plus the migration cost.
#[derive(Debug)]
pub struct TomOrchestrator<'a, G, S = ReverseFlowOrder> {
    net: &'a G,
    migration_coeff: LinkWeight,
    solver_config: SolverConfig,
    shift: S,
    max_rounds: Option<usize>,
}

impl<'a, G> TomOrchestrator<'a, G, ReverseFlowOrder>
where
    G: GraphModel,
{
    /// Create a new orchestrator, using the default solver configuration, and reversing the order
    /// of the flows as traffic shift.
    pub fn new(net: &'a G, migration_coeff: LinkWeight) -> Self {
        Self {
            net,
            migration_coeff,
            solver_config: SolverConfig::default(),
            shift: ReverseFlowOrder,
            max_rounds: None,
        }
    }
}

impl<'a, G, S> TomOrchestrator<'a, G, S>
where
    G: GraphModel,
    S: TrafficShift,
{
    /// Use a different configuration for computing the placements.
    pub fn with_config(mut self, solver_config: SolverConfig) -> Self {
        self.solver_config = solver_config;
        self
    }

    /// Use a different traffic shift.
    pub fn with_shift<T: TrafficShift>(self, shift: T) -> TomOrchestrator<'a, G, T> {
        TomOrchestrator {
            net: self.net,
            migration_coeff: self.migration_coeff,
            solver_config: self.solver_config,
            shift,
            max_rounds: self.max_rounds,
        }
    }

    /// Limit the number of migration rounds.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Compute the placements and the migration for the given flows, each with `num_vnfs` VNFs.
    pub fn run(&self, flows: &[Flow], num_vnfs: usize) -> Result<TomSolution, Error> {
        let solver = StrollSolver::with_config(self.net, self.solver_config);

        info!("Computing initial VNF placement");
        let initial = solver.solve_all(flows, num_vnfs);
        let initial_placement = initial.vnf_placement_by(|flow| self.shift.successor(flow))?;
        info!("Initial communication cost: {}", initial.total_cost);

        info!("Computing VNF placement after the traffic shift");
        let shifted_flows = self.shift.shift(flows);
        let shifted = solver.solve_all(&shifted_flows, num_vnfs);
        let new_placement = shifted.vnf_placement()?;
        info!("Communication cost after the traffic shift: {}", shifted.total_cost);

        info!("Performing VNF migration");
        let mut scheduler = MigrationScheduler::new(self.net, self.migration_coeff);
        if let Some(max_rounds) = self.max_rounds {
            scheduler = scheduler.with_max_rounds(max_rounds);
        }
        let migration = scheduler.migrate(&initial_placement, &new_placement)?;

        let total_cost = shifted.total_cost + migration.cost;
        info!(
            "Total cost: {} (communication: {}, migration: {})",
            total_cost, shifted.total_cost, migration.cost
        );

        Ok(TomSolution {
            initial,
            initial_placement,
            shifted_flows,
            shifted,
            migration,
            total_cost,
        })
    }
}

/// Solve TOM for the given flows, with `num_vnfs` VNFs on each flow, simulating the traffic shift
/// by reversing the order of the flows.
pub fn run_tom<G: GraphModel>(
    net: &G,
    flows: &[Flow],
    num_vnfs: usize,
    migration_coeff: LinkWeight,
) -> Result<TomSolution, Error> {
    TomOrchestrator::new(net, migration_coeff).run(flows, num_vnfs)
}
