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

//! # Migration Scheduler

use super::{check_placements, MigrationError, VnfPlacement, VnfSlot};
use crate::topology::{GraphModel, LinkWeight, NodeId};

use log::*;
use std::collections::{BTreeMap, VecDeque};

/// Result of a migration
#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    /// Total migration cost
    pub cost: LinkWeight,
    /// Placement after the migration. This is always equal to the target placement.
    pub final_placement: VnfPlacement,
    /// Sequence of nodes visited by every VNF, starting at its old node.
    pub paths: BTreeMap<VnfSlot, Vec<NodeId>>,
    /// Number of rounds needed to migrate all VNFs.
    pub rounds: usize,
}

impl Migration {
    /// Total number of links traversed by all VNFs
    pub fn num_steps(&self) -> usize {
        self.paths.values().map(|p| p.len() - 1).sum()
    }
}

/// # Migration Scheduler
///
/// Moves all VNFs from their old node to their new node in synchronous rounds. Before the first
/// round, the scheduler computes a shortest path from the old to the new node of every VNF. In
/// every round, each VNF which has not yet reached its target moves over the next link of its
/// path. This costs the weight of the link multiplied with the migration coefficient. The migration
/// is done as soon as every VNF is at its target.
///
/// Since every VNF follows a single shortest path, the total cost is equal to the result of
/// [`estimate_migration_cost`](super::estimate_migration_cost), even if some links have zero
/// weight. The number of rounds is given by the VNF whose path has the most links, and a path never
/// visits a node twice.
///
/// Before any VNF is moved, the scheduler checks that both placements contain the same VNFs, that
/// all nodes exist, and that every VNF can reach its target. If any of this fails, no VNF is
/// moved.
#[derive(Debug)]
pub struct MigrationScheduler<'a, G> {
    net: &'a G,
    migration_coeff: LinkWeight,
    max_rounds: Option<usize>,
}

impl<'a, G> MigrationScheduler<'a, G>
where
    G: GraphModel,
{
    /// Create a new scheduler. The number of rounds is limited by the number of nodes in the
    /// graph, since no path of a VNF can have more links than that.
    pub fn new(net: &'a G, migration_coeff: LinkWeight) -> Self {
        Self { net, migration_coeff, max_rounds: None }
    }

    /// Limit the number of rounds to perform before giving up.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Maximum number of rounds
    pub fn max_rounds(&self) -> usize {
        self.max_rounds.unwrap_or_else(|| self.net.node_count())
    }

    /// Migration coefficient (µ)
    pub fn migration_coeff(&self) -> LinkWeight {
        self.migration_coeff
    }

    /// Migrate all VNFs from the `old` to the `new` placement.
    pub fn migrate(
        &self,
        old: &VnfPlacement,
        new: &VnfPlacement,
    ) -> Result<Migration, MigrationError> {
        check_placements(self.net, old, new)?;
        // remaining nodes on the path of every VNF, without its current node
        let mut routes: BTreeMap<VnfSlot, VecDeque<NodeId>> = BTreeMap::new();
        for (slot, node) in old.iter() {
            let mut route: VecDeque<NodeId> = self.net.shortest_path(*node, new[slot])?.into();
            route.pop_front();
            routes.insert(*slot, route);
        }

        let max_rounds = self.max_rounds();
        let mut current = old.clone();
        let mut paths: BTreeMap<VnfSlot, Vec<NodeId>> =
            old.iter().map(|(slot, node)| (*slot, vec![*node])).collect();
        let mut cost: LinkWeight = 0.0;
        let mut rounds: usize = 0;

        while current != *new {
            if rounds >= max_rounds {
                warn!("Migration did not finish after {} rounds", rounds);
                return Err(MigrationError::NoConvergence { rounds });
            }
            rounds += 1;
            let mut moved: usize = 0;

            for (slot, node) in current.iter_mut() {
                let next = match routes.get_mut(slot).and_then(|route| route.pop_front()) {
                    Some(next) => next,
                    None => continue,
                };
                let step_cost = self.migration_coeff * self.net.edge_weight(*node, next)?;
                trace!("{:?}: {:?} -> {:?} (cost {})", slot, node, next, step_cost);
                cost += step_cost;
                *node = next;
                paths.entry(*slot).or_default().push(next);
                moved += 1;
            }

            debug!("round {}: moved {} VNFs, total cost: {}", rounds, moved, cost);
        }

        info!("Migrated {} VNFs in {} rounds with cost {}", old.len(), rounds, cost);
        Ok(Migration { cost, final_placement: current, paths, rounds })
    }
}

/// Migrate all VNFs from `old` to `new`, where moving a VNF over a link costs `migration_coeff`
/// times the link weight.
pub fn migrate<G: GraphModel>(
    net: &G,
    old: &VnfPlacement,
    new: &VnfPlacement,
    migration_coeff: LinkWeight,
) -> Result<Migration, MigrationError> {
    MigrationScheduler::new(net, migration_coeff).migrate(old, new)
}
