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

//! Migration cost estimation

use super::{check_placements, MigrationError, VnfPlacement};
use crate::topology::{GraphModel, LinkWeight};

use log::*;

/// Compute the overall cost of moving every VNF from its node in `old` to its node in `new`, given
/// by `migration_coeff` times the length of the shortest path between both nodes. This does not
/// consider how the migration is scheduled.
///
/// Both placements must contain the same VNFs. If not, [`MigrationError::PlacementKeyMismatch`] is
/// returned.
pub fn estimate_migration_cost<G: GraphModel>(
    net: &G,
    old: &VnfPlacement,
    new: &VnfPlacement,
    migration_coeff: LinkWeight,
) -> Result<LinkWeight, MigrationError> {
    check_placements(net, old, new)?;
    let mut cost: LinkWeight = 0.0;
    for (slot, current) in old.iter() {
        let target = new[slot];
        let distance = net.shortest_path_length(*current, target)?;
        trace!("{:?}: {:?} -> {:?} has distance {}", slot, current, target, distance);
        cost += migration_coeff * distance;
    }
    Ok(cost)
}
