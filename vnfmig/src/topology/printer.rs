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

//! # Helper (printer) functions for the Topology
//! Module containing helper functions to get formatted strings of flows, paths and placements,
//! with the names of the nodes inserted.

use crate::migration::{VnfPlacement, VnfSlot};
use crate::placement::TopSolution;
use crate::topology::{Flow, NodeId, Ppdc, TopologyError};

use std::collections::BTreeMap;

/// Returns the formatted string of a flow, e.g., `h1 => h4`.
pub fn flow(net: &Ppdc, flow: &Flow) -> Result<String, TopologyError> {
    Ok(format!(
        "{} => {}",
        net.get_node_name(flow.source)?,
        net.get_node_name(flow.destination)?
    ))
}

/// Returns the formatted string of a path, e.g., `h1 -> s1 -> s2`.
pub fn path(net: &Ppdc, path: &[NodeId]) -> Result<String, TopologyError> {
    Ok(path.iter().map(|n| net.get_node_name(*n)).collect::<Result<Vec<_>, _>>()?.join(" -> "))
}

/// Returns the formatted string of a VNF slot, e.g., `h1 => h4/vnf2`. Further copies of the same
/// flow are marked with their occurrence, e.g., `h1 => h4#1/vnf2`.
pub fn vnf_slot(net: &Ppdc, slot: &VnfSlot) -> Result<String, TopologyError> {
    let flow = flow(net, &slot.flow)?;
    Ok(match slot.occurrence {
        0 => format!("{}/vnf{}", flow, slot.vnf),
        n => format!("{}#{}/vnf{}", flow, n, slot.vnf),
    })
}

/// Get a vector of strings, one line for each VNF, containing the node it is placed on.
pub fn vnf_placement(net: &Ppdc, placement: &VnfPlacement) -> Result<Vec<String>, TopologyError> {
    placement
        .iter()
        .map(|(slot, node)| {
            Ok(format!("{}: {}", vnf_slot(net, slot)?, net.get_node_name(*node)?))
        })
        .collect()
}

/// Get a vector of strings, one line for each VNF, containing the path it has traveled.
pub fn migration_paths(
    net: &Ppdc,
    paths: &BTreeMap<VnfSlot, Vec<NodeId>>,
) -> Result<Vec<String>, TopologyError> {
    paths
        .iter()
        .map(|(slot, p)| Ok(format!("{}: {}", vnf_slot(net, slot)?, path(net, p)?)))
        .collect()
}

/// Get a vector of strings, one line for each flow, with the chosen walk and its cost, or the
/// reason why no walk was found.
pub fn top_solution(net: &Ppdc, solution: &TopSolution) -> Result<Vec<String>, TopologyError> {
    solution
        .placements
        .iter()
        .map(|p| {
            Ok(match &p.result {
                Ok(stroll) => format!(
                    "{}: {} (cost: {})",
                    flow(net, &p.flow)?,
                    path(net, &stroll.path)?,
                    stroll.cost
                ),
                Err(e) => format!("{}: {}", flow(net, &p.flow)?, e),
            })
        })
        .collect()
}
