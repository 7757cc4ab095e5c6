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


//! # Random PPDC

use crate::topology::{GraphModel, NodeType, Ppdc, TopologyError};

use log::*;
use rand::prelude::*;

/// Generate a random connected PPDC with `num_nodes` nodes (at least 1), using the given seed.
///
/// The nodes are named `n00`, `n01`, ... and are hosts or switches with equal probability. First,
/// a random spanning tree is built by connecting every node to one of the nodes before it. Then,
/// up to `extra_links` additional links are added between random pairs of nodes which are not yet
/// adjacent. All link weights are integers between 1 and 5. The same seed always results in the
/// same topology.
pub fn random_ppdc(
    num_nodes: usize,
    extra_links: usize,
    seed: u64,
) -> Result<Ppdc, TopologyError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Ppdc::new();

    let num_nodes = num_nodes.max(1);
    for i in 0..num_nodes {
        let node_type = if rng.gen_bool(0.5) { NodeType::Host } else { NodeType::Switch };
        net.add_node(format!("n{:02}", i), node_type)?;
    }

    let nodes = net.nodes();
    for i in 1..num_nodes {
        let parent: usize = rng.gen_range(0, i);
        let weight: u32 = rng.gen_range(1, 6);
        net.add_link(nodes[parent], nodes[i], weight.into())?;
    }

    let max_links = num_nodes * (num_nodes - 1) / 2;
    let mut added = 0;
    while added < extra_links && net.num_links() < max_links {
        let a: usize = rng.gen_range(0, num_nodes);
        let b: usize = rng.gen_range(0, num_nodes);
        if a == b || net.edge_weight(nodes[a], nodes[b]).is_ok() {
            continue;
        }
        let weight: u32 = rng.gen_range(1, 6);
        net.add_link(nodes[a], nodes[b], weight.into())?;
        added += 1;
    }

    trace!("generated random PPDC with {} nodes and {} links", num_nodes, net.num_links());
    Ok(net)
}
