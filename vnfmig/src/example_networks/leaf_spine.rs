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


//! # Leaf-Spine Network

use super::ExampleNetwork;
use crate::topology::{Flow, Ppdc, TopologyError};

/// Number of spine switches
const NUM_SPINES: usize = 2;
/// Number of hosts attached to every leaf
const HOSTS_PER_LEAF: usize = 2;

/// # Leaf-Spine Network
///
/// Two-tier data center topology with `N` leaf switches (at least 2), named `leaf00` up to
/// `leaf(N-1)`, and two spine switches `spine0` and `spine1`. Every leaf is connected to every
/// spine with a link of weight 2, and has two hosts `hXX_0` and `hXX_1`, attached with a link of
/// weight 1.
///
/// Every leaf `i` sends one flow from its first host to the second host of leaf `i + 1` (and the
/// last leaf sends to the first one).
#[derive(Debug)]
pub struct LeafSpineNet {}

impl ExampleNetwork for LeafSpineNet {
    fn net(size: usize) -> Result<Ppdc, TopologyError> {
        let mut net = Ppdc::new();

        let spines = (0..NUM_SPINES)
            .map(|i| net.add_switch(format!("spine{}", i)))
            .collect::<Result<Vec<_>, _>>()?;

        for l in 0..size.max(2) {
            let leaf = net.add_switch(format!("leaf{:02}", l))?;
            for spine in spines.iter() {
                net.add_link(leaf, *spine, 2.0)?;
            }
            for h in 0..HOSTS_PER_LEAF {
                let host = net.add_host(format!("h{:02}_{}", l, h))?;
                net.add_link(host, leaf, 1.0)?;
            }
        }

        Ok(net)
    }

    fn flows(net: &Ppdc, size: usize) -> Result<Vec<Flow>, TopologyError> {
        let size = size.max(2);
        (0..size)
            .map(|l| {
                Ok(Flow::new(
                    net.get_node_id(format!("h{:02}_0", l))?,
                    net.get_node_id(format!("h{:02}_1", (l + 1) % size))?,
                ))
            })
            .collect()
    }
}
