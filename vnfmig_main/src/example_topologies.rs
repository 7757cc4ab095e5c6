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


use vnfmig::example_networks::{self, ExampleNetwork};
use vnfmig::topology::{Flow, GraphModel, Ppdc};

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Topology {
    Reference,
    Chain,
    LeafSpine,
    Random,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topology::Reference => write!(f, "ReferenceNet"),
            Topology::Chain => write!(f, "ChainNet"),
            Topology::LeafSpine => write!(f, "LeafSpineNet"),
            Topology::Random => write!(f, "Random"),
        }
    }
}

/// Build the example topology of the given size, together with its default flows. The random
/// topology has `size` nodes and `size / 2` additional links, and its only flow goes from the first
/// to the last node.
pub fn example_networks_scenario(
    topology: Topology,
    size: usize,
    seed: u64,
) -> Result<(Ppdc, Vec<Flow>), Box<dyn Error>> {
    Ok(match topology {
        Topology::Reference => scenario::<example_networks::ReferenceNet>(size)?,
        Topology::Chain => scenario::<example_networks::ChainNet>(size)?,
        Topology::LeafSpine => scenario::<example_networks::LeafSpineNet>(size)?,
        Topology::Random => {
            let net = example_networks::random_ppdc(size, size / 2, seed)?;
            let nodes = net.nodes();
            let flows = match (nodes.first(), nodes.last()) {
                (Some(first), Some(last)) => vec![Flow::new(*first, *last)],
                _ => Vec::new(),
            };
            (net, flows)
        }
    })
}

fn scenario<T: ExampleNetwork>(size: usize) -> Result<(Ppdc, Vec<Flow>), Box<dyn Error>> {
    let net = T::net(size)?;
    let flows = T::flows(&net, size)?;
    Ok((net, flows))
}
