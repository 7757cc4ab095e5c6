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


//! # Chain Network

use super::ExampleNetwork;
use crate::topology::{Flow, Ppdc, TopologyError};

/// # Chain Network
///
/// This network consists of a single chain (line) of `N` switches (at least 1), named `s00` up to
/// `s(N-1)`. Every switch `si` has a single host `hi` attached with a link of weight 1, while
/// consecutive switches are connected with a link of weight 2.
///
/// The flows connect the hosts from the outside in: `h00 => h(N-1)`, `h01 => h(N-2)`, and so on.
/// If `N` is 1, the only flow goes from `h00` to itself.
#[derive(Debug)]
pub struct ChainNet {}

impl ExampleNetwork for ChainNet {
    fn net(size: usize) -> Result<Ppdc, TopologyError> {
        let mut net = Ppdc::new();

        let mut last_s = None;
        for i in 0..size.max(1) {
            let s = net.add_switch(format!("s{:02}", i))?;
            let h = net.add_host(format!("h{:02}", i))?;
            net.add_link(h, s, 1.0)?;
            if let Some(last_s) = last_s {
                net.add_link(last_s, s, 2.0)?;
            }
            last_s = Some(s);
        }

        Ok(net)
    }

    fn flows(net: &Ppdc, size: usize) -> Result<Vec<Flow>, TopologyError> {
        let size = size.max(1);
        (0..(size + 1) / 2)
            .map(|i| {
                Ok(Flow::new(
                    net.get_node_id(format!("h{:02}", i))?,
                    net.get_node_id(format!("h{:02}", size - 1 - i))?,
                ))
            })
            .collect()
    }
}
