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


//! # Reference Network

use super::ExampleNetwork;
use crate::topology::{Flow, Ppdc, TopologyError};

/// # Reference Network
///
/// Small PPDC with four hosts and five switches. The switches form a line, and every host is
/// connected to one of them:
///
/// ```text
///  h1        h2        h3                  h4
///  |1        |1        |1                  |1
///  s1 --2--  s2 --2--  s3 --3--  s4 --3--  s5
/// ```
///
/// Hosts are added first, such that `h1` to `h4` have the indices 0 to 3, and `s1` to `s5` have
/// the indices 4 to 8. The flows are `h1 => h4` and `h2 => h3`.
#[derive(Debug)]
pub struct ReferenceNet {}

impl ExampleNetwork for ReferenceNet {
    fn net(_size: usize) -> Result<Ppdc, TopologyError> {
        let mut net = Ppdc::new();

        let h1 = net.add_host("h1")?;
        let h2 = net.add_host("h2")?;
        let h3 = net.add_host("h3")?;
        let h4 = net.add_host("h4")?;
        let s1 = net.add_switch("s1")?;
        let s2 = net.add_switch("s2")?;
        let s3 = net.add_switch("s3")?;
        let s4 = net.add_switch("s4")?;
        let s5 = net.add_switch("s5")?;

        net.add_link(h1, s1, 1.0)?;
        net.add_link(h2, s2, 1.0)?;
        net.add_link(s1, s2, 2.0)?;
        net.add_link(s2, s3, 2.0)?;
        net.add_link(s3, s4, 3.0)?;
        net.add_link(s4, s5, 3.0)?;
        net.add_link(h3, s3, 1.0)?;
        net.add_link(h4, s5, 1.0)?;

        Ok(net)
    }

    fn flows(net: &Ppdc, _size: usize) -> Result<Vec<Flow>, TopologyError> {
        Ok(vec![
            Flow::new(net.get_node_id("h1")?, net.get_node_id("h4")?),
            Flow::new(net.get_node_id("h2")?, net.get_node_id("h3")?),
        ])
    }
}
