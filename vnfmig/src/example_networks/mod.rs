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


//! # Example Networks
//!
//! Prepared PPDC topologies together with a set of flows, used for testing and by the command
//! line. Some of them can be scaled to arbitrary size.

use crate::topology::{Flow, Ppdc, TopologyError};

mod reference_net;
pub use reference_net::ReferenceNet;

mod chain_net;
pub use chain_net::ChainNet;

mod leaf_spine;
pub use leaf_spine::LeafSpineNet;

mod random;
pub use random::random_ppdc;

/// Trait for easier access to example networks.
pub trait ExampleNetwork {
    /// Get the topology of the chosen size. Networks with a fixed size ignore the argument.
    fn net(size: usize) -> Result<Ppdc, TopologyError>;
    /// Get the flows running on the network
    fn flows(net: &Ppdc, size: usize) -> Result<Vec<Flow>, TopologyError>;
}
