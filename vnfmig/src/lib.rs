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


#![deny(missing_docs)]

//! # VnfMig: Traffic-Optimal VNF Placement and Migration
//! This is a library for placing chains of virtual network functions (VNFs) along the traffic
//! flows of virtual machines in a data center (the PPDC, a network of hosts and switches), and for
//! migrating the VNFs when the traffic changes.
//!
//! ## Problem Statement
//! Given
//! - a weighted, undirected graph of hosts and switches,
//! - a set of flows, each from a source host to a destination host,
//! - a number `n` of VNFs, which every flow needs to traverse in order,
//!
//! find, for every flow, the nodes hosting its `n` VNFs, such that the communication cost (the sum
//! of all link weights traversed by the flow) is minimized (**TOP**). When the flows change, find
//! the new optimal placement, and move every VNF from its old node to its new node, minimizing
//! the communication cost plus the migration cost (**TOM**).
//!
//! ## Structure
//!
//! - **[`Topology`](topology)**: Graph model of the PPDC. The algorithms access the graph only
//!   through the [`GraphModel`](topology::GraphModel) trait, implemented by
//!   [`Ppdc`](topology::Ppdc).
//!
//! - **[`Placement`](placement)**: Dynamic program computing the cheapest walk of a flow through
//!   all of its VNFs ([`StrollSolver`](placement::StrollSolver)), and the placement of multiple
//!   independent flows ([`TopSolution`](placement::TopSolution)).
//!
//! - **[`Migration`](migration)**: Estimation of the migration cost, a round-based
//!   [`MigrationScheduler`](migration::MigrationScheduler), and the
//!   [`TomOrchestrator`](migration::TomOrchestrator), which combines placement and migration for
//!   a given [`TrafficShift`](migration::TrafficShift).
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared topologies and flows. Some
//!   of these networks can be scaled to arbitrary size.
//!
//! - **[`TopologyZoo`](topology_zoo)**: Functions to read a topology from a `GML` file, as
//!   downloaded from [TopologyZoo](http://www.topology-zoo.org/dataset.html).
//!
//! ## Usage
//!
//! ```
//! use vnfmig::example_networks::{ExampleNetwork, ReferenceNet};
//! use vnfmig::migration::{ReverseEndpoints, TomOrchestrator};
//! use vnfmig::{run_tom, Error};
//!
//! fn main() -> Result<(), Error> {
//!     // prepare the network and the flows
//!     let net = ReferenceNet::net(0)?;
//!     let flows = ReferenceNet::flows(&net, 0)?;
//!
//!     // place 3 VNFs on every flow, and reverse the order of the flows. Every flow keeps its
//!     // walk, so no VNF has to move.
//!     let solution = run_tom(&net, &flows, 3, 10.0)?;
//!     assert_eq!(solution.communication_cost(), 8.0);
//!     assert_eq!(solution.migration_cost(), 0.0);
//!     assert_eq!(solution.total_cost, 8.0);
//!
//!     // turn every flow around, and move the VNFs to the walks of the reversed flows
//!     let solution = TomOrchestrator::new(&net, 10.0)
//!         .with_shift(ReverseEndpoints)
//!         .run(&flows, 3)?;
//!     assert_eq!(solution.communication_cost(), 8.0);
//!     assert_eq!(solution.migration_cost(), 400.0);
//!     assert_eq!(solution.total_cost, 408.0);
//!
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_networks;
mod test;
pub mod topology_zoo;

mod error;
pub mod migration;
pub mod placement;
pub mod topology;

pub use error::Error;
pub use migration::{estimate_migration_cost, migrate, run_tom};
pub use placement::{solve_top1, solve_top_multi};
