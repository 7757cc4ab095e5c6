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

//! Module containing all type definitions

use petgraph::prelude::*;
use thiserror::Error;

type IndexType = u32;
/// Node Identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;
/// Link Weight of the PPDC graph. Used both as communication cost and as the base unit of the
/// migration cost.
pub type LinkWeight = f64;
/// PPDC Network graph
pub type PpdcGraph = Graph<NodeData, LinkWeight, Undirected, IndexType>;

/// Kind of a node in the PPDC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Physical host, running the VMs
    Host,
    /// Switch, able to run VNFs
    Switch,
}

impl NodeType {
    /// Returns true if and only if the node is a host
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host)
    }

    /// Returns true if and only if the node is a switch
    pub fn is_switch(&self) -> bool {
        matches!(self, Self::Switch)
    }
}

/// Data stored at every node of the graph. The name is only used for diagnostics, the algorithms
/// always work on the [`NodeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Name of the node
    pub name: String,
    /// Type of the node
    pub node_type: NodeType,
}

/// # VM Flow
/// Traffic flow from a source VM to a destination VM, through which `n` VNFs need to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Flow {
    /// Node hosting the source VM
    pub source: NodeId,
    /// Node hosting the destination VM
    pub destination: NodeId,
}

impl Flow {
    /// Create a new flow
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self { source, destination }
    }

    /// Returns the same flow, but in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self { source: self.destination, destination: self.source }
    }
}

impl From<(NodeId, NodeId)> for Flow {
    fn from(pair: (NodeId, NodeId)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Topology Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    /// Node is not present in the topology
    #[error("Node was not found in topology: {0:?}")]
    InvalidNode(NodeId),
    /// Node name is not present in the topology
    #[error("Node name was not found in topology: {0}")]
    NodeNameNotFound(String),
    /// A node with the same name is already present
    #[error("Node name is already used: {0}")]
    DuplicateNodeName(String),
    /// Two nodes are not adjacent
    #[error("Link does not exist: {0:?} -- {1:?}")]
    NodesNotConnected(NodeId, NodeId),
    /// The link is already part of the topology
    #[error("Link does already exist: {0:?} -- {1:?}")]
    LinkAlreadyExists(NodeId, NodeId),
    /// Links from a node to itself are not allowed
    #[error("Cannot add a link from {0:?} to itself")]
    SelfLoop(NodeId),
    /// Link weights must be finite and non-negative
    #[error("Invalid link weight {2} on link {0:?} -- {1:?}")]
    InvalidLinkWeight(NodeId, NodeId, LinkWeight),
    /// There exists no path between the two nodes
    #[error("No path exists from {0:?} to {1:?}")]
    NoPath(NodeId, NodeId),
}
