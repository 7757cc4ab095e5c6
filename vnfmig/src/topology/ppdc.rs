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

//! # PPDC Topology
//!
//! Weighted, undirected graph of hosts and switches, backed by `petgraph`.

use super::GraphModel;
use crate::topology::{LinkWeight, NodeData, NodeId, NodeType, PpdcGraph, TopologyError};

use log::*;
use petgraph::algo::{astar, dijkstra};
use petgraph::prelude::*;
use std::collections::HashMap;

/// # PPDC
/// The struct contains the physical network of hosts and switches, together with the link weights
/// (delays). Every node gets a dense index at the time it is added, and the name of the node is
/// only kept in a lookup table for diagnostics and for parsing user input.
#[derive(Debug, Clone)]
pub struct Ppdc {
    graph: PpdcGraph,
    names: HashMap<String, NodeId>,
}

impl Default for Ppdc {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppdc {
    /// Generate an empty topology
    pub fn new() -> Self {
        Self { graph: PpdcGraph::new_undirected(), names: HashMap::new() }
    }

    /// Add a new host to the topology, returning its ID.
    pub fn add_host<S: Into<String>>(&mut self, name: S) -> Result<NodeId, TopologyError> {
        self.add_node(name, NodeType::Host)
    }

    /// Add a new switch to the topology, returning its ID.
    pub fn add_switch<S: Into<String>>(&mut self, name: S) -> Result<NodeId, TopologyError> {
        self.add_node(name, NodeType::Switch)
    }

    /// Add a new node of the given type. The name must be unique in the topology.
    pub fn add_node<S: Into<String>>(
        &mut self,
        name: S,
        node_type: NodeType,
    ) -> Result<NodeId, TopologyError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(TopologyError::DuplicateNodeName(name));
        }
        let id = self.graph.add_node(NodeData { name: name.clone(), node_type });
        trace!("added {:?} {} as {:?}", node_type, name, id);
        self.names.insert(name, id);
        Ok(id)
    }

    /// Add an undirected link between `a` and `b`. The weight must be finite and non-negative.
    pub fn add_link(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: LinkWeight,
    ) -> Result<(), TopologyError> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(TopologyError::InvalidLinkWeight(a, b, weight));
        }
        if self.graph.contains_edge(a, b) {
            return Err(TopologyError::LinkAlreadyExists(a, b));
        }
        self.graph.add_edge(a, b, weight);
        Ok(())
    }

    /// Change the weight of an existing link. The new weight must be finite and non-negative.
    pub fn set_link_weight(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: LinkWeight,
    ) -> Result<LinkWeight, TopologyError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TopologyError::InvalidLinkWeight(a, b, weight));
        }
        let edge = self.graph.find_edge(a, b).ok_or(TopologyError::NodesNotConnected(a, b))?;
        let old = std::mem::replace(&mut self.graph[edge], weight);
        Ok(old)
    }

    /// Returns the ID of the node with the given name
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, TopologyError> {
        self.names
            .get(name.as_ref())
            .copied()
            .ok_or_else(|| TopologyError::NodeNameNotFound(name.as_ref().to_string()))
    }

    /// Returns the name of the node
    pub fn get_node_name(&self, node: NodeId) -> Result<&str, TopologyError> {
        self.graph
            .node_weight(node)
            .map(|d| d.name.as_str())
            .ok_or(TopologyError::InvalidNode(node))
    }

    /// Returns the type of the node
    pub fn get_node_type(&self, node: NodeId) -> Result<NodeType, TopologyError> {
        self.graph.node_weight(node).map(|d| d.node_type).ok_or(TopologyError::InvalidNode(node))
    }

    /// Returns a vector of all hosts
    pub fn get_hosts(&self) -> Vec<NodeId> {
        self.nodes_of_type(NodeType::Host)
    }

    /// Returns a vector of all switches
    pub fn get_switches(&self) -> Vec<NodeId> {
        self.nodes_of_type(NodeType::Switch)
    }

    /// Returns all links as tuples `(a, b, weight)`, in the order in which they were added.
    pub fn get_links(&self) -> Vec<(NodeId, NodeId, LinkWeight)> {
        self.graph.edge_references().map(|e| (e.source(), e.target(), *e.weight())).collect()
    }

    /// Number of links in the topology
    pub fn num_links(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns a reference to the underlying graph
    pub fn get_graph(&self) -> &PpdcGraph {
        &self.graph
    }

    /// Number of links on the path with the fewest links from `a` to `b`.
    pub fn hop_count(&self, a: NodeId, b: NodeId) -> Result<usize, TopologyError> {
        self.check_node(a)?;
        self.check_node(b)?;
        dijkstra(&self.graph, a, Some(b), |_| 1usize)
            .get(&b)
            .copied()
            .ok_or(TopologyError::NoPath(a, b))
    }

    /// Diameter of the topology in number of links (ignoring the link weights), or `None` if the
    /// topology is not connected or empty.
    pub fn hop_diameter(&self) -> Option<usize> {
        let num_nodes = self.graph.node_count();
        let mut diameter = None;
        for node in self.graph.node_indices() {
            let hops = dijkstra(&self.graph, node, None, |_| 1usize);
            if hops.len() < num_nodes {
                return None;
            }
            diameter = hops.values().copied().chain(diameter).max();
        }
        diameter
    }

    fn nodes_of_type(&self, node_type: NodeType) -> Vec<NodeId> {
        self.graph.node_indices().filter(|n| self.graph[*n].node_type == node_type).collect()
    }

    fn check_node(&self, node: NodeId) -> Result<(), TopologyError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(TopologyError::InvalidNode(node))
        }
    }
}

impl GraphModel for Ppdc {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.graph.node_indices().collect()
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, TopologyError> {
        self.check_node(node)?;
        Ok(self.graph.neighbors(node).collect())
    }

    fn edge_weight(&self, a: NodeId, b: NodeId) -> Result<LinkWeight, TopologyError> {
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
            .ok_or(TopologyError::NodesNotConnected(a, b))
    }

    fn shortest_path(&self, a: NodeId, b: NodeId) -> Result<Vec<NodeId>, TopologyError> {
        self.check_node(a)?;
        self.check_node(b)?;
        astar(&self.graph, a, |n| n == b, |e| *e.weight(), |_| 0.0)
            .map(|(_, path)| path)
            .ok_or(TopologyError::NoPath(a, b))
    }

    fn shortest_path_length(&self, a: NodeId, b: NodeId) -> Result<LinkWeight, TopologyError> {
        self.check_node(a)?;
        self.check_node(b)?;
        dijkstra(&self.graph, a, Some(b), |e| *e.weight())
            .get(&b)
            .copied()
            .ok_or(TopologyError::NoPath(a, b))
    }
}
