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

//! # Single-Flow Placement (TOP-1)

use super::{DestinationMode, FlowPlacement, PlacementError, SolverConfig, Stroll, TopSolution};
use crate::topology::{Flow, GraphModel, LinkWeight, NodeId, TopologyError};

use itertools::Itertools;
use log::*;
use petgraph::algo::FloatMeasure;

/// # Stroll Solver
///
/// Computes the cheapest walk of exactly `n + 1` links starting at the source of a flow, using a
/// layered shortest-walk dynamic program (similar to Bellman-Ford):
///
/// - Layer `e` stores, for every node `u`, the minimal cost of a walk with exactly `e` links from
///   the source to `u`, together with the predecessor of `u` on that walk. Layer 0 only contains
///   the source with cost 0.
/// - Layer `e` is computed from layer `e - 1` by relaxing every link `(u, v)`:
///   `cost[e][u] = min(cost[e][u], cost[e - 1][v] + weight(u, v))`.
/// - After layer `n + 1` is filled, the end node is chosen according to the
///   [`DestinationMode`], and the walk is reconstructed by following the predecessors back to the
///   source.
///
/// The table has `(n + 2) * |V|` entries, and the solver runs in `O(n * |E|)`. Since every layer
/// consumes exactly one link, the table never contains cycles, and non-negative link weights are
/// sufficient for the result to be optimal.
///
/// If multiple walks have the same minimal cost, the solver returns one of them. Which one depends
/// on the order in which the graph returns nodes and neighbors.
#[derive(Debug)]
pub struct StrollSolver<'a, G> {
    net: &'a G,
    config: SolverConfig,
}

impl<'a, G> StrollSolver<'a, G>
where
    G: GraphModel,
{
    /// Create a new solver with the default configuration.
    pub fn new(net: &'a G) -> Self {
        Self::with_config(net, SolverConfig::default())
    }

    /// Create a new solver with the given configuration.
    pub fn with_config(net: &'a G, config: SolverConfig) -> Self {
        Self { net, config }
    }

    /// Returns the configuration of the solver
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the cheapest walk for the flow, through `num_vnfs` VNFs.
    pub fn solve(&self, flow: Flow, num_vnfs: usize) -> Result<Stroll, PlacementError> {
        if num_vnfs == 0 {
            return Err(PlacementError::NoVnfs);
        }
        for node in [flow.source, flow.destination].iter() {
            if !self.net.contains_node(*node) {
                return Err(TopologyError::InvalidNode(*node).into());
            }
        }

        let edges = num_vnfs + 1;
        let num_nodes = self.net.node_count();
        let entries = (edges + 1).checked_mul(num_nodes).unwrap_or(usize::MAX);
        if entries > self.config.max_table_entries {
            return Err(PlacementError::TableTooLarge {
                entries,
                limit: self.config.max_table_entries,
            });
        }

        debug!(
            "solving {:?} with {} VNFs ({:?} destination, {} table entries)",
            flow, num_vnfs, self.config.destination, entries
        );

        let nodes = self.net.nodes();
        let adjacency = self.adjacency(&nodes)?;

        let mut table = DpTable::new(num_nodes, edges);
        table.set(0, flow.source, 0.0, None);

        for e in 1..=edges {
            for (u, neighbors) in adjacency.iter() {
                for (v, weight) in neighbors.iter() {
                    let candidate = table.cost(e - 1, *v) + *weight;
                    if candidate < table.cost(e, *u) {
                        table.set(e, *u, candidate, Some(*v));
                    }
                }
            }
        }

        let unreachable = PlacementError::Unreachable {
            start: flow.source,
            end: match self.config.destination {
                DestinationMode::Free => None,
                DestinationMode::Pinned => Some(flow.destination),
            },
            edges,
        };

        let end = match self.config.destination {
            DestinationMode::Free => {
                let mut best: Option<NodeId> = None;
                for u in nodes.iter() {
                    let best_cost = best.map_or(LinkWeight::infinite(), |b| table.cost(edges, b));
                    if table.cost(edges, *u) < best_cost {
                        best = Some(*u);
                    }
                }
                best
            }
            DestinationMode::Pinned => Some(flow.destination),
        };
        let end = match end {
            Some(end) if table.cost(edges, end) < LinkWeight::infinite() => end,
            _ => {
                debug!("no walk of {} links exists for {:?}", edges, flow);
                return Err(unreachable);
            }
        };

        // follow the predecessors back to layer 0
        let mut path: Vec<NodeId> = Vec::with_capacity(edges + 1);
        let mut node = end;
        for e in (1..=edges).rev() {
            path.push(node);
            node = table.predecessor(e, node).ok_or_else(|| unreachable.clone())?;
        }
        debug_assert_eq!(node, flow.source);
        path.push(node);
        path.reverse();

        let cost = table.cost(edges, end);
        trace!("found walk {:?} with cost {}", path, cost);
        Ok(Stroll { cost, path })
    }

    /// Solve every flow independently, in the given order. Flows for which no walk exists are
    /// stored with their error, and make the total cost infinite. The remaining flows are still
    /// solved.
    pub fn solve_all(&self, flows: &[Flow], num_vnfs: usize) -> TopSolution {
        let mut solution = TopSolution::new(num_vnfs);
        for flow in flows.iter() {
            let result = self.solve(*flow, num_vnfs);
            if let Err(e) = result.as_ref() {
                warn!("Cannot place the VNFs of {:?}: {}", flow, e);
            }
            solution.push(FlowPlacement { flow: *flow, result });
        }
        solution
    }

    /// Neighbors of every node, together with the link weight.
    fn adjacency(
        &self,
        nodes: &[NodeId],
    ) -> Result<Vec<(NodeId, Vec<(NodeId, LinkWeight)>)>, TopologyError> {
        nodes
            .iter()
            .map(|u| {
                let neighbors = self
                    .net
                    .neighbors(*u)?
                    .into_iter()
                    .map(|v| Ok((v, self.net.edge_weight(*u, v)?)))
                    .collect::<Result<Vec<_>, TopologyError>>()?;
                Ok((*u, neighbors))
            })
            .collect()
    }
}

/// Dense table of the dynamic program, indexed by `[edges][node]`. Unset entries have an
/// infinite cost and no predecessor.
struct DpTable {
    num_nodes: usize,
    cost: Vec<LinkWeight>,
    predecessor: Vec<Option<NodeId>>,
}

impl DpTable {
    fn new(num_nodes: usize, edges: usize) -> Self {
        let size = (edges + 1) * num_nodes;
        Self {
            num_nodes,
            cost: vec![LinkWeight::infinite(); size],
            predecessor: vec![None; size],
        }
    }

    #[inline]
    fn idx(&self, edges: usize, node: NodeId) -> usize {
        edges * self.num_nodes + node.index()
    }

    fn cost(&self, edges: usize, node: NodeId) -> LinkWeight {
        self.cost[self.idx(edges, node)]
    }

    fn predecessor(&self, edges: usize, node: NodeId) -> Option<NodeId> {
        self.predecessor[self.idx(edges, node)]
    }

    fn set(&mut self, edges: usize, node: NodeId, cost: LinkWeight, predecessor: Option<NodeId>) {
        let idx = self.idx(edges, node);
        self.cost[idx] = cost;
        self.predecessor[idx] = predecessor;
    }
}

/// Solve TOP-1 for a single flow from `source` to `destination` through `num_vnfs` VNFs, using the
/// default configuration (the walk may end at any node).
pub fn solve_top1<G: GraphModel>(
    net: &G,
    source: NodeId,
    destination: NodeId,
    num_vnfs: usize,
) -> Result<Stroll, PlacementError> {
    StrollSolver::new(net).solve(Flow::new(source, destination), num_vnfs)
}

/// Communication cost of a walk, i.e., the sum of the weights of all traversed links. Returns an
/// error if two consecutive nodes are not adjacent.
pub fn walk_cost<G: GraphModel>(net: &G, path: &[NodeId]) -> Result<LinkWeight, TopologyError> {
    path.iter().tuple_windows().map(|(a, b)| net.edge_weight(*a, *b)).sum()
}
