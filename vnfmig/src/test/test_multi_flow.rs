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


//! Test the placement of multiple flows (TOP).

use super::reference::*;
use crate::example_networks::{random_ppdc, ExampleNetwork, LeafSpineNet};
use crate::migration::{MigrationError, VnfSlot};
use crate::placement::*;
use crate::topology::{Flow, GraphModel};
use assert_approx_eq::assert_approx_eq;
use maplit::btreemap;

#[test]
fn test_reference_multi() {
    let net = reference_net();
    let flows = vec![Flow::new(*H1, *H4), Flow::new(*H2, *H3)];

    let solution = solve_top_multi(&net, &flows, 3);
    assert_eq!(solution.len(), 2);
    assert_eq!(solution.num_vnfs, 3);
    assert!(solution.is_complete());
    assert!(solution.failed_flows().is_empty());
    assert_approx_eq!(solution.total_cost, 8.0);

    // placements are stored in the order of the flows
    assert_eq!(solution.placements[0].flow, flows[0]);
    assert_eq!(solution.placements[1].flow, flows[1]);
    assert_eq!(
        solution.get(&flows[1]).unwrap().result.as_ref().unwrap().path,
        vec![*H2, *S2, *H2, *S2, *H2]
    );
    assert!(solution.get(&Flow::new(*H3, *H4)).is_none());

    assert_eq!(
        solution.vnf_placement(),
        Ok(btreemap! {
            VnfSlot::new(flows[0], 0) => *S1,
            VnfSlot::new(flows[0], 1) => *H1,
            VnfSlot::new(flows[0], 2) => *S1,
            VnfSlot::new(flows[1], 0) => *S2,
            VnfSlot::new(flows[1], 1) => *H2,
            VnfSlot::new(flows[1], 2) => *S2,
        })
    );
}

#[test]
fn test_vnf_placement_ignores_flow_order() {
    let net = reference_net();
    let f14 = Flow::new(*H1, *H4);
    let f23 = Flow::new(*H2, *H3);
    let flows = vec![f14, f23, f14];
    let reordered = vec![f23, f14, f14];

    let expected = btreemap! {
        VnfSlot::new(f14, 0) => *S1,
        VnfSlot::new(f23, 0) => *S2,
        VnfSlot::with_occurrence(f14, 1, 0) => *S1,
    };
    assert_eq!(solve_top_multi(&net, &flows, 1).vnf_placement(), Ok(expected.clone()));
    assert_eq!(solve_top_multi(&net, &reordered, 1).vnf_placement(), Ok(expected));

    assert_eq!(
        solve_top_multi(&net, &flows, 1).vnf_placement_by(Flow::reversed),
        Ok(btreemap! {
            VnfSlot::new(f14.reversed(), 0) => *S1,
            VnfSlot::new(f23.reversed(), 0) => *S2,
            VnfSlot::with_occurrence(f14.reversed(), 1, 0) => *S1,
        })
    );
}

#[test]
fn test_total_is_sum_of_flows() {
    for seed in 0..10 {
        let net = random_ppdc(10, 5, seed).unwrap();
        let nodes = net.nodes();
        let flows: Vec<Flow> =
            nodes.iter().zip(nodes.iter().rev()).map(|(a, b)| Flow::new(*a, *b)).collect();

        for config in [SolverConfig::default(), SolverConfig::pinned()].iter() {
            let solver = StrollSolver::with_config(&net, *config);
            let solution = solver.solve_all(&flows, 2);
            let expected: f64 = flows
                .iter()
                .map(|f| solver.solve(*f, 2).map(|s| s.cost).unwrap_or(f64::INFINITY))
                .sum();
            if expected.is_finite() {
                assert!(solution.is_complete());
                assert_approx_eq!(solution.total_cost, expected);
            } else {
                assert!(!solution.is_complete());
                assert!(solution.total_cost.is_infinite());
            }
        }
    }
}

#[test]
fn test_failed_flow() {
    let mut net = reference_net();
    let h5 = net.add_host("h5").unwrap();
    let flows = vec![Flow::new(*H1, *H4), Flow::new(h5, *H1), Flow::new(*H2, *H3)];

    let solution = solve_top_multi(&net, &flows, 3);
    assert_eq!(solution.len(), 3);
    assert!(!solution.is_complete());
    assert_eq!(solution.failed_flows(), vec![flows[1]]);
    assert!(solution.total_cost.is_infinite());
    assert_eq!(
        solution.placements[1].result,
        Err(PlacementError::Unreachable { start: h5, end: None, edges: 4 })
    );

    // the remaining flows are still placed
    assert_approx_eq!(solution.placements[0].result.as_ref().unwrap().cost, 4.0);
    assert_approx_eq!(solution.placements[2].result.as_ref().unwrap().cost, 4.0);

    assert_eq!(solution.vnf_placement(), Err(MigrationError::IncompletePlacement(flows[1])));
}

#[test]
fn test_pinned_multi() {
    let net = reference_net();
    let flows = vec![Flow::new(*H2, *H3), Flow::new(*H1, *H4)];
    let solver = StrollSolver::with_config(&net, SolverConfig::pinned());

    let solution = solver.solve_all(&flows, 2);
    assert_approx_eq!(solution.placements[0].result.as_ref().unwrap().cost, 4.0);
    assert_eq!(solution.failed_flows(), vec![flows[1]]);
    assert!(solution.total_cost.is_infinite());

    let solution = solver.solve_all(&flows, 5);
    assert!(solution.is_complete());
    assert_approx_eq!(solution.placements[1].result.as_ref().unwrap().cost, 12.0);
}

#[test]
fn test_no_flows() {
    let net = reference_net();
    let solution = solve_top_multi(&net, &[], 3);
    assert!(solution.is_empty());
    assert!(solution.is_complete());
    assert_approx_eq!(solution.total_cost, 0.0);
    assert_eq!(solution.vnf_placement(), Ok(btreemap! {}));
}

#[test]
fn test_leaf_spine() {
    let net = LeafSpineNet::net(4).unwrap();
    let flows = LeafSpineNet::flows(&net, 4).unwrap();
    assert_eq!(net.node_count(), 2 + 4 * 3);
    assert_eq!(flows.len(), 4);

    // every flow bounces between its source and the leaf switch
    let solution = solve_top_multi(&net, &flows, 3);
    assert!(solution.is_complete());
    assert_approx_eq!(solution.total_cost, 4.0 * 4.0);

    let solution = StrollSolver::with_config(&net, SolverConfig::pinned()).solve_all(&flows, 3);
    assert!(solution.is_complete());
    assert_approx_eq!(solution.total_cost, 4.0 * 6.0);
}
