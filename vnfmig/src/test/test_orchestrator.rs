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


//! Test the traffic-optimal migration (TOM).

use super::reference::*;
use crate::example_networks::{ChainNet, ExampleNetwork, LeafSpineNet};
use crate::migration::*;
use crate::placement::SolverConfig;
use crate::topology::{Flow, Ppdc};
use crate::Error;
use assert_approx_eq::assert_approx_eq;

fn reference_flows() -> Vec<Flow> {
    vec![Flow::new(*H1, *H4), Flow::new(*H2, *H3)]
}

/// Check that the total cost is the communication cost plus the estimated migration cost, and
/// that every VNF ends up where the new placement wants it.
fn check_consistency(net: &Ppdc, solution: &TomSolution, coeff: f64) {
    let old = &solution.initial_placement;
    let new = solution.shifted.vnf_placement().unwrap();
    assert_eq!(solution.final_placement(), &new);
    assert_approx_eq!(
        solution.migration_cost(),
        estimate_migration_cost(net, old, &new, coeff).unwrap()
    );
    assert_approx_eq!(
        solution.total_cost,
        solution.communication_cost() + solution.migration_cost()
    );
}

#[test]
fn test_reference_tom() {
    let net = reference_net();
    let flows = reference_flows();

    let solution = run_tom(&net, &flows, 3, 10.0).unwrap();
    assert_eq!(solution.shifted_flows, vec![flows[1], flows[0]]);
    assert_approx_eq!(solution.initial_communication_cost(), 8.0);
    assert_approx_eq!(solution.communication_cost(), 8.0);

    // every flow keeps its walk, so no VNF has to move
    assert_approx_eq!(solution.migration_cost(), 0.0);
    assert_approx_eq!(solution.total_cost, 8.0);
    assert_eq!(solution.migration.rounds, 0);
    assert_eq!(solution.initial_placement, solution.initial.vnf_placement().unwrap());
    assert_eq!(solution.final_placement(), &solution.initial_placement);
    assert_eq!(solution.migration_paths()[&VnfSlot::new(flows[0], 1)], vec![*H1]);
    check_consistency(&net, &solution, 10.0);
}

#[test]
fn test_flow_order_does_not_move_vnfs() {
    let net = reference_net();
    let f14 = Flow::new(*H1, *H4);
    let f23 = Flow::new(*H2, *H3);
    let flows = vec![f14, f23, f14];

    let solution = TomOrchestrator::new(&net, 10.0)
        .with_shift(ExplicitFlows(vec![f14, f14, f23]))
        .run(&flows, 3)
        .unwrap();
    assert_approx_eq!(solution.migration_cost(), 0.0);
    assert_approx_eq!(solution.total_cost, 12.0);
    assert_eq!(solution.final_placement().len(), 9);
    assert_eq!(solution.final_placement()[&VnfSlot::with_occurrence(f14, 1, 1)], *H1);
    check_consistency(&net, &solution, 10.0);
}

#[test]
fn test_reverse_endpoints() {
    let net = reference_net();
    let flows = reference_flows();

    let solution = TomOrchestrator::new(&net, 10.0)
        .with_shift(ReverseEndpoints)
        .run(&flows, 3)
        .unwrap();
    assert_eq!(solution.shifted_flows, vec![Flow::new(*H4, *H1), Flow::new(*H3, *H2)]);
    assert_approx_eq!(solution.communication_cost(), 8.0);
    assert_approx_eq!(solution.migration_cost(), 400.0);
    assert_approx_eq!(solution.total_cost, 408.0);
    assert_eq!(solution.migration.rounds, 6);
    // the VNFs of every flow move to the walk of the reversed flow
    assert_eq!(solution.final_placement()[&VnfSlot::new(Flow::new(*H4, *H1), 1)], *H4);
    assert_eq!(solution.final_placement()[&VnfSlot::new(Flow::new(*H3, *H2), 0)], *S3);
    assert_eq!(solution.migration_paths()[&VnfSlot::new(Flow::new(*H4, *H1), 1)][0], *H1);
    check_consistency(&net, &solution, 10.0);

    // boxed trait objects can be used as well
    let shift: Box<dyn TrafficShift> = Box::new(ReverseEndpoints);
    let boxed = TomOrchestrator::new(&net, 10.0).with_shift(shift).run(&flows, 3).unwrap();
    assert_eq!(boxed, solution);
}

#[test]
fn test_unchanged_traffic() {
    let net = reference_net();
    let flows = reference_flows();

    let solution = TomOrchestrator::new(&net, 10.0)
        .with_shift(ExplicitFlows(flows.clone()))
        .run(&flows, 3)
        .unwrap();
    assert_approx_eq!(solution.migration_cost(), 0.0);
    assert_approx_eq!(solution.total_cost, 8.0);
    assert_eq!(solution.migration.rounds, 0);
    assert_eq!(solution.final_placement(), &solution.initial.vnf_placement().unwrap());
}

#[test]
fn test_pinned_tom() {
    let net = reference_net();
    let flows = vec![Flow::new(*H2, *H3)];

    let solution = TomOrchestrator::new(&net, 1.0)
        .with_config(SolverConfig::pinned())
        .with_shift(ReverseEndpoints)
        .run(&flows, 2)
        .unwrap();
    assert_eq!(
        solution.initial.placements[0].result.as_ref().unwrap().path,
        vec![*H2, *S2, *S3, *H3]
    );
    assert_eq!(
        solution.shifted.placements[0].result.as_ref().unwrap().path,
        vec![*H3, *S3, *S2, *H2]
    );
    // both VNFs swap their switch
    assert_approx_eq!(solution.communication_cost(), 4.0);
    assert_approx_eq!(solution.migration_cost(), 4.0);
    assert_approx_eq!(solution.total_cost, 8.0);
    assert_eq!(solution.migration.rounds, 1);
    check_consistency(&net, &solution, 1.0);

    // every walk from h2 to h3 has an odd number of links
    let result = TomOrchestrator::new(&net, 1.0).with_config(SolverConfig::pinned()).run(&flows, 3);
    assert!(matches!(
        result,
        Err(Error::MigrationError(MigrationError::IncompletePlacement(_)))
    ));
}

#[test]
fn test_tom_errors() {
    let mut net = reference_net();
    let flows = reference_flows();

    let result = TomOrchestrator::new(&net, 10.0)
        .with_shift(ReverseEndpoints)
        .with_max_rounds(1)
        .run(&flows, 3);
    assert!(matches!(
        result,
        Err(Error::MigrationError(MigrationError::NoConvergence { rounds: 1 }))
    ));

    let result = TomOrchestrator::new(&net, 10.0)
        .with_shift(ExplicitFlows(vec![Flow::new(*H1, *H4)]))
        .run(&flows, 3);
    assert!(matches!(
        result,
        Err(Error::MigrationError(MigrationError::PlacementKeyMismatch(_)))
    ));

    let h5 = net.add_host("h5").unwrap();
    let broken = vec![Flow::new(*H1, *H4), Flow::new(h5, *H1)];
    let result = run_tom(&net, &broken, 3, 10.0);
    assert!(matches!(
        result,
        Err(Error::MigrationError(MigrationError::IncompletePlacement(f))) if f == broken[1]
    ));
}

#[test]
fn test_scaled_networks() {
    for size in 2..6 {
        let net = ChainNet::net(size).unwrap();
        let flows = ChainNet::flows(&net, size).unwrap();
        let solution = run_tom(&net, &flows, 2, 3.0).unwrap();
        check_consistency(&net, &solution, 3.0);

        let net = LeafSpineNet::net(size).unwrap();
        let flows = LeafSpineNet::flows(&net, size).unwrap();
        let solution = TomOrchestrator::new(&net, 3.0)
            .with_shift(ReverseEndpoints)
            .run(&flows, 2)
            .unwrap();
        check_consistency(&net, &solution, 3.0);
    }
}
