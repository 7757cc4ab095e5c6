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


//! Test the single-flow placement (TOP-1).

use super::brute_force::cheapest_walk;
use super::reference::*;
use crate::example_networks::random_ppdc;
use crate::placement::*;
use crate::topology::{Flow, GraphModel, Ppdc, TopologyError};
use assert_approx_eq::assert_approx_eq;

#[test]
fn test_default_config() {
    let config = SolverConfig::default();
    assert_eq!(config.destination, DestinationMode::Free);
    assert_eq!(config.max_table_entries, DEFAULT_MAX_TABLE_ENTRIES);
    assert_eq!(SolverConfig::pinned().max_table_entries, DEFAULT_MAX_TABLE_ENTRIES);
}

#[test]
fn test_reference_free() {
    let net = reference_net();

    let stroll = solve_top1(&net, *H1, *H4, 3).unwrap();
    assert_approx_eq!(stroll.cost, 4.0);
    assert_eq!(stroll.path, vec![*H1, *S1, *H1, *S1, *H1]);
    assert_eq!(stroll.num_vnfs(), 3);
    assert_eq!(stroll.vnf_hosts(), &[*S1, *H1, *S1]);
    assert_eq!(stroll.end(), Some(*H1));

    let stroll = solve_top1(&net, *H2, *H3, 3).unwrap();
    assert_approx_eq!(stroll.cost, 4.0);
    assert_eq!(stroll.path, vec![*H2, *S2, *H2, *S2, *H2]);

    let stroll = solve_top1(&net, *H2, *H3, 2).unwrap();
    assert_approx_eq!(stroll.cost, 3.0);
    assert_eq!(stroll.path, vec![*H2, *S2, *H2, *S2]);

    let stroll = solve_top1(&net, *H1, *H4, 1).unwrap();
    assert_approx_eq!(stroll.cost, 2.0);
    assert_eq!(stroll.path, vec![*H1, *S1, *H1]);

    let stroll = solve_top1(&net, *S3, *H1, 2).unwrap();
    assert_approx_eq!(stroll.cost, 3.0);
    assert_eq!(stroll.path, vec![*S3, *H3, *S3, *H3]);

    assert_approx_eq!(solve_top1(&net, *H1, *H4, 5).unwrap().cost, 6.0);
}

#[test]
fn test_reference_pinned() {
    let net = reference_net();
    let solver = StrollSolver::with_config(&net, SolverConfig::pinned());
    assert_eq!(solver.config().destination, DestinationMode::Pinned);

    let stroll = solver.solve(Flow::new(*H1, *H4), 5).unwrap();
    assert_approx_eq!(stroll.cost, 12.0);
    assert_eq!(stroll.path, vec![*H1, *S1, *S2, *S3, *S4, *S5, *H4]);
    assert_eq!(stroll.end(), Some(*H4));

    let stroll = solver.solve(Flow::new(*H2, *H3), 2).unwrap();
    assert_approx_eq!(stroll.cost, 4.0);
    assert_eq!(stroll.path, vec![*H2, *S2, *S3, *H3]);

    let stroll = solver.solve(Flow::new(*S3, *H1), 2).unwrap();
    assert_approx_eq!(stroll.cost, 5.0);
    assert_eq!(stroll.path, vec![*S3, *S2, *S1, *H1]);

    // h4 is 6 hops away from h1
    for n in [1, 3].iter() {
        assert_eq!(
            solver.solve(Flow::new(*H1, *H4), *n),
            Err(PlacementError::Unreachable { start: *H1, end: Some(*H4), edges: n + 1 })
        );
    }
}

#[test]
fn test_invalid_input() {
    let net = reference_net();

    assert_eq!(solve_top1(&net, *H1, *H4, 0), Err(PlacementError::NoVnfs));
    assert_eq!(
        solve_top1(&net, 42.into(), *H4, 3),
        Err(PlacementError::Topology(TopologyError::InvalidNode(42.into())))
    );
    assert_eq!(
        solve_top1(&net, *H1, 42.into(), 3),
        Err(PlacementError::Topology(TopologyError::InvalidNode(42.into())))
    );

    let config = SolverConfig { max_table_entries: 10, ..Default::default() };
    let solver = StrollSolver::with_config(&net, config);
    assert_eq!(
        solver.solve(Flow::new(*H1, *H4), 3),
        Err(PlacementError::TableTooLarge { entries: 45, limit: 10 })
    );
    // the table limit is inclusive
    let config = SolverConfig { max_table_entries: 45, ..Default::default() };
    assert!(StrollSolver::with_config(&net, config).solve(Flow::new(*H1, *H4), 3).is_ok());
}

#[test]
fn test_isolated_source() {
    let mut net = reference_net();
    let h5 = net.add_host("h5").unwrap();

    assert_eq!(
        solve_top1(&net, h5, *H1, 2),
        Err(PlacementError::Unreachable { start: h5, end: None, edges: 3 })
    );
    // the destination does not matter in the free mode
    assert!(solve_top1(&net, *H1, h5, 2).is_ok());
}

#[test]
fn test_zero_weight() {
    let mut net = Ppdc::new();
    let h = net.add_host("h").unwrap();
    let s = net.add_switch("s").unwrap();
    net.add_link(h, s, 0.0).unwrap();

    let stroll = solve_top1(&net, h, s, 4).unwrap();
    assert_approx_eq!(stroll.cost, 0.0);
    assert_eq!(stroll.path, vec![h, s, h, s, h, s]);
}

#[test]
fn test_walk_cost() {
    let net = reference_net();

    assert_approx_eq!(walk_cost(&net, &[*H1, *S1, *S2, *S1]).unwrap(), 5.0);
    assert_approx_eq!(walk_cost(&net, &[*H1]).unwrap(), 0.0);
    assert_approx_eq!(walk_cost(&net, &[]).unwrap(), 0.0);
    assert_eq!(
        walk_cost(&net, &[*H1, *S1, *S3]),
        Err(TopologyError::NodesNotConnected(*S1, *S3))
    );
}

/// Check that the walk is valid for the flow, and that its cost is correct.
fn check_stroll(net: &Ppdc, flow: Flow, num_vnfs: usize, stroll: &Stroll) {
    assert_eq!(stroll.path.len(), num_vnfs + 2);
    assert_eq!(stroll.path[0], flow.source);
    assert_eq!(stroll.vnf_hosts().len(), num_vnfs);
    assert_approx_eq!(walk_cost(net, &stroll.path).unwrap(), stroll.cost);
}

#[test]
fn test_brute_force_free() {
    for seed in 0..20 {
        let net = random_ppdc(6, 3, seed).unwrap();
        for source in net.nodes() {
            for num_vnfs in 1..=3 {
                let flow = Flow::new(source, source);
                let expected = cheapest_walk(&net, source, None, num_vnfs + 1).unwrap();
                let stroll = solve_top1(&net, flow.source, flow.destination, num_vnfs).unwrap();
                check_stroll(&net, flow, num_vnfs, &stroll);
                assert_approx_eq!(stroll.cost, expected);
            }
        }
    }
}

#[test]
fn test_brute_force_pinned() {
    for seed in 0..10 {
        let net = random_ppdc(6, 2, seed).unwrap();
        let solver = StrollSolver::with_config(&net, SolverConfig::pinned());
        for source in net.nodes() {
            for destination in net.nodes() {
                for num_vnfs in 1..=3 {
                    let flow = Flow::new(source, destination);
                    let expected = cheapest_walk(&net, source, Some(destination), num_vnfs + 1);
                    match (solver.solve(flow, num_vnfs), expected) {
                        (Ok(stroll), Some(expected)) => {
                            check_stroll(&net, flow, num_vnfs, &stroll);
                            assert_eq!(stroll.end(), Some(destination));
                            assert_approx_eq!(stroll.cost, expected);
                        }
                        (Err(PlacementError::Unreachable { .. }), None) => {}
                        (result, expected) => {
                            panic!("solver returned {:?}, but expected {:?}", result, expected)
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_more_vnfs_never_cheaper() {
    for seed in 0..10 {
        let net = random_ppdc(8, 4, seed).unwrap();
        for source in net.nodes() {
            let mut last_cost = 0.0;
            for num_vnfs in 1..=6 {
                let cost = solve_top1(&net, source, source, num_vnfs).unwrap().cost;
                assert!(cost >= last_cost);
                last_cost = cost;
            }
        }
    }
}

#[test]
fn test_heavier_link_never_cheaper() {
    for seed in 0..10 {
        let net = random_ppdc(7, 3, seed).unwrap();
        for (a, b, weight) in net.get_links() {
            let mut heavier = net.clone();
            heavier.set_link_weight(a, b, weight + 3.0).unwrap();
            for source in net.nodes() {
                for num_vnfs in 1..=3 {
                    let before = solve_top1(&net, source, source, num_vnfs).unwrap().cost;
                    let after = solve_top1(&heavier, source, source, num_vnfs).unwrap().cost;
                    assert!(after >= before);
                }
            }
        }
    }
}
