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


use vnfmig::migration::{
    estimate_migration_cost, ExplicitFlows, ReverseEndpoints, ReverseFlowOrder, TomOrchestrator,
    TrafficShift,
};
use vnfmig::placement::{SolverConfig, StrollSolver};
use vnfmig::topology::{printer, Flow, GraphModel, Ppdc};
use vnfmig::topology_zoo::parse_gml_file;

use clap::{Parser, Subcommand, ValueEnum};
use log::*;
use std::error::Error;

mod example_topologies;
use example_topologies::*;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    // match on the action
    match args.cmd {
        MainCommand::Top { num_vnfs, pin_destination, network } => {
            let (net, flows) = get_topo(network)?;
            info!("Placing {} VNFs on {} flows", num_vnfs, flows.len());

            let solver = StrollSolver::with_config(&net, solver_config(pin_destination));
            let solution = solver.solve_all(&flows, num_vnfs);

            println!("Placement:\n    {}", printer::top_solution(&net, &solution)?.join("\n    "));
            println!("Total communication cost: {}", solution.total_cost);
        }
        MainCommand::Tom {
            num_vnfs,
            pin_destination,
            coeff,
            shift,
            new_flows,
            max_rounds,
            network,
        } => {
            let (net, flows) = get_topo(network)?;
            let shift = get_shift(&net, shift, &new_flows)?;

            let mut orchestrator = TomOrchestrator::new(&net, coeff)
                .with_config(solver_config(pin_destination))
                .with_shift(shift);
            if let Some(max_rounds) = max_rounds {
                orchestrator = orchestrator.with_max_rounds(max_rounds);
            }
            let solution = orchestrator.run(&flows, num_vnfs)?;

            println!(
                "Initial placement:\n    {}",
                printer::top_solution(&net, &solution.initial)?.join("\n    ")
            );
            println!(
                "Placement after the traffic shift:\n    {}",
                printer::top_solution(&net, &solution.shifted)?.join("\n    ")
            );
            println!(
                "Migration paths ({} rounds):\n    {}",
                solution.migration.rounds,
                printer::migration_paths(&net, solution.migration_paths())?.join("\n    ")
            );
            println!(
                "Final placement:\n    {}",
                printer::vnf_placement(&net, solution.final_placement())?.join("\n    ")
            );
            println!("Communication cost: {}", solution.communication_cost());
            println!("Migration cost: {}", solution.migration_cost());
            println!("Total cost: {}", solution.total_cost);
        }
        MainCommand::Estimate {
            num_vnfs,
            pin_destination,
            coeff,
            shift,
            new_flows,
            network,
        } => {
            let (net, flows) = get_topo(network)?;
            let shift = get_shift(&net, shift, &new_flows)?;

            let solver = StrollSolver::with_config(&net, solver_config(pin_destination));
            let old = solver
                .solve_all(&flows, num_vnfs)
                .vnf_placement_by(|flow| shift.successor(flow))?;
            let new = solver.solve_all(&shift.shift(&flows), num_vnfs).vnf_placement()?;
            let cost = estimate_migration_cost(&net, &old, &new, coeff)?;

            println!("Estimated migration cost: {}", cost);
        }
    }
    Ok(())
}

fn solver_config(pin_destination: bool) -> SolverConfig {
    if pin_destination {
        SolverConfig::pinned()
    } else {
        SolverConfig::default()
    }
}

fn get_topo(args: NetworkSelection) -> Result<(Ppdc, Vec<Flow>), Box<dyn Error>> {
    let (net, flows) = match args {
        NetworkSelection::TopologyZoo { gml_file, flows } => {
            let net = parse_gml_file(&gml_file)?;
            let flows = parse_flows(&net, &flows)?;
            (net, flows)
        }
        NetworkSelection::ExampleNetwork { topology, size, seed, flows } => {
            info!("Using {} with size {}", topology, size);
            let (net, default_flows) = example_networks_scenario(topology, size, seed)?;
            let flows =
                if flows.is_empty() { default_flows } else { parse_flows(&net, &flows)? };
            (net, flows)
        }
    };
    info!(
        "Network has {} nodes and {} links, with {} flows",
        net.node_count(),
        net.num_links(),
        flows.len()
    );
    Ok((net, flows))
}

fn get_shift(
    net: &Ppdc,
    shift: Shift,
    new_flows: &[String],
) -> Result<Box<dyn TrafficShift>, Box<dyn Error>> {
    Ok(match shift {
        Shift::ReverseOrder => Box::new(ReverseFlowOrder),
        Shift::ReverseEndpoints => Box::new(ReverseEndpoints),
        Shift::Explicit => {
            if new_flows.is_empty() {
                return Err("The explicit traffic shift requires at least one --new-flow".into());
            }
            Box::new(ExplicitFlows(parse_flows(net, new_flows)?))
        }
    })
}

/// Parse flows of the form `SRC:DST`, where both are node names.
fn parse_flows(net: &Ppdc, flows: &[String]) -> Result<Vec<Flow>, Box<dyn Error>> {
    flows
        .iter()
        .map(|f| -> Result<Flow, Box<dyn Error>> {
            let (source, destination) = f
                .split_once(':')
                .ok_or_else(|| format!("Invalid flow (expected SRC:DST): {}", f))?;
            Ok(Flow::new(net.get_node_id(source.trim())?, net.get_node_id(destination.trim())?))
        })
        .collect()
}

/// Compute traffic-optimal VNF placements (TOP) and migrations (TOM) on example networks or on
/// topologies read from GML files.
#[derive(Parser, Debug)]
#[clap(name = "VnfMig (Binary)", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Action to perform
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Compute the traffic-optimal placement of the VNFs of every flow
    #[clap(name = "top")]
    Top {
        /// Number of VNFs on every flow
        #[clap(short = 'n', long, default_value = "3")]
        num_vnfs: usize,
        /// The walk of every flow must end at its destination
        #[clap(short = 'p', long)]
        pin_destination: bool,
        /// Network to use
        #[clap(subcommand)]
        network: NetworkSelection,
    },
    /// Compute the placement before and after the traffic shift, and migrate the VNFs
    #[clap(name = "tom")]
    Tom {
        /// Number of VNFs on every flow
        #[clap(short = 'n', long, default_value = "3")]
        num_vnfs: usize,
        /// The walk of every flow must end at its destination
        #[clap(short = 'p', long)]
        pin_destination: bool,
        /// Migration coefficient, multiplied with the link weight for moving a VNF over a link
        #[clap(short = 'c', long, default_value = "10")]
        coeff: f64,
        /// How the traffic changes
        #[clap(value_enum, short = 's', long, default_value = "reverse-order")]
        shift: Shift,
        /// Flows after the traffic shift (as SRC:DST), used by the explicit shift
        #[clap(long = "new-flow")]
        new_flows: Vec<String>,
        /// Maximum number of migration rounds (default: number of nodes)
        #[clap(long)]
        max_rounds: Option<usize>,
        /// Network to use
        #[clap(subcommand)]
        network: NetworkSelection,
    },
    /// Estimate the migration cost after the traffic shift, without scheduling the migration
    #[clap(name = "estimate")]
    Estimate {
        /// Number of VNFs on every flow
        #[clap(short = 'n', long, default_value = "3")]
        num_vnfs: usize,
        /// The walk of every flow must end at its destination
        #[clap(short = 'p', long)]
        pin_destination: bool,
        /// Migration coefficient, multiplied with the link weight for moving a VNF over a link
        #[clap(short = 'c', long, default_value = "10")]
        coeff: f64,
        /// How the traffic changes
        #[clap(value_enum, short = 's', long, default_value = "reverse-order")]
        shift: Shift,
        /// Flows after the traffic shift (as SRC:DST), used by the explicit shift
        #[clap(long = "new-flow")]
        new_flows: Vec<String>,
        /// Network to use
        #[clap(subcommand)]
        network: NetworkSelection,
    },
}

#[derive(Subcommand, Debug)]
enum NetworkSelection {
    /// Use a network read from a GML file (e.g., from Topology Zoo)
    #[clap(name = "topology-zoo")]
    TopologyZoo {
        /// GML file to use
        gml_file: String,
        /// Flows, given as SRC:DST with the node names
        #[clap(short = 'f', long = "flow", required = true)]
        flows: Vec<String>,
    },
    /// Use an example network, provided by vnfmig
    #[clap(name = "example")]
    ExampleNetwork {
        /// Topology to use (from the example topologies)
        #[clap(value_enum)]
        topology: Topology,
        /// Size of the network (does not affect every topology)
        #[clap(short = 'n', long, default_value = "4")]
        size: usize,
        /// Random seed, to get reproducable networks
        #[clap(short = 's', long, default_value = "42")]
        seed: u64,
        /// Flows, given as SRC:DST with the node names (default: the flows of the example)
        #[clap(short = 'f', long = "flow")]
        flows: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Shift {
    /// Reverse the order of the flows
    ReverseOrder,
    /// Swap source and destination of every flow
    ReverseEndpoints,
    /// Use the flows given with --new-flow
    Explicit,
}
