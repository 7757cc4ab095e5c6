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

//! Parses GML files into a PPDC topology

use crate::topology::{LinkWeight, NodeId, NodeType, Ppdc, TopologyError};

use log::*;
use std::collections::HashMap;
use std::fs::read_to_string;
use thiserror::Error;

/// Parses a GML file and returns the resulting topology. See [`parse_gml_str`] for the format.
pub fn parse_gml_file(filename: impl AsRef<str>) -> Result<Ppdc, GmlError> {
    let gml_str = read_to_string(filename.as_ref())?;
    parse_gml_str(&gml_str)
}

/// Parses a GML string and returns the resulting topology.
///
/// Each node must have an `id`, a `label` and a type. The type is either given as `type "host"` or
/// `type "switch"`, or as in Topology Zoo files, where `Internal 1` is treated as a switch and
/// `Internal 0` as a host. Each edge must have a `source` and a `target`, and may have a `weight`
/// (default is 1). Duplicate edges are ignored.
///
/// The names will remain the same, except the same name occurs twice. In this case, we will append
/// a _N to the end, where N is a number starting from 1 (_1 is appended to the second occurence,
/// and _2 is appended to the third occurence, etc...).
pub fn parse_gml_str(gml_str: &str) -> Result<Ppdc, GmlError> {
    let mut net = Ppdc::new();

    let mut current_state = CurrentState::NotStarted;

    let mut used_labels: HashMap<String, usize> = HashMap::new();
    let mut node_lookup: HashMap<usize, NodeId> = HashMap::new();

    for (i, line) in gml_str.lines().enumerate() {
        let line = line.trim();
        current_state = match current_state {
            CurrentState::NotStarted => {
                if line == "graph [" {
                    CurrentState::None
                } else if line.is_empty() {
                    CurrentState::NotStarted
                } else {
                    return Err(GmlError::UnexpectedToken { line: i, content: String::from(line) });
                }
            }
            CurrentState::None => {
                if line == "node [" {
                    CurrentState::Node { id: None, name: None, node_type: None }
                } else if line == "edge [" {
                    CurrentState::Edge { source: None, target: None, weight: None }
                } else {
                    CurrentState::None
                }
            }
            CurrentState::Node { id, name, node_type } => {
                if let Some(number) = line.strip_prefix("id ") {
                    let id: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Node { id, name, node_type }
                } else if let Some(label) = line.strip_prefix("label ") {
                    let mut name: String = label.trim().trim_matches('"').replace(" ", "_");
                    // increment the num_used in the hashmap
                    let num_used = *used_labels.get(&name).unwrap_or(&0);
                    used_labels.insert(name.clone(), num_used + 1);
                    if num_used > 0 {
                        name.push_str(&format!("_{}", num_used));
                    }
                    CurrentState::Node { id, name: Some(name), node_type }
                } else if let Some(kind) = line.strip_prefix("type ") {
                    let node_type = match kind.trim().trim_matches('"') {
                        "host" => Some(NodeType::Host),
                        "switch" => Some(NodeType::Switch),
                        _ => {
                            return Err(GmlError::UnexpectedToken {
                                line: i,
                                content: String::from(line),
                            })
                        }
                    };
                    CurrentState::Node { id, name, node_type }
                } else if line.starts_with("Internal ") {
                    let internal_type = if line == "Internal 1" {
                        Some(NodeType::Switch)
                    } else if line == "Internal 0" {
                        Some(NodeType::Host)
                    } else {
                        return Err(GmlError::UnexpectedToken {
                            line: i,
                            content: String::from(line),
                        });
                    };
                    // an explicit type has precedence
                    CurrentState::Node { id, name, node_type: node_type.or(internal_type) }
                } else if line == "]" {
                    let node_type = node_type.ok_or(GmlError::NodeMissingType(i))?;
                    let name = name.ok_or(GmlError::NodeMissingLabel(i))?;
                    let id = id.ok_or(GmlError::NodeMissingId(i))?;
                    if node_lookup.contains_key(&id) {
                        return Err(GmlError::NodeIdNotUnique(i));
                    }
                    let node_idx = net.add_node(name, node_type)?;
                    node_lookup.insert(id, node_idx);
                    CurrentState::None
                } else {
                    CurrentState::Node { id, name, node_type }
                }
            }
            CurrentState::Edge { source, target, weight } => {
                if let Some(number) = line.strip_prefix("source ") {
                    let source: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Edge { source, target, weight }
                } else if let Some(number) = line.strip_prefix("target ") {
                    let target: Option<usize> = Some(number.trim().parse()?);
                    CurrentState::Edge { source, target, weight }
                } else if let Some(number) = line.strip_prefix("weight ") {
                    let weight: Option<LinkWeight> = Some(number.trim().parse()?);
                    CurrentState::Edge { source, target, weight }
                } else if line == "]" {
                    let source = source.ok_or(GmlError::EdgeMissingSource(i))?;
                    let source_idx =
                        *node_lookup.get(&source).ok_or(GmlError::UnknownNodeId(source))?;
                    let target = target.ok_or(GmlError::EdgeMissingTarget(i))?;
                    let target_idx =
                        *node_lookup.get(&target).ok_or(GmlError::UnknownNodeId(target))?;
                    match net.add_link(source_idx, target_idx, weight.unwrap_or(1.0)) {
                        Ok(()) => {}
                        Err(TopologyError::LinkAlreadyExists(_, _)) => {
                            debug!("ignoring duplicate link {} -- {} on line {}", source, target, i)
                        }
                        Err(e) => return Err(e.into()),
                    }
                    CurrentState::None
                } else {
                    CurrentState::Edge { source, target, weight }
                }
            }
        };
    }

    Ok(net)
}

enum CurrentState {
    NotStarted,
    None,
    Node { id: Option<usize>, name: Option<String>, node_type: Option<NodeType> },
    Edge { source: Option<usize>, target: Option<usize>, weight: Option<LinkWeight> },
}

/// Errors while parsing a GML file
#[derive(Debug, Error)]
pub enum GmlError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Unexpected Token
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// Line number
        line: usize,
        /// Content of the line
        content: String,
    },
    /// ParseIntError
    #[error("Cannot parse an integer! {0}")]
    ParseIntError(#[from] std::num::ParseIntError),
    /// ParseFloatError
    #[error("Cannot parse a link weight! {0}")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    /// The topology cannot be built
    #[error("Invalid topology: {0}")]
    TopologyError(#[from] TopologyError),
    /// Unknown Node Id
    #[error("Unknown node id: {0}")]
    UnknownNodeId(usize),
    /// Node is missing an ID field
    #[error("Node is missing an ID field before line {0}!")]
    NodeMissingId(usize),
    /// Node is missing an label field
    #[error("Node is missing an label field before line {0}!")]
    NodeMissingLabel(usize),
    /// Node is missing both the type and the internal field
    #[error("Node is missing a type field before line {0}!")]
    NodeMissingType(usize),
    /// Duplicate Noe Id
    #[error("Node ID is not unique on line {0}!")]
    NodeIdNotUnique(usize),
    /// Edge is missing the source field
    #[error("Edge is missing the source field before line {0}!")]
    EdgeMissingSource(usize),
    /// Edge is missing the target field
    #[error("Edge is missing the target field before line {0}!")]
    EdgeMissingTarget(usize),
}
