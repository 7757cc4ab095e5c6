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

//! # Topology Zoo
//!
//! This module reads a PPDC topology from a `GML` file, as they can be downloaded from
//! [TopologyZoo](http://www.topology-zoo.org/dataset.html). Since Topology Zoo files do not
//! contain hosts, nodes marked as external (`Internal 0`) are treated as hosts. Files can also
//! specify the node type and the link weights explicitly.

mod gml_parser;

pub use gml_parser::{parse_gml_file, parse_gml_str, GmlError};
