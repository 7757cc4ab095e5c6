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

//! Module containing all error types

use crate::migration::MigrationError;
use crate::placement::PlacementError;
use crate::topology::TopologyError;
use crate::topology_zoo::GmlError;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error propagated from the topology
    #[error("Topology Error: {0}")]
    TopologyError(#[from] TopologyError),
    /// Error propagated from the placement
    #[error("Placement Error: {0}")]
    PlacementError(#[from] PlacementError),
    /// Error propagated from the migration
    #[error("Migration Error: {0}")]
    MigrationError(#[from] MigrationError),
    /// Error while reading a topology from a GML file
    #[error("Cannot parse GML file: {0}")]
    GmlError(#[from] GmlError),
}
