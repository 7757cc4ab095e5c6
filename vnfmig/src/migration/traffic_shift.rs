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

//! # Traffic Shifts
//!
//! A traffic shift describes how the set of flows changes. The VNFs of a flow before the shift
//! take over the VNFs of its [successor](TrafficShift::successor) after the shift. The VNF at
//! position `i` is migrated to the node of the VNF at position `i` of the successor. Unless the
//! shift says otherwise, a flow is its own successor, so the VNFs stay with their flow no matter
//! where it appears in the list.

use crate::topology::Flow;

/// Trait for describing how the traffic changes.
pub trait TrafficShift {
    /// Returns the new flows, given the current ones.
    fn shift(&self, flows: &[Flow]) -> Vec<Flow>;

    /// Returns the flow after the shift whose VNFs are taken over by the VNFs of `flow`.
    fn successor(&self, flow: &Flow) -> Flow {
        *flow
    }
}

/// The list of flows is reversed, i.e., the first flow becomes the last one. The flows themselves
/// are kept unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseFlowOrder;

impl TrafficShift for ReverseFlowOrder {
    fn shift(&self, flows: &[Flow]) -> Vec<Flow> {
        flows.iter().rev().copied().collect()
    }
}

/// Every flow is turned around, such that its source becomes the destination, and vice versa.
/// The VNFs of each flow are migrated to the walk of the reversed flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseEndpoints;

impl TrafficShift for ReverseEndpoints {
    fn shift(&self, flows: &[Flow]) -> Vec<Flow> {
        flows.iter().map(Flow::reversed).collect()
    }

    fn successor(&self, flow: &Flow) -> Flow {
        flow.reversed()
    }
}

/// The new flows are known in advance (e.g., reported by a traffic change detector), and the
/// current flows are ignored. Every flow keeps its VNFs, so the new flows must contain the same
/// flows as the current ones, possibly in a different order.
#[derive(Debug, Clone, Default)]
pub struct ExplicitFlows(pub Vec<Flow>);

impl TrafficShift for ExplicitFlows {
    fn shift(&self, _flows: &[Flow]) -> Vec<Flow> {
        self.0.clone()
    }
}

impl<T> TrafficShift for Box<T>
where
    T: TrafficShift + ?Sized,
{
    fn shift(&self, flows: &[Flow]) -> Vec<Flow> {
        (**self).shift(flows)
    }

    fn successor(&self, flow: &Flow) -> Flow {
        (**self).successor(flow)
    }
}
