//! Itinerary extraction from the predecessor map
//!
//! One candidate plan per reachable `(destination, hour)` node whose final
//! incoming edge is a transport leg. Arrival nodes reached only by waiting
//! at the destination are not completed journeys and are skipped, and so
//! are nodes the search never relaxed.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::model::catalog::{Catalog, CityId};
use crate::model::graph::{EdgeKind, Hour, TimeNode};
use crate::routing::dijkstra::SearchState;

/// A `(city name, hour)` waypoint of an emitted plan. Serializes as a
/// two-element array, matching the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint(pub String, pub Hour);

impl Waypoint {
    pub fn city(&self) -> &str {
        &self.0
    }

    pub fn hour(&self) -> Hour {
        self.1
    }
}

/// One step of a plan: the node the traveller is at and the kind of the
/// transition taken away from it. The terminal step carries
/// [`EdgeKind::Arrived`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStep(pub Waypoint, pub EdgeKind);

impl PlanStep {
    pub fn place(&self) -> &Waypoint {
        &self.0
    }

    pub fn kind(&self) -> EdgeKind {
        self.1
    }
}

/// A complete itinerary candidate: accumulated risk, arrival hour and the
/// ordered steps from the fixed start to the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub risk: f64,
    pub arrival_time: Hour,
    #[serde(rename = "plan")]
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Map positions of the plan's waypoints, in step order. Feed for the
    /// caller's polyline rendering.
    pub fn polyline(&self, catalog: &Catalog) -> Vec<Point<f64>> {
        self.steps
            .iter()
            .filter_map(|step| catalog.city_id(step.place().city()))
            .map(|id| catalog.city(id).location())
            .collect()
    }

    /// Hours at which each waypoint is occupied, in step order.
    pub fn timings(&self) -> Vec<Hour> {
        self.steps.iter().map(|step| step.place().hour()).collect()
    }
}

fn waypoint(catalog: &Catalog, node: TimeNode) -> Waypoint {
    Waypoint(catalog.city(node.city).name.clone(), node.hour)
}

/// Collects the candidate plans for every qualifying arrival node at the
/// destination. The list is unordered; ranking is the caller's job.
pub(crate) fn extract_plans(
    catalog: &Catalog,
    state: &SearchState,
    destination: CityId,
) -> Vec<Plan> {
    let mut plans = Vec::new();

    for (node, (_, kind)) in state.predecessors() {
        if node.city != destination || kind == EdgeKind::Wait {
            continue;
        }

        let mut steps = vec![PlanStep(waypoint(catalog, node), EdgeKind::Arrived)];
        let mut current = node;
        while let Some((pred, kind)) = state.predecessor(current) {
            steps.push(PlanStep(waypoint(catalog, pred), kind));
            current = pred;
        }
        steps.reverse();

        plans.push(Plan {
            risk: state.distance(node),
            arrival_time: node.hour,
            steps,
        });
    }

    plans
}
