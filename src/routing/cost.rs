//! Edge cost model of the time-expanded graph
//!
//! Pure functions from ordered node pairs to a non-negative cost and an
//! edge kind. Absent edges cost infinity; the search relies on that to
//! never relax self-loops or backward-in-time waits.

use crate::model::catalog::{Catalog, RiskLevel, TransportMode};
use crate::model::graph::{EdgeKind, TimeNode, TravelGraph};

/// Per-hour risk of staying in a city of the given level.
pub fn risk_weight(level: RiskLevel) -> f64 {
    match level {
        RiskLevel::Low => 0.2,
        RiskLevel::Medium => 0.5,
        RiskLevel::High => 0.9,
    }
}

/// Per-hour risk of riding the given transport mode.
pub fn mode_weight(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Plane => 9.0,
        TransportMode::Train => 5.0,
        TransportMode::Bus => 2.0,
    }
}

/// Cost of moving from `from` to `to`.
///
/// Same city: the wait cost over the hour gap, weighted by the city's risk
/// level; infinite unless the gap runs forward in time. Different cities:
/// the matched travel edge's duration weighted by its mode; infinite if no
/// edge was materialized for the pair.
pub fn edge_cost(catalog: &Catalog, graph: &TravelGraph, from: TimeNode, to: TimeNode) -> f64 {
    if from.city == to.city {
        if from.hour < to.hour {
            f64::from(to.hour - from.hour) * risk_weight(catalog.city(from.city).risk)
        } else {
            f64::INFINITY
        }
    } else {
        match graph.edge(from, to) {
            Some(edge) => f64::from(edge.duration) * mode_weight(edge.mode),
            None => f64::INFINITY,
        }
    }
}

/// Kind of the `from` to `to` transition: `Wait` within a city, the route's
/// mode across cities, `Unknown` when no travel edge exists.
pub fn edge_kind(graph: &TravelGraph, from: TimeNode, to: TimeNode) -> EdgeKind {
    if from.city == to.city {
        EdgeKind::Wait
    } else {
        graph
            .edge(from, to)
            .map_or(EdgeKind::Unknown, |edge| edge.mode.into())
    }
}
