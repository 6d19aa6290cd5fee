//! Time-expanded search graph
//!
//! The search space is a lattice with one vertex per city per operating
//! hour. Wait edges between hours of the same city are implicit and derived
//! on demand from the city's risk level; travel edges are materialized here
//! from the catalog's route records, keyed by the ordered node pair.

use std::ops::RangeInclusive;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::catalog::{Catalog, CityId, Route, TransportMode};

/// Hour of the operating day.
pub type Hour = u8;

/// Earliest operating hour; every search starts here.
pub const DAY_START: Hour = 6;
/// Latest operating hour; no travel past this point.
pub const DAY_END: Hour = 23;

/// The fixed discrete hour domain of the operating day.
pub fn operating_hours() -> RangeInclusive<Hour> {
    DAY_START..=DAY_END
}

/// Number of hours in the operating day.
pub fn hours_per_day() -> usize {
    usize::from(DAY_END - DAY_START) + 1
}

/// A `(city, hour)` vertex of the time-expanded graph. Plain value
/// semantics: two nodes with the same city and hour are the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeNode {
    pub city: CityId,
    pub hour: Hour,
}

impl TimeNode {
    pub fn new(city: CityId, hour: Hour) -> Self {
        Self { city, hour }
    }
}

/// Kind of a transition between two nodes, as reported in emitted plans.
///
/// `Unknown` marks an absent cross-city edge; it never appears in a plan,
/// callers must treat it as "no edge here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    Wait,
    Plane,
    Train,
    Bus,
    Arrived,
    Unknown,
}

impl From<TransportMode> for EdgeKind {
    fn from(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Plane => Self::Plane,
            TransportMode::Train => Self::Train,
            TransportMode::Bus => Self::Bus,
        }
    }
}

/// A materialized travel edge: trip duration in hours plus the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelEdge {
    pub duration: u8,
    pub mode: TransportMode,
}

/// Travel-edge lookup of the time-expanded graph, built once from the
/// catalog and shared read-only across searches.
#[derive(Debug, Clone, Default)]
pub struct TravelGraph {
    edges: HashMap<(TimeNode, TimeNode), TravelEdge>,
}

impl TravelGraph {
    /// Materializes the travel edges for every route in the catalog.
    ///
    /// Duplicate routes and routes falling outside the operating day are
    /// logged and skipped; the first definition of an edge wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CityNotFound`] if a route references a city the
    /// catalog does not contain.
    pub fn build(catalog: &Catalog) -> Result<Self, Error> {
        let mut graph = Self {
            edges: HashMap::with_capacity(catalog.routes().len()),
        };
        for route in catalog.routes() {
            graph.add_route(catalog, route)?;
        }
        Ok(graph)
    }

    fn add_route(&mut self, catalog: &Catalog, route: &Route) -> Result<(), Error> {
        let from = catalog.require_city(&route.from)?;
        let to = catalog.require_city(&route.to)?;

        if from == to {
            warn!(
                "Route {} -> {} departs and arrives in the same city, skipping",
                route.from, route.to
            );
            return Ok(());
        }
        if route.end_time <= route.start_time
            || route.start_time < DAY_START
            || route.end_time > DAY_END
        {
            warn!(
                "Route {} -> {} ({}:00 - {}:00) falls outside the operating day, skipping",
                route.from, route.to, route.start_time, route.end_time
            );
            return Ok(());
        }

        let key = (
            TimeNode::new(from, route.start_time),
            TimeNode::new(to, route.end_time),
        );
        match self.edges.entry(key) {
            Entry::Occupied(_) => {
                warn!(
                    "Duplicate route {} ({}:00) -> {} ({}:00), keeping the first definition",
                    route.from, route.start_time, route.to, route.end_time
                );
            }
            Entry::Vacant(entry) => {
                entry.insert(TravelEdge {
                    duration: route.end_time - route.start_time,
                    mode: route.mode,
                });
            }
        }
        Ok(())
    }

    /// Travel edge between two nodes, if one was materialized.
    pub fn edge(&self, from: TimeNode, to: TimeNode) -> Option<&TravelEdge> {
        self.edges.get(&(from, to))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{City, Position, RiskLevel};

    fn catalog(routes: Vec<Route>) -> Catalog {
        let cities = ["A", "B"]
            .iter()
            .map(|name| City {
                name: (*name).to_string(),
                position: Position {
                    longitude: 0.0,
                    latitude: 0.0,
                },
                risk: RiskLevel::Low,
            })
            .collect();
        Catalog::new(cities, routes).unwrap()
    }

    fn route(from: &str, to: &str, start: Hour, end: Hour, mode: TransportMode) -> Route {
        Route {
            from: from.to_string(),
            to: to.to_string(),
            start_time: start,
            end_time: end,
            mode,
        }
    }

    #[test]
    fn materializes_travel_edges() {
        let catalog = catalog(vec![route("A", "B", 8, 10, TransportMode::Train)]);
        let graph = TravelGraph::build(&catalog).unwrap();

        assert_eq!(graph.edge_count(), 1);
        let edge = graph
            .edge(TimeNode::new(0, 8), TimeNode::new(1, 10))
            .unwrap();
        assert_eq!(edge.duration, 2);
        assert_eq!(edge.mode, TransportMode::Train);
        assert!(graph.edge(TimeNode::new(1, 10), TimeNode::new(0, 8)).is_none());
    }

    #[test]
    fn duplicate_route_keeps_first_definition() {
        let catalog = catalog(vec![
            route("A", "B", 8, 10, TransportMode::Train),
            route("A", "B", 8, 10, TransportMode::Plane),
        ]);
        let graph = TravelGraph::build(&catalog).unwrap();

        assert_eq!(graph.edge_count(), 1);
        let edge = graph
            .edge(TimeNode::new(0, 8), TimeNode::new(1, 10))
            .unwrap();
        assert_eq!(edge.mode, TransportMode::Train);
    }

    #[test]
    fn same_pair_different_hours_are_distinct() {
        let catalog = catalog(vec![
            route("A", "B", 8, 10, TransportMode::Train),
            route("A", "B", 12, 14, TransportMode::Train),
        ]);
        let graph = TravelGraph::build(&catalog).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn out_of_window_routes_are_clipped() {
        let catalog = catalog(vec![
            route("A", "B", 22, 24, TransportMode::Bus),
            route("A", "B", 4, 7, TransportMode::Bus),
            route("A", "B", 10, 10, TransportMode::Bus),
            route("A", "B", 12, 9, TransportMode::Bus),
        ]);
        let graph = TravelGraph::build(&catalog).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn route_to_unknown_city_is_fatal() {
        let catalog = catalog(vec![route("A", "Z", 8, 10, TransportMode::Bus)]);
        assert!(matches!(
            TravelGraph::build(&catalog),
            Err(Error::CityNotFound(s)) if s == "Z"
        ));
    }

    #[test]
    fn edge_kind_from_mode() {
        assert_eq!(EdgeKind::from(TransportMode::Plane), EdgeKind::Plane);
        assert_eq!(EdgeKind::from(TransportMode::Train), EdgeKind::Train);
        assert_eq!(EdgeKind::from(TransportMode::Bus), EdgeKind::Bus);
    }
}
