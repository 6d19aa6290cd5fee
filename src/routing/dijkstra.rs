//! Single-source risk-minimizing search over the full node lattice
//!
//! A deliberately naive Dijkstra: the lattice is small (|cities| x 18
//! hours), so minimum extraction is a linear scan over the candidate list
//! instead of a priority queue. The search never exits early: distances to
//! every arrival hour at the destination are needed, because the caller may
//! filter plans by a deadline afterwards.

use hashbrown::HashMap;
use itertools::iproduct;
use log::debug;

use crate::model::catalog::{Catalog, CityId};
use crate::model::graph::{DAY_START, EdgeKind, TimeNode, TravelGraph, operating_hours};
use crate::routing::cost;

/// Distance and predecessor maps produced by one search run.
///
/// A node absent from `prev` was never relaxed, meaning it is unreachable
/// from the source; absent or infinite distances mean the same.
#[derive(Debug, Clone)]
pub struct SearchState {
    dist: HashMap<TimeNode, f64>,
    prev: HashMap<TimeNode, (TimeNode, EdgeKind)>,
}

impl SearchState {
    /// Accumulated risk of the best known path to `node`, infinite when
    /// unreached.
    pub fn distance(&self, node: TimeNode) -> f64 {
        self.dist.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    /// Predecessor of `node` on its best path and the kind of the edge
    /// taken, `None` when the node was never relaxed.
    pub fn predecessor(&self, node: TimeNode) -> Option<(TimeNode, EdgeKind)> {
        self.prev.get(&node).copied()
    }

    pub(crate) fn predecessors(
        &self,
    ) -> impl Iterator<Item = (TimeNode, (TimeNode, EdgeKind))> + '_ {
        self.prev.iter().map(|(&node, &edge)| (node, edge))
    }
}

/// Runs the search from `(source, DAY_START)` over every catalog city and
/// operating hour.
///
/// Ties in the minimum extraction are broken by candidate insertion order:
/// catalog city order major, ascending hour minor, first encountered wins.
/// The order is deterministic, so repeated runs produce identical maps.
pub fn search(catalog: &Catalog, graph: &TravelGraph, source: CityId) -> SearchState {
    let mut queue: Vec<TimeNode> = iproduct!(0..catalog.city_count(), operating_hours())
        .map(|(city, hour)| TimeNode::new(city, hour))
        .collect();

    let mut dist: HashMap<TimeNode, f64> = HashMap::with_capacity(queue.len());
    let mut prev: HashMap<TimeNode, (TimeNode, EdgeKind)> = HashMap::new();
    for &node in &queue {
        dist.insert(node, f64::INFINITY);
    }
    dist.insert(TimeNode::new(source, DAY_START), 0.0);

    debug!(
        "Search from city {source} over {} nodes, {} travel edges",
        queue.len(),
        graph.edge_count()
    );

    while !queue.is_empty() {
        let mut best = 0;
        for idx in 1..queue.len() {
            if dist[&queue[idx]] < dist[&queue[best]] {
                best = idx;
            }
        }
        // Plain remove keeps the candidate order, and with it the tie-break.
        let u = queue.remove(best);
        let dist_u = dist[&u];

        for &v in &queue {
            let alt = dist_u + cost::edge_cost(catalog, graph, u, v);
            if alt < dist[&v] {
                dist.insert(v, alt);
                prev.insert(v, (u, cost::edge_kind(graph, u, v)));
            }
        }
    }

    SearchState { dist, prev }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::model::catalog::{City, Position, RiskLevel, Route, TransportMode};
    use crate::model::graph::operating_hours;

    fn make_catalog(cities: &[(&str, RiskLevel)], routes: Vec<Route>) -> Catalog {
        let cities = cities
            .iter()
            .map(|(name, risk)| City {
                name: (*name).to_string(),
                position: Position {
                    longitude: 0.0,
                    latitude: 0.0,
                },
                risk: *risk,
            })
            .collect();
        Catalog::new(cities, routes).unwrap()
    }

    fn route(from: &str, to: &str, start: u8, end: u8, mode: TransportMode) -> Route {
        Route {
            from: from.to_string(),
            to: to.to_string(),
            start_time: start,
            end_time: end,
            mode,
        }
    }

    #[test]
    fn source_distance_is_zero() {
        let catalog = make_catalog(&[("A", RiskLevel::Low)], Vec::new());
        let graph = TravelGraph::build(&catalog).unwrap();
        let state = search(&catalog, &graph, 0);

        assert_eq!(state.distance(TimeNode::new(0, DAY_START)), 0.0);
    }

    #[test]
    fn waiting_accumulates_city_risk() {
        let catalog = make_catalog(&[("A", RiskLevel::High)], Vec::new());
        let graph = TravelGraph::build(&catalog).unwrap();
        let state = search(&catalog, &graph, 0);

        // Staying put from 6 to 10 costs 4 hours at 0.9 per hour.
        let d = state.distance(TimeNode::new(0, 10));
        assert!((d - 3.6).abs() < 1e-9);
        assert_eq!(
            state.predecessor(TimeNode::new(0, 10)).unwrap().1,
            EdgeKind::Wait
        );
    }

    #[test]
    fn distances_are_non_negative_and_bounded_by_paths() {
        let catalog = make_catalog(
            &[("A", RiskLevel::Low), ("B", RiskLevel::Medium)],
            vec![route("A", "B", 8, 10, TransportMode::Train)],
        );
        let graph = TravelGraph::build(&catalog).unwrap();
        let state = search(&catalog, &graph, 0);

        for (city, hour) in iproduct!(0..catalog.city_count(), operating_hours()) {
            assert!(state.distance(TimeNode::new(city, hour)) >= 0.0);
        }
        // Wait 6->8 at A (0.4), train 8->10 (10.0).
        let arrival = state.distance(TimeNode::new(1, 10));
        assert!((arrival - 10.4).abs() < 1e-9);
    }

    #[test]
    fn other_city_unreachable_without_routes() {
        let catalog = make_catalog(
            &[("A", RiskLevel::Low), ("B", RiskLevel::Low)],
            Vec::new(),
        );
        let graph = TravelGraph::build(&catalog).unwrap();
        let state = search(&catalog, &graph, 0);

        for hour in operating_hours() {
            assert_eq!(state.distance(TimeNode::new(1, hour)), f64::INFINITY);
            assert!(state.predecessor(TimeNode::new(1, hour)).is_none());
        }
    }

    #[test]
    fn hours_before_day_start_stay_unreached() {
        let catalog = make_catalog(&[("A", RiskLevel::Low)], Vec::new());
        let graph = TravelGraph::build(&catalog).unwrap();
        let state = search(&catalog, &graph, 0);

        // No backward-in-time edge exists, so nothing can reach hour 6
        // again, and nothing at all sits below it.
        assert!(state.predecessor(TimeNode::new(0, DAY_START)).is_none());
    }

    #[test]
    fn equal_cost_paths_resolve_deterministically() {
        // Two routes of identical total cost into C; repeated runs must
        // pick the same predecessor.
        let catalog = make_catalog(
            &[
                ("A", RiskLevel::Low),
                ("B", RiskLevel::Low),
                ("C", RiskLevel::Low),
            ],
            vec![
                route("A", "B", 6, 8, TransportMode::Bus),
                route("A", "C", 6, 8, TransportMode::Bus),
                route("B", "C", 9, 10, TransportMode::Bus),
            ],
        );
        let graph = TravelGraph::build(&catalog).unwrap();

        let first = search(&catalog, &graph, 0);
        for _ in 0..10 {
            let again = search(&catalog, &graph, 0);
            for (city, hour) in iproduct!(0..catalog.city_count(), operating_hours()) {
                let node = TimeNode::new(city, hour);
                assert_eq!(first.distance(node), again.distance(node));
                assert_eq!(first.predecessor(node), again.predecessor(node));
            }
        }
    }
}
