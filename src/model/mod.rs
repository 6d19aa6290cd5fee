//! Data model for the travel planner
//!
//! Contains the static city/route catalog and the time-expanded graph
//! built from it.

pub mod catalog;
pub mod graph;

pub use catalog::{Catalog, City, CityId, Position, RiskLevel, Route, TransportMode};
pub use graph::{EdgeKind, Hour, TimeNode, TravelEdge, TravelGraph};

use log::info;

use crate::error::Error;

/// Immutable planner model: the catalog plus the prebuilt travel-edge
/// lookup. Safe to share across concurrent searches, no locking needed.
#[derive(Debug, Clone)]
pub struct PlannerModel {
    catalog: Catalog,
    graph: TravelGraph,
}

impl PlannerModel {
    /// Builds the travel graph and wraps it with the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog's routes reference unknown cities.
    pub fn new(catalog: Catalog) -> Result<Self, Error> {
        let graph = TravelGraph::build(&catalog)?;
        info!(
            "Planner model ready: {} cities, {} travel edges, {} search nodes",
            catalog.city_count(),
            graph.edge_count(),
            catalog.city_count() * graph::hours_per_day()
        );
        Ok(Self { catalog, graph })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &TravelGraph {
        &self.graph
    }

    /// Total vertex count of the time-expanded graph.
    pub fn node_count(&self) -> usize {
        self.catalog.city_count() * graph::hours_per_day()
    }
}
