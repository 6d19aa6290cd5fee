//! Risk-minimizing search and plan extraction
//!
//! [`plan_journeys`] is the engine's single entry point: one synchronous
//! search-and-extract run per request, no shared state beyond the
//! immutable model.

pub mod cost;
pub mod dijkstra;
pub mod plan;
pub mod strategy;

pub use dijkstra::SearchState;
pub use plan::{Plan, PlanStep, Waypoint};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::PlannerModel;

/// A planning request: source and destination city names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub source: String,
    pub destination: String,
}

/// Computes every candidate itinerary from the request's source (departing
/// at the day's first hour) to its destination.
///
/// The returned list is unordered and may be empty; an empty list means no
/// feasible itinerary exists, which is not an error. Ranking and deadline
/// filtering belong to the caller, see [`strategy`].
///
/// # Errors
///
/// Returns [`Error::CityNotFound`] if either city name is absent from the
/// catalog; the search is not attempted in that case.
pub fn plan_journeys(model: &PlannerModel, request: &PlanRequest) -> Result<Vec<Plan>, Error> {
    let catalog = model.catalog();
    let source = catalog.require_city(&request.source)?;
    let destination = catalog.require_city(&request.destination)?;

    debug!(
        "Planning request: {} -> {}",
        request.source, request.destination
    );

    let state = dijkstra::search(catalog, model.graph(), source);
    let plans = plan::extract_plans(catalog, &state, destination);

    info!(
        "Planner produced {} candidate itineraries for {} -> {}",
        plans.len(),
        request.source,
        request.destination
    );
    Ok(plans)
}
