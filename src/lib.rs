//! Risk-minimizing travel planning over a time-expanded city graph.
//!
//! The crate answers one question: given a source city, a destination city
//! and a fixed daily operating window, what is the least-risk itinerary,
//! expressed as a sequence of city stays and transport legs? Risk accrues
//! both from waiting in a city (weighted by that city's epidemic risk level)
//! and from riding a transport mode (weighted by trip duration and the mode).
//!
//! The static city/route catalog is loaded once, expanded into a lattice of
//! `(city, hour)` nodes, and searched with a single-source shortest-path pass
//! that covers every arrival hour at once. Callers filter and rank the
//! resulting candidate plans themselves; see [`routing::strategy`].

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{
    Catalog, City, CityId, PlannerModel, Position, RiskLevel, Route, TransportMode,
};
pub use model::graph::{
    DAY_END, DAY_START, EdgeKind, Hour, TimeNode, TravelEdge, TravelGraph, operating_hours,
};
pub use routing::{Plan, PlanRequest, PlanStep, Waypoint, plan_journeys};
