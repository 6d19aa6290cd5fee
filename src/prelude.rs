// Re-export of key components
pub use crate::error::Error;
pub use crate::loading::{PlannerConfig, catalog_from_json, create_planner_model};
pub use crate::model::{Catalog, City, PlannerModel, RiskLevel, Route, TransportMode};
pub use crate::routing::strategy::{min_risk, min_risk_by_deadline};
pub use crate::routing::{Plan, PlanRequest, plan_journeys};

// Core types of the time-expanded graph
pub use crate::model::graph::{EdgeKind, Hour, TimeNode, TravelGraph};
pub use crate::model::graph::{DAY_END, DAY_START};
