//! Caller-side ranking strategies
//!
//! The engine emits every candidate plan and deliberately never picks a
//! winner; these helpers are the ranking policies layered on top. On equal
//! risk the earlier candidate in the list wins.

use crate::model::graph::Hour;
use crate::routing::plan::Plan;

/// The plan with the least accumulated risk, if any.
pub fn min_risk(plans: &[Plan]) -> Option<&Plan> {
    min_risk_of(plans.iter())
}

/// The least-risk plan among those arriving no later than
/// `latest_arrival`.
pub fn min_risk_by_deadline(plans: &[Plan], latest_arrival: Hour) -> Option<&Plan> {
    min_risk_of(plans.iter().filter(|p| p.arrival_time <= latest_arrival))
}

fn min_risk_of<'a>(plans: impl Iterator<Item = &'a Plan>) -> Option<&'a Plan> {
    plans.fold(None, |best, plan| match best {
        Some(b) if b.risk <= plan.risk => Some(b),
        _ => Some(plan),
    })
}
