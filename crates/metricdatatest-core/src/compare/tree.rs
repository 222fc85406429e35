//! Resource, scope and metric level comparators

use metricdatatest_core_types::{Metrics, ResourceMetrics, ScopeMetrics};

use super::aggregation::equal_aggregations;
use super::multiset_reason;
use crate::config::Config;
use crate::diff::not_equal_str;

/// Compare identity fields and aggregated data of two metrics
pub fn equal_metrics(a: &Metrics, b: &Metrics, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.name != b.name {
        reasons.push(not_equal_str("Name", &a.name, &b.name));
    }
    if a.description != b.description {
        reasons.push(not_equal_str("Description", &a.description, &b.description));
    }
    if a.unit != b.unit {
        reasons.push(not_equal_str("Unit", &a.unit, &b.unit));
    }

    let data = equal_aggregations(a.data.as_ref(), b.data.as_ref(), cfg);
    if !data.is_empty() {
        reasons.push("Metrics Data not equal:".to_string());
        reasons.extend(data);
    }
    reasons
}

/// Compare the scope and the metric multiset
pub fn equal_scope_metrics(a: &ScopeMetrics, b: &ScopeMetrics, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if a.scope != b.scope {
        reasons.push(not_equal_str("Scope", &a.scope, &b.scope));
    }
    reasons.extend(multiset_reason(
        "ScopeMetrics Metrics not equal",
        &a.metrics,
        &b.metrics,
        |x, y| equal_metrics(x, y, cfg).is_empty(),
    ));
    reasons
}

/// Compare the resource and the scope metrics multiset
pub fn equal_resource_metrics(a: &ResourceMetrics, b: &ResourceMetrics, cfg: Config) -> Vec<String> {
    let mut reasons = Vec::new();
    if !a.resource.equal(&b.resource) {
        reasons.push(not_equal_str("Resources", &a.resource, &b.resource));
    }
    reasons.extend(multiset_reason(
        "ResourceMetrics ScopeMetrics not equal",
        &a.scope_metrics,
        &b.scope_metrics,
        |x, y| equal_scope_metrics(x, y, cfg).is_empty(),
    ));
    reasons
}
