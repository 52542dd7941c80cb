//! Dashboard metric keys per role
//!
//! External dashboard renderers ask which metrics to fetch for a role.
//! Unlike every other role-taking lookup, this one never fails: an unknown
//! or unmapped role gets the Taxpayer list.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{AsRole, Role};

/// Role whose metrics are served when a role has no entry of its own
pub const FALLBACK_ROLE: Role = Role::Taxpayer;

/// Identifier of a dashboard metric (e.g. `enrolledCourses`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricKey(String);

impl MetricKey {
    /// Create a key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labelled metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetric {
    /// Display label
    pub label: String,
    /// Metric identifier
    pub key: MetricKey,
}

impl DashboardMetric {
    /// Create a labelled metric
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: MetricKey::new(key),
        }
    }
}

/// Per-role metric lists, guaranteed to hold the fallback entry
#[derive(Debug, Clone)]
pub struct DashboardCatalog {
    metrics: BTreeMap<Role, Vec<DashboardMetric>>,
    fallback: Vec<DashboardMetric>,
}

impl DashboardCatalog {
    /// Build from validated tables; `fallback` is the Taxpayer entry
    pub(crate) fn new(metrics: BTreeMap<Role, Vec<DashboardMetric>>, fallback: Vec<DashboardMetric>) -> Self {
        Self { metrics, fallback }
    }

    /// Labelled metrics for `role`.
    ///
    /// Deliberately lenient: an unknown identifier or a role without an
    /// entry falls back to the Taxpayer metrics instead of raising
    /// [`UnknownRoleError`](crate::UnknownRoleError).
    pub fn metrics_for(&self, role: impl AsRole) -> &[DashboardMetric] {
        let entry = role.as_role().ok().and_then(|role| self.metrics.get(&role));

        match entry {
            Some(metrics) => metrics,
            None => {
                debug!(fallback = %FALLBACK_ROLE, "no dashboard entry for role, using fallback");
                &self.fallback
            }
        }
    }

    /// Metric keys for `role`, with the same fallback as [`Self::metrics_for`]
    pub fn keys_for(&self, role: impl AsRole) -> Vec<MetricKey> {
        self.metrics_for(role)
            .iter()
            .map(|metric| metric.key.clone())
            .collect()
    }
}
