use serde::{Deserialize, Serialize};

/// How the resolver treats an edge whose endpoint is missing from the node
/// set.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingEdges {
    /// Validate every edge before peeling and fail with
    /// `ResolveError::DanglingEdge` on the first missing endpoint.
    #[default]
    Reject,
    /// Skip validation. A missing predecessor can never be resolved, so its
    /// successors stay unresolved and the graph is reported as cyclic.
    /// Edges whose `to` endpoint is missing are ignored.
    Unsatisfiable,
}

/// Resolver configuration.
///
/// Deserializable so that a host application can embed it in its own
/// configuration file, e.g. `{ "dangling_edges": "unsatisfiable" }`.
#[must_use]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Policy for edges referencing unknown nodes.
    pub dangling_edges: DanglingEdges,
}

impl ResolverConfig {
    /// Replace the dangling edge policy.
    pub fn with_dangling_edges(mut self, dangling_edges: DanglingEdges) -> Self {
        self.dangling_edges = dangling_edges;
        self
    }
}
