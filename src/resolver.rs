mod assignment;
mod error;

/// Successful level resolution output.
pub use crate::resolver::assignment::LevelAssignment;
/// Error returned by `LevelResolver::resolve` when the graph cannot be
/// leveled.
pub use crate::resolver::error::ResolveError;
use crate::{
    config::{DanglingEdges, ResolverConfig},
    graph::{Edge, Graph},
    types::{HashSet, NodeKey},
};
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

/// Assigns every node of a [`Graph`] its dependency level.
///
/// A node's level is the index of the peeling round (batch) in which all of
/// its predecessors had already been placed in earlier rounds. Nodes with no
/// incoming edges land in batch 0, so each disconnected component is leveled
/// from its own roots. The result coincides with the longest path, in edges,
/// from any root.
///
/// The resolver holds only its configuration and is freely shareable between
/// threads.
#[must_use]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LevelResolver {
    config: ResolverConfig,
}

impl LevelResolver {
    /// Resolver with an explicit configuration.
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Compute the level of every node by batch peeling.
    ///
    /// # Errors
    /// - [`ResolveError::DanglingEdge`] if an edge endpoint is missing from the
    ///   node set and the policy is [`DanglingEdges::Reject`].
    /// - [`ResolveError::CyclicGraph`] if some round peels nothing while
    ///   nodes are still unresolved.
    pub fn resolve<N: NodeKey>(
        &self,
        graph: &Graph<N>,
    ) -> Result<LevelAssignment<N>, ResolveError<N>> {
        // Example:
        //
        //   1     5
        //   |\    |
        //   2 3   6
        //    \|
        //     4
        //
        // - Round 0: 1 and 5 have no parents => batch [1, 5].
        // - Round 1: 2, 3, 6 only depend on batch 0 => batch [2, 3, 6].
        // - Round 2: 4 depends on 2 and 3, both placed => batch [4].
        //
        // Phase 1: Reject edges pointing outside of the node set, unless the
        // caller opted into treating them as never-satisfiable dependencies.
        if self.config.dangling_edges == DanglingEdges::Reject
            && let Some(&Edge { from, to }) = graph.first_dangling_edge()
        {
            let missing = if graph.contains_node(&from) { to } else { from };
            debug!(?from, ?to, ?missing, "rejecting dangling edge");
            return Err(ResolveError::DanglingEdge { from, to, missing });
        }

        // Phase 2: Collapse the edge list into distinct dependency sets.
        let child_to_parents = graph.dependency_sets();

        // Phase 3: Peel. Membership in `resolved` is only extended after a
        // whole batch has been chosen, so a node never sees a sibling from its
        // own round as satisfied.
        let mut unresolved: Vec<N> = graph.nodes().iter().copied().collect();
        let mut resolved = HashSet::with_capacity_and_hasher(unresolved.len(), FxBuildHasher);
        let mut batches: Vec<Vec<N>> = Vec::new();

        while !unresolved.is_empty() {
            let (batch, rest): (Vec<N>, Vec<N>) = unresolved.into_iter().partition(|node| {
                child_to_parents
                    .get(node)
                    .is_none_or(|parents| parents.iter().all(|parent| resolved.contains(parent)))
            });
            if batch.is_empty() {
                // Every remaining node waits on another remaining node (or on
                // a node that does not exist).
                debug!(
                    unresolved = rest.len(),
                    resolved = resolved.len(),
                    "cyclic dependency detected"
                );
                return Err(ResolveError::CyclicGraph { unresolved: rest });
            }
            trace!(level = batches.len(), size = batch.len(), "peeled batch");
            resolved.extend(batch.iter().copied());
            batches.push(batch);
            unresolved = rest;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            depth = batches.len(),
            "resolved levels"
        );
        Ok(LevelAssignment::from_batches(batches))
    }
}

/// Resolve levels for a node set and an edge list with the default
/// configuration.
///
/// # Errors
/// See [`LevelResolver::resolve`].
pub fn resolve_levels<N, E>(
    nodes: impl IntoIterator<Item = N>,
    edges: impl IntoIterator<Item = E>,
) -> Result<LevelAssignment<N>, ResolveError<N>>
where
    N: NodeKey,
    E: Into<Edge<N>>,
{
    LevelResolver::default().resolve(&Graph::from_parts(nodes, edges))
}
