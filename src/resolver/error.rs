use crate::types::NodeKey;
use thiserror::Error;

/// Error kind for level resolution failures.
///
/// No partial assignment accompanies an error: the whole computation is
/// void and the caller decides how to surface it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError<N: NodeKey> {
    /// No remaining node could be peeled. The nodes listed are everything
    /// left unresolved at that point, which includes every node on a cycle
    /// (self-loops too) and everything downstream of one.
    #[error("graph contains cycle(s) among unresolved nodes {unresolved:?}")]
    CyclicGraph {
        /// Unresolved nodes, in graph insertion order.
        unresolved: Vec<N>,
    },
    /// An edge references a node that is not part of the graph.
    #[error("edge {from:?} -> {to:?} references unknown node {missing:?}")]
    DanglingEdge {
        /// Edge source.
        from: N,
        /// Edge target.
        to: N,
        /// The endpoint absent from the node set.
        missing: N,
    },
}

impl<N: NodeKey> ResolveError<N> {
    /// Whether this error reports a cyclic dependency.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CyclicGraph { .. })
    }
}
