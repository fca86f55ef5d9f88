use crate::types::{IndexMap, IndexSet, NodeKey};
use derive_more::Display;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

/// Directed dependency: `from` must be placed before `to`.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{from:?} -> {to:?}")]
pub struct Edge<N> {
    /// Predecessor.
    pub from: N,
    /// Successor.
    pub to: N,
}

impl<N> Edge<N> {
    /// Create an edge `from -> to`.
    pub const fn new(from: N, to: N) -> Self {
        Self { from, to }
    }

    /// Whether the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((from, to): (N, N)) -> Self {
        Self { from, to }
    }
}

/// A node set plus a directed edge list.
///
/// Nodes keep their insertion order and are deduplicated; edges are stored
/// as given, duplicates included. Endpoints are not checked here, see
/// `ResolverConfig::dangling_edges`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: NodeKey + Serialize",
    deserialize = "N: NodeKey + Deserialize<'de>"
))]
pub struct Graph<N: NodeKey> {
    nodes: IndexSet<N>,
    edges: Vec<Edge<N>>,
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: IndexSet::default(),
            edges: Vec::new(),
        }
    }
}

impl<N: NodeKey> Graph<N> {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node collection and an edge collection.
    pub fn from_parts<E>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Self
    where
        E: Into<Edge<N>>,
    {
        Self {
            nodes: nodes.into_iter().collect(),
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder-style `add_node`.
    pub fn with_node(mut self, node: N) -> Self {
        self.add_node(node);
        self
    }

    /// Builder-style `add_edge`.
    pub fn with_edge(mut self, from: N, to: N) -> Self {
        self.add_edge(from, to);
        self
    }

    /// Insert a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Append the edge `from -> to`.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.edges.push(Edge { from, to });
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &IndexSet<N> {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Whether `node` belongs to the node set.
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distinct predecessors of `node`, in edge order. Empty for nodes
    /// outside of the node set.
    pub fn dependencies(&self, node: N) -> IndexSet<N> {
        self.dependency_sets()
            .swap_remove(&node)
            .unwrap_or_default()
    }

    /// First edge with an endpoint outside of the node set.
    pub fn first_dangling_edge(&self) -> Option<&Edge<N>> {
        self.edges
            .iter()
            .find(|edge| !self.nodes.contains(&edge.from) || !self.nodes.contains(&edge.to))
    }

    /// Child -> distinct parents, for every edge whose `to` is a known node.
    ///
    /// Nodes without incoming edges have no entry. This is the dependency
    /// relation the resolver peels against.
    pub fn dependency_sets(&self) -> IndexMap<N, IndexSet<N>> {
        let mut child_to_parents =
            IndexMap::with_capacity_and_hasher(self.nodes.len(), FxBuildHasher);
        for &Edge { from, to } in &self.edges {
            if !self.nodes.contains(&to) {
                continue;
            }
            child_to_parents
                .entry(to)
                .or_insert_with(IndexSet::default)
                .insert(from);
        }
        child_to_parents
    }
}
