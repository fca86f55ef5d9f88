use crate::types::{IndexMap, Level, NodeKey};
use derive_more::{Debug, Deref};

/// Result of a successful resolution: every node's level plus the batches
/// they were peeled in.
///
/// Dereferences to the `node -> level` map, iterated in ascending level
/// order and, within a level, in node insertion order.
#[must_use]
#[derive(Debug, Deref, Clone, PartialEq, Eq)]
pub struct LevelAssignment<N: NodeKey> {
    #[deref]
    levels: IndexMap<N, Level>,
    #[debug(skip)]
    batches: Vec<Vec<N>>,
}

impl<N: NodeKey> LevelAssignment<N> {
    pub(super) fn from_batches(batches: Vec<Vec<N>>) -> Self {
        let levels = batches
            .iter()
            .enumerate()
            .flat_map(|(level, batch)| batch.iter().map(move |&node| (node, level)))
            .collect();
        Self { levels, batches }
    }

    /// Level of `node`, or `None` if it was not part of the graph.
    pub fn level(&self, node: &N) -> Option<Level> {
        self.levels.get(node).copied()
    }

    /// Batches in peeling order; `batches()[l]` holds every node at level `l`.
    pub fn batches(&self) -> &[Vec<N>] {
        &self.batches
    }

    /// Nodes at `level`. Empty past the deepest level.
    pub fn nodes_at(&self, level: Level) -> &[N] {
        self.batches
            .get(level)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of levels. `0` for an empty graph.
    pub fn depth(&self) -> usize {
        self.batches.len()
    }

    /// Deepest level, or `None` for an empty graph.
    pub fn max_level(&self) -> Option<Level> {
        self.batches.len().checked_sub(1)
    }

    /// Consume into the plain `node -> level` map.
    pub fn into_levels(self) -> IndexMap<N, Level> {
        self.levels
    }
}
