use core::{fmt::Debug, hash::Hash};
use indexmap::{IndexMap as _IndexMap, IndexSet as _IndexSet};
use rustc_hash::FxBuildHasher;
use std::collections::HashSet as _HashSet;

/// Identifier of a node in the level graph.
///
/// Blanket-implemented for every `Copy + Eq + Hash + Debug` type, so integer
/// line ids, interned string ids (`&'static str`) and custom newtypes all
/// work out of the box.
pub trait NodeKey: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> NodeKey for T {}

/// Level of a node: the 0-based index of the batch it was resolved in.
pub type Level = usize;

pub(crate) type HashSet<T> = _HashSet<T, FxBuildHasher>;
/// `IndexMap` type with fast hasher.
pub type IndexMap<K, V> = _IndexMap<K, V, FxBuildHasher>;
/// `IndexSet` type with fast hasher.
pub type IndexSet<T> = _IndexSet<T, FxBuildHasher>;
