//! Dependency-level resolution for dialogue graphs.
//!
//! A dialogue is a directed graph of lines: a connection `from -> to` means
//! line `from` leads to line `to`. To lay such a graph out left-to-right,
//! every line needs a column, its *level*, such that each line sits strictly
//! to the right of every line leading into it.
//!
//! This crate:
//! - Peels the graph in batches, Kahn-style. Batch 0 holds every node without
//!   incoming edges; batch `k` holds every remaining node whose predecessors
//!   all sit in batches `0..k`. A node's level is its batch index.
//! - Detects cycles (self-loops included) inside the algorithm: a round that
//!   peels nothing while nodes remain is reported as an error instead of
//!   looping.
//! - Validates, by default, that every edge references a known node.
//!
//! Key modules:
//! - `graph`: the node set + edge list wrapper fed to the resolver.
//! - `resolver`: `LevelResolver`, `LevelAssignment` and `ResolveError`.
//! - `config`: `ResolverConfig`, the dangling edge policy.
//! - `dialogue`: lines, characters and connections with the structural
//!   editing rules of a dialogue editor, projected into level-annotated
//!   render nodes.
//!
//! Quick start:
//! ```
//! use dlv::resolver::resolve_levels;
//!
//! let levels = resolve_levels([1, 2, 3, 4], [(1, 2), (1, 3), (2, 4), (3, 4)]).unwrap();
//! assert_eq!(levels.level(&1), Some(0));
//! assert_eq!(levels.level(&4), Some(2));
//! ```
//!
//! Resolution is a pure function of its input: no I/O, no shared state. It
//! is meant to be rerun on every change to the underlying lines and
//! connections.

/// Resolver configuration.
pub mod config;
/// Dialogue model: lines, characters and connections.
///
/// Owns the structural rules of connection editing and turns the dialogue
/// into render nodes/edges annotated with resolved levels.
pub mod dialogue;
/// Directed graph input of the resolver.
pub mod graph;
/// Batch-peeling level resolution with cycle detection.
pub mod resolver;
/// Common aliases and the `NodeKey` bound for node identifiers.
pub mod types;
