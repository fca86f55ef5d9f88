mod error;
mod model;

pub use crate::dialogue::{
    error::DialogueError,
    model::{
        Character, CharacterId, Connection, ConnectionId, DialogueEdge, DialogueNode, Line, LineId,
    },
};
use crate::{
    graph::Graph,
    resolver::{LevelAssignment, LevelResolver, ResolveError},
    types::HashSet,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// In-memory dialogue: characters, their lines and the connections between
/// lines.
///
/// Editing operations keep the connection set structurally sound (no
/// self-connections, no duplicates, no references to deleted lines). They do
/// not prevent cycles; those are reported by [`Dialogue::levels`].
///
/// Ids are unique per kind. Loaded state is checked for that, both through
/// [`Dialogue::new`] and when deserializing. Connections to unknown lines are
/// accepted and reported by [`Dialogue::levels`].
#[must_use]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DialogueRecords")]
pub struct Dialogue {
    characters: Vec<Character>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
}

/// Unchecked wire form of a [`Dialogue`].
#[derive(Default, Deserialize)]
#[serde(default)]
struct DialogueRecords {
    characters: Vec<Character>,
    lines: Vec<Line>,
    connections: Vec<Connection>,
}

impl TryFrom<DialogueRecords> for Dialogue {
    type Error = DialogueError;

    fn try_from(records: DialogueRecords) -> Result<Self, Self::Error> {
        let DialogueRecords {
            characters,
            lines,
            connections,
        } = records;
        Self::new(characters, lines, connections)
    }
}

fn check_unique(ids: impl Iterator<Item = u32>, kind: &'static str) -> Result<(), DialogueError> {
    let mut seen = HashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(DialogueError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

fn next_id(ids: impl Iterator<Item = u32>, kind: &'static str) -> Result<u32, DialogueError> {
    match ids.max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(DialogueError::IdsExhausted(kind)),
    }
}

impl Dialogue {
    /// Build a dialogue from existing records, e.g. ones loaded by the host.
    ///
    /// # Errors
    /// [`DialogueError::DuplicateId`] if two characters, lines or
    /// connections share an id.
    pub fn new(
        characters: Vec<Character>,
        lines: Vec<Line>,
        connections: Vec<Connection>,
    ) -> Result<Self, DialogueError> {
        check_unique(characters.iter().map(|c| c.id), "character")?;
        check_unique(lines.iter().map(|l| l.id), "line")?;
        check_unique(connections.iter().map(|c| c.id), "connection")?;
        Ok(Self {
            characters,
            lines,
            connections,
        })
    }

    /// All characters, in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Character by id.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Register a new character and return its id.
    ///
    /// # Errors
    /// [`DialogueError::IdsExhausted`] if the id space is used up.
    pub fn add_character(
        &mut self,
        name: impl Into<String>,
    ) -> Result<CharacterId, DialogueError> {
        let id = next_id(self.characters.iter().map(|c| c.id), "character")?;
        self.characters.push(Character {
            id,
            name: name.into(),
        });
        Ok(id)
    }

    /// Append a line spoken by `character_id`. The new id is one past the
    /// highest existing line id.
    ///
    /// # Errors
    /// [`DialogueError::IdsExhausted`] if the id space is used up.
    pub fn create_line(
        &mut self,
        character_id: CharacterId,
        text: impl Into<String>,
    ) -> Result<LineId, DialogueError> {
        let id = next_id(self.lines.iter().map(|l| l.id), "line")?;
        self.lines.push(Line {
            id,
            character_id,
            text: text.into(),
        });
        Ok(id)
    }

    /// Replace the speaker and text of an existing line.
    ///
    /// # Errors
    /// [`DialogueError::UnknownLine`] if `id` does not exist.
    pub fn update_line(
        &mut self,
        id: LineId,
        character_id: CharacterId,
        text: impl Into<String>,
    ) -> Result<(), DialogueError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(DialogueError::UnknownLine(id))?;
        line.character_id = character_id;
        line.text = text.into();
        Ok(())
    }

    /// Remove a line together with every connection touching it.
    ///
    /// # Errors
    /// [`DialogueError::UnknownLine`] if `id` does not exist.
    pub fn delete_line(&mut self, id: LineId) -> Result<Line, DialogueError> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or(DialogueError::UnknownLine(id))?;
        let line = self.lines.remove(idx);
        let before = self.connections.len();
        self.connections.retain(|c| c.from != id && c.to != id);
        debug!(
            line = id,
            dropped_connections = before - self.connections.len(),
            "deleted line"
        );
        Ok(line)
    }

    /// Connect line `from` to line `to`.
    ///
    /// # Errors
    /// - [`DialogueError::SelfConnection`] if `from == to`.
    /// - [`DialogueError::UnknownLine`] if either line does not exist.
    /// - [`DialogueError::DuplicateConnection`] if the lines are already
    ///   connected in this direction.
    /// - [`DialogueError::IdsExhausted`] if the connection id space is used
    ///   up.
    pub fn connect(&mut self, from: LineId, to: LineId) -> Result<ConnectionId, DialogueError> {
        if from == to {
            return Err(DialogueError::SelfConnection(from));
        }
        for id in [from, to] {
            if self.line(id).is_none() {
                return Err(DialogueError::UnknownLine(id));
            }
        }
        if let Some(existing) = self.connections.iter().find(|c| c.from == from && c.to == to) {
            return Err(DialogueError::DuplicateConnection {
                from,
                to,
                existing: existing.id,
            });
        }
        let id = next_id(self.connections.iter().map(|c| c.id), "connection")?;
        self.connections.push(Connection { id, from, to });
        Ok(id)
    }

    /// Remove a connection by id.
    ///
    /// # Errors
    /// [`DialogueError::UnknownConnection`] if `id` does not exist.
    pub fn disconnect(&mut self, id: ConnectionId) -> Result<Connection, DialogueError> {
        let idx = self
            .connections
            .iter()
            .position(|c| c.id == id)
            .ok_or(DialogueError::UnknownConnection(id))?;
        Ok(self.connections.remove(idx))
    }

    /// Lines as nodes, connections as edges.
    pub fn graph(&self) -> Graph<LineId> {
        Graph::from_parts(
            self.lines.iter().map(|l| l.id),
            self.connections.iter().map(|c| (c.from, c.to)),
        )
    }

    /// Level of every line, using the default resolver.
    ///
    /// # Errors
    /// See [`LevelResolver::resolve`].
    pub fn levels(&self) -> Result<LevelAssignment<LineId>, ResolveError<LineId>> {
        self.levels_with(&LevelResolver::default())
    }

    /// Level of every line, using `resolver`.
    ///
    /// # Errors
    /// See [`LevelResolver::resolve`].
    pub fn levels_with(
        &self,
        resolver: &LevelResolver,
    ) -> Result<LevelAssignment<LineId>, ResolveError<LineId>> {
        resolver.resolve(&self.graph())
    }

    /// Lines projected for rendering, in line order, each carrying its level.
    ///
    /// # Errors
    /// See [`LevelResolver::resolve`]. Nothing is returned on failure.
    pub fn nodes(&self) -> Result<Vec<DialogueNode>, ResolveError<LineId>> {
        let levels = self.levels()?;
        Ok(self
            .lines
            .iter()
            .map(|line| DialogueNode {
                level: levels[&line.id],
                ..DialogueNode::from(line)
            })
            .collect())
    }

    /// Connections projected for rendering, in connection order.
    pub fn edges(&self) -> Vec<DialogueEdge> {
        self.connections.iter().map(DialogueEdge::from).collect()
    }
}
