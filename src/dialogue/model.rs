use crate::types::Level;
use serde::{Deserialize, Serialize};

/// Identifier of a dialogue line.
pub type LineId = u32;
/// Identifier of a connection between two lines.
pub type ConnectionId = u32;
/// Identifier of a speaking character.
pub type CharacterId = u32;

/// A single utterance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Unique line id.
    pub id: LineId,
    /// Speaker of the line.
    pub character_id: CharacterId,
    /// What is said.
    pub text: String,
}

/// Directed link: line `from` leads to line `to`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection id.
    pub id: ConnectionId,
    /// Line that leads on.
    pub from: LineId,
    /// Line led to.
    pub to: LineId,
}

/// A speaker lines are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Unique character id.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
}

/// Render-facing view of a line, annotated with its level.
///
/// Ids are stringified and `group` carries the character id, which is what
/// graph renderers key node styling on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    /// Line id.
    pub id: String,
    /// Line text.
    pub label: String,
    /// Character id.
    pub group: String,
    /// Resolved level, i.e. the layout column.
    pub level: Level,
}

/// Render-facing view of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEdge {
    /// Connection id.
    pub id: String,
    /// Source line id.
    pub from: String,
    /// Target line id.
    pub to: String,
}

impl From<&Line> for DialogueNode {
    /// Level is left at `0`; `Dialogue::nodes` fills in the resolved one.
    fn from(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            label: line.text.clone(),
            group: line.character_id.to_string(),
            level: 0,
        }
    }
}

impl From<&Connection> for DialogueEdge {
    fn from(connection: &Connection) -> Self {
        Self {
            id: connection.id.to_string(),
            from: connection.from.to_string(),
            to: connection.to.to_string(),
        }
    }
}
