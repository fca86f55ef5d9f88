use crate::dialogue::model::{ConnectionId, LineId};
use thiserror::Error;

/// Error kind for structural edits of a [`Dialogue`](crate::dialogue::Dialogue).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DialogueError {
    /// No line with this id exists.
    #[error("cannot find line with ID {0}")]
    UnknownLine(LineId),
    /// No connection with this id exists.
    #[error("cannot find connection with ID {0}")]
    UnknownConnection(ConnectionId),
    /// A line cannot lead to itself.
    #[error("line {0} cannot be connected to itself")]
    SelfConnection(LineId),
    /// The two lines are already connected in this direction.
    #[error("line {from} is already connected to line {to} (connection {existing})")]
    DuplicateConnection {
        /// Source line.
        from: LineId,
        /// Target line.
        to: LineId,
        /// The connection that already links them.
        existing: ConnectionId,
    },
    /// Two records of the same kind share an id.
    #[error("duplicate {kind} ID {id}")]
    DuplicateId {
        /// Record kind: `character`, `line` or `connection`.
        kind: &'static str,
        /// The repeated id.
        id: u32,
    },
    /// The id space of the given kind is used up.
    #[error("no {0} IDs left")]
    IdsExhausted(&'static str),
}
