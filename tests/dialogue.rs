#![allow(missing_docs)]

use dlv::{
    dialogue::{Character, Connection, Dialogue, DialogueEdge, DialogueError, DialogueNode, Line},
    resolver::ResolveError,
};

fn line(id: u32, character_id: u32, text: &str) -> Line {
    Line {
        id,
        character_id,
        text: text.to_owned(),
    }
}

/// Two characters, nine lines and the ten connections of the demo dialogue.
fn sample() -> Dialogue {
    let characters = vec![
        Character {
            id: 1,
            name: "Hugo".to_owned(),
        },
        Character {
            id: 2,
            name: "Stranger".to_owned(),
        },
    ];
    let lines = vec![
        line(1, 1, "Hey, who are you?"),
        line(2, 2, "I could ask you the same."),
        line(3, 2, "My name does not matter."),
        line(4, 1, "I am Hugo. And you...?"),
        line(5, 2, "I am Hugo as well."),
        line(6, 2, "None of your business!"),
        line(7, 1, "Fine, be a jerk."),
        line(8, 1, "Nice to meet you!"),
        line(9, 1, "Ok, bye!"),
    ];
    let connections = [
        (1, 2),
        (2, 4),
        (4, 5),
        (4, 6),
        (6, 7),
        (5, 8),
        (8, 9),
        (1, 3),
        (3, 7),
        (7, 9),
    ]
    .into_iter()
    .zip(1..)
    .map(|((from, to), id)| Connection { id, from, to })
    .collect();
    Dialogue::new(characters, lines, connections).unwrap()
}

#[test]
fn sample_nodes_carry_levels() {
    let nodes = sample().nodes().unwrap();
    let levels: Vec<_> = nodes.iter().map(|n| n.level).collect();
    assert_eq!(levels, vec![0, 1, 1, 2, 3, 3, 4, 4, 5]);
    assert_eq!(
        nodes[3],
        DialogueNode {
            id: "4".to_owned(),
            label: "I am Hugo. And you...?".to_owned(),
            group: "1".to_owned(),
            level: 2,
        }
    );
}

#[test]
fn sample_edges_are_stringified() {
    let edges = sample().edges();
    assert_eq!(edges.len(), 10);
    assert_eq!(
        edges[0],
        DialogueEdge {
            id: "1".to_owned(),
            from: "1".to_owned(),
            to: "2".to_owned(),
        }
    );
}

#[test]
fn create_line_allocates_next_id() {
    let mut dialogue = Dialogue::default();
    assert_eq!(dialogue.create_line(1, "first").unwrap(), 1);
    assert_eq!(dialogue.create_line(1, "second").unwrap(), 2);

    let mut dialogue = sample();
    dialogue.delete_line(4).unwrap();
    assert_eq!(dialogue.create_line(2, "late").unwrap(), 10);
    assert_eq!(dialogue.line(10).unwrap().text, "late");
}

#[test]
fn new_line_is_isolated_at_level_zero() {
    let mut dialogue = sample();
    let id = dialogue.create_line(2, "Wait!").unwrap();
    assert_eq!(dialogue.levels().unwrap().level(&id), Some(0));
}

#[test]
fn update_line() {
    let mut dialogue = sample();
    dialogue.update_line(9, 2, "Bye then.").unwrap();
    assert_eq!(dialogue.line(9), Some(&line(9, 2, "Bye then.")));
    assert_eq!(
        dialogue.update_line(42, 1, "nope"),
        Err(DialogueError::UnknownLine(42))
    );
}

#[test]
fn delete_line_drops_its_connections() {
    let mut dialogue = sample();
    let removed = dialogue.delete_line(4).unwrap();
    assert_eq!(removed.id, 4);
    assert!(
        dialogue
            .connections()
            .iter()
            .all(|c| c.from != 4 && c.to != 4)
    );
    assert_eq!(dialogue.connections().len(), 7);

    // 5 and 6 lost their only predecessor.
    let levels = dialogue.levels().unwrap();
    assert_eq!(levels.level(&5), Some(0));
    assert_eq!(levels.level(&6), Some(0));
    assert_eq!(levels.level(&7), Some(2));
    assert_eq!(levels.level(&9), Some(3));

    assert_eq!(dialogue.delete_line(4), Err(DialogueError::UnknownLine(4)));
}

#[test]
fn connect_validates_structure() {
    let mut dialogue = sample();
    assert_eq!(
        dialogue.connect(3, 3),
        Err(DialogueError::SelfConnection(3))
    );
    assert_eq!(
        dialogue.connect(1, 2),
        Err(DialogueError::DuplicateConnection {
            from: 1,
            to: 2,
            existing: 1
        })
    );
    assert_eq!(
        dialogue.connect(1, 99),
        Err(DialogueError::UnknownLine(99))
    );

    // Opposite direction of an existing connection is a new connection.
    assert_eq!(dialogue.connect(2, 1), Ok(11));
    assert_eq!(dialogue.connections().len(), 11);
}

#[test]
fn cycle_surfaces_when_projecting_nodes() {
    let mut dialogue = sample();
    dialogue.connect(9, 1).unwrap();
    let err = dialogue.nodes().unwrap_err();
    assert!(err.is_cycle());
    assert_eq!(
        err,
        ResolveError::CyclicGraph {
            unresolved: (1..=9).collect()
        }
    );
    // Edges do not depend on levels.
    assert_eq!(dialogue.edges().len(), 11);
}

#[test]
fn disconnect_restores_layout() {
    let mut dialogue = sample();
    let id = dialogue.connect(9, 1).unwrap();
    assert!(dialogue.levels().is_err());
    let removed = dialogue.disconnect(id).unwrap();
    assert_eq!((removed.from, removed.to), (9, 1));
    assert_eq!(dialogue.levels().unwrap().level(&9), Some(5));
    assert_eq!(
        dialogue.disconnect(id),
        Err(DialogueError::UnknownConnection(id))
    );
}

#[test]
fn characters() {
    let mut dialogue = sample();
    let id = dialogue.add_character("Narrator").unwrap();
    assert_eq!(id, 3);
    assert_eq!(dialogue.character(3).map(|c| c.name.as_str()), Some("Narrator"));
    assert_eq!(dialogue.characters().len(), 3);
}

#[test]
fn dangling_connection_in_loaded_state_is_reported() {
    let json = r#"{
        "lines": [{ "id": 1, "characterId": 1, "text": "Hello" }],
        "connections": [{ "id": 1, "from": 1, "to": 2 }]
    }"#;
    let dialogue: Dialogue = serde_json::from_str(json).unwrap();
    assert!(dialogue.characters().is_empty());
    assert_eq!(
        dialogue.levels().unwrap_err(),
        ResolveError::DanglingEdge {
            from: 1,
            to: 2,
            missing: 2
        }
    );
}

#[test]
fn dialogue_serializes_with_camel_case_lines() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["lines"][0]["characterId"], 1);
    assert_eq!(value["connections"][9]["from"], 7);
    assert_eq!(value["characters"][1]["name"], "Stranger");
}

#[test]
fn id_space_exhaustion_leaves_dialogue_untouched() {
    let mut dialogue = Dialogue::new(
        vec![Character {
            id: u32::MAX,
            name: "Hugo".to_owned(),
        }],
        vec![line(1, u32::MAX, "Hello"), line(u32::MAX, u32::MAX, "Bye")],
        vec![Connection {
            id: u32::MAX,
            from: 1,
            to: u32::MAX,
        }],
    )
    .unwrap();
    let before = dialogue.clone();

    assert_eq!(
        dialogue.create_line(u32::MAX, "More"),
        Err(DialogueError::IdsExhausted("line"))
    );
    assert_eq!(
        dialogue.connect(u32::MAX, 1),
        Err(DialogueError::IdsExhausted("connection"))
    );
    assert_eq!(
        dialogue.add_character("Stranger"),
        Err(DialogueError::IdsExhausted("character"))
    );
    assert_eq!(dialogue, before);
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let err = Dialogue::new(
        vec![],
        vec![line(1, 1, "a"), line(1, 1, "b")],
        vec![],
    )
    .unwrap_err();
    assert_eq!(err, DialogueError::DuplicateId { kind: "line", id: 1 });
    assert_eq!(err.to_string(), "duplicate line ID 1");

    let json = r#"{
        "lines": [
            { "id": 1, "characterId": 1, "text": "a" },
            { "id": 2, "characterId": 1, "text": "b" }
        ],
        "connections": [{ "id": 4, "from": 1, "to": 2 }, { "id": 4, "from": 2, "to": 1 }]
    }"#;
    let err = serde_json::from_str::<Dialogue>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate connection ID 4"), "{err}");
}
