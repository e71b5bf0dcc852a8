use super::*;
use crate::editing::NoteEditor;
use crate::io;
use crate::parsing::{BlockType, ParseOptions, parse};

#[test]
fn user_workflow_scan_and_parse_notes() {
    // Given a notes directory with two notes
    let notes_dir = create_test_notes_dir();
    create_test_file(&notes_dir, "a.md", "# Groceries\n- milk");
    create_test_file(&notes_dir, "b.txt", "```\nraw\n```");

    // When every note is read and parsed
    let parsed: Vec<_> = io::scan_notes(notes_dir.path())
        .unwrap()
        .iter()
        .map(|path| parse(&io::read_note(path).unwrap()))
        .collect();

    // Then each note yields its own blocks
    let types: Vec<Vec<BlockType>> = parsed
        .iter()
        .map(|blocks| blocks.iter().map(|b| b.block_type()).collect())
        .collect();
    assert_eq!(
        types,
        vec![
            vec![BlockType::Text, BlockType::Bullet],
            vec![BlockType::Code]
        ]
    );
}

#[test]
fn user_workflow_edit_note_from_disk() {
    // Given a note on disk opened for editing
    let notes_dir = create_test_notes_dir();
    let path = create_test_file(&notes_dir, "note.md", "plain");
    let mut note = NoteEditor::new(io::read_note(&path).unwrap(), ParseOptions::default());
    note.wait();

    // When the user types and commits
    for partial in ["p", "pl", "pla", "plain *"] {
        note.preview(partial);
    }
    note.commit("plain *edit*");
    note.wait();

    // Then the committed text is what gets saved back
    std::fs::write(&path, note.committed_text()).unwrap();
    assert_eq!(io::read_note(&path).unwrap(), "plain *edit*");
    assert_eq!(note.blocks()[0].content(), Some("plain <Italic>edit</>"));
}
