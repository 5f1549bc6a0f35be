//! On-disk persistence through a full session

use std::fs;
use taskboard::{
    Board, BoardConfig, BoardError, BoardSession, BoardStorage, Command, FileStorage, Key, ListId,
    NullRenderer, UiEvent,
};
use tempfile::TempDir;

#[test_log::test]
fn test_first_start_uses_default_board_without_writing() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());

    let session = BoardSession::open(storage.clone(), NullRenderer).unwrap();

    assert_eq!(session.board(), &Board::default_board());
    assert!(!storage.path().exists());
}

#[test_log::test]
fn test_changes_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let config = BoardConfig::new(temp.path());

    {
        let mut session = BoardSession::open(config.storage(), NullRenderer).unwrap();
        session.handle(UiEvent::OpenListDialog).unwrap();
        session.handle(UiEvent::Input("Review".into())).unwrap();
        session.handle(UiEvent::Key(Key::Enter)).unwrap();

        session.handle(UiEvent::DragStart("c1".into())).unwrap();
        session.handle(UiEvent::Drop("done".into())).unwrap();
    }

    let session = BoardSession::open(config.storage(), NullRenderer).unwrap();
    let board = session.board();
    assert_eq!(board.list_count(), 4);
    assert_eq!(board.lists()[3].title, "Review");
    let done = board.list(&ListId::from_string("done")).unwrap();
    let ids: Vec<&str> = done.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c4", "c1"]);
}

#[test_log::test]
fn test_corrupt_file_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    fs::write(storage.path(), r#"[{"id": "todo", "title": 7}]"#).unwrap();

    let mut session = BoardSession::open(storage.clone(), NullRenderer).unwrap();
    assert_eq!(session.board(), &Board::default_board());

    // the next save replaces the corrupt value
    session
        .execute(Command::DeleteCard { card: "c4".into() })
        .unwrap();
    let reloaded = storage.load().unwrap().unwrap();
    assert_eq!(reloaded.card_count(), 3);
}

#[test_log::test]
fn test_unreadable_file_is_reported_not_replaced() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path());
    fs::create_dir(storage.path()).unwrap();

    let result = BoardSession::open(storage.clone(), NullRenderer);

    assert!(matches!(result, Err(BoardError::Io(_))));
    assert!(storage.path().is_dir());
}

#[test_log::test]
fn test_saved_file_is_array_of_lists() {
    let temp = TempDir::new().unwrap();
    let mut storage = FileStorage::with_key(temp.path(), "work");
    storage.save(&Board::default_board()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("work.json")).unwrap())
            .unwrap();
    assert_eq!(raw[0]["id"], "todo");
    assert_eq!(raw[0]["cards"][1]["id"], "c2");
    assert_eq!(raw[1]["cards"][0]["text"], "Build the board features");
}

#[test_log::test]
fn test_round_trip_preserves_everything() {
    let temp = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp.path());

    let mut session = BoardSession::open(storage.clone(), NullRenderer).unwrap();
    session
        .execute(Command::CreateCard {
            list: "doing".into(),
            text: "Pair on review".into(),
        })
        .unwrap();
    session
        .execute(Command::MoveCard {
            card: "c2".into(),
            from: "todo".into(),
            to: "doing".into(),
        })
        .unwrap();
    let board = session.board().clone();

    storage.save(&board).unwrap();
    assert_eq!(storage.load().unwrap(), Some(board));
}
