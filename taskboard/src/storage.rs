//! Board persistence
//!
//! The whole board is written as one JSON document under a fixed key. Every
//! save overwrites the previous one; there is no incremental format.

use crate::error::{BoardError, Result};
use crate::types::Board;
use std::fs;
use std::path::{Path, PathBuf};

/// Namespace key the board is stored under
pub const STORAGE_KEY: &str = "kanban-data";

/// Durable home for the serialized board
pub trait BoardStorage {
    /// The stored board, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Board>>;

    /// Overwrite the stored board
    fn save(&mut self, board: &Board) -> Result<()>;
}

/// Load the stored board, falling back to the default board when nothing
/// is stored or the stored value cannot be parsed.
///
/// A stored board that exists but cannot be read is an error: falling back
/// there would overwrite the user's data on the next save.
pub fn load_or_default<S: BoardStorage + ?Sized>(storage: &S) -> Result<Board> {
    match storage.load() {
        Ok(Some(board)) => Ok(board),
        Ok(None) => {
            tracing::debug!("no stored board, starting from defaults");
            Ok(Board::default_board())
        }
        Err(BoardError::Io(error)) => {
            tracing::error!(%error, "cannot read stored board");
            Err(BoardError::Io(error))
        }
        Err(error) => {
            tracing::warn!(%error, "discarding unparsable stored board");
            Ok(Board::default_board())
        }
    }
}

fn decode(content: &str) -> Result<Board> {
    let board: Board = serde_json::from_str(content)?;
    board.validate()?;
    Ok(board)
}

// =========================================================================
// File storage
// =========================================================================

/// Stores the board as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    /// Storage under the default key
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    pub fn with_key(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Path to the board file
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

impl BoardStorage for FileStorage {
    fn load(&self) -> Result<Option<Board>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        decode(&content).map(Some)
    }

    fn save(&mut self, board: &Board) -> Result<()> {
        let content = serde_json::to_string_pretty(board)?;
        atomic_write(&self.path(), content.as_bytes())?;
        tracing::debug!(path = %self.path().display(), "board saved");
        Ok(())
    }
}

/// Write a file atomically by writing to a temp file then renaming
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path)?;

    Ok(())
}

// =========================================================================
// Memory storage
// =========================================================================

/// Keeps the serialized board in memory. Holds the raw string so tests can
/// plant corrupt data the same way a damaged file would look.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary stored value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// How many times `save` has been called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BoardStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Board>> {
        self.raw.as_deref().map(decode).transpose()
    }

    fn save(&mut self, board: &Board) -> Result<()> {
        self.raw = Some(serde_json::to_string(board)?);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BoardStore;
    use crate::types::ListId;
    use tempfile::TempDir;

    #[test]
    fn test_file_path_uses_key() {
        let storage = FileStorage::new("/tmp/boards");
        assert_eq!(storage.path(), PathBuf::from("/tmp/boards/kanban-data.json"));
    }

    #[test]
    fn test_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().join("nested"));

        let mut store = BoardStore::new(Board::default_board());
        store.create_card(&ListId::from_string("done"), "ship").unwrap();
        storage.save(store.board()).unwrap();

        assert_eq!(storage.load().unwrap().as_ref(), Some(store.board()));
        assert!(!storage.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_file_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert!(storage.load().unwrap().is_none());
        assert_eq!(load_or_default(&storage).unwrap(), Board::default_board());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        fs::write(storage.path(), "{ not json").unwrap();

        assert!(storage.load().is_err());
        assert_eq!(load_or_default(&storage).unwrap(), Board::default_board());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        // a directory where the board file should be cannot be read as text
        fs::create_dir(storage.path()).unwrap();

        assert!(matches!(storage.load(), Err(BoardError::Io(_))));
        assert!(matches!(load_or_default(&storage), Err(BoardError::Io(_))));
    }

    #[test]
    fn test_memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let board = Board::default_board();
        storage.save(&board).unwrap();
        assert_eq!(storage.load().unwrap(), Some(board));
        assert_eq!(storage.saves(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_rejected_on_load() {
        let storage = MemoryStorage::with_raw(
            r#"[{"id":"a","title":"A","cards":[{"id":"c1","text":"x"}]},
                {"id":"b","title":"B","cards":[{"id":"c1","text":"x"}]}]"#,
        );
        assert!(storage.load().is_err());
        assert_eq!(load_or_default(&storage).unwrap(), Board::default_board());
    }
}
