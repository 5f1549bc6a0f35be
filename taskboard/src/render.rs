//! Rendering collaborators

use crate::types::Board;
use std::fmt::Write as _;
use std::io::Write;

/// Shown in place of cards when a list is empty
pub const EMPTY_LIST_HINT: &str = "No tasks yet, add one below";

/// Produces a visual representation of the board. Called after every
/// mutation with the complete current board.
pub trait Renderer {
    fn render(&mut self, board: &Board);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, board: &Board) {
        (**self).render(board)
    }
}

/// Renders nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board) {}
}

/// Plain-text layout: one block per list with its card count, then the
/// cards in order.
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();
    for list in board.lists() {
        let _ = writeln!(out, "{} ({}) [{}]", list.title, list.card_count(), list.id);
        if list.is_empty() {
            let _ = writeln!(out, "  {}", EMPTY_LIST_HINT);
        }
        for card in &list.cards {
            let _ = writeln!(out, "  - {} [{}]", card.text, card.id);
        }
        out.push('\n');
    }
    out
}

/// Writes [`format_board`] output to any writer
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board) {
        let text = format_board(board);
        if let Err(error) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            // a failed paint never affects the board itself
            tracing::warn!(%error, "failed to render board");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, List};

    #[test]
    fn test_format_shows_counts_and_order() {
        let board = Board::default_board();
        let text = format_board(&board);

        assert!(text.contains("To Do (2) [todo]"));
        assert!(text.contains("Doing (1) [doing]"));
        let first = text.find("[c1]").unwrap();
        let second = text.find("[c2]").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_empty_list_hint() {
        let board = Board::from_lists(vec![
            List::with_id("a", "Empty"),
            List::with_id("b", "Full").with_cards([Card::with_id("c1", "x")]),
        ])
        .unwrap();
        let text = format_board(&board);

        assert!(text.starts_with("Empty (0) [a]\n  No tasks yet"));
        assert_eq!(text.matches(EMPTY_LIST_HINT).count(), 1);
    }

    #[test]
    fn test_text_renderer_writes() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&Board::default_board());
        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written, format_board(&Board::default_board()));
    }
}
