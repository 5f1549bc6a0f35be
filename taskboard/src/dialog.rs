//! Input dialogs for new cards and new lists, plus their keyboard shortcuts

/// Which dialog is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    NewCard,
    NewList,
}

/// Keys the global shortcut handler cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Close any open dialog without committing
    Escape,
    /// Commit whichever dialog is open
    Enter,
    Other(char),
}

/// What the shortcut handler wants the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Nothing,
    /// A dialog was closed without committing
    Cancelled(DialogKind),
    /// The dialog holds trimmed, non-empty input ready to commit
    Submit(DialogKind, String),
}

/// At most one open dialog and its text buffer
#[derive(Debug, Default)]
pub struct DialogSurface {
    open: Option<DialogKind>,
    input: String,
}

impl DialogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a dialog with an empty buffer; replaces whatever was open
    pub fn open(&mut self, kind: DialogKind) {
        self.open = Some(kind);
        self.input.clear();
    }

    pub fn kind(&self) -> Option<DialogKind> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the buffer; ignored when no dialog is open
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.open.is_some() {
            self.input = text.into();
        }
    }

    /// Hide the dialog and clear its buffer
    pub fn close(&mut self) -> Option<DialogKind> {
        self.input.clear();
        self.open.take()
    }

    /// Trimmed input, or `None` when blank
    pub fn submission(&self) -> Option<String> {
        let text = self.input.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    /// Map a key press to a dialog action.
    ///
    /// Enter with blank input does nothing and leaves the dialog open. The
    /// dialog is not closed on submit; the caller closes it once the commit
    /// succeeded.
    pub fn handle_key(&mut self, key: Key) -> DialogAction {
        match (key, self.open) {
            (Key::Escape, Some(kind)) => {
                self.close();
                DialogAction::Cancelled(kind)
            }
            (Key::Enter, Some(kind)) => match self.submission() {
                Some(text) => DialogAction::Submit(kind, text),
                None => DialogAction::Nothing,
            },
            _ => DialogAction::Nothing,
        }
    }
}
