use crate::parsing::{Block, ParseOptions};
use crate::scheduling::{Generation, ParseResult, ParseScheduler};

/// A commit waiting for its parse to land.
#[derive(Debug)]
struct PendingCommit {
    generation: Generation,
    text: String,
}

/// The editing model of one note: the blocks on display, the committed
/// text, and any uncommitted live preview.
///
/// ```rust
/// # use postit_engine::editing::NoteEditor;
/// # use postit_engine::parsing::ParseOptions;
/// let mut note = NoteEditor::new("draft", ParseOptions::default());
/// note.wait();
///
/// note.preview("**draft**");
/// note.wait();
/// assert_eq!(note.blocks()[0].content(), Some("<Bold>draft</>"));
///
/// note.abort();
/// assert_eq!(note.blocks()[0].content(), Some("draft"));
/// assert_eq!(note.committed_text(), "draft");
/// ```
#[derive(Debug)]
pub struct NoteEditor {
    scheduler: ParseScheduler,
    blocks: Vec<Block>,
    committed_text: String,
    /// Blocks shown before the current preview session started.
    stash: Option<Vec<Block>>,
    pending_commit: Option<PendingCommit>,
    /// Results up to this generation belong to an aborted edit.
    ignore_through: Generation,
}

impl NoteEditor {
    /// Opens a note and requests its first parse.
    pub fn new(text: impl Into<String>, options: ParseOptions) -> Self {
        let committed_text = text.into();
        let scheduler = ParseScheduler::new(options);
        scheduler.request(committed_text.clone());

        Self {
            scheduler,
            blocks: Vec::new(),
            committed_text,
            stash: None,
            pending_commit: None,
            ignore_through: 0,
        }
    }

    /// Parses uncommitted text for display. The first preview of an edit
    /// session remembers the current blocks so [`NoteEditor::abort`] can
    /// bring them back.
    pub fn preview(&mut self, text: impl Into<String>) -> Generation {
        if self.stash.is_none() {
            self.stash = Some(self.blocks.clone());
        }
        self.scheduler.request(text)
    }

    /// Parses `text` and makes it the committed text once its result (or a
    /// newer one) has been applied.
    pub fn commit(&mut self, text: impl Into<String>) -> Generation {
        let text = text.into();
        let generation = self.scheduler.request(text.clone());
        log::debug!("Commit pending at generation {generation}");
        self.pending_commit = Some(PendingCommit { generation, text });
        generation
    }

    /// Abandons the edit session: restores the blocks from before the first
    /// preview and ignores results still in flight.
    pub fn abort(&mut self) {
        if let Some(stash) = self.stash.take() {
            self.blocks = stash;
        }
        self.pending_commit = None;
        self.ignore_through = self.scheduler.latest_requested();
        log::debug!("Edit aborted through generation {}", self.ignore_through);
    }

    /// Switches markdown for this note and re-parses the committed text.
    pub fn set_markdown_enabled(&mut self, enabled: bool) -> Generation {
        let options = ParseOptions {
            markdown: enabled,
            ..self.scheduler.options()
        };
        self.scheduler.set_options(options);
        self.scheduler.request(self.committed_text.clone())
    }

    pub fn is_markdown_enabled(&self) -> bool {
        self.scheduler.options().markdown
    }

    /// Applies a delivered result without blocking. Returns whether the
    /// blocks changed.
    pub fn poll(&mut self) -> bool {
        match self.scheduler.try_take() {
            Some(result) => self.apply(result),
            None => false,
        }
    }

    /// Waits for outstanding parses, then applies the newest result.
    pub fn wait(&mut self) -> bool {
        match self.scheduler.wait_idle() {
            Some(result) => self.apply(result),
            None => false,
        }
    }

    fn apply(&mut self, result: ParseResult) -> bool {
        if result.generation <= self.ignore_through {
            log::debug!("Ignoring result {} of aborted edit", result.generation);
            return false;
        }

        if let Some(pending) = self
            .pending_commit
            .take_if(|pending| pending.generation <= result.generation)
        {
            self.committed_text = pending.text;
            self.stash = None;
        }
        self.blocks = result.blocks;
        true
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn committed_text(&self) -> &str {
        &self.committed_text
    }

    /// Whether a preview session is open.
    pub fn is_editing(&self) -> bool {
        self.stash.is_some()
    }

    pub fn has_pending_commit(&self) -> bool {
        self.pending_commit.is_some()
    }

    pub fn scheduler(&self) -> &ParseScheduler {
        &self.scheduler
    }
}
