//! Linear undo/redo history over whole-scene snapshots.
//!
//! DESIGN
//! ======
//! The history is an ordered list of [`Scene`] snapshots plus a cursor. The
//! cursor always points at a valid entry; entries after it form the redo
//! stack. Two commit modes exist:
//!
//! - [`CommitMode::NewEntry`] truncates the redo stack, appends, and moves
//!   the cursor to the new entry. A gesture uses it once, on pointer-down.
//! - [`CommitMode::Amend`] swaps the snapshot under the cursor and leaves the
//!   redo stack alone. Every pointer-move of a gesture uses it, so the whole
//!   gesture collapses into one undo step.
//!
//! Snapshots are immutable, so undoing to an older entry always shows
//! exactly what was committed there.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::scene::Scene;

/// How [`History::commit`] records a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMode {
    /// Start a new undo step, discarding anything that could be redone.
    NewEntry,
    /// Replace the current undo step in place.
    Amend,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Scene>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A history holding only the empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(Scene::new())
    }

    /// A history holding only `initial`.
    #[must_use]
    pub fn with_initial(initial: Scene) -> Self {
        Self { entries: vec![initial], cursor: 0 }
    }

    /// The scene under the cursor.
    #[must_use]
    pub fn current(&self) -> &Scene {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including the redo stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pairs with [`History::len`]. A history keeps at least one entry, so
    /// this never returns true.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `scene` according to `mode`.
    pub fn commit(&mut self, scene: Scene, mode: CommitMode) {
        match mode {
            CommitMode::Amend => {
                self.entries[self.cursor] = scene;
            }
            CommitMode::NewEntry => {
                self.entries.truncate(self.cursor + 1);
                self.entries.push(scene);
                self.cursor += 1;
            }
        }
        debug!(?mode, cursor = self.cursor, len = self.entries.len(), "history commit");
    }

    /// Build the next scene from the current one and record it.
    pub fn commit_with(&mut self, mode: CommitMode, f: impl FnOnce(&Scene) -> Scene) {
        let next = f(self.current());
        self.commit(next, mode);
    }

    /// Step back one entry. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        true
    }

    /// Step forward one entry. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Drop every entry and return to a single empty scene. Not undoable.
    pub fn clear(&mut self) {
        self.entries = vec![Scene::new()];
        self.cursor = 0;
        debug!("history cleared");
    }
}
