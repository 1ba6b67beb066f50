use crate::drawable::Drawable;

/// Linear undo/redo history of committed drawables.
///
/// `committed` is in render order (oldest first) and its tail is the next undo target.
/// The tail of `redo_buffer` is the next redo target. A drawable sits in at most one
/// of the two at any time; undo and redo move it across, they never copy.
#[derive(Debug, Default)]
pub struct History {
    committed: Vec<Drawable>,
    redo_buffer: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished drawable. Invalidates every pending redo.
    pub fn commit(&mut self, drawable: impl Into<Drawable>) {
        self.committed.push(drawable.into());
        self.redo_buffer.clear();
    }

    /// Move the most recent commit onto the redo buffer.
    ///
    /// Returns the undone drawable, or `None` without touching anything when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<&Drawable> {
        let drawable = self.committed.pop()?;
        self.redo_buffer.push(drawable);
        self.redo_buffer.last()
    }

    /// Move the most recently undone drawable back into the committed list.
    ///
    /// Returns the restored drawable, or `None` without touching anything when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<&Drawable> {
        let drawable = self.redo_buffer.pop()?;
        self.committed.push(drawable);
        self.committed.last()
    }

    /// Drop everything, committed and undone alike
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
    }

    /// Committed drawables in render order
    pub fn list(&self) -> &[Drawable] {
        &self.committed
    }

    /// Undone drawables; the last one is the next redo target
    pub fn redo_buffer(&self) -> &[Drawable] {
        &self.redo_buffer
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
