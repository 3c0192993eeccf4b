use crate::error::{PhotomanError, Result};

/// Ordered browsing history with a cursor marking the current item.
///
/// The cursor is `None` exactly when the history is empty; otherwise it
/// is a valid index into the sequence. Every operation preserves that
/// invariant.
#[derive(Clone, Debug, Default)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: Option<usize>,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Append an item at the end and move the cursor onto it.
    pub fn push(&mut self, item: T) {
        self.entries.push(item);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Overwrite the current item in place. The cursor does not move.
    pub fn replace_current(&mut self, item: T) -> Result<()> {
        match self.cursor {
            Some(index) => {
                self.entries[index] = item;
                Ok(())
            }
            None => Err(PhotomanError::NoCurrentItem),
        }
    }

    /// Remove and return the current item.
    ///
    /// Removing a middle element keeps the cursor at the same index, so
    /// the next element slides into view; removing the last element
    /// clamps the cursor to the new end (or empties it).
    pub fn remove_current(&mut self) -> Result<T> {
        let index = self.cursor.ok_or(PhotomanError::NoCurrentItem)?;
        let removed = self.entries.remove(index);
        self.cursor = if self.entries.is_empty() {
            None
        } else {
            Some(index.min(self.entries.len() - 1))
        };
        Ok(removed)
    }

    /// Step the cursor back one item. Returns whether it moved.
    pub fn move_previous(&mut self) -> bool {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Step the cursor forward one item. Returns whether it moved.
    pub fn move_next(&mut self) -> bool {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => {
                self.cursor = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|index| &self.entries[index])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.cursor, Some(index) if index > 0)
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.cursor, Some(index) if index + 1 < self.entries.len())
    }
}
