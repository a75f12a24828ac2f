//! Session history: committed locations plus a cursor.

use crate::core::location::Location;

/// How a committed navigation lands in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New entry after the cursor; forward entries are discarded.
    Push,
    /// Overwrite the entry under the cursor.
    Replace,
    /// Move the cursor to an existing entry (back/forward).
    Traverse(usize),
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Index and location one step back, if there is one.
    pub fn back_target(&self) -> Option<(usize, &Location)> {
        let idx = self.index.checked_sub(1)?;
        Some((idx, &self.entries[idx]))
    }

    /// Index and location one step forward, if there is one.
    pub fn forward_target(&self) -> Option<(usize, &Location)> {
        let idx = self.index + 1;
        self.entries.get(idx).map(|loc| (idx, loc))
    }

    pub fn commit(&mut self, mode: HistoryMode, location: Location) {
        match mode {
            HistoryMode::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(location);
                self.index = self.entries.len() - 1;
            }
            HistoryMode::Replace => {
                self.entries[self.index] = location;
            }
            HistoryMode::Traverse(idx) if idx < self.entries.len() => {
                self.index = idx;
                self.entries[idx] = location;
            }
            HistoryMode::Traverse(idx) => {
                log::warn!("History traversal to {} out of range ({} entries)", idx, self.entries.len());
            }
        }
    }
}
