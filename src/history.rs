use chrono::{DateTime, Local};

/// One line the user typed, with the time it was entered.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub line: String,
    pub at: DateTime<Local>,
}

/// In-memory command history. Append-only until cleared, no size bound.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        self.entries.push(HistoryEntry {
            line: line.to_string(),
            at: Local::now(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
