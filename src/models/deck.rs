//! Deck is the ordered list of word pairs plus the cursor pointing at the one on screen.
//!
//! The entry list is fixed once the deck is built; only `advance` and `retreat`
//! move the cursor, and both wrap around at the ends.
use super::WordPair;

#[derive(Clone, Debug, Default)]
pub struct Deck {
    entries: Vec<WordPair>,
    cursor: Option<usize>,
}

impl Deck {
    pub fn new(entries: Vec<WordPair>) -> Self {
        let cursor = if entries.is_empty() { None } else { Some(0) };
        Self { entries, cursor }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&WordPair> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Moves to the next pair, wrapping to the first one past the end.
    pub fn advance(&mut self) {
        let len = self.entries.len();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = (*cursor + 1) % len;
        }
    }

    /// Moves to the previous pair, wrapping to the last one before the start.
    pub fn retreat(&mut self) {
        let len = self.entries.len();
        if let Some(cursor) = self.cursor.as_mut() {
            *cursor = (*cursor + len - 1) % len;
        }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// 1-based position for display.
    pub fn position(&self) -> Option<usize> {
        self.cursor.map(|i| i + 1)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}
