//! WordPair is a pair <front, back>. Only text is used on either side

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPair {
    front: String,
    back: String,
}

impl WordPair {
    /// Builds a pair from raw fields, trimming both.
    /// Returns `None` when either side is empty after trimming.
    pub fn new(front: &str, back: &str) -> Option<Self> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            return None;
        }
        Some(Self {
            front: front.to_string(),
            back: back.to_string(),
        })
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pair_creation() {
        let pair = WordPair::new("cat", "ねこ").unwrap();

        assert_eq!(pair.front(), "cat");
        assert_eq!(pair.back(), "ねこ");
    }

    #[test]
    fn test_word_pair_trims_fields() {
        let pair = WordPair::new("  dog ", "\tいぬ  ").unwrap();

        assert_eq!(pair.front(), "dog");
        assert_eq!(pair.back(), "いぬ");
    }

    #[test]
    fn test_word_pair_rejects_blank_side() {
        assert!(WordPair::new("", "いぬ").is_none());
        assert!(WordPair::new("dog", "   ").is_none());
        assert!(WordPair::new(" ", " ").is_none());
    }
}
