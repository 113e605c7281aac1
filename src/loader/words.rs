//! Word file loading.
//! Reads `front,back` records from a CSV file into a Deck. Bad records are skipped,
//! and a missing or unreadable file yields an empty Deck instead of an error.

use crate::models::{Deck, WordPair};
use log::{error, info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("word file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read word file '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Reads the raw bytes of a word file.
pub fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Parses two-column records from `reader`, keeping them in source order.
/// `origin` only appears in diagnostics.
pub fn parse_words<R: Read>(reader: R, origin: &str) -> Vec<WordPair> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut words = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipped record {} in {}: {}", index + 1, origin, e);
                continue;
            }
        };
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if record.len() != 2 {
            warn!(
                "Skipped line {} in {} (expected 2 fields, got {}): {:?}",
                line,
                origin,
                record.len(),
                record
            );
            continue;
        }

        match WordPair::new(&record[0], &record[1]) {
            Some(pair) => words.push(pair),
            None => warn!(
                "Skipped line {} in {} (empty word or meaning): {:?}",
                line, origin, record
            ),
        }
    }
    words
}

/// Loads a deck from a word file. Never fails; problems are logged and
/// degrade to fewer entries or an empty deck.
pub fn load_deck(path: &Path) -> Deck {
    let bytes = match read_source(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{}", e);
            return Deck::empty();
        }
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    let origin = path.display().to_string();
    let words = parse_words(content, &origin);

    if words.is_empty() {
        warn!("No valid words in '{}'", origin);
    } else {
        info!("Loaded {} words from '{}'", words.len(), origin);
    }
    Deck::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_deck() {
        let test_file = "test_load_words.csv";
        fs::write(test_file, "cat,ねこ\ndog,いぬ\n").unwrap();

        let deck = load_deck(Path::new(test_file));
        assert_eq!(deck.size(), 2);
        assert_eq!(deck.cursor(), Some(0));

        let current = deck.current().unwrap();
        assert_eq!(current.front(), "cat");
        assert_eq!(current.back(), "ねこ");

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_load_deck_skips_malformed_lines() {
        let test_file = "test_load_malformed.csv";
        fs::write(test_file, "one,two,three\nbird,\nfish,さかな\n").unwrap();

        let deck = load_deck(Path::new(test_file));
        assert_eq!(deck.size(), 1);
        assert_eq!(deck.current().unwrap().front(), "fish");
        assert_eq!(deck.current().unwrap().back(), "さかな");

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_load_deck_strips_bom() {
        let test_file = "test_load_bom.csv";
        fs::write(test_file, b"\xEF\xBB\xBFapple,\xE3\x82\x8A\xE3\x82\x93\xE3\x81\x94\n").unwrap();

        let deck = load_deck(Path::new(test_file));
        assert_eq!(deck.size(), 1);
        assert_eq!(deck.current().unwrap().front(), "apple");
        assert_eq!(deck.current().unwrap().back(), "りんご");

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let deck = load_deck(Path::new("nonexistent_words_xyz123.csv"));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_read_source_reports_not_found() {
        let result = read_source(Path::new("nonexistent_words_xyz123.csv"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_parse_words_trims_and_keeps_order() {
        let words = parse_words("  sun , たいよう \nmoon,つき\n".as_bytes(), "inline");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].front(), "sun");
        assert_eq!(words[0].back(), "たいよう");
        assert_eq!(words[1].front(), "moon");
    }

    #[test]
    fn test_parse_words_handles_quoted_commas() {
        let words = parse_words("\"hello, world\",こんにちは\n".as_bytes(), "inline");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].front(), "hello, world");
    }

    #[test]
    fn test_parse_words_ignores_blank_and_short_lines() {
        let words = parse_words("\nlonely\n\nrain,あめ\n".as_bytes(), "inline");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].front(), "rain");
    }

    #[test]
    fn test_parse_words_skips_invalid_utf8() {
        let words = parse_words(&b"cat,\xff\xfe\ndog,\xE3\x81\x84\xE3\x81\xAC\n"[..], "inline");

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].front(), "dog");
        assert_eq!(words[0].back(), "いぬ");
    }

    #[test]
    fn test_parse_words_keeps_header_shaped_like_data() {
        let words = parse_words("english,japanese\ncat,ねこ\n".as_bytes(), "inline");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].front(), "english");
    }
}
