pub mod words;

pub use words::{LoadError, load_deck, parse_words};
