pub mod deck;
pub mod word_pair;

pub use deck::Deck;
pub use word_pair::WordPair;
