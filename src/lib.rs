pub mod assets;
pub mod config;
pub mod input;
pub mod loader;
pub mod models;
pub mod view;

pub use config::Config;
pub use models::{Deck, WordPair};
pub use view::{Action, Flow, FrameInput, Wordbook};
