//! Background images and the display font.
//!
//! Every asset is optional. The viewer asks an `AssetStore` which background
//! candidates exist at the moment of each pick and degrades to a flat fill
//! when none can be loaded.

pub mod font;
pub mod store;

pub use font::{DISPLAY_FONT, install_display_font, load_font};
pub use store::{DecodedImage, DirectoryAssets};

use rand::Rng;
use rand::seq::SliceRandom;
use std::io;
use thiserror::Error;

/// Number of numbered background images probed on each pick.
pub const BACKGROUND_COUNT: usize = 10;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{0}' not found")]
    Missing(String),
    #[error("failed to read asset '{name}': {source}")]
    Io { name: String, source: io::Error },
    #[error("failed to decode image '{name}': {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },
}

/// Handle to a loaded background. The pixels live in the store that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

pub trait AssetStore {
    fn exists(&self, name: &str) -> bool;
    fn load_background(&mut self, name: &str) -> Result<Background, AssetError>;
}

/// `01.png` through `10.png`.
pub fn background_candidates() -> Vec<String> {
    (1..=BACKGROUND_COUNT).map(|i| format!("{i:02}.png")).collect()
}

/// Picks one of the candidates that currently exist in `store`, uniformly at random.
///
/// Returns `Ok(None)` when no candidate exists, and an error when the chosen
/// candidate fails to load.
pub fn pick_background<S, R>(
    candidates: &[String],
    store: &mut S,
    rng: &mut R,
) -> Result<Option<Background>, AssetError>
where
    S: AssetStore + ?Sized,
    R: Rng + ?Sized,
{
    let available: Vec<&String> = candidates.iter().filter(|c| store.exists(c)).collect();
    match available.choose(rng) {
        Some(name) => store.load_background(name).map(Some),
        None => Ok(None),
    }
}
