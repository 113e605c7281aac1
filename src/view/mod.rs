//! Presentation side of the wordbook: turns logical input into deck navigation
//! and deck state into draw calls.
//!
//! `Wordbook` is the single owning context for a run. The frame driver calls
//! `update` then `render` once per frame; nothing here blocks or keeps global state.

pub mod layout;
pub mod render;

pub use layout::{Layout, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use render::{Color, DrawSurface, Typeface};

use crate::assets::{self, AssetStore, Background};
use crate::models::{Deck, WordPair};
use log::{debug, error, info};
use rand::Rng;

/// Logical input, independent of the key or button that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Prev,
    Next,
    Toggle,
    Quit,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Prev, Action::Next, Action::Toggle, Action::Quit];

    fn index(self) -> usize {
        self as usize
    }
}

pub trait InputSource {
    /// Whether `action` was triggered this frame.
    fn pressed(&self, action: Action) -> bool;
}

/// Actions triggered during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pressed: [bool; 4],
}

impl FrameInput {
    pub fn of(actions: &[Action]) -> Self {
        let mut input = Self::default();
        for &action in actions {
            input.press(action);
        }
        input
    }

    pub fn press(&mut self, action: Action) {
        self.pressed[action.index()] = true;
    }

    pub fn is_idle(&self) -> bool {
        !self.pressed.iter().any(|&p| p)
    }
}

impl InputSource for FrameInput {
    fn pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Transient view state, reset whenever the current pair changes.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub revealed: bool,
    pub background: Option<Background>,
}

pub struct Wordbook<R> {
    deck: Deck,
    view: ViewState,
    source_name: String,
    candidates: Vec<String>,
    rng: R,
}

impl<R: Rng> Wordbook<R> {
    /// `source_name` names the word file in the no-data message.
    pub fn new(deck: Deck, source_name: impl Into<String>, rng: R) -> Self {
        Self {
            deck,
            view: ViewState::default(),
            source_name: source_name.into(),
            candidates: assets::background_candidates(),
            rng,
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Picks the first background. Call once before the first frame.
    pub fn start(&mut self, assets: &mut dyn AssetStore) {
        self.reroll_background(assets);
    }

    pub fn update(&mut self, input: &dyn InputSource, assets: &mut dyn AssetStore) -> Flow {
        if input.pressed(Action::Quit) {
            info!("Quit requested");
            return Flow::Quit;
        }

        if self.deck.is_empty() {
            return Flow::Continue;
        }

        // Prev wins when both fire in the same frame.
        if input.pressed(Action::Prev) {
            self.go_to_prev(assets);
        } else if input.pressed(Action::Next) {
            self.go_to_next(assets);
        }

        if input.pressed(Action::Toggle) {
            self.toggle_reveal();
        }

        Flow::Continue
    }

    pub fn go_to_prev(&mut self, assets: &mut dyn AssetStore) {
        if self.deck.is_empty() {
            return;
        }
        self.deck.retreat();
        self.on_word_changed(assets);
    }

    pub fn go_to_next(&mut self, assets: &mut dyn AssetStore) {
        if self.deck.is_empty() {
            return;
        }
        self.deck.advance();
        self.on_word_changed(assets);
    }

    pub fn toggle_reveal(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.view.revealed = !self.view.revealed;
    }

    fn on_word_changed(&mut self, assets: &mut dyn AssetStore) {
        debug!(
            "Showing word {}/{}",
            self.deck.position().unwrap_or(0),
            self.deck.size()
        );
        self.view.revealed = false;
        self.reroll_background(assets);
    }

    fn reroll_background(&mut self, store: &mut dyn AssetStore) {
        match assets::pick_background(&self.candidates, store, &mut self.rng) {
            Ok(Some(background)) => {
                debug!("Background set to '{}'", background.name);
                self.view.background = Some(background);
            }
            Ok(None) => {
                if self.view.background.is_none() {
                    info!("No background images found; using the flat background color");
                }
                self.view.background = None;
            }
            Err(e) => {
                error!("{}", e);
                self.view.background = None;
            }
        }
    }
}

impl<R> Wordbook<R> {
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn current(&self) -> Option<&WordPair> {
        self.deck.current()
    }
}
