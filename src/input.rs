//! Physical input: maps keys, controller buttons and button clicks to logical actions.

use crate::view::{Action, FrameInput, Layout};
use eframe::egui::{self, Key};
use log::{debug, warn};

/// Controller buttons the wordbook reacts to, named by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadButton {
    DPadLeft,
    DPadRight,
    DPadDown,
    /// A on an Xbox layout.
    South,
    /// B on an Xbox layout.
    East,
    /// X on an Xbox layout.
    West,
}

#[derive(Clone, Debug)]
pub struct Bindings {
    keys: Vec<(Key, Action)>,
    pad: Vec<(PadButton, Action)>,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            keys: vec![
                (Key::ArrowLeft, Action::Prev),
                (Key::A, Action::Prev),
                (Key::C, Action::Prev),
                (Key::ArrowRight, Action::Next),
                (Key::D, Action::Next),
                (Key::X, Action::Next),
                (Key::Z, Action::Toggle),
                (Key::Q, Action::Quit),
            ],
            pad: vec![
                (PadButton::DPadLeft, Action::Prev),
                (PadButton::West, Action::Prev),
                (PadButton::DPadRight, Action::Next),
                (PadButton::East, Action::Next),
                (PadButton::South, Action::Toggle),
                (PadButton::DPadDown, Action::Toggle),
            ],
        }
    }
}

impl Bindings {
    /// Replaces the keys bound to `action` with the named egui keys.
    /// Unknown names are logged and skipped; if none is valid the old keys stay.
    pub fn rebind_keys(&mut self, action: Action, names: &[String]) {
        let keys: Vec<Key> = names
            .iter()
            .filter_map(|name| {
                let key = Key::from_name(name);
                if key.is_none() {
                    warn!("Unknown key name '{}' for {:?}", name, action);
                }
                key
            })
            .collect();

        if keys.is_empty() {
            warn!("No valid keys for {:?}; keeping the defaults", action);
            return;
        }

        self.keys.retain(|(_, a)| *a != action);
        self.keys.extend(keys.into_iter().map(|k| (k, action)));
    }

    pub fn key_action(&self, key: Key) -> Option<Action> {
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, a)| *a)
    }

    pub fn pad_action(&self, button: PadButton) -> Option<Action> {
        self.pad.iter().find(|(b, _)| *b == button).map(|(_, a)| *a)
    }

    pub fn keys_for(&self, action: Action) -> Vec<Key> {
        self.keys
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(k, _)| *k)
            .collect()
    }
}

/// Collects the actions triggered by keyboard and pointer events this frame.
/// Key repeats are ignored so holding a key moves one word only.
pub fn poll_keyboard(ctx: &egui::Context, bindings: &Bindings, layout: &Layout) -> FrameInput {
    let mut input = FrameInput::default();
    ctx.input(|i| {
        for event in &i.events {
            if let egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } = event
            {
                if let Some(action) = bindings.key_action(*key) {
                    debug!("Key {:?} -> {:?}", key, action);
                    input.press(action);
                }
            }
        }

        if i.pointer.primary_clicked() {
            if let Some(pos) = i.pointer.interact_pos() {
                if let Some(action) = layout.action_at(pos.x, pos.y) {
                    debug!("Click at ({}, {}) -> {:?}", pos.x, pos.y, action);
                    input.press(action);
                }
            }
        }
    });
    input
}

#[cfg(feature = "gamepad")]
pub use gamepad::GamepadInput;

#[cfg(feature = "gamepad")]
mod gamepad {
    use super::{Bindings, PadButton};
    use crate::view::FrameInput;
    use gilrs::{Button, EventType, Gilrs};
    use log::{debug, info, warn};

    fn pad_button(button: Button) -> Option<PadButton> {
        match button {
            Button::DPadLeft => Some(PadButton::DPadLeft),
            Button::DPadRight => Some(PadButton::DPadRight),
            Button::DPadDown => Some(PadButton::DPadDown),
            Button::South => Some(PadButton::South),
            Button::East => Some(PadButton::East),
            Button::West => Some(PadButton::West),
            _ => None,
        }
    }

    pub struct GamepadInput {
        gilrs: Gilrs,
    }

    impl GamepadInput {
        /// Returns `None` when no controller backend is available.
        pub fn new() -> Option<Self> {
            match Gilrs::new() {
                Ok(gilrs) => {
                    for (_, pad) in gilrs.gamepads() {
                        info!("Controller connected: {}", pad.name());
                    }
                    Some(Self { gilrs })
                }
                Err(e) => {
                    warn!("Controller input unavailable: {}", e);
                    None
                }
            }
        }

        /// Drains pending controller events into `input`.
        pub fn poll(&mut self, bindings: &Bindings, input: &mut FrameInput) {
            while let Some(event) = self.gilrs.next_event() {
                match event.event {
                    EventType::ButtonPressed(button, _) => {
                        if let Some(action) = pad_button(button).and_then(|b| bindings.pad_action(b))
                        {
                            debug!("Button {:?} -> {:?}", button, action);
                            input.press(action);
                        }
                    }
                    EventType::Connected => info!("Controller connected"),
                    EventType::Disconnected => info!("Controller disconnected"),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_bindings() {
        let bindings = Bindings::default();

        assert_eq!(bindings.key_action(Key::ArrowLeft), Some(Action::Prev));
        assert_eq!(bindings.key_action(Key::C), Some(Action::Prev));
        assert_eq!(bindings.key_action(Key::X), Some(Action::Next));
        assert_eq!(bindings.key_action(Key::Z), Some(Action::Toggle));
        assert_eq!(bindings.key_action(Key::Q), Some(Action::Quit));
        assert_eq!(bindings.key_action(Key::Enter), None);
    }

    #[test]
    fn test_default_pad_bindings() {
        let bindings = Bindings::default();

        assert_eq!(bindings.pad_action(PadButton::West), Some(Action::Prev));
        assert_eq!(bindings.pad_action(PadButton::East), Some(Action::Next));
        assert_eq!(bindings.pad_action(PadButton::DPadDown), Some(Action::Toggle));
    }

    #[test]
    fn test_rebind_keys() {
        let mut bindings = Bindings::default();
        bindings.rebind_keys(Action::Toggle, &["Space".to_string(), "Enter".to_string()]);

        assert_eq!(bindings.key_action(Key::Z), None);
        assert_eq!(bindings.key_action(Key::Space), Some(Action::Toggle));
        assert_eq!(bindings.keys_for(Action::Toggle), vec![Key::Space, Key::Enter]);
        assert_eq!(bindings.key_action(Key::Q), Some(Action::Quit));
    }

    #[test]
    fn test_rebind_with_only_unknown_names_keeps_defaults() {
        let mut bindings = Bindings::default();
        bindings.rebind_keys(Action::Quit, &["NotAKey".to_string()]);

        assert_eq!(bindings.keys_for(Action::Quit), vec![Key::Q]);
    }
}
