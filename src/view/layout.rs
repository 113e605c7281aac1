//! Fixed screen layout in logical points.

use super::Action;

pub const SCREEN_WIDTH: f32 = 220.0;
pub const SCREEN_HEIGHT: f32 = 180.0;

pub const BUTTON_HEIGHT: f32 = 18.0;
pub const BUTTON_MARGIN: f32 = 10.0;
const NAV_BUTTON_WIDTH: f32 = 70.0;
const TOGGLE_BUTTON_WIDTH: f32 = 90.0;

pub const FRONT_Y: f32 = 40.0;
pub const BACK_Y: f32 = 80.0;
pub const PROGRESS_Y: f32 = BUTTON_MARGIN;

/// Built-in glyph metrics, used for all measuring when no display font is loaded.
pub const BUILTIN_GLYPH_WIDTH: f32 = 4.0;
pub const BUILTIN_GLYPH_HEIGHT: f32 = 6.0;
pub const LINE_SPACING: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Positions of the three navigation buttons along the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub prev_button: Rect,
    pub next_button: Rect,
    pub toggle_button: Rect,
}

impl Default for Layout {
    fn default() -> Self {
        let button_y = SCREEN_HEIGHT - BUTTON_HEIGHT - BUTTON_MARGIN;
        Self {
            prev_button: Rect::new(BUTTON_MARGIN, button_y, NAV_BUTTON_WIDTH, BUTTON_HEIGHT),
            next_button: Rect::new(
                SCREEN_WIDTH - NAV_BUTTON_WIDTH - BUTTON_MARGIN,
                button_y,
                NAV_BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            toggle_button: Rect::new(
                ((SCREEN_WIDTH - TOGGLE_BUTTON_WIDTH) / 2.0).floor(),
                button_y,
                TOGGLE_BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }
}

impl Layout {
    /// Maps a pointer position to the button under it.
    pub fn action_at(&self, x: f32, y: f32) -> Option<Action> {
        [
            (self.prev_button, Action::Prev),
            (self.next_button, Action::Next),
            (self.toggle_button, Action::Toggle),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(x, y))
        .map(|(_, action)| action)
    }

    /// Baseline of the lowest instruction line, just above the buttons.
    pub fn instruction_base_y(&self) -> f32 {
        self.prev_button.y - BUTTON_MARGIN
    }
}

/// X coordinate that centres a run of `width` points on screen.
pub fn centered_x(width: f32) -> f32 {
    ((SCREEN_WIDTH - width) / 2.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_positions() {
        let layout = Layout::default();

        assert_eq!(layout.prev_button, Rect::new(10.0, 152.0, 70.0, 18.0));
        assert_eq!(layout.next_button, Rect::new(140.0, 152.0, 70.0, 18.0));
        assert_eq!(layout.toggle_button, Rect::new(65.0, 152.0, 90.0, 18.0));
        assert_eq!(layout.instruction_base_y(), 142.0);
    }

    #[test]
    fn test_action_at() {
        let layout = Layout::default();

        assert_eq!(layout.action_at(15.0, 160.0), Some(Action::Prev));
        assert_eq!(layout.action_at(200.0, 160.0), Some(Action::Next));
        assert_eq!(layout.action_at(110.0, 160.0), Some(Action::Toggle));
        assert_eq!(layout.action_at(110.0, 40.0), None);
        assert_eq!(layout.action_at(5.0, 160.0), None);
    }

    #[test]
    fn test_centered_x() {
        assert_eq!(centered_x(20.0), 100.0);
        assert_eq!(centered_x(21.0), 99.0);
    }
}
