//! Drawing of one frame onto an abstract surface.

use super::Wordbook;
use super::layout::{
    BACK_Y, BUILTIN_GLYPH_HEIGHT, BUILTIN_GLYPH_WIDTH, FRONT_Y, LINE_SPACING, Layout,
    PROGRESS_Y, Rect, SCREEN_HEIGHT, SCREEN_WIDTH, centered_x,
};
use crate::assets::Background;

const MASK: &str = "**********";
const PREV_LABEL: &str = "Prev (C/XBtn)";
const NEXT_LABEL: &str = "Next (X/BBtn)";
const SHOW_LABEL: &str = "Show (Z/ABtn)";
const HIDE_LABEL: &str = "Hide (Z/ABtn)";

/// Each instruction line with the shorter text used when the full one does not fit.
const INSTRUCTIONS: [(&str, &str); 3] = [
    (
        "L/R or C/X (Key) | D-Pad L/R or X (Pad): Word",
        "Arrows/C/X | D-Pad/XBtn: Word",
    ),
    (
        "Z (Key) | A or D-Pad Down (Pad): Meaning",
        "Z | ABtn/D-Down: Meaning",
    ),
    ("Q (Key): Quit", "Q (Key): Quit"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Navy,
    Purple,
    Gray,
    White,
    Lime,
}

const BACKGROUND_COLOR: Color = Color::Gray;
const TEXT_COLOR: Color = Color::White;
const BORDER_COLOR: Color = Color::Navy;
const BUTTON_COLOR: Color = Color::Purple;
const BUTTON_TEXT_COLOR: Color = Color::White;
const BUTTON_BORDER_COLOR: Color = Color::Black;
const INSTRUCTION_COLOR: Color = Color::Lime;
const INSTRUCTION_BORDER_COLOR: Color = Color::Black;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Typeface {
    /// The loaded display font, or the built-in glyphs when there is none.
    Display,
    /// Always the built-in fixed-size glyphs.
    Builtin,
}

pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn rect(&mut self, rect: Rect, color: Color);
    fn text(&mut self, x: f32, y: f32, text: &str, color: Color, face: Typeface);
    fn blit(&mut self, x: f32, y: f32, background: &Background);
    fn text_width(&self, text: &str, face: Typeface) -> f32;
    fn text_height(&self, face: Typeface) -> f32;
}

pub fn builtin_text_width(text: &str) -> f32 {
    text.chars().count() as f32 * BUILTIN_GLYPH_WIDTH
}

/// Draws `text` with a one-point outline in `border`.
pub fn draw_text_with_border(
    surface: &mut dyn DrawSurface,
    x: f32,
    y: f32,
    text: &str,
    color: Color,
    border: Color,
    face: Typeface,
) {
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx != 0 || dy != 0 {
                surface.text(x + dx as f32, y + dy as f32, text, border, face);
            }
        }
    }
    surface.text(x, y, text, color, face);
}

fn draw_centered_text(surface: &mut dyn DrawSurface, y: f32, text: &str, face: Typeface) {
    let x = centered_x(surface.text_width(text, face));
    draw_text_with_border(surface, x, y, text, TEXT_COLOR, BORDER_COLOR, face);
}

fn draw_button(surface: &mut dyn DrawSurface, rect: Rect, label: &str) {
    surface.rect(rect, BUTTON_COLOR);

    // Button rects are sized for the built-in glyphs.
    let face = Typeface::Builtin;
    let text_w = surface.text_width(label, face);
    let text_h = surface.text_height(face);
    let x = rect.x + ((rect.w - text_w) / 2.0).floor();
    let y = rect.y + ((rect.h - text_h) / 2.0).floor();
    draw_text_with_border(
        surface,
        x,
        y,
        label,
        BUTTON_TEXT_COLOR,
        BUTTON_BORDER_COLOR,
        face,
    );
}

fn draw_background(surface: &mut dyn DrawSurface, background: Option<&Background>) {
    surface.clear(BACKGROUND_COLOR);
    if let Some(background) = background {
        let x = ((SCREEN_WIDTH - background.width as f32) / 2.0).floor();
        let y = ((SCREEN_HEIGHT - background.height as f32) / 2.0).floor();
        surface.blit(x, y, background);
    }
}

impl<R> Wordbook<R> {
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        draw_background(surface, self.view.background.as_ref());

        let Some(pair) = self.deck.current() else {
            self.draw_no_data(surface);
            return;
        };

        draw_centered_text(surface, FRONT_Y, pair.front(), Typeface::Display);
        let back = if self.view.revealed { pair.back() } else { MASK };
        draw_centered_text(surface, BACK_Y, back, Typeface::Display);

        let layout = Layout::default();
        draw_button(surface, layout.prev_button, PREV_LABEL);
        draw_button(surface, layout.next_button, NEXT_LABEL);
        let toggle_label = if self.view.revealed {
            HIDE_LABEL
        } else {
            SHOW_LABEL
        };
        draw_button(surface, layout.toggle_button, toggle_label);

        let progress = format!(
            "{} / {}",
            self.deck.position().unwrap_or(0),
            self.deck.size()
        );
        draw_centered_text(surface, PROGRESS_Y, &progress, Typeface::Builtin);

        self.draw_instructions(surface, &layout);
    }

    fn draw_instructions(&self, surface: &mut dyn DrawSurface, layout: &Layout) {
        let face = Typeface::Builtin;
        let line_height = surface.text_height(face) + LINE_SPACING;
        let base_y = layout.instruction_base_y();
        let max_width = SCREEN_WIDTH - 10.0;

        for (i, &(full, short)) in INSTRUCTIONS.iter().enumerate() {
            let mut text = full;
            if surface.text_width(text, face) > max_width {
                text = short;
            }
            let x = centered_x(surface.text_width(text, face));
            let lines_below = (INSTRUCTIONS.len() - 1 - i) as f32;
            draw_text_with_border(
                surface,
                x,
                base_y - line_height * lines_below,
                text,
                INSTRUCTION_COLOR,
                INSTRUCTION_BORDER_COLOR,
                face,
            );
        }
    }

    fn draw_no_data(&self, surface: &mut dyn DrawSurface) {
        let lines = [
            format!("'{}' is missing or", self.source_name),
            "has no valid words.".to_string(),
            " ".to_string(),
            "Q: Quit".to_string(),
        ];
        let face = Typeface::Builtin;
        let line_height = BUILTIN_GLYPH_HEIGHT + LINE_SPACING;
        let mut y = (SCREEN_HEIGHT / 2.0 - (lines.len() as f32 * line_height) / 2.0).floor();
        for line in &lines {
            draw_text_with_border(
                surface,
                centered_x(builtin_text_width(line)),
                y,
                line,
                TEXT_COLOR,
                BORDER_COLOR,
                face,
            );
            y += line_height;
        }
    }
}
