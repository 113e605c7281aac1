//! Main application window.
//! Bridges egui to the wordbook core: egui painter as the draw surface, egui
//! textures as the background store, keyboard, pointer and controller as input.

use crate::Config;
use crate::assets::{self, AssetError, AssetStore, Background, DirectoryAssets};
#[cfg(feature = "gamepad")]
use crate::input::GamepadInput;
use crate::input::{self, Bindings};
use crate::models::Deck;
use crate::view::layout::{BUILTIN_GLYPH_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::view::render::builtin_text_width;
use crate::view::{Color, DrawSurface, Flow, Layout, Rect, Typeface, Wordbook};
use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, TextureHandle, TextureOptions};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::path::Path;

const DISPLAY_FONT_SIZE: f32 = 12.0;
const BUILTIN_FONT_SIZE: f32 = 6.5;
#[cfg(feature = "gamepad")]
const GAMEPAD_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

fn color32(color: Color) -> Color32 {
    match color {
        Color::Black => Color32::from_rgb(0x00, 0x00, 0x00),
        Color::Navy => Color32::from_rgb(0x2b, 0x33, 0x5f),
        Color::Purple => Color32::from_rgb(0x7e, 0x20, 0x72),
        Color::Gray => Color32::from_rgb(0x8b, 0x97, 0xb6),
        Color::White => Color32::from_rgb(0xff, 0xff, 0xff),
        Color::Lime => Color32::from_rgb(0x70, 0xc6, 0xa9),
    }
}

/// Background textures uploaded to egui, keyed by asset name.
struct TextureStore {
    ctx: egui::Context,
    files: DirectoryAssets,
    textures: HashMap<String, TextureHandle>,
}

impl TextureStore {
    fn new(ctx: egui::Context, files: DirectoryAssets) -> Self {
        Self {
            ctx,
            files,
            textures: HashMap::new(),
        }
    }
}

impl AssetStore for TextureStore {
    fn exists(&self, name: &str) -> bool {
        self.files.exists(name)
    }

    fn load_background(&mut self, name: &str) -> Result<Background, AssetError> {
        let decoded = self.files.decode(name)?;
        let image = egui::ColorImage::from_rgba_unmultiplied(
            [decoded.width as usize, decoded.height as usize],
            &decoded.rgba,
        );
        let texture = self.ctx.load_texture(name, image, TextureOptions::NEAREST);
        self.textures.insert(name.to_string(), texture);

        Ok(Background {
            name: name.to_string(),
            width: decoded.width,
            height: decoded.height,
        })
    }
}

/// Draws on the background layer in logical screen points.
struct EguiSurface<'a> {
    painter: egui::Painter,
    textures: &'a HashMap<String, TextureHandle>,
    display_font: bool,
}

impl EguiSurface<'_> {
    fn font_id(&self, face: Typeface) -> Option<FontId> {
        match face {
            Typeface::Display if self.display_font => Some(FontId::new(
                DISPLAY_FONT_SIZE,
                FontFamily::Name(assets::DISPLAY_FONT.into()),
            )),
            _ => None,
        }
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self, color: Color) {
        let screen = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(SCREEN_WIDTH, SCREEN_HEIGHT));
        self.painter.rect_filled(screen, 0.0, color32(color));
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        let rect = egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.w, rect.h));
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn text(&mut self, x: f32, y: f32, text: &str, color: Color, face: Typeface) {
        let font_id = self
            .font_id(face)
            .unwrap_or_else(|| FontId::monospace(BUILTIN_FONT_SIZE));
        self.painter.text(
            egui::pos2(x, y),
            egui::Align2::LEFT_TOP,
            text,
            font_id,
            color32(color),
        );
    }

    fn blit(&mut self, x: f32, y: f32, background: &Background) {
        let Some(texture) = self.textures.get(&background.name) else {
            return;
        };
        let rect = egui::Rect::from_min_size(
            egui::pos2(x, y),
            egui::vec2(background.width as f32, background.height as f32),
        );
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        self.painter.image(texture.id(), rect, uv, Color32::WHITE);
    }

    fn text_width(&self, text: &str, face: Typeface) -> f32 {
        match self.font_id(face) {
            Some(font_id) => self
                .painter
                .layout_no_wrap(text.to_owned(), font_id, Color32::WHITE)
                .size()
                .x,
            None => builtin_text_width(text),
        }
    }

    fn text_height(&self, face: Typeface) -> f32 {
        match self.font_id(face) {
            Some(font_id) => self.painter.ctx().fonts(|f| f.row_height(&font_id)),
            None => BUILTIN_GLYPH_HEIGHT,
        }
    }
}

pub struct WordbookApp {
    book: Wordbook<StdRng>,
    textures: TextureStore,
    bindings: Bindings,
    layout: Layout,
    display_font: bool,
    #[cfg(feature = "gamepad")]
    gamepad: Option<GamepadInput>,
}

impl WordbookApp {
    /// Loads the optional assets and picks the first background.
    pub fn new(cc: &eframe::CreationContext<'_>, deck: Deck, config: &Config) -> Self {
        cc.egui_ctx.set_zoom_factor(config.scale);

        let display_font = install_font(&cc.egui_ctx, &config.font_path);

        let mut textures = TextureStore::new(
            cc.egui_ctx.clone(),
            DirectoryAssets::new(&config.asset_dir),
        );
        let mut book = Wordbook::new(deck, config.words_name(), StdRng::from_entropy());
        book.start(&mut textures);

        Self {
            book,
            textures,
            bindings: config.bindings(),
            layout: Layout::default(),
            display_font,
            #[cfg(feature = "gamepad")]
            gamepad: GamepadInput::new(),
        }
    }
}

fn install_font(ctx: &egui::Context, path: &Path) -> bool {
    match assets::load_font(path) {
        Ok(data) => {
            assets::install_display_font(ctx, data);
            info!("Loaded display font '{}'", path.display());
            true
        }
        Err(e) => {
            warn!("{}; using the built-in font", e);
            false
        }
    }
}

impl eframe::App for WordbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[allow(unused_mut)]
        let mut frame_input = input::poll_keyboard(ctx, &self.bindings, &self.layout);

        #[cfg(feature = "gamepad")]
        if let Some(gamepad) = self.gamepad.as_mut() {
            gamepad.poll(&self.bindings, &mut frame_input);
            ctx.request_repaint_after(GAMEPAD_POLL_INTERVAL);
        }

        if self.book.update(&frame_input, &mut self.textures) == Flow::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut surface = EguiSurface {
            painter: ctx.layer_painter(egui::LayerId::background()),
            textures: &self.textures.textures,
            display_font: self.display_font,
        };
        self.book.render(&mut surface);
    }
}
