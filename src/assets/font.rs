//! Optional display font. Falls back to egui's built-in glyphs when absent.

use super::AssetError;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the egui font family the display font is registered under.
pub const DISPLAY_FONT: &str = "wordbook-display";

pub fn load_font(path: &Path) -> Result<FontData, AssetError> {
    let name = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AssetError::Missing(name.clone()),
        _ => AssetError::Io {
            name: name.clone(),
            source,
        },
    })?;
    Ok(FontData::from_owned(bytes))
}

/// Registers `data` as the `DISPLAY_FONT` family. The default proportional
/// fonts stay behind it so glyphs missing from the file still render.
pub fn install_display_font(ctx: &egui::Context, data: FontData) {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(DISPLAY_FONT.to_owned(), data);

    let mut family = vec![DISPLAY_FONT.to_owned()];
    if let Some(fallback) = fonts.families.get(&FontFamily::Proportional) {
        family.extend(fallback.iter().cloned());
    }
    fonts
        .families
        .insert(FontFamily::Name(DISPLAY_FONT.into()), family);

    ctx.set_fonts(fonts);
}
