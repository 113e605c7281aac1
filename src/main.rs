mod app;
use wordbook::*;

use app::WordbookApp;
use clap::Parser;
use log::{info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wordbook", about = "Single-screen flashcard viewer")]
struct Args {
    /// JSON config file (defaults to ./wordbook.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Two-column CSV word file
    #[arg(short, long)]
    words: Option<PathBuf>,
    /// Directory holding the 01.png..10.png backgrounds
    #[arg(short, long)]
    assets: Option<PathBuf>,
    /// TTF/OTF display font
    #[arg(long)]
    font: Option<PathBuf>,
    /// Window scale factor
    #[arg(long)]
    scale: Option<f32>,
    /// error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
    /// Also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(words) = &self.words {
            config.words_path = words.clone();
        }
        if let Some(assets) = &self.assets {
            config.asset_dir = assets.clone();
        }
        if let Some(font) = &self.font {
            config.font_path = font.clone();
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}

/// Returns the error from creating `log_file`, if any, so it can be logged
/// once the terminal logger is up.
fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Option<io::Error> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    let mut file_error = None;
    if let Some(path) = log_file {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, file)),
            Err(e) => file_error = Some(e),
        }
    }
    let _ = CombinedLogger::init(loggers);
    file_error
}

fn key_names(bindings: &input::Bindings, action: Action) -> String {
    bindings
        .keys_for(action)
        .iter()
        .map(|key| key.name())
        .collect::<Vec<_>>()
        .join("/")
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let (mut config, config_error) = match Config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    args.apply(&mut config);
    let config = config.normalized();

    if let Some(e) = init_logging(config.log_level(), args.log_file.as_deref()) {
        if let Some(path) = &args.log_file {
            warn!("Could not create log file '{}': {}", path.display(), e);
        }
    }
    if let Some(e) = config_error {
        warn!("{}; using default settings", e);
    }

    info!("Wordbook");
    info!("Words are read from '{}'", config.words_path.display());
    info!(
        "Backgrounds 01.png..10.png are picked at random from '{}' on every word change",
        config.asset_dir.display()
    );
    let bindings = config.bindings();
    info!("Controls (keyboard | controller):");
    info!("  previous word: {} | D-Pad Left / X", key_names(&bindings, Action::Prev));
    info!("  next word:     {} | D-Pad Right / B", key_names(&bindings, Action::Next));
    info!("  show/hide:     {} | A / D-Pad Down", key_names(&bindings, Action::Toggle));
    info!("  quit:          {}", key_names(&bindings, Action::Quit));

    let deck = loader::load_deck(&config.words_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wordbook")
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Wordbook",
        options,
        Box::new(move |cc| Ok(Box::new(WordbookApp::new(cc, deck, &config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_in_missing_directory_is_reported() {
        let path = Path::new("nonexistent_log_dir_xyz123/wordbook.log");

        let error = init_logging(LevelFilter::Off, Some(path));
        assert!(error.is_some());
        assert!(!path.exists());
    }

    #[test]
    fn test_key_names_follow_rebinds() {
        let mut bindings = input::Bindings::default();
        assert_eq!(key_names(&bindings, Action::Prev), "Left/A/C");

        bindings.rebind_keys(Action::Quit, &["Escape".to_string(), "Q".to_string()]);
        assert_eq!(key_names(&bindings, Action::Quit), "Escape/Q");
    }
}
