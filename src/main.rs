mod config;
mod termion_wrapper;
mod tui;
mod weather;

use config::{AppConfig, DEFAULT_CONFIG_FILE};
use termion_wrapper::TermionWrapper;
use tui::{ColorScheme, StdioPrinter, Tui};
use weather::WeatherData;

use crossbeam_channel::unbounded;
use flexi_logger::Logger;
use log::{info, warn};
use termion::event::Key;

use std::env;
use std::rc::Rc;

/// Messages from the input thread to the UI.
#[derive(Debug)]
pub enum UiMessage {
    Key(Key),
    Exit,
}

fn main() -> Result<(), failure::Error> {
    let config_file = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let (config, config_error) = match AppConfig::load(&config_file) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // The terminal belongs to the UI, so log to a file
    let _logger = Logger::with_str(&config.log_spec)
        .log_to_file()
        .directory(config.log_directory.clone())
        .start()?;

    match config_error {
        Some(ref err) if err.is_not_found() => info!("No config file {}, using defaults", config_file),
        Some(err) => warn!("{}, using defaults", err),
        None => info!("Loaded config from {}", config_file),
    }

    let colors = match ColorScheme::from_name(&config.color_scheme) {
        Some(colors) => colors,
        None => {
            warn!("Unknown color scheme {:?}, using light", config.color_scheme);
            ColorScheme::light()
        }
    };

    let (to_ui_sender, ui_receiver) = unbounded::<UiMessage>();

    info!("Setting up UI...");
    let weather = Rc::new(WeatherData::new());
    let termion = TermionWrapper::new()?;
    let mut tui = Tui::new(ui_receiver, weather, &config.initial, colors, Box::new(StdioPrinter::new()));

    // The key reader stays blocked on stdin, it ends with the process
    let _key_reader = TermionWrapper::run(to_ui_sender);
    tui.run();

    drop(termion);
    info!("Weather station stopped");
    Ok(())
}
