//! citytones - Sound of the City in the terminal
//!
//! Run with: cargo run
//!
//! Environment:
//!   CITYTONES_LAYERS  comma-separated layer ids enabled at start (default: all)
//!   CITYTONES_LOG     log file path (default: <tmp>/citytones.log)
//!   RUST_LOG          log filter (default: info)

mod app;
mod ui;

use std::{fs::File, path::PathBuf};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use env_logger::{Env, Target};
use log::info;
use rtrb::RingBuffer;

use app::App;
use city_tones::{
    catalog::Catalog,
    config::{ManagerConfig, MixerConfig},
    io::AudioOutput,
    manager::ToneLayerManager,
    tone::tone_channel,
    DEFAULT_SAMPLE_RATE,
};

/// Capacity in visualisation blocks for the audio -> UI tap
const TAP_RING_BLOCKS: usize = 16;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    info!("citytones v{}", env!("CARGO_PKG_VERSION"));

    let mut config = ManagerConfig::default();
    if let Ok(list) = std::env::var("CITYTONES_LAYERS") {
        config = config.initial_layers_from_list(&list);
    }

    // --- Audio ---
    let (generator, mixer) = tone_channel(DEFAULT_SAMPLE_RATE, MixerConfig::default());
    let (tap_tx, tap_rx) = RingBuffer::<f32>::new(app::VIS_BUFFER_SIZE * TAP_RING_BLOCKS);
    let output = AudioOutput::start(mixer, Some(tap_tx)).wrap_err("failed to start audio")?;

    let catalog = Catalog::builtin().wrap_err("invalid built-in catalog")?;
    let manager = ToneLayerManager::new(catalog, generator, &config)
        .wrap_err("invalid CITYTONES_LAYERS")?;

    // --- UI ---
    let mut app = App::new(manager, tap_rx, output.sample_rate());
    let mut terminal = ratatui::init();
    let res = app.run(&mut terminal);
    ratatui::restore();

    // Stop tones before the stream goes away
    drop(app);
    drop(output);
    res
}

/// The terminal belongs to the TUI, so logs go to a file
fn init_logging() -> EyreResult<()> {
    let path = std::env::var_os("CITYTONES_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("citytones.log"));
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
