//! Event loop: keys in, manager operations out

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::warn;
use ratatui::DefaultTerminal;
use rtrb::Consumer;
use std::time::Duration;

use city_tones::{manager::ToneLayerManager, tone::RingToneGenerator};

use crate::ui::{self, spectrum::SpectrumAnalyzer, View};

/// Audio visualisation window
pub const VIS_BUFFER_SIZE: usize = 1024;

pub struct App {
    manager: ToneLayerManager<RingToneGenerator>,
    /// Mono samples tapped from the audio thread
    tap_rx: Consumer<f32>,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    sample_rate: f32,
    /// City under the cursor
    cursor: usize,
    status: String,
    should_quit: bool,
}

impl App {
    pub fn new(
        manager: ToneLayerManager<RingToneGenerator>,
        tap_rx: Consumer<f32>,
        sample_rate: f32,
    ) -> Self {
        Self {
            manager,
            tap_rx,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            sample_rate,
            cursor: 0,
            status: "Select a city".to_string(),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.manager.generator_mut().flush();
            self.poll_audio();

            terminal.draw(|frame| {
                let view = View {
                    manager: &self.manager,
                    cursor: self.cursor,
                    status: &self.status,
                    audio: &self.audio_buffer,
                    spectrum: self.spectrum.data(),
                    sample_rate: self.sample_rate,
                };
                ui::render(frame, &view);
            })?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the last VIS_BUFFER_SIZE tapped samples
    fn poll_audio(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.tap_rx.pop() {
            self.audio_buffer.push(sample);
            received = true;
        }

        if received {
            if self.audio_buffer.len() > VIS_BUFFER_SIZE {
                let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
                self.audio_buffer.drain(0..excess);
            }
            self.spectrum.update(&self.audio_buffer);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let city_count = self.manager.catalog().cities().len();

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(city_count.saturating_sub(1));
            }
            KeyCode::Enter => self.select_city(),
            KeyCode::Char(' ') => {
                let result = self.manager.toggle_playback();
                self.report(result);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let layer = self
                    .manager
                    .catalog()
                    .layers()
                    .get(index)
                    .map(|l| l.id.clone());
                if let Some(id) = layer {
                    let result = self.manager.toggle_layer(&id).map(|_| ());
                    self.report(result);
                }
            }
            _ => {}
        }
    }

    fn select_city(&mut self) {
        let Some(city) = self.manager.catalog().cities().get(self.cursor) else {
            return;
        };
        let (id, name) = (city.id, city.name.clone());

        let result = self.manager.select_and_play(id);
        if result.is_ok() {
            self.status = format!("Now playing: {name}");
        }
        self.report(result);
    }

    fn report(&mut self, result: city_tones::Result<()>) {
        if let Err(err) = result {
            warn!("{err}");
            self.status = err.to_string();
        }
    }
}
